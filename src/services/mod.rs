//! Service layer module
//!
//! Contains the authenticated request gateway

pub mod client;

pub use client::{reduce_response, ApiRequest, SpendeeClient, AUTH_HEADER, DEFAULT_QUERY};
