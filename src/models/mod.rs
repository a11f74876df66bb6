//! Data models module
//!
//! Defines the response envelope and the request/response bodies of the Spendee API

pub mod envelope;
pub mod requests;
pub mod responses;

pub use envelope::{ResponseEnvelope, SUCCESS_STATUS};
pub use requests::*;
pub use responses::LoginResult;
