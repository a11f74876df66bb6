//! Spendee API client library
//!
//! Async client for the Spendee personal finance API. A [`SpendeeClient`]
//! exposes one method per remote endpoint; every call goes through a single
//! gateway that attaches the `api-uuid` token, unwraps the response envelope
//! and maps failures to [`SpendeeError`].
//!
//! ```no_run
//! use spendee::{models::TransactionPage, SpendeeClient};
//!
//! # async fn run() -> spendee::SpendeeResult<()> {
//! let client = SpendeeClient::new("fry@planetexpress.com", "slurm")?;
//! let wallets = client.wallet_get_all().await?;
//! let transactions = client.wallet_get_transactions(TransactionPage::default()).await?;
//! println!("{} wallets, {}", wallets, transactions);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod endpoints;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use endpoints::{Endpoint, EndpointDescriptor, HttpMethod};
pub use services::{ApiRequest, SpendeeClient};
pub use utils::error::{RawResponse, SpendeeError, SpendeeResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
