//! Reference data endpoints

use super::Endpoint;
use crate::services::SpendeeClient;
use crate::utils::error::SpendeeResult;
use serde_json::Value;

impl SpendeeClient {
    /// Country codes and names
    pub async fn countries(&self) -> SpendeeResult<Value> {
        self.call_empty(Endpoint::Countries).await
    }

    /// Scheduled and repeating transactions
    pub async fn get_transaction_templates(&self) -> SpendeeResult<Value> {
        self.call_empty(Endpoint::GetTransactionTemplates).await
    }
}
