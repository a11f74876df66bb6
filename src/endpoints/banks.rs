//! Bank connection endpoints

use super::Endpoint;
use crate::models::{AccountSelection, BankConnection, SyncRefresh};
use crate::services::{ApiRequest, SpendeeClient};
use crate::utils::error::SpendeeResult;
use serde_json::Value;
use tracing::info;

impl SpendeeClient {
    /// All connected bank logins
    pub async fn banks_get_all(&self) -> SpendeeResult<Value> {
        self.call_empty(Endpoint::BanksGetAll).await
    }

    /// Provider and accounts of one bank login
    pub async fn bank_login_detail(&self, login_id: i64, include_bank: bool) -> SpendeeResult<Value> {
        let request = ApiRequest::for_endpoint(Endpoint::BankLoginDetail)
            .query_param("bankLoginId", login_id)
            .query_param("includeBank", u8::from(include_bank));
        self.execute(request).await
    }

    /// Trigger a bank sync for a wallet; the result holds the URL to follow
    pub async fn sync_refresh(&self, login_id: i64, wallet_id: i64) -> SpendeeResult<Value> {
        info!("Refreshing bank login {} for wallet {}", login_id, wallet_id);
        let body = SyncRefresh::for_wallet(login_id, wallet_id);
        self.call(Endpoint::SyncRefresh, Some(&body)).await
    }

    /// Bank providers available in a country (two letter code)
    pub async fn providers(&self, country: &str) -> SpendeeResult<Value> {
        self.call_with_query(
            Endpoint::Providers,
            vec![("country".to_string(), country.to_string())],
        )
        .await
    }

    /// Start connecting a bank; the result holds the login form URL
    pub async fn connect_bank_account(&self, connection: &BankConnection) -> SpendeeResult<Value> {
        self.call(Endpoint::ConnectBankAccount, Some(connection)).await
    }

    /// Make the chosen sub-accounts of a connected bank visible
    pub async fn choose_bank_account(&self, accounts: &[i64]) -> SpendeeResult<Value> {
        let body = AccountSelection::visible(accounts);
        self.call(Endpoint::ChooseBankAccount, Some(&body)).await
    }
}
