//! Wallet and transaction endpoints

use super::Endpoint;
use crate::models::{NewWallet, TransactionPage, WalletRef, WalletSharing, WalletUpdate};
use crate::services::SpendeeClient;
use crate::utils::error::SpendeeResult;
use serde_json::Value;
use tracing::debug;

impl SpendeeClient {
    /// All wallets of the user, including shared ones
    pub async fn wallet_get_all(&self) -> SpendeeResult<Value> {
        self.call_empty(Endpoint::WalletGetAll).await
    }

    /// One page of transactions; `TransactionPage::default()` asks for the first 10000
    pub async fn wallet_get_transactions(&self, page: TransactionPage) -> SpendeeResult<Value> {
        debug!("Fetching transactions offset={} limit={}", page.offset, page.limit);
        self.call(Endpoint::WalletGetTransactions, Some(&page)).await
    }

    pub async fn wallet_create(&self, wallet: &NewWallet) -> SpendeeResult<Value> {
        self.call(Endpoint::WalletCreate, Some(wallet)).await
    }

    /// Returns `true` when the wallet was updated
    pub async fn wallet_update(&self, update: &WalletUpdate) -> SpendeeResult<Value> {
        self.call(Endpoint::WalletUpdate, Some(update)).await
    }

    /// Returns `true` when the wallet was deleted
    pub async fn wallet_delete(&self, wallet_id: i64) -> SpendeeResult<Value> {
        self.call(Endpoint::WalletDelete, Some(&WalletRef { wallet_id }))
            .await
    }

    /// Invite the given addresses to share a wallet
    pub async fn wallet_invite_to_share(&self, wallet_id: i64, emails: Vec<String>) -> SpendeeResult<Value> {
        let body = WalletSharing { emails, wallet_id };
        self.call(Endpoint::WalletInviteToShare, Some(&body)).await
    }

    /// Withdraw wallet invitations for the given addresses
    pub async fn wallet_unshare_user(&self, wallet_id: i64, emails: Vec<String>) -> SpendeeResult<Value> {
        let body = WalletSharing { emails, wallet_id };
        self.call(Endpoint::WalletUnshareUser, Some(&body)).await
    }
}
