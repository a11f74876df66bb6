//! Category endpoints

use super::Endpoint;
use crate::models::{CategoryRef, CategoryUpdate, NewCategory};
use crate::services::SpendeeClient;
use crate::utils::error::SpendeeResult;
use serde_json::Value;

impl SpendeeClient {
    /// All user defined categories with their per-wallet settings
    pub async fn get_all_user_categories(&self) -> SpendeeResult<Value> {
        self.call_empty(Endpoint::GetAllUserCategories).await
    }

    /// Create a category; the result is the new category ID
    pub async fn wallet_create_category(&self, category: &NewCategory) -> SpendeeResult<Value> {
        self.call(Endpoint::WalletCreateCategory, Some(category)).await
    }

    pub async fn wallet_delete_category(&self, category_id: i64) -> SpendeeResult<Value> {
        self.call(Endpoint::WalletDeleteCategory, Some(&CategoryRef { category_id }))
            .await
    }

    pub async fn wallet_update_category(&self, update: &CategoryUpdate) -> SpendeeResult<Value> {
        self.call(Endpoint::WalletUpdateCategory, Some(update)).await
    }

    /// IDs usable as `image_id` of a category
    pub async fn category_image_ids(&self) -> SpendeeResult<Value> {
        self.call_empty(Endpoint::CategoryImageIds).await
    }
}
