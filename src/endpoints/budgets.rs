//! Budget endpoints

use super::Endpoint;
use crate::models::{BudgetDeletion, BudgetDraft};
use crate::services::SpendeeClient;
use crate::utils::error::SpendeeResult;
use chrono::{Local, NaiveDate};
use serde_json::Value;
use tracing::debug;

impl SpendeeClient {
    pub async fn get_budgets(&self) -> SpendeeResult<Value> {
        self.call_empty(Endpoint::GetBudgets).await
    }

    /// Create a budget, resolving unset dates against today's local date
    pub async fn create_budget(&self, budget: BudgetDraft) -> SpendeeResult<Value> {
        self.create_budget_on(budget, today()).await
    }

    /// Create a budget, resolving unset dates against `today`
    pub async fn create_budget_on(&self, budget: BudgetDraft, today: NaiveDate) -> SpendeeResult<Value> {
        let body = budget.into_request(None, today);
        debug!("Creating budget '{}' ({:?})", body.name, body.period);
        self.call(Endpoint::CreateBudget, Some(&body)).await
    }

    /// Replace the settings of budget `id`
    pub async fn edit_budget(&self, id: i64, budget: BudgetDraft) -> SpendeeResult<Value> {
        self.edit_budget_on(id, budget, today()).await
    }

    pub async fn edit_budget_on(&self, id: i64, budget: BudgetDraft, today: NaiveDate) -> SpendeeResult<Value> {
        let body = budget.into_request(Some(id), today);
        self.call(Endpoint::EditBudget, Some(&body)).await
    }

    /// Delete several budgets at once
    pub async fn delete_budget(&self, budgets: Vec<i64>) -> SpendeeResult<Value> {
        self.call(Endpoint::DeleteBudget, Some(&BudgetDeletion { budgets }))
            .await
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
