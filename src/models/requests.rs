//! Request bodies
//!
//! Wire shapes of the JSON bodies sent to the Spendee endpoints

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Default category icon color
pub const DEFAULT_CATEGORY_COLOR: &str = "#f5534b";

/// Default OAuth return URL when connecting a bank
pub const DEFAULT_BANK_OAUTH_RETURN_URL: &str =
    "https://app.spendee.com/dashboard/connect-bank/oauth-return";

/// `user-login` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub device_uuid: String,
}

/// `user-registration` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub email: String,
    pub password: String,
    pub categories_version: u32,
    pub with_categories: bool,
    pub device_uuid: String,
}

impl RegistrationRequest {
    /// Registration with the defaults the web app uses
    pub fn new(email: impl Into<String>, password: impl Into<String>, device_uuid: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            categories_version: 2,
            with_categories: true,
            device_uuid: device_uuid.into(),
        }
    }
}

/// Language entry of a profile update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    /// Display label, e.g. "English"
    pub label: String,
    /// Locale code, e.g. "en-US"
    pub value: String,
}

/// `user-update-profile` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// Profile ID to update
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    /// male/female
    pub gender: String,
    /// Sent as `YYYY-MM-DD`
    pub birth_date: NaiveDate,
    /// Currency code, e.g. EUR
    pub currency: String,
    /// Photo URL
    pub photo: String,
    pub language: Language,
}

/// `wallet-get-transactions` body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPage {
    pub offset: u64,
    pub limit: u64,
}

impl Default for TransactionPage {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 10_000,
        }
    }
}

/// `wallet-create` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWallet {
    pub name: String,
    pub starting_balance: f64,
    pub currency: String,
    /// Position among the user's wallets
    pub order: i64,
}

impl NewWallet {
    pub fn new(name: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            starting_balance: 0.0,
            currency: currency.into(),
            order: 1,
        }
    }

    pub fn starting_balance(mut self, starting_balance: f64) -> Self {
        self.starting_balance = starting_balance;
        self
    }

    pub fn order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }
}

/// `wallet-update` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletUpdate {
    pub id: i64,
    pub name: String,
    pub starting_balance: f64,
    pub currency: String,
}

/// Body of calls that only address a wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletRef {
    pub wallet_id: i64,
}

/// `wallet-invite-to-share` and `wallet-unshare-user` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSharing {
    pub emails: Vec<String>,
    pub wallet_id: i64,
}

/// Category kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    #[default]
    Expense,
    Income,
}

/// Per-wallet placement of a new category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPlacement {
    pub wallet_id: Option<i64>,
    /// 1 when visible, 0 otherwise
    pub visible: u8,
    pub position: i64,
}

/// `wallet-create-category` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    /// Icon ID, see `category-image-ids`
    pub image_id: i64,
    pub color: String,
    pub status: String,
    pub wallets_settings: Vec<CategoryPlacement>,
}

impl NewCategory {
    /// Visible expense category at position 1 with the default icon and color
    pub fn new(name: impl Into<String>, wallet_id: Option<i64>) -> Self {
        Self {
            name: name.into(),
            kind: CategoryKind::Expense,
            image_id: 1,
            color: DEFAULT_CATEGORY_COLOR.to_string(),
            status: "active".to_string(),
            wallets_settings: vec![CategoryPlacement {
                wallet_id,
                visible: 1,
                position: 1,
            }],
        }
    }

    pub fn kind(mut self, kind: CategoryKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn image_id(mut self, image_id: i64) -> Self {
        self.image_id = image_id;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        for placement in &mut self.wallets_settings {
            placement.visible = u8::from(visible);
        }
        self
    }

    pub fn position(mut self, position: i64) -> Self {
        for placement in &mut self.wallets_settings {
            placement.position = position;
        }
        self
    }
}

/// Per-wallet placement sent with a category update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPlacementUpdate {
    pub position: i64,
    pub visible: bool,
    pub wallet_id: i64,
}

/// `wallet-update-category` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub id: i64,
    pub wallet_id: i64,
    pub name: String,
    pub image_id: i64,
    pub color: String,
    pub wallets_settings: Vec<CategoryPlacementUpdate>,
}

impl CategoryUpdate {
    pub fn new(id: i64, wallet_id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            wallet_id,
            name: name.into(),
            image_id: 1,
            color: DEFAULT_CATEGORY_COLOR.to_string(),
            wallets_settings: vec![CategoryPlacementUpdate {
                position: 1,
                visible: true,
                wallet_id,
            }],
        }
    }

    pub fn image_id(mut self, image_id: i64) -> Self {
        self.image_id = image_id;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        for placement in &mut self.wallets_settings {
            placement.visible = visible;
        }
        self
    }

    pub fn position(mut self, position: i64) -> Self {
        for placement in &mut self.wallets_settings {
            placement.position = position;
        }
        self
    }
}

/// `wallet-delete-category` body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub category_id: i64,
}

/// Budget period
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Once,
    Daily,
    Weekly,
    Biweekly,
    #[default]
    Monthly,
    Yearly,
}

/// Budget parameters shared by `create-budget` and `edit-budget`
///
/// Dates left unset are resolved by [`BudgetDraft::into_request`]: the start
/// defaults to the given day, and a one-off budget ends four weeks later.
#[derive(Debug, Clone)]
pub struct BudgetDraft {
    pub name: String,
    pub limit: f64,
    pub currency: String,
    pub wallets: Vec<i64>,
    pub categories: Vec<i64>,
    pub users: Vec<i64>,
    pub position: i64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub all_categories_selected: bool,
    pub all_users_selected: bool,
    pub all_wallets_selected: bool,
    pub period: BudgetPeriod,
    pub offline: bool,
    pub notification: bool,
}

impl BudgetDraft {
    pub fn new(name: impl Into<String>, limit: f64, currency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            limit,
            currency: currency.into(),
            wallets: Vec::new(),
            categories: Vec::new(),
            users: Vec::new(),
            position: 1,
            start_date: None,
            end_date: None,
            status: "active".to_string(),
            all_categories_selected: true,
            all_users_selected: true,
            all_wallets_selected: true,
            period: BudgetPeriod::Monthly,
            offline: false,
            notification: true,
        }
    }

    pub fn wallets(mut self, wallets: Vec<i64>) -> Self {
        self.wallets = wallets;
        self
    }

    pub fn categories(mut self, categories: Vec<i64>) -> Self {
        self.categories = categories;
        self
    }

    pub fn users(mut self, users: Vec<i64>) -> Self {
        self.users = users;
        self
    }

    pub fn period(mut self, period: BudgetPeriod) -> Self {
        self.period = period;
        self
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn position(mut self, position: i64) -> Self {
        self.position = position;
        self
    }

    /// Restrict the budget to the listed categories only
    pub fn only_selected_categories(mut self) -> Self {
        self.all_categories_selected = false;
        self
    }

    pub fn only_selected_wallets(mut self) -> Self {
        self.all_wallets_selected = false;
        self
    }

    pub fn only_selected_users(mut self) -> Self {
        self.all_users_selected = false;
        self
    }

    pub fn notification(mut self, notification: bool) -> Self {
        self.notification = notification;
        self
    }

    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Resolve default dates against `today` and build the wire body
    pub fn into_request(self, id: Option<i64>, today: NaiveDate) -> BudgetRequest {
        let start_date = self.start_date.unwrap_or(today);
        let end_date = match (self.end_date, self.period) {
            (Some(end_date), _) => Some(end_date),
            (None, BudgetPeriod::Once) => Some(today + Duration::weeks(4)),
            (None, _) => None,
        };

        BudgetRequest {
            id,
            offline: self.offline,
            name: self.name,
            limit: self.limit,
            currency: self.currency,
            wallets: self.wallets,
            categories: self.categories,
            users: self.users,
            period: self.period,
            start_date,
            end_date,
            all_categories_selected: u8::from(self.all_categories_selected),
            all_users_selected: u8::from(self.all_users_selected),
            all_wallets_selected: u8::from(self.all_wallets_selected),
            status: self.status,
            notification: self.notification,
            position: self.position,
        }
    }
}

/// `create-budget` / `edit-budget` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRequest {
    /// Present only when editing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub offline: bool,
    pub name: String,
    pub limit: f64,
    pub currency: String,
    pub wallets: Vec<i64>,
    pub categories: Vec<i64>,
    pub users: Vec<i64>,
    pub period: BudgetPeriod,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub all_categories_selected: u8,
    pub all_users_selected: u8,
    pub all_wallets_selected: u8,
    pub status: String,
    pub notification: bool,
    pub position: i64,
}

/// `delete-budget` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetDeletion {
    pub budgets: Vec<i64>,
}

/// `logins/refresh` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRefresh {
    pub login_id: i64,
    #[serde(rename = "oAuthReturnUrl")]
    pub oauth_return_url: String,
}

impl SyncRefresh {
    /// Refresh request returning to the wallet's sync page
    pub fn for_wallet(login_id: i64, wallet_id: i64) -> Self {
        Self {
            login_id,
            oauth_return_url: format!(
                "https://app.spendee.com/wallet/{}/transactions/sync-account/oauth-return",
                wallet_id
            ),
        }
    }
}

/// `url` body, starts a bank connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankConnection {
    pub provider_code: String,
    pub oauth_return_url: String,
    pub server_account_picker: bool,
}

impl BankConnection {
    pub fn new(provider_code: impl Into<String>) -> Self {
        Self {
            provider_code: provider_code.into(),
            oauth_return_url: DEFAULT_BANK_OAUTH_RETURN_URL.to_string(),
            server_account_picker: false,
        }
    }
}

/// One account entry of `visible`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountVisibility {
    pub id: i64,
    pub is_visible: bool,
}

/// `visible` body, picks the sub-accounts of a connected bank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSelection {
    pub accounts: Vec<AccountVisibility>,
}

impl AccountSelection {
    /// Mark every listed account visible
    pub fn visible(accounts: &[i64]) -> Self {
        Self {
            accounts: accounts
                .iter()
                .map(|&id| AccountVisibility { id, is_visible: true })
                .collect(),
        }
    }
}
