//! Endpoint registry
//!
//! Every remote operation is described once here (path, verb, API version);
//! the per-area modules build request bodies and delegate to the gateway.

pub mod banks;
pub mod budgets;
pub mod categories;
pub mod reference;
pub mod user;
pub mod wallets;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// HTTP verbs used by the Spendee API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one remote operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// Path segment appended after the version
    pub path: &'static str,
    pub method: HttpMethod,
    /// API version tag, e.g. "v1.4"
    pub version: &'static str,
}

impl EndpointDescriptor {
    const fn new(method: HttpMethod, version: &'static str, path: &'static str) -> Self {
        Self { path, method, version }
    }
}

/// Path of the login endpoint
pub const LOGIN_PATH: &str = "user-login";

/// Path of the registration endpoint
pub const REGISTRATION_PATH: &str = "user-registration";

/// Whether a path obtains credentials rather than requiring them
pub fn is_bootstrap_path(path: &str) -> bool {
    path == LOGIN_PATH || path == REGISTRATION_PATH
}

/// Remote operations supported by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    UserRegistration,
    UserLogin,
    UserLogout,
    UserGetProfile,
    UserUpdateProfile,
    UserCurrencies,
    GetAllUserCategories,
    BanksGetAll,
    BankLoginDetail,
    WalletGetAll,
    WalletGetTransactions,
    WalletCreate,
    WalletUpdate,
    WalletDelete,
    WalletInviteToShare,
    WalletUnshareUser,
    WalletCreateCategory,
    WalletDeleteCategory,
    WalletUpdateCategory,
    GetBudgets,
    CreateBudget,
    EditBudget,
    DeleteBudget,
    CategoryImageIds,
    Countries,
    GetTransactionTemplates,
    SyncRefresh,
    Providers,
    ConnectBankAccount,
    ChooseBankAccount,
}

impl Endpoint {
    /// All registered endpoints
    pub const ALL: [Endpoint; 30] = [
        Endpoint::UserRegistration,
        Endpoint::UserLogin,
        Endpoint::UserLogout,
        Endpoint::UserGetProfile,
        Endpoint::UserUpdateProfile,
        Endpoint::UserCurrencies,
        Endpoint::GetAllUserCategories,
        Endpoint::BanksGetAll,
        Endpoint::BankLoginDetail,
        Endpoint::WalletGetAll,
        Endpoint::WalletGetTransactions,
        Endpoint::WalletCreate,
        Endpoint::WalletUpdate,
        Endpoint::WalletDelete,
        Endpoint::WalletInviteToShare,
        Endpoint::WalletUnshareUser,
        Endpoint::WalletCreateCategory,
        Endpoint::WalletDeleteCategory,
        Endpoint::WalletUpdateCategory,
        Endpoint::GetBudgets,
        Endpoint::CreateBudget,
        Endpoint::EditBudget,
        Endpoint::DeleteBudget,
        Endpoint::CategoryImageIds,
        Endpoint::Countries,
        Endpoint::GetTransactionTemplates,
        Endpoint::SyncRefresh,
        Endpoint::Providers,
        Endpoint::ConnectBankAccount,
        Endpoint::ChooseBankAccount,
    ];

    pub const fn descriptor(self) -> EndpointDescriptor {
        use HttpMethod::*;

        match self {
            Endpoint::UserRegistration => EndpointDescriptor::new(Post, "v1.5", REGISTRATION_PATH),
            Endpoint::UserLogin => EndpointDescriptor::new(Post, "v1.4", LOGIN_PATH),
            Endpoint::UserLogout => EndpointDescriptor::new(Post, "v1.4", "user-logout"),
            Endpoint::UserGetProfile => EndpointDescriptor::new(Post, "v1.4", "user-get-profile"),
            Endpoint::UserUpdateProfile => EndpointDescriptor::new(Post, "v1.5", "user-update-profile"),
            Endpoint::UserCurrencies => EndpointDescriptor::new(Get, "v1.6", "user-currencies"),
            Endpoint::GetAllUserCategories => {
                EndpointDescriptor::new(Get, "v1.6", "get-all-user-categories")
            }
            Endpoint::BanksGetAll => EndpointDescriptor::new(Get, "v1.3", "banks-get-all"),
            Endpoint::BankLoginDetail => EndpointDescriptor::new(Get, "v2", "bankLogins/detail"),
            Endpoint::WalletGetAll => EndpointDescriptor::new(Post, "v1", "wallet-get-all"),
            Endpoint::WalletGetTransactions => {
                EndpointDescriptor::new(Post, "v1.8", "wallet-get-transactions")
            }
            Endpoint::WalletCreate => EndpointDescriptor::new(Post, "v1", "wallet-create"),
            Endpoint::WalletUpdate => EndpointDescriptor::new(Post, "v1", "wallet-update"),
            Endpoint::WalletDelete => EndpointDescriptor::new(Post, "v1", "wallet-delete"),
            Endpoint::WalletInviteToShare => {
                EndpointDescriptor::new(Post, "v1", "wallet-invite-to-share")
            }
            Endpoint::WalletUnshareUser => EndpointDescriptor::new(Post, "v1", "wallet-unshare-user"),
            Endpoint::WalletCreateCategory => {
                EndpointDescriptor::new(Post, "v1.4", "wallet-create-category")
            }
            Endpoint::WalletDeleteCategory => {
                EndpointDescriptor::new(Post, "v1", "wallet-delete-category")
            }
            Endpoint::WalletUpdateCategory => {
                EndpointDescriptor::new(Post, "v1.4", "wallet-update-category")
            }
            Endpoint::GetBudgets => EndpointDescriptor::new(Get, "v1.7", "get-budgets"),
            Endpoint::CreateBudget => EndpointDescriptor::new(Post, "v1.7", "create-budget"),
            Endpoint::EditBudget => EndpointDescriptor::new(Post, "v1.7", "edit-budget"),
            Endpoint::DeleteBudget => EndpointDescriptor::new(Post, "v1.7", "delete-budget"),
            Endpoint::CategoryImageIds => EndpointDescriptor::new(Post, "v1.3", "category-image-ids"),
            Endpoint::Countries => EndpointDescriptor::new(Post, "v2", "countries"),
            Endpoint::GetTransactionTemplates => {
                EndpointDescriptor::new(Get, "v1.8", "get-transaction-templates")
            }
            Endpoint::SyncRefresh => EndpointDescriptor::new(Put, "v2", "logins/refresh"),
            Endpoint::Providers => EndpointDescriptor::new(Get, "v2", "providers"),
            Endpoint::ConnectBankAccount => EndpointDescriptor::new(Post, "v2", "url"),
            Endpoint::ChooseBankAccount => EndpointDescriptor::new(Put, "v2", "visible"),
        }
    }

    pub fn path(self) -> &'static str {
        self.descriptor().path
    }

    pub fn method(self) -> HttpMethod {
        self.descriptor().method
    }

    pub fn version(self) -> &'static str {
        self.descriptor().version
    }

    /// Whether this endpoint is called without an `api-uuid` token
    pub fn is_bootstrap(self) -> bool {
        is_bootstrap_path(self.path())
    }

    /// Look up an endpoint by its path segment
    pub fn from_path(path: &str) -> Option<Endpoint> {
        ENDPOINTS_BY_PATH.get(path).copied()
    }
}

static ENDPOINTS_BY_PATH: Lazy<HashMap<&'static str, Endpoint>> = Lazy::new(|| {
    Endpoint::ALL
        .iter()
        .map(|endpoint| (endpoint.path(), *endpoint))
        .collect()
});
