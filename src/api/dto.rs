//! Wire types
//!
//! Request and response bodies exchanged with the dashboard backend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a transaction as issued by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TransactionId(pub i64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a category as issued by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============ Response Types ============

/// Full server-side dashboard state, fetched in one request
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DashboardSnapshot {
    pub balance: f64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// A single income or expense record
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub amount: f64,
}

/// Direction of money flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Human-readable label shown in the transaction table
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }

    /// Value used by the backend and by form fields
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

/// A user-defined transaction category
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Per-category income and expense totals
///
/// The three vectors are parallel: `income[i]` and `expense[i]` belong to
/// `labels[i]`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CategoryStats {
    pub labels: Vec<String>,
    pub income: Vec<f64>,
    pub expense: Vec<f64>,
}

/// Successful login response
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Account details, as returned by login, register and `GET /dashboard/profile`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Successful registration response (`201 Created`)
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// ============ Request Types ============

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}
