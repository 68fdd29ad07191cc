//! Dashboard Backend API
//!
//! Client side of the finance dashboard REST API.
//!
//! # Endpoints
//!
//! - `GET /dashboard/data` - Balance, transactions and categories
//! - `POST /dashboard/add_transaction` - Create a transaction
//! - `PUT /dashboard/edit_transaction/{id}` - Update a transaction
//! - `DELETE /dashboard/delete_transaction/{id}` - Delete a transaction
//! - `POST /dashboard/add_category` - Create a category
//! - `DELETE /dashboard/delete_category/{id}` - Delete a category
//! - `GET /dashboard/stats_data` - Per-category totals
//! - `GET /dashboard/profile` - Account details
//! - `POST /auth/login` - Exchange credentials for a token
//! - `POST /auth/register` - Create an account

pub mod auth;
pub mod client;
pub mod dto;
pub mod error;

#[cfg(test)]
pub(crate) mod mock;

pub use auth::{login, register};
pub use client::{DashboardApi, FormPayload, HttpDashboardApi};
pub use dto::{
    Category, CategoryId, CategoryStats, DashboardSnapshot, LoginResponse, RegisterResponse,
    Transaction, TransactionId, TransactionKind, UserProfile,
};
pub use error::{ClientError, ClientResult};
