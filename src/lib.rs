//! # Pocketbook
//!
//! Client for a personal-finance dashboard backend: fetches the balance,
//! transactions and categories, renders them, and runs add/edit/delete actions
//! followed by a full refresh.
//!
//! ## Modules
//!
//! - [`api`]: REST client for the dashboard backend
//! - [`dashboard`]: refresh/mutation workflow around the client
//! - [`view`]: pure rendering and terminal presentation
//! - [`session`]: bearer token and its persisted store
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pocketbook::{DashboardClient, HttpDashboardApi, Session, TerminalNotifier};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpDashboardApi::new("http://localhost:5000", Session::new("token"))?;
//!     let mut client = DashboardClient::new(api, TerminalNotifier::new());
//!
//!     let _ = client.load_dashboard().await;
//!     if let Some(view) = client.view() {
//!         println!("Balance: {}", view.balance);
//!     }
//!
//!     client.transaction_form_mut().set("amount", "12.50");
//!     client.transaction_form_mut().set("type", "expense");
//!     let _ = client.submit_transaction().await;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod session;
pub mod view;

pub use api::{
    Category, CategoryId, CategoryStats, ClientError, ClientResult, DashboardApi,
    DashboardSnapshot, HttpDashboardApi, Transaction, TransactionId, TransactionKind, UserProfile,
};

pub use config::{Config, ConfigError};

pub use dashboard::{
    ActionOutcome, DashboardClient, Form, Notice, Notifier, RecordingNotifier, TerminalNotifier,
};

pub use session::{Session, SessionError, SessionStore};

pub use view::{render, Action, DashboardView, OutputFormat};
