//! Dashboard Client
//!
//! Drives the refresh/mutation loop: every successful mutation is followed by
//! a full refresh, and a refresh replaces the whole rendered view.

use super::form::{
    category_form, edit_form, edit_payload, transaction_form, transaction_payload, Form,
};
use super::notify::{Notice, Notifier};
use crate::api::{CategoryId, DashboardApi, TransactionId, UserProfile};
use crate::view::{render, render_stats, Action, DashboardView, StatsView};

/// Result of a user action
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The backend accepted the request
    Applied,
    /// The request was unsuccessful; a notice was shown
    Rejected,
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }
}

/// Client-side state of the finance dashboard
pub struct DashboardClient<A, N> {
    api: A,
    notifier: N,
    view: Option<DashboardView>,
    transaction_form: Form,
    edit_form: Form,
    category_form: Form,
}

impl<A: DashboardApi, N: Notifier> DashboardClient<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            view: None,
            transaction_form: transaction_form(),
            edit_form: edit_form(),
            category_form: category_form(),
        }
    }

    /// The most recently rendered view, if any load has succeeded
    pub fn view(&self) -> Option<&DashboardView> {
        self.view.as_ref()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn transaction_form(&self) -> &Form {
        &self.transaction_form
    }

    pub fn transaction_form_mut(&mut self) -> &mut Form {
        &mut self.transaction_form
    }

    pub fn edit_form(&self) -> &Form {
        &self.edit_form
    }

    pub fn edit_form_mut(&mut self) -> &mut Form {
        &mut self.edit_form
    }

    pub fn category_form(&self) -> &Form {
        &self.category_form
    }

    pub fn category_form_mut(&mut self) -> &mut Form {
        &mut self.category_form
    }

    /// Fetch the snapshot and replace the rendered view
    ///
    /// On failure the previous view stays in place.
    pub async fn load_dashboard(&mut self) -> ActionOutcome {
        match self.api.fetch_snapshot().await {
            Ok(snapshot) => {
                let view = render(&snapshot);
                tracing::info!(
                    balance = %view.balance,
                    transactions = view.transactions.rows.len(),
                    categories = snapshot.categories.len(),
                    "Dashboard refreshed"
                );
                self.view = Some(view);
                ActionOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load dashboard");
                self.notifier.notify(Notice::LoadFailed);
                ActionOutcome::Rejected
            }
        }
    }

    /// Run the action bound to a rendered control
    pub async fn dispatch(&mut self, action: Action) -> ActionOutcome {
        match action {
            Action::DeleteTransaction(id) => self.delete_transaction(id).await,
        }
    }

    /// Activate the delete control of the row at `index` (zero-based)
    ///
    /// Returns `None` if the current view has no such row.
    pub async fn delete_row(&mut self, index: usize) -> Option<ActionOutcome> {
        let action = self
            .view
            .as_ref()
            .and_then(|v| v.transactions.rows.get(index))
            .map(|row| row.delete.action)?;

        Some(self.dispatch(action).await)
    }

    pub async fn delete_transaction(&mut self, id: TransactionId) -> ActionOutcome {
        match self.api.delete_transaction(id).await {
            Ok(()) => {
                tracing::info!(%id, "Transaction deleted");
                self.refresh_after_mutation().await;
                ActionOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "Failed to delete transaction");
                self.notifier.notify(Notice::DeleteTransactionFailed);
                ActionOutcome::Rejected
            }
        }
    }

    /// Submit the transaction form
    ///
    /// On success the form is reset and the dashboard refreshed; on failure
    /// the form keeps its values.
    pub async fn submit_transaction(&mut self) -> ActionOutcome {
        let payload = transaction_payload(&self.transaction_form);

        match self.api.add_transaction(&payload).await {
            Ok(()) => {
                tracing::info!("Transaction added");
                self.transaction_form.reset();
                self.refresh_after_mutation().await;
                ActionOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to add transaction");
                self.notifier.notify(Notice::AddTransactionFailed);
                ActionOutcome::Rejected
            }
        }
    }

    /// Submit the edit form for transaction `id`
    ///
    /// Only filled-in fields are sent. Resets the form and refreshes on
    /// success.
    pub async fn submit_edit(&mut self, id: TransactionId) -> ActionOutcome {
        let payload = edit_payload(&self.edit_form);

        match self.api.edit_transaction(id, &payload).await {
            Ok(()) => {
                tracing::info!(%id, fields = payload.len(), "Transaction updated");
                self.edit_form.reset();
                self.refresh_after_mutation().await;
                ActionOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "Failed to edit transaction");
                self.notifier.notify(Notice::EditTransactionFailed);
                ActionOutcome::Rejected
            }
        }
    }

    /// Submit the category form
    pub async fn submit_category(&mut self) -> ActionOutcome {
        let payload = self.category_form.to_payload();

        match self.api.add_category(&payload).await {
            Ok(()) => {
                tracing::info!("Category added");
                self.category_form.reset();
                self.refresh_after_mutation().await;
                ActionOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to add category");
                self.notifier.notify(Notice::AddCategoryFailed);
                ActionOutcome::Rejected
            }
        }
    }

    pub async fn delete_category(&mut self, id: CategoryId) -> ActionOutcome {
        match self.api.delete_category(id).await {
            Ok(()) => {
                tracing::info!(%id, "Category deleted");
                self.refresh_after_mutation().await;
                ActionOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "Failed to delete category");
                self.notifier.notify(Notice::DeleteCategoryFailed);
                ActionOutcome::Rejected
            }
        }
    }

    /// Fetch and render per-category totals; not part of the refresh loop
    pub async fn load_stats(&mut self) -> Option<StatsView> {
        match self.api.fetch_stats().await {
            Ok(stats) => Some(render_stats(&stats)),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load statistics");
                self.notifier.notify(Notice::StatsLoadFailed);
                None
            }
        }
    }

    /// Fetch the logged-in user's account details
    pub async fn load_profile(&mut self) -> Option<UserProfile> {
        match self.api.fetch_profile().await {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load profile");
                self.notifier.notify(Notice::ProfileLoadFailed);
                None
            }
        }
    }

    // A failed refresh already raised its own notice
    async fn refresh_after_mutation(&mut self) {
        let _ = self.load_dashboard().await;
    }
}
