//! Dashboard
//!
//! The client-side workflow of the finance dashboard:
//!
//! - full refresh: fetch the snapshot, render it, replace the view
//! - mutations (add/edit/delete transaction, add/delete category), each followed
//!   by a full refresh when the backend accepts them
//! - notices for unsuccessful requests

mod client;
pub mod form;
mod notify;

pub use client::{ActionOutcome, DashboardClient};
pub use form::Form;
pub use notify::{Notice, Notifier, RecordingNotifier, TerminalNotifier};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{spawn_backend, BackendState, SnapshotReply};
    use crate::api::{HttpDashboardApi, TransactionId};
    use crate::session::Session;
    use serde_json::json;
    use std::sync::Arc;

    async fn http_client(
        state: &Arc<BackendState>,
    ) -> DashboardClient<HttpDashboardApi, RecordingNotifier> {
        let base = spawn_backend(Arc::clone(state)).await;
        let api = HttpDashboardApi::new(&base, Session::new("tok")).unwrap();
        DashboardClient::new(api, RecordingNotifier::default())
    }

    fn one_transaction() -> SnapshotReply {
        SnapshotReply::Json(json!({
            "balance": 150,
            "transactions": [{"id": 1, "date": "2024-01-01", "type": "income",
                              "category": null, "description": null, "amount": 50}],
            "categories": [{"id": 2, "name": "Salary"}]
        }))
    }

    #[tokio::test]
    async fn test_delete_over_http_refetches_once() {
        let state = Arc::new(BackendState::new("tok"));
        state.set_snapshot(one_transaction());
        let mut client = http_client(&state).await;

        let _ = client.load_dashboard().await;
        assert_eq!(client.delete_row(0).await, Some(ActionOutcome::Applied));

        assert_eq!(state.count("DELETE", "/dashboard/delete_transaction/1"), 1);
        assert_eq!(state.count("GET", "/dashboard/data"), 2);
    }

    #[tokio::test]
    async fn test_failed_delete_over_http_does_not_refetch() {
        let state = Arc::new(BackendState::new("tok"));
        state.set_snapshot(one_transaction());
        state.set_mutation_status(404);
        let mut client = http_client(&state).await;

        let _ = client.load_dashboard().await;
        let outcome = client
            .dispatch(crate::view::Action::DeleteTransaction(TransactionId(1)))
            .await;

        assert_eq!(outcome, ActionOutcome::Rejected);
        assert_eq!(state.count("GET", "/dashboard/data"), 1);
        assert_eq!(client.notifier().notices, vec![Notice::DeleteTransactionFailed]);
    }

    #[tokio::test]
    async fn test_add_transaction_over_http() {
        let state = Arc::new(BackendState::new("tok"));
        let mut client = http_client(&state).await;

        client.transaction_form_mut().set("amount", "42.5");
        assert!(client.submit_transaction().await.is_applied());

        let requests = state.requests();
        assert_eq!(requests[0].path, "/dashboard/add_transaction");
        assert_eq!(requests[0].body.as_ref().unwrap()["amount"], json!(42.5));
        assert_eq!(requests[1].path, "/dashboard/data");
        assert_eq!(client.transaction_form().get("amount"), Some(""));
    }

    #[tokio::test]
    async fn test_edit_over_http_refetches() {
        let state = Arc::new(BackendState::new("tok"));
        state.set_snapshot(one_transaction());
        let mut client = http_client(&state).await;

        client.edit_form_mut().set("amount", "75");
        client.edit_form_mut().set("type", "expense");
        assert!(client.submit_edit(TransactionId(1)).await.is_applied());

        let requests = state.requests();
        assert_eq!(requests[0].method, "PUT");
        assert_eq!(requests[0].path, "/dashboard/edit_transaction/1");
        assert_eq!(requests[0].body, Some(json!({"amount": 75.0, "type": "expense"})));
        assert_eq!(state.count("GET", "/dashboard/data"), 1);
        assert_eq!(client.edit_form().get("amount"), Some(""));
    }

    #[tokio::test]
    async fn test_failed_edit_over_http() {
        let state = Arc::new(BackendState::new("tok"));
        state.set_mutation_status(404);
        let mut client = http_client(&state).await;

        client.edit_form_mut().set("description", "Taxi");
        assert_eq!(client.submit_edit(TransactionId(99)).await, ActionOutcome::Rejected);

        assert_eq!(state.count("GET", "/dashboard/data"), 0);
        assert_eq!(client.edit_form().get("description"), Some("Taxi"));
        assert_eq!(client.notifier().notices, vec![Notice::EditTransactionFailed]);
        assert_eq!(
            Notice::EditTransactionFailed.to_string(),
            "Error editing transaction"
        );
    }

    #[tokio::test]
    async fn test_profile_over_http() {
        let state = Arc::new(BackendState::new("tok"));
        let mut client = http_client(&state).await;

        let profile = client.load_profile().await.unwrap();
        assert_eq!(profile.id, 1);
        assert_eq!(profile.username, "testuser");
        assert_eq!(state.count("GET", "/dashboard/data"), 0);
    }

    #[tokio::test]
    async fn test_profile_unauthorized_over_http() {
        let state = Arc::new(BackendState::new("someone-else"));
        let mut client = http_client(&state).await;

        assert!(client.load_profile().await.is_none());
        assert_eq!(client.notifier().notices, vec![Notice::ProfileLoadFailed]);
    }

    #[tokio::test]
    async fn test_non_success_load_over_http() {
        let state = Arc::new(BackendState::new("tok"));
        state.set_snapshot(SnapshotReply::Status(503));
        let mut client = http_client(&state).await;

        assert_eq!(client.load_dashboard().await, ActionOutcome::Rejected);
        assert!(client.view().is_none());
        assert_eq!(client.notifier().notices, vec![Notice::LoadFailed]);
    }
}
