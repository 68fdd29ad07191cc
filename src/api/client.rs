//! Dashboard REST API Client
//!
//! HTTP client for the finance dashboard backend. Every request carries the
//! session's bearer token.

use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;

use super::dto::{
    CategoryId, CategoryStats, DashboardSnapshot, ErrorBody, TransactionId, UserProfile,
};
use super::error::{ClientError, ClientResult};
use crate::session::Session;

/// Flat JSON object built from a submitted form
pub type FormPayload = serde_json::Map<String, serde_json::Value>;

/// Operations the dashboard needs from its backend
///
/// [`HttpDashboardApi`] is the production implementation; tests substitute a
/// recording fake.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// `GET /dashboard/data`
    async fn fetch_snapshot(&self) -> ClientResult<DashboardSnapshot>;

    /// `DELETE /dashboard/delete_transaction/{id}`
    async fn delete_transaction(&self, id: TransactionId) -> ClientResult<()>;

    /// `POST /dashboard/add_transaction`
    async fn add_transaction(&self, body: &FormPayload) -> ClientResult<()>;

    /// `PUT /dashboard/edit_transaction/{id}`
    ///
    /// Fields missing from `body` keep their stored values.
    async fn edit_transaction(&self, id: TransactionId, body: &FormPayload) -> ClientResult<()>;

    /// `POST /dashboard/add_category`
    async fn add_category(&self, body: &FormPayload) -> ClientResult<()>;

    /// `DELETE /dashboard/delete_category/{id}`
    async fn delete_category(&self, id: CategoryId) -> ClientResult<()>;

    /// `GET /dashboard/stats_data`
    async fn fetch_stats(&self) -> ClientResult<CategoryStats>;

    /// `GET /dashboard/profile`
    async fn fetch_profile(&self) -> ClientResult<UserProfile>;
}

/// HTTP client shared by every request the crate makes
pub(crate) fn http_client() -> ClientResult<Client> {
    Ok(Client::builder()
        .user_agent(concat!("pocketbook/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// reqwest-backed [`DashboardApi`]
pub struct HttpDashboardApi {
    client: Client,
    base_url: String,
    session: Session,
}

impl HttpDashboardApi {
    /// Create a client for the backend at `base_url`, authenticating as `session`
    pub fn new(base_url: &str, session: Session) -> ClientResult<Self> {
        Ok(Self {
            client: http_client()?,
            base_url: normalize_base_url(base_url),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .bearer_auth(self.session.token())
            .send()
            .await?;

        decode_json(ensure_success(response).await?).await
    }

    async fn send_json(&self, method: Method, path: &str, body: &FormPayload) -> ClientResult<()> {
        let url = self.url(path);
        tracing::debug!(%url, fields = body.len(), "{}", method);

        let response = self
            .client
            .request(method, &url)
            .bearer_auth(self.session.token())
            .json(body)
            .send()
            .await?;

        ensure_success(response).await.map(|_| ())
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");

        let response = self
            .client
            .delete(&url)
            .bearer_auth(self.session.token())
            .send()
            .await?;

        ensure_success(response).await.map(|_| ())
    }
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    async fn fetch_snapshot(&self) -> ClientResult<DashboardSnapshot> {
        self.get_json("/dashboard/data").await
    }

    async fn delete_transaction(&self, id: TransactionId) -> ClientResult<()> {
        self.delete(&format!("/dashboard/delete_transaction/{}", id))
            .await
    }

    async fn add_transaction(&self, body: &FormPayload) -> ClientResult<()> {
        self.send_json(Method::POST, "/dashboard/add_transaction", body)
            .await
    }

    async fn edit_transaction(&self, id: TransactionId, body: &FormPayload) -> ClientResult<()> {
        self.send_json(
            Method::PUT,
            &format!("/dashboard/edit_transaction/{}", id),
            body,
        )
        .await
    }

    async fn add_category(&self, body: &FormPayload) -> ClientResult<()> {
        self.send_json(Method::POST, "/dashboard/add_category", body)
            .await
    }

    async fn delete_category(&self, id: CategoryId) -> ClientResult<()> {
        self.delete(&format!("/dashboard/delete_category/{}", id))
            .await
    }

    async fn fetch_stats(&self) -> ClientResult<CategoryStats> {
        self.get_json("/dashboard/stats_data").await
    }

    async fn fetch_profile(&self) -> ClientResult<UserProfile> {
        self.get_json("/dashboard/profile").await
    }
}

/// Trim the trailing slash so paths can be appended directly
pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Turn a non-2xx response into [`ClientError::Status`]
///
/// The backend reports failures as `{"error": "..."}`; anything else is kept
/// as raw text.
pub(crate) async fn ensure_success(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}
