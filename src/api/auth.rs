//! Login and registration
//!
//! Exchanges credentials for a bearer token, or creates an account. These are
//! the only unauthenticated calls the client makes.

use super::client::{decode_json, ensure_success, http_client, normalize_base_url};
use super::dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use super::error::ClientResult;

/// `POST /auth/login`
pub async fn login(base_url: &str, email: &str, password: &str) -> ClientResult<LoginResponse> {
    let url = format!("{}/auth/login", normalize_base_url(base_url));
    tracing::debug!(%url, %email, "logging in");

    let response = http_client()?
        .post(&url)
        .json(&LoginRequest { email, password })
        .send()
        .await?;

    decode_json(ensure_success(response).await?).await
}

/// `POST /auth/register`
///
/// Validation failures (short password, taken email) come back as
/// [`ClientError::Status`](super::ClientError::Status) with the backend's message.
pub async fn register(
    base_url: &str,
    username: &str,
    email: &str,
    password: &str,
) -> ClientResult<RegisterResponse> {
    let url = format!("{}/auth/register", normalize_base_url(base_url));
    tracing::debug!(%url, %username, %email, "registering");

    let response = http_client()?
        .post(&url)
        .json(&RegisterRequest {
            username,
            email,
            password,
        })
        .send()
        .await?;

    decode_json(ensure_success(response).await?).await
}
