//! Session
//!
//! The bearer credential used for every backend request, and the store it is
//! persisted in between runs.

mod store;

pub use store::{SessionStore, TOKEN_KEY};

use std::fmt;
use std::path::PathBuf;

/// An authenticated session
///
/// Read once at startup and handed to the API client; later changes to the
/// store do not affect a running client.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Load the token from `store`
    pub fn from_store(store: &SessionStore) -> Result<Self, SessionError> {
        store
            .get(TOKEN_KEY)
            .filter(|t| !t.trim().is_empty())
            .map(Session::new)
            .ok_or_else(|| SessionError::MissingToken(store.path().to_path_buf()))
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

// Never print the credential itself
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("token", &"<redacted>").finish()
    }
}

/// Session store errors
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to access session store {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse session store {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Failed to serialize session store: {0}")]
    Serialize(String),

    #[error("No token in session store {0:?}; run `pocketbook login` first")]
    MissingToken(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_from_store() {
        let dir = tempdir().unwrap();
        let mut store = SessionStore::open(dir.path().join("s.toml")).unwrap();
        store.set(TOKEN_KEY, "tok").unwrap();

        let session = Session::from_store(&store).unwrap();
        assert_eq!(session.token(), "tok");
    }

    #[test]
    fn test_missing_or_blank_token() {
        let dir = tempdir().unwrap();
        let mut store = SessionStore::open(dir.path().join("s.toml")).unwrap();
        assert!(matches!(
            Session::from_store(&store),
            Err(SessionError::MissingToken(_))
        ));

        store.set(TOKEN_KEY, "  ").unwrap();
        assert!(Session::from_store(&store).is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let session = Session::new("super-secret");
        assert!(!format!("{:?}", session).contains("super-secret"));
    }
}
