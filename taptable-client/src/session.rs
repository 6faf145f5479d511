//! Session token state
//!
//! The token is either absent (requests go out unauthenticated) or
//! present (requests carry `Authorization: Bearer <token>`). The value is
//! mirrored into a [`TokenStore`] and re-read from it before each request,
//! so a token written by another client sharing the store is picked up.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::ClientResult;
use crate::storage::TokenStore;

#[derive(Debug)]
pub struct Session {
    token: RwLock<Option<String>>,
    store: Arc<dyn TokenStore>,
    key: String,
}

impl Session {
    /// Create a session, seeding the token from the store
    pub fn new(store: Arc<dyn TokenStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let token = match store.load(&key) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted token");
                None
            }
        };
        Self {
            token: RwLock::new(token),
            store,
            key,
        }
    }

    /// Current token, if any
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// Replace the token and persist it
    pub fn set_token(&self, token: impl Into<String>) -> ClientResult<()> {
        let token = token.into();
        self.store.save(&self.key, &token)?;
        *self.token.write() = Some(token);
        Ok(())
    }

    /// Drop the token from memory and from the store
    pub fn clear_token(&self) -> ClientResult<()> {
        *self.token.write() = None;
        self.store.remove(&self.key)?;
        Ok(())
    }

    /// Re-read the token from the store and return it.
    ///
    /// A failed read keeps the in-memory value.
    pub fn sync(&self) -> Option<String> {
        match self.store.load(&self.key) {
            Ok(stored) => {
                let mut token = self.token.write();
                *token = stored;
                token.clone()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to re-read persisted token");
                self.token()
            }
        }
    }
}
