//! In-memory identity resolver for tests and provider-less wiring.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::family::{
    domain::{Identity, SessionCredential},
    ports::{IdentityError, IdentityResolver, IdentityResult},
};

/// Thread-safe in-memory credential-to-identity map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityResolver {
    sessions: Arc<RwLock<HashMap<String, Identity>>>,
}

impl InMemoryIdentityResolver {
    /// Creates a resolver with no live sessions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a live session for a credential.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Provider`] when the session lock is
    /// poisoned.
    pub fn register(&self, credential: &SessionCredential, identity: Identity) -> IdentityResult<()> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|err| IdentityError::provider(std::io::Error::other(err.to_string())))?;
        sessions.insert(credential.as_str().to_owned(), identity);
        Ok(())
    }
}

#[async_trait]
impl IdentityResolver for InMemoryIdentityResolver {
    async fn resolve(&self, credential: &SessionCredential) -> IdentityResult<Option<Identity>> {
        let sessions = self
            .sessions
            .read()
            .map_err(|err| IdentityError::provider(std::io::Error::other(err.to_string())))?;
        Ok(sessions.get(credential.as_str()).cloned())
    }
}
