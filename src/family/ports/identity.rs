//! Identity resolution port for bearer credentials.

use crate::family::domain::{Identity, SessionCredential};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identity resolution.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Resolves bearer credentials to stable member identities.
///
/// Credential issuance, refresh, and expiry live in the external identity
/// provider and are out of scope here.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolves a credential to an identity.
    ///
    /// Returns `None` when the credential does not map to a live session.
    async fn resolve(&self, credential: &SessionCredential) -> IdentityResult<Option<Identity>>;
}

/// Errors returned by identity resolver implementations.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// Provider-side failure while resolving the credential.
    #[error("identity provider error: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityError {
    /// Wraps a provider error.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
