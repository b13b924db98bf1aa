//! Caller identity types resolved from the external identity provider.

use super::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque bearer credential presented by a caller.
///
/// Issuance, refresh, and expiry are handled by the external identity
/// provider; this core only forwards the credential for resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionCredential(String);

impl SessionCredential {
    /// Wraps a raw bearer token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Credentials are secrets; never echo the token itself.
        write!(f, "<session credential>")
    }
}

/// A resolved, authenticated caller identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable user identifier.
    pub user_id: UserId,
    /// Email-equivalent contact handle reported by the provider.
    pub email: String,
}

impl Identity {
    /// Creates an identity from its parts.
    #[must_use]
    pub fn new(user_id: UserId, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
        }
    }
}
