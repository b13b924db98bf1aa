//! Read-only directory port for family members.

use crate::family::domain::{FamilyId, FamilyMembership, Member, MemberId, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for member directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Read access to the external family/member roster.
///
/// The chore engine never mutates the roster; creation and maintenance of
/// families and members happen in the external provider.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// Resolves the family membership linked to an authenticated user.
    ///
    /// Returns `None` when the user belongs to no family.
    async fn membership_for_user(
        &self,
        user_id: UserId,
    ) -> DirectoryResult<Option<FamilyMembership>>;

    /// Returns all member profiles of a family.
    async fn members_of_family(&self, family_id: FamilyId) -> DirectoryResult<Vec<Member>>;

    /// Finds a member profile by identifier.
    ///
    /// Returns `None` when the member does not exist.
    async fn find_member(&self, member_id: MemberId) -> DirectoryResult<Option<Member>>;
}

/// Errors returned by member directory implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// Provider-side failure while reading the roster.
    #[error("directory error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a provider error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
