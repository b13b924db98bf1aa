//! In-memory member directory for tests and provider-less wiring.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::family::{
    domain::{FamilyId, FamilyMembership, Member, MemberId, UserId},
    ports::{DirectoryError, DirectoryResult, MemberDirectory},
};

/// Thread-safe in-memory member directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemberDirectory {
    state: Arc<RwLock<DirectoryState>>,
}

#[derive(Debug, Default)]
struct DirectoryState {
    members: HashMap<MemberId, Member>,
}

impl InMemoryMemberDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a member profile, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] when the directory lock is
    /// poisoned.
    pub fn add_member(&self, member: Member) -> DirectoryResult<()> {
        let mut state = lock_write(&self.state)?;
        state.members.insert(member.id, member);
        Ok(())
    }
}

fn lock_write(
    state: &Arc<RwLock<DirectoryState>>,
) -> DirectoryResult<std::sync::RwLockWriteGuard<'_, DirectoryState>> {
    state
        .write()
        .map_err(|err| DirectoryError::persistence(std::io::Error::other(err.to_string())))
}

fn lock_read(
    state: &Arc<RwLock<DirectoryState>>,
) -> DirectoryResult<std::sync::RwLockReadGuard<'_, DirectoryState>> {
    state
        .read()
        .map_err(|err| DirectoryError::persistence(std::io::Error::other(err.to_string())))
}

#[async_trait]
impl MemberDirectory for InMemoryMemberDirectory {
    async fn membership_for_user(
        &self,
        user_id: UserId,
    ) -> DirectoryResult<Option<FamilyMembership>> {
        let state = lock_read(&self.state)?;
        let membership = state
            .members
            .values()
            .find(|member| member.user_id == Some(user_id))
            .map(|member| FamilyMembership {
                member_id: member.id,
                family_id: member.family_id,
                role: member.role,
            });
        Ok(membership)
    }

    async fn members_of_family(&self, family_id: FamilyId) -> DirectoryResult<Vec<Member>> {
        let state = lock_read(&self.state)?;
        Ok(state
            .members
            .values()
            .filter(|member| member.family_id == family_id)
            .cloned()
            .collect())
    }

    async fn find_member(&self, member_id: MemberId) -> DirectoryResult<Option<Member>> {
        let state = lock_read(&self.state)?;
        Ok(state.members.get(&member_id).cloned())
    }
}
