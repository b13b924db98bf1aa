//! Member profiles and family membership records.

use super::{FamilyId, MemberId, ParseMemberRoleError, UserId};
use serde::{Deserialize, Serialize};

/// Role a member holds within their family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    /// Adult member; may verify completed chores.
    Parent,
    /// Child member.
    Child,
}

impl MemberRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Child => "child",
        }
    }
}

impl TryFrom<&str> for MemberRole {
    type Error = ParseMemberRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "parent" => Ok(Self::Parent),
            "child" => Ok(Self::Child),
            _ => Err(ParseMemberRoleError(value.to_owned())),
        }
    }
}

/// Read-only member profile consumed from the external directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Member profile identifier.
    pub id: MemberId,
    /// Family the member belongs to.
    pub family_id: FamilyId,
    /// Display name.
    pub name: String,
    /// Role within the family.
    pub role: MemberRole,
    /// Avatar accent colour chosen for the member, if any.
    pub avatar_color: Option<String>,
    /// Linked authenticated identity, when the member has an account.
    ///
    /// Members without a linked identity cannot take or complete chores
    /// through identity-bound operations.
    pub user_id: Option<UserId>,
}

impl Member {
    /// Creates a member profile without avatar colour or linked identity.
    #[must_use]
    pub fn new(
        id: MemberId,
        family_id: FamilyId,
        name: impl Into<String>,
        role: MemberRole,
    ) -> Self {
        Self {
            id,
            family_id,
            name: name.into(),
            role,
            avatar_color: None,
            user_id: None,
        }
    }

    /// Sets the avatar accent colour.
    #[must_use]
    pub fn with_avatar_color(mut self, color: impl Into<String>) -> Self {
        self.avatar_color = Some(color.into());
        self
    }

    /// Links the member to an authenticated identity.
    #[must_use]
    pub const fn with_user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

/// A user's membership in a family, resolved from their identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMembership {
    /// Member profile backing the membership.
    pub member_id: MemberId,
    /// Family the user belongs to.
    pub family_id: FamilyId,
    /// Role held within the family.
    pub role: MemberRole,
}
