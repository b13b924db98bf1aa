//! Domain model for the family roster and caller identity.
//!
//! Members belong to exactly one family and may optionally be linked to an
//! authenticated identity. Members without a linked identity exist on the
//! board but cannot act through identity-bound operations.

mod error;
mod identity;
mod ids;
mod member;

pub use error::ParseMemberRoleError;
pub use identity::{Identity, SessionCredential};
pub use ids::{FamilyId, MemberId, UserId};
pub use member::{FamilyMembership, Member, MemberRole};
