//! Port contracts for the family roster and identity provider.
//!
//! Ports define infrastructure-agnostic interfaces to the external
//! identity-and-storage provider that owns families and members.

pub mod directory;
pub mod identity;

pub use directory::{DirectoryError, DirectoryResult, MemberDirectory};
pub use identity::{IdentityError, IdentityResolver, IdentityResult};
