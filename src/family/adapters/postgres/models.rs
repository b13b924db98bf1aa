//! Diesel row models for the member roster.

use super::schema::family_members;
use diesel::prelude::*;

/// Query result row for member profiles.
///
/// The roster is read-only from this crate; no insert model exists.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = family_members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FamilyMemberRow {
    /// Member identifier.
    pub id: uuid::Uuid,
    /// Owning family.
    pub family_id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Role within the family.
    pub role: String,
    /// Avatar accent colour, if chosen.
    pub avatar_color: Option<String>,
    /// Linked authenticated identity, if any.
    pub user_id: Option<uuid::Uuid>,
}
