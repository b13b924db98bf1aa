//! Diesel schema for the member roster.

diesel::table! {
    /// Member profiles, owned by the external provider.
    family_members (id) {
        /// Member identifier.
        id -> Uuid,
        /// Owning family.
        family_id -> Uuid,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Role within the family.
        #[max_length = 50]
        role -> Varchar,
        /// Avatar accent colour, if chosen.
        #[max_length = 50]
        avatar_color -> Nullable<Varchar>,
        /// Linked authenticated identity, if any.
        user_id -> Nullable<Uuid>,
    }
}
