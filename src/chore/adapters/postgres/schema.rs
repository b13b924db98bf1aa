//! Diesel schema for chore persistence.

diesel::table! {
    /// Chore records.
    tasks (id) {
        /// Chore identifier.
        id -> Uuid,
        /// Owning family.
        family_id -> Uuid,
        /// Identity of the creating member.
        created_by -> Uuid,
        /// Chore title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Optional deadline.
        due_date -> Nullable<Timestamptz>,
        /// Optional reward points.
        reward_points -> Nullable<Int4>,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Assignment rows linking members to chores.
    assignments (id) {
        /// Assignment identifier.
        id -> Uuid,
        /// Owning chore.
        task_id -> Uuid,
        /// Claiming identity, when linked.
        user_id -> Nullable<Uuid>,
        /// Claim timestamp.
        assigned_at -> Timestamptz,
        /// Completion timestamp, when completed.
        completed_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Append-only audit events.
    history_events (id) {
        /// Event identifier.
        id -> Uuid,
        /// Owning chore.
        task_id -> Uuid,
        /// Acting identity; null for system-generated events.
        user_id -> Nullable<Uuid>,
        /// Action tag.
        #[max_length = 100]
        action -> Varchar,
        /// Event timestamp.
        created_at -> Timestamptz,
    }
}
