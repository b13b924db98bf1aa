//! Diesel row models for chore persistence.

use super::schema::{assignments, history_events, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for chore records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Chore identifier.
    pub id: uuid::Uuid,
    /// Owning family.
    pub family_id: uuid::Uuid,
    /// Creator identity.
    pub created_by: uuid::Uuid,
    /// Chore title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional deadline.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional reward points.
    pub reward_points: Option<i32>,
    /// Lifecycle status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for chore records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Chore identifier.
    pub id: uuid::Uuid,
    /// Owning family.
    pub family_id: uuid::Uuid,
    /// Creator identity.
    pub created_by: uuid::Uuid,
    /// Chore title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional deadline.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional reward points.
    pub reward_points: Option<i32>,
    /// Lifecycle status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Query result row for assignment records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = assignments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AssignmentRow {
    /// Assignment identifier.
    pub id: uuid::Uuid,
    /// Owning chore.
    pub task_id: uuid::Uuid,
    /// Claiming identity, when linked.
    pub user_id: Option<uuid::Uuid>,
    /// Claim timestamp.
    pub assigned_at: DateTime<Utc>,
    /// Completion timestamp, when completed.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Insert model for assignment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = assignments)]
pub struct NewAssignmentRow {
    /// Assignment identifier.
    pub id: uuid::Uuid,
    /// Owning chore.
    pub task_id: uuid::Uuid,
    /// Claiming identity, when linked.
    pub user_id: Option<uuid::Uuid>,
    /// Claim timestamp.
    pub assigned_at: DateTime<Utc>,
    /// Completion timestamp, when completed.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Query result row for history events.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = history_events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct HistoryEventRow {
    /// Event identifier.
    pub id: uuid::Uuid,
    /// Owning chore.
    pub task_id: uuid::Uuid,
    /// Acting identity; null for system-generated events.
    pub user_id: Option<uuid::Uuid>,
    /// Action tag.
    pub action: String,
    /// Event timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for history events.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = history_events)]
pub struct NewHistoryEventRow {
    /// Event identifier.
    pub id: uuid::Uuid,
    /// Owning chore.
    pub task_id: uuid::Uuid,
    /// Acting identity; null for system-generated events.
    pub user_id: Option<uuid::Uuid>,
    /// Action tag.
    pub action: String,
    /// Event timestamp.
    pub created_at: DateTime<Utc>,
}
