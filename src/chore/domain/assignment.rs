//! Assignment records linking members to chores.

use super::{AssignmentId, TaskId};
use crate::family::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A claim by one member on one chore.
///
/// A chore may accumulate several assignment rows over its life, for
/// example when it is re-taken after a failure. No uniqueness constraint
/// exists; concurrent takers each get their own row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    id: AssignmentId,
    task_id: TaskId,
    user_id: Option<UserId>,
    assigned_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAssignmentData {
    /// Persisted assignment identifier.
    pub id: AssignmentId,
    /// Persisted owning task.
    pub task_id: TaskId,
    /// Persisted claiming identity, if linked.
    pub user_id: Option<UserId>,
    /// Persisted claim timestamp.
    pub assigned_at: DateTime<Utc>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Assignment {
    /// Creates a claim on a chore stamped with the current clock time.
    #[must_use]
    pub fn claim(task_id: TaskId, user_id: Option<UserId>, clock: &impl Clock) -> Self {
        Self {
            id: AssignmentId::new(),
            task_id,
            user_id,
            assigned_at: clock.utc(),
            completed_at: None,
        }
    }

    /// Reconstructs an assignment from persisted storage.
    #[must_use]
    pub const fn from_persisted(data: PersistedAssignmentData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            user_id: data.user_id,
            assigned_at: data.assigned_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the assignment identifier.
    #[must_use]
    pub const fn id(&self) -> AssignmentId {
        self.id
    }

    /// Returns the owning task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the claiming identity, if linked.
    #[must_use]
    pub const fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Returns the claim timestamp.
    #[must_use]
    pub const fn assigned_at(&self) -> DateTime<Utc> {
        self.assigned_at
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Stamps the completion timestamp.
    ///
    /// Last write wins; completing an already-completed assignment simply
    /// overwrites the stamp.
    pub const fn mark_completed(&mut self, at: DateTime<Utc>) {
        self.completed_at = Some(at);
    }
}
