//! Chore aggregate root and lifecycle status types.

use super::{ChoreDomainError, ParseTaskStatusError, TaskId};
use crate::family::domain::{FamilyId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chore lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Nobody has claimed the chore yet.
    Unassigned,
    /// A member has claimed, or been given, the chore.
    Assigned,
    /// Work on the chore has started.
    InProgress,
    /// The chore has been reported done.
    Done,
    /// A parent has verified the completed chore.
    Verified,
    /// The chore was failed, by the deadline sweep or manually.
    Failed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unassigned => "unassigned",
            Self::Assigned => "assigned",
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Verified => "verified",
            Self::Failed => "failed",
        }
    }

    /// Returns whether the status counts as active for listing purposes.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Unassigned | Self::Assigned | Self::InProgress)
    }

    /// Returns whether the status is terminal for listing purposes.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !self.is_active()
    }

    /// Returns whether the deadline sweep may force-fail a chore in this
    /// status.
    ///
    /// Unassigned chores are never swept; a chore nobody committed to is
    /// left on the board past its deadline.
    #[must_use]
    pub const fn is_sweepable(self) -> bool {
        matches!(self, Self::Assigned | Self::InProgress)
    }

    /// Returns whether a status overwrite from `self` to `target` is
    /// permitted.
    ///
    /// Every transition is allowed, including backward moves such as
    /// `done` to `unassigned`; validation of explicit status changes is
    /// limited to membership in the six-value enum. The allow-all policy
    /// is pinned by an exhaustive transition-table test.
    #[must_use]
    pub const fn can_transition_to(self, _target: Self) -> bool {
        true
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "unassigned" => Ok(Self::Unassigned),
            "assigned" => Ok(Self::Assigned),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            "verified" => Ok(Self::Verified),
            "failed" => Ok(Self::Failed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Validated, non-empty chore title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreDomainError::EmptyTitle`] if the value is empty or
    /// whitespace-only after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ChoreDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(ChoreDomainError::EmptyTitle);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chore aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    family_id: FamilyId,
    created_by: UserId,
    title: TaskTitle,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    reward_points: Option<i32>,
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

/// Parameter object for creating a new chore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Owning family.
    pub family_id: FamilyId,
    /// Identity of the creating member.
    pub created_by: UserId,
    /// Validated chore title.
    pub title: TaskTitle,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional deadline.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional reward points granted on completion.
    pub reward_points: Option<i32>,
    /// Initial lifecycle status (`unassigned`, or `assigned` when created
    /// with an assignee).
    pub initial_status: TaskStatus,
}

/// Parameter object for reconstructing a persisted chore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning family.
    pub family_id: FamilyId,
    /// Persisted creator identity.
    pub created_by: UserId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted deadline, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted reward points, if any.
    pub reward_points: Option<i32>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new chore stamped with the current clock time.
    #[must_use]
    pub fn new(data: NewTaskData, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            family_id: data.family_id,
            created_by: data.created_by,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            reward_points: data.reward_points,
            status: data.initial_status,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a chore from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            family_id: data.family_id,
            created_by: data.created_by,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            reward_points: data.reward_points,
            status: data.status,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning family.
    #[must_use]
    pub const fn family_id(&self) -> FamilyId {
        self.family_id
    }

    /// Returns the creator's identity.
    #[must_use]
    pub const fn created_by(&self) -> UserId {
        self.created_by
    }

    /// Returns the chore title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the reward points, if any.
    #[must_use]
    pub const fn reward_points(&self) -> Option<i32> {
        self.reward_points
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Overwrites the lifecycle status.
    ///
    /// Unconditional: preconditions, where any exist, live with the
    /// calling operation.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Returns whether the chore is active with a deadline already in the
    /// past at `now`.
    ///
    /// This is the read-time `missed` projection used by the history
    /// overview; it is never persisted.
    #[must_use]
    pub fn has_missed_deadline(&self, now: DateTime<Utc>) -> bool {
        self.status.is_active() && self.due_date.is_some_and(|due| due < now)
    }
}
