//! Append-only audit events for chore lifecycle actions.

use super::{HistoryEventId, ParseHistoryActionError, TaskId, TaskStatus};
use crate::family::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of the explicit status-change action tag.
const STATUS_TAG_PREFIX: &str = "status:";

/// Lifecycle action recorded in the history log.
///
/// Persisted as a string tag: `created`, `taken`, `completed`, `failed`,
/// `failed_manual`, or `status:<value>` for explicit status overwrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum HistoryAction {
    /// The chore was created.
    Created,
    /// A member took the chore.
    Taken,
    /// The chore was reported done.
    Completed,
    /// The deadline sweep force-failed the chore.
    Failed,
    /// A member failed the chore manually.
    FailedManual,
    /// The status was explicitly overwritten with the given value.
    StatusChanged(TaskStatus),
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::Taken => f.write_str("taken"),
            Self::Completed => f.write_str("completed"),
            Self::Failed => f.write_str("failed"),
            Self::FailedManual => f.write_str("failed_manual"),
            Self::StatusChanged(status) => write!(f, "{STATUS_TAG_PREFIX}{}", status.as_str()),
        }
    }
}

impl From<HistoryAction> for String {
    fn from(action: HistoryAction) -> Self {
        action.to_string()
    }
}

impl TryFrom<&str> for HistoryAction {
    type Error = ParseHistoryActionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if let Some(status_str) = value.strip_prefix(STATUS_TAG_PREFIX) {
            let status = TaskStatus::try_from(status_str)
                .map_err(|_| ParseHistoryActionError(value.to_owned()))?;
            return Ok(Self::StatusChanged(status));
        }
        match value {
            "created" => Ok(Self::Created),
            "taken" => Ok(Self::Taken),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            "failed_manual" => Ok(Self::FailedManual),
            _ => Err(ParseHistoryActionError(value.to_owned())),
        }
    }
}

impl TryFrom<String> for HistoryAction {
    type Error = ParseHistoryActionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

/// Immutable audit record of one lifecycle action on one chore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEvent {
    id: HistoryEventId,
    task_id: TaskId,
    user_id: Option<UserId>,
    action: HistoryAction,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted history event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedHistoryEventData {
    /// Persisted event identifier.
    pub id: HistoryEventId,
    /// Persisted owning task.
    pub task_id: TaskId,
    /// Persisted acting identity; `None` for system-generated events.
    pub user_id: Option<UserId>,
    /// Persisted action tag.
    pub action: HistoryAction,
    /// Persisted event timestamp.
    pub created_at: DateTime<Utc>,
}

impl HistoryEvent {
    /// Records an action stamped with the current clock time.
    ///
    /// `actor` is `None` for system-generated events such as sweep
    /// failures.
    #[must_use]
    pub fn record(
        task_id: TaskId,
        actor: Option<UserId>,
        action: HistoryAction,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: HistoryEventId::new(),
            task_id,
            user_id: actor,
            action,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs an event from persisted storage.
    #[must_use]
    pub const fn from_persisted(data: PersistedHistoryEventData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            user_id: data.user_id,
            action: data.action,
            created_at: data.created_at,
        }
    }

    /// Returns the event identifier.
    #[must_use]
    pub const fn id(&self) -> HistoryEventId {
        self.id
    }

    /// Returns the owning task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the acting identity; `None` for system-generated events.
    #[must_use]
    pub const fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Returns the recorded action.
    #[must_use]
    pub const fn action(&self) -> HistoryAction {
        self.action
    }

    /// Returns the event timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
