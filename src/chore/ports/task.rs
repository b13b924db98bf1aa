//! Task store port for chore persistence and filtered listing.

use crate::chore::domain::{Task, TaskId, TaskStatus};
use crate::family::domain::FamilyId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Chore persistence contract.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Stores a new chore.
    async fn insert(&self, task: &Task) -> TaskStoreResult<()>;

    /// Finds a chore by identifier.
    ///
    /// Returns `None` when the chore does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>>;

    /// Overwrites the status of an existing chore.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the chore does not exist.
    async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskStoreResult<()>;

    /// Returns a family's active chores ordered by due date ascending.
    ///
    /// Chores without a due date sort wherever the backing store places
    /// nulls; no explicit normalization is applied.
    async fn list_active(&self, family_id: FamilyId) -> TaskStoreResult<Vec<Task>>;

    /// Returns a family's terminal chores ordered by due date descending.
    async fn list_terminal(&self, family_id: FamilyId) -> TaskStoreResult<Vec<Task>>;

    /// Returns a family's chores eligible for the deadline sweep: status
    /// `assigned` or `in_progress` with a due date before `cutoff`.
    async fn list_sweepable(
        &self,
        family_id: FamilyId,
        cutoff: DateTime<Utc>,
    ) -> TaskStoreResult<Vec<Task>>;

    /// Returns a family's active chores with a due date before `cutoff`,
    /// including `unassigned` ones the sweep leaves alone.
    async fn list_missed(
        &self,
        family_id: FamilyId,
        cutoff: DateTime<Utc>,
    ) -> TaskStoreResult<Vec<Task>>;

    /// Bulk-overwrites the given chores to `failed`.
    ///
    /// Identifiers that match no chore are skipped.
    async fn mark_failed(&self, ids: &[TaskId]) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The chore was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
