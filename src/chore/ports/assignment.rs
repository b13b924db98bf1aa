//! Assignment store port for claim persistence.

use crate::chore::domain::{Assignment, TaskId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for assignment store operations.
pub type AssignmentStoreResult<T> = Result<T, AssignmentStoreError>;

/// Assignment persistence contract.
#[async_trait]
pub trait AssignmentStore: Send + Sync {
    /// Stores a new assignment row.
    ///
    /// No uniqueness is enforced; a chore may hold several rows.
    async fn insert(&self, assignment: &Assignment) -> AssignmentStoreResult<()>;

    /// Stamps `completed_at` on every assignment row of the given chore.
    ///
    /// Matching by task identifier mirrors the original store's equality
    /// update; with several rows present, all of them receive the stamp.
    async fn complete_for_task(
        &self,
        task_id: TaskId,
        completed_at: DateTime<Utc>,
    ) -> AssignmentStoreResult<()>;

    /// Returns all assignment rows of the given chores, ordered by claim
    /// time ascending.
    async fn list_for_tasks(&self, task_ids: &[TaskId]) -> AssignmentStoreResult<Vec<Assignment>>;
}

/// Errors returned by assignment store implementations.
#[derive(Debug, Clone, Error)]
pub enum AssignmentStoreError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AssignmentStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
