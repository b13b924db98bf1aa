//! History log port: append-only audit trail queries.

use crate::chore::domain::{HistoryEvent, TaskId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Result type for history log operations.
pub type HistoryLogResult<T> = Result<T, HistoryLogError>;

/// Append-only audit trail contract.
///
/// No mutation or deletion operation exists; the log is the sole source
/// of truth for what happened to a chore, independent of its current
/// status.
#[async_trait]
pub trait HistoryLog: Send + Sync {
    /// Appends an event to the log.
    async fn append(&self, event: &HistoryEvent) -> HistoryLogResult<()>;

    /// Returns a chore's events ordered by timestamp ascending.
    async fn for_task(&self, task_id: TaskId) -> HistoryLogResult<Vec<HistoryEvent>>;

    /// Returns the events of several chores, grouped per chore and each
    /// group ordered by timestamp ascending.
    ///
    /// Chores with no events are absent from the map.
    async fn for_tasks(
        &self,
        task_ids: &[TaskId],
    ) -> HistoryLogResult<HashMap<TaskId, Vec<HistoryEvent>>>;
}

/// Errors returned by history log implementations.
#[derive(Debug, Clone, Error)]
pub enum HistoryLogError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl HistoryLogError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
