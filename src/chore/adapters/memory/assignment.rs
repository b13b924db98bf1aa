//! In-memory assignment store for chore lifecycle tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};

use crate::chore::{
    domain::{Assignment, TaskId},
    ports::{AssignmentStore, AssignmentStoreError, AssignmentStoreResult},
};

/// Thread-safe in-memory assignment store.
///
/// Rows are kept in insertion order; listing sorts by claim time, which
/// preserves insertion order for identical timestamps.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssignmentStore {
    rows: Arc<RwLock<Vec<Assignment>>>,
}

impl InMemoryAssignmentStore {
    /// Creates an empty in-memory assignment store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_read(
    rows: &Arc<RwLock<Vec<Assignment>>>,
) -> AssignmentStoreResult<std::sync::RwLockReadGuard<'_, Vec<Assignment>>> {
    rows.read()
        .map_err(|err| AssignmentStoreError::persistence(std::io::Error::other(err.to_string())))
}

fn lock_write(
    rows: &Arc<RwLock<Vec<Assignment>>>,
) -> AssignmentStoreResult<std::sync::RwLockWriteGuard<'_, Vec<Assignment>>> {
    rows.write()
        .map_err(|err| AssignmentStoreError::persistence(std::io::Error::other(err.to_string())))
}

#[async_trait]
impl AssignmentStore for InMemoryAssignmentStore {
    async fn insert(&self, assignment: &Assignment) -> AssignmentStoreResult<()> {
        let mut rows = lock_write(&self.rows)?;
        rows.push(assignment.clone());
        Ok(())
    }

    async fn complete_for_task(
        &self,
        task_id: TaskId,
        completed_at: DateTime<Utc>,
    ) -> AssignmentStoreResult<()> {
        let mut rows = lock_write(&self.rows)?;
        for row in rows.iter_mut().filter(|row| row.task_id() == task_id) {
            row.mark_completed(completed_at);
        }
        Ok(())
    }

    async fn list_for_tasks(&self, task_ids: &[TaskId]) -> AssignmentStoreResult<Vec<Assignment>> {
        let rows = lock_read(&self.rows)?;
        let mut matching: Vec<Assignment> = rows
            .iter()
            .filter(|row| task_ids.contains(&row.task_id()))
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.assigned_at().cmp(&b.assigned_at()));
        Ok(matching)
    }
}
