//! In-memory task store for chore lifecycle tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::chore::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use crate::family::domain::FamilyId;

/// Thread-safe in-memory task store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory task store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_family(
        &self,
        family_id: FamilyId,
        filter: impl Fn(&Task) -> bool,
    ) -> TaskStoreResult<Vec<Task>> {
        let state = lock_read(&self.state)?;
        Ok(state
            .values()
            .filter(|task| task.family_id() == family_id && filter(task))
            .cloned()
            .collect())
    }
}

fn lock_read(
    state: &Arc<RwLock<HashMap<TaskId, Task>>>,
) -> TaskStoreResult<std::sync::RwLockReadGuard<'_, HashMap<TaskId, Task>>> {
    state
        .read()
        .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
}

fn lock_write(
    state: &Arc<RwLock<HashMap<TaskId, Task>>>,
) -> TaskStoreResult<std::sync::RwLockWriteGuard<'_, HashMap<TaskId, Task>>> {
    state
        .write()
        .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
}

fn due_before(task: &Task, cutoff: DateTime<Utc>) -> bool {
    task.due_date().is_some_and(|due| due < cutoff)
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, task: &Task) -> TaskStoreResult<()> {
        let mut state = lock_write(&self.state)?;
        state.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let state = lock_read(&self.state)?;
        Ok(state.get(&id).cloned())
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskStoreResult<()> {
        let mut state = lock_write(&self.state)?;
        let task = state.get_mut(&id).ok_or(TaskStoreError::NotFound(id))?;
        task.set_status(status);
        Ok(())
    }

    async fn list_active(&self, family_id: FamilyId) -> TaskStoreResult<Vec<Task>> {
        let mut tasks = self.read_family(family_id, |task| task.status().is_active())?;
        tasks.sort_by(|a, b| a.due_date().cmp(&b.due_date()));
        Ok(tasks)
    }

    async fn list_terminal(&self, family_id: FamilyId) -> TaskStoreResult<Vec<Task>> {
        let mut tasks = self.read_family(family_id, |task| task.status().is_terminal())?;
        tasks.sort_by(|a, b| b.due_date().cmp(&a.due_date()));
        Ok(tasks)
    }

    async fn list_sweepable(
        &self,
        family_id: FamilyId,
        cutoff: DateTime<Utc>,
    ) -> TaskStoreResult<Vec<Task>> {
        self.read_family(family_id, |task| {
            task.status().is_sweepable() && due_before(task, cutoff)
        })
    }

    async fn list_missed(
        &self,
        family_id: FamilyId,
        cutoff: DateTime<Utc>,
    ) -> TaskStoreResult<Vec<Task>> {
        self.read_family(family_id, |task| {
            task.status().is_active() && due_before(task, cutoff)
        })
    }

    async fn mark_failed(&self, ids: &[TaskId]) -> TaskStoreResult<()> {
        let mut state = lock_write(&self.state)?;
        for id in ids {
            if let Some(task) = state.get_mut(id) {
                task.set_status(TaskStatus::Failed);
            }
        }
        Ok(())
    }
}
