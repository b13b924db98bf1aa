//! In-memory history log for chore lifecycle tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::chore::{
    domain::{HistoryEvent, TaskId},
    ports::{HistoryLog, HistoryLogError, HistoryLogResult},
};

/// Thread-safe in-memory append-only history log.
///
/// Events are kept in append order; queries sort by timestamp with a
/// stable sort, so events sharing a timestamp keep their append order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryLog {
    events: Arc<RwLock<Vec<HistoryEvent>>>,
}

impl InMemoryHistoryLog {
    /// Creates an empty in-memory history log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_read(
    events: &Arc<RwLock<Vec<HistoryEvent>>>,
) -> HistoryLogResult<std::sync::RwLockReadGuard<'_, Vec<HistoryEvent>>> {
    events
        .read()
        .map_err(|err| HistoryLogError::persistence(std::io::Error::other(err.to_string())))
}

fn lock_write(
    events: &Arc<RwLock<Vec<HistoryEvent>>>,
) -> HistoryLogResult<std::sync::RwLockWriteGuard<'_, Vec<HistoryEvent>>> {
    events
        .write()
        .map_err(|err| HistoryLogError::persistence(std::io::Error::other(err.to_string())))
}

#[async_trait]
impl HistoryLog for InMemoryHistoryLog {
    async fn append(&self, event: &HistoryEvent) -> HistoryLogResult<()> {
        let mut events = lock_write(&self.events)?;
        events.push(event.clone());
        Ok(())
    }

    async fn for_task(&self, task_id: TaskId) -> HistoryLogResult<Vec<HistoryEvent>> {
        let events = lock_read(&self.events)?;
        let mut matching: Vec<HistoryEvent> = events
            .iter()
            .filter(|event| event.task_id() == task_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.created_at().cmp(&b.created_at()));
        Ok(matching)
    }

    async fn for_tasks(
        &self,
        task_ids: &[TaskId],
    ) -> HistoryLogResult<HashMap<TaskId, Vec<HistoryEvent>>> {
        let events = lock_read(&self.events)?;
        let mut grouped: HashMap<TaskId, Vec<HistoryEvent>> = HashMap::new();
        for event in events
            .iter()
            .filter(|event| task_ids.contains(&event.task_id()))
        {
            grouped.entry(event.task_id()).or_default().push(event.clone());
        }
        for timeline in grouped.values_mut() {
            timeline.sort_by(|a, b| a.created_at().cmp(&b.created_at()));
        }
        Ok(grouped)
    }
}
