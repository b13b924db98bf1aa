//! Lazy deadline sweep that force-fails overdue chores at read time.
//!
//! There is no background scheduler; "is this chore failed yet" is
//! enforced by running the sweep synchronously at the start of every
//! family-scoped read. The sweep is idempotent: once a chore is `failed`
//! it is no longer eligible, so re-running is a no-op.

use crate::chore::{
    domain::{HistoryAction, HistoryEvent, Task, TaskId},
    ports::{HistoryLog, TaskStore},
};
use crate::family::domain::FamilyId;
use mockable::Clock;
use std::sync::Arc;

/// Read-triggered sweep service over a family's overdue chores.
#[derive(Clone)]
pub struct OverdueSweepService<T, H, C>
where
    T: TaskStore,
    H: HistoryLog,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    history: Arc<H>,
    clock: Arc<C>,
}

impl<T, H, C> OverdueSweepService<T, H, C>
where
    T: TaskStore,
    H: HistoryLog,
    C: Clock + Send + Sync,
{
    /// Creates a new sweep service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, history: Arc<H>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            history,
            clock,
        }
    }

    /// Force-fails the family's chores whose status is `assigned` or
    /// `in_progress` and whose due date has passed, appending one
    /// system-attributed `failed` event per chore.
    ///
    /// Returns the number of chores swept. Store failures abort the sweep
    /// silently: they are logged, never surfaced, and the caller's read
    /// proceeds against whatever statuses are currently persisted.
    pub async fn sweep(&self, family_id: FamilyId) -> usize {
        let now = self.clock.utc();
        let overdue = match self.tasks.list_sweepable(family_id, now).await {
            Ok(tasks) => tasks,
            Err(err) => {
                tracing::warn!(%family_id, error = %err, "deadline sweep aborted: overdue listing failed");
                return 0;
            }
        };
        if overdue.is_empty() {
            return 0;
        }

        let ids: Vec<TaskId> = overdue.iter().map(Task::id).collect();
        if let Err(err) = self.tasks.mark_failed(&ids).await {
            tracing::warn!(%family_id, error = %err, "deadline sweep aborted: bulk fail update failed");
            return 0;
        }

        for task in &overdue {
            let event = HistoryEvent::record(task.id(), None, HistoryAction::Failed, &*self.clock);
            if let Err(err) = self.history.append(&event).await {
                tracing::warn!(task_id = %task.id(), error = %err, "deadline sweep: audit append failed");
            }
        }
        overdue.len()
    }
}
