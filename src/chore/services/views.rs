//! View assembly: joining chores with assignees, members, and history.
//!
//! Two history read shapes coexist deliberately: the timeline view (full
//! assignee list plus the ordered audit trail) and the overview (derived
//! `missed` display status plus a single best-guess assignee name). They
//! answer different screens in the original product and are kept as
//! separately named operations rather than merged.

use crate::chore::{
    domain::{AssignmentId, HistoryEvent, Task, TaskId, TaskStatus},
    ports::{
        AssignmentStore, AssignmentStoreError, HistoryLog, HistoryLogError, TaskStore,
        TaskStoreError,
    },
};
use crate::family::{
    domain::{FamilyId, Member, UserId},
    ports::{DirectoryError, MemberDirectory},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;

/// One assignee entry decorating a chore view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssigneeView {
    /// Backing assignment row.
    pub assignment_id: AssignmentId,
    /// Claiming identity, when linked.
    pub user_id: Option<UserId>,
    /// Claim timestamp.
    pub assigned_at: DateTime<Utc>,
    /// Completion timestamp, when completed.
    pub completed_at: Option<DateTime<Utc>>,
    /// Resolved member profile; `None` when the identity matches no
    /// family member.
    pub member: Option<Member>,
}

/// A chore decorated with its assignees, as listed on the active board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoreWithAssignees {
    /// The chore itself.
    pub task: Task,
    /// Assignee entries, ordered by claim time.
    pub assignees: Vec<AssigneeView>,
}

/// A terminal chore with assignees and its full audit timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoreHistoryEntry {
    /// The chore itself.
    pub task: Task,
    /// Assignee entries, ordered by claim time.
    pub assignees: Vec<AssigneeView>,
    /// Audit events ordered by timestamp ascending.
    pub timeline: Vec<HistoryEvent>,
}

/// Display status reported by the history overview.
///
/// `missed` exists only here: it is derived at read time for active
/// chores whose deadline has passed and is never persisted. The sweep
/// persists `failed` for the assigned/in-progress subset; overdue
/// `unassigned` chores surface only through this projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum DisplayStatus {
    /// The persisted lifecycle status.
    Persisted(TaskStatus),
    /// Active chore whose deadline has passed.
    Missed,
}

impl DisplayStatus {
    /// Derives the display status for a chore at the given instant.
    #[must_use]
    pub fn for_task(task: &Task, now: DateTime<Utc>) -> Self {
        if task.has_missed_deadline(now) {
            Self::Missed
        } else {
            Self::Persisted(task.status())
        }
    }

    /// Returns the presentation tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Persisted(status) => status.as_str(),
            Self::Missed => "missed",
        }
    }
}

impl From<DisplayStatus> for String {
    fn from(status: DisplayStatus) -> Self {
        status.as_str().to_owned()
    }
}

/// One row of the history overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoreOverviewEntry {
    /// The chore itself.
    pub task: Task,
    /// Persisted or derived display status.
    pub display_status: DisplayStatus,
    /// Display name of the first assignee, when one resolves.
    pub assignee_name: Option<String>,
}

/// Service-level errors for view assembly.
#[derive(Debug, Error)]
pub enum ChoreViewError {
    /// Task store operation failed.
    #[error(transparent)]
    Task(#[from] TaskStoreError),
    /// Assignment store operation failed.
    #[error(transparent)]
    Assignment(#[from] AssignmentStoreError),
    /// History log operation failed.
    #[error(transparent)]
    History(#[from] HistoryLogError),
    /// Member directory lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Result type for view assembly operations.
pub type ChoreViewResult<T> = Result<T, ChoreViewError>;

/// View assembly service joining chores, assignments, members, and
/// history.
#[derive(Clone)]
pub struct ChoreViewService<T, A, H, D, C>
where
    T: TaskStore,
    A: AssignmentStore,
    H: HistoryLog,
    D: MemberDirectory,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    assignments: Arc<A>,
    history: Arc<H>,
    directory: Arc<D>,
    clock: Arc<C>,
}

impl<T, A, H, D, C> ChoreViewService<T, A, H, D, C>
where
    T: TaskStore,
    A: AssignmentStore,
    H: HistoryLog,
    D: MemberDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new view service.
    #[must_use]
    pub const fn new(
        tasks: Arc<T>,
        assignments: Arc<A>,
        history: Arc<H>,
        directory: Arc<D>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            assignments,
            history,
            directory,
            clock,
        }
    }

    /// Returns the family's active chores with assignees, ordered by due
    /// date ascending.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreViewError`] when a store or directory read fails.
    pub async fn active_board(
        &self,
        family_id: FamilyId,
    ) -> ChoreViewResult<Vec<ChoreWithAssignees>> {
        let tasks = self.tasks.list_active(family_id).await?;
        self.decorate(family_id, tasks).await
    }

    /// Returns the family's terminal chores with assignees and full audit
    /// timelines, ordered by due date descending.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreViewError`] when a store or directory read fails.
    pub async fn history_timeline(
        &self,
        family_id: FamilyId,
    ) -> ChoreViewResult<Vec<ChoreHistoryEntry>> {
        let tasks = self.tasks.list_terminal(family_id).await?;
        let ids: Vec<TaskId> = tasks.iter().map(Task::id).collect();
        let mut timelines = self.history.for_tasks(&ids).await?;
        let decorated = self.decorate(family_id, tasks).await?;

        Ok(decorated
            .into_iter()
            .map(|entry| {
                let timeline = timelines.remove(&entry.task.id()).unwrap_or_default();
                ChoreHistoryEntry {
                    task: entry.task,
                    assignees: entry.assignees,
                    timeline,
                }
            })
            .collect())
    }

    /// Returns the overview rows: terminal chores plus active chores past
    /// their deadline, the latter reported with the derived `missed`
    /// display status, ordered by due date descending.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreViewError`] when a store or directory read fails.
    pub async fn history_overview(
        &self,
        family_id: FamilyId,
    ) -> ChoreViewResult<Vec<ChoreOverviewEntry>> {
        let now = self.clock.utc();
        let mut tasks = self.tasks.list_terminal(family_id).await?;
        let missed = self.tasks.list_missed(family_id, now).await?;
        tasks.extend(missed);
        tasks.sort_by(|a, b| b.due_date().cmp(&a.due_date()));

        let ids: Vec<TaskId> = tasks.iter().map(Task::id).collect();
        let rows = self.assignments.list_for_tasks(&ids).await?;
        let profiles = self.family_profiles(family_id).await?;

        // The first assignment row decides the reported name, mirroring
        // the original list rendering.
        let mut seen: HashSet<TaskId> = HashSet::new();
        let mut name_by_task: HashMap<TaskId, String> = HashMap::new();
        for row in rows {
            if !seen.insert(row.task_id()) {
                continue;
            }
            if let Some(member) = row.user_id().and_then(|user_id| profiles.get(&user_id)) {
                name_by_task.insert(row.task_id(), member.name.clone());
            }
        }

        Ok(tasks
            .into_iter()
            .map(|task| {
                let display_status = DisplayStatus::for_task(&task, now);
                let assignee_name = name_by_task.remove(&task.id());
                ChoreOverviewEntry {
                    task,
                    display_status,
                    assignee_name,
                }
            })
            .collect())
    }

    /// Returns one chore's audit events, ordered by timestamp ascending.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreViewError::History`] when the log read fails.
    pub async fn task_timeline(&self, task_id: TaskId) -> ChoreViewResult<Vec<HistoryEvent>> {
        Ok(self.history.for_task(task_id).await?)
    }

    async fn family_profiles(
        &self,
        family_id: FamilyId,
    ) -> ChoreViewResult<HashMap<UserId, Member>> {
        let members = self.directory.members_of_family(family_id).await?;
        let mut profiles = HashMap::new();
        for member in members {
            if let Some(user_id) = member.user_id {
                profiles.insert(user_id, member);
            }
        }
        Ok(profiles)
    }

    async fn decorate(
        &self,
        family_id: FamilyId,
        tasks: Vec<Task>,
    ) -> ChoreViewResult<Vec<ChoreWithAssignees>> {
        let ids: Vec<TaskId> = tasks.iter().map(Task::id).collect();
        let rows = self.assignments.list_for_tasks(&ids).await?;
        let profiles = self.family_profiles(family_id).await?;

        let mut by_task: HashMap<TaskId, Vec<AssigneeView>> = HashMap::new();
        for row in rows {
            let member = row
                .user_id()
                .and_then(|user_id| profiles.get(&user_id).cloned());
            by_task.entry(row.task_id()).or_default().push(AssigneeView {
                assignment_id: row.id(),
                user_id: row.user_id(),
                assigned_at: row.assigned_at(),
                completed_at: row.completed_at(),
                member,
            });
        }

        Ok(tasks
            .into_iter()
            .map(|task| {
                let assignees = by_task.remove(&task.id()).unwrap_or_default();
                ChoreWithAssignees { task, assignees }
            })
            .collect())
    }
}
