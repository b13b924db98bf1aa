//! Lifecycle engine for chore state-changing operations.
//!
//! Create, take, complete, fail, and explicit status overwrites each
//! perform two to three independent store writes with no transaction
//! wrapping and no compensating rollback; a failure mid-operation leaves
//! the earlier writes in place. The engine favours partial progress over
//! strict atomicity, and the sweep re-runs on every read to converge
//! overdue state.

use crate::chore::{
    domain::{
        Assignment, ChoreDomainError, HistoryAction, HistoryEvent, NewTaskData,
        ParseTaskStatusError, Task, TaskId, TaskStatus, TaskTitle,
    },
    ports::{
        AssignmentStore, AssignmentStoreError, HistoryLog, HistoryLogError, TaskStore,
        TaskStoreError,
    },
};
use crate::family::{
    domain::{FamilyId, MemberId, UserId},
    ports::{DirectoryError, MemberDirectory},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a chore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateChoreRequest {
    family_id: FamilyId,
    created_by: UserId,
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    reward_points: Option<i32>,
    assignee_member_id: Option<MemberId>,
}

impl CreateChoreRequest {
    /// Creates a request with required fields.
    #[must_use]
    pub fn new(family_id: FamilyId, created_by: UserId, title: impl Into<String>) -> Self {
        Self {
            family_id,
            created_by,
            title: title.into(),
            description: None,
            due_date: None,
            reward_points: None,
            assignee_member_id: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the reward points.
    #[must_use]
    pub const fn with_reward_points(mut self, reward_points: i32) -> Self {
        self.reward_points = Some(reward_points);
        self
    }

    /// Assigns the chore to a member at creation time.
    #[must_use]
    pub const fn with_assignee(mut self, member_id: MemberId) -> Self {
        self.assignee_member_id = Some(member_id);
        self
    }
}

/// Service-level errors for chore lifecycle operations.
#[derive(Debug, Error)]
pub enum ChoreLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ChoreDomainError),
    /// The requested status is not one of the six enum values.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
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

/// Result type for chore lifecycle service operations.
pub type ChoreLifecycleResult<T> = Result<T, ChoreLifecycleError>;

/// Chore lifecycle orchestration service.
#[derive(Clone)]
pub struct ChoreLifecycleService<T, A, H, D, C>
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

impl<T, A, H, D, C> ChoreLifecycleService<T, A, H, D, C>
where
    T: TaskStore,
    A: AssignmentStore,
    H: HistoryLog,
    D: MemberDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new chore lifecycle service.
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

    /// Creates a new chore, optionally assigned to a member.
    ///
    /// Supplying an assignee makes the chore start out `assigned`; the
    /// assignment row itself is only written when the member resolves to a
    /// linked identity. A member without one leaves the chore `assigned`
    /// with no row.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreLifecycleError::Domain`] when the title is empty or
    /// whitespace-only (nothing is written in that case), or a store error
    /// when persistence fails mid-operation.
    pub async fn create(&self, request: CreateChoreRequest) -> ChoreLifecycleResult<Task> {
        let title = TaskTitle::new(request.title)?;

        let mut assignee = None;
        if let Some(member_id) = request.assignee_member_id {
            assignee = self.directory.find_member(member_id).await?;
        }
        let initial_status = if request.assignee_member_id.is_some() {
            TaskStatus::Assigned
        } else {
            TaskStatus::Unassigned
        };

        let task = Task::new(
            NewTaskData {
                family_id: request.family_id,
                created_by: request.created_by,
                title,
                description: request.description,
                due_date: request.due_date,
                reward_points: request.reward_points,
                initial_status,
            },
            &*self.clock,
        );
        self.tasks.insert(&task).await?;

        if let Some(user_id) = assignee.and_then(|member| member.user_id) {
            let assignment = Assignment::claim(task.id(), Some(user_id), &*self.clock);
            self.assignments.insert(&assignment).await?;
        }

        let event = HistoryEvent::record(
            task.id(),
            Some(request.created_by),
            HistoryAction::Created,
            &*self.clock,
        );
        self.history.append(&event).await?;
        Ok(task)
    }

    /// Records a member's claim on a chore.
    ///
    /// Inserts a fresh assignment row unconditionally and overwrites the
    /// status to `assigned`. No exclusivity is enforced; concurrent takers
    /// each succeed and each get a row.
    ///
    /// # Errors
    ///
    /// Returns a store error when either write fails; a failure after the
    /// insert leaves the row in place with the status untouched.
    pub async fn take(&self, task_id: TaskId, member_identity: UserId) -> ChoreLifecycleResult<()> {
        let assignment = Assignment::claim(task_id, Some(member_identity), &*self.clock);
        self.assignments.insert(&assignment).await?;
        self.tasks.update_status(task_id, TaskStatus::Assigned).await?;

        let event = HistoryEvent::record(
            task_id,
            Some(member_identity),
            HistoryAction::Taken,
            &*self.clock,
        );
        self.history.append(&event).await?;
        Ok(())
    }

    /// Marks a chore done.
    ///
    /// Overwrites the status regardless of its prior value and stamps
    /// `completed_at` on the chore's assignment rows. Calling this twice
    /// yields `done` both times, with two independent `completed` events.
    ///
    /// # Errors
    ///
    /// Returns a store error when any of the writes fails.
    pub async fn complete(&self, task_id: TaskId, actor: UserId) -> ChoreLifecycleResult<()> {
        self.tasks.update_status(task_id, TaskStatus::Done).await?;
        self.assignments
            .complete_for_task(task_id, self.clock.utc())
            .await?;

        let event =
            HistoryEvent::record(task_id, Some(actor), HistoryAction::Completed, &*self.clock);
        self.history.append(&event).await?;
        Ok(())
    }

    /// Fails a chore manually.
    ///
    /// # Errors
    ///
    /// Returns a store error when any of the writes fails.
    pub async fn fail(&self, task_id: TaskId, actor: UserId) -> ChoreLifecycleResult<()> {
        self.tasks.update_status(task_id, TaskStatus::Failed).await?;

        let event = HistoryEvent::record(
            task_id,
            Some(actor),
            HistoryAction::FailedManual,
            &*self.clock,
        );
        self.history.append(&event).await?;
        Ok(())
    }

    /// Overwrites a chore's status with an explicitly requested value.
    ///
    /// Validation is limited to membership in the six-value enum; the
    /// allow-all table ([`TaskStatus::can_transition_to`]) permits every
    /// overwrite, including backward moves.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreLifecycleError::InvalidStatus`] for an unknown
    /// status value (the chore is left untouched), or a store error when a
    /// write fails.
    pub async fn set_status(
        &self,
        task_id: TaskId,
        actor: UserId,
        new_status: &str,
    ) -> ChoreLifecycleResult<TaskStatus> {
        let status = TaskStatus::try_from(new_status)?;
        self.tasks.update_status(task_id, status).await?;

        let event = HistoryEvent::record(
            task_id,
            Some(actor),
            HistoryAction::StatusChanged(status),
            &*self.clock,
        );
        self.history.append(&event).await?;
        Ok(status)
    }
}
