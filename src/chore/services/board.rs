//! Operation facade exposing the board's request/response surface.
//!
//! Each operation resolves the caller's credential to an identity, then
//! the identity to a family membership, before delegating to the
//! lifecycle engine or the view assembler. Family-scoped reads run the
//! deadline sweep first, so overdue chores are failed before anything is
//! listed. Errors carry the status code the presentation layer should
//! answer with; root causes of storage failures are logged here and never
//! echoed to the caller.

use crate::chore::{
    domain::{ChoreDomainError, HistoryEvent, ParseTaskStatusError, Task, TaskId},
    ports::{AssignmentStore, HistoryLog, TaskStore},
};
use crate::family::{
    domain::{FamilyMembership, Identity, MemberId, SessionCredential},
    ports::{DirectoryError, IdentityError, IdentityResolver, MemberDirectory},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use super::{
    lifecycle::{ChoreLifecycleError, ChoreLifecycleService, CreateChoreRequest},
    sweeper::OverdueSweepService,
    views::{
        ChoreHistoryEntry, ChoreOverviewEntry, ChoreViewError, ChoreViewService,
        ChoreWithAssignees,
    },
};

/// Response shape for the active board listing.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveChores {
    /// Active chores with their assignees, due date ascending.
    pub tasks: Vec<ChoreWithAssignees>,
}

/// Response shape for the timeline-carrying history listing.
#[derive(Debug, Clone, Serialize)]
pub struct ChoreHistory {
    /// Terminal chores with assignees and audit timelines, due date
    /// descending.
    pub tasks: Vec<ChoreHistoryEntry>,
}

/// Response shape for the overview history listing.
#[derive(Debug, Clone, Serialize)]
pub struct ChoreHistoryOverview {
    /// Overview rows with derived display statuses, due date descending.
    pub tasks: Vec<ChoreOverviewEntry>,
}

/// Acknowledgement returned by state-changing operations.
#[derive(Debug, Clone, Serialize)]
pub struct OperationAck {
    /// Human-readable confirmation.
    pub message: String,
}

impl OperationAck {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Request payload for creating a chore through the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChore {
    /// Required title; rejected when empty after trimming.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional deadline.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional reward points.
    pub reward_points: Option<i32>,
    /// Optional member to assign at creation time.
    pub assignee_member_id: Option<MemberId>,
}

impl NewChore {
    /// Creates a payload with only the title set.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            reward_points: None,
            assignee_member_id: None,
        }
    }
}

/// Errors answered by board operations, with their response status.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The credential resolves to no live session.
    #[error("no active session")]
    NoSession,
    /// The caller's identity belongs to no family.
    #[error("caller belongs to no family")]
    NoFamily,
    /// Request validation failed.
    #[error(transparent)]
    Validation(#[from] ChoreDomainError),
    /// The requested status is not one of the six enum values.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// Storage-layer failure; the root cause is logged server-side.
    #[error("storage error")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardError {
    /// Returns the HTTP status code the presentation layer should answer
    /// with.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::NoSession => 401,
            Self::NoFamily | Self::Validation(_) | Self::InvalidStatus(_) => 400,
            Self::Storage(_) => 500,
        }
    }

    fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        tracing::error!(error = %err, "board operation failed in storage");
        Self::Storage(Arc::new(err))
    }
}

impl From<IdentityError> for BoardError {
    fn from(err: IdentityError) -> Self {
        Self::storage(err)
    }
}

impl From<DirectoryError> for BoardError {
    fn from(err: DirectoryError) -> Self {
        Self::storage(err)
    }
}

impl From<ChoreLifecycleError> for BoardError {
    fn from(err: ChoreLifecycleError) -> Self {
        match err {
            ChoreLifecycleError::Domain(domain) => Self::Validation(domain),
            ChoreLifecycleError::InvalidStatus(status) => Self::InvalidStatus(status),
            other => Self::storage(other),
        }
    }
}

impl From<ChoreViewError> for BoardError {
    fn from(err: ChoreViewError) -> Self {
        Self::storage(err)
    }
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Authenticated caller context.
struct Caller {
    identity: Identity,
    membership: FamilyMembership,
}

/// The board's operation surface over the chore engine.
#[derive(Clone)]
pub struct ChoreBoardService<I, T, A, H, D, C>
where
    I: IdentityResolver,
    T: TaskStore,
    A: AssignmentStore,
    H: HistoryLog,
    D: MemberDirectory,
    C: Clock + Send + Sync,
{
    identity: Arc<I>,
    directory: Arc<D>,
    lifecycle: ChoreLifecycleService<T, A, H, D, C>,
    sweeper: OverdueSweepService<T, H, C>,
    views: ChoreViewService<T, A, H, D, C>,
}

impl<I, T, A, H, D, C> ChoreBoardService<I, T, A, H, D, C>
where
    I: IdentityResolver,
    T: TaskStore,
    A: AssignmentStore,
    H: HistoryLog,
    D: MemberDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a board service over the given ports.
    #[must_use]
    pub fn new(
        identity: Arc<I>,
        tasks: Arc<T>,
        assignments: Arc<A>,
        history: Arc<H>,
        directory: Arc<D>,
        clock: Arc<C>,
    ) -> Self {
        let lifecycle = ChoreLifecycleService::new(
            Arc::clone(&tasks),
            Arc::clone(&assignments),
            Arc::clone(&history),
            Arc::clone(&directory),
            Arc::clone(&clock),
        );
        let sweeper =
            OverdueSweepService::new(Arc::clone(&tasks), Arc::clone(&history), Arc::clone(&clock));
        let views = ChoreViewService::new(tasks, assignments, history, Arc::clone(&directory), clock);

        Self {
            identity,
            directory,
            lifecycle,
            sweeper,
            views,
        }
    }

    /// Lists the caller family's active chores, sweeping overdue ones
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoSession`] or [`BoardError::NoFamily`] when
    /// the caller does not resolve, or [`BoardError::Storage`] on a store
    /// failure.
    pub async fn list_active(&self, credential: &SessionCredential) -> BoardResult<ActiveChores> {
        let caller = self.authenticate(credential).await?;
        self.sweeper.sweep(caller.membership.family_id).await;
        let tasks = self.views.active_board(caller.membership.family_id).await?;
        Ok(ActiveChores { tasks })
    }

    /// Lists the caller family's terminal chores with full timelines,
    /// sweeping overdue ones first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoSession`] or [`BoardError::NoFamily`] when
    /// the caller does not resolve, or [`BoardError::Storage`] on a store
    /// failure.
    pub async fn list_history(&self, credential: &SessionCredential) -> BoardResult<ChoreHistory> {
        let caller = self.authenticate(credential).await?;
        self.sweeper.sweep(caller.membership.family_id).await;
        let tasks = self
            .views
            .history_timeline(caller.membership.family_id)
            .await?;
        Ok(ChoreHistory { tasks })
    }

    /// Lists the caller family's history overview (derived `missed`
    /// statuses, single assignee names), sweeping overdue ones first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoSession`] or [`BoardError::NoFamily`] when
    /// the caller does not resolve, or [`BoardError::Storage`] on a store
    /// failure.
    pub async fn list_history_overview(
        &self,
        credential: &SessionCredential,
    ) -> BoardResult<ChoreHistoryOverview> {
        let caller = self.authenticate(credential).await?;
        self.sweeper.sweep(caller.membership.family_id).await;
        let tasks = self
            .views
            .history_overview(caller.membership.family_id)
            .await?;
        Ok(ChoreHistoryOverview { tasks })
    }

    /// Creates a chore in the caller's family.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] for an empty title,
    /// [`BoardError::NoSession`]/[`BoardError::NoFamily`] when the caller
    /// does not resolve, or [`BoardError::Storage`] on a store failure.
    pub async fn create_chore(
        &self,
        credential: &SessionCredential,
        payload: NewChore,
    ) -> BoardResult<Task> {
        let caller = self.authenticate(credential).await?;

        let mut request = CreateChoreRequest::new(
            caller.membership.family_id,
            caller.identity.user_id,
            payload.title,
        );
        if let Some(description) = payload.description {
            request = request.with_description(description);
        }
        if let Some(due_date) = payload.due_date {
            request = request.with_due_date(due_date);
        }
        if let Some(reward_points) = payload.reward_points {
            request = request.with_reward_points(reward_points);
        }
        if let Some(member_id) = payload.assignee_member_id {
            request = request.with_assignee(member_id);
        }

        Ok(self.lifecycle.create(request).await?)
    }

    /// Records the caller's claim on a chore.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoSession`]/[`BoardError::NoFamily`] when the
    /// caller does not resolve, or [`BoardError::Storage`] on a store
    /// failure.
    pub async fn take_chore(
        &self,
        credential: &SessionCredential,
        task_id: TaskId,
    ) -> BoardResult<OperationAck> {
        let caller = self.authenticate(credential).await?;
        self.lifecycle
            .take(task_id, caller.identity.user_id)
            .await?;
        Ok(OperationAck::new("chore taken"))
    }

    /// Marks a chore done on the caller's behalf.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoSession`]/[`BoardError::NoFamily`] when the
    /// caller does not resolve, or [`BoardError::Storage`] on a store
    /// failure.
    pub async fn complete_chore(
        &self,
        credential: &SessionCredential,
        task_id: TaskId,
    ) -> BoardResult<OperationAck> {
        let caller = self.authenticate(credential).await?;
        self.lifecycle
            .complete(task_id, caller.identity.user_id)
            .await?;
        Ok(OperationAck::new("chore completed"))
    }

    /// Fails a chore manually on the caller's behalf.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoSession`]/[`BoardError::NoFamily`] when the
    /// caller does not resolve, or [`BoardError::Storage`] on a store
    /// failure.
    pub async fn fail_chore(
        &self,
        credential: &SessionCredential,
        task_id: TaskId,
    ) -> BoardResult<OperationAck> {
        let caller = self.authenticate(credential).await?;
        self.lifecycle
            .fail(task_id, caller.identity.user_id)
            .await?;
        Ok(OperationAck::new("chore failed"))
    }

    /// Overwrites a chore's status with an explicitly requested value.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidStatus`] for a value outside the
    /// six-value enum, [`BoardError::NoSession`]/[`BoardError::NoFamily`]
    /// when the caller does not resolve, or [`BoardError::Storage`] on a
    /// store failure.
    pub async fn set_chore_status(
        &self,
        credential: &SessionCredential,
        task_id: TaskId,
        new_status: &str,
    ) -> BoardResult<OperationAck> {
        let caller = self.authenticate(credential).await?;
        let status = self
            .lifecycle
            .set_status(task_id, caller.identity.user_id, new_status)
            .await?;
        Ok(OperationAck::new(format!("status set to {status}")))
    }

    /// Returns one chore's ordered audit events.
    ///
    /// This read carries no family context and performs no session check
    /// or sweep.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] on a store failure.
    pub async fn chore_timeline(&self, task_id: TaskId) -> BoardResult<Vec<HistoryEvent>> {
        Ok(self.views.task_timeline(task_id).await?)
    }

    async fn authenticate(&self, credential: &SessionCredential) -> BoardResult<Caller> {
        let identity = self
            .identity
            .resolve(credential)
            .await?
            .ok_or(BoardError::NoSession)?;
        let membership = self
            .directory
            .membership_for_user(identity.user_id)
            .await?
            .ok_or(BoardError::NoFamily)?;
        Ok(Caller {
            identity,
            membership,
        })
    }
}
