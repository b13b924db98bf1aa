//! Shared fixtures for chore service tests.

use std::sync::Arc;

use crate::chore::{
    adapters::memory::{InMemoryAssignmentStore, InMemoryHistoryLog, InMemoryTaskStore},
    domain::{NewTaskData, Task, TaskStatus, TaskTitle},
    ports::TaskStore,
    services::{ChoreBoardService, ChoreLifecycleService, ChoreViewService, OverdueSweepService},
};
use crate::family::{
    adapters::memory::{InMemoryIdentityResolver, InMemoryMemberDirectory},
    domain::{FamilyId, Identity, Member, MemberId, MemberRole, SessionCredential, UserId},
};
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use rstest::fixture;

/// Lifecycle service type wired over the in-memory adapters.
pub type TestLifecycle = ChoreLifecycleService<
    InMemoryTaskStore,
    InMemoryAssignmentStore,
    InMemoryHistoryLog,
    InMemoryMemberDirectory,
    DefaultClock,
>;

/// View service type wired over the in-memory adapters.
pub type TestViews = ChoreViewService<
    InMemoryTaskStore,
    InMemoryAssignmentStore,
    InMemoryHistoryLog,
    InMemoryMemberDirectory,
    DefaultClock,
>;

/// Sweep service type wired over the in-memory adapters.
pub type TestSweeper = OverdueSweepService<InMemoryTaskStore, InMemoryHistoryLog, DefaultClock>;

/// Board service type wired over the in-memory adapters.
pub type TestBoard = ChoreBoardService<
    InMemoryIdentityResolver,
    InMemoryTaskStore,
    InMemoryAssignmentStore,
    InMemoryHistoryLog,
    InMemoryMemberDirectory,
    DefaultClock,
>;

/// In-memory adapters shared by a scenario's services.
pub struct Harness {
    /// Task store.
    pub tasks: Arc<InMemoryTaskStore>,
    /// Assignment store.
    pub assignments: Arc<InMemoryAssignmentStore>,
    /// History log.
    pub history: Arc<InMemoryHistoryLog>,
    /// Member directory.
    pub directory: Arc<InMemoryMemberDirectory>,
    /// Identity resolver.
    pub identity: Arc<InMemoryIdentityResolver>,
    /// Wall clock.
    pub clock: Arc<DefaultClock>,
}

impl Harness {
    /// Creates a fresh set of empty adapters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(InMemoryTaskStore::new()),
            assignments: Arc::new(InMemoryAssignmentStore::new()),
            history: Arc::new(InMemoryHistoryLog::new()),
            directory: Arc::new(InMemoryMemberDirectory::new()),
            identity: Arc::new(InMemoryIdentityResolver::new()),
            clock: Arc::new(DefaultClock),
        }
    }

    /// Builds a lifecycle service over the harness adapters.
    #[must_use]
    pub fn lifecycle(&self) -> TestLifecycle {
        ChoreLifecycleService::new(
            Arc::clone(&self.tasks),
            Arc::clone(&self.assignments),
            Arc::clone(&self.history),
            Arc::clone(&self.directory),
            Arc::clone(&self.clock),
        )
    }

    /// Builds a view service over the harness adapters.
    #[must_use]
    pub fn views(&self) -> TestViews {
        ChoreViewService::new(
            Arc::clone(&self.tasks),
            Arc::clone(&self.assignments),
            Arc::clone(&self.history),
            Arc::clone(&self.directory),
            Arc::clone(&self.clock),
        )
    }

    /// Builds a sweep service over the harness adapters.
    #[must_use]
    pub fn sweeper(&self) -> TestSweeper {
        OverdueSweepService::new(
            Arc::clone(&self.tasks),
            Arc::clone(&self.history),
            Arc::clone(&self.clock),
        )
    }

    /// Builds a board service over the harness adapters.
    #[must_use]
    pub fn board(&self) -> TestBoard {
        ChoreBoardService::new(
            Arc::clone(&self.identity),
            Arc::clone(&self.tasks),
            Arc::clone(&self.assignments),
            Arc::clone(&self.history),
            Arc::clone(&self.directory),
            Arc::clone(&self.clock),
        )
    }

    /// Registers a member with a linked identity and a live session.
    ///
    /// Returns the credential that resolves to the member's identity.
    ///
    /// # Errors
    ///
    /// Returns an error if directory or resolver registration fails.
    pub fn sign_in_member(
        &self,
        family_id: FamilyId,
        name: &str,
        role: MemberRole,
    ) -> eyre::Result<(Member, SessionCredential)> {
        let user_id = UserId::new();
        let member = Member::new(MemberId::new(), family_id, name, role).with_user_id(user_id);
        self.directory.add_member(member.clone())?;

        let credential = SessionCredential::new(format!("session-{name}-{user_id}"));
        self.identity.register(
            &credential,
            Identity::new(user_id, format!("{name}@example.test")),
        )?;
        Ok((member, credential))
    }

    /// Inserts a chore directly into the task store.
    ///
    /// # Errors
    ///
    /// Returns an error if title validation or the insert fails.
    pub async fn seed_task(
        &self,
        family_id: FamilyId,
        title: &str,
        status: TaskStatus,
        due_date: Option<DateTime<Utc>>,
    ) -> eyre::Result<Task> {
        let task = Task::new(
            NewTaskData {
                family_id,
                created_by: UserId::new(),
                title: TaskTitle::new(title)?,
                description: None,
                due_date,
                reward_points: None,
                initial_status: status,
            },
            &*self.clock,
        );
        self.tasks.insert(&task).await?;
        Ok(task)
    }

    /// Returns an instant one day before now.
    #[must_use]
    pub fn yesterday(&self) -> DateTime<Utc> {
        self.clock.utc() - chrono::Duration::days(1)
    }

    /// Returns an instant one day after now.
    #[must_use]
    pub fn tomorrow(&self) -> DateTime<Utc> {
        self.clock.utc() + chrono::Duration::days(1)
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture providing a fresh harness per test.
#[fixture]
pub fn harness() -> Harness {
    Harness::new()
}
