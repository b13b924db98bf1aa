//! Shared world state for chore board BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use choreboard::chore::{
    adapters::memory::{InMemoryAssignmentStore, InMemoryHistoryLog, InMemoryTaskStore},
    domain::{Task, TaskId},
    services::{ActiveChores, BoardError, ChoreBoardService},
};
use choreboard::family::{
    adapters::memory::{InMemoryIdentityResolver, InMemoryMemberDirectory},
    domain::{FamilyId, Identity, Member, MemberId, MemberRole, SessionCredential, UserId},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Board service type used by the BDD world.
pub type TestBoard = ChoreBoardService<
    InMemoryIdentityResolver,
    InMemoryTaskStore,
    InMemoryAssignmentStore,
    InMemoryHistoryLog,
    InMemoryMemberDirectory,
    DefaultClock,
>;

/// Scenario world for chore board behaviour tests.
pub struct ChoreBoardWorld {
    pub tasks: Arc<InMemoryTaskStore>,
    pub assignments: Arc<InMemoryAssignmentStore>,
    pub history: Arc<InMemoryHistoryLog>,
    pub directory: Arc<InMemoryMemberDirectory>,
    pub identity: Arc<InMemoryIdentityResolver>,
    pub board: TestBoard,
    pub family_id: FamilyId,
    pub credentials: HashMap<String, SessionCredential>,
    pub chore: Option<Task>,
    pub last_create_error: Option<BoardError>,
    pub last_board: Option<ActiveChores>,
}

impl ChoreBoardWorld {
    /// Creates a world with fresh adapters and no scenario state.
    #[must_use]
    pub fn new() -> Self {
        let tasks = Arc::new(InMemoryTaskStore::new());
        let assignments = Arc::new(InMemoryAssignmentStore::new());
        let history = Arc::new(InMemoryHistoryLog::new());
        let directory = Arc::new(InMemoryMemberDirectory::new());
        let identity = Arc::new(InMemoryIdentityResolver::new());
        let board = ChoreBoardService::new(
            Arc::clone(&identity),
            Arc::clone(&tasks),
            Arc::clone(&assignments),
            Arc::clone(&history),
            Arc::clone(&directory),
            Arc::new(DefaultClock),
        );

        Self {
            tasks,
            assignments,
            history,
            directory,
            identity,
            board,
            family_id: FamilyId::new(),
            credentials: HashMap::new(),
            chore: None,
            last_create_error: None,
            last_board: None,
        }
    }

    /// Registers a member with a linked identity and a live session under
    /// the given name.
    pub fn sign_in(&mut self, name: &str, role: MemberRole) -> Result<(), eyre::Report> {
        let user_id = UserId::new();
        let member =
            Member::new(MemberId::new(), self.family_id, name, role).with_user_id(user_id);
        self.directory.add_member(member)?;

        let credential = SessionCredential::new(format!("session-{name}-{user_id}"));
        self.identity.register(
            &credential,
            Identity::new(user_id, format!("{name}@example.test")),
        )?;
        self.credentials.insert(name.to_owned(), credential);
        Ok(())
    }

    /// Looks up the credential registered for a member name.
    pub fn credential_for(&self, name: &str) -> Result<SessionCredential, eyre::Report> {
        self.credentials
            .get(name)
            .cloned()
            .ok_or_else(|| eyre::eyre!("no signed-in member named {name} in scenario world"))
    }

    /// Returns the identifier of the scenario's chore.
    pub fn chore_id(&self) -> Result<TaskId, eyre::Report> {
        self.chore
            .as_ref()
            .map(Task::id)
            .ok_or_else(|| eyre::eyre!("missing chore in scenario world"))
    }
}

impl Default for ChoreBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ChoreBoardWorld {
    ChoreBoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
