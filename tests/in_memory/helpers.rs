//! Shared test helpers for in-memory board integration tests.

use std::sync::Arc;

use choreboard::chore::{
    adapters::memory::{InMemoryAssignmentStore, InMemoryHistoryLog, InMemoryTaskStore},
    services::ChoreBoardService,
};
use choreboard::family::{
    adapters::memory::{InMemoryIdentityResolver, InMemoryMemberDirectory},
    domain::{FamilyId, Identity, Member, MemberId, MemberRole, SessionCredential, UserId},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Board service type wired over the in-memory adapters.
pub type TestBoard = ChoreBoardService<
    InMemoryIdentityResolver,
    InMemoryTaskStore,
    InMemoryAssignmentStore,
    InMemoryHistoryLog,
    InMemoryMemberDirectory,
    DefaultClock,
>;

/// A board over fresh in-memory adapters, plus the adapters themselves
/// for direct verification.
pub struct BoardContext {
    /// Task store backing the board.
    pub tasks: Arc<InMemoryTaskStore>,
    /// Assignment store backing the board.
    pub assignments: Arc<InMemoryAssignmentStore>,
    /// History log backing the board.
    pub history: Arc<InMemoryHistoryLog>,
    /// Member directory backing the board.
    pub directory: Arc<InMemoryMemberDirectory>,
    /// Identity resolver backing the board.
    pub identity: Arc<InMemoryIdentityResolver>,
    /// The board under test.
    pub board: TestBoard,
    /// Family used by the scenario.
    pub family_id: FamilyId,
}

impl BoardContext {
    /// Creates a board over fresh adapters.
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
        }
    }

    /// Registers a member with a linked identity and a live session, and
    /// returns the session credential.
    ///
    /// # Errors
    ///
    /// Returns an error if registration fails.
    pub fn sign_in(&self, name: &str, role: MemberRole) -> eyre::Result<SessionCredential> {
        let user_id = UserId::new();
        let member =
            Member::new(MemberId::new(), self.family_id, name, role).with_user_id(user_id);
        self.directory.add_member(member)?;

        let credential = SessionCredential::new(format!("session-{name}-{user_id}"));
        self.identity.register(
            &credential,
            Identity::new(user_id, format!("{name}@example.test")),
        )?;
        Ok(credential)
    }
}

impl Default for BoardContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture providing a fresh board context per test.
#[fixture]
pub fn context() -> BoardContext {
    BoardContext::new()
}
