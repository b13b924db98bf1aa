//! Application services for chore lifecycle orchestration.

mod board;
mod lifecycle;
mod sweeper;
mod views;

pub use board::{
    ActiveChores, BoardError, BoardResult, ChoreBoardService, ChoreHistory, ChoreHistoryOverview,
    NewChore, OperationAck,
};
pub use lifecycle::{
    ChoreLifecycleError, ChoreLifecycleResult, ChoreLifecycleService, CreateChoreRequest,
};
pub use sweeper::OverdueSweepService;
pub use views::{
    AssigneeView, ChoreHistoryEntry, ChoreOverviewEntry, ChoreViewError, ChoreViewResult,
    ChoreViewService, ChoreWithAssignees, DisplayStatus,
};
