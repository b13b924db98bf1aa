//! `PostgreSQL` adapters for chore persistence.

mod assignment;
mod blocking;
mod history;
mod models;
mod schema;
mod task;

pub use assignment::PostgresAssignmentStore;
pub use blocking::ChorePgPool;
pub use history::PostgresHistoryLog;
pub use task::PostgresTaskStore;
