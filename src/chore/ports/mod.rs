//! Port contracts for chore persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by chore services.
//! Each store carries its own error enum; multi-step operations compose
//! several stores without any cross-store transaction.

pub mod assignment;
pub mod history;
pub mod task;

pub use assignment::{AssignmentStore, AssignmentStoreError, AssignmentStoreResult};
pub use history::{HistoryLog, HistoryLogError, HistoryLogResult};
pub use task::{TaskStore, TaskStoreError, TaskStoreResult};
