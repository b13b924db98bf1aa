//! Chore lifecycle management for Choreboard.
//!
//! This module implements the chore engine: creating chores, taking and
//! completing them, the permissive status overwrite operation, the lazy
//! deadline sweep that force-fails overdue chores at read time, and the
//! view composition that joins chores with their assignees and audit
//! history. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
