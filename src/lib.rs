//! Choreboard: shared chore lifecycle and assignment engine for households.
//!
//! This crate implements the core of a family chore board: the task status
//! state machine, the deadline-driven auto-fail sweep, assignment tracking,
//! and the append-only history trail used to answer "who did what, when,
//! and what happened to this chore."
//!
//! # Architecture
//!
//! Choreboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, directory)
//!
//! # Modules
//!
//! - [`family`]: Read-only member roster and caller identity resolution
//! - [`chore`]: Chore lifecycle, assignment, sweep, and history composition

pub mod chore;
pub mod family;
