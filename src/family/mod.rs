//! Family roster and identity resolution for Choreboard.
//!
//! The chore engine never manages families or members itself; it consumes
//! them from an external identity-and-storage provider. This module holds
//! the read-only domain types for that roster, the port contracts the
//! provider is reached through, and in-memory adapters used for tests and
//! for wiring the engine without the provider. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
