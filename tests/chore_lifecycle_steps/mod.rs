//! Step definitions for chore board lifecycle scenarios.

mod given;
mod then;
mod when;
pub mod world;
