//! `PostgreSQL` adapter for the read-only member directory.

mod directory;
mod models;
mod schema;

pub use directory::{FamilyPgPool, PostgresMemberDirectory};
