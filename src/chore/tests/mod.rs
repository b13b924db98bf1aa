//! Unit and service tests for the chore module.

mod helpers;
