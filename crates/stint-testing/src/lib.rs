//! Testing infrastructure for stint integration tests.
//!
//! Provides `TestWorkspace`, a temp-directory workspace with the `.stint`
//! layout, log-seeding helpers, and an assert_cmd command builder wired to
//! the workspace.

pub mod fixtures;

pub use fixtures::TestWorkspace;
