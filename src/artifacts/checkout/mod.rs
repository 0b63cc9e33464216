//! Checkout operations
//!
//! Moving the working tree between snapshots: the migration planner that
//! decides which files to write and which to delete, and the guard that
//! refuses to clobber untracked files before anything is mutated.

pub mod migration;
