//! gitlet — a tiny local version-control engine
//!
//! The crate is split into three tiers:
//!
//! - `areas`: the fundamental repository components (object database,
//!   repository-state record, workspace, repository coordination)
//! - `artifacts`: data structures and algorithms (objects, staging index,
//!   commit-graph walks, checkout migrations, the merge decision table)
//! - `commands`: the user-facing porcelain commands, implemented on top of
//!   the two layers above

pub mod areas;
pub mod artifacts;
pub mod commands;
