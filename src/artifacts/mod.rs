//! Gitlet data structures and algorithms
//!
//! This module contains the core types and algorithms:
//!
//! - `branch`: branch name validation
//! - `checkout`: working-tree migration planning and the untracked-file guard
//! - `core`: shared utilities (pager wrapper, user-facing errors)
//! - `graph`: commit history traversal, ancestry, merge-base computation
//! - `index`: the staging index
//! - `merge`: the three-way merge decision table and conflict materialization
//! - `objects`: object types (blob, commit) and content addressing
//! - `status`: working-tree status report data

pub mod branch;
pub mod checkout;
pub mod core;
pub mod graph;
pub mod index;
pub mod merge;
pub mod objects;
pub mod status;
