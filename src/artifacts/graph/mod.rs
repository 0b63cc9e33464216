//! Commit graph traversal and ancestry
//!
//! Read-only walks over the commit graph, derived purely from the parent
//! links stored inside each commit — there is no side table of branch split
//! points to fall out of sync after a branch deletion or a reset.
//!
//! - `history`: lazy first-parent iteration from a tip to the root (drives
//!   `log`) and the reachability test over all parent links
//! - `merge_base`: best-common-ancestor computation for three-way merges

pub mod history;
pub mod merge_base;
