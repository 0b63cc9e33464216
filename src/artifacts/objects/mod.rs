//! Gitlet object types and operations
//!
//! Everything the repository permanently stores is an object identified by a
//! SHA-1 hash. There are two kinds:
//!
//! - **Blob**: the content of one file at one point in time
//! - **Commit**: a full snapshot of tracked paths plus metadata and parent links
//!
//! All objects implement serialization/deserialization for the object format:
//! `<type> <size>\0<content>`

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
