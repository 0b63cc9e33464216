//! Gitlet commit object
//!
//! Commits are immutable snapshots of every tracked file at one point in
//! time. They contain:
//! - Parent commit id(s): none for the root commit, one for an ordinary
//!   commit, two for a merge commit
//! - The tracked mapping from path to blob id (a full snapshot, not a diff)
//! - A timestamp and the commit message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! parent <parent-sha>
//! tracked <blob-sha> <path>
//! timestamp <unix-seconds> <timezone>
//!
//! <commit message>
//! ```
//!
//! The commit's id is the SHA-1 of its serialized form, which makes the hash
//! a pure function of (parents, tracked, message, timestamp). The tracked
//! lines are emitted in path order, so two snapshots with equal entries
//! always hash identically.

use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Slim representation of a commit
///
/// Contains only what commit-graph walks need: the id, the parent ids and
/// the timestamp used to order the traversal.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SlimCommit {
    /// The commit's object ID
    pub oid: ObjectId,
    /// The commit's parent object IDs
    pub parents: Vec<ObjectId>,
    /// Commit timestamp (needed for comparison)
    pub timestamp: chrono::DateTime<chrono::FixedOffset>,
}

impl PartialOrd for SlimCommit {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SlimCommit {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.timestamp.cmp(&other.timestamp)
    }
}

/// Gitlet commit object
///
/// Once constructed, a commit's fields never change. Building a derived
/// commit always allocates a fresh tracked mapping — two commits never share
/// one, so no mutation can retroactively rewrite an ancestor's snapshot.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Parent commit IDs (empty for the root commit, two for merge commits)
    parents: Vec<ObjectId>,
    /// Snapshot of every tracked path and the blob it points at
    tracked: BTreeMap<PathBuf, ObjectId>,
    /// Commit message
    message: String,
    /// Creation time, with the local offset preserved
    timestamp: chrono::DateTime<chrono::FixedOffset>,
}

/// Message carried by the commit created at `init` time
pub const ROOT_COMMIT_MESSAGE: &str = "initial commit";

impl Commit {
    pub fn new(
        parents: Vec<ObjectId>,
        tracked: BTreeMap<PathBuf, ObjectId>,
        message: String,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> Self {
        Commit {
            parents,
            tracked,
            message,
            timestamp,
        }
    }

    /// Build the parentless commit every repository history starts from
    pub fn root(timestamp: chrono::DateTime<chrono::FixedOffset>) -> Self {
        Self::new(
            Vec::new(),
            BTreeMap::new(),
            ROOT_COMMIT_MESSAGE.to_string(),
            timestamp,
        )
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// First parent: the lineage of the branch the commit was created on
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn tracked(&self) -> &BTreeMap<PathBuf, ObjectId> {
        &self.tracked
    }

    pub fn tracked_oid(&self, path: &Path) -> Option<&ObjectId> {
        self.tracked.get(path)
    }

    pub fn is_tracked(&self, path: &Path) -> bool {
        self.tracked.contains_key(path)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }

    /// Format the timestamp the way `log` prints it
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// Parse a `<unix-seconds> <timezone>` pair back into a local timestamp
    fn parse_timestamp(
        seconds: &str,
        timezone: &str,
    ) -> anyhow::Result<chrono::DateTime<chrono::FixedOffset>> {
        let seconds = seconds
            .parse::<i64>()
            .map_err(|_| anyhow::anyhow!("Invalid timestamp seconds: {}", seconds))?;

        let datetime = chrono::DateTime::from_timestamp(seconds, 0)
            .ok_or_else(|| anyhow::anyhow!("Timestamp out of range: {}", seconds))?;
        let datetime = chrono::DateTime::parse_from_str(
            &format!("{} {}", datetime.format("%Y-%m-%d %H:%M:%S"), timezone),
            "%Y-%m-%d %H:%M:%S %z",
        )
        .map_err(|_| anyhow::anyhow!("Invalid timezone: {}", timezone))?;

        Ok(datetime)
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut object_content = vec![];

        for parent in &self.parents {
            object_content.push(format!("parent {}", parent.as_ref()));
        }
        for (path, oid) in &self.tracked {
            object_content.push(format!("tracked {} {}", oid.as_ref(), path.display()));
        }
        object_content.push(format!(
            "timestamp {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        ));
        object_content.push(String::new());
        object_content.push(self.message.to_string());

        let object_content = object_content.join("\n");

        let mut content_bytes = Vec::new();
        content_bytes.write_all(object_content.as_bytes())?;

        let mut commit_bytes = Vec::new();
        let header = format!("{} {}\0", self.object_type().as_str(), content_bytes.len());
        commit_bytes.write_all(header.as_bytes())?;
        commit_bytes.write_all(&content_bytes)?;

        Ok(Bytes::from(commit_bytes))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        let content = String::from_utf8(content)?;
        let mut lines = content.lines().peekable();

        let mut parents = Vec::new();
        while let Some(parent_oid) = lines.peek().and_then(|line| line.strip_prefix("parent ")) {
            parents.push(ObjectId::try_parse(parent_oid.to_string())?);
            lines.next();
        }

        let mut tracked = BTreeMap::new();
        while let Some(entry) = lines.peek().and_then(|line| line.strip_prefix("tracked ")) {
            let (oid, path) = entry
                .split_once(' ')
                .context("Invalid commit object: malformed tracked line")?;
            tracked.insert(PathBuf::from(path), ObjectId::try_parse(oid.to_string())?);
            lines.next();
        }

        let timestamp_line = lines
            .next()
            .context("Invalid commit object: missing timestamp line")?;
        let (seconds, timezone) = timestamp_line
            .strip_prefix("timestamp ")
            .and_then(|rest| rest.split_once(' '))
            .context("Invalid commit object: invalid timestamp line")?;
        let timestamp = Self::parse_timestamp(seconds, timezone)?;

        // skip the empty line
        lines.next();

        let message = lines.collect::<Vec<&str>>().join("\n");
        Ok(Self::new(parents, tracked, message, timestamp))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        let mut lines = vec![];

        for parent in &self.parents {
            lines.push(format!("parent {}", parent.as_ref()));
        }
        for (path, oid) in &self.tracked {
            lines.push(format!("tracked {} {}", oid.as_ref(), path.display()));
        }
        lines.push(format!(
            "timestamp {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        ));
        lines.push(String::new());
        lines.push(self.message.to_string());

        lines.join("\n")
    }
}
