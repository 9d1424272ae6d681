use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commit record as supplied by the history provider.
///
/// Providers deliver commits newest-first in topological order: a commit
/// never precedes any of its descendants. The layout engine relies on that
/// ordering and does not re-sort or validate it. Identifiers must be unique
/// within one sequence; duplicates leave the layout undefined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    /// Full commit hash
    pub id: String,
    /// Abbreviated hash for display
    pub short_id: String,
    /// Commit summary line
    pub message: String,
    /// Author name
    pub author: String,
    /// Author email
    pub email: String,
    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
    /// Parent commit hashes, first parent first
    pub parents: Vec<String>,
    /// Whether HEAD points at this commit
    pub is_head: bool,
    /// Branch and tag names pointing at this commit
    pub refs: Vec<String>,
}

impl Commit {
    pub fn new(
        id: String,
        parents: Vec<String>,
        timestamp: DateTime<Utc>,
        author: String,
        message: String,
    ) -> Self {
        let short_id = id.chars().take(7).collect();
        Self {
            id,
            short_id,
            message,
            author,
            email: String::new(),
            timestamp,
            parents,
            is_head: false,
            refs: Vec::new(),
        }
    }

    /// Check if this is a root commit (no parents)
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// Check if this is a merge commit (multiple parents)
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }
}
