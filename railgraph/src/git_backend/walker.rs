use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use git2::{Commit as GitCommit, Repository, Sort};
use tracing::debug;

use crate::core::Commit;

/// Walks a repository's history into the ordered commit sequence the layout
/// engine consumes.
pub struct HistoryWalker {
    repo: Repository,
}

impl HistoryWalker {
    pub fn new(repo_path: Option<&str>) -> Result<Self> {
        let repo = match repo_path {
            Some(path) => Repository::open(path),
            None => Repository::open_from_env(),
        }
        .context("Failed to open repository")?;

        Ok(Self { repo })
    }

    /// Collect commits newest-first in topological order, starting from HEAD
    /// and every branch tip. A repository with an unborn HEAD yields an
    /// empty sequence.
    pub fn walk(&self, limit: Option<usize>) -> Result<Vec<Commit>> {
        let head = self.head_id();
        let refs_by_oid = self.refs_by_oid()?;

        let mut revwalk = self.repo.revwalk()?;
        if self.repo.head().is_ok() {
            revwalk.push_head()?;
        }
        for branch in self.repo.branches(None)? {
            let (branch, _) = branch?;
            if let Some(target) = branch.get().target() {
                revwalk.push(target)?;
            }
        }

        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(self.commit_record(&commit, head.as_deref(), &refs_by_oid)?);

            if let Some(limit) = limit {
                if commits.len() >= limit {
                    break;
                }
            }
        }

        debug!(commits = commits.len(), "walked repository history");
        Ok(commits)
    }

    /// Convert a git2 commit to the provider's commit record.
    fn commit_record(
        &self,
        commit: &GitCommit,
        head: Option<&str>,
        refs_by_oid: &HashMap<String, Vec<String>>,
    ) -> Result<Commit> {
        let id = commit.id().to_string();
        let short_id = id.chars().take(7).collect();
        let parents: Vec<String> = commit.parent_ids().map(|oid| oid.to_string()).collect();

        let timestamp = Utc
            .timestamp_opt(commit.time().seconds(), 0)
            .single()
            .context("Invalid commit timestamp")?;

        let author = commit.author().name().unwrap_or("Unknown").to_string();
        let email = commit.author().email().unwrap_or("").to_string();
        let message = commit.summary().unwrap_or("").to_string();

        let is_head = head == Some(id.as_str());
        let refs = refs_by_oid.get(&id).cloned().unwrap_or_default();

        Ok(Commit {
            id,
            short_id,
            message,
            author,
            email,
            timestamp,
            parents,
            is_head,
            refs,
        })
    }

    /// Branch and tag names grouped by the commit they point at.
    fn refs_by_oid(&self) -> Result<HashMap<String, Vec<String>>> {
        let mut refs: HashMap<String, Vec<String>> = HashMap::new();

        for branch in self.repo.branches(None)? {
            let (branch, _) = branch?;
            if let Some(name) = branch.name()? {
                if let Some(target) = branch.get().target() {
                    refs.entry(target.to_string())
                        .or_default()
                        .push(name.to_string());
                }
            }
        }

        self.repo.tag_foreach(|oid, name| {
            if let Ok(name_str) = std::str::from_utf8(name) {
                let name_str = name_str.strip_prefix("refs/tags/").unwrap_or(name_str);
                refs.entry(oid.to_string())
                    .or_default()
                    .push(name_str.to_string());
            }
            true
        })?;

        Ok(refs)
    }

    /// Commit id HEAD currently resolves to, if any.
    fn head_id(&self) -> Option<String> {
        self.repo
            .head()
            .ok()
            .and_then(|head| head.target())
            .map(|oid| oid.to_string())
    }
}
