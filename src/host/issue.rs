//! Host issue store and the issuable capability.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::check::RuleKey;

use super::InputFile;

/// A host-persisted record of one rule violation at one location.
///
/// `line` is `None` for file-level issues, as reported by the check message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub rule: RuleKey,
    pub file: PathBuf,
    pub line: Option<u32>,
    pub message: String,
}

/// Append-only sink for issues. Owned by the host; the sensor only writes.
#[derive(Debug, Clone, Default)]
pub struct IssueStore {
    issues: Vec<Issue>,
}

impl IssueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist an issue. Ownership transfers to the store.
    pub fn save(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Capability object through which issues are attached to one file.
///
/// Obtained from [`Perspectives::issuable`]; holding one proves the host
/// exposes the issue-creation capability for that file.
#[derive(Debug)]
pub struct Issuable<'a> {
    file: &'a InputFile,
}

impl<'a> Issuable<'a> {
    /// Build an issue for this file. Persist it with [`IssueStore::save`].
    pub fn issue(&self, rule: RuleKey, line: Option<u32>, message: impl Into<String>) -> Issue {
        Issue {
            rule,
            file: self.file.path().to_path_buf(),
            line,
            message: message.into(),
        }
    }

    pub fn file(&self) -> &InputFile {
        self.file
    }
}

/// Resolver for per-file capabilities.
///
/// The host may decline to expose the issuable capability for a file (for
/// example, files outside the analysis scope). Callers are expected to skip
/// such files silently; that branch is part of the contract, not an error.
#[derive(Debug, Clone, Default)]
pub struct Perspectives {
    denied: HashSet<PathBuf>,
}

impl Perspectives {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a path as having no issuable capability.
    pub fn deny<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.denied.insert(path.into());
        self
    }

    /// Resolve the issuable capability for a file, or `None` if the host
    /// does not expose it.
    pub fn issuable<'a>(&self, file: &'a InputFile) -> Option<Issuable<'a>> {
        if self.denied.contains(file.path()) {
            return None;
        }
        Some(Issuable { file })
    }

    /// Whether a path has been denied the issuable capability.
    pub fn is_denied(&self, path: &Path) -> bool {
        self.denied.contains(path)
    }
}
