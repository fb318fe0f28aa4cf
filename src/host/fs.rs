//! Host file system: input files and file predicates.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};

/// A file tracked by the host, with the language it was indexed under.
///
/// Files whose extension no registered language claims carry no language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    path: PathBuf,
    language: Option<String>,
}

impl InputFile {
    /// Create an input file indexed under the given language key.
    pub fn new<P: Into<PathBuf>>(path: P, language: Option<&str>) -> Self {
        Self {
            path: path.into(),
            language: language.map(str::to_string),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The language key this file was indexed under, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

/// A filter over the host's input files.
#[derive(Debug, Clone)]
pub enum FilePredicate {
    /// Matches files indexed under the given language key.
    HasLanguage(String),
    /// Matches the file with exactly this path.
    Is(PathBuf),
    /// Matches files whose path matches a glob pattern.
    MatchesGlob(GlobMatcher),
}

impl FilePredicate {
    /// Whether the predicate selects the given file.
    pub fn matches(&self, file: &InputFile) -> bool {
        match self {
            FilePredicate::HasLanguage(key) => file.language() == Some(key.as_str()),
            FilePredicate::Is(path) => file.path() == path,
            FilePredicate::MatchesGlob(matcher) => matcher.is_match(file.path()),
        }
    }
}

/// Factory for file predicates, obtained from [`FileSystem::predicates`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PredicateFactory;

impl PredicateFactory {
    /// Predicate selecting files indexed under a language key.
    pub fn has_language(&self, key: &str) -> FilePredicate {
        FilePredicate::HasLanguage(key.to_string())
    }

    /// Predicate selecting exactly one path.
    pub fn is<P: Into<PathBuf>>(&self, path: P) -> FilePredicate {
        FilePredicate::Is(path.into())
    }

    /// Predicate selecting files whose path matches a glob pattern.
    pub fn matches_glob(&self, pattern: &str) -> anyhow::Result<FilePredicate> {
        let glob = Glob::new(pattern)
            .map_err(|e| anyhow::anyhow!("compiling glob {:?}: {}", pattern, e))?;
        Ok(FilePredicate::MatchesGlob(glob.compile_matcher()))
    }
}

/// The host's view of the files under analysis.
///
/// Iteration order is insertion order; the sensor inherits it and makes no
/// ordering promises of its own.
#[derive(Debug, Clone, Default)]
pub struct FileSystem {
    files: Vec<InputFile>,
}

impl FileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the host file set.
    pub fn add(&mut self, file: InputFile) {
        self.files.push(file);
    }

    /// The predicate factory for this file system.
    pub fn predicates(&self) -> PredicateFactory {
        PredicateFactory
    }

    /// All files matching the predicate, in host iteration order.
    pub fn files<'a>(
        &'a self,
        predicate: &'a FilePredicate,
    ) -> impl Iterator<Item = &'a InputFile> {
        self.files.iter().filter(move |f| predicate.matches(f))
    }

    /// Whether at least one file matches the predicate.
    pub fn has_files(&self, predicate: &FilePredicate) -> bool {
        self.files.iter().any(|f| predicate.matches(f))
    }

    /// Resolve a predicate back to a single input-file handle.
    ///
    /// Returns the first match, or `None` if nothing matches.
    pub fn input_file(&self, predicate: &FilePredicate) -> Option<&InputFile> {
        self.files.iter().find(|f| predicate.matches(f))
    }
}
