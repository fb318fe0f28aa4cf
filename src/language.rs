//! Identity of the dummy language.

use std::path::Path;

/// Static identity of a language known to the host.
///
/// A language is defined by its key (used in rule repositories and file
/// predicates), a display name, and the file extensions it claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    key: &'static str,
    name: &'static str,
    extensions: &'static [&'static str],
}

/// The dummy language this plugin registers.
pub static DUMMY: Language = Language {
    key: "dummy",
    name: "Dummy",
    extensions: &["lang"],
};

impl Language {
    /// The language key, e.g. `"dummy"`.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// File extensions claimed by this language (without the dot).
    pub fn extensions(&self) -> &'static [&'static str] {
        self.extensions
    }

    /// Whether a path carries one of this language's extensions.
    pub fn claims_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.contains(&ext))
            .unwrap_or(false)
    }
}
