//! Tree scanner: runs the enabled checks over each file and indexes results.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::check::{CheckContext, CheckMessage, EnabledCheck};
use crate::parser;

/// Scanner configuration.
///
/// Constructed with `Default`; there is no loading from disk. `lossy_decoding`
/// controls whether invalid UTF-8 is replaced (default) or treated as a scan
/// failure.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub lossy_decoding: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            lossy_decoding: true,
        }
    }
}

/// Per-file scan result: the file key and the messages checks emitted for it.
#[derive(Debug, Clone)]
pub struct SourceFile {
    key: PathBuf,
    messages: Vec<CheckMessage>,
}

impl SourceFile {
    /// The path the file was scanned under.
    pub fn key(&self) -> &Path {
        &self.key
    }

    pub fn messages(&self) -> &[CheckMessage] {
        &self.messages
    }
}

/// Accumulates per-file results across one scan run, in scan order.
#[derive(Debug, Clone, Default)]
pub struct SourceIndex {
    files: Vec<SourceFile>,
}

impl SourceIndex {
    /// All per-file results, in the order files were scanned.
    pub fn source_files(&self) -> &[SourceFile] {
        &self.files
    }

    fn insert(&mut self, file: SourceFile) {
        self.files.push(file);
    }
}

/// Scanner bound to a configuration and a fixed list of checks.
///
/// Invoke [`scan_file`](Self::scan_file) once per file; results accumulate
/// in the index for the reporting pass. Strictly sequential.
pub struct AstScanner {
    config: ScannerConfig,
    checks: Vec<EnabledCheck>,
    index: SourceIndex,
}

impl AstScanner {
    pub fn new(config: ScannerConfig, checks: Vec<EnabledCheck>) -> Self {
        Self {
            config,
            checks,
            index: SourceIndex::default(),
        }
    }

    /// Scan one file: read, parse, run every check over every node, and
    /// record the result in the index.
    ///
    /// I/O and decoding failures propagate; callers treat them as fatal to
    /// the whole run.
    pub fn scan_file(&mut self, path: &Path) -> anyhow::Result<()> {
        let bytes =
            fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let source = self.decode(path, bytes)?;
        let tree = parser::parse(&source);

        let mut messages = Vec::new();
        for enabled in &self.checks {
            let mut ctx = CheckContext::new(enabled.id);
            for node in tree.nodes() {
                enabled.check.visit(node, &mut ctx);
            }
            messages.extend(ctx.into_messages());
        }

        self.index.insert(SourceFile {
            key: path.to_path_buf(),
            messages,
        });
        Ok(())
    }

    /// The accumulated per-file results.
    pub fn index(&self) -> &SourceIndex {
        &self.index
    }

    fn decode(&self, path: &Path, bytes: Vec<u8>) -> anyhow::Result<String> {
        if self.config.lossy_decoding {
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        } else {
            String::from_utf8(bytes)
                .map_err(|e| anyhow::anyhow!("{} is not valid UTF-8: {}", path.display(), e))
        }
    }
}
