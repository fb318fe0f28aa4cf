//! Command-line interface for dummylang.

use clap::{Parser, Subcommand};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::host::{FileSystem, InputFile, IssueStore, Perspectives};
use crate::language::DUMMY;
use crate::report;
use crate::sensor::Sensor;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ISSUES: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Skeleton language plugin for a static-analysis host.
///
/// Scans dummy-language source files with the built-in checks and reports
/// the resulting issues.
#[derive(Parser)]
#[command(name = "dummylang")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyse a file or directory
    Scan(ScanArgs),
}

/// Arguments for the scan command.
#[derive(Parser)]
pub struct ScanArgs {
    /// Path to analyse (file or directory)
    pub path: PathBuf,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Glob patterns for paths to exclude (repeatable)
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,
}

/// Compile the exclude patterns into one matcher.
fn build_excludes(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| anyhow::anyhow!("compiling exclude {:?}: {}", pattern, e))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

/// Build the host file set from the files under a path.
///
/// Every regular file is tracked; files the dummy language claims are
/// indexed under its key, everything else carries no language.
fn collect_file_set(root: &Path, excludes: &GlobSet) -> anyhow::Result<FileSystem> {
    let mut fs = FileSystem::new();

    if root.is_file() {
        fs.add(input_file_for(root));
        return Ok(fs);
    }

    for entry in WalkDir::new(root).into_iter().filter_entry(|e| {
        let name = e.file_name().to_string_lossy();
        // Skip hidden directories
        !(e.file_type().is_dir() && name.starts_with('.') && name.len() > 1)
    }) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if excludes.is_match(entry.path()) {
            continue;
        }
        fs.add(input_file_for(entry.path()));
    }

    Ok(fs)
}

fn input_file_for(path: &Path) -> InputFile {
    let language = if DUMMY.claims_path(path) {
        Some(DUMMY.key())
    } else {
        None
    };
    InputFile::new(path, language)
}

/// Run the scan command.
pub fn run_scan(args: &ScanArgs) -> anyhow::Result<i32> {
    // Validate format
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    // Check path exists
    if !args.path.exists() {
        eprintln!("Error: cannot access path {:?}", args.path);
        return Ok(EXIT_ERROR);
    }

    let excludes = build_excludes(&args.exclude)?;
    let fs = collect_file_set(&args.path, &excludes)?;

    let sensor = Sensor::with_builtin_checks(&DUMMY, Perspectives::new());

    if !sensor.should_execute(&fs) {
        println!(
            "No {} files found under {}; nothing to analyse",
            DUMMY.name(),
            args.path.display()
        );
        return Ok(EXIT_SUCCESS);
    }

    let mut store = IssueStore::new();
    sensor.analyse(&fs, &mut store)?;

    let matching = fs.predicates().has_language(DUMMY.key());
    let scanned = fs.files(&matching).count();
    let path_str = args.path.to_string_lossy().to_string();

    match args.format.as_str() {
        "json" => report::write_json(&path_str, DUMMY.key(), scanned, &store)?,
        _ => report::write_pretty(&path_str, scanned, &store),
    }

    if store.is_empty() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_ISSUES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collect_file_set_tracks_everything() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.lang"), "print x\n").unwrap();
        std::fs::write(temp.path().join("b.txt"), "plain text\n").unwrap();

        let excludes = build_excludes(&[]).unwrap();
        let fs = collect_file_set(temp.path(), &excludes).unwrap();

        let dummy = fs.predicates().has_language("dummy");
        assert_eq!(fs.files(&dummy).count(), 1);

        // Both files are tracked by the host, only one under the language.
        let all_txt = fs.predicates().matches_glob("**/*.txt").unwrap();
        assert!(fs.has_files(&all_txt));
    }

    #[test]
    fn test_exclude_pattern_drops_files() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.lang"), "print x\n").unwrap();
        std::fs::write(temp.path().join("skip.lang"), "print y\n").unwrap();

        let excludes = build_excludes(&["**/skip.lang".to_string()]).unwrap();
        let fs = collect_file_set(temp.path(), &excludes).unwrap();

        let dummy = fs.predicates().has_language("dummy");
        let names: Vec<_> = fs
            .files(&dummy)
            .map(|f| f.path().file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.lang"]);
    }

    #[test]
    fn test_single_file_path() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("only.lang");
        std::fs::write(&file, "print x\n").unwrap();

        let excludes = build_excludes(&[]).unwrap();
        let fs = collect_file_set(&file, &excludes).unwrap();

        let dummy = fs.predicates().has_language("dummy");
        assert_eq!(fs.files(&dummy).count(), 1);
    }

    #[test]
    fn test_invalid_exclude_is_an_error() {
        assert!(build_excludes(&["a{".to_string()]).is_err());
    }
}
