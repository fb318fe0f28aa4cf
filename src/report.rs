//! Output formatting for analysis results.
//!
//! Two formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::host::IssueStore;

/// JSON report structure.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub path: String,
    pub language: String,
    pub files_scanned: usize,
    pub issues: Vec<JsonIssue>,
    pub total: usize,
}

/// One issue in the JSON report.
#[derive(Serialize, Deserialize)]
pub struct JsonIssue {
    pub rule: String,
    pub file: String,
    /// 0 for file-level issues.
    pub line: u32,
    pub message: String,
}

/// Build the JSON report structure from the issue store.
pub fn build_json(path: &str, language: &str, files_scanned: usize, store: &IssueStore) -> JsonReport {
    let issues: Vec<JsonIssue> = store
        .issues()
        .iter()
        .map(|issue| JsonIssue {
            rule: issue.rule.to_string(),
            file: issue.file.to_string_lossy().to_string(),
            line: issue.line.unwrap_or(0),
            message: issue.message.clone(),
        })
        .collect();

    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path: path.to_string(),
        language: language.to_string(),
        files_scanned,
        total: issues.len(),
        issues,
    }
}

/// Write the JSON report to stdout.
pub fn write_json(
    path: &str,
    language: &str,
    files_scanned: usize,
    store: &IssueStore,
) -> anyhow::Result<()> {
    let report = build_json(path, language, files_scanned, store);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Render the pretty report as a string.
pub fn render_pretty(path: &str, files_scanned: usize, store: &IssueStore) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {} ({} file{} scanned)\n",
        "Analysing".bold(),
        path,
        files_scanned,
        if files_scanned == 1 { "" } else { "s" }
    ));

    if store.is_empty() {
        out.push_str(&format!("\n{}\n", "No issues found.".green().bold()));
        return out;
    }

    // Group issues by file, keeping files in a stable order.
    let mut by_file: BTreeMap<String, Vec<&crate::host::Issue>> = BTreeMap::new();
    for issue in store.issues() {
        by_file
            .entry(issue.file.to_string_lossy().to_string())
            .or_default()
            .push(issue);
    }

    for (file, issues) in &by_file {
        out.push_str(&format!("\n{}\n", file.bold()));
        for issue in issues {
            let location = match issue.line {
                Some(line) => format!("{}", line),
                None => "-".to_string(),
            };
            out.push_str(&format!(
                "  {:>4}  {}  {}\n",
                location.cyan(),
                format!("[{}]", issue.rule).yellow(),
                issue.message
            ));
        }
    }

    let count = store.len();
    out.push_str(&format!(
        "\n{}\n",
        format!("{} issue{} found.", count, if count == 1 { "" } else { "s" })
            .red()
            .bold()
    ));

    out
}

/// Write the pretty report to stdout.
pub fn write_pretty(path: &str, files_scanned: usize, store: &IssueStore) {
    print!("{}", render_pretty(path, files_scanned, store));
}
