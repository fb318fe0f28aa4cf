//! Dummylang - a skeleton language plugin for a static-analysis host.
//!
//! This crate registers a "dummy" language with an in-process analysis host,
//! parses dummy-language source files into a syntax tree, runs rule checks
//! over that tree, and reports the resulting issues back to the host's issue
//! store. The centerpiece is the [`Sensor`]: it obtains the file set from the
//! host, builds a tree scanner from a fixed configuration and the enabled
//! checks, scans every matching file, then translates per-file check messages
//! into host issues tied to rule keys and source lines.
//!
//! # Architecture
//!
//! - `language`: dummy-language identity (key, name, file extensions)
//! - `host`: host-platform contracts - file system, predicates, perspectives,
//!   issuables, and the issue store
//! - `check`: the `Check` trait, built-in checks, and the immutable checks
//!   registry mapping checks to rule keys
//! - `parser`: minimal line-oriented parser for the dummy language
//! - `scanner`: tree scanner that runs checks per file and indexes results
//! - `sensor`: applicability test, scan loop, and issue translation
//! - `report`: output formatting (pretty, JSON) for the CLI

pub mod check;
pub mod cli;
pub mod host;
pub mod language;
pub mod parser;
pub mod report;
pub mod scanner;
pub mod sensor;

pub use check::{builtin_checks, Check, CheckContext, CheckFactory, CheckId, Checks, RuleKey};
pub use host::{
    FilePredicate, FileSystem, InputFile, Issuable, Issue, IssueStore, Perspectives,
    PredicateFactory,
};
pub use language::Language;
pub use scanner::{AstScanner, ScannerConfig, SourceFile, SourceIndex};
pub use sensor::{Sensor, SensorError};
