//! In-process model of the host platform contracts.
//!
//! The analysis host owns the file set, the issue store, and the capability
//! lookup through which issues are attached to files. The sensor only ever
//! talks to these types; it never touches the disk layout directly.

mod fs;
mod issue;

pub use fs::{FilePredicate, FileSystem, InputFile, PredicateFactory};
pub use issue::{Issuable, Issue, IssueStore, Perspectives};
