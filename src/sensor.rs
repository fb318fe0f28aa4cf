//! The dummy-language sensor: applicability, scan loop, issue translation.
//!
//! This is the host-invoked entry point for one analysis run. It is stateless
//! across files; the only state mutation is accumulation into the scanner
//! index and the host issue store.

use std::path::PathBuf;

use thiserror::Error;

use crate::check::{builtin_checks, CheckFactory, CheckMessage, Checks, REPOSITORY_KEY};
use crate::host::{
    FilePredicate, FileSystem, InputFile, IssueStore, Perspectives, PredicateFactory,
};
use crate::language::Language;
use crate::scanner::{AstScanner, ScannerConfig, SourceFile};

/// Failures that abort an analysis run.
#[derive(Debug, Error)]
pub enum SensorError {
    /// A file failed to scan. Fatal: remaining files are not scanned and no
    /// issues are reported for this run beyond what was already saved.
    #[error("scanning {file}: {source}")]
    Scan {
        file: PathBuf,
        #[source]
        source: anyhow::Error,
    },
    /// A check message referenced a check the registry never issued an id
    /// for. Cannot happen for messages produced through this sensor's own
    /// registry; if it does, the run aborts rather than dropping the message.
    #[error("check message references a check not registered under {repository:?}")]
    UnknownCheck { repository: String },
}

/// Runs analysis for the dummy language against a host file set.
///
/// The file predicate and the checks registry are resolved once at
/// construction and never change for the sensor's lifetime.
pub struct Sensor {
    checks: Checks,
    predicate: FilePredicate,
    perspectives: Perspectives,
}

impl Sensor {
    /// Build a sensor over an explicit checks registry.
    pub fn new(language: &Language, checks: Checks, perspectives: Perspectives) -> Self {
        let predicate = PredicateFactory::default().has_language(language.key());
        Self {
            checks,
            predicate,
            perspectives,
        }
    }

    /// Build a sensor with the built-in checks registered under the
    /// dummy-language repository.
    pub fn with_builtin_checks(language: &Language, perspectives: Perspectives) -> Self {
        let checks = CheckFactory::new()
            .create(REPOSITORY_KEY)
            .add_checks(builtin_checks())
            .build();
        Self::new(language, checks, perspectives)
    }

    /// Whether this sensor has anything to do: true iff the host file set
    /// contains at least one file for this language. A false result means
    /// the run is skipped entirely; it is not an error.
    pub fn should_execute(&self, fs: &FileSystem) -> bool {
        fs.has_files(&self.predicate)
    }

    /// Run the analysis: scan every matching file, then translate per-file
    /// results into issues in the host store.
    ///
    /// Any scan failure propagates immediately, aborting the remaining files
    /// and the reporting phase. No retries, no partial-failure recovery.
    pub fn analyse(&self, fs: &FileSystem, store: &mut IssueStore) -> Result<(), SensorError> {
        let mut scanner = AstScanner::new(ScannerConfig::default(), self.checks.enabled());

        for file in fs.files(&self.predicate) {
            scanner
                .scan_file(file.path())
                .map_err(|source| SensorError::Scan {
                    file: file.path().to_path_buf(),
                    source,
                })?;
        }

        for source_file in scanner.index().source_files() {
            self.save(fs, source_file, store)?;
        }

        Ok(())
    }

    /// Translate one per-file result: resolve the file key back to an
    /// input-file handle and record its messages.
    fn save(
        &self,
        fs: &FileSystem,
        source_file: &SourceFile,
        store: &mut IssueStore,
    ) -> Result<(), SensorError> {
        let by_name = fs.predicates().is(source_file.key());
        let input_file = fs.input_file(&by_name);

        self.record_issues(input_file, source_file.messages(), store)
    }

    /// Convert check messages into host issues.
    ///
    /// A message whose file handle or issuable capability cannot be resolved
    /// is skipped silently; later messages are still processed. An unknown
    /// check id aborts the run.
    fn record_issues(
        &self,
        input_file: Option<&InputFile>,
        messages: &[CheckMessage],
        store: &mut IssueStore,
    ) -> Result<(), SensorError> {
        for message in messages {
            let file = match input_file {
                Some(f) => f,
                None => continue,
            };

            let issuable = match self.perspectives.issuable(file) {
                Some(i) => i,
                None => continue,
            };

            let rule_key = self
                .checks
                .rule_key(message.check)
                .ok_or_else(|| SensorError::UnknownCheck {
                    repository: self.checks.repository().to_string(),
                })?;

            let issue = issuable.issue(rule_key.clone(), message.line, message.text.clone());
            store.save(issue);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{Check, CheckContext, CheckId};
    use crate::language::DUMMY;
    use crate::parser::Node;
    use std::sync::Arc;
    use tempfile::TempDir;

    /// Flags line 3 of every file with "bad thing".
    struct BadThingCheck;

    impl Check for BadThingCheck {
        fn key(&self) -> &str {
            "R1"
        }

        fn visit(&self, node: &Node, ctx: &mut CheckContext) {
            if node.line == 3 {
                ctx.report(3, "bad thing");
            }
        }
    }

    fn single_check_registry() -> Checks {
        CheckFactory::new()
            .create(REPOSITORY_KEY)
            .add_checks([Arc::new(BadThingCheck) as Arc<dyn Check>])
            .build()
    }

    #[test]
    fn test_should_execute_false_without_matching_files() {
        let mut fs = FileSystem::new();
        fs.add(InputFile::new("b.txt", None));

        let sensor = Sensor::with_builtin_checks(&DUMMY, Perspectives::new());
        assert!(!sensor.should_execute(&fs));
    }

    #[test]
    fn test_should_execute_true_with_one_matching_file() {
        let mut fs = FileSystem::new();
        fs.add(InputFile::new("b.txt", None));
        fs.add(InputFile::new("a.lang", Some("dummy")));

        let sensor = Sensor::with_builtin_checks(&DUMMY, Perspectives::new());
        assert!(sensor.should_execute(&fs));
    }

    #[test]
    fn test_scan_failure_aborts_run() {
        let mut fs = FileSystem::new();
        // Tracked by the host but absent on disk.
        fs.add(InputFile::new("missing.lang", Some("dummy")));

        let sensor = Sensor::with_builtin_checks(&DUMMY, Perspectives::new());
        let mut store = IssueStore::new();

        let err = sensor.analyse(&fs, &mut store).unwrap_err();
        assert!(matches!(err, SensorError::Scan { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_check_id_aborts_reporting() {
        let sensor = Sensor::new(&DUMMY, single_check_registry(), Perspectives::new());
        let file = InputFile::new("a.lang", Some("dummy"));
        let mut store = IssueStore::new();

        // An id the registry never issued.
        let forged = CheckMessage {
            check: CheckId::for_tests(99),
            line: Some(1),
            text: "phantom".to_string(),
        };

        let err = sensor
            .record_issues(Some(&file), &[forged], &mut store)
            .unwrap_err();
        assert!(matches!(err, SensorError::UnknownCheck { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_unresolvable_input_file_drops_messages_silently() {
        let sensor = Sensor::new(&DUMMY, single_check_registry(), Perspectives::new());
        let mut store = IssueStore::new();

        let message = CheckMessage {
            check: CheckId::for_tests(0),
            line: Some(3),
            text: "bad thing".to_string(),
        };

        sensor
            .record_issues(None, &[message], &mut store)
            .expect("silent skip, not an error");
        assert!(store.is_empty());
    }

    #[test]
    fn test_denied_issuable_skips_but_run_continues() {
        let temp = TempDir::new().unwrap();
        let denied = temp.path().join("denied.lang");
        let kept = temp.path().join("kept.lang");
        std::fs::write(&denied, "one\ntwo\nthree\n").unwrap();
        std::fs::write(&kept, "one\ntwo\nthree\n").unwrap();

        let mut fs = FileSystem::new();
        fs.add(InputFile::new(&denied, Some("dummy")));
        fs.add(InputFile::new(&kept, Some("dummy")));

        let perspectives = Perspectives::new().deny(&denied);
        let sensor = Sensor::new(&DUMMY, single_check_registry(), perspectives);
        let mut store = IssueStore::new();

        sensor.analyse(&fs, &mut store).unwrap();

        // The denied file's message is dropped; the later file still reports.
        assert_eq!(store.len(), 1);
        assert_eq!(store.issues()[0].file, kept);
        assert_eq!(store.issues()[0].line, Some(3));
    }
}
