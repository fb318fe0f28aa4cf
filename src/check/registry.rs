//! Immutable checks registry mapping check instances to rule keys.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Check;

/// Identifies one rule: repository key plus rule identifier.
///
/// Displays as `repository:rule`, e.g. `dummy:forbidden-term`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleKey {
    pub repository: String,
    pub rule: String,
}

impl RuleKey {
    pub fn new(repository: &str, rule: &str) -> Self {
        Self {
            repository: repository.to_string(),
            rule: rule.to_string(),
        }
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.repository, self.rule)
    }
}

/// Opaque id assigned to a check at registration.
///
/// Check messages carry this id as the back-reference to the check that
/// produced them; the registry resolves it to a rule key at reporting time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckId(usize);

impl CheckId {
    /// Construct an arbitrary id for tests.
    #[doc(hidden)]
    pub fn for_tests(raw: usize) -> Self {
        CheckId(raw)
    }
}

/// A check together with the id it was registered under.
#[derive(Clone)]
pub struct EnabledCheck {
    pub id: CheckId,
    pub check: Arc<dyn Check>,
}

/// Factory for checks registries, one per rule repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckFactory;

impl CheckFactory {
    pub fn new() -> Self {
        Self
    }

    /// Start building the registry for a repository.
    pub fn create(&self, repository_key: &str) -> ChecksBuilder {
        ChecksBuilder {
            repository: repository_key.to_string(),
            checks: Vec::new(),
        }
    }
}

/// Builder collecting enabled checks before the registry is frozen.
pub struct ChecksBuilder {
    repository: String,
    checks: Vec<Arc<dyn Check>>,
}

impl ChecksBuilder {
    /// Register a batch of checks. Registration order is preserved.
    pub fn add_checks(mut self, checks: impl IntoIterator<Item = Arc<dyn Check>>) -> Self {
        self.checks.extend(checks);
        self
    }

    /// Freeze the registry. Rule keys are derived from each check's key and
    /// the repository; the mapping never changes afterwards.
    pub fn build(self) -> Checks {
        let rule_keys = self
            .checks
            .iter()
            .map(|c| RuleKey::new(&self.repository, c.key()))
            .collect();
        Checks {
            repository: self.repository,
            checks: self.checks,
            rule_keys,
        }
    }
}

/// Immutable registry of enabled checks for one repository.
///
/// Built once at sensor construction, queried read-only afterwards.
pub struct Checks {
    repository: String,
    checks: Vec<Arc<dyn Check>>,
    rule_keys: Vec<RuleKey>,
}

impl Checks {
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// All enabled checks in registration order.
    pub fn all(&self) -> &[Arc<dyn Check>] {
        &self.checks
    }

    /// Enabled checks paired with their registration ids, for the scanner.
    pub fn enabled(&self) -> Vec<EnabledCheck> {
        self.checks
            .iter()
            .enumerate()
            .map(|(i, check)| EnabledCheck {
                id: CheckId(i),
                check: Arc::clone(check),
            })
            .collect()
    }

    /// Resolve the rule key a check was registered under.
    ///
    /// Returns `None` for ids this registry never issued; callers treat that
    /// as a fatal condition.
    pub fn rule_key(&self, id: CheckId) -> Option<&RuleKey> {
        self.rule_keys.get(id.0)
    }
}
