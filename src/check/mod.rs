//! Rule checks and the checks registry.
//!
//! A check is a visitor over the parsed syntax tree that emits messages. The
//! registry assigns each enabled check an id at registration time and holds
//! the immutable check-to-rule-key mapping the sensor consults when
//! translating messages into issues.

mod forbidden_term;
mod registry;
mod tab_indentation;

pub use forbidden_term::ForbiddenTermCheck;
pub use registry::{CheckFactory, CheckId, Checks, ChecksBuilder, EnabledCheck, RuleKey};
pub use tab_indentation::TabIndentationCheck;

use std::sync::Arc;

use crate::parser::Node;

/// Repository key under which the dummy-language rules are registered.
pub const REPOSITORY_KEY: &str = "dummy";

/// A rule implementation that inspects parsed source and emits messages.
///
/// Checks are stateless visitors: the scanner calls `visit` once per node,
/// in tree order, with a context that collects messages for the current file.
pub trait Check: Send + Sync {
    /// The rule identifier within the repository (e.g. `"forbidden-term"`).
    fn key(&self) -> &str;

    /// Inspect one node, reporting any violations through the context.
    fn visit(&self, node: &Node, ctx: &mut CheckContext);
}

/// One message emitted by a check, tied back to the check that produced it.
///
/// `line` is `None` for file-level messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckMessage {
    pub check: CheckId,
    pub line: Option<u32>,
    pub text: String,
}

/// Per-check, per-file collection point for messages.
pub struct CheckContext {
    check: CheckId,
    messages: Vec<CheckMessage>,
}

impl CheckContext {
    pub fn new(check: CheckId) -> Self {
        Self {
            check,
            messages: Vec::new(),
        }
    }

    /// Report a violation at a source line (1-based).
    pub fn report(&mut self, line: u32, text: impl Into<String>) {
        self.messages.push(CheckMessage {
            check: self.check,
            line: Some(line),
            text: text.into(),
        });
    }

    /// Report a file-level violation with no line.
    pub fn report_file(&mut self, text: impl Into<String>) {
        self.messages.push(CheckMessage {
            check: self.check,
            line: None,
            text: text.into(),
        });
    }

    pub fn into_messages(self) -> Vec<CheckMessage> {
        self.messages
    }
}

/// The built-in checks this plugin ships, in registration order.
///
/// Rule logic is deliberately thin; these exist so the pipeline has
/// something real to run end to end.
pub fn builtin_checks() -> Vec<Arc<dyn Check>> {
    vec![
        Arc::new(ForbiddenTermCheck::default()),
        Arc::new(TabIndentationCheck),
    ]
}
