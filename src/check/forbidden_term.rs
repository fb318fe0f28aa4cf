//! Check flagging forbidden terms anywhere in the source.

use regex::Regex;

use crate::parser::Node;

use super::{Check, CheckContext};

/// Default terms flagged when no custom pattern is supplied.
const DEFAULT_PATTERN: &str = r"\b(TODO|FIXME|XXX)\b";

/// Flags occurrences of a forbidden term, one message per matching node.
pub struct ForbiddenTermCheck {
    regex: Regex,
}

impl ForbiddenTermCheck {
    /// Build the check with a custom regex pattern.
    pub fn new(pattern: &str) -> anyhow::Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| anyhow::anyhow!("compiling pattern {:?}: {}", pattern, e))?;
        Ok(Self { regex })
    }
}

impl Default for ForbiddenTermCheck {
    fn default() -> Self {
        Self {
            // The default pattern is a literal; compiling it cannot fail.
            regex: Regex::new(DEFAULT_PATTERN).unwrap(),
        }
    }
}

impl Check for ForbiddenTermCheck {
    fn key(&self) -> &str {
        "forbidden-term"
    }

    fn visit(&self, node: &Node, ctx: &mut CheckContext) {
        if let Some(mat) = self.regex.find(&node.text) {
            ctx.report(
                node.line,
                format!("forbidden term {:?} found", mat.as_str()),
            );
        }
    }
}
