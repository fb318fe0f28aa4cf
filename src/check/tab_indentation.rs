//! Check flagging tab-indented lines.

use crate::parser::Node;

use super::{Check, CheckContext};

/// Flags any node whose line starts with a tab character.
pub struct TabIndentationCheck;

impl Check for TabIndentationCheck {
    fn key(&self) -> &str {
        "tab-indentation"
    }

    fn visit(&self, node: &Node, ctx: &mut CheckContext) {
        if node.text.starts_with('\t') {
            ctx.report(node.line, "replace tab indentation with spaces");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::CheckId;
    use crate::parser::parse;

    #[test]
    fn test_flags_tab_indented_lines_only() {
        let tree = parse("print x\n\tprint y\n    print z\n");
        let mut ctx = CheckContext::new(CheckId::for_tests(0));
        let check = TabIndentationCheck;
        for node in tree.nodes() {
            check.visit(node, &mut ctx);
        }

        let messages = ctx.into_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].line, Some(2));
    }
}
