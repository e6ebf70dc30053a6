//! Tree walker: document-order traversal with per-kind rule dispatch.
//!
//! Every node is visited exactly once. A node's rule runs before its
//! children are visited, so children added or reordered by the rule (a
//! prepended `Pass`, a shuffled body, a wrapped iterable) are walked in their
//! new positions.

use crate::ast::Node;
use crate::config::RewriteConfig;
use crate::error::{Error, Result};
use crate::rules::{self, RuleContext};
use std::fmt;
use tracing::debug;

/// Stack-safety bound on nesting. Far deeper than any parser output; trees
/// past it are reported as malformed rather than overflowing the stack.
pub const MAX_DEPTH: usize = 2048;

/// Counters collected over one rewrite pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteStats {
    pub nodes_visited: usize,
    pub functions_renamed: usize,
    pub bodies_shuffled: usize,
    pub dead_statements: usize,
    pub identifiers_renamed: usize,
    pub identifier_names_minted: usize,
    pub conditions_negated: usize,
    pub conditions_collapsed: usize,
    pub loops_wrapped: usize,
    pub strings_encoded: usize,
}

impl fmt::Display for RewriteStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nodes visited:        {}", self.nodes_visited)?;
        writeln!(f, "functions renamed:    {}", self.functions_renamed)?;
        writeln!(f, "bodies shuffled:      {}", self.bodies_shuffled)?;
        writeln!(f, "dead statements:      {}", self.dead_statements)?;
        writeln!(
            f,
            "identifiers renamed:  {} ({} distinct)",
            self.identifiers_renamed, self.identifier_names_minted
        )?;
        writeln!(
            f,
            "conditions restated:  {} negated, {} collapsed",
            self.conditions_negated, self.conditions_collapsed
        )?;
        writeln!(f, "loops wrapped:        {}", self.loops_wrapped)?;
        write!(f, "strings encoded:      {}", self.strings_encoded)
    }
}

/// Result of a successful rewrite.
#[derive(Debug, Clone)]
pub struct Obfuscated {
    pub tree: Node,
    pub stats: RewriteStats,
}

/// Rewrite `tree` under `config`.
///
/// The rename table and random source live only for this call. On error the
/// partially rewritten tree is dropped.
pub fn obfuscate(mut tree: Node, config: &RewriteConfig) -> Result<Obfuscated> {
    let mut walker = Walker::new(config);
    walker.walk(&mut tree)?;
    let stats = walker.finish();
    debug!(
        nodes = stats.nodes_visited,
        functions = stats.functions_renamed,
        identifiers = stats.identifiers_renamed,
        loops = stats.loops_wrapped,
        strings = stats.strings_encoded,
        "rewrite complete"
    );
    Ok(Obfuscated { tree, stats })
}

pub struct Walker<'a> {
    ctx: RuleContext<'a>,
}

impl<'a> Walker<'a> {
    pub fn new(config: &'a RewriteConfig) -> Self {
        Self {
            ctx: RuleContext::new(config),
        }
    }

    pub fn walk(&mut self, root: &mut Node) -> Result<()> {
        self.visit(root, 0)
    }

    pub fn finish(self) -> RewriteStats {
        self.ctx.stats
    }

    fn visit(&mut self, node: &mut Node, depth: usize) -> Result<()> {
        if depth > MAX_DEPTH {
            return Err(Error::malformed(format!(
                "nesting exceeds {MAX_DEPTH} levels"
            )));
        }
        self.ctx.stats.nodes_visited += 1;

        match node {
            Node::FunctionDefinition(func) => rules::function_definition(func, &mut self.ctx),
            Node::Identifier(ident) => rules::identifier(ident, &mut self.ctx),
            Node::IfStatement(stmt) => rules::if_statement(stmt, &mut self.ctx),
            Node::ForStatement(stmt) => rules::for_statement(stmt, &mut self.ctx),
            Node::StringLiteral(lit) => rules::string_literal(lit, &mut self.ctx)?,
            Node::Module(_)
            | Node::BoolLiteral(_)
            | Node::Not(_)
            | Node::Call(_)
            | Node::Pass
            | Node::Other(_) => {}
        }

        for child in node.children_mut() {
            self.visit(child, depth + 1)?;
        }
        Ok(())
    }
}
