//! Per-node-kind rewrite rules.
//!
//! Each rule mutates one node in place using the run's [`RuleContext`]. The
//! walker calls a rule when it reaches a node of the matching kind and then
//! recurses into whatever children the rule left behind.
//!
//! None of these rules preserve program behavior: body shuffling ignores
//! data dependencies and a negated literal condition flips its truth value.

use crate::ast::{ForStatement, FunctionDefinition, Identifier, IfStatement, Node, StringLiteral};
use crate::cipher;
use crate::config::RewriteConfig;
use crate::error::Result;
use crate::names::NameGenerator;
use crate::rename::RenameTable;
use crate::walk::RewriteStats;
use tracing::trace;

/// Mutable state threaded through one rewrite pass.
pub struct RuleContext<'a> {
    pub config: &'a RewriteConfig,
    pub names: NameGenerator,
    pub table: RenameTable,
    pub stats: RewriteStats,
}

impl<'a> RuleContext<'a> {
    pub fn new(config: &'a RewriteConfig) -> Self {
        Self {
            config,
            names: NameGenerator::new(config.seed, config.name_length),
            table: RenameTable::new(),
            stats: RewriteStats::default(),
        }
    }
}

/// Rename the function, shuffle its body, then prepend a `Pass`.
pub fn function_definition(func: &mut FunctionDefinition, ctx: &mut RuleContext) {
    let rules = ctx.config.rules;

    if rules.rename_functions && !ctx.config.is_kept(&func.name) {
        let fresh = ctx.names.fresh_name();
        ctx.table.record_function(&func.name, &fresh);
        trace!(from = %func.name, to = %fresh, "renamed function");
        func.name = fresh;
        ctx.stats.functions_renamed += 1;
    }

    if rules.shuffle_bodies && func.body.len() > 1 {
        ctx.names.shuffle(&mut func.body);
        ctx.stats.bodies_shuffled += 1;
    }

    if rules.dead_code {
        func.body.insert(0, Node::Pass);
        ctx.stats.dead_statements += 1;
    }
}

/// Map the name through the identifier table, minting an entry on first sight.
pub fn identifier(ident: &mut Identifier, ctx: &mut RuleContext) {
    if !ctx.config.rules.rename_identifiers || ctx.config.is_kept(&ident.name) {
        return;
    }
    let (replacement, created) = ctx.table.identifier(&ident.name, &mut ctx.names);
    if created {
        trace!(from = %ident.name, to = %replacement, "new identifier mapping");
        ctx.stats.identifier_names_minted += 1;
    }
    ident.name = replacement;
    ctx.stats.identifiers_renamed += 1;
}

/// Outcome of [`restate_condition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restatement {
    Negated,
    Collapsed,
    Unchanged,
}

/// `b` becomes `not b`; `not b` collapses to the literal `!b`.
pub fn restate_condition(condition: &mut Node) -> Restatement {
    match condition {
        Node::BoolLiteral(lit) => {
            let lit = *lit;
            *condition = Node::negate(Node::BoolLiteral(lit));
            Restatement::Negated
        }
        Node::Not(not) => {
            if let Node::BoolLiteral(lit) = not.operand.as_ref() {
                let value = lit.value;
                *condition = Node::boolean(!value);
                Restatement::Collapsed
            } else {
                Restatement::Unchanged
            }
        }
        _ => Restatement::Unchanged,
    }
}

pub fn if_statement(stmt: &mut IfStatement, ctx: &mut RuleContext) {
    if !ctx.config.rules.conditions {
        return;
    }
    match restate_condition(&mut stmt.condition) {
        Restatement::Negated => ctx.stats.conditions_negated += 1,
        Restatement::Collapsed => ctx.stats.conditions_collapsed += 1,
        Restatement::Unchanged => {}
    }
}

/// Replace the iterable with a call to a freshly named wrapper.
///
/// The wrapper name is recorded in the function table but no definition for
/// it is added to the tree, so the result does not run as-is. The callee is
/// an ordinary identifier and gets renamed again when the walk reaches it.
pub fn for_statement(stmt: &mut ForStatement, ctx: &mut RuleContext) {
    if !ctx.config.rules.loops {
        return;
    }
    let wrapper = ctx.names.fresh_name();
    ctx.table.record_function(&wrapper, &wrapper);
    let iterable = std::mem::replace(stmt.iterable.as_mut(), Node::Pass);
    *stmt.iterable = Node::call(Node::ident(wrapper), vec![iterable]);
    ctx.stats.loops_wrapped += 1;
}

pub fn string_literal(lit: &mut StringLiteral, ctx: &mut RuleContext) -> Result<()> {
    if !ctx.config.rules.strings {
        return Ok(());
    }
    lit.value = cipher::encode(&lit.value, ctx.config.shift, ctx.config.overflow)?;
    ctx.stats.strings_encoded += 1;
    Ok(())
}
