//! Rewrite configuration: which rules run, seeding, and names to keep.

use crate::cipher::OverflowPolicy;
use crate::error::{Error, Result};
use regex::Regex;

/// Rule names accepted by [`RuleSet::from_skip_list`].
pub const RULE_NAMES: [&str; 7] = [
    "rename-functions",
    "shuffle-bodies",
    "dead-code",
    "rename-identifiers",
    "conditions",
    "loops",
    "strings",
];

/// Which rewrite steps fire. All are enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    pub rename_functions: bool,
    pub shuffle_bodies: bool,
    /// Insert a `Pass` at the head of every function body.
    pub dead_code: bool,
    pub rename_identifiers: bool,
    pub conditions: bool,
    pub loops: bool,
    pub strings: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            rename_functions: true,
            shuffle_bodies: true,
            dead_code: true,
            rename_identifiers: true,
            conditions: true,
            loops: true,
            strings: true,
        }
    }
}

impl RuleSet {
    /// All rules enabled except those named in `skip` (see [`RULE_NAMES`]).
    pub fn from_skip_list(skip: &[&str]) -> Result<Self> {
        let mut rules = Self::default();
        for name in skip {
            match name.trim() {
                "rename-functions" => rules.rename_functions = false,
                "shuffle-bodies" => rules.shuffle_bodies = false,
                "dead-code" => rules.dead_code = false,
                "rename-identifiers" => rules.rename_identifiers = false,
                "conditions" => rules.conditions = false,
                "loops" => rules.loops = false,
                "strings" => rules.strings = false,
                "" => {}
                other => return Err(Error::UnknownRule(other.to_string())),
            }
        }
        Ok(rules)
    }
}

/// Everything one rewrite pass needs besides the tree.
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    pub rules: RuleSet,
    /// Fixed seed for reproducible output. `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub name_length: usize,
    /// Code point offset applied to string literals.
    pub shift: u32,
    pub overflow: OverflowPolicy,
    /// Names matching any of these are left untouched.
    pub keep: Vec<Regex>,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            rules: RuleSet::default(),
            seed: None,
            name_length: 10,
            shift: 3,
            overflow: OverflowPolicy::Reject,
            keep: Vec::new(),
        }
    }
}

impl RewriteConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn is_kept(&self, name: &str) -> bool {
        self.keep.iter().any(|re| re.is_match(name))
    }
}

/// Parse a comma-separated list of keep patterns into compiled regexes.
///
/// Each pattern is anchored with `^...$` so it matches the full name, not
/// just a substring: `len` keeps `len` but not `length`. Patterns the user
/// already anchored are used as-is.
pub fn parse_keep_patterns(pattern: &str) -> Result<Vec<Regex>> {
    pattern
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s.starts_with('^') || s.ends_with('$') {
                Regex::new(s).map_err(Into::into)
            } else {
                Regex::new(&format!("^(?:{s})$")).map_err(Into::into)
            }
        })
        .collect()
}
