//! AST obfuscator.
//!
//! Rewrites a parsed program tree so it is harder to read:
//!
//! 1. **Functions**: renamed to random names, body shuffled, a `pass` prepended
//! 2. **Identifiers**: every occurrence of a name mapped through one rename table
//! 3. **Conditions**: a literal `b` becomes `not b`, and `not b` collapses back
//! 4. **Loops**: the iterable wrapped in a call to a randomly named function
//! 5. **Strings**: every character shifted up by a fixed code point offset
//!
//! The output is NOT behavior-preserving: shuffling ignores data flow and
//! negation flips literal conditions. Parsing source into a tree and printing
//! it back are left to an external parser/printer; trees cross that boundary
//! as JSON (see [`ast`]).

pub mod ast;
pub mod cipher;
pub mod config;
pub mod error;
pub mod names;
pub mod rename;
pub mod render;
pub mod rules;
pub mod walk;

pub use ast::Node;
pub use cipher::OverflowPolicy;
pub use config::{parse_keep_patterns, RewriteConfig, RuleSet};
pub use error::{Error, Result};
pub use walk::{obfuscate, Obfuscated, RewriteStats};
