//! Tree model consumed and produced by the rewriter.
//!
//! Trees arrive from an external parser as JSON, tagged on a `type` field:
//!
//! ```json
//! {"type": "FunctionDefinition", "name": "compute", "params": ["a"],
//!  "body": [{"type": "Identifier", "name": "x"}]}
//! ```
//!
//! Unknown `type` values and missing fields are rejected as
//! [`Error::MalformedTree`](crate::Error::MalformedTree). Nesting depth is
//! not limited here; the parser grows its stack as needed.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One node of the program tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Root statement list.
    Module(Module),
    FunctionDefinition(FunctionDefinition),
    Identifier(Identifier),
    IfStatement(IfStatement),
    ForStatement(ForStatement),
    StringLiteral(StringLiteral),
    BoolLiteral(BoolLiteral),
    /// Logical negation of a single operand.
    Not(Not),
    Call(Call),
    /// The no-op statement.
    Pass,
    /// Any kind no rule handles. Still visited.
    Other(Other),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    #[serde(default)]
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    /// Parameter names. Opaque: never visited, never renamed.
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(default)]
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfStatement {
    pub condition: Box<Node>,
    #[serde(default)]
    pub then_body: Vec<Node>,
    #[serde(default)]
    pub else_body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForStatement {
    /// Loop variable, e.g. the `i` in `for i in items`.
    pub target: Box<Node>,
    pub iterable: Box<Node>,
    #[serde(default)]
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolLiteral {
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Not {
    pub operand: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    pub callee: Box<Node>,
    #[serde(default)]
    pub args: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Other {
    /// Parser-side kind label, e.g. `"Assign"` or `"BinOp"`.
    pub kind: String,
    /// Operator, keyword or literal text, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    pub fn ident(name: impl Into<String>) -> Self {
        Node::Identifier(Identifier { name: name.into() })
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::StringLiteral(StringLiteral {
            value: value.into(),
        })
    }

    pub fn boolean(value: bool) -> Self {
        Node::BoolLiteral(BoolLiteral { value })
    }

    pub fn negate(operand: Node) -> Self {
        Node::Not(Not {
            operand: Box::new(operand),
        })
    }

    pub fn call(callee: Node, args: Vec<Node>) -> Self {
        Node::Call(Call {
            callee: Box::new(callee),
            args,
        })
    }

    /// Kind name as it appears in the `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Module(_) => "Module",
            Node::FunctionDefinition(_) => "FunctionDefinition",
            Node::Identifier(_) => "Identifier",
            Node::IfStatement(_) => "IfStatement",
            Node::ForStatement(_) => "ForStatement",
            Node::StringLiteral(_) => "StringLiteral",
            Node::BoolLiteral(_) => "BoolLiteral",
            Node::Not(_) => "Not",
            Node::Call(_) => "Call",
            Node::Pass => "Pass",
            Node::Other(_) => "Other",
        }
    }

    /// Direct children in document order.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Module(m) => m.body.iter().collect(),
            Node::FunctionDefinition(f) => f.body.iter().collect(),
            Node::IfStatement(s) => std::iter::once(&*s.condition)
                .chain(s.then_body.iter())
                .chain(s.else_body.iter())
                .collect(),
            Node::ForStatement(s) => [&*s.target, &*s.iterable]
                .into_iter()
                .chain(s.body.iter())
                .collect(),
            Node::Not(n) => vec![&*n.operand],
            Node::Call(c) => std::iter::once(&*c.callee).chain(c.args.iter()).collect(),
            Node::Other(o) => o.children.iter().collect(),
            Node::Identifier(_) | Node::StringLiteral(_) | Node::BoolLiteral(_) | Node::Pass => {
                Vec::new()
            }
        }
    }

    /// Mutable direct children in document order.
    pub fn children_mut(&mut self) -> Vec<&mut Node> {
        match self {
            Node::Module(m) => m.body.iter_mut().collect(),
            Node::FunctionDefinition(f) => f.body.iter_mut().collect(),
            Node::IfStatement(s) => std::iter::once(&mut *s.condition)
                .chain(s.then_body.iter_mut())
                .chain(s.else_body.iter_mut())
                .collect(),
            Node::ForStatement(s) => [&mut *s.target, &mut *s.iterable]
                .into_iter()
                .chain(s.body.iter_mut())
                .collect(),
            Node::Not(n) => vec![&mut *n.operand],
            Node::Call(c) => std::iter::once(&mut *c.callee)
                .chain(c.args.iter_mut())
                .collect(),
            Node::Other(o) => o.children.iter_mut().collect(),
            Node::Identifier(_) | Node::StringLiteral(_) | Node::BoolLiteral(_) | Node::Pass => {
                Vec::new()
            }
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().into_iter().map(Node::node_count).sum::<usize>()
    }

    pub fn from_json(input: &str) -> Result<Self> {
        let malformed = |e: serde_json::Error| Error::malformed(e.to_string());
        let mut de = serde_json::Deserializer::from_str(input);
        de.disable_recursion_limit();
        let node = Node::deserialize(serde_stacker::Deserializer::new(&mut de))
            .map_err(malformed)?;
        de.end().map_err(malformed)?;
        Ok(node)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
