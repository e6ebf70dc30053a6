//! Source sketch renderer: indentation-based, Python-flavoured text.
//!
//! Meant for eyeballing a rewrite, not for feeding an interpreter: the real
//! printer for the target language lives outside this crate. `Other` nodes
//! carry no grammar, so they render from their `text` and children:
//!
//! | Shape | Output |
//! |-------|--------|
//! | no children | `text`, else `kind` |
//! | `text` + one child | `text child` (`return x`) |
//! | `text` + several children | children joined by ` text ` (`a + b`) |
//! | no `text` | children joined by `, ` |

use crate::ast::{Node, Other};
use crate::error::Result;
use crate::render::Renderer;

const INDENT: &str = "    ";

pub struct SourceRenderer;

impl Renderer for SourceRenderer {
    fn render(&self, tree: &Node) -> Result<String> {
        let mut out = String::new();
        write_statement(&mut out, tree, 0);
        Ok(out)
    }
}

fn line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}

/// Empty bodies render as `pass` so the sketch stays well-formed.
fn write_block(out: &mut String, body: &[Node], depth: usize) {
    if body.is_empty() {
        line(out, depth, "pass");
    }
    for stmt in body {
        write_statement(out, stmt, depth);
    }
}

fn write_statement(out: &mut String, node: &Node, depth: usize) {
    match node {
        Node::Module(m) => {
            for stmt in &m.body {
                write_statement(out, stmt, depth);
            }
        }
        Node::FunctionDefinition(f) => {
            line(out, depth, &format!("def {}({}):", f.name, f.params.join(", ")));
            write_block(out, &f.body, depth + 1);
        }
        Node::IfStatement(s) => {
            line(out, depth, &format!("if {}:", expression(&s.condition)));
            write_block(out, &s.then_body, depth + 1);
            if !s.else_body.is_empty() {
                line(out, depth, "else:");
                write_block(out, &s.else_body, depth + 1);
            }
        }
        Node::ForStatement(s) => {
            line(
                out,
                depth,
                &format!(
                    "for {} in {}:",
                    expression(&s.target),
                    expression(&s.iterable)
                ),
            );
            write_block(out, &s.body, depth + 1);
        }
        Node::Other(o) if o.children.iter().any(is_statement) => {
            line(out, depth, &format!("{}:", o.text.as_deref().unwrap_or(&o.kind)));
            write_block(out, &o.children, depth + 1);
        }
        _ => line(out, depth, &expression(node)),
    }
}

fn is_statement(node: &Node) -> bool {
    matches!(
        node,
        Node::Module(_)
            | Node::FunctionDefinition(_)
            | Node::IfStatement(_)
            | Node::ForStatement(_)
            | Node::Pass
    )
}

fn expression(node: &Node) -> String {
    match node {
        Node::Identifier(i) => i.name.clone(),
        Node::StringLiteral(s) => quote(&s.value),
        Node::BoolLiteral(b) => (if b.value { "True" } else { "False" }).to_string(),
        Node::Not(n) => format!("not {}", operand(&n.operand)),
        Node::Call(c) => format!(
            "{}({})",
            operand(&c.callee),
            c.args.iter().map(expression).collect::<Vec<_>>().join(", ")
        ),
        Node::Other(o) => other(o),
        Node::Pass => "pass".to_string(),
        Node::Module(_)
        | Node::FunctionDefinition(_)
        | Node::IfStatement(_)
        | Node::ForStatement(_) => format!("<{}>", node.kind()),
    }
}

/// Parenthesize infix `Other` nodes used as an operand.
fn operand(node: &Node) -> String {
    match node {
        Node::Other(o) if o.text.is_some() && o.children.len() > 1 => {
            format!("({})", expression(node))
        }
        _ => expression(node),
    }
}

fn other(o: &Other) -> String {
    match (&o.text, o.children.as_slice()) {
        (Some(text), []) => text.clone(),
        (None, []) => o.kind.clone(),
        (Some(text), [only]) => format!("{text} {}", expression(only)),
        (Some(text), children) => children
            .iter()
            .map(operand)
            .collect::<Vec<_>>()
            .join(format!(" {text} ").as_str()),
        (None, children) => children
            .iter()
            .map(expression)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Double-quoted literal; shifted payloads often contain control characters.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() && (c as u32) < 0x100 => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ForStatement, FunctionDefinition, IfStatement, Module};

    fn other_node(kind: &str, text: Option<&str>, children: Vec<Node>) -> Node {
        Node::Other(Other {
            kind: kind.to_string(),
            text: text.map(str::to_string),
            children,
        })
    }

    #[test]
    fn renders_function_with_body() {
        let tree = Node::Module(Module {
            body: vec![Node::FunctionDefinition(FunctionDefinition {
                name: "compute".into(),
                params: vec!["a".into(), "b".into()],
                body: vec![
                    Node::Pass,
                    other_node(
                        "Return",
                        Some("return"),
                        vec![other_node("BinOp", Some("+"), vec![Node::ident("a"), Node::ident("b")])],
                    ),
                ],
            })],
        });
        assert_eq!(
            SourceRenderer.render(&tree).unwrap(),
            "def compute(a, b):\n    pass\n    return a + b\n"
        );
    }

    #[test]
    fn renders_if_else_and_negation() {
        let tree = Node::IfStatement(IfStatement {
            condition: Box::new(Node::negate(Node::boolean(true))),
            then_body: vec![Node::call(Node::ident("go"), vec![])],
            else_body: vec![Node::string("no")],
        });
        assert_eq!(
            SourceRenderer.render(&tree).unwrap(),
            "if not True:\n    go()\nelse:\n    \"no\"\n"
        );
    }

    #[test]
    fn renders_wrapped_loop() {
        let tree = Node::ForStatement(ForStatement {
            target: Box::new(Node::ident("i")),
            iterable: Box::new(Node::call(Node::ident("w"), vec![Node::ident("xs")])),
            body: vec![],
        });
        assert_eq!(SourceRenderer.render(&tree).unwrap(), "for i in w(xs):\n    pass\n");
    }

    #[test]
    fn other_shapes() {
        assert_eq!(expression(&other_node("Num", Some("42"), vec![])), "42");
        assert_eq!(expression(&other_node("Break", None, vec![])), "Break");
        assert_eq!(
            expression(&other_node("Tuple", None, vec![Node::ident("a"), Node::ident("b")])),
            "a, b"
        );
        let sum = other_node("BinOp", Some("+"), vec![Node::ident("a"), Node::ident("b")]);
        assert_eq!(
            expression(&other_node("BinOp", Some("*"), vec![sum, Node::ident("c")])),
            "(a + b) * c"
        );
    }

    #[test]
    fn other_with_statement_children_is_a_block() {
        let tree = other_node("While", Some("while running"), vec![Node::Pass]);
        assert_eq!(SourceRenderer.render(&tree).unwrap(), "while running:\n    pass\n");
    }

    #[test]
    fn quotes_escape_control_characters() {
        assert_eq!(quote("a\"b\\c\n"), r#""a\"b\\c\n""#);
        assert_eq!(quote("\u{80}"), r#""\x80""#);
        assert_eq!(quote("é"), "\"é\"");
    }
}
