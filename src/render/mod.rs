//! Output format dispatch.

pub mod json;
pub mod source;

use crate::ast::Node;
use crate::error::{Error, Result};

/// Trait for rendering a rewritten tree into a specific output format.
pub trait Renderer {
    fn render(&self, tree: &Node) -> Result<String>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "json" => Ok(Box::new(json::JsonRenderer)),
        "source" | "src" => Ok(Box::new(source::SourceRenderer)),
        _ => Err(Error::UnknownFormat(format.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        let tree = Node::ident("x");
        let json = create_renderer("json").unwrap().render(&tree).unwrap();
        assert_eq!(json, "{\n  \"type\": \"Identifier\",\n  \"name\": \"x\"\n}\n");
        for name in ["source", "src"] {
            assert_eq!(create_renderer(name).unwrap().render(&tree).unwrap(), "x\n");
        }
    }

    #[test]
    fn unknown_format() {
        let err = create_renderer("yaml").err().unwrap();
        assert_eq!(err.to_string(), "unknown format: yaml. Use json or source");
    }
}
