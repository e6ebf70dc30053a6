//! JSON renderer for the interchange format, readable back by `Node::from_json`.

use crate::ast::Node;
use crate::error::Result;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, tree: &Node) -> Result<String> {
        let mut out = tree.to_json_pretty()?;
        out.push('\n');
        Ok(out)
    }
}
