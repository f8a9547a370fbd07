//! Constructor-style structural dumps.
//!
//! [`dump`] renders a tree as nested `Kind(field=value, ...)` text, with node
//! sequences broken across lines so sibling-heavy trees diff cleanly. The
//! output is a debugging aid, not source text; use the renderer for that.

use crate::node::{FieldValue, NodeRef};
use crate::unparse::bytes_literal;

const FIELD_INDENT: usize = 4;

/// Rendering options for [`dump`].
#[derive(Debug, Clone, Copy)]
pub struct DumpOptions {
    /// Prefix each value with its field name, as `name=value`.
    pub annotate_fields: bool,
    /// Append the recorded line and column to nodes that carry a position.
    pub include_positions: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        DumpOptions {
            annotate_fields: true,
            include_positions: false,
        }
    }
}

/// Renders a tree as a constructor-style debug string.
pub fn dump<'a>(node: impl Into<NodeRef<'a>>, options: DumpOptions) -> String {
    format_node(node.into(), 0, options)
}

fn format_node(node: NodeRef<'_>, level: usize, options: DumpOptions) -> String {
    let mut fields = node.fields();
    if options.include_positions {
        if let Some(pos) = node.pos() {
            fields.push(("line", FieldValue::UInt(pos.line)));
            fields.push(("column", FieldValue::UInt(pos.column)));
        }
    }
    let rendered: Vec<String> = fields
        .into_iter()
        .map(|(name, value)| {
            let value = format_value(&value, level, options);
            if options.annotate_fields {
                format!("{}={}", name, value)
            } else {
                value
            }
        })
        .collect();
    format!("{}({})", node.kind(), rendered.join(", "))
}

fn format_value(value: &FieldValue<'_>, level: usize, options: DumpOptions) -> String {
    match value {
        FieldValue::Node(node) => format_node(*node, level, options),
        FieldValue::OptNode(Some(node)) => format_node(*node, level, options),
        FieldValue::OptNode(None) => "None".to_string(),
        FieldValue::Seq(items) if items.is_empty() => "[]".to_string(),
        FieldValue::Seq(items) => {
            let pad = " ".repeat(FIELD_INDENT * (level + 1));
            let mut out = String::from("[\n");
            for item in items {
                out.push_str(&pad);
                out.push_str(&format_value(item, level + 1, options));
                out.push_str(",\n");
            }
            out.push_str(&pad);
            out.push(']');
            out
        }
        FieldValue::Ident(name) => format!("{:?}", name),
        FieldValue::OptIdent(Some(name)) => format!("{:?}", name),
        FieldValue::OptIdent(None) => "None".to_string(),
        FieldValue::Num(n) => n.to_string(),
        FieldValue::Bytes(bytes) => bytes_literal(bytes),
        FieldValue::Singleton(value) => value.as_str().to_string(),
        FieldValue::Op(name) => format!("{}()", name),
        FieldValue::UInt(value) => value.to_string(),
    }
}
