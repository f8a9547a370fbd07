//! Preorder traversal of syntax trees.

use crate::node::{FieldValue, NodeRef};

/// Yields the nodes under `root` in preorder: every node before its children,
/// children in declared field order. Operator tags and scalar fields are not
/// nodes and are skipped.
pub fn walk_preorder<'a>(root: impl Into<NodeRef<'a>>) -> Preorder<'a> {
    Preorder {
        stack: vec![root.into()],
    }
}

/// Lazy preorder iterator returned by [`walk_preorder`].
pub struct Preorder<'a> {
    stack: Vec<NodeRef<'a>>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let before = self.stack.len();
        for (_, value) in node.fields() {
            push_children(&mut self.stack, value);
        }
        // Children were pushed in declared order; reverse them so they pop
        // in declared order.
        self.stack[before..].reverse();
        Some(node)
    }
}

fn push_children<'a>(stack: &mut Vec<NodeRef<'a>>, value: FieldValue<'a>) {
    match value {
        FieldValue::Node(child) => stack.push(child),
        FieldValue::OptNode(Some(child)) => stack.push(child),
        FieldValue::Seq(items) => {
            for item in items {
                push_children(stack, item);
            }
        }
        _ => {}
    }
}
