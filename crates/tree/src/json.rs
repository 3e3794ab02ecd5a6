//! JSON rendering of decoded documents, for interactive exploration of
//! unfamiliar response shapes.

use crate::node::{Child, Element, TreeNode};
use serde_json::{Map, Value};

impl TreeNode {
    /// Renders the node as a JSON value: attributes as `"@name"` keys,
    /// direct text as `"#text"`, repeated siblings as arrays.
    pub fn to_json_value(&self) -> Value {
        match self {
            TreeNode::Scalar(s) => Value::String(s.clone()),
            TreeNode::Element(el) => element_to_json(el),
        }
    }
}

fn element_to_json(el: &Element) -> Value {
    let mut map = Map::new();
    for (name, value) in el.attributes() {
        map.insert(format!("@{}", name), Value::String(value.clone()));
    }
    if let Some(text) = el.text() {
        map.insert("#text".to_string(), Value::String(text.to_string()));
    }
    for (tag, child) in el.children() {
        let value = match child {
            Child::Node(node) => node.to_json_value(),
            Child::Many(run) => Value::Array(run.iter().map(TreeNode::to_json_value).collect()),
        };
        map.insert(tag.clone(), value);
    }
    Value::Object(map)
}
