//! The tree node data model: elements, scalars and repeated-sibling runs.

use indexmap::IndexMap;
use indexmap::map::Entry;

/// A node in a decoded document.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// A text-only leaf such as `<Organization_Name>Acme</Organization_Name>`.
    Scalar(String),
    /// An element carrying attributes, children or mixed content.
    Element(Element),
}

/// One decoded XML element: an attribute map, an ordered child map and
/// optional direct text content.
///
/// Children keep document order; record discovery order and therefore row
/// order depend on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    attributes: IndexMap<String, String>,
    children: IndexMap<String, Child>,
    text: Option<String>,
}

/// The value stored under one tag key of an element.
///
/// Repeated sibling tags share one key; the decoder promotes the entry to
/// `Many` when a second sibling arrives. Callers must handle both shapes
/// uniformly, which [`Child::iter`] makes trivial.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Node(TreeNode),
    Many(Vec<TreeNode>),
}

impl TreeNode {
    /// The node's own text: scalar content, or an element's direct text.
    /// A container with no direct text has none.
    pub fn text(&self) -> Option<&str> {
        match self {
            TreeNode::Scalar(s) => Some(s),
            TreeNode::Element(el) => el.text(),
        }
    }

    /// A named attribute value. Scalars carry no attributes.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            TreeNode::Scalar(_) => None,
            TreeNode::Element(el) => el.attribute(name),
        }
    }

    /// The child entry stored under `tag`. Scalars have no children, and an
    /// absent tag is a normal "no data here" outcome.
    pub fn child(&self, tag: &str) -> Option<&Child> {
        match self {
            TreeNode::Scalar(_) => None,
            TreeNode::Element(el) => el.children.get(tag),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            TreeNode::Scalar(_) => None,
            TreeNode::Element(el) => Some(el),
        }
    }
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn children(&self) -> &IndexMap<String, Child> {
        &self.children
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: String) {
        self.text = Some(text);
    }

    pub fn set_attribute(&mut self, name: String, value: String) {
        self.attributes.insert(name, value);
    }

    /// Appends a child under `tag`, promoting the entry to a sibling run on
    /// the second occurrence of the same tag.
    pub fn push_child(&mut self, tag: String, node: TreeNode) {
        match self.children.entry(tag) {
            Entry::Vacant(slot) => {
                slot.insert(Child::Node(node));
            }
            Entry::Occupied(mut slot) => {
                let mut run = match std::mem::replace(slot.get_mut(), Child::Many(Vec::new())) {
                    Child::Node(first) => vec![first],
                    Child::Many(nodes) => nodes,
                };
                run.push(node);
                *slot.get_mut() = Child::Many(run);
            }
        }
    }
}

impl Child {
    /// The entry as a uniform candidate list, one element long for `Node`.
    pub fn iter(&self) -> std::slice::Iter<'_, TreeNode> {
        match self {
            Child::Node(node) => std::slice::from_ref(node).iter(),
            Child::Many(run) => run.iter(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Child::Node(_) => 1,
            Child::Many(run) => run.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_child_promotes_to_run() {
        let mut el = Element::new();
        el.push_child("ID".to_string(), TreeNode::Scalar("a".to_string()));
        assert_eq!(
            el.children().get("ID"),
            Some(&Child::Node(TreeNode::Scalar("a".to_string())))
        );

        el.push_child("ID".to_string(), TreeNode::Scalar("b".to_string()));
        el.push_child("ID".to_string(), TreeNode::Scalar("c".to_string()));
        let run = el.children().get("ID").unwrap();
        assert_eq!(run.len(), 3);
        let texts: Vec<_> = run.iter().filter_map(TreeNode::text).collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }

    #[test]
    fn test_push_child_keeps_document_order_across_tags() {
        let mut el = Element::new();
        el.push_child("B".to_string(), TreeNode::Scalar("1".to_string()));
        el.push_child("A".to_string(), TreeNode::Scalar("2".to_string()));
        let tags: Vec<_> = el.children().keys().map(String::as_str).collect();
        assert_eq!(tags, ["B", "A"]);
    }

    #[test]
    fn test_scalar_has_no_structure() {
        let node = TreeNode::Scalar("plain".to_string());
        assert_eq!(node.text(), Some("plain"));
        assert_eq!(node.attribute("anything"), None);
        assert!(node.child("anything").is_none());
        assert!(node.as_element().is_none());
    }

    #[test]
    fn test_empty_element_has_no_text() {
        let node = TreeNode::Element(Element::new());
        assert_eq!(node.text(), None);
    }
}
