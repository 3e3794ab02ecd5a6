//! Structural matching of one path step against one tree node.

use xmltab_fieldpath::Step;
use xmltab_tree::TreeNode;

/// Selects the children of `node` matching `step`, in document order.
///
/// Absence of the tag is a normal "no data here" outcome and yields an
/// empty list. A singular child and a repeated-sibling run are handled
/// uniformly as a candidate list. With a filter, only candidates whose
/// attribute map carries the named attribute with exactly the expected
/// value survive; a scalar candidate carries no attributes and never
/// passes a filter. Without a filter every candidate is returned;
/// cardinality reduction is the caller's concern.
pub fn match_step<'a>(node: &'a TreeNode, step: &Step) -> Vec<&'a TreeNode> {
    let Some(child) = node.child(&step.tag) else {
        return Vec::new();
    };
    match &step.filter {
        None => child.iter().collect(),
        Some(filter) => child
            .iter()
            .filter(|candidate| candidate.attribute(&filter.name) == Some(filter.value.as_str()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xmltab_fieldpath::{AttrFilter, Step};
    use xmltab_tree::decode_document;

    fn step(tag: &str) -> Step {
        Step {
            tag: tag.to_string(),
            filter: None,
        }
    }

    fn filtered(tag: &str, name: &str, value: &str) -> Step {
        Step {
            tag: tag.to_string(),
            filter: Some(AttrFilter {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
    }

    #[test]
    fn test_absent_tag_matches_nothing() {
        let doc = decode_document("<A><B>x</B></A>").unwrap();
        let a = match_step(&doc, &step("A"))[0];
        assert!(match_step(a, &step("C")).is_empty());
    }

    #[test]
    fn test_singular_child_is_one_candidate() {
        let doc = decode_document("<A><B>x</B></A>").unwrap();
        let a = match_step(&doc, &step("A"))[0];
        let matches = match_step(a, &step("B"));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text(), Some("x"));
    }

    #[test]
    fn test_repeated_children_are_all_candidates() {
        let doc = decode_document("<A><B>1</B><B>2</B></A>").unwrap();
        let a = match_step(&doc, &step("A"))[0];
        let texts: Vec<_> = match_step(a, &step("B"))
            .iter()
            .filter_map(|n| n.text())
            .collect();
        assert_eq!(texts, ["1", "2"]);
    }

    #[test]
    fn test_filter_retains_only_exact_attribute_matches() {
        let xml = r#"<Ref xmlns:wd="urn:x">
            <ID wd:type="WID">abc</ID>
            <ID wd:type="Tax_ID_Type">US-EIN</ID>
            <ID wd:type="Legacy_ID">L-77</ID>
        </Ref>"#;
        let doc = decode_document(xml).unwrap();
        let r = match_step(&doc, &step("Ref"))[0];

        let matches = match_step(r, &filtered("ID", "wd:type", "Tax_ID_Type"));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text(), Some("US-EIN"));

        assert!(match_step(r, &filtered("ID", "wd:type", "Nope")).is_empty());
        assert!(match_step(r, &filtered("ID", "wd:kind", "Tax_ID_Type")).is_empty());
    }

    #[test]
    fn test_filter_never_matches_scalar_candidates() {
        let doc = decode_document("<A><B>1</B><B>2</B></A>").unwrap();
        let a = match_step(&doc, &step("A"))[0];
        assert!(match_step(a, &filtered("B", "wd:type", "1")).is_empty());
    }

    #[test]
    fn test_filter_preserves_order_of_survivors() {
        let xml = r#"<R><ID t="x">1</ID><ID t="y">2</ID><ID t="x">3</ID></R>"#;
        let doc = decode_document(xml).unwrap();
        let r = match_step(&doc, &step("R"))[0];
        let texts: Vec<_> = match_step(r, &filtered("ID", "t", "x"))
            .iter()
            .filter_map(|n| n.text())
            .collect();
        assert_eq!(texts, ["1", "3"]);
    }
}
