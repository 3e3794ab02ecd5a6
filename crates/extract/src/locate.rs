//! Locating record-boundary subtrees anywhere in a response document.

use xmltab_tree::TreeNode;

/// Collects every subtree stored under a key equal to `boundary_tag`, at
/// any depth, in document order.
///
/// The walk is iterative with an explicit work stack, so arbitrarily deep
/// documents cannot overflow the call stack. It does not stop at a located
/// record: a boundary tag nested inside another instance of itself is
/// collected at every depth, as a flat list. A document without the tag
/// yields an empty list, which is a normal zero-row outcome and not an
/// error.
pub fn locate_records<'a>(document: &'a TreeNode, boundary_tag: &str) -> Vec<&'a TreeNode> {
    let mut records = Vec::new();
    let mut stack: Vec<(bool, &TreeNode)> = vec![(false, document)];

    while let Some((is_record, node)) = stack.pop() {
        if is_record {
            records.push(node);
        }
        let Some(element) = node.as_element() else {
            continue;
        };
        // Children are pushed in reverse so pops come out in document order.
        for (tag, child) in element.children().iter().rev() {
            let hit = tag == boundary_tag;
            for candidate in child.iter().rev() {
                stack.push((hit, candidate));
            }
        }
    }
    records
}
