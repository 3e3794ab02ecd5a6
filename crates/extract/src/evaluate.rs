//! Evaluating one parsed field path against one located record.

use crate::matcher::match_step;
use log::trace;
use xmltab_fieldpath::{FieldPath, Selection};
use xmltab_tree::TreeNode;

/// Walks `path` from `record` and returns the selected scalar, or `None`
/// when the data is not there.
///
/// An empty candidate list at any step short-circuits to `None`; missing
/// intermediate data is not an error. More than one candidate at a step
/// resolves to the first in document order, a documented tie-break logged
/// at trace level only. At the terminal node, text selection reads the
/// node's own text (a container with no direct text yields `None`) and
/// attribute selection reads the named attribute off the node's attribute
/// map.
pub fn evaluate_field<'a>(record: &'a TreeNode, path: &FieldPath) -> Option<&'a str> {
    let mut node = record;
    for step in path.steps() {
        let candidates = match_step(node, step);
        if candidates.len() > 1 {
            trace!(
                "step '{}' matched {} nodes for column '{}'; taking the first",
                step.tag,
                candidates.len(),
                path.output_name()
            );
        }
        node = *candidates.first()?;
    }
    match path.selection() {
        Selection::Text => node.text(),
        Selection::Attribute(name) => node.attribute(name),
    }
}
