//! The parsed, immutable representation of a field path expression.

/// How the value is read off the terminal node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The terminal node's own text content.
    Text,
    /// A named attribute of the terminal node.
    Attribute(String),
}

/// An attribute-equality filter on one step, like `[@wd:type='Tax_ID_Type']`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrFilter {
    pub name: String,
    pub value: String,
}

/// A single tag-name hop in a field path, optionally attribute-filtered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub tag: String,
    pub filter: Option<AttrFilter>,
}

/// A parsed field path: the steps to walk from a record, the terminal
/// selection, and the resolved output column name.
///
/// A `FieldPath` never mutates after parsing; evaluation is a pure function
/// of (record, path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    steps: Vec<Step>,
    selection: Selection,
    output_name: String,
}

impl FieldPath {
    pub(crate) fn new(steps: Vec<Step>, selection: Selection, output_name: String) -> Self {
        Self {
            steps,
            selection,
            output_name,
        }
    }

    /// The steps to walk, in order. Empty for the bare `@@attr` form, which
    /// reads the attribute off the record itself.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The resolved output column name: the `^^` rename when present,
    /// otherwise the terminal step's tag name (or the attribute name for
    /// attribute selections).
    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    /// The terminal step, if the path walks any.
    pub fn terminal(&self) -> Option<&Step> {
        self.steps.last()
    }
}
