//! The decoded document tree that the extraction engine walks.
//!
//! A raw XML response body decodes into a tree of [`TreeNode`]s: text-only
//! leaves become scalars, everything else becomes an element with an
//! ordered child map and an attribute map. Repeated sibling tags collapse
//! under one key as a sequence, which is what makes the query side's
//! uniform singular-vs-repeated handling possible.

pub mod decode;
pub mod error;
mod json;
pub mod node;

// --- Public API ---
pub use decode::decode_document;
pub use error::TreeError;
pub use node::{Child, Element, TreeNode};
