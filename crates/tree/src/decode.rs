//! Event-driven decoding of raw XML response bodies into the tree model.
//!
//! Element tag names are reduced to their local part (`wd:Company` becomes
//! `Company`) because the path language addresses local names. Attribute
//! names keep their prefix verbatim (`wd:type` stays `wd:type`) because
//! attribute filters match on the prefixed name, mirroring how the
//! responses spell them.

use crate::error::TreeError;
use crate::node::{Element, TreeNode};
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};

/// Decodes one XML document into a tree rooted at a synthetic document
/// node, so the root element's own tag is addressable as a child key like
/// every other tag.
pub fn decode_document(xml: &str) -> Result<TreeNode, TreeError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    // One frame per open element: (tag, element under construction,
    // accumulated text). The bottom frame is the synthetic document node.
    let mut stack: Vec<Frame> = vec![Frame::document()];

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                stack.push(Frame::open(&e)?);
            }
            Event::Empty(e) => {
                let frame = Frame::open(&e)?;
                let (tag, node) = frame.close();
                append_child(&mut stack, tag, node)?;
            }
            Event::Text(e) => {
                let raw = std::str::from_utf8(e.as_ref())?;
                let text = unescape(raw)?;
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&text);
                }
            }
            Event::CData(e) => {
                let raw = std::str::from_utf8(e.as_ref())?;
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(raw);
                }
            }
            Event::End(_) => {
                let frame = stack.pop().ok_or(TreeError::UnexpectedEof)?;
                let (tag, node) = frame.close();
                append_child(&mut stack, tag, node)?;
            }
            Event::Eof => break,
            // Declarations, comments and processing instructions carry no data.
            _ => (),
        }
        buf.clear();
    }

    let document = stack.pop().ok_or(TreeError::UnexpectedEof)?;
    if !stack.is_empty() {
        return Err(TreeError::UnexpectedEof);
    }
    Ok(TreeNode::Element(document.element))
}

struct Frame {
    tag: String,
    element: Element,
    text: String,
}

impl Frame {
    fn document() -> Self {
        Frame {
            tag: String::new(),
            element: Element::new(),
            text: String::new(),
        }
    }

    fn open(e: &BytesStart<'_>) -> Result<Self, TreeError> {
        let tag = std::str::from_utf8(e.local_name().as_ref())?.to_string();
        let mut element = Element::new();
        for attr in e.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())?;
            if key == "xmlns" || key.starts_with("xmlns:") {
                // Namespace declarations are wiring, not data.
                continue;
            }
            let value = unescape(std::str::from_utf8(&attr.value)?)?.into_owned();
            element.set_attribute(key.to_string(), value);
        }
        Ok(Frame {
            tag,
            element,
            text: String::new(),
        })
    }

    /// Finishes the frame into a node. Text-only content with no attributes
    /// collapses to a scalar; an empty element stays a (textless) element so
    /// that text selection on it yields nothing rather than an empty string.
    fn close(self) -> (String, TreeNode) {
        let Frame {
            tag,
            mut element,
            text,
        } = self;
        let text = text.trim();
        if element.attributes().is_empty() && element.children().is_empty() {
            if text.is_empty() {
                return (tag, TreeNode::Element(element));
            }
            return (tag, TreeNode::Scalar(text.to_string()));
        }
        if !text.is_empty() {
            element.set_text(text.to_string());
        }
        (tag, TreeNode::Element(element))
    }
}

fn append_child(stack: &mut [Frame], tag: String, node: TreeNode) -> Result<(), TreeError> {
    let parent = stack.last_mut().ok_or(TreeError::UnexpectedEof)?;
    parent.element.push_child(tag, node);
    Ok(())
}
