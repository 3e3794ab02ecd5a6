//! A `nom`-based parser for the field path expression language.

use crate::ast::{AttrFilter, FieldPath, Selection, Step};
use crate::error::PathError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::char,
    combinator::{map, opt},
    multi::separated_list1,
    sequence::{delimited, pair, preceded, separated_pair},
};

// --- Main Public Parser ---

/// Parses one field spec string into an immutable [`FieldPath`].
///
/// Whitespace surrounding the whole spec is trimmed first; whitespace
/// inside the spec is not permitted. Same input, same structurally equal
/// result, every call.
pub fn parse_field_path(input: &str) -> Result<FieldPath, PathError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PathError::Malformed(
            input.to_string(),
            "empty field path".to_string(),
        ));
    }
    match field_spec(trimmed) {
        Ok(("", path)) => Ok(path),
        Ok((rem, _)) => Err(PathError::Malformed(
            input.to_string(),
            format!("unexpected trailing input: '{}'", rem),
        )),
        Err(e) => Err(PathError::Malformed(input.to_string(), e.to_string())),
    }
}

// --- Name and Step Parsers ---

/// Tag, attribute and column names share one alphabet: XML name characters
/// including a namespace prefix separator, with all delimiter characters
/// and whitespace excluded.
fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || c == '.' || c == ':'
}

fn name(input: &str) -> IResult<&str, &str> {
    take_while1(is_name_char).parse(input)
}

fn quoted_value(input: &str) -> IResult<&str, &str> {
    delimited(char('\''), take_while(|c| c != '\''), char('\'')).parse(input)
}

fn attr_filter(input: &str) -> IResult<&str, AttrFilter> {
    map(
        delimited(
            tag("[@"),
            separated_pair(name, char('='), quoted_value),
            char(']'),
        ),
        |(attr, value): (&str, &str)| AttrFilter {
            name: attr.to_string(),
            value: value.to_string(),
        },
    )
    .parse(input)
}

fn step(input: &str) -> IResult<&str, Step> {
    map(pair(name, opt(attr_filter)), |(tag_name, filter)| Step {
        tag: tag_name.to_string(),
        filter,
    })
    .parse(input)
}

// --- Selector and Spec Parsers ---

/// `@@attr` as the whole selector: zero steps, the attribute is read off
/// the record itself.
fn bare_attribute_selector(input: &str) -> IResult<&str, (Vec<Step>, Selection)> {
    map(preceded(tag("@@"), name), |attr| {
        (Vec::new(), Selection::Attribute(attr.to_string()))
    })
    .parse(input)
}

/// A `>>`-separated step chain, optionally ending in `>>@@attr` to select
/// an attribute of the node the chain reaches.
fn step_chain_selector(input: &str) -> IResult<&str, (Vec<Step>, Selection)> {
    map(
        pair(
            separated_list1(tag(">>"), step),
            opt(preceded(tag(">>@@"), name)),
        ),
        |(steps, attr)| {
            let selection = match attr {
                Some(a) => Selection::Attribute(a.to_string()),
                None => Selection::Text,
            };
            (steps, selection)
        },
    )
    .parse(input)
}

fn selector(input: &str) -> IResult<&str, (Vec<Step>, Selection)> {
    alt((bare_attribute_selector, step_chain_selector)).parse(input)
}

fn field_spec(input: &str) -> IResult<&str, FieldPath> {
    map(
        pair(selector, opt(preceded(tag("^^"), name))),
        |((steps, selection), rename)| {
            let output_name = match rename {
                Some(n) => n.to_string(),
                None => default_output_name(&steps, &selection),
            };
            FieldPath::new(steps, selection, output_name)
        },
    )
    .parse(input)
}

/// Without a `^^` rename the column takes the terminal step's tag name;
/// attribute selections take the attribute name instead.
fn default_output_name(steps: &[Step], selection: &Selection) -> String {
    match selection {
        Selection::Attribute(attr) => attr.clone(),
        Selection::Text => steps
            .last()
            .map(|s| s.tag.clone())
            .unwrap_or_default(),
    }
}
