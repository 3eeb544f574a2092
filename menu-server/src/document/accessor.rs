//! Typed attribute and child-element access on document nodes

use std::str::FromStr;

use roxmltree::Node;
use rust_decimal::Decimal;
use shared::models::parse_flag;

use super::{DocumentError, DocumentResult};

/// Optional text attribute, stored exactly as exported. Absent attribute is
/// `None`.
///
/// Only ids are trimmed (see [`required_attr`]), since they key rows and
/// links across positions in the document.
pub fn text_attr(node: Node<'_, '_>, name: &str) -> Option<String> {
    node.attribute(name).map(str::to_string)
}

/// Required identifier attribute, trimmed. Absent or blank is malformed.
pub fn required_attr(node: Node<'_, '_>, name: &str) -> DocumentResult<String> {
    match node.attribute(name).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(DocumentError::malformed(
            node,
            format!("missing required attribute `{name}`"),
        )),
    }
}

/// Raw value of a typed attribute; blank counts as absent.
fn typed_raw<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

pub fn flag_attr(node: Node<'_, '_>, name: &str) -> DocumentResult<Option<bool>> {
    let Some(raw) = typed_raw(node, name) else {
        return Ok(None);
    };
    parse_flag(raw).map(Some).ok_or_else(|| {
        DocumentError::malformed(node, format!("attribute `{name}` is not a boolean: {raw:?}"))
    })
}

pub fn int_attr(node: Node<'_, '_>, name: &str) -> DocumentResult<Option<i32>> {
    let Some(raw) = typed_raw(node, name) else {
        return Ok(None);
    };
    raw.parse::<i32>().map(Some).map_err(|_| {
        DocumentError::malformed(node, format!("attribute `{name}` is not an integer: {raw:?}"))
    })
}

pub fn decimal_attr(node: Node<'_, '_>, name: &str) -> DocumentResult<Option<Decimal>> {
    let Some(raw) = typed_raw(node, name) else {
        return Ok(None);
    };
    Decimal::from_str(raw).map(Some).map_err(|_| {
        DocumentError::malformed(node, format!("attribute `{name}` is not a decimal: {raw:?}"))
    })
}

/// First element child with the given tag.
pub fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.has_tag_name(tag))
}

pub fn required_child<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &str,
) -> DocumentResult<Node<'a, 'input>> {
    child(node, tag).ok_or_else(|| {
        DocumentError::malformed(node, format!("missing required element <{tag}>"))
    })
}

/// All element children with the given tag, in document order.
pub fn children<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Vec<Node<'a, 'input>> {
    node.children()
        .filter(|n| n.is_element() && n.has_tag_name(tag))
        .collect()
}

/// Items of an optional wrapper element, e.g. `<modifiers><optiongroup/>..`.
///
/// An absent wrapper and an empty wrapper both yield no items.
pub fn section<'a, 'input>(
    node: Node<'a, 'input>,
    wrapper: &str,
    item: &str,
) -> Vec<Node<'a, 'input>> {
    child(node, wrapper)
        .map(|w| children(w, item))
        .unwrap_or_default()
}

/// The required `pricing/price` value of a product or option.
pub fn price(node: Node<'_, '_>) -> DocumentResult<Decimal> {
    let pricing = required_child(node, "pricing")?;
    let price = required_child(pricing, "price")?;
    let raw = price.text().map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(DocumentError::malformed(price, "empty price"));
    }
    Decimal::from_str(raw)
        .map_err(|_| DocumentError::malformed(price, format!("price is not a decimal: {raw:?}")))
}

/// Human-readable location of a node, e.g.
/// `menu/categories/category[C1]/products/product[P1]`.
pub fn node_path(node: Node<'_, '_>) -> String {
    let mut segments: Vec<String> = node
        .ancestors()
        .filter(|n| n.is_element())
        .map(|n| {
            let tag = n.tag_name().name();
            match n.attribute("id").or_else(|| n.attribute("chainid")) {
                Some(id) => format!("{tag}[{id}]"),
                None => tag.to_string(),
            }
        })
        .collect();
    segments.reverse();
    // Root element name varies between exports
    if segments.len() > 1 {
        segments.remove(0);
    }
    segments.join("/")
}
