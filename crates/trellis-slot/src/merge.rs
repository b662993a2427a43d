//! Prop merge policy.
//!
//! The target element's own declarations win over forwarded props, with
//! three exceptions that accumulate instead of overwriting:
//! 1. Event handlers compose, inner first then outer
//! 2. Styles merge shallowly, inner entries win per key
//! 3. Class names concatenate, outer before inner

use trellis_core::{Handler, PropValue, Props};

/// Prop name carrying the element's class list.
const CLASS_PROP: &str = "class";

/// Prop name carrying the element's inline style.
const STYLE_PROP: &str = "style";

/// Merge forwarded (outer) props onto the target's own (inner) props.
///
/// The result is the union of both maps, iterating outer insertion order
/// first, then inner-only names.
pub fn merge_props(outer: &Props, inner: &Props) -> Props {
    let mut merged = outer.clone();
    for (name, inner_value) in inner {
        let value = merge_value(name, outer.get(name), inner_value);
        merged.insert(name.clone(), value);
    }
    merged
}

fn merge_value(name: &str, outer: Option<&PropValue>, inner: &PropValue) -> PropValue {
    match (outer, inner) {
        (Some(PropValue::Handler(outer)), PropValue::Handler(inner)) if is_handler_name(name) => {
            // Inner runs first, outer second, same event both times.
            PropValue::Handler(Handler::chain(inner.clone(), outer.clone()))
        }
        (Some(PropValue::Style(outer)), PropValue::Style(inner)) if name == STYLE_PROP => {
            let mut style = outer.clone();
            for (key, value) in inner {
                style.insert(key.clone(), value.clone());
            }
            PropValue::Style(style)
        }
        (Some(PropValue::String(outer)), PropValue::String(inner)) if name == CLASS_PROP => {
            PropValue::String(join_classes(outer, inner))
        }
        _ => inner.clone(),
    }
}

/// Event handler naming convention: "on" followed by a capitalized event
/// name (onClick, onPointerDown, ...).
fn is_handler_name(name: &str) -> bool {
    name.strip_prefix("on")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

/// Space-join two class lists, skipping empty operands.
fn join_classes(outer: &str, inner: &str) -> String {
    match (outer.is_empty(), inner.is_empty()) {
        (true, _) => inner.to_string(),
        (_, true) => outer.to_string(),
        (false, false) => format!("{outer} {inner}"),
    }
}
