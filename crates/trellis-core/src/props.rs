//! Prop values and event handlers for element nodes.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

/// Ordered prop map for an element. Keys are unique; insertion order is
/// preserved so merge precedence stays observable.
pub type Props = IndexMap<String, PropValue>;

/// Inline style declarations (property name to value).
pub type StyleMap = IndexMap<String, String>;

/// A prop value attached to an element.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    String(String),
    Number(f64),
    Bool(bool),
    Style(StyleMap),
    Handler(Handler),
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        PropValue::String(v.to_string())
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        PropValue::String(v)
    }
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        PropValue::Number(v)
    }
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        PropValue::Bool(v)
    }
}

impl From<Handler> for PropValue {
    fn from(v: Handler) -> Self {
        PropValue::Handler(v)
    }
}

/// Payload passed to event handlers when the host dispatches an event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Event {
    /// Event name as dispatched (e.g. "click").
    pub name: String,
    /// Optional host-supplied detail string.
    pub detail: Option<String>,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: None,
        }
    }
}

/// A shared event callback.
///
/// Handlers are process-local callables supplied by the host; they compare
/// by identity, not by behavior.
#[derive(Clone)]
pub struct Handler(Rc<dyn Fn(&Event)>);

impl Handler {
    pub fn new(f: impl Fn(&Event) + 'static) -> Self {
        Handler(Rc::new(f))
    }

    /// Invoke the handler with an event payload.
    pub fn call(&self, event: &Event) {
        (self.0)(event);
    }

    /// Build a handler that runs `first` then `second` with the same event.
    pub fn chain(first: Handler, second: Handler) -> Handler {
        Handler::new(move |event| {
            first.call(event);
            second.call(event);
        })
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}
