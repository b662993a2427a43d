//! Link helpers.

use std::sync::OnceLock;

use regex::Regex;

static EXTERNAL_URL: OnceLock<Regex> = OnceLock::new();

/// True when an href points outside the site: a scheme-optional `//`
/// authority followed by either a dotted host or `localhost` with an
/// optional port.
pub fn is_external(href: &str) -> bool {
    let pattern = EXTERNAL_URL.get_or_init(|| {
        Regex::new(r"^(?:\w+:)?//([^\s.]+\.\S{2}|localhost[:?\d]*)\S*$")
            .expect("external URL pattern compiles")
    });
    pattern.is_match(href)
}

/// Presence-style boolean attribute: `Some("")` renders the bare
/// attribute, `None` omits it.
pub fn boolean_attr(condition: bool) -> Option<&'static str> {
    condition.then_some("")
}
