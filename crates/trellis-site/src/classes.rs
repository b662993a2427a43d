//! Class list building.

use indexmap::IndexMap;
use smallvec::SmallVec;

/// An operand for [`class_names`].
#[derive(Debug, Clone, PartialEq)]
pub enum ClassValue {
    /// A literal class string (may hold several space-separated names).
    Str(String),
    /// A numeric class (rendered with its natural formatting).
    Num(f64),
    /// A nested list of operands, flattened in order.
    List(Vec<ClassValue>),
    /// Class names toggled by a flag; only enabled names are kept.
    Toggles(IndexMap<String, bool>),
}

impl From<&str> for ClassValue {
    fn from(v: &str) -> Self {
        ClassValue::Str(v.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(v: String) -> Self {
        ClassValue::Str(v)
    }
}

impl From<f64> for ClassValue {
    fn from(v: f64) -> Self {
        ClassValue::Num(v)
    }
}

impl From<Vec<ClassValue>> for ClassValue {
    fn from(v: Vec<ClassValue>) -> Self {
        ClassValue::List(v)
    }
}

/// Build a space-joined class string from a list of operands.
///
/// Empty strings and disabled toggles are skipped; everything else is
/// kept in input order.
pub fn class_names(values: &[ClassValue]) -> String {
    let mut parts: SmallVec<[String; 8]> = SmallVec::new();
    for value in values {
        collect(value, &mut parts);
    }
    parts.join(" ")
}

fn collect(value: &ClassValue, parts: &mut SmallVec<[String; 8]>) {
    match value {
        ClassValue::Str(s) => {
            if !s.is_empty() {
                parts.push(s.clone());
            }
        }
        ClassValue::Num(n) => parts.push(n.to_string()),
        ClassValue::List(values) => {
            for value in values {
                collect(value, parts);
            }
        }
        ClassValue::Toggles(toggles) => {
            for (name, enabled) in toggles {
                if *enabled && !name.is_empty() {
                    parts.push(name.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_strings_in_order() {
        let classes = class_names(&["btn".into(), "btn-primary".into()]);
        assert_eq!(classes, "btn btn-primary");
    }

    #[test]
    fn test_skips_empty_strings() {
        let classes = class_names(&["a".into(), "".into(), "b".into()]);
        assert_eq!(classes, "a b");
    }

    #[test]
    fn test_toggles_keep_only_enabled_names() {
        let toggles = IndexMap::from([
            ("active".to_string(), true),
            ("hidden".to_string(), false),
            ("focus".to_string(), true),
        ]);
        let classes = class_names(&["base".into(), ClassValue::Toggles(toggles)]);
        assert_eq!(classes, "base active focus");
    }

    #[test]
    fn test_nested_lists_are_flattened() {
        let nested = ClassValue::from(vec!["x".into(), vec!["y".into(), "z".into()].into()]);
        assert_eq!(class_names(&["a".into(), nested]), "a x y z");
    }

    #[test]
    fn test_numbers_use_natural_formatting() {
        assert_eq!(class_names(&[ClassValue::Num(3.0)]), "3");
        assert_eq!(class_names(&[ClassValue::Num(1.5)]), "1.5");
    }

    #[test]
    fn test_empty_input_yields_empty_string() {
        assert_eq!(class_names(&[]), "");
    }
}
