//! Value formatting for failure messages

use crate::config;
use crate::value::Value;

const NULL: &str = "null";
const ELEMENTS_EXCEEDED: &str = "...";
const INDENTATION_AFTER_NEWLINE: &str = "    ";

/// Representation of a value in assertion and introspection messages
///
/// Strings are quoted, collections longer than
/// [`config::max_elements_for_printing`] show their first and last elements
/// around `...`, and a collection whose single-line form is longer than
/// [`config::max_length_for_single_line_description`] is printed one element
/// per line.
pub fn to_string_of(value: &Value) -> String {
    match value {
        Value::Null => NULL.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::UInt(u) => u.to_string(),
        Value::Float(f) => format!("{:?}", f),
        Value::Char(c) => format!("'{}'", c),
        Value::Str(s) => format!("\"{}\"", s),
        Value::Optional(Some(inner)) => format!("Some({})", to_string_of(inner)),
        Value::Optional(None) => "None".to_string(),
        Value::List(items) => {
            let elements: Vec<String> = items.iter().map(to_string_of).collect();
            collection(&elements, "[", "]")
        }
        Value::Map(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(key, value)| format!("{}={}", key, to_string_of(value)))
                .collect();
            collection(&entries, "{", "}")
        }
        Value::Object(object) => format!("{:?}", object),
    }
}

fn collection(elements: &[String], start: &str, end: &str) -> String {
    let shown = elided(elements);
    let single_line = format!("{}{}{}", start, shown.join(", "), end);
    if shown.len() <= 1 || single_line.chars().count() <= config::max_length_for_single_line_description() {
        return single_line;
    }
    let separator = format!(",\n{}", INDENTATION_AFTER_NEWLINE);
    format!("{}{}{}", start, shown.join(&separator), end)
}

/// First and last elements around `...` once over the printing limit; odd limits show one more first element
fn elided(elements: &[String]) -> Vec<String> {
    let max = config::max_elements_for_printing();
    if elements.len() <= max {
        return elements.to_vec();
    }
    let first = max.div_ceil(2);
    let last = max / 2;
    let mut shown = Vec::with_capacity(max + 1);
    shown.extend_from_slice(&elements[..first]);
    shown.push(ELEMENTS_EXCEEDED.to_string());
    shown.extend_from_slice(&elements[elements.len() - last..]);
    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn test_scalars() {
        assert_eq!(to_string_of(&Value::Null), "null");
        assert_eq!(to_string_of(&Value::from("Yoda")), "\"Yoda\"");
        assert_eq!(to_string_of(&Value::from('x')), "'x'");
        assert_eq!(to_string_of(&Value::from(1.5)), "1.5");
        assert_eq!(to_string_of(&Value::from(Some(3))), "Some(3)");
        assert_eq!(to_string_of(&Value::Optional(None)), "None");
    }

    #[test]
    fn test_short_collections_on_one_line() {
        assert_eq!(to_string_of(&Value::from(vec![1, 2, 3])), "[1, 2, 3]");
        let mut map = IndexMap::new();
        map.insert("side".to_string(), Value::from("dark"));
        map.insert("rank".to_string(), Value::from(1));
        assert_eq!(to_string_of(&Value::Map(map)), "{side=\"dark\", rank=1}");
    }

    #[test]
    fn test_long_collection_one_element_per_line() {
        let names: Vec<String> = (0..8).map(|i| format!("a rather long element number {}", i)).collect();
        let rendered = to_string_of(&Value::from(names));
        assert!(rendered.starts_with("[\"a rather long element number 0\",\n    \"a rather"));
        assert_eq!(rendered.lines().count(), 8);
    }

    #[test]
    fn test_elided_keeps_first_and_last() {
        let elements: Vec<String> = (0..2000).map(|i| i.to_string()).collect();
        let shown = elided(&elements);
        assert_eq!(shown.len(), 1001);
        assert_eq!(shown[499], "499");
        assert_eq!(shown[500], "...");
        assert_eq!(shown[501], "1500");
        assert_eq!(shown[1000], "1999");
    }
}
