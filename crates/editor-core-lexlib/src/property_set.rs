//! Lexer configuration properties.

use serde::Deserialize;
use std::collections::BTreeMap;

/// String-keyed properties such as `fold` or `fold.compact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PropertySet {
    values: BTreeMap<String, String>,
}

impl PropertySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, returning whether the stored value changed.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        match self.values.get(key) {
            Some(existing) if existing == value => false,
            _ => {
                self.values.insert(key.to_string(), value.to_string());
                true
            }
        }
    }

    /// Raw value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Integer value of `key`, or `default` when the key is unset or empty.
    ///
    /// Parsing follows `atoi`: leading whitespace and an optional sign are accepted, parsing stops
    /// at the first non-digit, and text without digits reads as 0.
    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        match self.get(key) {
            Some(value) if !value.is_empty() => parse_leading_int(value),
            _ => default,
        }
    }

    /// Iterate over all properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no properties are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

pub(crate) fn parse_leading_int(value: &str) -> i32 {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            (acc * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1)
        });
    let value = if negative { -magnitude } else { magnitude };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_reports_changes() {
        let mut props = PropertySet::new();
        assert!(props.set("fold", "1"));
        assert!(!props.set("fold", "1"));
        assert!(props.set("fold", "0"));
        assert_eq!(props.get("fold"), Some("0"));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn test_get_int() {
        let mut props = PropertySet::new();
        props.set("a", " 42xyz");
        props.set("b", "-7");
        props.set("c", "");
        props.set("d", "on");
        assert_eq!(props.get_int("a", 0), 42);
        assert_eq!(props.get_int("b", 0), -7);
        assert_eq!(props.get_int("c", 5), 5);
        assert_eq!(props.get_int("d", 5), 0);
        assert_eq!(props.get_int("missing", 3), 3);
    }

    #[test]
    fn test_deserialize_from_yaml_map() {
        let props: PropertySet = serde_yaml::from_str("fold: '1'\nfold.compact: '0'\n").unwrap();
        assert_eq!(props.get_int("fold", 0), 1);
        assert_eq!(props.get_int("fold.compact", 1), 0);
    }
}
