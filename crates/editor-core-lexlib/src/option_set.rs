//! Typed option tables binding property names to fields of a lexer's options struct.

use crate::property_set::parse_leading_int;
use std::collections::BTreeMap;

/// Type of a lexer property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    /// `0` is false, any other integer is true.
    Boolean,
    /// An integer.
    Integer,
    /// Free text.
    String,
}

enum Field<T> {
    Bool(fn(&mut T) -> &mut bool),
    Int(fn(&mut T) -> &mut i32),
    Str(fn(&mut T) -> &mut String),
}

struct OptionDef<T> {
    field: Field<T>,
    value: Option<String>,
    description: &'static str,
}

impl<T> OptionDef<T> {
    fn property_type(&self) -> PropertyType {
        match self.field {
            Field::Bool(_) => PropertyType::Boolean,
            Field::Int(_) => PropertyType::Integer,
            Field::Str(_) => PropertyType::String,
        }
    }

    fn set(&mut self, base: &mut T, val: &str) -> bool {
        self.value = Some(val.to_string());
        match self.field {
            Field::Bool(field) => {
                let option = parse_leading_int(val) != 0;
                std::mem::replace(field(base), option) != option
            }
            Field::Int(field) => {
                let option = parse_leading_int(val);
                std::mem::replace(field(base), option) != option
            }
            Field::Str(field) => {
                let slot = field(base);
                if slot.as_str() != val {
                    *slot = val.to_string();
                    true
                } else {
                    false
                }
            }
        }
    }
}

/// The properties understood by a lexer, each bound to a field of the options struct `T`.
///
/// ```
/// use editor_core_lexlib::OptionSet;
///
/// #[derive(Default)]
/// struct Options {
///     fold: bool,
/// }
///
/// let mut set = OptionSet::new();
/// set.define_bool("fold", |o: &mut Options| &mut o.fold, "Enable folding.");
/// let mut options = Options::default();
/// assert!(set.set(&mut options, "fold", "1"));
/// assert!(!set.set(&mut options, "fold", "2"));
/// assert!(options.fold);
/// ```
pub struct OptionSet<T> {
    options: BTreeMap<&'static str, OptionDef<T>>,
    names: Vec<&'static str>,
    word_lists: Vec<&'static str>,
}

impl<T> Default for OptionSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OptionSet<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            options: BTreeMap::new(),
            names: Vec::new(),
            word_lists: Vec::new(),
        }
    }

    fn define(&mut self, name: &'static str, field: Field<T>, description: &'static str) {
        let def = OptionDef {
            field,
            value: None,
            description,
        };
        if self.options.insert(name, def).is_none() {
            self.names.push(name);
        }
    }

    /// Bind `name` to a boolean field.
    pub fn define_bool(&mut self, name: &'static str, field: fn(&mut T) -> &mut bool, description: &'static str) {
        self.define(name, Field::Bool(field), description);
    }

    /// Bind `name` to an integer field.
    pub fn define_int(&mut self, name: &'static str, field: fn(&mut T) -> &mut i32, description: &'static str) {
        self.define(name, Field::Int(field), description);
    }

    /// Bind `name` to a string field.
    pub fn define_string(&mut self, name: &'static str, field: fn(&mut T) -> &mut String, description: &'static str) {
        self.define(name, Field::Str(field), description);
    }

    /// Names in definition order.
    pub fn property_names(&self) -> &[&'static str] {
        &self.names
    }

    /// Whether `name` is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Type of `name`; unknown names report [`PropertyType::Boolean`].
    pub fn property_type(&self, name: &str) -> PropertyType {
        self.options
            .get(name)
            .map_or(PropertyType::Boolean, OptionDef::property_type)
    }

    /// Description of `name`, empty for unknown names.
    pub fn describe_property(&self, name: &str) -> &'static str {
        self.options.get(name).map_or("", |def| def.description)
    }

    /// Parse `val` into the field bound to `name`, returning whether the field changed.
    /// Unknown names are ignored.
    pub fn set(&mut self, base: &mut T, name: &str, val: &str) -> bool {
        match self.options.get_mut(name) {
            Some(def) => def.set(base, val),
            None => false,
        }
    }

    /// The text last set for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.options.get(name)?.value.as_deref()
    }

    /// Record the descriptions of the lexer's word lists.
    pub fn define_word_list_sets(&mut self, descriptions: &[&'static str]) {
        self.word_lists = descriptions.to_vec();
    }

    /// Word list descriptions in index order.
    pub fn describe_word_list_sets(&self) -> &[&'static str] {
        &self.word_lists
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Options {
        fold: bool,
        tab_width: i32,
        marker: String,
    }

    fn option_set() -> OptionSet<Options> {
        let mut set = OptionSet::new();
        set.define_bool("fold", |o: &mut Options| &mut o.fold, "Fold");
        set.define_int("tab.width", |o: &mut Options| &mut o.tab_width, "Tab width");
        set.define_string("marker", |o: &mut Options| &mut o.marker, "");
        set.define_word_list_sets(&["Keywords", "Types"]);
        set
    }

    #[test]
    fn test_set_reports_field_changes() {
        let mut set = option_set();
        let mut options = Options::default();
        assert!(set.set(&mut options, "fold", "1"));
        assert!(!set.set(&mut options, "fold", "7"));
        assert_eq!(set.get("fold"), Some("7"));
        assert!(set.set(&mut options, "tab.width", "4"));
        assert_eq!(options.tab_width, 4);
        assert!(set.set(&mut options, "marker", "TODO"));
        assert!(!set.set(&mut options, "marker", "TODO"));
        assert!(!set.set(&mut options, "unknown", "1"));
        assert_eq!(set.get("unknown"), None);
    }

    #[test]
    fn test_metadata() {
        let set = option_set();
        assert_eq!(set.property_names(), &["fold", "tab.width", "marker"]);
        assert_eq!(set.property_type("tab.width"), PropertyType::Integer);
        assert_eq!(set.property_type("marker"), PropertyType::String);
        assert_eq!(set.describe_property("fold"), "Fold");
        assert_eq!(set.describe_property("nope"), "");
        assert_eq!(set.describe_word_list_sets(), &["Keywords", "Types"]);
    }
}
