//! A named namespace of key/value pairs plus its comments
//!
//! Sections own their pairs and comment lines outright; a
//! [`Config`](crate::Config) owns its sections. Pair storage is an
//! `IndexMap`, so iteration (and therefore serialization) follows
//! insertion order.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::coerce::Coerce;

/// One section of a configuration: a name, an ordered list of comment
/// lines, and an ordered map of key/value pairs.
///
/// Keys are stored verbatim at this layer. [`Config`](crate::Config)
/// lower-cases both section names and keys before delegating here, which
/// is what makes lookup case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    name: String,
    comments: Vec<String>,
    pairs: IndexMap<String, String>,
}

impl Section {
    /// Create an empty section with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comments: Vec::new(),
            pairs: IndexMap::new(),
        }
    }

    /// The section's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Store `value` under `key`, overwriting any existing entry.
    ///
    /// The value is stringified through its `Display` impl; a key maps to
    /// exactly one string value.
    pub fn set<V: fmt::Display>(&mut self, key: impl Into<String>, value: V) {
        self.pairs.insert(key.into(), value.to_string());
    }

    /// The stored string for `key`, or `default` if absent.
    pub fn get<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.pairs.get(key).map(String::as_str).unwrap_or(default)
    }

    /// Coerce the stored string for `key` into `T`, or return `default`
    /// when the key is absent or the value does not parse.
    pub fn get_as<T: Coerce>(&self, key: &str, default: T) -> T {
        self.pairs
            .get(key)
            .and_then(|v| T::coerce(v))
            .unwrap_or(default)
    }

    pub fn get_i8(&self, key: &str, default: i8) -> i8 {
        self.get_as(key, default)
    }

    pub fn get_i16(&self, key: &str, default: i16) -> i16 {
        self.get_as(key, default)
    }

    pub fn get_i32(&self, key: &str, default: i32) -> i32 {
        self.get_as(key, default)
    }

    pub fn get_i64(&self, key: &str, default: i64) -> i64 {
        self.get_as(key, default)
    }

    pub fn get_u8(&self, key: &str, default: u8) -> u8 {
        self.get_as(key, default)
    }

    pub fn get_u16(&self, key: &str, default: u16) -> u16 {
        self.get_as(key, default)
    }

    pub fn get_u32(&self, key: &str, default: u32) -> u32 {
        self.get_as(key, default)
    }

    pub fn get_u64(&self, key: &str, default: u64) -> u64 {
        self.get_as(key, default)
    }

    pub fn get_f32(&self, key: &str, default: f32) -> f32 {
        self.get_as(key, default)
    }

    pub fn get_f64(&self, key: &str, default: f64) -> f64 {
        self.get_as(key, default)
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get_as(key, default)
    }

    /// Append comment text to this section.
    ///
    /// Text containing embedded newlines is split into independent
    /// comment lines; order is insertion order.
    pub fn add_comment(&mut self, text: &str) {
        for line in text.split('\n') {
            self.comments.push(line.to_string());
        }
    }

    /// The accumulated comment lines, in insertion order.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Iterate over key/value pairs in insertion order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of pairs in the section.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True if the section holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Renders the section's header token, e.g. `[graphics]`.
///
/// Only used during serialization; the default section is written without
/// a header.
impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)
    }
}
