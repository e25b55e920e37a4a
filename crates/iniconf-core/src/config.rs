//! Main Config type for iniconf
//!
//! A `Config` owns a mapping from lower-cased section name to
//! [`Section`]. All access goes through `(section, key)` pairs that are
//! case-folded before lookup, and every read takes a caller-supplied
//! default: a missing section, a missing key, and an unparseable value
//! are all answered the same way, with the default. File I/O is the only
//! operation that returns an error.

use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::coerce::Coerce;
use crate::error::{Error, Result};
use crate::parser;
use crate::section::Section;

/// Name of the implicit default section.
///
/// Pairs and comments that precede any `[section]` header land here. The
/// default section always exists after a load and is written first on
/// save, without a header line.
pub const DEFAULT_SECTION: &str = "_";

/// An INI-style configuration: named sections of key/value pairs with
/// comment preservation.
///
/// # Example
///
/// ```rust
/// use iniconf_core::Config;
///
/// let mut config = Config::parse("[graphics]\nwidth = 320\nheight = 240\n");
/// assert_eq!(config.get_i64("graphics", "width", 0), 320);
///
/// config.set("Graphics", "Width", 640);
/// assert_eq!(config.get_i64("graphics", "width", 0), 640);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    sections: IndexMap<String, Section>,
}

impl Config {
    /// Create an empty configuration with no sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration text in the sectioned INI format.
    ///
    /// Parsing is permissive and never fails: malformed lines are
    /// skipped, and the default section is created eagerly so it exists
    /// even for empty input.
    pub fn parse(text: &str) -> Self {
        parser::parse(text)
    }

    /// Load a configuration from a file.
    ///
    /// The file is read in one bulk operation; I/O failure is the only
    /// error this can return.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        let config = Self::parse(&text);
        log::trace!(
            "loaded {} sections from {}",
            config.sections.len(),
            path.display()
        );
        Ok(config)
    }

    /// Write the configuration to a file in one bulk operation.
    ///
    /// Output is deterministic: the default section first, then the
    /// remaining sections in creation order. Saving an unchanged config
    /// twice produces byte-identical files.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string()).map_err(|e| Error::write(path, e))
    }

    /// Store `value` under `(section, key)`, creating the section if
    /// needed.
    ///
    /// Both `section` and `key` are lower-cased, which makes subsequent
    /// lookup case-insensitive. The value is stringified through its
    /// `Display` impl; re-setting overwrites.
    pub fn set<V: fmt::Display>(&mut self, section: &str, key: &str, value: V) {
        self.section_mut(section).set(key.to_lowercase(), value);
    }

    /// The stored string for `(section, key)`, or `default` when either
    /// is absent.
    pub fn get<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        match self.section(section) {
            Some(s) => s.get(&key.to_lowercase(), default),
            None => default,
        }
    }

    /// Coerce the stored string for `(section, key)` into `T`, returning
    /// `default` when the section or key is absent or the value does not
    /// parse.
    pub fn get_as<T: Coerce>(&self, section: &str, key: &str, default: T) -> T {
        match self.section(section) {
            Some(s) => s.get_as(&key.to_lowercase(), default),
            None => default,
        }
    }

    pub fn get_i8(&self, section: &str, key: &str, default: i8) -> i8 {
        self.get_as(section, key, default)
    }

    pub fn get_i16(&self, section: &str, key: &str, default: i16) -> i16 {
        self.get_as(section, key, default)
    }

    pub fn get_i32(&self, section: &str, key: &str, default: i32) -> i32 {
        self.get_as(section, key, default)
    }

    pub fn get_i64(&self, section: &str, key: &str, default: i64) -> i64 {
        self.get_as(section, key, default)
    }

    pub fn get_u8(&self, section: &str, key: &str, default: u8) -> u8 {
        self.get_as(section, key, default)
    }

    pub fn get_u16(&self, section: &str, key: &str, default: u16) -> u16 {
        self.get_as(section, key, default)
    }

    pub fn get_u32(&self, section: &str, key: &str, default: u32) -> u32 {
        self.get_as(section, key, default)
    }

    pub fn get_u64(&self, section: &str, key: &str, default: u64) -> u64 {
        self.get_as(section, key, default)
    }

    pub fn get_f32(&self, section: &str, key: &str, default: f32) -> f32 {
        self.get_as(section, key, default)
    }

    pub fn get_f64(&self, section: &str, key: &str, default: f64) -> f64 {
        self.get_as(section, key, default)
    }

    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.get_as(section, key, default)
    }

    /// Discard all sections, leaving an empty configuration.
    pub fn clear(&mut self) {
        self.sections = IndexMap::new();
    }

    /// Look up a section by name (case-insensitive).
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(&name.to_lowercase())
    }

    /// Mutable access to a section, creating it if absent.
    pub fn section_mut(&mut self, name: &str) -> &mut Section {
        let name = name.to_lowercase();
        self.sections
            .entry(name.clone())
            .or_insert_with(|| Section::new(name))
    }

    /// Iterate over sections in creation order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Number of sections, the default section included.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True if the configuration holds no sections at all.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Export the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Renders the on-disk text format.
///
/// The default section comes first: its comments prefixed with `; `,
/// then its pairs, no header line. Every other section follows in
/// creation order as a `[name]` header, a blank line, comments, pairs,
/// and a trailing blank line separating it from the next section.
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(default) = self.sections.get(DEFAULT_SECTION) {
            if !default.comments().is_empty() || !default.is_empty() {
                for comment in default.comments() {
                    writeln!(f, "; {}", comment)?;
                }
                for (key, value) in default.pairs() {
                    writeln!(f, "{} = {}", key, value)?;
                }
                writeln!(f)?;
            }
        }

        for section in self.sections.values() {
            if section.name() == DEFAULT_SECTION {
                continue;
            }
            writeln!(f, "{}", section)?;
            writeln!(f)?;
            for comment in section.comments() {
                writeln!(f, "; {}", comment)?;
            }
            for (key, value) in section.pairs() {
                writeln!(f, "{} = {}", key, value)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
