//! Flat-map variant: one namespace, list values, no comment retention
//!
//! This model predates the sectioned [`Config`](crate::Config) and is
//! kept as a separate artifact: a single mapping of UPPER-CASED keys to
//! string values, as used by *nix rc-style files. It supports list
//! values, space-separated tokens wrapped in `( … )`, which may span
//! multiple physical lines:
//!
//! ```text
//! DAEMONS=(network crond
//!          hal vboxdrv)
//! ```
//!
//! Comments start at `#` anywhere on a line and are discarded on load;
//! saving a loaded file loses them permanently.

use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::coerce::Coerce;
use crate::error::{Error, Result};

/// A flat key/value configuration with list-value support.
///
/// Keys are upper-cased on every store and lookup; entries keep their
/// insertion order, so saved output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatMap {
    entries: IndexMap<String, String>,
}

impl FlatMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse flat INI text. Parsing is permissive and never fails.
    pub fn parse(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        let mut map = Self::new();

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i].trim();
            if line.is_empty() {
                i += 1;
                continue;
            }

            // A `(` without a matching `)` opens a multi-line list:
            // accumulate physical lines (tabs normalized to spaces,
            // joined with a single space) until one contains `)`.
            let logical = if line.contains('(') && !line.contains(')') {
                let mut parts = vec![line.replace('\t', " ")];
                while i + 1 < lines.len() {
                    i += 1;
                    let cont = lines[i].replace('\t', " ");
                    let closed = cont.contains(')');
                    parts.push(cont.trim().to_string());
                    if closed {
                        break;
                    }
                }
                parts.join(" ")
            } else {
                line.to_string()
            };

            match parse_line(&logical) {
                Some((key, value)) => {
                    map.entries.insert(key, value);
                }
                None => log::debug!("line {}: ignoring unrecognized input", i + 1),
            }
            i += 1;
        }

        map
    }

    /// Load a flat configuration from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        let map = Self::parse(&text);
        log::trace!("loaded {} entries from {}", map.entries.len(), path.display());
        Ok(map)
    }

    /// Write the map to a file, one `KEY = value` line per entry.
    ///
    /// Comments were discarded on load and are not reconstructed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string()).map_err(|e| Error::write(path, e))
    }

    /// Store `value` under the upper-cased `key`, overwriting any
    /// existing entry.
    pub fn set<V: fmt::Display>(&mut self, key: &str, value: V) {
        self.entries.insert(key.to_uppercase(), value.to_string());
    }

    /// The stored string for `key`, or `default` if absent.
    pub fn get<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.entries
            .get(&key.to_uppercase())
            .map(String::as_str)
            .unwrap_or(default)
    }

    /// Coerce the stored string for `key` into `T`, or return `default`
    /// when the key is absent or the value does not parse.
    pub fn get_as<T: Coerce>(&self, key: &str, default: T) -> T {
        self.entries
            .get(&key.to_uppercase())
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

    /// Split the stored value for `key` into an ordered list of tokens.
    ///
    /// Tokens are separated by whitespace; empty tokens are dropped. A
    /// missing key yields an empty list.
    pub fn get_list(&self, key: &str) -> Vec<String> {
        match self.entries.get(&key.to_uppercase()) {
            Some(value) => value.split_whitespace().map(str::to_string).collect(),
            None => Vec::new(),
        }
    }

    /// Iterate over entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Renders the on-disk text format: one `KEY = value` line per entry,
/// insertion order, no sections, no comments.
impl fmt::Display for FlatMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.entries {
            writeln!(f, "{} = {}", key, value)?;
        }
        Ok(())
    }
}

/// Parse one logical line into an upper-cased key and a cleaned value.
///
/// The `#` comment is cut first, then the line splits at the first `=`.
/// Quote characters are removed from the value wherever they appear, and
/// a surrounding `( … )` is stripped.
fn parse_line(line: &str) -> Option<(String, String)> {
    let line = match line.split_once('#') {
        Some((before, _comment)) => before,
        None => line,
    };

    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    let mut value = value.trim().replace('"', "");
    if value.len() > 1 && value.starts_with('(') && value.ends_with(')') {
        value = value[1..value.len() - 1].trim().to_string();
    }

    Some((key.to_uppercase(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keys_are_upper_cased() {
        let mut map = FlatMap::new();
        map.set("hostname", "arch");

        assert_eq!(map.get("HOSTNAME", ""), "arch");
        assert_eq!(map.get("hostname", ""), "arch");
    }

    #[test]
    fn test_parse_single_pairs() {
        let map = FlatMap::parse("HOSTNAME=\"arch\"\nTIMEZONE=Europe/Amsterdam\n");

        assert_eq!(map.get("hostname", ""), "arch");
        assert_eq!(map.get("timezone", ""), "Europe/Amsterdam");
    }

    #[test]
    fn test_hash_comments_are_stripped_anywhere() {
        let map = FlatMap::parse("# full line comment\nKEYMAP=us # inline comment\n");

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("keymap", ""), "us");
    }

    #[test]
    fn test_single_line_list() {
        let map = FlatMap::parse("DAEMONS=(network crond hal vboxdrv)\n");
        assert_eq!(map.get_list("daemons"), ["network", "crond", "hal", "vboxdrv"]);
    }

    #[test]
    fn test_multi_line_list() {
        let map = FlatMap::parse("DAEMONS=(network crond\nhal vboxdrv)\n");
        assert_eq!(map.get_list("daemons"), ["network", "crond", "hal", "vboxdrv"]);
    }

    #[test]
    fn test_multi_line_list_with_tab_indentation() {
        let map = FlatMap::parse("MODULES=(loop\n\tdm_mod\n\tdm_crypt)\nUSELVM=no\n");

        assert_eq!(map.get_list("modules"), ["loop", "dm_mod", "dm_crypt"]);
        assert_eq!(map.get("uselvm", ""), "no");
    }

    #[test]
    fn test_get_list_of_missing_key_is_empty() {
        let map = FlatMap::new();
        assert!(map.get_list("daemons").is_empty());
    }

    #[test]
    fn test_quotes_are_removed_from_values() {
        let map = FlatMap::parse("LOCALE=\"en_US.UTF-8\"\n");
        assert_eq!(map.get("locale", ""), "en_US.UTF-8");
    }

    #[test]
    fn test_line_without_separator_is_discarded() {
        let map = FlatMap::parse("not a pair\nKEY=value\n");

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("key", ""), "value");
    }

    #[test]
    fn test_typed_getters() {
        let map = FlatMap::parse("PORT=8080\nVERBOSE=true\nSCALE=1.5\n");

        assert_eq!(map.get_u16("port", 0), 8080);
        assert!(map.get_bool("verbose", false));
        assert_eq!(map.get_f64("scale", 0.0), 1.5);
        assert_eq!(map.get_i64("missing", -1), -1);
    }

    #[test]
    fn test_display_writes_one_line_per_entry() {
        let mut map = FlatMap::new();
        map.set("hostname", "arch");
        map.set("uselvm", "no");

        assert_eq!(map.to_string(), "HOSTNAME = arch\nUSELVM = no\n");
    }

    #[test]
    fn test_comments_are_lost_on_round_trip() {
        let map = FlatMap::parse("# provenance note\nKEY=value\n");
        let rendered = map.to_string();

        assert!(!rendered.contains("provenance"));
        assert_eq!(FlatMap::parse(&rendered), map);
    }
}
