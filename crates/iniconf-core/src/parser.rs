//! Line-oriented parser for the sectioned INI format
//!
//! The parser is deliberately permissive: a line that matches none of
//! the recognized shapes (comment, section header, key/value pair) is
//! skipped, never reported as an error. Best-effort loading of partially
//! malformed files is the contract; I/O is the only failure mode, and it
//! lives in [`Config::load`](crate::Config::load).

use crate::config::{Config, DEFAULT_SECTION};

/// Parse sectioned INI text into a [`Config`].
///
/// Pairs and comments seen before the first `[section]` header land in
/// the default section, which is created eagerly so that it exists even
/// for empty input.
pub(crate) fn parse(text: &str) -> Config {
    let mut config = Config::new();
    config.section_mut(DEFAULT_SECTION);
    let mut current = DEFAULT_SECTION.to_string();

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        // Comment line: strip the marker and leading whitespace.
        if let Some(rest) = line.strip_prefix(';').or_else(|| line.strip_prefix('#')) {
            config.section_mut(&current).add_comment(rest.trim_start());
            continue;
        }

        // Section header: switch the current section, creating it lazily.
        if line.starts_with('[') && line.ends_with(']') {
            let name = line[1..line.len() - 1].trim();
            if name.is_empty() {
                log::debug!("line {}: ignoring empty section header", lineno + 1);
                continue;
            }
            current = name.to_lowercase();
            config.section_mut(&current);
            continue;
        }

        // Key/value pair, split at the first `=`. A `;` in the value
        // starts an inline comment, which is recorded on the current
        // section before the value is truncated.
        if let Some((key, rest)) = line.split_once('=') {
            let mut value = rest;
            if let Some((before, comment)) = rest.split_once(';') {
                config.section_mut(&current).add_comment(comment.trim());
                value = before;
            }

            let key = key.trim();
            if key.is_empty() {
                log::debug!("line {}: discarding pair with empty key", lineno + 1);
                continue;
            }
            config
                .section_mut(&current)
                .set(key.to_lowercase(), value.trim());
            continue;
        }

        log::debug!("line {}: ignoring unrecognized input {:?}", lineno + 1, line);
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_section_exists_even_for_empty_input() {
        let config = parse("");
        assert!(config.section(DEFAULT_SECTION).is_some());
    }

    #[test]
    fn test_pairs_before_any_header_land_in_default_section() {
        let config = parse("mode = quiet\n[net]\nhost = example.org\n");

        assert_eq!(config.get(DEFAULT_SECTION, "mode", ""), "quiet");
        assert_eq!(config.get("net", "host", ""), "example.org");
    }

    #[test]
    fn test_section_names_are_lower_cased() {
        let config = parse("[Graphics]\nWidth = 320\n");
        assert_eq!(config.section("graphics").unwrap().name(), "graphics");
        assert_eq!(config.get_i64("graphics", "width", 0), 320);
    }

    #[test]
    fn test_both_comment_markers_are_recognized() {
        let config = parse("; semicolon comment\n# hash comment\n");

        let comments = config.section(DEFAULT_SECTION).unwrap().comments();
        assert_eq!(comments, ["semicolon comment", "hash comment"]);
    }

    #[test]
    fn test_inline_comment_is_split_off_the_value() {
        let config = parse("[s]\nkey = value ; a comment\n");

        assert_eq!(config.get("s", "key", ""), "value");
        assert_eq!(config.section("s").unwrap().comments(), ["a comment"]);
    }

    #[test]
    fn test_value_may_contain_equals_sign() {
        let config = parse("expr = a=b\n");
        assert_eq!(config.get(DEFAULT_SECTION, "expr", ""), "a=b");
    }

    #[test]
    fn test_empty_key_is_discarded() {
        let config = parse("[s]\n = orphan value\n");
        assert!(config.section("s").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_lines_are_ignored() {
        let config = parse("[s]\nthis line has no separator\nkey = value\n");

        assert_eq!(config.section("s").unwrap().len(), 1);
        assert_eq!(config.get("s", "key", ""), "value");
    }

    #[test]
    fn test_empty_section_header_is_ignored() {
        let config = parse("[]\nkey = value\n");

        // The pair stays in the default section.
        assert_eq!(config.get(DEFAULT_SECTION, "key", ""), "value");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let config = parse("   [net]   \n   host   =   example.org   \n");
        assert_eq!(config.get("net", "host", ""), "example.org");
    }
}
