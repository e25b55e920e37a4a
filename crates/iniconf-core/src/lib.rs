//! iniconf-core: INI-style configuration files with typed accessors
//!
//! This crate parses, queries, mutates, and serializes the INI-style
//! configuration files common on *nix systems. Values are stored as
//! strings and coerced on read; lookups are case-insensitive and never
//! fail, since a missing or unparseable value resolves to the caller's
//! default. Comment lines are preserved across a load/save round-trip.
//!
//! # Example
//!
//! ```rust
//! use iniconf_core::Config;
//!
//! let ini = "\
//! ; display settings
//! [graphics]
//! width = 320
//! height = 240
//! ";
//!
//! let config = Config::parse(ini);
//! assert_eq!(config.get_i64("graphics", "width", 0), 320);
//! assert_eq!(config.get_bool("graphics", "fullscreen", false), false);
//! ```
//!
//! The [`flat`] module holds an earlier, sectionless model of the same
//! format with support for parenthesized list values.

pub mod coerce;
pub mod error;
pub mod flat;

mod config;
mod parser;
mod section;

pub use coerce::Coerce;
pub use config::{Config, DEFAULT_SECTION};
pub use error::{Error, Result};
pub use flat::FlatMap;
pub use section::Section;
