//! Transmogrify - convert structured data documents between JSON, TOML and YAML.
//!
//! The crate is a thin layer over the format libraries: it picks a converter
//! for each side of a conversion, loads the input into a shared
//! [`Document`](document::Document) tree and dumps that tree again. The main
//! features include:
//!
//! - Format inference from file extensions (`.json`, `.toml`, `.yaml`, `.yml`)
//! - `-` as a stand-in for standard input and output
//! - Atomic replacement of output files
//! - Top-level key lookup
//!
//! # Quick Start
//!
//! ```rust
//! use transmogrify::{converter::Converter, format::Format};
//!
//! let document = Format::Json.converter().parse(r#"{"hello": "world"}"#)?;
//! let toml = Format::Toml.converter().render(&document)?;
//!
//! assert_eq!(toml, "hello = \"world\"\n");
//! # Ok::<(), transmogrify::TransmogrifyError>(())
//! ```

/// Command-line interface.
pub mod cli;

/// Format-specific load and dump implementations.
pub mod converter;

/// Core error types and result aliases.
pub mod core;

/// The in-memory document tree.
pub mod document;

/// Format identifiers and extension inference.
pub mod format;

/// Standard stream and file stream references.
pub mod stream;

/// Logging setup for the binary.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{Result, TransmogrifyError};
