//! tscheck - Qt Linguist translation catalog checker
//!
//! tscheck is a CLI tool and library for keeping Qt Linguist `.ts`
//! translation catalogs healthy. It detects entries missing from replica
//! locales, untranslated and unfinished text, placeholder and markup
//! mismatches, and leftover vanished entries.
//!
//! ## Module Structure
//!
//! - `catalog`: TS catalog data model, reader/writer, discovery, lookup
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `context`: Shared check context (config plus loaded catalogs)
//! - `issues`: Issue type definitions and reporting
//! - `markup`: Inline markup well-formedness checks
//! - `mcp`: Model Context Protocol server implementation
//! - `placeholder`: %N placeholder extraction
//! - `rules`: Detection rules for catalog issues
//! - `utils`: Shared utility functions

pub mod catalog;
pub mod cli;
pub mod config;
pub mod context;
pub mod issues;
pub mod markup;
pub mod mcp;
pub mod placeholder;
pub mod rules;
pub mod utils;
