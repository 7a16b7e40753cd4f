//! Rule implementations for tscheck.
//!
//! This module contains pure functions that check for various catalog issues.
//! Each function takes only the specific inputs it needs (not a full Context)
//! and returns a specific issue type.
//!
//! ## Module Structure
//!
//! - `helpers`: Shared helpers (entry contexts, catalog ordering)
//! - `missing`: Entries absent from replica catalogs
//! - `orphan`: Entries in replica catalogs but not in the primary
//! - `untranslated`: Finished translations identical to their source
//! - `placeholders`: `%N` placeholder set mismatches
//! - `markup`: Malformed rich-text markup in translations
//! - `unfinished`: Draft and empty translations
//! - `vanished`: Entries marked vanished or obsolete
//! - `duplicate`: Repeated `(context, source)` pairs in one file

pub mod duplicate;
pub mod helpers;
pub mod markup;
pub mod missing;
pub mod orphan;
pub mod placeholders;
pub mod unfinished;
pub mod untranslated;
pub mod vanished;

// Re-export shared helpers for convenient access
pub use helpers::{entry_context, replica_catalogs, sorted_catalogs};
