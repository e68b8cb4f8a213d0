//! Path filtering for rebrand.
//!
//! This module handles:
//! - Loading the ignore-pattern file from the project root
//! - The fixed external-directory exclusion
//! - The skip predicate applied during traversal

pub mod matcher;

pub use matcher::{EXTERNAL_DIR, IGNORE_FILE, IgnoreFilter};
