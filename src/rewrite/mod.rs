//! File renaming and content rewriting for rebrand.
//!
//! This module handles:
//! - Renaming files whose names carry the opposite profile's token
//! - Ordered literal substitution over file content
//! - Change detection so unchanged files are never written

pub mod content;
pub mod renamer;

pub use content::{apply_replacements, rewrite_file};
pub use renamer::{RenameOutcome, rebranded_file_name, rename_for_profile};
