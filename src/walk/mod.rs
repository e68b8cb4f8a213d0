//! Project tree traversal for rebrand.
//!
//! This module handles:
//! - Recursive enumeration of files under the project root
//! - The candidate suffix allowlist
//! - Application of the ignore filter

use crate::error::{RebrandError, Result};
use crate::filter::IgnoreFilter;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File-name suffixes eligible for renaming and rewriting.
///
/// `.h.in` is a compound suffix and is matched against the whole file name
/// rather than the final extension.
pub const MATCHED_SUFFIXES: &[&str] = &[".cpp", ".h", ".txt", ".md", ".h.in"];

/// Check whether a file name carries one of the recognized suffixes.
///
/// A name consisting solely of a suffix (e.g. a file literally named `.md`)
/// does not qualify.
pub fn has_matched_suffix(file_name: &str) -> bool {
	MATCHED_SUFFIXES
		.iter()
		.any(|suffix| file_name.len() > suffix.len() && file_name.ends_with(suffix))
}

/// Collect every candidate file under `root`, in filesystem traversal order.
///
/// Applies the suffix allowlist and the ignore filter; non-matching files
/// are never read or renamed. The first walk error (permission denied, path
/// vanished mid-walk) terminates the run.
pub fn candidate_files(root: &Path, filter: &IgnoreFilter) -> Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in WalkDir::new(root) {
		let entry = entry.map_err(|source| RebrandError::WalkError { source })?;
		if !entry.file_type().is_file() {
			continue;
		}

		let path = entry.path();
		let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
			continue;
		};
		if !has_matched_suffix(name) {
			continue;
		}
		if filter.is_ignored(path) {
			continue;
		}

		files.push(path.to_path_buf());
	}

	Ok(files)
}
