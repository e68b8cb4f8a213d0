use crate::error::{RebrandError, Result};
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::{Path, PathBuf};

/// Name of the subdirectory that is always excluded from processing.
pub const EXTERNAL_DIR: &str = "external";

/// Name of the ignore-pattern file loaded from the project root.
pub const IGNORE_FILE: &str = ".gitignore";

/// Predicate deciding which paths the walker must skip.
#[derive(Debug)]
pub struct IgnoreFilter {
	/// Root of the always-excluded external directory.
	external_dir: PathBuf,

	/// Compiled ignore patterns, present only if an ignore file was found.
	patterns: Option<Gitignore>,
}

impl IgnoreFilter {
	/// Load the filter for a project root.
	///
	/// Reads `<root>/.gitignore` if it exists. A missing ignore file means
	/// nothing beyond the external-directory rule is excluded.
	pub fn load(root: &Path) -> Result<Self> {
		let ignore_path = root.join(IGNORE_FILE);

		let patterns = if ignore_path.exists() {
			let mut builder = GitignoreBuilder::new(root);
			if let Some(source) = builder.add(&ignore_path) {
				return Err(RebrandError::IgnoreLoadError {
					path: ignore_path,
					source,
				});
			}
			let compiled = builder
				.build()
				.map_err(|source| RebrandError::IgnoreLoadError {
					path: ignore_path,
					source,
				})?;
			Some(compiled)
		} else {
			None
		};

		Ok(IgnoreFilter {
			external_dir: root.join(EXTERNAL_DIR),
			patterns,
		})
	}

	/// Check whether a file path must be skipped.
	///
	/// Paths under the external directory are always ignored, regardless of
	/// the pattern file. Everything else is matched against the compiled
	/// patterns (including patterns on any parent directory).
	pub fn is_ignored(&self, path: &Path) -> bool {
		if path.starts_with(&self.external_dir) {
			return true;
		}

		match &self.patterns {
			Some(patterns) => patterns
				.matched_path_or_any_parents(path, false)
				.is_ignore(),
			None => false,
		}
	}
}
