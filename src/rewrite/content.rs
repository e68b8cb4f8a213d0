use crate::error::{RebrandError, Result};
use crate::profile::{Profile, Replacement};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Apply an ordered replacement table to a text.
///
/// Each rule performs a global literal substring replacement (every
/// occurrence, not just the first); later rules see the output of earlier
/// ones.
pub fn apply_replacements(text: &str, rules: &[Replacement]) -> String {
	let mut result = text.to_string();
	for rule in rules {
		result = result.replace(rule.from, rule.to);
	}
	result
}

/// Rewrite a file's content under the given profile.
///
/// Reads the file as UTF-8, applies the profile's replacement table, and
/// writes back in place only if the content changed, so unchanged files keep
/// their modification metadata. Returns whether the content differed. In
/// dry-run mode the comparison runs but nothing is written.
pub fn rewrite_file(path: &Path, profile: Profile, dry_run: bool) -> Result<bool> {
	let content = fs::read_to_string(path).map_err(|source| {
		if source.kind() == ErrorKind::InvalidData {
			RebrandError::DecodeError {
				path: path.to_path_buf(),
			}
		} else {
			RebrandError::FileReadError {
				path: path.to_path_buf(),
				source,
			}
		}
	})?;

	let rewritten = apply_replacements(&content, profile.replacements());
	if rewritten == content {
		return Ok(false);
	}

	if !dry_run {
		fs::write(path, &rewritten).map_err(|source| RebrandError::FileWriteError {
			path: path.to_path_buf(),
			source,
		})?;
	}

	Ok(true)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_apply_replacements_replaces_all_occurrences() {
		let result = apply_replacements("sge and sge and SGE", Profile::Cgx.replacements());
		assert_eq!(result, "cgx and cgx and CGX");
	}

	#[test]
	fn test_apply_replacements_later_rules_see_earlier_output() {
		let rules = [
			Replacement { from: "foo", to: "bar" },
			Replacement { from: "barbaz", to: "done" },
		];
		assert_eq!(apply_replacements("foobaz", &rules), "done");
	}

	#[test]
	fn test_apply_replacements_display_name() {
		let result = apply_replacements(
			"the senior game engine project",
			Profile::Cgx.replacements(),
		);
		assert_eq!(result, "the curlin graphics engine project");
	}

	#[test]
	fn test_apply_replacements_copyright_collapses_and_expands() {
		let long = "Copyright © 2024 Jacob Curlin, Connor Cotturone, Chip Bevil, William Osborne";
		let short = "Copyright © 2024 Jacob Curlin";

		assert_eq!(apply_replacements(long, Profile::Cgx.replacements()), short);
		assert_eq!(apply_replacements(short, Profile::Sge.replacements()), long);
	}

	#[test]
	fn test_rewrite_file_changes_matching_content() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("cgx_window.h");
		fs::write(&path, "// SGE Engine\n").unwrap();

		let changed = rewrite_file(&path, Profile::Cgx, false).unwrap();

		assert!(changed);
		assert_eq!(fs::read_to_string(&path).unwrap(), "// CGX Engine\n");
	}

	#[test]
	fn test_rewrite_file_without_match_reports_unchanged() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("notes.txt");
		fs::write(&path, "nothing to see here\n").unwrap();

		let changed = rewrite_file(&path, Profile::Cgx, false).unwrap();

		assert!(!changed);
		assert_eq!(fs::read_to_string(&path).unwrap(), "nothing to see here\n");
	}

	#[test]
	fn test_rewrite_file_dry_run_does_not_write() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("cgx_window.h");
		fs::write(&path, "// SGE Engine\n").unwrap();

		let changed = rewrite_file(&path, Profile::Cgx, true).unwrap();

		assert!(changed);
		assert_eq!(fs::read_to_string(&path).unwrap(), "// SGE Engine\n");
	}

	#[test]
	fn test_rewrite_file_non_utf8_is_a_decode_error() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("binary.txt");
		fs::write(&path, [0xff, 0xfe, 0x00, 0x42]).unwrap();

		let result = rewrite_file(&path, Profile::Cgx, false);

		assert!(matches!(result, Err(RebrandError::DecodeError { .. })));
	}

	#[test]
	fn test_rewrite_file_missing_file_is_a_read_error() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("vanished.h");

		let result = rewrite_file(&path, Profile::Cgx, false);

		assert!(matches!(result, Err(RebrandError::FileReadError { .. })));
	}
}
