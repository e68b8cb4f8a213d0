use crate::error::{RebrandError, Result};
use crate::profile::Profile;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of the rename step for a single file.
#[derive(Debug)]
pub struct RenameOutcome {
	/// Path the rewrite step should continue under.
	pub path: PathBuf,

	/// New file name, set when a rename was performed (or planned, in
	/// dry-run mode).
	pub new_name: Option<String>,
}

/// Compute the file name a path would carry under the given profile.
///
/// Replaces every occurrence of the opposite profile's short token with the
/// active profile's token. Case-sensitive, single pass, not iterative.
pub fn rebranded_file_name(file_name: &str, profile: Profile) -> String {
	file_name.replace(profile.opposite().token(), profile.token())
}

/// Rename a file when its name contains the opposite profile's token.
///
/// Keeps the original path when the name carries no token or when a file
/// already exists at the computed target (collisions are skipped, not
/// errors). Returns the effective path for further processing. In dry-run
/// mode the planned name is reported but the file is left in place.
pub fn rename_for_profile(path: &Path, profile: Profile, dry_run: bool) -> Result<RenameOutcome> {
	let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
		return Ok(RenameOutcome {
			path: path.to_path_buf(),
			new_name: None,
		});
	};

	let new_name = rebranded_file_name(name, profile);
	if new_name == name {
		return Ok(RenameOutcome {
			path: path.to_path_buf(),
			new_name: None,
		});
	}

	let target = path.with_file_name(&new_name);
	if target.exists() {
		// Never overwrite an existing file; content is still processed
		// under the original name.
		return Ok(RenameOutcome {
			path: path.to_path_buf(),
			new_name: None,
		});
	}

	if dry_run {
		return Ok(RenameOutcome {
			path: path.to_path_buf(),
			new_name: Some(new_name),
		});
	}

	fs::rename(path, &target).map_err(|source| RebrandError::RenameError {
		from: path.to_path_buf(),
		to: target.clone(),
		source,
	})?;

	Ok(RenameOutcome {
		path: target,
		new_name: Some(new_name),
	})
}
