use std::path::PathBuf;

/// Library-level structured errors for rebrand.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum RebrandError {
	#[error("Failed to load ignore file: {path}")]
	IgnoreLoadError {
		path: PathBuf,
		#[source]
		source: ignore::Error,
	},

	#[error("Failed to walk project tree")]
	WalkError {
		#[source]
		source: walkdir::Error,
	},

	#[error("Failed to read file: {path}")]
	FileReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("File is not valid UTF-8: {path}")]
	DecodeError { path: PathBuf },

	#[error("Failed to write file: {path}")]
	FileWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to rename {from} to {to}")]
	RenameError {
		from: PathBuf,
		to: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using RebrandError.
pub type Result<T> = std::result::Result<T, RebrandError>;
