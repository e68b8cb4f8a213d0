use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use rebrand_cli::filter::IgnoreFilter;
use rebrand_cli::profile::Profile;
use rebrand_cli::rewrite::{rename_for_profile, rewrite_file};
use rebrand_cli::walk::candidate_files;

#[derive(Parser)]
#[command(name = "rebrand")]
#[command(
	author,
	version,
	about = "Renames files and rewrites text tokens to rebrand a project tree"
)]
struct Cli {
	/// Naming profile to convert the project tree to
	#[arg(value_enum, value_name = "PROFILE")]
	profile: Profile,

	/// Project root to process (defaults to the parent of the executable's directory)
	#[arg(long, value_name = "DIR")]
	root: Option<PathBuf>,

	/// Report what would change without touching any files
	#[arg(long)]
	dry_run: bool,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	let root = match cli.root {
		Some(root) => root,
		None => default_project_root()?,
	};

	handle_convert(&root, cli.profile, cli.dry_run)
}

/// Resolve the default project root: the parent of the directory containing
/// the running executable. The tool is expected to live in a subdirectory of
/// the project it rebrands.
fn default_project_root() -> Result<PathBuf> {
	let exe = std::env::current_exe().context("Failed to locate the running executable")?;
	let tool_dir = exe
		.parent()
		.ok_or_else(|| anyhow::anyhow!("Executable has no containing directory"))?;
	let root = tool_dir.parent().ok_or_else(|| {
		anyhow::anyhow!("Executable directory has no parent to use as project root")
	})?;
	Ok(root.to_path_buf())
}

fn handle_convert(root: &Path, profile: Profile, dry_run: bool) -> Result<ExitCode> {
	let filter = IgnoreFilter::load(root).context("Failed to load ignore patterns")?;
	let files = candidate_files(root, &filter).context("Failed to walk project tree")?;

	for path in files {
		let outcome = rename_for_profile(&path, profile, dry_run)
			.with_context(|| format!("Failed to rename {}", path.display()))?;

		if let Some(ref new_name) = outcome.new_name {
			if dry_run {
				println!("Would rename: {} -> {}", path.display(), new_name);
			} else {
				println!("Renamed: {} -> {}", path.display(), new_name);
			}
		}

		let changed = rewrite_file(&outcome.path, profile, dry_run)
			.with_context(|| format!("Failed to rewrite {}", outcome.path.display()))?;

		if changed {
			if dry_run {
				println!("Would rewrite: {}", outcome.path.display());
			} else {
				println!("Rewrote: {}", outcome.path.display());
			}
		}
	}

	Ok(ExitCode::SUCCESS)
}
