//! Naming profiles for rebrand.
//!
//! This module handles:
//! - The two rebranding targets and their short tokens
//! - The ordered literal replacement table carried by each profile

use clap::ValueEnum;

/// A single literal replacement rule.
///
/// Rules are applied as whole-content substring scans in declaration order;
/// later rules see the output of earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement {
	/// Literal text to search for.
	pub from: &'static str,

	/// Literal text to substitute.
	pub to: &'static str,
}

/// A rebranding target.
///
/// Each profile carries a fixed, ordered replacement table; converting a tree
/// means substituting the opposite profile's tokens everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Profile {
	/// Curlin graphics engine naming.
	Cgx,

	/// Senior game engine naming.
	Sge,
}

/// Table for converting a tree to cgx naming.
const TO_CGX: &[Replacement] = &[
	Replacement { from: "sge", to: "cgx" },
	Replacement { from: "SGE", to: "CGX" },
	Replacement {
		from: "senior game engine",
		to: "curlin graphics engine",
	},
	Replacement {
		from: "Copyright © 2024 Jacob Curlin, Connor Cotturone, Chip Bevil, William Osborne",
		to: "Copyright © 2024 Jacob Curlin",
	},
];

/// Table for converting a tree to sge naming.
///
/// Not an exact inverse of the cgx table: the copyright rules differ in
/// attribution scope.
const TO_SGE: &[Replacement] = &[
	Replacement { from: "cgx", to: "sge" },
	Replacement { from: "CGX", to: "SGE" },
	Replacement {
		from: "curlin graphics engine",
		to: "senior game engine",
	},
	Replacement {
		from: "Copyright © 2024 Jacob Curlin",
		to: "Copyright © 2024 Jacob Curlin, Connor Cotturone, Chip Bevil, William Osborne",
	},
];

impl Profile {
	/// The lowercase short token used in file names and content.
	pub fn token(self) -> &'static str {
		match self {
			Profile::Cgx => "cgx",
			Profile::Sge => "sge",
		}
	}

	/// The profile whose tokens this profile replaces.
	pub fn opposite(self) -> Profile {
		match self {
			Profile::Cgx => Profile::Sge,
			Profile::Sge => Profile::Cgx,
		}
	}

	/// The ordered replacement table applied to file content.
	pub fn replacements(self) -> &'static [Replacement] {
		match self {
			Profile::Cgx => TO_CGX,
			Profile::Sge => TO_SGE,
		}
	}
}
