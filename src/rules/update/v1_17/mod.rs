mod detectors;
mod patterns;
mod walkers;

use serde_json::Value;
use tracing::{debug, info};

use crate::json::JsonExt;
use crate::output::{Location, Output};
use crate::pack::Datapack;
use crate::rules::Rule;

use self::walkers::WALKERS;

/// Oldest pack format that this rule knows how to upgrade from
const MIN_FORMAT: i64 = 6;
/// Pack format of Minecraft 1.17
const TARGET_FORMAT: i64 = 7;

/// Finds things that need to change when updating a 1.16 datapack to 1.17
pub struct Update1_17;

impl Rule for Update1_17 {
	fn name(&self) -> &'static str {
		"update_1_17"
	}

	fn title(&self) -> &'static str {
		"Data packs made in 1.16 should work in 1.17."
	}

	fn description(&self) -> &'static str {
		"This rule will report issues and suggestions to help updating 1.16 data packs for 1.17."
	}

	fn good_examples(&self) -> &'static [&'static str] {
		&["summon marker ~ ~ ~ {...}"]
	}

	fn bad_examples(&self) -> &'static [&'static str] {
		&["summon armor_stand ~ ~ ~ {Marker:1b,...}"]
	}

	fn run(&self, pack: &Datapack, config: Option<&Value>, output: &mut dyn Output) -> anyhow::Result<()> {
		// There are no options for this rule
		let _ = config;

		let Some(format) = check_format(pack, output) else {
			debug!("Pack has no format, skipping");
			return Ok(());
		};

		let mut count = 0;
		for walker in WALKERS {
			count += walker.walk(pack, output);
		}
		info!(format, findings = count, "Checked pack for 1.17");

		Ok(())
	}
}

/// Reports problems with the format of the pack. Returns None if the pack
/// does not say what format it is
fn check_format(pack: &Datapack, output: &mut dyn Output) -> Option<i64> {
	let format = pack.meta.try_as_object("pack")?.try_as_int("pack_format")?;

	if format < MIN_FORMAT {
		output.error(
			Location::Pack,
			format!("This rule does not support data pack format {format}. Consider updating it to be compatible with format {MIN_FORMAT} first."),
		);
	} else if format > TARGET_FORMAT {
		output.error(
			Location::Pack,
			format!("The specified data pack is made for a newer format ({format}) and should not be used with this rule."),
		);
	}
	if format != TARGET_FORMAT {
		output.error(
			Location::Pack,
			format!("The data pack format must be set to {TARGET_FORMAT} in order to be compatible with Minecraft 1.17."),
		);
	}

	Some(format)
}
