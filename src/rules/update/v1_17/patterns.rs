use std::sync::LazyLock;

use regex::Regex;

/// Fewer arguments than this means that an area effect cloud was
/// summoned without any data, so it can't have any visuals
pub const MIN_CLOUD_ARGS: usize = 5;

/// Armor stands that are only used as markers
pub static MARKER_ARMOR_STAND: LazyLock<Regex> = LazyLock::new(|| {
	compile(r"^summon\s+(?:minecraft:)?armor_stand(?:\s+\S+){3}\s+\{.*\bMarker\s*:\s*(?i:1b|true)\b")
});

pub static AREA_EFFECT_CLOUD: LazyLock<Regex> =
	LazyLock::new(|| compile(r"^summon\s+(?:minecraft:)?area_effect_cloud\b"));

pub static VISUALLY_EMPTY_CLOUD: LazyLock<VisuallyEmptyCloud> =
	LazyLock::new(VisuallyEmptyCloud::new);

/// Matches an area effect cloud summon where nothing after the coordinates
/// gives the cloud any visuals
pub struct VisuallyEmptyCloud {
	spawn: Regex,
	visual: Regex,
}

impl VisuallyEmptyCloud {
	fn new() -> Self {
		Self {
			spawn: compile(r"^summon\s+(?:minecraft:)?area_effect_cloud(?:\s+\S+){3}\s+(?P<rest>.*)$"),
			visual: compile(r"\b(?:Effects|Potion|Particle)\b"),
		}
	}

	pub fn is_match(&self, text: &str) -> bool {
		self.spawn
			.captures(text)
			.and_then(|x| x.name("rest"))
			.is_some_and(|rest| !self.visual.is_match(rest.as_str()))
	}
}

/// Block predicate field that is now a list called `blocks`
pub static STRING_BLOCK_FIELD: LazyLock<Regex> =
	LazyLock::new(|| compile(r#""block"\s*:\s*""#));

/// Item predicate field that is now a list called `items`
pub static STRING_ITEM_FIELD: LazyLock<Regex> = LazyLock::new(|| compile(r#""item"\s*:\s*""#));

pub const OLD_PLAY_TIME_STAT: &str = "minecraft.custom:minecraft.play_one_minute";
pub const NEW_PLAY_TIME_STAT: &str = "minecraft.custom:minecraft.play_time";

pub static RENAMED_STATISTIC: LazyLock<Regex> =
	LazyLock::new(|| compile(r"\bminecraft\.custom:(?:minecraft\.)?play_one_minute\b"));

/// Commands that were removed, along with what replaces them
pub const RENAMED_COMMANDS: [(&str, &str); 1] = [("replaceitem", "item replace")];

/// Ids that were renamed, as (old, new)
const RENAMED_IDENTIFIER_TABLE: [(&str, &str); 1] = [("grass_path", "dirt_path")];

pub struct RenamedIdentifier {
	pub old: &'static str,
	pub new: &'static str,
	pub pattern: Regex,
}

pub static RENAMED_IDENTIFIERS: LazyLock<Vec<RenamedIdentifier>> = LazyLock::new(|| {
	RENAMED_IDENTIFIER_TABLE
		.iter()
		.map(|&(old, new)| RenamedIdentifier {
			old,
			new,
			pattern: compile(&format!(r"\b{}\b", regex::escape(old))),
		})
		.collect()
});

fn compile(pattern: &str) -> Regex {
	Regex::new(pattern).expect("Built-in pattern should be valid")
}
