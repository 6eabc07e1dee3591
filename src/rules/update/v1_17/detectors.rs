//! Checks that look at a single command, a single piece of text, or a single
//! JSON value. None of them know which resource they are looking at; the
//! walkers attach that.
//!
//! Textual checks run patterns over raw text, so they find fields at any
//! depth but can only point at the whole resource. Structural checks walk the
//! JSON tree and point at the exact node they are about.

use serde_json::Value;

use crate::json::JsonExt;
use crate::pack::Command;

use super::patterns::{
	AREA_EFFECT_CLOUD, MARKER_ARMOR_STAND, MIN_CLOUD_ARGS, NEW_PLAY_TIME_STAT,
	OLD_PLAY_TIME_STAT, RENAMED_COMMANDS, RENAMED_IDENTIFIERS, RENAMED_STATISTIC,
	STRING_BLOCK_FIELD, STRING_ITEM_FIELD, VISUALLY_EMPTY_CLOUD,
};

pub type CommandDetector = fn(&Command) -> Vec<Issue>;
pub type TextDetector = fn(&str) -> Vec<Issue>;
/// Takes the value to check and the JSON pointer to it
pub type StructuralDetector = fn(&Value, &str) -> Vec<Issue>;

/// A problem found by a detector, before it is tied to a resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
	pub message: String,
	/// Node that the issue is about, if the detector knows it
	pub pointer: Option<String>,
}

impl Issue {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			pointer: None,
		}
	}

	pub fn at(pointer: &str, message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			pointer: Some(pointer.to_string()),
		}
	}
}

/// Fields that every dimension type needs since 1.17
const REQUIRED_DIMENSION_FIELDS: [&str; 2] = ["min_y", "height"];

pub fn check_entity_simplification(cmd: &Command) -> Vec<Issue> {
	let raw = cmd.raw.as_str();
	if MARKER_ARMOR_STAND.is_match(raw) {
		return vec![Issue::new(
			"Armor stands with Marker:1b can be replaced by the marker entity, which is not ticked.",
		)];
	}

	let empty_cloud = VISUALLY_EMPTY_CLOUD.is_match(raw)
		|| (AREA_EFFECT_CLOUD.is_match(raw) && cmd.args.len() < MIN_CLOUD_ARGS);
	if empty_cloud {
		return vec![Issue::new(
			"Area effect clouds without any effects or particles can be replaced by the marker entity, which is not ticked.",
		)];
	}

	Vec::new()
}

pub fn check_renamed_command(cmd: &Command) -> Vec<Issue> {
	let Some(key) = &cmd.key else {
		return Vec::new();
	};
	RENAMED_COMMANDS
		.iter()
		.filter(|(old, _)| *old == key.as_str())
		.map(|(old, new)| {
			Issue::new(format!(
				"The command /{old} has been removed. Use /{new} instead."
			))
		})
		.collect()
}

pub fn check_renamed_statistic(cmd: &Command) -> Vec<Issue> {
	let adds_objective = cmd.key.as_deref() == Some("scoreboard")
		&& cmd.args.first().is_some_and(|x| x == "objectives")
		&& cmd.args.get(1).is_some_and(|x| x == "add");
	if adds_objective && RENAMED_STATISTIC.is_match(&cmd.raw) {
		vec![Issue::new(format!(
			"The statistic {OLD_PLAY_TIME_STAT} has been renamed to {NEW_PLAY_TIME_STAT}."
		))]
	} else {
		Vec::new()
	}
}

/// Works on command text, serialized JSON, or a single tag entry
pub fn check_renamed_identifiers(text: &str) -> Vec<Issue> {
	RENAMED_IDENTIFIERS
		.iter()
		.filter(|id| id.pattern.is_match(text))
		.map(|id| {
			Issue::new(format!(
				"The id {} has been renamed to {}.",
				id.old, id.new
			))
		})
		.collect()
}

pub fn check_condition_fields(text: &str) -> Vec<Issue> {
	let mut out = Vec::new();
	if STRING_BLOCK_FIELD.is_match(text) {
		out.push(Issue::new(
			"The \"block\" field of block predicates has been replaced by the \"blocks\" list.",
		));
	}
	if STRING_ITEM_FIELD.is_match(text) {
		out.push(Issue::new(
			"The \"item\" field of item predicates has been replaced by the \"items\" list.",
		));
	}
	out
}

pub fn check_dimension_type(value: &Value, pointer: &str) -> Vec<Issue> {
	// Not something this check can judge
	if !value.is_object() {
		return Vec::new();
	}

	REQUIRED_DIMENSION_FIELDS
		.iter()
		.filter(|field| value.try_as_int(field).is_none())
		.map(|field| {
			Issue::at(
				pointer,
				format!("Dimension types must have the integer property \"{field}\"."),
			)
		})
		.collect()
}
