pub mod json;
pub mod output;
pub mod pack;
pub mod rules;
pub mod settings;

use anyhow::{bail, Context};
use tracing::info;

use crate::output::Output;
use crate::pack::Datapack;
use crate::rules::{get_rule, get_rules};
use crate::settings::CheckSettings;

/// Runs every selected rule over the pack
pub fn check_pack(
	pack: &Datapack,
	settings: &CheckSettings,
	output: &mut dyn Output,
) -> anyhow::Result<()> {
	for name in &settings.rules {
		if get_rule(name).is_none() {
			bail!("Unknown rule {name}");
		}
	}

	for rule in get_rules() {
		if !settings.is_enabled(rule.name()) {
			continue;
		}
		info!(rule = rule.name(), "Running rule");
		rule.run(pack, settings.rule_config(), output)
			.with_context(|| format!("Failed to run rule {}", rule.name()))?;
	}

	Ok(())
}
