use serde_json::Value;

/// Settings for a single check of a pack
#[derive(Debug, Clone, Default)]
pub struct CheckSettings {
	/// Names of the rules to run. When empty, every rule runs
	pub(crate) rules: Vec<String>,
	/// Configuration that is handed to every rule
	pub(crate) rule_config: Option<Value>,
}

impl CheckSettings {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_enabled(&self, rule: &str) -> bool {
		self.rules.is_empty() || self.rules.iter().any(|x| x == rule)
	}

	pub fn rule_config(&self) -> Option<&Value> {
		self.rule_config.as_ref()
	}
}

pub struct CheckSettingsBuilder {
	settings: CheckSettings,
}

impl CheckSettingsBuilder {
	pub fn new() -> Self {
		Self {
			settings: CheckSettings::new(),
		}
	}

	pub fn build(self) -> CheckSettings {
		self.settings
	}

	/// Only run this rule, along with any others selected the same way
	pub fn rule(mut self, name: &str) -> Self {
		self.settings.rules.push(name.to_string());
		self
	}

	pub fn rule_config(mut self, config: Value) -> Self {
		self.settings.rule_config = Some(config);
		self
	}
}

impl Default for CheckSettingsBuilder {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn test_rule_selection() {
		let all = CheckSettingsBuilder::new().build();
		assert!(all.is_enabled("update_1_17"));

		let some = CheckSettingsBuilder::new().rule("other").build();
		assert!(!some.is_enabled("update_1_17"));
		assert!(some.is_enabled("other"));
	}

	#[test]
	fn test_rule_config() {
		let settings = CheckSettingsBuilder::new().rule_config(json!({"a": 1})).build();
		assert_eq!(settings.rule_config(), Some(&json!({"a": 1})));
	}
}
