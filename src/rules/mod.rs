pub mod update;

use serde_json::Value;

use crate::output::Output;
use crate::pack::Datapack;

use self::update::Update1_17;

/// A check that runs over a whole datapack
pub trait Rule {
	/// Short name used to select the rule
	fn name(&self) -> &'static str;

	fn title(&self) -> &'static str;

	fn description(&self) -> &'static str;

	/// Commands or snippets that follow the rule
	fn good_examples(&self) -> &'static [&'static str];

	/// Commands or snippets that break the rule
	fn bad_examples(&self) -> &'static [&'static str];

	/// Checks the pack and reports to the output. Problems with the pack are
	/// always reported as findings. An error here means that the rule itself
	/// could not run
	fn run(&self, pack: &Datapack, config: Option<&Value>, output: &mut dyn Output) -> anyhow::Result<()>;
}

/// Gets every rule, in the order that they run
pub fn get_rules() -> Vec<Box<dyn Rule>> {
	vec![Box::new(Update1_17)]
}

pub fn get_rule(name: &str) -> Option<Box<dyn Rule>> {
	get_rules().into_iter().find(|x| x.name() == name)
}
