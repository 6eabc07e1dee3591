use tracing::debug;

use crate::json::{join_pointer, JsonExt};
use crate::output::{Finding, Location, Output, ResourceRef};
use crate::pack::{Datapack, JsonResource, ResourceKind};

use super::detectors::{
	check_condition_fields, check_dimension_type, check_entity_simplification,
	check_renamed_command, check_renamed_identifiers, check_renamed_statistic, CommandDetector,
	Issue, StructuralDetector, TextDetector,
};

/// Which detectors run on one kind of resource
pub struct KindWalker {
	pub kind: ResourceKind,
	pub source: Source,
}

pub enum Source {
	/// Detectors run on every command of the flattened function. Text
	/// detectors only see the part of an execute before its `run`, since the
	/// rest is checked as the next command
	Functions {
		commands: &'static [CommandDetector],
		text: &'static [TextDetector],
	},
	Json {
		structural: &'static [StructuralCheck],
		textual: &'static [TextDetector],
	},
	/// Detectors run on each tag entry on its own
	TagEntries { textual: &'static [TextDetector] },
}

pub struct StructuralCheck {
	/// Key of an embedded object to check instead of the root. When the key
	/// holds anything but an object, the check is skipped
	pub node: Option<&'static str>,
	pub detector: StructuralDetector,
}

const ID_ONLY: &[TextDetector] = &[check_renamed_identifiers];
const IDS_AND_CONDITIONS: &[TextDetector] = &[check_renamed_identifiers, check_condition_fields];

/// Every walker, in the order they run
pub static WALKERS: &[KindWalker] = &[
	KindWalker {
		kind: ResourceKind::Function,
		source: Source::Functions {
			commands: &[
				check_entity_simplification,
				check_renamed_command,
				check_renamed_statistic,
			],
			text: ID_ONLY,
		},
	},
	KindWalker {
		kind: ResourceKind::DimensionType,
		source: Source::Json {
			structural: &[StructuralCheck {
				node: None,
				detector: check_dimension_type,
			}],
			textual: &[],
		},
	},
	KindWalker {
		kind: ResourceKind::Dimension,
		source: Source::Json {
			structural: &[StructuralCheck {
				node: Some("type"),
				detector: check_dimension_type,
			}],
			textual: ID_ONLY,
		},
	},
	KindWalker {
		kind: ResourceKind::Advancement,
		source: Source::Json {
			structural: &[],
			textual: IDS_AND_CONDITIONS,
		},
	},
	KindWalker {
		kind: ResourceKind::Predicate,
		source: Source::Json {
			structural: &[],
			textual: IDS_AND_CONDITIONS,
		},
	},
	KindWalker {
		kind: ResourceKind::LootTable,
		source: Source::Json {
			structural: &[],
			textual: IDS_AND_CONDITIONS,
		},
	},
	KindWalker {
		kind: ResourceKind::Recipe,
		source: Source::Json {
			structural: &[],
			textual: ID_ONLY,
		},
	},
	KindWalker {
		kind: ResourceKind::ItemModifier,
		source: Source::Json {
			structural: &[],
			textual: ID_ONLY,
		},
	},
	KindWalker {
		kind: ResourceKind::BlockTag,
		source: Source::TagEntries { textual: ID_ONLY },
	},
	KindWalker {
		kind: ResourceKind::ItemTag,
		source: Source::TagEntries { textual: ID_ONLY },
	},
	KindWalker {
		kind: ResourceKind::ConfiguredFeature,
		source: Source::Json {
			structural: &[],
			textual: ID_ONLY,
		},
	},
	KindWalker {
		kind: ResourceKind::SurfaceBuilder,
		source: Source::Json {
			structural: &[],
			textual: ID_ONLY,
		},
	},
	KindWalker {
		kind: ResourceKind::ProcessorList,
		source: Source::Json {
			structural: &[],
			textual: ID_ONLY,
		},
	},
];

impl KindWalker {
	/// Runs the detectors on every resource of this kind in the pack.
	/// Returns how many findings were reported
	pub fn walk(&self, pack: &Datapack, output: &mut dyn Output) -> usize {
		let mut count = 0;
		let mut report = |finding: Finding| {
			count += 1;
			output.report(finding);
		};

		for ns in &pack.namespaces {
			match &self.source {
				Source::Functions { commands, text } => {
					for func in &ns.functions {
						let resource = ResourceRef::new(self.kind, func.id.clone());
						for cmd in func.flat().filter(|x| x.is_command()) {
							let issues = commands
								.iter()
								.flat_map(|detector| detector(cmd))
								.chain(text.iter().flat_map(|detector| detector(cmd.own_text())));
							for issue in issues {
								report(command_finding(&resource, cmd.line, &cmd.raw, issue));
							}
						}
					}
				}
				Source::Json {
					structural,
					textual,
				} => {
					for json in ns.json(self.kind) {
						let resource = ResourceRef::new(self.kind, json.id.clone());
						for issue in run_structural(json, structural) {
							report(json_finding(&resource, issue));
						}
						let issues = textual.iter().flat_map(|detector| detector(&json.raw));
						for issue in issues {
							report(json_finding(&resource, issue));
						}
					}
				}
				Source::TagEntries { textual } => {
					for tag in ns.tags(self.kind) {
						let resource = ResourceRef::new(self.kind, tag.id().clone());
						for entry in &tag.entries {
							let issues = textual.iter().flat_map(|detector| detector(entry));
							for issue in issues {
								report(
									Finding::error(Location::Resource(resource.clone()), issue.message)
										.with_value(entry.clone()),
								);
							}
						}
					}
				}
			}
		}

		debug!(kind = %self.kind, findings = count, "Walked resources");
		count
	}
}

fn run_structural(json: &JsonResource, checks: &[StructuralCheck]) -> Vec<Issue> {
	let mut out = Vec::new();
	for check in checks {
		match check.node {
			None => out.extend((check.detector)(&json.content, "")),
			Some(key) => {
				// A dimension may name its type by id instead of embedding it
				if let Some(node) = json.content.try_as_object(key) {
					out.extend((check.detector)(node, &join_pointer("", key)));
				}
			}
		}
	}
	out
}

fn command_finding(resource: &ResourceRef, line: usize, raw: &str, issue: Issue) -> Finding {
	let location = Location::Command {
		resource: resource.clone(),
		line,
		raw: raw.to_string(),
	};
	Finding::error(location, issue.message)
}

fn json_finding(resource: &ResourceRef, issue: Issue) -> Finding {
	let location = match issue.pointer {
		Some(pointer) => Location::JsonNode {
			resource: resource.clone(),
			pointer,
		},
		None => Location::Resource(resource.clone()),
	};
	Finding::error(location, issue.message)
}
