use std::fmt::Write;

use crate::pack::get_resource_path;

use super::{Finding, Location};

/// Formats a finding for display in a terminal
pub fn format_finding(finding: &Finding) -> String {
	let mut out = format!("{}: {}", finding.severity, finding.message);
	let Some(resource) = finding.location.resource() else {
		return out;
	};

	// Ids always have a colon, but fall back to the id if one somehow doesn't
	let path = get_resource_path(&resource.id, resource.kind)
		.map(|x| format!("data/{x}"))
		.unwrap_or_else(|_| resource.id.to_string());
	let _ = match &finding.location {
		Location::Pack => Ok(()),
		Location::Resource(..) => write!(out, "\n  --> {path} ({resource})"),
		Location::JsonNode { pointer, .. } => {
			let pointer = if pointer.is_empty() { "/" } else { pointer.as_str() };
			write!(out, "\n  --> {path} ({resource}) at {pointer}")
		}
		Location::Command { line, raw, .. } => {
			write!(out, "\n  --> {path}:{line} ({resource})\n   | {raw}")
		}
	};
	if let Some(value) = &finding.value {
		let _ = write!(out, "\n   = entry: {value}");
	}

	out
}

/// Formats the line that is printed after every finding
pub fn format_summary(errors: usize, warnings: usize) -> String {
	let plural = |n: usize| if n == 1 { "" } else { "s" };
	format!(
		"{errors} error{}, {warnings} warning{}",
		plural(errors),
		plural(warnings)
	)
}

#[cfg(test)]
mod tests {
	use crate::output::ResourceRef;
	use crate::pack::ResourceKind;

	use super::*;

	#[test]
	fn test_command_finding() {
		let finding = Finding::error(
			Location::Command {
				resource: ResourceRef::new(ResourceKind::Function, "game:gen/main".into()),
				line: 3,
				raw: "replaceitem block ~ ~ ~ slot.container.0 stone".into(),
			},
			"Renamed command",
		);
		assert_eq!(
			format_finding(&finding),
			"error: Renamed command\n  --> data/game/functions/gen/main.mcfunction:3 (function game:gen/main)\n   | replaceitem block ~ ~ ~ slot.container.0 stone"
		);
	}

	#[test]
	fn test_pack_and_json_findings() {
		let finding = Finding::error(Location::Pack, "Bad format");
		assert_eq!(format_finding(&finding), "error: Bad format");

		let finding = Finding::error(
			Location::JsonNode {
				resource: ResourceRef::new(ResourceKind::Dimension, "game:sky".into()),
				pointer: "/type".into(),
			},
			"Missing height",
		);
		assert_eq!(
			format_finding(&finding),
			"error: Missing height\n  --> data/game/dimension/sky.json (dimension game:sky) at /type"
		);
	}

	#[test]
	fn test_summary() {
		assert_eq!(format_summary(1, 0), "1 error, 0 warnings");
		assert_eq!(format_summary(2, 1), "2 errors, 1 warning");
	}
}
