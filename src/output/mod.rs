pub mod text;

use std::fmt::Display;

use serde::Serialize;

use crate::pack::{ResourceKind, ResourceLocation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
	Error,
	Warning,
}

impl Display for Severity {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Error => write!(f, "error"),
			Self::Warning => write!(f, "warning"),
		}
	}
}

/// A single resource of a pack
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRef {
	pub kind: ResourceKind,
	pub id: ResourceLocation,
}

impl ResourceRef {
	pub fn new(kind: ResourceKind, id: ResourceLocation) -> Self {
		Self { kind, id }
	}
}

impl Display for ResourceRef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} {}", self.kind, self.id)
	}
}

/// Where a finding points to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Location {
	/// The pack as a whole
	Pack,
	Resource(ResourceRef),
	/// A node inside of a JSON resource, as a JSON pointer
	JsonNode {
		resource: ResourceRef,
		pointer: String,
	},
	/// A command inside of a function
	Command {
		resource: ResourceRef,
		line: usize,
		raw: String,
	},
}

impl Location {
	pub fn resource(&self) -> Option<&ResourceRef> {
		match self {
			Self::Pack => None,
			Self::Resource(resource)
			| Self::JsonNode { resource, .. }
			| Self::Command { resource, .. } => Some(resource),
		}
	}
}

impl Display for Location {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Pack => write!(f, "pack"),
			Self::Resource(resource) => write!(f, "{resource}"),
			Self::JsonNode { resource, pointer } if pointer.is_empty() => {
				write!(f, "{resource} at (root)")
			}
			Self::JsonNode { resource, pointer } => write!(f, "{resource} at {pointer}"),
			Self::Command { resource, line, .. } => write!(f, "{resource} line {line}"),
		}
	}
}

/// A problem found in a pack
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
	pub severity: Severity,
	pub message: String,
	pub location: Location,
	/// Specific value inside of the resource, such as a tag entry
	#[serde(skip_serializing_if = "Option::is_none")]
	pub value: Option<String>,
}

impl Finding {
	pub fn new(severity: Severity, location: Location, message: impl Into<String>) -> Self {
		Self {
			severity,
			message: message.into(),
			location,
			value: None,
		}
	}

	pub fn error(location: Location, message: impl Into<String>) -> Self {
		Self::new(Severity::Error, location, message)
	}

	pub fn with_value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}
}

/// One line summary, used for tests and logs
impl Display for Finding {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}: {} [{}", self.severity, self.message, self.location)?;
		if let Some(value) = &self.value {
			write!(f, " entry {value}")?;
		}
		write!(f, "]")
	}
}

/// Sink that rules report their findings to
pub trait Output {
	fn report(&mut self, finding: Finding);

	fn error(&mut self, location: Location, message: String) {
		self.report(Finding::error(location, message));
	}
}

/// Output that keeps every finding in the order it was reported
#[derive(Debug, Clone, Default)]
pub struct Findings(pub Vec<Finding>);

impl Findings {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn has_errors(&self) -> bool {
		self.0.iter().any(|x| x.severity == Severity::Error)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Finding> {
		self.0.iter()
	}
}

impl Output for Findings {
	fn report(&mut self, finding: Finding) {
		self.0.push(finding);
	}
}
