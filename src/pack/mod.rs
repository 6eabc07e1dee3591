pub mod command;
pub mod load;

use std::fmt::Display;
use std::sync::Arc;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use self::command::{Command, CommandKind};

pub type Identifier = Arc<str>;

/// A namespaced id such as `foo:bar/baz`
pub type ResourceLocation = Identifier;

/// A fully loaded datapack. Nothing in here is modified after loading
#[derive(Debug, Clone)]
pub struct Datapack {
	/// Contents of pack.mcmeta, or null if there was none
	pub meta: Value,
	/// Namespaces, ordered by name
	pub namespaces: Vec<Namespace>,
}

impl Datapack {
	pub fn new(meta: Value) -> Self {
		Self {
			meta,
			namespaces: Vec::new(),
		}
	}
}

/// Every resource collection of a single namespace. Each list is ordered by id
#[derive(Debug, Clone)]
pub struct Namespace {
	pub name: Identifier,
	pub functions: Vec<Function>,
	pub dimension_types: Vec<JsonResource>,
	pub dimensions: Vec<JsonResource>,
	pub advancements: Vec<JsonResource>,
	pub predicates: Vec<JsonResource>,
	pub loot_tables: Vec<JsonResource>,
	pub recipes: Vec<JsonResource>,
	pub item_modifiers: Vec<JsonResource>,
	pub block_tags: Vec<Tag>,
	pub item_tags: Vec<Tag>,
	pub configured_features: Vec<JsonResource>,
	pub surface_builders: Vec<JsonResource>,
	pub processor_lists: Vec<JsonResource>,
}

impl Namespace {
	pub fn new(name: Identifier) -> Self {
		Self {
			name,
			functions: Vec::new(),
			dimension_types: Vec::new(),
			dimensions: Vec::new(),
			advancements: Vec::new(),
			predicates: Vec::new(),
			loot_tables: Vec::new(),
			recipes: Vec::new(),
			item_modifiers: Vec::new(),
			block_tags: Vec::new(),
			item_tags: Vec::new(),
			configured_features: Vec::new(),
			surface_builders: Vec::new(),
			processor_lists: Vec::new(),
		}
	}

	/// Gets the plain JSON resources of a kind. Functions and tags are
	/// not plain JSON resources, so they give an empty list
	pub fn json(&self, kind: ResourceKind) -> &[JsonResource] {
		match kind {
			ResourceKind::DimensionType => &self.dimension_types,
			ResourceKind::Dimension => &self.dimensions,
			ResourceKind::Advancement => &self.advancements,
			ResourceKind::Predicate => &self.predicates,
			ResourceKind::LootTable => &self.loot_tables,
			ResourceKind::Recipe => &self.recipes,
			ResourceKind::ItemModifier => &self.item_modifiers,
			ResourceKind::ConfiguredFeature => &self.configured_features,
			ResourceKind::SurfaceBuilder => &self.surface_builders,
			ResourceKind::ProcessorList => &self.processor_lists,
			ResourceKind::Function | ResourceKind::BlockTag | ResourceKind::ItemTag => &[],
		}
	}

	pub fn json_mut(&mut self, kind: ResourceKind) -> Option<&mut Vec<JsonResource>> {
		let out = match kind {
			ResourceKind::DimensionType => &mut self.dimension_types,
			ResourceKind::Dimension => &mut self.dimensions,
			ResourceKind::Advancement => &mut self.advancements,
			ResourceKind::Predicate => &mut self.predicates,
			ResourceKind::LootTable => &mut self.loot_tables,
			ResourceKind::Recipe => &mut self.recipes,
			ResourceKind::ItemModifier => &mut self.item_modifiers,
			ResourceKind::ConfiguredFeature => &mut self.configured_features,
			ResourceKind::SurfaceBuilder => &mut self.surface_builders,
			ResourceKind::ProcessorList => &mut self.processor_lists,
			ResourceKind::Function | ResourceKind::BlockTag | ResourceKind::ItemTag => return None,
		};
		Some(out)
	}

	pub fn tags(&self, kind: ResourceKind) -> &[Tag] {
		match kind {
			ResourceKind::BlockTag => &self.block_tags,
			ResourceKind::ItemTag => &self.item_tags,
			_ => &[],
		}
	}

	pub fn tags_mut(&mut self, kind: ResourceKind) -> Option<&mut Vec<Tag>> {
		match kind {
			ResourceKind::BlockTag => Some(&mut self.block_tags),
			ResourceKind::ItemTag => Some(&mut self.item_tags),
			_ => None,
		}
	}
}

/// The different kinds of resources that a namespace holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
	Function,
	DimensionType,
	Dimension,
	Advancement,
	Predicate,
	LootTable,
	Recipe,
	ItemModifier,
	BlockTag,
	ItemTag,
	ConfiguredFeature,
	SurfaceBuilder,
	ProcessorList,
}

impl ResourceKind {
	pub const ALL: [ResourceKind; 13] = [
		Self::Function,
		Self::DimensionType,
		Self::Dimension,
		Self::Advancement,
		Self::Predicate,
		Self::LootTable,
		Self::Recipe,
		Self::ItemModifier,
		Self::BlockTag,
		Self::ItemTag,
		Self::ConfiguredFeature,
		Self::SurfaceBuilder,
		Self::ProcessorList,
	];

	/// The directory inside of a namespace that holds this kind
	pub fn dir(&self) -> &'static str {
		match self {
			Self::Function => "functions",
			Self::DimensionType => "dimension_type",
			Self::Dimension => "dimension",
			Self::Advancement => "advancements",
			Self::Predicate => "predicates",
			Self::LootTable => "loot_tables",
			Self::Recipe => "recipes",
			Self::ItemModifier => "item_modifiers",
			Self::BlockTag => "tags/blocks",
			Self::ItemTag => "tags/items",
			Self::ConfiguredFeature => "worldgen/configured_feature",
			Self::SurfaceBuilder => "worldgen/configured_surface_builder",
			Self::ProcessorList => "worldgen/processor_list",
		}
	}

	pub fn extension(&self) -> &'static str {
		match self {
			Self::Function => "mcfunction",
			_ => "json",
		}
	}
}

impl Display for ResourceKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Self::Function => "function",
			Self::DimensionType => "dimension_type",
			Self::Dimension => "dimension",
			Self::Advancement => "advancement",
			Self::Predicate => "predicate",
			Self::LootTable => "loot_table",
			Self::Recipe => "recipe",
			Self::ItemModifier => "item_modifier",
			Self::BlockTag => "block_tag",
			Self::ItemTag => "item_tag",
			Self::ConfiguredFeature => "configured_feature",
			Self::SurfaceBuilder => "configured_surface_builder",
			Self::ProcessorList => "processor_list",
		};
		write!(f, "{name}")
	}
}

#[derive(Debug, Clone)]
pub struct Function {
	pub id: ResourceLocation,
	/// One entry per source line
	pub commands: Vec<Command>,
}

impl Function {
	/// Parses the text of an .mcfunction file
	pub fn parse(id: ResourceLocation, text: &str) -> Self {
		let commands = text
			.lines()
			.enumerate()
			.map(|(i, line)| Command::parse(i + 1, line))
			.collect();
		Self { id, commands }
	}

	/// Every command that this function runs, in order. Commands that are
	/// nested in an `execute ... run` come right after the command that runs them.
	/// Calls to other functions are not followed
	pub fn flat(&self) -> impl Iterator<Item = &Command> {
		self.commands.iter().flat_map(Command::chain)
	}
}

/// Any resource with a JSON body
#[derive(Debug, Clone)]
pub struct JsonResource {
	pub id: ResourceLocation,
	pub content: Value,
	/// The text of the file as it was read
	pub raw: String,
}

impl JsonResource {
	pub fn new(id: ResourceLocation, content: Value) -> Self {
		let raw = content.to_string();
		Self { id, content, raw }
	}

	pub fn parse(id: ResourceLocation, raw: String) -> anyhow::Result<Self> {
		let content = serde_json::from_str(&raw)
			.with_context(|| format!("Failed to parse JSON of resource {id}"))?;
		Ok(Self { id, content, raw })
	}
}

/// A block or item tag
#[derive(Debug, Clone)]
pub struct Tag {
	pub resource: JsonResource,
	/// Ids of the values in this tag, in order
	pub entries: Vec<String>,
}

impl Tag {
	pub fn new(resource: JsonResource) -> Self {
		// Entries that are not valid are skipped without losing the rest
		let entries = serde_json::from_value::<TagInner>(resource.content.clone())
			.map(|inner| {
				inner
					.values
					.into_iter()
					.filter_map(|x| serde_json::from_value::<TagEntry>(x).ok())
					.map(TagEntry::into_id)
					.collect()
			})
			.unwrap_or_default();
		Self { resource, entries }
	}

	pub fn id(&self) -> &ResourceLocation {
		&self.resource.id
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagInner {
	#[serde(default)]
	pub values: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagEntry {
	Id(String),
	Object { id: String },
}

impl TagEntry {
	pub fn into_id(self) -> String {
		match self {
			Self::Id(id) | Self::Object { id } => id,
		}
	}
}

/// Gets the path of a resource relative to the data directory
pub fn get_resource_path(loc: &str, kind: ResourceKind) -> anyhow::Result<String> {
	let (l, r) = loc.split_at(loc.find(':').context("No colon in resource location")?);
	let r = &r[1..];
	Ok(format!("{l}/{}/{r}.{}", kind.dir(), kind.extension()))
}
