use std::path::Path;

use anyhow::{bail, Context};
use itertools::Itertools;
use serde_json::Value;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::{Datapack, Function, JsonResource, Namespace, ResourceKind, ResourceLocation, Tag};

/// Loads a datapack from a folder containing pack.mcmeta and a data directory
pub fn load_pack(path: &Path) -> anyhow::Result<Datapack> {
	if !path.is_dir() {
		bail!("Datapack path {} is not a directory", path.display());
	}

	let meta_path = path.join("pack.mcmeta");
	let meta = if meta_path.exists() {
		let text = std::fs::read_to_string(&meta_path).context("Failed to read pack.mcmeta")?;
		serde_json::from_str(&text).context("Failed to parse pack.mcmeta")?
	} else {
		warn!(path = %path.display(), "Datapack has no pack.mcmeta");
		Value::Null
	};

	let mut pack = Datapack::new(meta);
	let data_path = path.join("data");
	if !data_path.is_dir() {
		warn!(path = %path.display(), "Datapack has no data directory");
		return Ok(pack);
	}

	let entries = std::fs::read_dir(&data_path).context("Failed to read data directory")?;
	let mut ns_dirs = Vec::new();
	for entry in entries {
		let entry = entry.context("Failed to read data directory entry")?;
		if entry.path().is_dir() {
			ns_dirs.push(entry);
		}
	}

	for entry in ns_dirs.into_iter().sorted_by_key(|x| x.file_name()) {
		let Some(name) = entry.file_name().to_str().map(str::to_string) else {
			warn!(path = %entry.path().display(), "Skipping namespace with a non UTF-8 name");
			continue;
		};
		let ns = load_namespace(&name, &entry.path())
			.with_context(|| format!("Failed to load namespace {name}"))?;
		debug!(namespace = %ns.name, functions = ns.functions.len(), "Loaded namespace");
		pack.namespaces.push(ns);
	}

	Ok(pack)
}

fn load_namespace(name: &str, path: &Path) -> anyhow::Result<Namespace> {
	let mut ns = Namespace::new(name.into());
	for kind in ResourceKind::ALL {
		let kind_path = path.join(kind.dir());
		if !kind_path.is_dir() {
			continue;
		}

		for entry in WalkDir::new(&kind_path).sort_by_file_name() {
			let entry = entry.with_context(|| format!("Failed to walk {}", kind_path.display()))?;
			let file_path = entry.path();
			if !entry.file_type().is_file() {
				continue;
			}
			if file_path.extension().and_then(|x| x.to_str()) != Some(kind.extension()) {
				debug!(path = %file_path.display(), "Skipping file with unknown extension");
				continue;
			}

			let rel = file_path
				.strip_prefix(&kind_path)
				.context("Walked file is outside of its directory")?;
			let id = get_resource_id(name, rel)?;
			let text = std::fs::read_to_string(file_path)
				.with_context(|| format!("Failed to read {kind} {id}"))?;
			add_resource(&mut ns, kind, id, text);
		}
	}

	Ok(ns)
}

fn add_resource(ns: &mut Namespace, kind: ResourceKind, id: ResourceLocation, text: String) {
	if kind == ResourceKind::Function {
		ns.functions.push(Function::parse(id, &text));
		return;
	}

	// Resources that the game would refuse to load are left out so that
	// the rest of the pack can still be checked
	let resource = match JsonResource::parse(id, text) {
		Ok(resource) => resource,
		Err(e) => {
			warn!("Skipping {kind}: {e:#}");
			return;
		}
	};
	if let Some(tags) = ns.tags_mut(kind) {
		tags.push(Tag::new(resource));
	} else if let Some(list) = ns.json_mut(kind) {
		list.push(resource);
	}
}

/// Gets the id of a resource from its path relative to the directory of its kind
pub fn get_resource_id(namespace: &str, rel: &Path) -> anyhow::Result<ResourceLocation> {
	let stem = rel.with_extension("");
	let mut parts = Vec::new();
	for component in stem.components() {
		let Some(part) = component.as_os_str().to_str() else {
			bail!("Resource path {} is not valid UTF-8", rel.display());
		};
		parts.push(part);
	}
	if parts.is_empty() {
		bail!("Empty resource path");
	}

	Ok(format!("{namespace}:{}", parts.join("/")).into())
}
