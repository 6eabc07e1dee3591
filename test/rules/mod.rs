use std::path::Path;

use anyhow::{bail, Context};
use color_print::cprintln;
use dpcheck::output::Findings;
use dpcheck::pack::load::load_pack;
use dpcheck::settings::CheckSettings;
use include_dir::{include_dir, Dir};

static PACKS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/test/rules/packs");

fn main() {
	let mut failed = Vec::new();
	for dir in PACKS.dirs() {
		let name = dir.path().to_string_lossy().to_string();
		println!("     - Running rule test '{name}'");
		if let Err(e) = run_test(dir) {
			cprintln!("<red>       failed</>: {:#}", e);
			failed.push(name);
		}
	}

	if !failed.is_empty() {
		panic!("Rule tests failed: {}", failed.join(", "));
	}
	cprintln!("<green>     All rule tests passed</>");
}

fn run_test(dir: &Dir) -> anyhow::Result<()> {
	let expected = dir
		.files()
		.find(|x| x.path().file_name().is_some_and(|x| x == "expected.txt"))
		.context("Test pack has no expected.txt")?
		.contents_utf8()
		.context("Expected output is not UTF-8")?;

	let path = Path::new(env!("CARGO_MANIFEST_DIR"))
		.join("test/rules/packs")
		.join(dir.path());
	let pack = load_pack(&path).context("Failed to load test pack")?;

	let mut findings = Findings::new();
	dpcheck::check_pack(&pack, &CheckSettings::new(), &mut findings)
		.context("Failed to check pack")?;

	let actual: Vec<_> = findings.iter().map(|x| x.to_string()).collect();
	let expected: Vec<_> = expected.lines().filter(|x| !x.is_empty()).collect();
	for (i, (l, r)) in expected.iter().zip(actual.iter()).enumerate() {
		if l != r {
			bail!("Finding mismatch at {i}:\n  expected: {l}\n  actual:   {r}");
		}
	}
	if expected.len() != actual.len() {
		bail!(
			"Expected {} findings but got {}:\n{}",
			expected.len(),
			actual.len(),
			actual.join("\n")
		);
	}

	Ok(())
}
