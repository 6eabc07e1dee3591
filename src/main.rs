use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use dpcheck::output::text::{format_finding, format_summary};
use dpcheck::output::{Findings, Severity};
use dpcheck::pack::load::load_pack;
use dpcheck::rules::get_rules;
use dpcheck::settings::CheckSettingsBuilder;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	match run(cli) {
		Ok(true) => ExitCode::SUCCESS,
		Ok(false) => ExitCode::FAILURE,
		Err(e) => {
			eprintln!("{e:#?}");
			ExitCode::FAILURE
		}
	}
}

fn init_logging(verbose: bool) {
	let default = if verbose { "dpcheck=debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

/// Returns whether the pack passed every rule
fn run(cli: Cli) -> anyhow::Result<bool> {
	if cli.list {
		list_rules();
		return Ok(true);
	}

	let path = cli.pack.context("No datapack directory specified")?;
	let pack = load_pack(&path).context("Failed to load datapack")?;

	let mut settings = CheckSettingsBuilder::new();
	for rule in &cli.rule {
		settings = settings.rule(rule);
	}
	if let Some(config_path) = &cli.config {
		let text = std::fs::read_to_string(config_path).context("Failed to read config file")?;
		let config = serde_json::from_str(&text).context("Failed to parse config file")?;
		settings = settings.rule_config(config);
	}
	let settings = settings.build();

	let mut findings = Findings::new();
	dpcheck::check_pack(&pack, &settings, &mut findings)?;

	match cli.format {
		OutputFormat::Text => {
			for finding in findings.iter() {
				println!("{}\n", format_finding(finding));
			}
			let errors = findings.iter().filter(|x| x.severity == Severity::Error).count();
			let warnings = findings.len() - errors;
			println!("{}", format_summary(errors, warnings));
		}
		OutputFormat::Json => {
			let text = serde_json::to_string_pretty(&findings.0)
				.context("Failed to serialize findings")?;
			println!("{text}");
		}
	}

	Ok(!findings.has_errors())
}

fn list_rules() {
	for rule in get_rules() {
		println!("{}: {}", rule.name(), rule.title());
		println!("  {}", rule.description());
		for example in rule.good_examples() {
			println!("  good: {example}");
		}
		for example in rule.bad_examples() {
			println!("  bad:  {example}");
		}
	}
}

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
	/// The datapack directory, containing pack.mcmeta
	pack: Option<PathBuf>,
	/// Only run the rule with this name. Can be given more than once
	#[arg(short, long)]
	rule: Vec<String>,
	/// A JSON file with configuration for the rules
	#[arg(short, long)]
	config: Option<PathBuf>,
	/// How to print findings
	#[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
	format: OutputFormat,
	/// List the available rules and exit
	#[arg(long)]
	list: bool,
	/// Print debug logs
	#[arg(short, long)]
	verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
	Text,
	Json,
}
