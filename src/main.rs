use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use ve_autocorrect::config::{
	CONFIG_FILE_NAME, MergedConfig, discover_configs, init_template, load_merged_config,
	merge_configs, user_config_path,
};
use ve_autocorrect::exec::UsageMarker;
use ve_autocorrect::extension::MatcherContext;
use ve_autocorrect::rules::RuleDeclaration;
use ve_autocorrect::rulesets::{self, ExtraRuleSet};
use ve_autocorrect::surface::Document;

#[derive(Parser)]
#[command(name = "autocorrect")]
#[command(
	author,
	version,
	about = "Typing-time autocorrection rules for rich-text wiki editors"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Create a template .autocorrect.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .autocorrect.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Log rule registration and matches (overrides RUST_LOG)
	#[arg(short, long, global = true)]
	verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Type text into an empty document and print the corrected result
	Type {
		/// Text to type; each argument is a separate document, `\n` presses Enter
		#[arg(required = true, allow_hyphen_values = true)]
		text: Vec<String>,

		#[command(flatten)]
		overrides: Overrides,
	},
	/// List the rules that would be registered
	Rules {
		#[command(flatten)]
		overrides: Overrides,
	},
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display configuration files in cascade order with their rules
	Show,
	/// Check all config files and custom rules for errors
	Validate,
}

/// Command-line values that take precedence over the config cascade.
#[derive(Args)]
struct Overrides {
	/// Content language, e.g. `pl`
	#[arg(long = "lang", value_name = "CODE")]
	language: Option<String>,

	/// Wiki database name, e.g. `plwiki`
	#[arg(long)]
	wiki: Option<String>,

	/// Extra rule sets to enable, comma separated
	#[arg(long, value_delimiter = ',', value_name = "SET")]
	extras: Vec<ExtraRuleSet>,
}

impl Overrides {
	fn apply(self, config: &mut MergedConfig) {
		if self.language.is_some() {
			config.language = self.language;
		}
		if self.wiki.is_some() {
			config.wiki = self.wiki;
		}
		for extra in self.extras {
			if !config.extras.contains(&extra) {
				config.extras.push(extra);
			}
		}
	}
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	// --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
	let filter = if cli.verbose {
		EnvFilter::new("info")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();

	match run(cli) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run(cli: Cli) -> Result<ExitCode> {
	if cli.init {
		return handle_init(cli.force);
	}

	match cli.command {
		Some(Commands::Type { text, overrides }) => handle_type(&text, overrides),
		Some(Commands::Rules { overrides }) => handle_rules(overrides),
		Some(Commands::Config { action }) => match action {
			ConfigAction::Show => handle_config_show(),
			ConfigAction::Validate => handle_config_validate(),
		},
		// Unreachable due to arg_required_else_help
		None => Ok(ExitCode::SUCCESS),
	}
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

/// Load the cascade, apply overrides and build an active context.
fn build_context(overrides: Overrides) -> Result<MatcherContext> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let mut config = load_merged_config(&cwd).context("Failed to load configuration")?;
	overrides.apply(&mut config);

	let mut ctx = MatcherContext::new(UsageMarker::new(config.usage_tag()));
	let today = chrono::Local::now().date_naive();
	rulesets::install(&mut ctx, &config, today);
	ctx.activate();

	if ctx.rejected_len() > 0 {
		tracing::warn!(
			rejected = ctx.rejected_len(),
			"some rules were rejected; run `autocorrect config validate` for details"
		);
	}
	Ok(ctx)
}

fn handle_type(texts: &[String], overrides: Overrides) -> Result<ExitCode> {
	let mut ctx = build_context(overrides)?;

	for text in texts {
		ctx.begin_session();
		let mut doc = Document::new();
		let fired = ctx.type_text(&mut doc, &text.replace("\\n", "\n"));
		tracing::info!(?fired, tags = ?doc.change_tags(), "typed document");
		println!("{}", doc.render());
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_rules(overrides: Overrides) -> Result<ExitCode> {
	let ctx = build_context(overrides)?;

	for rule in ctx.registry().rules() {
		println!("{}\t{}\t{}", rule.name(), rule.pattern(), rule.replacement());
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_show() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let configs = discover_configs(&cwd).context("Failed to discover config files")?;

	if configs.is_empty() {
		println!("No configuration files found.");
	} else {
		println!("Configuration files (in cascade order):\n");

		for loaded in &configs {
			let config = &loaded.config;
			println!("# Source: {}", loaded.path.display());
			println!("# root: {}", config.root);
			println!("# no-external-lookup: {}", config.no_external_lookup);
			if let Some(ref env_var) = config.root_config_lookup_disable_env_var {
				println!("# root-config-lookup-disable-env-var: {}", env_var);
			}
			if let Some(ref language) = config.language {
				println!("# language: {}", language);
			}
			if let Some(ref wiki) = config.wiki {
				println!("# wiki: {}", wiki);
			}
			if let Some(ref tag) = config.usage_tag {
				println!("# usage-tag: {}", tag);
			}
			if !config.extras.is_empty() {
				let extras: Vec<String> = config.extras.iter().map(|e| e.to_string()).collect();
				println!("# extras: {}", extras.join(", "));
			}
			println!("# rules: {}", config.rules.len());
			println!();

			for (i, rule) in config.rules.iter().enumerate() {
				println!("  Rule {}:", i + 1);
				print_declaration(rule);
				println!();
			}
		}

		let merged = merge_configs(&configs);
		println!("Effective usage tag: {}", merged.usage_tag());
	}

	if let Ok(user_path) = user_config_path() {
		println!("User config path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn print_declaration(rule: &RuleDeclaration) {
	if let Some(ref from) = rule.from {
		println!("    from: {:?}", from);
	}
	if let Some(ref start) = rule.start {
		println!("    start: {}", start);
	}
	if let Some(ref to) = rule.to {
		println!("    to: {}", to);
	}
}

fn handle_config_validate() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	let configs = match discover_configs(&cwd) {
		Ok(configs) => configs,
		Err(e) => {
			eprintln!("Configuration error: {}", e);
			return Ok(ExitCode::FAILURE);
		}
	};

	if configs.is_empty() {
		println!("No configuration files found.");
		return Ok(ExitCode::SUCCESS);
	}

	let problems = merge_configs(&configs).validate_rules();
	if !problems.is_empty() {
		for problem in &problems {
			eprintln!("Invalid rule: {}", problem);
		}
		return Ok(ExitCode::FAILURE);
	}

	println!("All configuration files are valid:");
	for loaded in &configs {
		println!(
			"  {} ({} rules)",
			loaded.path.display(),
			loaded.config.rules.len()
		);
	}
	Ok(ExitCode::SUCCESS)
}
