use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use nsmatch::config::{CONFIG_FILE_NAME, discover_configs, load_merged_config, user_config_path};
use nsmatch::filters::FilterSet;
use nsmatch::namespace::{
	MatchOptions, Namespace, component_has_multi_character_wildcard,
	component_has_single_character_wildcard, component_has_wildcard, extend, from_components,
	is_namespace_component, namespaces_match, to_components,
};

#[derive(Parser)]
#[command(name = "nsmatch")]
#[command(
	author,
	version,
	about = "Hierarchical namespace matching with per-side wildcard expansion"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Create a template .nsmatch.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .nsmatch.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Log at info level (NSMATCH_LOG overrides)
	#[arg(short, long, global = true)]
	verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Match LHS against RHS; exits 0 on match and 1 otherwise
	Match {
		lhs: String,
		rhs: String,

		/// Treat wildcards in LHS as pattern syntax
		#[arg(long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
		expand_left: bool,

		/// Treat wildcards in RHS as pattern syntax
		#[arg(long, value_name = "BOOL", default_value_t = false, action = ArgAction::Set)]
		expand_right: bool,
	},
	/// Print the components of a namespace, one per line
	Split { namespace: String },
	/// Join components into a namespace
	Join { components: Vec<String> },
	/// Append components to a namespace
	Extend {
		namespace: String,
		components: Vec<String>,
	},
	/// Report the wildcard content of a component
	Classify { component: String },
	/// Run namespaces through the configured filters
	Check {
		#[arg(required = true)]
		namespaces: Vec<String>,
	},
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display every config file in the cascade with its filters
	Show,
	/// Check all config files for errors without matching anything
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_logging(verbose: bool) {
	let level = if verbose { "info" } else { "warn" };
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_env("NSMATCH_LOG").unwrap_or_else(|_| EnvFilter::new(level)),
		)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	// No subcommand - only reachable when just global flags were passed
	let Some(command) = cli.command else {
		return Ok(ExitCode::SUCCESS);
	};

	// Handle subcommands
	match command {
		Commands::Match {
			lhs,
			rhs,
			expand_left,
			expand_right,
		} => handle_match(&lhs, &rhs, MatchOptions::new(expand_left, expand_right)),
		Commands::Split { namespace } => {
			for component in to_components(&namespace) {
				println!("{}", component);
			}
			Ok(ExitCode::SUCCESS)
		}
		Commands::Join { components } => {
			println!("{}", from_components(&components));
			Ok(ExitCode::SUCCESS)
		}
		Commands::Extend {
			namespace,
			components,
		} => {
			println!("{}", extend(&namespace, &components));
			Ok(ExitCode::SUCCESS)
		}
		Commands::Classify { component } => handle_classify(component),
		Commands::Check { namespaces } => handle_check(&namespaces),
		Commands::Config { action } => match action {
			ConfigAction::Show => handle_config_show(),
			ConfigAction::Validate => handle_config_validate(),
		},
	}
}

fn handle_match(lhs: &str, rhs: &str, options: MatchOptions) -> Result<ExitCode> {
	// Exit status mirrors the verdict so scripts can branch on it
	let matched = namespaces_match(lhs, rhs, options);
	println!("{}", matched);
	Ok(if matched {
		ExitCode::SUCCESS
	} else {
		ExitCode::from(1)
	})
}

fn handle_classify(component: String) -> Result<ExitCode> {
	if !is_namespace_component(&component) {
		anyhow::bail!("{:?} contains the separator and is not a single component", component);
	}

	println!("wildcard: {}", component_has_wildcard(&component));
	println!(
		"single-character: {}",
		component_has_single_character_wildcard(&component)
	);
	println!(
		"multi-character: {}",
		component_has_multi_character_wildcard(&component)
	);
	Ok(ExitCode::SUCCESS)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{} already exists. Use --force to overwrite.", CONFIG_FILE_NAME);
	}

	std::fs::write(&config_path, generate_init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {}", CONFIG_FILE_NAME);
	Ok(ExitCode::SUCCESS)
}

fn generate_init_template() -> &'static str {
	r#"# nsmatch configuration
# Files are discovered from the current directory upwards, then ~/.nsmatch.toml.

# Stop looking in parent directories after this file.
root = true

# Verdict for namespaces that no filter matches: "include" or "exclude".
default = "include"

# Filter patterns are wildcard patterns; checked namespaces are literal.
expand-left-wildcards = true
expand-right-wildcards = false

# Filters are tried in order; the first match decides.
# `?` matches one character, `*` matches any run within one component.
[[filters]]
pattern = "svc:auth:*"
action = "exclude"

[[filters]]
pattern = "svc:*"
action = "include"
"#
}

fn handle_check(namespaces: &[String]) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	// Load and merge config
	let config = load_merged_config(&cwd).context("Failed to load configuration")?;

	// Compile filters
	let set = FilterSet::from_config(&config).context("Failed to compile filters")?;

	// Report the deciding filter, or the default when none matched
	for namespace in namespaces {
		let namespace = Namespace::new(namespace.as_str());
		let decision = set.decide(&namespace);
		match decision.filter_index.and_then(|index| set.get(index)) {
			Some(filter) => println!(
				"{}\t{}\t{} ({})",
				namespace,
				decision.action,
				filter.filter.pattern,
				filter.source.display()
			),
			None => println!("{}\t{}\t(default)", namespace, decision.action),
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_show() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let configs = discover_configs(&cwd).context("Failed to discover config files")?;

	if configs.is_empty() {
		println!("No configuration files found.");
		return Ok(ExitCode::SUCCESS);
	}

	println!("Configuration files (in cascade order):\n");

	for loaded in &configs {
		let options = loaded.config.match_options();
		println!("# Source: {}", loaded.path.display());
		println!("# root: {}", loaded.config.root);
		if let Some(ref env_var) = loaded.config.root_config_lookup_disable_env_var {
			println!("# root-config-lookup-disable-env-var: {}", env_var);
		}
		if let Some(default) = loaded.config.default {
			println!("# default: {}", default);
		}
		println!("# expand-left-wildcards: {}", options.expand_left_wildcards);
		println!("# expand-right-wildcards: {}", options.expand_right_wildcards);
		println!("# filters: {}", loaded.config.filters.len());
		println!();

		for (i, filter) in loaded.config.filters.iter().enumerate() {
			let resolved = filter.options(options);
			println!("  Filter {}:", i + 1);
			println!("    pattern: {}", filter.pattern);
			println!("    action: {}", filter.action);
			println!(
				"    expand_left_wildcards: {}",
				resolved.expand_left_wildcards
			);
			println!(
				"    expand_right_wildcards: {}",
				resolved.expand_right_wildcards
			);
			println!();
		}
	}

	// Show user config path
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

fn handle_config_validate() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	match discover_configs(&cwd) {
		Ok(configs) => {
			if configs.is_empty() {
				println!("No configuration files found.");
			} else {
				println!("All configuration files are valid:");
				for loaded in &configs {
					println!(
						"  {} ({} filters)",
						loaded.path.display(),
						loaded.config.filters.len()
					);
				}
			}
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {}", e);
			Ok(ExitCode::FAILURE)
		}
	}
}
