//! plan-sanitize CLI entrypoint.
//!
//! This is the main entrypoint for the plan-sanitize command-line tool.

use std::path::Path;
use std::process::ExitCode;

use plan_sanitize::cli::{Cli, Commands, LogFormat, OutputFormatter};
use plan_sanitize::config::{
    ConfigParser, ConfigValidator, DEFAULT_CONFIG_FILES, SanitizerConfig, parse_replacement,
};
use plan_sanitize::document::{DocumentHasher, DocumentLoader};
use plan_sanitize::error::Result;
use plan_sanitize::sanitize::sanitize_plan_with_value;

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Main entrypoint.
fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.log_format);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_user_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

/// Initializes the logging system. Logs go to stderr; stdout is reserved for
/// the sanitized plan.
fn init_logging(verbose: bool, format: LogFormat) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Main entry point.
fn run(cli: Cli) -> Result<()> {
    let formatter = OutputFormatter::new(cli.output);

    match cli.command {
        Commands::Sanitize {
            input,
            out,
            replacement,
            compact,
            report,
        } => {
            let options = SanitizeOptions {
                replacement,
                compact,
                report,
            };
            cmd_sanitize(cli.config.as_deref(), &input, &out, options, &formatter)
        }
        Commands::Check { input } => cmd_check(cli.config.as_deref(), &input, &formatter),
        Commands::Init { path, force } => cmd_init(&path, force),
    }
}

/// Flags of the sanitize command that override configuration.
struct SanitizeOptions {
    replacement: Option<String>,
    compact: bool,
    report: bool,
}

/// Sanitize a plan and write the result.
fn cmd_sanitize(
    config_path: Option<&Path>,
    input: &Path,
    out: &Path,
    options: SanitizeOptions,
    formatter: &OutputFormatter,
) -> Result<()> {
    let mut config = load_config(config_path)?;

    // Command-line flags take precedence over file and environment
    if let Some(raw) = options.replacement.as_deref() {
        config.replacement = parse_replacement(raw);
    }
    if options.compact {
        config.output.pretty = false;
    }
    if options.report {
        config.output.report = true;
    }
    validate_config(&config)?;

    let loader = DocumentLoader::new().with_pretty(config.output.pretty);
    let mut plan = loader.load(input)?;

    let report = sanitize_plan_with_value(Some(&mut plan), &config.replacement)?;

    let encoded = loader.to_json(&plan)?;
    let digest = DocumentHasher::new().digest(encoded.as_bytes());
    loader.write(out, &encoded)?;
    info!("Sanitized plan written ({} values redacted)", report.total());

    if config.output.report {
        let report = report.with_digest(digest);
        eprintln!("{}", formatter.format_report(&report));
    } else {
        debug!("Sanitized plan digest: {digest}");
    }

    Ok(())
}

/// Report what a plan would have redacted.
fn cmd_check(config_path: Option<&Path>, input: &Path, formatter: &OutputFormatter) -> Result<()> {
    let config = load_config(config_path)?;
    validate_config(&config)?;

    let mut plan = DocumentLoader::new().load(input)?;
    let report = sanitize_plan_with_value(Some(&mut plan), &config.replacement)?;

    eprintln!("{}", formatter.format_report(&report));
    Ok(())
}

/// Write a default configuration file.
fn cmd_init(path: &Path, force: bool) -> Result<()> {
    info!("Initializing plan-sanitize configuration in: {}", path.display());

    let config_path = path.join(DEFAULT_CONFIG_FILES[0]);

    if !force && config_path.exists() {
        eprintln!("Configuration file already exists: {}", config_path.display());
        eprintln!("Use --force to overwrite.");
        return Ok(());
    }

    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }

    let config_template = include_str!("../templates/plan-sanitize.yaml");
    std::fs::write(&config_path, config_template)?;
    eprintln!("Created: {}", config_path.display());

    Ok(())
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Loads configuration from an explicit path, the nearest default file, or
/// built-in defaults, with environment overrides applied.
fn load_config(config_path: Option<&Path>) -> Result<SanitizerConfig> {
    let base = config_path
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new("."));

    let parser = ConfigParser::new().with_base_path(base);
    parser.load_dotenv()?;
    parser.resolve(config_path, std::env::current_dir()?)
}

/// Validates configuration and logs any warnings.
fn validate_config(config: &SanitizerConfig) -> Result<()> {
    let result = ConfigValidator::new().validate(config)?;
    for warning in &result.warnings {
        warn!("{warning}");
    }
    Ok(())
}
