mod cli;

use std::path::Path;
use std::process::ExitCode;

use dialkit_common::{ConfigError, DialkitError, NumericRange};
use dialkit_config::schema::DialkitConfig;
use dialkit_controls::{percent_at_value, value_at_percent};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

fn load_config(args: &Args) -> Result<DialkitConfig, ConfigError> {
    match &args.config {
        Some(path) => dialkit_config::load_config_from(Path::new(path)),
        None => dialkit_config::load_config(),
    }
}

/// `--log-level` wins, then the config's `logging.level`, then `dialkit=info`.
fn log_directive(override_level: Option<&str>, config: Option<&DialkitConfig>) -> String {
    match (override_level, config) {
        (Some(level), _) => level.to_string(),
        (None, Some(config)) => format!("dialkit={}", config.logging.level.as_directive()),
        (None, None) => "dialkit=info".into(),
    }
}

fn env_filter(directive: &str) -> EnvFilter {
    let directive: Directive = directive
        .parse()
        .unwrap_or_else(|_| "dialkit=info".parse().expect("static directive parses"));
    EnvFilter::from_default_env().add_directive(directive)
}

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(directive))
        .init();
}

fn run(args: &Args, config: &DialkitConfig) -> Result<(), DialkitError> {
    match &args.command {
        Command::Color { hex } => {
            let color = dialkit_config::parse_hex(hex);
            if dialkit_config::try_parse_hex(hex).is_none() {
                tracing::warn!("{hex:?} is not a hex color, showing the fallback");
            }
            println!(
                "r={:.4} g={:.4} b={:.4} a={:.4} {}",
                color.r,
                color.g,
                color.b,
                color.a,
                color.to_hex()
            );
        }
        Command::ValueAt {
            lower,
            upper,
            percent,
        } => {
            let bounds = NumericRange::new(*lower, *upper)?;
            println!("{}", value_at_percent(&bounds, *percent));
        }
        Command::PercentAt {
            lower,
            upper,
            value,
        } => {
            let bounds = NumericRange::new(*lower, *upper)?;
            println!("{}", percent_at_value(&bounds, *value)?);
        }
        Command::Config => {
            println!("{}", dialkit_config::config_to_json(config));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    // The config picks the final log level, so it is loaded under a
    // bootstrap subscriber that only knows the command-line override.
    let bootstrap = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(&log_directive(args.log_level.as_deref(), None)))
        .finish();
    let loaded = tracing::subscriber::with_default(bootstrap, || {
        if let Some(ref path) = args.config {
            tracing::info!("Using config override: {path}");
        }
        load_config(&args)
    });

    init_logging(&log_directive(
        args.log_level.as_deref(),
        loaded.as_ref().ok(),
    ));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        DialkitConfig::default()
    });

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
