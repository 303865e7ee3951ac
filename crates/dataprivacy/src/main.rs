// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dataprivacy - privacy metadata registry for a modular site.
//!
//! This is the binary entry point.

mod registry;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dataprivacy_config::DataPrivacyConfig;
use dataprivacy_core::PrivacyError;

/// Dataprivacy - inspect what personal data each installed component stores.
#[derive(Parser, Debug)]
#[command(name = "dataprivacy", version, about, long_about = None)]
struct Cli {
    /// Configuration file to use instead of the standard lookup.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build and print the metadata registry tree.
    Registry {
        /// Catalog snapshot (overrides registry.catalog_path).
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// String table (overrides registry.strings_path).
        #[arg(long)]
        strings: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the effective configuration as TOML.
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => dataprivacy_config::load_and_validate_path(path),
        None => dataprivacy_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            dataprivacy_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.general.log_level);

    let result = match cli.command {
        Some(Commands::Registry {
            catalog,
            strings,
            format,
        }) => run_registry(&config, catalog, strings, format),
        Some(Commands::Config) => print_config(&config),
        None => {
            println!("dataprivacy: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run_registry(
    config: &DataPrivacyConfig,
    catalog: Option<PathBuf>,
    strings: Option<PathBuf>,
    format: OutputFormat,
) -> Result<(), PrivacyError> {
    let catalog = catalog
        .or_else(|| config.registry.catalog_path.as_ref().map(PathBuf::from))
        .ok_or_else(|| {
            PrivacyError::Config(
                "no catalog snapshot: pass --catalog or set registry.catalog_path".to_string(),
            )
        })?;
    let strings = strings.or_else(|| config.registry.strings_path.as_ref().map(PathBuf::from));

    let tree = registry::build_tree(&catalog, strings.as_deref())?;
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&tree)
            .map_err(|e| PrivacyError::Internal(format!("failed to serialize tree: {e}")))?,
        OutputFormat::Text => registry::render_text(&tree),
    };
    println!("{output}");
    Ok(())
}

fn print_config(config: &DataPrivacyConfig) -> Result<(), PrivacyError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| PrivacyError::Internal(format!("failed to serialize config: {e}")))?;
    print!("{rendered}");
    Ok(())
}

/// Initialize the tracing subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dataprivacy={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
