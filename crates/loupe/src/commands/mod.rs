use clap::ArgMatches;
use tracing::{error, warn};

use loupe_core::config::Config;
use loupe_core::errors::ConfigError;
use loupe_core::{LoupeConfig, SettingsStore, events};

mod args;
mod run;
mod settings;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup(matches.subcommand_name().unwrap_or_default());

    let result = match matches.subcommand() {
        Some(("run", sub_matches)) => run::handle_run_command(sub_matches),
        Some(("args", sub_matches)) => args::handle_args_command(sub_matches),
        Some(("settings", sub_matches)) => settings::handle_settings_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    if let Err(e) = &result {
        events::log_app_error(e.as_ref());
    }

    result
}

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> LoupeConfig {
    match LoupeConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.loupe/config.toml and ./.loupe/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            LoupeConfig::default()
        }
    }
}

/// Open the settings file named by `config`.
fn open_settings_store(config: &LoupeConfig) -> Result<SettingsStore, ConfigError> {
    let runtime = Config::new();
    SettingsStore::open(config.settings_path(&runtime))
}
