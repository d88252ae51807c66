use clap::ArgMatches;
use tracing::info;

use loupe_core::build_helper_argv;

use super::{load_config_with_warning, open_settings_store};

pub(crate) fn handle_args_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.args_started", json_output = json_output);

    let config = load_config_with_warning();
    let store = open_settings_store(&config)?;
    let argv = build_helper_argv(config.helper_program(), store.current());

    if json_output {
        println!("{}", serde_json::to_string_pretty(&argv)?);
    } else {
        println!("{}", argv.join(" "));
    }

    info!(event = "cli.args_completed", arg_count = argv.len());

    Ok(())
}
