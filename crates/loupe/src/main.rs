use loupe_core::config::Config;
use loupe_core::init_logging;

mod app;
mod commands;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Quiet unless -v was given; LOUPE_LOG_LEVEL picks the verbose level
    let quiet = !matches.get_flag("verbose");
    let runtime = Config::new();
    init_logging(quiet, &runtime.log_level);

    commands::run_command(&matches)?;

    Ok(())
}
