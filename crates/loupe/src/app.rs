use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("loupe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Toggle and configure an external screen magnifier helper")
        .long_about("loupe launches a magnifier helper program with arguments built from your saved settings, stops it on request, and restarts it whenever the settings change while it is running.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Drive the magnifier from control messages read on stdin")
                .long_about("Reads one control message per line: toggle, pos, zoom-in, zoom-out, reload, quit. On end of input or Ctrl-C the helper is stopped before exiting.")
                .arg(
                    Arg::new("start")
                        .long("start")
                        .help("Start the helper immediately")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print controller events as JSON lines")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("args")
                .about("Print the helper command line for the current settings")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("settings")
                .about("Show or change the saved magnifier settings")
                .subcommand_required(true)
                .subcommand(
                    Command::new("show")
                        .about("Show the saved settings")
                        .arg(
                            Arg::new("json")
                                .long("json")
                                .help("Output in JSON format")
                                .action(ArgAction::SetTrue)
                        )
                )
                .subcommand(
                    Command::new("set")
                        .about("Change settings (out-of-range values fall back to defaults)")
                        .arg(
                            Arg::new("shape")
                                .long("shape")
                                .help("Lens shape")
                                .value_parser(["circle", "rectangle"])
                        )
                        .arg(
                            Arg::new("width")
                                .long("width")
                                .help("Lens width in pixels")
                                .value_parser(value_parser!(i32))
                        )
                        .arg(
                            Arg::new("height")
                                .long("height")
                                .help("Lens height in pixels (rectangle only)")
                                .value_parser(value_parser!(i32))
                        )
                        .arg(
                            Arg::new("zoom")
                                .long("zoom")
                                .short('z')
                                .help("Magnification factor")
                                .value_parser(value_parser!(i32))
                        )
                        .arg(
                            Arg::new("static-window")
                                .long("static-window")
                                .help("Keep the lens at a fixed screen position")
                                .value_parser(value_parser!(bool))
                        )
                        .arg(
                            Arg::new("x")
                                .long("x")
                                .help("Static lens X position")
                                .allow_negative_numbers(true)
                                .value_parser(value_parser!(i32))
                        )
                        .arg(
                            Arg::new("y")
                                .long("y")
                                .help("Static lens Y position")
                                .allow_negative_numbers(true)
                                .value_parser(value_parser!(i32))
                        )
                        .arg(
                            Arg::new("follow-focus")
                                .long("follow-focus")
                                .help("Follow keyboard focus")
                                .value_parser(value_parser!(bool))
                        )
                        .arg(
                            Arg::new("follow-text-cursor")
                                .long("follow-text-cursor")
                                .help("Follow the text cursor")
                                .value_parser(value_parser!(bool))
                        )
                        .arg(
                            Arg::new("bilinear-filter")
                                .long("bilinear-filter")
                                .help("Smooth the magnified image")
                                .value_parser(value_parser!(bool))
                        )
                )
        )
}
