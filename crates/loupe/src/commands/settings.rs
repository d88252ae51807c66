use clap::ArgMatches;
use tracing::{error, info};

use loupe_core::{MagnifierSettings, Shape};

use super::{load_config_with_warning, open_settings_store};

pub(crate) fn handle_settings_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("show", sub_matches)) => handle_show(sub_matches),
        Some(("set", sub_matches)) => handle_set(sub_matches),
        _ => {
            error!(event = "cli.settings.subcommand_unknown");
            Err("Unknown settings command".into())
        }
    }
}

fn handle_show(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    let config = load_config_with_warning();
    let store = open_settings_store(&config)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(store.current())?);
    } else {
        print_settings(store.current());
    }

    info!(
        event = "cli.settings.show_completed",
        path = %store.path().display()
    );
    Ok(())
}

fn handle_set(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let mut store = open_settings_store(&config)?;

    let mut settings = store.current().clone();
    apply_overrides(&mut settings, matches)?;
    let settings = settings.normalized();

    store.save(&settings)?;

    println!("Saved settings to {}", store.path().display());
    print_settings(&settings);

    info!(
        event = "cli.settings.set_completed",
        path = %store.path().display()
    );
    Ok(())
}

fn apply_overrides(
    settings: &mut MagnifierSettings,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(shape) = matches.get_one::<String>("shape") {
        settings.shape = shape.parse::<Shape>()?;
    }

    let numbers: [(&str, &mut i32); 5] = [
        ("width", &mut settings.width),
        ("height", &mut settings.height),
        ("zoom", &mut settings.zoom),
        ("x", &mut settings.x),
        ("y", &mut settings.y),
    ];
    for (name, field) in numbers {
        if let Some(value) = matches.get_one::<i32>(name) {
            *field = *value;
        }
    }

    let flags: [(&str, &mut bool); 4] = [
        ("static-window", &mut settings.static_window),
        ("follow-focus", &mut settings.follow_focus),
        ("follow-text-cursor", &mut settings.follow_text_cursor),
        ("bilinear-filter", &mut settings.bilinear_filter),
    ];
    for (name, field) in flags {
        if let Some(value) = matches.get_one::<bool>(name) {
            *field = *value;
        }
    }

    Ok(())
}

fn print_settings(settings: &MagnifierSettings) {
    println!("shape:              {}", settings.shape);
    match settings.shape {
        Shape::Circle => println!("size:               {}", settings.width),
        Shape::Rectangle => println!(
            "size:               {}x{}",
            settings.width, settings.height
        ),
    }
    println!("zoom:               {}", settings.zoom);
    if settings.static_window {
        println!("static window:      at {},{}", settings.x, settings.y);
    } else {
        println!("static window:      off");
    }
    println!("follow focus:       {}", on_off(settings.follow_focus));
    println!("follow text cursor: {}", on_off(settings.follow_text_cursor));
    println!("bilinear filter:    {}", on_off(settings.bilinear_filter));
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}
