use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted. Otherwise
/// loupe's own targets log at `verbose_level` (normally the runtime
/// config's `LOUPE_LOG_LEVEL`), falling back to info if it does not parse.
/// `RUST_LOG` still controls every other target.
pub fn init_logging(quiet: bool, verbose_level: &str) {
    let level = effective_level(quiet, verbose_level);

    let mut filter = EnvFilter::from_default_env();
    for target in ["loupe", "loupe_core"] {
        if let Ok(directive) = format!("{target}={level}").parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}

fn effective_level(quiet: bool, verbose_level: &str) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    verbose_level.trim().parse().unwrap_or(LevelFilter::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_wins_over_configured_level() {
        assert_eq!(effective_level(true, "debug"), LevelFilter::ERROR);
    }

    #[test]
    fn test_configured_level_applies_when_verbose() {
        assert_eq!(effective_level(false, "debug"), LevelFilter::DEBUG);
        assert_eq!(effective_level(false, " WARN "), LevelFilter::WARN);
        assert_eq!(effective_level(false, "off"), LevelFilter::OFF);
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        assert_eq!(effective_level(false, "chatty"), LevelFilter::INFO);
        assert_eq!(effective_level(false, ""), LevelFilter::INFO);
    }
}
