use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use tracing::debug;

use crate::settings::{MagnifierSettings, Shape};

/// Build the helper's argument vector from settings.
///
/// Element 0 is the program. Flag order is fixed:
/// shape (`-c W` or `-r W H`), `-z Z`, `-s X Y` when static, then `-m`, `-t`
/// and `-f` for the enabled tracking and filter options. The static position
/// is floored at zero here as well, so a stale negative coordinate never
/// reaches the helper.
pub fn build_helper_argv(program: &str, settings: &MagnifierSettings) -> Vec<String> {
    let mut argv = vec![program.to_string()];

    match settings.shape {
        Shape::Circle => {
            argv.push("-c".to_string());
            argv.push(settings.width.to_string());
        }
        Shape::Rectangle => {
            argv.push("-r".to_string());
            argv.push(settings.width.to_string());
            argv.push(settings.height.to_string());
        }
    }

    argv.push("-z".to_string());
    argv.push(settings.zoom.to_string());

    if settings.static_window {
        argv.push("-s".to_string());
        argv.push(settings.x.max(0).to_string());
        argv.push(settings.y.max(0).to_string());
    }

    if settings.follow_focus {
        argv.push("-m".to_string());
    }
    if settings.follow_text_cursor {
        argv.push("-t".to_string());
    }
    if settings.bilinear_filter {
        argv.push("-f".to_string());
    }

    argv
}

/// Check whether the helper program can be launched.
///
/// A program containing a path separator must be an existing executable
/// file. A bare name is looked up on `PATH`.
pub fn helper_available(program: &str) -> bool {
    if program.is_empty() {
        return false;
    }

    if !program.contains('/') {
        let found = which::which(program).is_ok();
        debug!(
            event = "core.process.helper_lookup",
            program = program,
            found = found
        );
        return found;
    }

    match Path::new(program).metadata() {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(e) => {
            debug!(
                event = "core.process.helper_missing",
                program = program,
                error = %e
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_circle_minimal_argv() {
        let settings = MagnifierSettings {
            shape: Shape::Circle,
            width: 350,
            zoom: 2,
            static_window: false,
            follow_focus: false,
            follow_text_cursor: false,
            bilinear_filter: false,
            ..MagnifierSettings::default()
        };
        assert_eq!(
            build_helper_argv("mage", &settings),
            vec!["mage", "-c", "350", "-z", "2"]
        );
    }

    #[test]
    fn test_rectangle_static_follow_focus_argv() {
        let settings = MagnifierSettings {
            shape: Shape::Rectangle,
            width: 400,
            height: 200,
            zoom: 4,
            static_window: true,
            x: -5,
            y: 10,
            follow_focus: true,
            ..MagnifierSettings::default()
        };
        assert_eq!(
            build_helper_argv("mage", &settings),
            vec![
                "mage", "-r", "400", "200", "-z", "4", "-s", "0", "10", "-m"
            ]
        );
    }

    #[test]
    fn test_all_flags_in_order() {
        let settings = MagnifierSettings {
            shape: Shape::Circle,
            width: 200,
            zoom: 8,
            static_window: true,
            x: 30,
            y: 40,
            follow_focus: true,
            follow_text_cursor: true,
            bilinear_filter: true,
            ..MagnifierSettings::default()
        };
        assert_eq!(
            build_helper_argv("/usr/bin/mage", &settings),
            vec![
                "/usr/bin/mage",
                "-c",
                "200",
                "-z",
                "8",
                "-s",
                "30",
                "40",
                "-m",
                "-t",
                "-f"
            ]
        );
    }

    #[test]
    fn test_position_ignored_without_static_window() {
        let settings = MagnifierSettings {
            static_window: false,
            x: 100,
            y: 100,
            ..MagnifierSettings::default()
        };
        let argv = build_helper_argv("mage", &settings);
        assert!(!argv.contains(&"-s".to_string()));
    }

    #[test]
    fn test_argv_is_deterministic() {
        let settings = MagnifierSettings {
            follow_text_cursor: true,
            ..MagnifierSettings::default()
        };
        assert_eq!(
            build_helper_argv("mage", &settings),
            build_helper_argv("mage", &settings)
        );
    }

    #[test]
    fn test_helper_available_for_paths() {
        let dir = tempfile::tempdir().unwrap();

        let script = dir.path().join("helper.sh");
        fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(helper_available(script.to_str().unwrap()));

        let not_executable = dir.path().join("plain.txt");
        fs::write(&not_executable, "data").unwrap();
        fs::set_permissions(&not_executable, fs::Permissions::from_mode(0o644)).unwrap();
        assert!(!helper_available(not_executable.to_str().unwrap()));

        assert!(!helper_available(dir.path().to_str().unwrap()));
        assert!(!helper_available("/nonexistent/loupe-helper"));
        assert!(!helper_available(""));
    }

    #[test]
    fn test_helper_available_on_path() {
        assert!(helper_available("sh"));
        assert!(!helper_available("loupe-definitely-not-installed-helper"));
    }
}
