use super::WindowQuery;
use super::errors::WindowError;

/// Window query for builds without window system support.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullWindowQuery;

impl WindowQuery for NullWindowQuery {
    fn topmost_window_position(&self) -> Result<(i32, i32), WindowError> {
        Err(WindowError::Unsupported)
    }
}

/// Window query backed by `xcap` window enumeration.
#[cfg(feature = "xcap")]
#[derive(Debug, Default, Clone, Copy)]
pub struct XcapWindowQuery;

#[cfg(feature = "xcap")]
impl WindowQuery for XcapWindowQuery {
    fn topmost_window_position(&self) -> Result<(i32, i32), WindowError> {
        use tracing::{debug, info};

        let windows = xcap::Window::all().map_err(|e| WindowError::EnumerationFailed {
            message: e.to_string(),
        })?;

        let mut skipped_count = 0;
        let topmost = windows
            .iter()
            .filter_map(|w| match (w.z(), w.x(), w.y()) {
                (Ok(z), Ok(x), Ok(y)) => Some((z, x, y)),
                _ => {
                    skipped_count += 1;
                    None
                }
            })
            .max_by_key(|(z, _, _)| *z);

        if skipped_count > 0 {
            debug!(
                event = "core.window.property_access_failed",
                skipped = skipped_count
            );
        }

        let (_, x, y) = topmost.ok_or(WindowError::NoWindows)?;
        info!(event = "core.window.topmost_found", x = x, y = y);
        Ok((x, y))
    }
}
