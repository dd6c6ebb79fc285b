#![deny(clippy::all)]
#![forbid(unsafe_code)]

use winit::dpi::{LogicalPosition, LogicalSize, PhysicalSize};
use winit::error::OsError;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

/// Used when the monitor size can't be queried.
pub const FALLBACK_WIDTH: f64 = 1280.0;
pub const FALLBACK_HEIGHT: f64 = 720.0;

/// Share of the monitor the window covers on startup.
const MONITOR_FRACTION: f64 = 2.0 / 3.0;

/// Create a window covering most of the current monitor.
///
/// Returns the window, the inner size it ended up with in physical pixels and
/// the hidpi factor.
/// The window starts hidden so it can be measured and centered before it is shown.
pub fn create_window(
    title: &str,
    event_loop: &EventLoop<()>,
) -> Result<(Window, u32, u32, f64), OsError> {
    let window = WindowBuilder::new()
        .with_visible(false)
        .with_title(title)
        .build(event_loop)?;
    let hidpi_factor = window.scale_factor();

    let (monitor_width, monitor_height) = match window.current_monitor() {
        Some(monitor) => {
            let size: LogicalSize<f64> = monitor.size().to_logical(hidpi_factor);
            (size.width, size.height)
        }
        None => (FALLBACK_WIDTH, FALLBACK_HEIGHT),
    };

    let width = (monitor_width * MONITOR_FRACTION).floor();
    let height = (monitor_height * MONITOR_FRACTION).floor();
    let default_size = LogicalSize::new(width, height);
    let center = LogicalPosition::new(
        (monitor_width - width) / 2.0,
        (monitor_height - height) / 2.0,
    );
    window.set_inner_size(default_size);
    window.set_outer_position(center);
    window.set_visible(true);

    let requested: PhysicalSize<f64> = default_size.to_physical(hidpi_factor);
    let (width, height) = surface_size(window.inner_size(), requested);

    Ok((window, width, height, hidpi_factor))
}

/// The inner size the window manager actually gave us, or the requested
/// size while the window still reports no area.
pub fn surface_size(actual: PhysicalSize<u32>, requested: PhysicalSize<f64>) -> (u32, u32) {
    if actual.width > 0 && actual.height > 0 {
        (actual.width, actual.height)
    } else {
        (
            requested.width.round() as u32,
            requested.height.round() as u32,
        )
    }
}
