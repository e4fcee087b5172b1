//! Watchface configuration constants.
//!
//! Canvas geometry is fixed for the simulator target. Everything derived
//! from it (midline, apex, regions) is computed by [`crate::layout`] from
//! the canvas the host hands to `on_load`, so the layout code works for any
//! display size even though only one is ever created here.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (round-watch geometry: 180x180).
pub const SCREEN_WIDTH: u32 = 180;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 180;

/// Padding between the canvas edge, the divider, and each text region.
pub const PADDING: i32 = 12;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Wall-clock poll interval for the host loop. The display only changes once
/// per minute, so a coarse poll is plenty; 200 ms keeps the window responsive
/// to quit events without busy-spinning.
pub const TICK_POLL: Duration = Duration::from_millis(200);
