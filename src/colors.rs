//! Color constants for the watchface.
//!
//! The face is strictly monochrome: white divider and text on a black
//! background. The `embedded_graphics` `RgbColor` trait provides the optimal
//! constant values for both, so no manual `Rgb565::new(r, g, b)` construction
//! is needed.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0). Window background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Divider stroke and all four text fields.
pub const WHITE: Rgb565 = Rgb565::WHITE;
