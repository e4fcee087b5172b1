//! Pre-computed static text styles to avoid per-tick object construction.
//!
//! # Optimization: Static Style Constants
//!
//! `MonoTextStyle` and `TextStyle` construction is cheap but pointless to
//! repeat once per minute for styles that never change. All four fields use
//! fixed fonts and a fixed color, so every style lives in the binary's
//! read-only data section as a `const`.
//!
//! # Font Hierarchy
//!
//! The original face uses three font sizes: very large digits for hour and
//! minute, large digits for the date, and a smaller face for the weekday
//! word. Mapped onto the mono fonts available here:
//!
//! | Field       | Font              |
//! |-------------|-------------------|
//! | hour/minute | `ProFont` 24pt    |
//! | date        | `ProFont` 18pt    |
//! | day         | `FONT_10X20`      |

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_10X20},
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::WHITE;

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered on both axes. Every field draws from its region's center point,
/// so the alignment is horizontal-center plus middle baseline.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Large white digits for the hour and minute fields (`ProFont` 24pt).
pub const DIGIT_STYLE_LARGE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

/// Medium white digits for the day-of-month field (`ProFont` 18pt).
pub const DIGIT_STYLE_MEDIUM: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);

/// White text for the weekday abbreviation (10x20 pixels).
pub const DAY_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);
