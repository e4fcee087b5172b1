//! Watchface window lifecycle and rendering.
//!
//! The watchface is a single struct owning everything with window lifetime:
//! the computed [`Layout`] and the four display string buffers. The host
//! drives it through the [`WindowHandlers`] trait — load once, minute ticks
//! strictly between load and unload, unload once. No module-level state.
//!
//! # Update Strategy
//!
//! | Element  | Update Frequency | Strategy                      |
//! |----------|-----------------|--------------------------------|
//! | Layout   | Window load      | Computed once, never again    |
//! | Strings  | Every minute     | Rewritten in place            |
//! | Pixels   | Load + tick      | Full repaint (clear, divider, |
//! |          |                  | then text on top)             |
//!
//! A full repaint per minute is deliberately simple: four short strings and
//! three lines are nowhere near the cost that would justify dirty tracking.

use chrono::{NaiveDateTime, Timelike};
use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::Text,
};
use embedded_graphics_simulator::SimulatorDisplay;
use log::{debug, info};

use crate::{
    clock::{DisplayStrings, HostClock, format_time},
    colors::{BLACK, WHITE},
    layout::{Layout, compute_layout},
    styles::{CENTERED_MIDDLE, DAY_STYLE, DIGIT_STYLE_LARGE, DIGIT_STYLE_MEDIUM},
};

/// White 2px stroke for the three divider segments.
/// `PrimitiveStyle::with_stroke` is const fn, so this is computed at compile time.
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 2);

// =============================================================================
// Host Lifecycle Hooks
// =============================================================================

/// The three window callbacks the host invokes.
///
/// Invocation order is owned by the host: `on_load` exactly once, then any
/// number of `on_minute_tick` calls, then `on_unload` exactly once. The host
/// serializes all callbacks; nothing here is ever re-entered.
pub trait WindowHandlers {
    /// Window created: compute geometry and fill the initial text.
    fn on_load(&mut self, canvas: Rectangle);

    /// Window destroyed: drop geometry and display buffers.
    fn on_unload(&mut self);

    /// Minute boundary crossed: refresh text only, geometry is fixed.
    fn on_minute_tick(&mut self, now: NaiveDateTime);
}

// =============================================================================
// Watchface
// =============================================================================

/// One watchface window: layout plus display strings, keyed to a host clock.
///
/// `layout` doubles as the lifecycle state: `Some` while loaded, `None`
/// before load and after unload. Ticks outside the loaded state are ignored
/// (the host contract says they never arrive then; the guard keeps the
/// methods total anyway).
pub struct Watchface<C: HostClock> {
    clock: C,
    layout: Option<Layout>,
    strings: DisplayStrings,
}

impl<C: HostClock> Watchface<C> {
    /// Create an unloaded watchface bound to a host clock.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            layout: None,
            strings: DisplayStrings::default(),
        }
    }

    /// Whether the window is currently loaded (regions live, ticking).
    pub fn is_loaded(&self) -> bool {
        self.layout.is_some()
    }

    /// The current display strings (empty until loaded).
    pub fn strings(&self) -> &DisplayStrings {
        &self.strings
    }

    /// The computed layout, if loaded.
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Repaint the whole face: clear, divider beneath, text on top.
    ///
    /// Painter's-algorithm ordering matters: the vertical divider segment
    /// runs between the hour and minute regions and must not cut through
    /// glyphs drawn later. Draws nothing while unloaded.
    pub fn draw(&self, display: &mut SimulatorDisplay<Rgb565>) {
        let Some(layout) = &self.layout else {
            return;
        };

        display.clear(BLACK).ok();

        for (start, end) in [
            layout.divider.top_to_apex,
            layout.divider.apex_to_bottom_left,
            layout.divider.apex_to_bottom_right,
        ] {
            Line::new(start, end).into_styled(DIVIDER_STYLE).draw(display).ok();
        }

        Text::with_text_style(&self.strings.hour, layout.hour_region.center(), DIGIT_STYLE_LARGE, CENTERED_MIDDLE)
            .draw(display)
            .ok();
        Text::with_text_style(
            &self.strings.minute,
            layout.minute_region.center(),
            DIGIT_STYLE_LARGE,
            CENTERED_MIDDLE,
        )
        .draw(display)
        .ok();
        Text::with_text_style(&self.strings.date, layout.date_region.center(), DIGIT_STYLE_MEDIUM, CENTERED_MIDDLE)
            .draw(display)
            .ok();
        Text::with_text_style(&self.strings.day, layout.day_region.center(), DAY_STYLE, CENTERED_MIDDLE)
            .draw(display)
            .ok();
    }
}

impl<C: HostClock> WindowHandlers for Watchface<C> {
    fn on_load(&mut self, canvas: Rectangle) {
        self.layout = Some(compute_layout(canvas, crate::config::PADDING));
        // Eager first fill so the face never shows empty fields.
        self.strings = format_time(self.clock.now(), self.clock.is_24h_style());
        info!(
            "window loaded: canvas {}x{}, 24h={}",
            canvas.size.width,
            canvas.size.height,
            self.clock.is_24h_style()
        );
    }

    fn on_unload(&mut self) {
        self.layout = None;
        self.strings = DisplayStrings::default();
        info!("window unloaded");
    }

    fn on_minute_tick(&mut self, now: NaiveDateTime) {
        if !self.is_loaded() {
            return;
        }
        self.strings.update(now, self.clock.is_24h_style());
        debug!("minute tick: {:02}:{:02}", now.hour(), now.minute());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
