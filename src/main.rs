// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional u32->i32 casts for pixel math
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges

//! Triangle watchface simulator.
//!
//! A digital watchface on a 180x180 display: hour and minute in large digits
//! on either side of a Y-shaped divider, date and weekday stacked in the
//! lower triangle the divider forms.
//!
//! ```text
//! ┌─────────┬─────────┐
//! │   10    │   30    │
//! ├────── apex ───────┤   60% height
//! │ \      07       / │
//! │   \    Sun    /   │
//! └───────────────────┘
//! ```
//!
//! # Architecture
//!
//! The crate splits into a host side and a watchface side, mirroring a watch
//! platform's window model:
//!
//! - **Host** (this module): owns the simulator window and event loop,
//!   delivers `on_load` once at startup, derives minute ticks by polling the
//!   wall clock, and maps the window's quit event to `on_unload`. Callbacks
//!   are serialized by construction — one thread, one loop, at most one
//!   pending tick.
//! - **Watchface** ([`watchface`]): implements the three [`WindowHandlers`]
//!   hooks. Geometry ([`layout`]) is computed once per load; text
//!   ([`clock`]) is rewritten in place once per minute.
//!
//! The display only changes on minute boundaries, so there is no frame loop:
//! the host repaints exactly when a tick fires.
//!
//! # Display Preference
//!
//! Hours render in 24-hour style by default; set `WATCHFACE_12H` to get
//! 12-hour style (leading zero stripped, midnight reads "12"). This stands
//! in for the platform's locale query.

mod clock;
mod colors;
mod config;
mod layout;
mod styles;
mod watchface;

use std::thread;

use chrono::Timelike;
use clock::{HostClock, SystemClock};
use config::{SCREEN_HEIGHT, SCREEN_WIDTH, TICK_POLL};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use watchface::{Watchface, WindowHandlers};

fn main() {
    env_logger::init();

    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Triangle Watchface", &output_settings);

    let clock = SystemClock::from_env();
    let mut face = Watchface::new(clock);

    // Window load: compute geometry once and paint the initial time eagerly,
    // so the face never appears with empty fields.
    face.on_load(display.bounding_box());
    face.draw(&mut display);
    window.update(&display);

    // ==========================================================================
    // Host Event Loop
    // ==========================================================================
    //
    // Minute-aligned tick service: poll the wall clock at a coarse interval
    // and deliver one tick per minute boundary. At most one tick is ever
    // pending; the loop is the serializer the host contract promises.

    let mut last_minute = clock.now().minute();

    'running: loop {
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                _ => {}
            }
        }

        let now = clock.now();
        if now.minute() != last_minute {
            last_minute = now.minute();
            face.on_minute_tick(now);
            face.draw(&mut display);
        }

        window.update(&display);
        thread::sleep(TICK_POLL);
    }

    // Window teardown: regions and display strings die together.
    face.on_unload();
}
