//! Diagnostics overlay core for the RP2350 control firmware.
//!
//! Platform-agnostic pieces shared by the firmware and host tests:
//!
//! - [`smoothed`]: lock-free exponential smoother for single-writer samples
//! - [`cycles`]: cycle counter contract and scoped cycle measurement
//! - [`convert`]: fixed-point cycles to microseconds conversion
//! - [`stats`]: instrumented timing and event counters
//! - [`analog`]: smoothed CV input readings
//! - [`events`]: UI events and the event queue contract
//! - [`graphics`]: drawing surface contract used by pages
//! - [`canvas`]: 128x64 monochrome canvas over `embedded-graphics`
//! - [`pages`]: CORE, GFX and ADC debug pages
//! - [`registry`]: cyclable page list
//! - [`menu`]: debug menu controller
//! - [`config`]: overlay geometry and timing configuration
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p diag-common
//! cargo test -p diag-common --features ui-stats
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), the firmware uses the
//! crate as `no_std`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Must come first so the log macros are visible in every module
#[macro_use]
mod fmt;

pub mod analog;
pub mod canvas;
pub mod config;
pub mod convert;
pub mod cycles;
pub mod events;
pub mod graphics;
pub mod menu;
pub mod pages;
pub mod registry;
pub mod smoothed;
pub mod stats;

// Re-export commonly used items
pub use canvas::{FrameCanvas, MonoFrame, Present};
pub use config::CoreTiming;
pub use convert::{CycleConverter, cycles_to_microseconds};
pub use cycles::{CycleCounter, CycleMeasurement};
pub use events::{Control, Event, EventKind, EventQueue};
pub use graphics::Graphics;
pub use menu::{DebugMenu, MenuState};
pub use pages::DebugPage;
pub use registry::{MenuEntry, Registry};
pub use smoothed::SmoothedValue;
pub use stats::DebugStats;
