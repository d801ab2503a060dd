//! Diagnostics library - testable modules for the RP2350 firmware.
//!
//! This library contains the board logic that can be tested on the host machine.
//! The binary (`main.rs`) uses this library and adds the embedded-specific code.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p diag-pico2 --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test -p diag-pico2 --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// === Pure logic modules (testable on host, no ARM dependencies) ===

pub mod button;
pub mod config;
pub mod framebuffer;
pub mod idle;
pub mod profiling;

pub use profiling::{Dwt, MemPage, MemoryStats};

/// Board-level initialization of the diagnostics support.
///
/// Enables the DWT cycle counter. Call once after `embassy_rp::init()` and
/// before any measurement or debug menu invocation.
pub fn init() { profiling::init(); }

#[cfg(test)]
pub(crate) mod tests {
    use core::fmt::{self, Write};

    use diag_common::Graphics;

    /// Graphics surface keeping one text line per cursor move.
    #[derive(Default)]
    pub(crate) struct TextLines {
        pub(crate) lines: Vec<(i32, i32, String)>,
    }

    impl TextLines {
        pub(crate) fn line_at(
            &self,
            x: i32,
            y: i32,
        ) -> Option<&str> {
            self.lines
                .iter()
                .rev()
                .find(|(lx, ly, _)| *lx == x && *ly == y)
                .map(|(_, _, text)| text.as_str())
        }
    }

    impl Write for TextLines {
        fn write_str(
            &mut self,
            s: &str,
        ) -> fmt::Result {
            match self.lines.last_mut() {
                Some((_, _, text)) => text.push_str(s),
                None => self.lines.push((0, 0, s.into())),
            }
            Ok(())
        }
    }

    impl Graphics for TextLines {
        fn begin_frame(
            &mut self,
            _wait: bool,
        ) {
            self.lines.clear();
        }

        fn end_frame(&mut self) {}

        fn set_print_pos(
            &mut self,
            x: i32,
            y: i32,
        ) {
            self.lines.push((x, y, String::new()));
        }

        fn draw_frame(
            &mut self,
            _x: i32,
            _y: i32,
            _w: u32,
            _h: u32,
        ) {
        }
    }
}
