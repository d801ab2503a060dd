//! Button debounce and press classification.
//!
//! Provides time-based edge detection with debouncing to prevent
//! multiple triggers from contact bounce on physical buttons. A press is
//! reported when the button is released, unless it was held long enough to
//! be reported as a long press while still down.
//!
//! Time is passed in as milliseconds so the logic runs on the host too.

use diag_common::{Control, Event};

use crate::config::{DEBOUNCE_MS, LONG_PRESS_MS};

/// Button debounce state with time-based edge detection.
pub struct ButtonState {
    pressed: bool,
    last_change_ms: Option<u64>,
    pressed_at_ms: u64,
    long_sent: bool,
}

/// Result of one button scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Press {
    /// Released before the long press threshold.
    Short,
    /// Held for [`LONG_PRESS_MS`].
    Long,
}

impl ButtonState {
    /// Create a new button state (not pressed).
    pub const fn new() -> Self {
        Self {
            pressed: false,
            last_change_ms: None,
            pressed_at_ms: 0,
            long_sent: false,
        }
    }

    /// Whether the debounced state is "pressed".
    #[inline]
    pub const fn is_pressed(&self) -> bool { self.pressed }

    /// Feed the raw pin level at `now_ms`.
    ///
    /// Buttons are active-low, so `is_low` means pressed.
    pub fn update(
        &mut self,
        is_low: bool,
        now_ms: u64,
    ) -> Option<Press> {
        if is_low != self.pressed {
            // Apply debounce: only accept change if enough time has passed
            if let Some(last) = self.last_change_ms
                && now_ms.saturating_sub(last) < DEBOUNCE_MS
            {
                return None;
            }

            self.pressed = is_low;
            self.last_change_ms = Some(now_ms);

            if is_low {
                self.pressed_at_ms = now_ms;
                self.long_sent = false;
                return None;
            }
            return (!self.long_sent).then_some(Press::Short);
        }

        if self.pressed && !self.long_sent && now_ms.saturating_sub(self.pressed_at_ms) >= LONG_PRESS_MS {
            self.long_sent = true;
            return Some(Press::Long);
        }

        None
    }
}

impl Default for ButtonState {
    fn default() -> Self { Self::new() }
}

/// A debounced button bound to the control it reports as.
pub struct Button {
    control: Control,
    state: ButtonState,
}

impl Button {
    pub const fn new(control: Control) -> Self {
        Self {
            control,
            state: ButtonState::new(),
        }
    }

    #[inline]
    pub const fn control(&self) -> Control { self.control }

    /// Scan the pin and turn a completed press into an event.
    pub fn poll(
        &mut self,
        is_low: bool,
        now_ms: u64,
    ) -> Option<Event> {
        self.state.update(is_low, now_ms).map(|press| match press {
            Press::Short => Event::press(self.control),
            Press::Long => Event::long_press(self.control),
        })
    }
}
