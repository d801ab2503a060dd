//! GPIO map for the Pico 2 with the Pimoroni PIM715 Display Pack 2.8".
//!
//! `main` takes each pin from the embassy peripherals and checks it
//! against this map at start-up.

// =============================================================================
// Display (SPI0)
// =============================================================================

pub const DISPLAY_DC_GPIO: u8 = 16;
pub const DISPLAY_CS_GPIO: u8 = 17;
pub const DISPLAY_CLK_GPIO: u8 = 18;
pub const DISPLAY_MOSI_GPIO: u8 = 19;
pub const DISPLAY_BACKLIGHT_GPIO: u8 = 20;

// =============================================================================
// Buttons (active-low, internal pull-up)
// =============================================================================

/// A: next debug page.
pub const BUTTON_A_GPIO: u8 = 12;
/// B: leave the debug menu.
pub const BUTTON_B_GPIO: u8 = 13;
/// X: open the debug menu.
pub const BUTTON_X_GPIO: u8 = 14;
pub const BUTTON_Y_GPIO: u8 = 15;

// =============================================================================
// Analog inputs and debug output
// =============================================================================

/// CV1..CV4 on ADC0..ADC3. CV1..CV3 share GPIO26..28 with the RGB LED.
pub const CV_GPIOS: [u8; 4] = [26, 27, 28, 29];

/// Driven high for the duration of each core tick.
pub const CORE_TICK_DEBUG_GPIO: u8 = 22;

/// Every GPIO the firmware claims.
pub const ALL_GPIOS: [u8; 14] = [
    DISPLAY_DC_GPIO,
    DISPLAY_CS_GPIO,
    DISPLAY_CLK_GPIO,
    DISPLAY_MOSI_GPIO,
    DISPLAY_BACKLIGHT_GPIO,
    BUTTON_A_GPIO,
    BUTTON_B_GPIO,
    BUTTON_X_GPIO,
    BUTTON_Y_GPIO,
    CV_GPIOS[0],
    CV_GPIOS[1],
    CV_GPIOS[2],
    CV_GPIOS[3],
    CORE_TICK_DEBUG_GPIO,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_gpio_claimed_twice() {
        for (i, a) in ALL_GPIOS.iter().enumerate() {
            for b in &ALL_GPIOS[i + 1..] {
                assert_ne!(a, b, "GPIO{a} assigned twice");
            }
        }
    }

    #[test]
    fn test_cv_inputs_are_adc_capable() {
        // RP2350A exposes ADC0..ADC3 on GPIO26..29
        for (channel, gpio) in CV_GPIOS.iter().enumerate() {
            assert_eq!(*gpio, 26 + channel as u8);
        }
    }
}
