//! UI poll: button scan and event dispatch.
//!
//! Runs every `UI_POLL_US` on the `SWI_IRQ_0` interrupt executor, below the
//! core tick. Completed presses go to the event channel; the scan is
//! measured into `ui_cycles`.

use diag_common::{Control, CycleMeasurement, DebugStats};
use diag_pico2::Dwt;
use diag_pico2::button::Button;
use diag_pico2::config::UI_POLL_US;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Instant, Ticker};

use crate::queue::try_send_event;

/// PIM715 buttons (active-low with internal pull-up).
pub struct ButtonPins {
    pub a: Input<'static>,
    pub b: Input<'static>,
    pub x: Input<'static>,
    pub y: Input<'static>,
}

#[embassy_executor::task]
pub async fn ui_poll_task(
    pins: ButtonPins,
    stats: &'static DebugStats,
) {
    // A: next page, B: back, X: open debug menu
    let mut buttons = [
        (pins.a, Button::new(Control::ButtonL)),
        (pins.b, Button::new(Control::ButtonR)),
        (pins.x, Button::new(Control::ButtonUp)),
        (pins.y, Button::new(Control::ButtonDown)),
    ];
    let mut ticker = Ticker::every(Duration::from_micros(u64::from(UI_POLL_US)));

    loop {
        ticker.next().await;

        let measurement = CycleMeasurement::begin(&Dwt, &stats.ui_cycles);
        let now_ms = Instant::now().as_millis();
        for (pin, button) in &mut buttons {
            if let Some(event) = button.poll(pin.is_low(), now_ms) {
                try_send_event(event, &stats.events);
            }
        }
        measurement.end();
    }
}
