//! Core tick: the highest priority periodic work.
//!
//! Runs every `CORE_TICK_US` on the `SWI_IRQ_1` interrupt executor. Each
//! tick converts one CV input (round-robin), so every channel is refreshed
//! every fourth tick. The tick body is bracketed by a cycle measurement
//! feeding `isr_cycles`, and the debug pin is high while it runs so the
//! load can be checked on a scope.

use diag_common::analog::{ADC_CHANNELS, AdcChannel, AnalogChannels};
use diag_common::{CycleMeasurement, DebugStats};
use diag_pico2::Dwt;
use diag_pico2::config::CORE_TICK_US;
use embassy_rp::adc::{self, Adc, Blocking};
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};

/// Peripherals owned by the core tick.
pub struct CoreTickIo {
    pub adc: Adc<'static, Blocking>,
    pub inputs: [adc::Channel<'static>; ADC_CHANNELS],
    pub debug_pin: Output<'static>,
}

#[embassy_executor::task]
pub async fn core_tick_task(
    mut io: CoreTickIo,
    analog: &'static AnalogChannels,
    stats: &'static DebugStats,
) {
    let mut ticker = Ticker::every(Duration::from_micros(u64::from(CORE_TICK_US)));
    let mut channel = AdcChannel::Cv1;

    loop {
        ticker.next().await;

        let measurement = CycleMeasurement::begin(&Dwt, &stats.isr_cycles);
        io.debug_pin.set_high();

        if let Ok(raw) = io.adc.blocking_read(&mut io.inputs[channel as usize]) {
            analog.update(channel, raw);
        }
        channel = channel.next();

        io.debug_pin.set_low();
        measurement.end();
    }
}
