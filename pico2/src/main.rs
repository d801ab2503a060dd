//! Diagnostics overlay firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Shows the debug/stats overlay on the Pimoroni PIM715 Display Pack 2.8".
//!
//! # Architecture
//!
//! Three priority levels:
//! - `SWI_IRQ_1` (P1): core tick every 60 us, ADC scan, measured into `isr_cycles`
//! - `SWI_IRQ_0` (P2): UI poll every 1 ms, button scan, measured into `ui_cycles`
//! - Thread mode: idle screen, debug menu and the display flush task
//!
//! # Button Controls
//!
//! - **X**: Open the debug menu (idle screen)
//! - **A**: Next debug page
//! - **B**: Leave the debug menu
//!
//! # Pins
//!
//! See `diag_pico2::config::pins`. CV1..CV3 share GPIO26..28 with the PIM715
//! RGB LED, which is left undriven.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the binary (not testable on host)
#[cfg(target_arch = "arm")]
mod display;
#[cfg(target_arch = "arm")]
mod overlay;
#[cfg(target_arch = "arm")]
mod queue;
#[cfg(target_arch = "arm")]
mod st7789;
#[cfg(target_arch = "arm")]
mod tasks;

#[cfg(target_arch = "arm")]
mod firmware {
    use defmt::info;
    use diag_common::analog::AnalogChannels;
    use diag_common::pages::{AdcPage, CorePage, GfxPage};
    use diag_common::{DebugStats, FrameCanvas, MenuEntry, Registry};
    use diag_pico2::MemPage;
    use diag_pico2::config::pins::{
        BUTTON_A_GPIO,
        BUTTON_B_GPIO,
        BUTTON_X_GPIO,
        BUTTON_Y_GPIO,
        CORE_TICK_DEBUG_GPIO,
        CV_GPIOS,
        DISPLAY_BACKLIGHT_GPIO,
        DISPLAY_CLK_GPIO,
        DISPLAY_CS_GPIO,
        DISPLAY_DC_GPIO,
        DISPLAY_MOSI_GPIO,
    };
    use diag_pico2::config::{CORE_TIMING, CPU_FREQ_HZ};
    use embassy_executor::{InterruptExecutor, Spawner};
    use embassy_rp::adc::{self, Adc};
    use embassy_rp::gpio::{Input, Level, Output, Pin, Pull};
    use embassy_rp::{Peri, interrupt};
    use embassy_rp::interrupt::{InterruptExt, Priority};
    use embassy_rp::spi::Spi;
    use static_cell::StaticCell;
    use {defmt_rtt as _, panic_probe as _};

    use crate::display::{FlushPresenter, OverlayCanvas, clear_framebuffer, display_spi_config};
    use crate::overlay::idle_loop;
    use crate::st7789::St7789Flusher;
    use crate::tasks::{ButtonPins, CoreTickIo, core_tick_task, display_flush_task, ui_poll_task};

    // =========================================================================
    // Executors
    // =========================================================================

    /// Core tick executor (highest priority).
    static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

    /// UI poll executor.
    static EXECUTOR_MED: InterruptExecutor = InterruptExecutor::new();

    #[interrupt]
    unsafe fn SWI_IRQ_1() {
        // SAFETY: the executor was started on this interrupt
        unsafe { EXECUTOR_HIGH.on_interrupt() }
    }

    #[interrupt]
    unsafe fn SWI_IRQ_0() {
        // SAFETY: the executor was started on this interrupt
        unsafe { EXECUTOR_MED.on_interrupt() }
    }

    // =========================================================================
    // Shared State
    // =========================================================================

    static STATS: StaticCell<DebugStats> = StaticCell::new();
    static ANALOG: StaticCell<AnalogChannels> = StaticCell::new();
    static FLUSHER: StaticCell<St7789Flusher<'static>> = StaticCell::new();

    /// Check a board pin against its entry in `config::pins`.
    fn wired<P: Pin>(
        pin: Peri<'static, P>,
        gpio: u8,
    ) -> Peri<'static, P> {
        defmt::assert_eq!(pin.pin(), gpio, "pin map out of date");
        pin
    }

    #[embassy_executor::main]
    async fn main(spawner: Spawner) {
        let p = embassy_rp::init(Default::default());

        // Enable DWT before anything is measured
        diag_pico2::init();
        info!("DWT cycle counter initialized at {} MHz", CPU_FREQ_HZ / 1_000_000);

        let stats: &'static DebugStats = STATS.init(DebugStats::new());
        let analog: &'static AnalogChannels = ANALOG.init(AnalogChannels::new());

        // Initialize display pins
        let cs = Output::new(wired(p.PIN_17, DISPLAY_CS_GPIO), Level::High);
        let dc = Output::new(wired(p.PIN_16, DISPLAY_DC_GPIO), Level::Low);
        let _backlight = Output::new(wired(p.PIN_20, DISPLAY_BACKLIGHT_GPIO), Level::High);

        // Async SPI with DMA (TX-only, display doesn't need MISO)
        let spi = Spi::new_txonly(
            p.SPI0,
            wired(p.PIN_18, DISPLAY_CLK_GPIO),
            wired(p.PIN_19, DISPLAY_MOSI_GPIO),
            p.DMA_CH0,
            display_spi_config(),
        );

        let mut flusher = St7789Flusher::new(spi, dc, cs);
        flusher.init().await;
        clear_framebuffer();
        info!("Display initialized");

        // Move flusher to static for task (Embassy tasks need 'static lifetime)
        let flusher: &'static mut St7789Flusher<'static> = FLUSHER.init(flusher);
        spawner.spawn(display_flush_task(flusher)).unwrap();
        info!("Display flush task spawned");

        // Core tick: ADC + debug pin, highest priority
        let io = CoreTickIo {
            adc: Adc::new_blocking(p.ADC, adc::Config::default()),
            inputs: [
                adc::Channel::new_pin(wired(p.PIN_26, CV_GPIOS[0]), Pull::None),
                adc::Channel::new_pin(wired(p.PIN_27, CV_GPIOS[1]), Pull::None),
                adc::Channel::new_pin(wired(p.PIN_28, CV_GPIOS[2]), Pull::None),
                adc::Channel::new_pin(wired(p.PIN_29, CV_GPIOS[3]), Pull::None),
            ],
            debug_pin: Output::new(wired(p.PIN_22, CORE_TICK_DEBUG_GPIO), Level::Low),
        };
        interrupt::SWI_IRQ_1.set_priority(Priority::P1);
        let high_spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
        high_spawner.spawn(core_tick_task(io, analog, stats)).unwrap();
        info!("Core tick spawned ({} us)", CORE_TIMING.core_period_us);

        // UI poll: buttons (active-low with internal pull-up)
        let pins = ButtonPins {
            a: Input::new(wired(p.PIN_12, BUTTON_A_GPIO), Pull::Up),
            b: Input::new(wired(p.PIN_13, BUTTON_B_GPIO), Pull::Up),
            x: Input::new(wired(p.PIN_14, BUTTON_X_GPIO), Pull::Up),
            y: Input::new(wired(p.PIN_15, BUTTON_Y_GPIO), Pull::Up),
        };
        interrupt::SWI_IRQ_0.set_priority(Priority::P2);
        let med_spawner = EXECUTOR_MED.start(interrupt::SWI_IRQ_0);
        med_spawner.spawn(ui_poll_task(pins, stats)).unwrap();
        info!("UI poll spawned ({} us)", CORE_TIMING.ui_period_us);

        // Debug pages
        let core_page = CorePage::new(stats, CORE_TIMING);
        let adc_page = AdcPage::new(analog);
        let entries = [
            MenuEntry::page(" CORE", &core_page),
            MenuEntry::page(" GFX", &GfxPage),
            MenuEntry::page(" ADC", &adc_page),
            MenuEntry::page(" MEM", &MemPage),
            MenuEntry::End,
        ];
        let registry = Registry::new(&entries);

        let mut canvas: OverlayCanvas = FrameCanvas::new(FlushPresenter);
        info!("Idle screen starting");
        idle_loop(&mut canvas, stats, registry).await
    }
}

// Host builds (cargo test --workspace) only need the library
#[cfg(not(target_arch = "arm"))]
fn main() {}
