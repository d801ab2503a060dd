//! Async tasks for the diagnostics firmware.
//!
//! - `tick`: Core tick, ADC scan (`SWI_IRQ_1`, highest priority)
//! - `ui`: Button scan and event dispatch (`SWI_IRQ_0`)
//! - `flush`: Display buffer flush task (thread mode, DMA transfers)

pub mod flush;
pub mod tick;
pub mod ui;

pub use flush::display_flush_task;
pub use tick::{CoreTickIo, core_tick_task};
pub use ui::{ButtonPins, ui_poll_task};
