//! CORE page: clock, core tick load and UI poll time.
//!
//! ```text
//! 1/3 CORE
//! F_CPU: 150MHz
//! CORE : 30/60us 50%
//! POLL :100us (1000us)
//! UI # : 12            (ui-stats)
//! UI ! : 0             (ui-stats)
//! ```

use core::fmt::Write;

use super::DebugPage;
use crate::config::{CoreTiming, TEXT_MARGIN, row};
use crate::convert::{CycleConverter, load_percent};
use crate::graphics::Graphics;
use crate::stats::DebugStats;

/// Timing overview page.
pub struct CorePage<'a> {
    stats: &'a DebugStats,
    timing: CoreTiming,
    converter: CycleConverter,
}

impl<'a> CorePage<'a> {
    pub const fn new(
        stats: &'a DebugStats,
        timing: CoreTiming,
    ) -> Self {
        Self {
            stats,
            timing,
            converter: CycleConverter::new(timing.clock_hz),
        }
    }
}

impl DebugPage for CorePage<'_> {
    fn render(
        &self,
        gfx: &mut dyn Graphics,
    ) {
        let core_period = self.timing.core_period_us;
        let isr_us = self.converter.to_micros(self.stats.isr_cycles.value());
        let ui_us = self.converter.to_micros(self.stats.ui_cycles.value());

        gfx.set_print_pos(TEXT_MARGIN, row(0));
        let _ = write!(gfx, "F_CPU: {}MHz", self.timing.clock_mhz());

        gfx.set_print_pos(TEXT_MARGIN, row(1));
        let _ = write!(
            gfx,
            "CORE :{:>3}/{}us {:>2}%",
            isr_us,
            core_period,
            load_percent(isr_us, core_period)
        );

        gfx.set_print_pos(TEXT_MARGIN, row(2));
        let _ = write!(gfx, "POLL :{:>3}us ({}us)", ui_us, self.timing.ui_period_us);

        #[cfg(feature = "ui-stats")]
        {
            gfx.set_print_pos(TEXT_MARGIN, row(3));
            let _ = write!(gfx, "UI # : {}", self.stats.events.event_count());
            gfx.set_print_pos(TEXT_MARGIN, row(4));
            let _ = write!(gfx, "UI ! : {}", self.stats.events.queue_overflow());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::recorder::Recorder;

    #[test]
    fn test_core_page_lines() {
        let stats = DebugStats::new();
        // 4560 cycles = 30.4 us, 15075 cycles = 100.5 us at 150 MHz
        stats.isr_cycles.update(4_560);
        stats.ui_cycles.update(15_075);

        let page = CorePage::new(&stats, CoreTiming::DEFAULT);
        let mut gfx = Recorder::new();
        page.render(&mut gfx);

        assert_eq!(gfx.text_at(2, 12), "F_CPU: 150MHz");
        assert_eq!(gfx.text_at(2, 22), "CORE : 30/60us 50%");
        assert_eq!(gfx.text_at(2, 32), "POLL :100us (1000us)");
    }

    #[test]
    fn test_core_page_before_samples() {
        let stats = DebugStats::new();
        let timing = CoreTiming {
            clock_hz: 120_000_000,
            core_period_us: 100,
            ui_period_us: 500,
        };
        let page = CorePage::new(&stats, timing);
        let mut gfx = Recorder::new();
        page.render(&mut gfx);

        assert_eq!(gfx.text_at(2, 12), "F_CPU: 120MHz");
        assert_eq!(gfx.text_at(2, 22), "CORE :  0/100us  0%");
        assert_eq!(gfx.text_at(2, 32), "POLL :  0us (500us)");
    }

    #[cfg(feature = "ui-stats")]
    #[test]
    fn test_core_page_event_counters() {
        let stats = DebugStats::new();
        stats.events.record_push(1);
        stats.events.record_push(1);
        stats.events.record_overflow();

        let page = CorePage::new(&stats, CoreTiming::DEFAULT);
        let mut gfx = Recorder::new();
        page.render(&mut gfx);

        assert_eq!(gfx.text_at(2, 42), "UI # : 2");
        assert_eq!(gfx.text_at(2, 52), "UI ! : 1");
    }
}
