//! ADC page: smoothed CV input readings.

use super::DebugPage;
use crate::analog::{AdcChannel, AnalogChannels};
use crate::config::{TEXT_MARGIN, row};
use crate::graphics::Graphics;

const VALUE_WIDTH: usize = 6;

/// One line per CV input, `CVn:` label and right-aligned raw value.
pub struct AdcPage<'a> {
    adc: &'a AnalogChannels,
}

impl<'a> AdcPage<'a> {
    pub const fn new(adc: &'a AnalogChannels) -> Self { Self { adc } }
}

impl DebugPage for AdcPage<'_> {
    fn render(
        &self,
        gfx: &mut dyn Graphics,
    ) {
        for (i, channel) in AdcChannel::ALL.into_iter().enumerate() {
            gfx.set_print_pos(TEXT_MARGIN, row(i as i32));
            gfx.print(channel.label());
            gfx.pretty_print(i32::from(self.adc.value(channel)), VALUE_WIDTH);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::recorder::Recorder;

    #[test]
    fn test_adc_page_lines() {
        let adc = AnalogChannels::new();
        adc.update(AdcChannel::Cv1, 12);
        adc.update(AdcChannel::Cv3, 4095);

        let mut gfx = Recorder::new();
        AdcPage::new(&adc).render(&mut gfx);

        assert_eq!(gfx.text_at(2, 12), "CV1:     12");
        assert_eq!(gfx.text_at(2, 22), "CV2:      0");
        assert_eq!(gfx.text_at(2, 32), "CV3:   4095");
        assert_eq!(gfx.text_at(2, 42), "CV4:      0");
    }
}
