//! Smoothed readings of the analog (CV) inputs.
//!
//! The core tick samples one channel per tick and feeds it here; the ADC
//! debug page reads the smoothed values.

use crate::smoothed::SmoothedValue;

/// Number of CV inputs.
pub const ADC_CHANNELS: usize = 4;

/// Smoothing window per channel.
pub const ADC_WINDOW: usize = 8;

/// Analog input channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    Cv1 = 0,
    Cv2 = 1,
    Cv3 = 2,
    Cv4 = 3,
}

impl AdcChannel {
    /// All channels in scan order.
    pub const ALL: [Self; ADC_CHANNELS] = [Self::Cv1, Self::Cv2, Self::Cv3, Self::Cv4];

    /// Next channel in round-robin scan order.
    pub const fn next(self) -> Self {
        match self {
            Self::Cv1 => Self::Cv2,
            Self::Cv2 => Self::Cv3,
            Self::Cv3 => Self::Cv4,
            Self::Cv4 => Self::Cv1,
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cv1 => "CV1: ",
            Self::Cv2 => "CV2: ",
            Self::Cv3 => "CV3: ",
            Self::Cv4 => "CV4: ",
        }
    }
}

/// Smoothed value per CV input. Single writer (the core tick).
pub struct AnalogChannels {
    channels: [SmoothedValue<u16, ADC_WINDOW>; ADC_CHANNELS],
}

impl AnalogChannels {
    pub const fn new() -> Self {
        Self {
            channels: [const { SmoothedValue::new() }; ADC_CHANNELS],
        }
    }

    /// Feed a raw conversion result for `channel`.
    #[inline]
    pub fn update(
        &self,
        channel: AdcChannel,
        raw: u16,
    ) {
        self.channels[channel as usize].update(raw);
    }

    /// Smoothed reading of `channel`.
    #[inline]
    pub fn value(
        &self,
        channel: AdcChannel,
    ) -> u16 {
        self.channels[channel as usize].value()
    }
}

impl Default for AnalogChannels {
    fn default() -> Self { Self::new() }
}
