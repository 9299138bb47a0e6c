//! 10-band equalizer processor
//!
//! Cascades one peaking biquad per band over interleaved stereo audio.
//! The band layout is fixed: ten filters at the canonical graphic-EQ center
//! frequencies, always in ascending order.

use log::debug;

use super::biquad::BiquadFilter;

/// Number of equalizer bands
pub const NUM_BANDS: usize = 10;

/// Canonical band center frequencies (Hz), ascending
pub const EQ_FREQUENCIES: [f32; NUM_BANDS] = [
    31.0, 62.0, 125.0, 250.0, 500.0, 1000.0, 2000.0, 4000.0, 8000.0, 16000.0,
];

/// 10-band graphic equalizer for interleaved stereo audio.
///
/// Owns its filter bank outright; intended to be driven from a single audio
/// thread. Control operations (`set_bands`, `set_sample_rate`, `enabled`,
/// `reset`) perform no internal synchronization, so a caller that mutates
/// the processor while `process` runs on another thread must serialize
/// access externally.
#[derive(Debug, Clone)]
pub struct EqualizerProcessor {
    sample_rate: u32,
    /// When false, `process` is a pass-through
    pub enabled: bool,
    filters: [BiquadFilter; NUM_BANDS],
}

impl EqualizerProcessor {
    /// Create a processor with all bands at 0 dB, disabled
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            enabled: false,
            filters: Self::build_filters(sample_rate),
        }
    }

    fn build_filters(sample_rate: u32) -> [BiquadFilter; NUM_BANDS] {
        std::array::from_fn(|i| BiquadFilter::new(sample_rate, EQ_FREQUENCIES[i], 0.0))
    }

    /// Sample rate the filter bank is currently built for
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Current gain of every band in dB, ascending frequency order
    pub fn band_gains(&self) -> [f32; NUM_BANDS] {
        std::array::from_fn(|i| self.filters[i].gain_db())
    }

    /// Apply per-band gains in dB.
    ///
    /// `gains[i]` goes to band `i`. Values beyond the tenth are ignored;
    /// when fewer than ten are supplied the remaining bands keep their
    /// current gain.
    pub fn set_bands(&mut self, gains: &[f32]) {
        for (filter, &gain) in self.filters.iter_mut().zip(gains) {
            filter.set_gain(gain);
        }
    }

    /// Rebuild the filter bank for a new sample rate.
    ///
    /// No-op when the rate is unchanged. Gains carry over; all filter
    /// history is discarded with the old bank, so there is no continuity of
    /// IIR state across a rate change.
    pub fn set_sample_rate(&mut self, sample_rate: u32) {
        if self.sample_rate == sample_rate {
            return;
        }
        debug!(
            "rebuilding equalizer bank: {} Hz -> {} Hz",
            self.sample_rate, sample_rate
        );
        let gains = self.band_gains();
        self.sample_rate = sample_rate;
        self.filters = Self::build_filters(sample_rate);
        self.set_bands(&gains);
    }

    /// Run the buffer through the cascade.
    ///
    /// Disabled, or with every band at exactly 0 dB, the input vector is
    /// returned untouched. Bands at 0 dB are skipped entirely rather than
    /// left to their own bypass, avoiding a spurious allocation per
    /// transparent band.
    pub fn process(&mut self, samples: Vec<f32>) -> Vec<f32> {
        if !self.enabled {
            return samples;
        }

        let mut result = samples;
        for filter in &mut self.filters {
            if filter.gain_db() != 0.0 {
                result = filter.process_stereo(result);
            }
        }
        result
    }

    /// Clear the history of every band; coefficients are untouched
    pub fn reset(&mut self) {
        for filter in &mut self.filters {
            filter.reset();
        }
    }
}

impl Default for EqualizerProcessor {
    fn default() -> Self {
        Self::new(44100)
    }
}
