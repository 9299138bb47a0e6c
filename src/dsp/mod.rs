//! Equalizer DSP core
//!
//! A fixed bank of ten cascaded peaking biquads over interleaved stereo
//! audio. `BiquadFilter` is the per-band leaf; `EqualizerProcessor` owns the
//! bank and the cascade.

mod biquad;
mod equalizer;

pub use biquad::{BiquadFilter, DEFAULT_Q};
pub use equalizer::{EqualizerProcessor, EQ_FREQUENCIES, NUM_BANDS};
