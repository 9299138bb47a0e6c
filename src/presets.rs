//! Equalizer preset registry
//!
//! A static table of named 10-band gain curves plus the matching band
//! labels. The registry is plain data: it knows nothing about the DSP side
//! and is consumed by callers via `EqualizerProcessor::set_bands`.
//!
//! Gains are nominal for a -12..+12 dB UI range, but the table itself does
//! not enforce any range.

use serde::{Deserialize, Serialize};

/// Human-readable labels for the ten canonical bands, ascending
pub const EQ_BAND_LABELS: [&str; 10] = [
    "31Hz", "62Hz", "125Hz", "250Hz", "500Hz", "1kHz", "2kHz", "4kHz", "8kHz", "16kHz",
];

/// Named equalizer preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EqPreset {
    /// No adjustment
    #[default]
    Flat,
    /// Enhanced low and high ends
    Rock,
    /// Forward vocals and upper mids
    Pop,
    /// Warm low mids, soft top
    Jazz,
    /// Natural balance with a lift in high-frequency detail
    Classical,
    /// Strong bass and bright highs
    Electronic,
    /// Heavy bass emphasis
    HipHop,
    /// Natural and warm across the spectrum
    Acoustic,
    /// Midrange emphasis for voice
    Vocal,
    /// Low-end boost only
    BassBoost,
}

// Gain vectors in dB, one value per band:
// [31Hz, 62Hz, 125Hz, 250Hz, 500Hz, 1kHz, 2kHz, 4kHz, 8kHz, 16kHz]
const FLAT: [f32; 10] = [0.0; 10];
const ROCK: [f32; 10] = [5.0, 4.0, 3.0, 1.0, -1.0, 0.0, 2.0, 4.0, 5.0, 5.0];
const POP: [f32; 10] = [-2.0, -1.0, 0.0, 2.0, 4.0, 4.0, 3.0, 1.0, 0.0, -1.0];
const JAZZ: [f32; 10] = [3.0, 2.0, 1.0, 2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0];
const CLASSICAL: [f32; 10] = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 2.0, 3.0, 4.0];
const ELECTRONIC: [f32; 10] = [6.0, 5.0, 2.0, 0.0, -2.0, 0.0, 1.0, 3.0, 5.0, 6.0];
const HIP_HOP: [f32; 10] = [7.0, 6.0, 4.0, 2.0, 1.0, 0.0, 1.0, 2.0, 2.0, 3.0];
const ACOUSTIC: [f32; 10] = [3.0, 2.0, 1.0, 1.0, 2.0, 1.0, 2.0, 3.0, 2.0, 2.0];
const VOCAL: [f32; 10] = [-3.0, -2.0, 0.0, 3.0, 5.0, 5.0, 4.0, 2.0, 0.0, -2.0];
const BASS_BOOST: [f32; 10] = [8.0, 7.0, 5.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];

impl EqPreset {
    /// Canonical lowercase identifier, the same string `from_name` accepts
    pub fn name(self) -> &'static str {
        match self {
            EqPreset::Flat => "flat",
            EqPreset::Rock => "rock",
            EqPreset::Pop => "pop",
            EqPreset::Jazz => "jazz",
            EqPreset::Classical => "classical",
            EqPreset::Electronic => "electronic",
            EqPreset::HipHop => "hip_hop",
            EqPreset::Acoustic => "acoustic",
            EqPreset::Vocal => "vocal",
            EqPreset::BassBoost => "bass_boost",
        }
    }
}

/// Gain vector for a preset, in dB per band
pub fn get_preset_bands(preset: EqPreset) -> [f32; 10] {
    match preset {
        EqPreset::Flat => FLAT,
        EqPreset::Rock => ROCK,
        EqPreset::Pop => POP,
        EqPreset::Jazz => JAZZ,
        EqPreset::Classical => CLASSICAL,
        EqPreset::Electronic => ELECTRONIC,
        EqPreset::HipHop => HIP_HOP,
        EqPreset::Acoustic => ACOUSTIC,
        EqPreset::Vocal => VOCAL,
        EqPreset::BassBoost => BASS_BOOST,
    }
}

/// Look up a preset by name, case-insensitively.
///
/// Unknown or empty names fall back to [`EqPreset::Flat`]; this never fails.
pub fn get_preset_by_name(name: &str) -> EqPreset {
    match name.trim().to_ascii_lowercase().as_str() {
        "flat" => EqPreset::Flat,
        "rock" => EqPreset::Rock,
        "pop" => EqPreset::Pop,
        "jazz" => EqPreset::Jazz,
        "classical" => EqPreset::Classical,
        "electronic" => EqPreset::Electronic,
        "hip_hop" => EqPreset::HipHop,
        "acoustic" => EqPreset::Acoustic,
        "vocal" => EqPreset::Vocal,
        "bass_boost" => EqPreset::BassBoost,
        _ => EqPreset::Flat,
    }
}
