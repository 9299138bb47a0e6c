//! WAV import/export for the offline CLI
//!
//! Reads stereo WAV files into interleaved f32 and writes processed audio
//! back out as 32-bit float WAV. The equalizer core never touches files;
//! this layer exists so the crate can be exercised without a playback host.

use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::error::{EqError, Result};

/// Read a stereo WAV file as interleaved f32 samples.
///
/// Returns the samples and the file's sample rate. Integer formats are
/// normalized to [-1.0, 1.0); 32-bit float files pass through unchanged.
/// Non-stereo files are rejected; the equalizer core is stereo-only.
pub fn read_stereo(path: &Path) -> Result<(Vec<f32>, u32)> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();

    if spec.channels != 2 {
        return Err(EqError::UnsupportedFormat {
            format: format!("{}-channel audio (stereo required)", spec.channels),
        });
    }

    let samples = read_samples_as_f32(reader, spec.bits_per_sample, spec.sample_format)?;
    Ok((samples, spec.sample_rate))
}

/// Write interleaved stereo f32 samples as a 32-bit float WAV file
pub fn write_stereo(path: &Path, samples: &[f32], sample_rate: u32) -> Result<()> {
    let spec = WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Read samples from a WAV reader and convert to f32
fn read_samples_as_f32<R: std::io::Read>(
    mut reader: WavReader<R>,
    bits_per_sample: u16,
    sample_format: SampleFormat,
) -> Result<Vec<f32>> {
    match sample_format {
        SampleFormat::Float => Ok(reader
            .samples::<f32>()
            .collect::<std::result::Result<Vec<f32>, _>>()?),
        SampleFormat::Int => match bits_per_sample {
            16 => Ok(reader
                .samples::<i16>()
                .map(|s| s.map(|v| v as f32 / 32768.0))
                .collect::<std::result::Result<Vec<f32>, _>>()?),
            24 => Ok(reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / 8388608.0))
                .collect::<std::result::Result<Vec<f32>, _>>()?),
            32 => Ok(reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / 2147483648.0))
                .collect::<std::result::Result<Vec<f32>, _>>()?),
            other => Err(EqError::UnsupportedFormat {
                format: format!("{other}-bit integer audio (16, 24, 32 supported)"),
            }),
        },
    }
}
