//! Sonara CLI - Offline Equalizer
//!
//! Runs a WAV file through the 10-band equalizer the same way a playback
//! host would: chunk by chunk, with a fixed preset or explicit band gains.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use env_logger::Env;
use log::info;

use sonara::dsp::EqualizerProcessor;
use sonara::presets::{get_preset_bands, get_preset_by_name};
use sonara::wav;

/// Apply a 10-band equalizer to a stereo WAV file
#[derive(Parser)]
#[command(name = "sonara-cli", version)]
struct Cli {
    /// Input WAV file (stereo)
    input: PathBuf,

    /// Output WAV file (32-bit float)
    output: PathBuf,

    /// Preset name, e.g. rock, jazz, bass_boost (unknown names mean flat)
    #[arg(long, conflicts_with = "bands")]
    preset: Option<String>,

    /// Explicit band gains in dB as a JSON array of up to 10 values,
    /// e.g. '[5.0, 4.0, 3.0, 1.0, -1.0, 0.0, 2.0, 4.0, 5.0, 5.0]'
    #[arg(long)]
    bands: Option<String>,

    /// Frames per processing chunk, mirroring a playback callback
    #[arg(long, default_value_t = 1024)]
    chunk_frames: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let gains: Vec<f32> = if let Some(json) = &cli.bands {
        let gains: Vec<f32> =
            serde_json::from_str(json).context("parsing --bands as a JSON array of numbers")?;
        if gains.len() > 10 {
            bail!("--bands accepts at most 10 values, got {}", gains.len());
        }
        gains
    } else {
        let preset = get_preset_by_name(cli.preset.as_deref().unwrap_or("flat"));
        info!("using preset '{}'", preset.name());
        get_preset_bands(preset).to_vec()
    };

    if cli.chunk_frames == 0 {
        bail!("--chunk-frames must be at least 1");
    }

    let (samples, sample_rate) = wav::read_stereo(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    info!(
        "loaded {} frames at {} Hz",
        samples.len() / 2,
        sample_rate
    );

    let mut eq = EqualizerProcessor::new(sample_rate);
    eq.set_bands(&gains);
    eq.enabled = true;

    let mut output = Vec::with_capacity(samples.len());
    for chunk in samples.chunks(cli.chunk_frames * 2) {
        output.extend_from_slice(&eq.process(chunk.to_vec()));
    }

    wav::write_stereo(&cli.output, &output, sample_rate)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    info!("wrote {} frames to {}", output.len() / 2, cli.output.display());

    Ok(())
}
