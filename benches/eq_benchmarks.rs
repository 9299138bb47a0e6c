//! Equalizer Benchmarks
//!
//! Performance of the cascade hot path over a 10-second stereo buffer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sonara::dsp::EqualizerProcessor;
use sonara::presets::{get_preset_bands, EqPreset};

fn stereo_sine(frequency: f64, sample_rate: f64, duration_secs: f64) -> Vec<f32> {
    let frames = (sample_rate * duration_secs) as usize;
    let mut samples = Vec::with_capacity(frames * 2);
    for i in 0..frames {
        let t = i as f64 / sample_rate;
        let value = (2.0 * std::f64::consts::PI * frequency * t).sin() as f32;
        samples.push(value);
        samples.push(value);
    }
    samples
}

fn benchmark_flat_bypass(c: &mut Criterion) {
    let buffer = stereo_sine(440.0, 44100.0, 10.0);
    let mut eq = EqualizerProcessor::new(44100);
    eq.enabled = true;

    c.bench_function("eq_flat_bypass_10s", |b| {
        b.iter(|| eq.process(black_box(buffer.clone())))
    });
}

fn benchmark_rock_preset(c: &mut Criterion) {
    let buffer = stereo_sine(440.0, 44100.0, 10.0);
    let mut eq = EqualizerProcessor::new(44100);
    eq.set_bands(&get_preset_bands(EqPreset::Rock));
    eq.enabled = true;

    c.bench_function("eq_rock_preset_10s", |b| {
        b.iter(|| eq.process(black_box(buffer.clone())))
    });
}

fn benchmark_single_band(c: &mut Criterion) {
    let buffer = stereo_sine(440.0, 44100.0, 10.0);
    let mut eq = EqualizerProcessor::new(44100);
    eq.set_bands(&[0.0, 0.0, 0.0, 0.0, 0.0, 6.0, 0.0, 0.0, 0.0, 0.0]);
    eq.enabled = true;

    c.bench_function("eq_single_band_10s", |b| {
        b.iter(|| eq.process(black_box(buffer.clone())))
    });
}

criterion_group!(
    benches,
    benchmark_flat_bypass,
    benchmark_rock_preset,
    benchmark_single_band
);
criterion_main!(benches);
