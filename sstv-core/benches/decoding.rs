use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sstv_core::modes::lookup_mode;
use sstv_core::raster::demodulate_raster;
use sstv_core::sample::SampleStream;
use sstv_core::spectrum::{peak_frequency, FrequencyEstimator};
use std::f64::consts::TAU;

fn tone(freq: f64, sample_rate: u32, n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| (TAU * freq * i as f64 / sample_rate as f64).sin())
        .collect()
}

fn benchmark_peak_frequency(c: &mut Criterion) {
    let fs = 44_100;
    let mut group = c.benchmark_group("peak_frequency");

    for &window_len in &[64usize, 256, 1024, 4096] {
        let samples = tone(1500.0, fs, window_len);
        group.bench_with_input(BenchmarkId::from_parameter(window_len), &window_len, |b, _| {
            b.iter(|| peak_frequency(black_box(&samples), fs))
        });
    }

    group.finish();
}

fn benchmark_reusable_estimator(c: &mut Criterion) {
    let fs = 44_100;
    let window_len = 512;
    let samples = tone(1800.0, fs, window_len);
    let mut estimator = FrequencyEstimator::new(window_len);

    c.bench_function("reusable_estimator_estimate", |b| {
        b.iter(|| estimator.estimate(black_box(&samples), fs))
    });
}

fn benchmark_full_raster(c: &mut Criterion) {
    let fs = 44_100u32;
    let mode = lookup_mode(95).unwrap();

    let mut audio = Vec::new();
    audio.extend(tone(mode.sync_hz, fs, (mode.sync_time_sec * fs as f64).round() as usize));
    audio.extend(tone(mode.porch_hz, fs, (mode.porch_time_sec * fs as f64).round() as usize));
    let mid_hz = (mode.pixel_min_hz + mode.pixel_max_hz) / 2.0;
    let pixel_samples = (mode.pixel_time_sec * fs as f64).round() as usize;
    for _ in 0..mode.num_channels * mode.width {
        audio.extend(tone(mid_hz, fs, pixel_samples));
    }
    audio.extend(vec![0.0; 4096]);

    let stream = SampleStream::new(audio, fs);

    c.bench_function("demodulate_raster_one_line", |b| {
        b.iter(|| demodulate_raster(black_box(&stream), mode, 0))
    });
}

criterion_group!(
    benches,
    benchmark_peak_frequency,
    benchmark_reusable_estimator,
    benchmark_full_raster
);
criterion_main!(benches);
