//! Integration tests for insynth-io WAV I/O and sound bank resolution.

use insynth_io::{BankKind, SoundBank, WavFormat, WavSpec, read_wav, read_wav_info, write_wav};
use std::fs;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

// ---------------------------------------------------------------------------
// WAV roundtrip tests
// ---------------------------------------------------------------------------

fn sine_wave(sample_rate: u32, freq_hz: f32, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| (2.0 * std::f32::consts::PI * freq_hz * i as f32 / sample_rate as f32).sin())
        .collect()
}

#[test]
fn wav_roundtrip_mono_f32_16000() {
    let sr = 16000;
    let samples = sine_wave(sr, 440.0, sr as usize);
    let spec = WavSpec {
        channels: 1,
        sample_rate: sr,
        bits_per_sample: 32,
    };

    let file = NamedTempFile::new().unwrap();
    write_wav(file.path(), &samples, spec).unwrap();

    let (loaded, loaded_spec) = read_wav(file.path()).unwrap();
    assert_eq!(loaded_spec.sample_rate, sr);
    assert_eq!(loaded_spec.channels, 1);
    assert_eq!(loaded.len(), samples.len());

    for (a, b) in samples.iter().zip(loaded.iter()) {
        assert!((a - b).abs() < 1e-6, "sample mismatch: {a} vs {b}");
    }
}

#[test]
fn wav_roundtrip_mono_i16() {
    let sr = 8000;
    let samples = sine_wave(sr, 300.0, 800);
    let spec = WavSpec {
        channels: 1,
        sample_rate: sr,
        bits_per_sample: 16,
    };

    let file = NamedTempFile::new().unwrap();
    write_wav(file.path(), &samples, spec).unwrap();
    let (loaded, _) = read_wav(file.path()).unwrap();

    for (a, b) in samples.iter().zip(loaded.iter()) {
        assert!((a - b).abs() < 1e-3, "sample mismatch: {a} vs {b}");
    }
}

#[test]
fn wav_stereo_is_mixed_to_mono() {
    let file = NamedTempFile::new().unwrap();
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: 16000,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(file.path(), spec).unwrap();
    for _ in 0..100 {
        writer.write_sample(1.0f32).unwrap();
        writer.write_sample(0.0f32).unwrap();
    }
    writer.finalize().unwrap();

    let (loaded, loaded_spec) = read_wav(file.path()).unwrap();
    assert_eq!(loaded_spec.channels, 2);
    assert_eq!(loaded.len(), 100);
    assert!(loaded.iter().all(|&s| (s - 0.5).abs() < 1e-6));
}

#[test]
fn wav_info_reports_duration() {
    let file = NamedTempFile::new().unwrap();
    let spec = WavSpec {
        channels: 1,
        sample_rate: 16000,
        bits_per_sample: 16,
    };
    write_wav(file.path(), &vec![0.0; 8000], spec).unwrap();

    let info = read_wav_info(file.path()).unwrap();
    assert_eq!(info.num_frames, 8000);
    assert_eq!(info.format, WavFormat::Pcm);
    assert!((info.duration_secs - 0.5).abs() < 1e-9);
}

#[test]
fn read_missing_file_fails() {
    assert!(read_wav("/nonexistent/insynth/missing.wav").is_err());
}

// ---------------------------------------------------------------------------
// Sound bank resolution
// ---------------------------------------------------------------------------

fn touch_files(dir: &Path, names: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    for name in names {
        fs::write(dir.join(name), "").unwrap();
    }
}

#[test]
fn bank_count_is_sum_of_categories() {
    let root = TempDir::new().unwrap();
    let base = root.path().join("background_noise");
    touch_files(&base.join("a"), &["1.wav", "2.wav", "3.wav"]);
    touch_files(&base.join("b"), &["x.wav", "y.flac"]);

    let only_a = SoundBank::resolve(root.path(), BankKind::BackgroundNoise, &["a"]);
    let only_b = SoundBank::resolve(root.path(), BankKind::BackgroundNoise, &["b"]);
    let both = SoundBank::resolve(root.path(), BankKind::BackgroundNoise, &["a", "b"]);

    assert_eq!(only_a.len(), 3);
    assert_eq!(only_b.len(), 2);
    assert_eq!(both.len(), only_a.len() + only_b.len());
    assert_eq!(both.categories(), &["a".to_string(), "b".to_string()]);

    // Category order is preserved: all of "a" precedes all of "b".
    assert!(both.paths()[..3].iter().all(|p| p.starts_with(base.join("a"))));
    assert!(both.paths()[3..].iter().all(|p| p.starts_with(base.join("b"))));
}

#[test]
fn bank_kinds_use_separate_directories() {
    let root = TempDir::new().unwrap();
    touch_files(&root.path().join("background_noise/rooms"), &["n.wav"]);
    touch_files(&root.path().join("pulse_response/rooms"), &["ir1.wav", "ir2.wav"]);

    let noise = SoundBank::resolve(root.path(), BankKind::BackgroundNoise, &["rooms"]);
    let impulses = SoundBank::resolve(root.path(), BankKind::ImpulseResponse, &["rooms"]);
    assert_eq!(noise.len(), 1);
    assert_eq!(impulses.len(), 2);
}

#[test]
fn bank_missing_category_contributes_nothing() {
    let root = TempDir::new().unwrap();
    touch_files(&root.path().join("background_noise/real"), &["n.wav"]);

    let bank = SoundBank::resolve(root.path(), BankKind::BackgroundNoise, &["real", "missing"]);
    assert_eq!(bank.len(), 1);
}

#[cfg(unix)]
#[test]
fn bank_symlink_cycle_lists_each_file_once() {
    let root = TempDir::new().unwrap();
    let category = root.path().join("background_noise/loop");
    touch_files(&category, &["a.wav"]);
    std::os::unix::fs::symlink(&category, category.join("self")).unwrap();

    let bank = SoundBank::resolve(root.path(), BankKind::BackgroundNoise, &["loop"]);
    assert_eq!(bank.len(), 1);
    assert_eq!(bank.paths()[0], category.join("a.wav"));
}
