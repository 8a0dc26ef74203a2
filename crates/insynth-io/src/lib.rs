//! Audio I/O layer for insynth.
//!
//! This crate provides:
//!
//! - **WAV file I/O**: [`read_wav`] and [`write_wav`] for loading/saving audio files,
//!   plus [`read_signal`] / [`write_signal`] for [`AudioSignal`](insynth_core::AudioSignal)
//! - **Sound banks**: [`SoundBank`] resolves noise and impulse-response
//!   categories into an ordered list of files, once, at construction
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use insynth_io::{read_signal, write_signal, BankKind, SoundBank, WavSpec};
//!
//! let signal = read_signal("utterance.wav")?;
//! let bank = SoundBank::resolve("data/audio", BankKind::BackgroundNoise, &["esc-50"]);
//! println!("{} noise files", bank.len());
//! write_signal("copy.wav", &signal, 16)?;
//! ```

mod bank;
mod wav;

pub use bank::{
    AUDIO_EXTENSIONS, BankKind, DEFAULT_DATA_ROOT, SoundBank, is_audio_file, list_audio_files,
};
pub use wav::{WavFormat, WavInfo, WavSpec, read_signal, read_wav, read_wav_info, write_signal, write_wav};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The requested bit depth cannot be written.
    #[error("Unsupported bit depth: {0}")]
    UnsupportedBitDepth(u16),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
