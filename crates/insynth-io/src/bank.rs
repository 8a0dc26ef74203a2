//! Sound bank resolution.
//!
//! A sound bank is the ordered list of candidate files a noise or
//! impulse-response effect draws from. Banks are resolved once, when the
//! owning perturbator is built, and never rescanned.
//!
//! # Directory Layout
//!
//! Banks live under a data root, split by kind and then by category:
//!
//! - **Background noise**: `<root>/background_noise/<category>/...`
//! - **Impulse responses**: `<root>/pulse_response/<category>/...`
//!
//! Categories are searched recursively. Missing directories contribute no
//! files and are not an error.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Default data root, relative to the working directory.
pub const DEFAULT_DATA_ROOT: &str = "data/audio";

/// File extensions recognised as audio (compared case-insensitively).
pub const AUDIO_EXTENSIONS: &[&str] = &["aiff", "flac", "m4a", "mp3", "ogg", "opus", "wav"];

/// Kind of sound bank, which selects the subdirectory under the data root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BankKind {
    /// Environmental and background noise recordings.
    BackgroundNoise,
    /// Room and device impulse responses.
    ImpulseResponse,
}

impl BankKind {
    /// Subdirectory of the data root holding this kind of bank.
    pub const fn subdir(&self) -> &'static str {
        match self {
            BankKind::BackgroundNoise => "background_noise",
            BankKind::ImpulseResponse => "pulse_response",
        }
    }

    /// Parse a kind from its short name (`noise`, `impulse`) or subdirectory name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "noise" | "background_noise" => Some(BankKind::BackgroundNoise),
            "impulse" | "ir" | "pulse_response" => Some(BankKind::ImpulseResponse),
            _ => None,
        }
    }
}

/// Whether `path` has one of the [`AUDIO_EXTENSIONS`].
pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            AUDIO_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// List all audio files under `dir`, recursively, in sorted order.
///
/// Symbolic links to directories are not followed, so a link cycle inside
/// a category lists each file once. Returns an empty vector if the directory
/// doesn't exist or can't be read.
pub fn list_audio_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| !entry.file_type().is_dir())
        .map(|entry| entry.into_path())
        .filter(|path| is_audio_file(path))
        .collect();
    files.sort();
    files
}

/// Ordered, immutable set of resolved sound files.
///
/// # Example
///
/// ```rust,no_run
/// use insynth_io::{BankKind, SoundBank};
///
/// let bank = SoundBank::resolve("data/audio", BankKind::BackgroundNoise, &["esc-50", "musan"]);
/// for path in bank.paths() {
///     println!("{}", path.display());
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoundBank {
    categories: Vec<String>,
    paths: Vec<PathBuf>,
}

impl SoundBank {
    /// Resolve `categories` of `kind` under `root`.
    ///
    /// Files from each category are appended in category order, so the bank
    /// size is the sum of the per-category counts.
    pub fn resolve<S: AsRef<str>>(root: impl AsRef<Path>, kind: BankKind, categories: &[S]) -> Self {
        let base = root.as_ref().join(kind.subdir());
        let mut paths = Vec::new();

        for category in categories {
            let category = category.as_ref();
            let files = list_audio_files(&base.join(category));
            tracing::debug!(
                kind = kind.subdir(),
                category,
                count = files.len(),
                "resolved sound bank category"
            );
            paths.extend(files);
        }

        if paths.is_empty() && !categories.is_empty() {
            tracing::warn!(
                kind = kind.subdir(),
                root = %root.as_ref().display(),
                "sound bank resolved to zero files"
            );
        }

        Self {
            categories: categories.iter().map(|c| c.as_ref().to_string()).collect(),
            paths,
        }
    }

    /// Build a bank from an explicit, already-resolved file list.
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            categories: Vec::new(),
            paths,
        }
    }

    /// Categories the bank was resolved from (empty for [`SoundBank::from_paths`]).
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Resolved file paths, in resolution order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the bank holds no files.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_audio_file() {
        assert!(is_audio_file(Path::new("a/b/dog.wav")));
        assert!(is_audio_file(Path::new("RAIN.FLAC")));
        assert!(!is_audio_file(Path::new("notes.txt")));
        assert!(!is_audio_file(Path::new("no_extension")));
    }

    #[test]
    fn test_list_audio_files_recursive_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(temp_dir.path().join("b.wav"), "").unwrap();
        fs::write(temp_dir.path().join("a.wav"), "").unwrap();
        fs::write(temp_dir.path().join("readme.md"), "").unwrap();
        fs::write(nested.join("c.ogg"), "").unwrap();

        let files = list_audio_files(temp_dir.path());
        assert_eq!(files.len(), 3);
        assert!(files.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_list_audio_files_nonexistent_dir() {
        assert!(list_audio_files(Path::new("/nonexistent/path/12345")).is_empty());
    }

    #[test]
    fn test_bank_kind_names() {
        assert_eq!(BankKind::BackgroundNoise.subdir(), "background_noise");
        assert_eq!(BankKind::ImpulseResponse.subdir(), "pulse_response");
        assert_eq!(BankKind::from_name("noise"), Some(BankKind::BackgroundNoise));
        assert_eq!(BankKind::from_name("IR"), Some(BankKind::ImpulseResponse));
        assert_eq!(BankKind::from_name("reverb"), None);
    }

    #[test]
    fn test_empty_categories_give_empty_bank() {
        let temp_dir = TempDir::new().unwrap();
        let bank = SoundBank::resolve::<&str>(temp_dir.path(), BankKind::BackgroundNoise, &[]);
        assert!(bank.is_empty());
        assert!(bank.categories().is_empty());
    }

    #[test]
    fn test_from_paths_keeps_order() {
        let bank = SoundBank::from_paths(vec![PathBuf::from("z.wav"), PathBuf::from("a.wav")]);
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.paths()[0], PathBuf::from("z.wav"));
    }
}
