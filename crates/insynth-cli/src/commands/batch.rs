//! Batch variant generation command.

use super::common::{load_suite, make_rng};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use insynth_config::PerturbatorChain;
use insynth_io::{read_signal, write_signal};
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct BatchArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Directory receiving the variants (created if missing)
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Suite name (factory or user) or path to a suite TOML file
    #[arg(short, long, value_name = "NAME|PATH")]
    suite: String,

    /// Variants written per perturbator
    #[arg(short = 'n', long, default_value = "1")]
    variants: usize,

    /// Root directory of the sound banks (overrides the suite's)
    #[arg(long, value_name = "DIR")]
    data_root: Option<PathBuf>,

    /// RNG seed (overrides the suite's seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

/// `<stem>_<id>_<n>.wav` inside `dir`.
fn variant_path(dir: &Path, stem: &str, id: &str, n: usize) -> PathBuf {
    dir.join(format!("{stem}_{id}_{n}.wav"))
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    let signal = read_signal(&args.input)?;
    let stem = args
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output")
        .to_string();

    let mut suite = load_suite(&args.suite)?;
    if let Some(root) = &args.data_root {
        suite.data_root = Some(root.clone());
    }
    let chain = PerturbatorChain::from_suite(&suite)?;
    let mut rng = make_rng(args.seed.or(suite.seed));

    std::fs::create_dir_all(&args.output_dir)?;

    let total = chain.len() * args.variants;
    println!(
        "Writing {} variant(s) of {} to {}...",
        total,
        args.input.display(),
        args.output_dir.display()
    );

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("##-"),
    );

    for perturbator in chain.perturbators() {
        pb.set_message(perturbator.id());
        for n in 0..args.variants {
            let output = perturbator.apply_signal(&signal, &mut rng)?;
            let path = variant_path(&args.output_dir, &stem, perturbator.id(), n);
            write_signal(&path, &output, args.bit_depth)?;
            tracing::debug!(path = %path.display(), "wrote variant");
            pb.inc(1);
        }
    }

    pb.finish_with_message("done");
    println!("Done!");
    Ok(())
}
