//! Single-file perturbation command.

use super::common::{level_summary, load_suite, make_rng};
use clap::{ArgGroup, Args};
use insynth_config::{DistributionConfig, PerturbatorChain, PerturbatorConfig, Suite};
use insynth_io::{read_signal, write_signal};
use std::path::PathBuf;

#[derive(Args)]
#[command(group(ArgGroup::new("source").required(true).args(["suite", "perturbator"])))]
pub struct PerturbArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Suite name (factory or user) or path to a suite TOML file
    #[arg(short, long, value_name = "NAME|PATH")]
    suite: Option<String>,

    /// Single perturbator to apply (see `insynth list`)
    #[arg(short, long, value_name = "ID")]
    perturbator: Option<String>,

    /// Firing probability for --perturbator
    #[arg(long, default_value = "1.0", conflicts_with = "suite")]
    p: f64,

    /// Mean of a normal distribution replacing the default one
    #[arg(long, requires = "scale", conflicts_with = "suite", allow_hyphen_values = true)]
    loc: Option<f64>,

    /// Standard deviation of a normal distribution replacing the default one
    #[arg(long, requires = "loc", conflicts_with = "suite")]
    scale: Option<f64>,

    /// Sound bank category for banked perturbators (repeatable)
    #[arg(short, long = "category", value_name = "CATEGORY", conflicts_with = "suite")]
    categories: Vec<String>,

    /// Root directory of the sound banks
    #[arg(long, value_name = "DIR")]
    data_root: Option<PathBuf>,

    /// RNG seed (overrides the suite's seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

impl PerturbArgs {
    fn suite(&self) -> anyhow::Result<Suite> {
        let mut suite = match (&self.suite, &self.perturbator) {
            (Some(name), _) => load_suite(name)?,
            (None, Some(id)) => {
                let mut config = PerturbatorConfig::new(id.as_str())
                    .with_p(self.p)
                    .with_categories(self.categories.iter().cloned());
                if let (Some(loc), Some(scale)) = (self.loc, self.scale) {
                    config = config.with_distribution(DistributionConfig::Normal { loc, scale });
                }
                Suite::new(id.as_str()).with_perturbator(config)
            }
            (None, None) => anyhow::bail!("No perturbation specified. Use --suite or --perturbator"),
        };

        if let Some(root) = &self.data_root {
            suite.data_root = Some(root.clone());
        }
        Ok(suite)
    }
}

pub fn run(args: PerturbArgs) -> anyhow::Result<()> {
    println!("Reading {}...", args.input.display());
    let signal = read_signal(&args.input)?;
    println!(
        "  {} samples, {} Hz, {:.2}s",
        signal.len(),
        signal.sample_rate(),
        signal.duration_secs()
    );

    let suite = args.suite()?;
    let chain = PerturbatorChain::from_suite(&suite)?;
    let seed = args.seed.or(suite.seed);
    let mut rng = make_rng(seed);

    println!("Applying {} ({})...", suite.name, chain.ids().join(" -> "));
    let output = chain.apply_signal(&signal, &mut rng)?;

    println!("\nStats:");
    println!("  Input:  {}", level_summary(signal.samples()));
    println!("  Output: {}", level_summary(output.samples()));

    println!("\nWriting {}...", args.output.display());
    write_signal(&args.output, &output, args.bit_depth)?;
    println!("Done!");

    Ok(())
}
