//! Sound bank inspection command.

use clap::Args;
use insynth_io::{BankKind, DEFAULT_DATA_ROOT, SoundBank, read_wav_info};
use std::path::PathBuf;

#[derive(Args)]
pub struct BankArgs {
    /// Bank kind: `noise` or `impulse`
    #[arg(value_name = "KIND", value_parser = parse_kind)]
    kind: BankKind,

    /// Categories to resolve
    #[arg(value_name = "CATEGORY")]
    categories: Vec<String>,

    /// Root directory of the sound banks
    #[arg(long, value_name = "DIR", default_value = DEFAULT_DATA_ROOT)]
    data_root: PathBuf,

    /// Show sample rate and duration of each file
    #[arg(short, long)]
    long: bool,
}

fn parse_kind(s: &str) -> Result<BankKind, String> {
    BankKind::from_name(s).ok_or_else(|| format!("Unknown bank kind: '{s}' (expected noise or impulse)"))
}

pub fn run(args: BankArgs) -> anyhow::Result<()> {
    let bank = SoundBank::resolve(&args.data_root, args.kind, &args.categories);

    for path in bank.paths() {
        if !args.long {
            println!("{}", path.display());
            continue;
        }
        match read_wav_info(path) {
            Ok(info) => println!(
                "{}  {} Hz  {:.2}s",
                path.display(),
                info.sample_rate,
                info.duration_secs
            ),
            Err(_) => println!("{}  (not a readable WAV file)", path.display()),
        }
    }

    println!(
        "{} file(s) in {} [{}]",
        bank.len(),
        args.data_root.join(args.kind.subdir()).display(),
        args.categories.join(", ")
    );

    Ok(())
}
