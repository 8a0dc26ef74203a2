//! Perturbator listing and information command.

use clap::Args;
use insynth_perturb::{PerturbatorDescriptor, PerturbatorKind, PerturbatorRegistry};
use serde_json::{Value, json};

#[derive(Args)]
pub struct ListArgs {
    /// Show details for a specific perturbator
    #[arg(value_name = "ID")]
    perturbator: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn bank_name(kind: PerturbatorKind) -> Option<&'static str> {
    match kind {
        PerturbatorKind::Parametric => None,
        PerturbatorKind::Banked(bank) => Some(bank.subdir()),
    }
}

fn descriptor_json(descriptor: &PerturbatorDescriptor) -> Value {
    json!({
        "id": descriptor.id,
        "name": descriptor.name,
        "description": descriptor.description,
        "kind": descriptor.kind.name(),
        "bank": bank_name(descriptor.kind),
        "default_distribution": descriptor.default_distribution.map(|d| d.to_string()),
        "domain": descriptor.domain.map(|d| d.to_string()),
    })
}

fn print_details(descriptor: &PerturbatorDescriptor) {
    println!("{}", descriptor.id);
    println!("{}", "=".repeat(descriptor.id.len()));
    println!();
    println!("{}", descriptor.description);
    println!();
    println!("  Kind:          {}", descriptor.kind.name());
    if let Some(bank) = bank_name(descriptor.kind) {
        println!("  Sound bank:    {bank}");
    }
    if let Some(distribution) = descriptor.default_distribution {
        println!("  Distribution:  {distribution}");
    }
    if let Some(domain) = descriptor.domain {
        println!("  Domain:        {domain}");
    }
    println!();
    println!("Example usage:");
    println!();
    match descriptor.kind {
        PerturbatorKind::Parametric => println!(
            "  insynth perturb input.wav output.wav --perturbator {} --p 1.0",
            descriptor.id
        ),
        PerturbatorKind::Banked(_) => println!(
            "  insynth perturb input.wav output.wav --perturbator {} --category <CATEGORY>",
            descriptor.id
        ),
    }
}

pub fn run(args: ListArgs) -> anyhow::Result<()> {
    let registry = PerturbatorRegistry::new();

    if let Some(id) = &args.perturbator {
        let descriptor = registry
            .get(id)
            .ok_or_else(|| anyhow::anyhow!("Unknown perturbator: {}", id))?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&descriptor_json(descriptor))?);
        } else {
            print_details(descriptor);
        }
        return Ok(());
    }

    let descriptors = registry.all_perturbators();

    if args.json {
        let all: Vec<Value> = descriptors.iter().map(|d| descriptor_json(d)).collect();
        println!("{}", serde_json::to_string_pretty(&all)?);
        return Ok(());
    }

    println!("Available Perturbators");
    println!("======================");
    println!();
    for descriptor in &descriptors {
        println!(
            "  {:18} {:10} - {}",
            descriptor.id,
            descriptor.kind.name(),
            descriptor.description
        );
    }
    println!();
    println!("Use 'insynth list <id>' for details.");

    Ok(())
}
