// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes to Layer 2.
//
//   `prepare`: build an IntentDataset from a JSON dataset
//   `classes`: print the class vocabulary of a JSON dataset

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{ClassesArgs, Commands, PrepareArgs};

use crate::domain::config::IntentDatasetConfig;

#[derive(Parser, Debug)]
#[command(
    name = "intent-dataset",
    version = "0.1.0",
    about = "Prepare labelled datasets for intent classification."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => run_prepare(args),
            Commands::Classes(args) => run_classes(args),
        }
    }
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    use crate::application::prepare_use_case::PrepareUseCase;
    use crate::infra::config_file::load_config;

    let config = match &args.config {
        Some(path) => args.options.apply_to(load_config(path)?),
        None       => IntentDatasetConfig::from(args.options),
    };

    tracing::info!("Preparing dataset '{}'", args.input.display());
    let summary = PrepareUseCase::new(args.input, args.output, config).execute()?;

    if let (Some(classes), Some(path)) = (&summary.classes, &summary.classes_path) {
        println!("{} classes written to {}", classes.len(), path.display());
    }
    for (split, size) in &summary.split_sizes {
        println!("{split:>12}: {size}");
    }
    if let Some(out) = &summary.output {
        println!("Prepared dataset saved to {}", out.display());
    }
    Ok(())
}

fn run_classes(args: ClassesArgs) -> Result<()> {
    use crate::application::classes_use_case::list_classes;

    for class in list_classes(&args.input)? {
        println!("{class}");
    }
    Ok(())
}
