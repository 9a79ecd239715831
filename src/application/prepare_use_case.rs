// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Runs the dataset preparation pipeline:
//
//   Step 1: Load the JSON dataset          (Layer 4 - data)
//   Step 2: Build the IntentDataset        (Layer 4 - data)
//             classes → merge → split → preprocess
//   Step 3: Save the prepared dataset      (Layer 4 - data)
//
// The preprocessor registry is built here and handed down, so
// the data layer never reaches for a global lookup.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::data::{
    dataset::BaseDataset,
    intent_dataset::IntentDataset,
    loader::{save_dataset, JsonDatasetLoader},
    preprocessor::PreprocessorRegistry,
};
use crate::domain::config::IntentDatasetConfig;
use crate::domain::traits::{DatasetSource, SplitSource};

/// What a finished run produced, for the CLI to report.
#[derive(Debug, Clone)]
pub struct PrepareSummary {
    pub classes:      Option<Vec<String>>,
    pub classes_path: Option<PathBuf>,
    pub split_sizes:  Vec<(String, usize)>,
    pub output:       Option<PathBuf>,
}

pub struct PrepareUseCase {
    input:    PathBuf,
    output:   Option<PathBuf>,
    config:   IntentDatasetConfig,
    registry: PreprocessorRegistry,
}

impl PrepareUseCase {
    /// Prepare `input` with the built-in preprocessors available
    pub fn new(input: impl Into<PathBuf>, output: Option<PathBuf>, config: IntentDatasetConfig) -> Self {
        Self {
            input: input.into(),
            output,
            config,
            registry: PreprocessorRegistry::with_builtins(),
        }
    }

    /// Swap in a custom registry (e.g. with project-specific transforms)
    pub fn with_registry(mut self, registry: PreprocessorRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn execute(&self) -> Result<PrepareSummary> {
        // ── Step 1: Load splits ───────────────────────────────────────────────
        let splits = JsonDatasetLoader::new(&self.input)
            .load_splits()
            .with_context(|| format!("Cannot load dataset '{}'", self.input.display()))?;
        let base = BaseDataset::new(splits, self.config.seed);

        // ── Step 2: Prepare ───────────────────────────────────────────────────
        let dataset = IntentDataset::new(&base, &self.config, &self.registry)
            .context("Cannot prepare intent dataset")?;

        let split_sizes: Vec<(String, usize)> = dataset
            .data()
            .iter()
            .map(|(name, records)| (name.clone(), records.len()))
            .collect();
        let classes = dataset.classes().map(<[String]>::to_vec);

        // ── Step 3: Save ──────────────────────────────────────────────────────
        if let Some(out) = &self.output {
            save_dataset(dataset.data(), out)
                .with_context(|| format!("Cannot write prepared dataset '{}'", out.display()))?;
        }

        Ok(PrepareSummary {
            classes_path: classes.as_ref().map(|_| self.config.classes_path()),
            classes,
            split_sizes,
            output: self.output.clone(),
        })
    }
}
