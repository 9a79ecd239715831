// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Two subcommands: `prepare` and `classes`.
//
// Dataset options can come from a JSON config file (--config),
// from flags, or both; flags win over the file.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::domain::config::IntentDatasetConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract classes, reshape fields and preprocess a dataset
    Prepare(PrepareArgs),

    /// Print the classes of a dataset, one per line
    Classes(ClassesArgs),
}

#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// JSON dataset: {"train": [[text, [labels...]], ...], ...}
    #[arg(long)]
    pub input: PathBuf,

    /// Where to write the prepared dataset (not written if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// JSON file with IntentDataset options
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub options: DatasetOptions,
}

/// Flag form of IntentDatasetConfig. Unset flags leave the config alone.
#[derive(Args, Debug, Default)]
pub struct DatasetOptions {
    /// Root directory for the classes directory
    #[arg(long)]
    pub dataset_path: Option<PathBuf>,

    /// Classes directory name under the dataset path
    #[arg(long)]
    pub dataset_dir: Option<String>,

    /// Classes file name inside the classes directory
    #[arg(long)]
    pub dataset_file: Option<String>,

    /// Root used when no dataset path is given
    #[arg(long)]
    pub default_root: Option<PathBuf>,

    /// Seed for field splitting
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip class extraction
    #[arg(long)]
    pub no_extract_classes: bool,

    /// Explicit classes file path
    #[arg(long)]
    pub classes_file: Option<PathBuf>,

    /// Space-separated fields to merge, e.g. "train valid"
    #[arg(long)]
    pub fields_to_merge: Option<String>,

    /// Name of the merged field
    #[arg(long)]
    pub merged_field: Option<String>,

    /// Field to split
    #[arg(long)]
    pub field_to_split: Option<String>,

    /// Space-separated names of the split fields
    #[arg(long)]
    pub split_fields: Option<String>,

    /// Space-separated proportions, one fewer than split fields
    #[arg(long)]
    pub split_proportions: Option<String>,

    /// Preprocessor name (clean, lowercase, strip_punctuation)
    #[arg(long)]
    pub prep_method_name: Option<String>,
}

impl DatasetOptions {
    /// Overlay the flags that were given on top of `cfg`.
    pub fn apply_to(self, mut cfg: IntentDatasetConfig) -> IntentDatasetConfig {
        fn set<T>(slot: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *slot = value;
            }
        }

        set(&mut cfg.dataset_path, self.dataset_path);
        if let Some(dir) = self.dataset_dir {
            cfg.dataset_dir = dir;
        }
        if let Some(file) = self.dataset_file {
            cfg.dataset_file = file;
        }
        if let Some(root) = self.default_root {
            cfg.default_root = root;
        }
        set(&mut cfg.seed, self.seed);
        if self.no_extract_classes {
            cfg.extract_classes = false;
        }
        set(&mut cfg.classes_file, self.classes_file);
        set(&mut cfg.fields_to_merge, self.fields_to_merge);
        set(&mut cfg.merged_field, self.merged_field);
        set(&mut cfg.field_to_split, self.field_to_split);
        set(&mut cfg.split_fields, self.split_fields);
        set(&mut cfg.split_proportions, self.split_proportions);
        set(&mut cfg.prep_method_name, self.prep_method_name);
        cfg
    }
}

/// Flags alone, on top of the defaults.
impl From<DatasetOptions> for IntentDatasetConfig {
    fn from(o: DatasetOptions) -> Self {
        o.apply_to(IntentDatasetConfig::default())
    }
}

#[derive(Args, Debug)]
pub struct ClassesArgs {
    /// JSON dataset to read
    #[arg(long)]
    pub input: PathBuf,
}
