// ============================================================
// Layer 3 — IntentDataset Configuration
// ============================================================
// Every option IntentDataset::new understands. Serialisable so
// a whole run can be described in a JSON file:
//
//   {
//     "dataset_path": "data",
//     "seed": 42,
//     "fields_to_merge": "train valid",
//     "merged_field": "train_full",
//     "field_to_split": "train_full",
//     "split_fields": "train valid",
//     "split_proportions": "0.8",
//     "prep_method_name": "clean"
//   }
//
// List options stay space-separated strings, as in existing
// dataset configs; the parsers below turn them into Vecs.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::error::{DatasetError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentDatasetConfig {
    /// Root the classes directory is created under. Falls back to
    /// `default_root` when unset.
    pub dataset_path:      Option<PathBuf>,
    pub dataset_dir:       String,
    pub dataset_file:      String,

    /// Root used when no dataset_path is given
    pub default_root:      PathBuf,

    pub seed:              Option<u64>,
    pub extract_classes:   bool,

    /// Explicit classes file; overrides the derived location
    pub classes_file:      Option<PathBuf>,

    pub fields_to_merge:   Option<String>,
    pub merged_field:      Option<String>,

    pub field_to_split:    Option<String>,
    pub split_fields:      Option<String>,
    pub split_proportions: Option<String>,

    /// Registry key of the text preprocessor
    pub prep_method_name:  Option<String>,
}

impl Default for IntentDatasetConfig {
    fn default() -> Self {
        Self {
            dataset_path:      None,
            dataset_dir:       "intents".to_string(),
            dataset_file:      "classes.txt".to_string(),
            default_root:      PathBuf::from("usr"),
            seed:              None,
            extract_classes:   true,
            classes_file:      None,
            fields_to_merge:   None,
            merged_field:      None,
            field_to_split:    None,
            split_fields:      None,
            split_proportions: None,
            prep_method_name:  None,
        }
    }
}

impl IntentDatasetConfig {
    /// Where the classes file goes:
    ///   classes_file, if given
    ///   otherwise <dataset_path or default_root>/<dataset_dir>/<dataset_file>
    pub fn classes_path(&self) -> PathBuf {
        if let Some(path) = &self.classes_file {
            return path.clone();
        }
        self.dataset_path
            .as_ref()
            .unwrap_or(&self.default_root)
            .join(&self.dataset_dir)
            .join(&self.dataset_file)
    }
}

/// Split a space-separated option into names, skipping repeated spaces.
pub fn split_names(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// Parse a space-separated list of floats, e.g. "0.2 0.3".
pub fn parse_proportions(raw: &str) -> Result<Vec<f64>> {
    raw.split_whitespace()
        .map(|p| {
            p.parse::<f64>().map_err(|_| {
                DatasetError::config(format!("split proportion '{p}' is not a number"))
            })
        })
        .collect()
}
