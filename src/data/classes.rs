use std::collections::{BTreeSet, HashMap};

use crate::domain::error::{DatasetError, Result};
use crate::domain::traits::SplitSource;

/// Splits whose labels define the class vocabulary. "train" is required.
const CLASS_SPLITS: [&str; 2] = ["train", "valid"];

/// Sorted, de-duplicated labels seen in the train and valid splits.
pub fn extract_classes(source: &impl SplitSource) -> Result<Vec<String>> {
    if !source.has_split(CLASS_SPLITS[0]) {
        return Err(DatasetError::missing_split(CLASS_SPLITS[0]));
    }

    let classes: BTreeSet<&str> = CLASS_SPLITS
        .iter()
        .flat_map(|split| source.iter_all(split))
        .flat_map(|record| record.labels.iter().map(String::as_str))
        .collect();

    if classes.is_empty() {
        tracing::warn!("No labels found in train/valid splits; class list is empty");
    }

    Ok(classes.into_iter().map(str::to_string).collect())
}

/// Class → position lookup for label encoding.
pub fn class_index(classes: &[String]) -> HashMap<String, usize> {
    classes
        .iter()
        .cloned()
        .enumerate()
        .map(|(idx, class)| (class, idx))
        .collect()
}
