use anyhow::{Context, Result};
use std::path::Path;

use crate::data::{classes::extract_classes, dataset::BaseDataset, loader::JsonDatasetLoader};
use crate::domain::traits::DatasetSource;

/// Class vocabulary of a dataset file, without writing anything.
pub fn list_classes(input: &Path) -> Result<Vec<String>> {
    let splits = JsonDatasetLoader::new(input)
        .load_splits()
        .with_context(|| format!("Cannot load dataset '{}'", input.display()))?;

    let classes = extract_classes(&BaseDataset::new(splits, None))?;
    tracing::info!("Found {} classes in '{}'", classes.len(), input.display());
    Ok(classes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_list_classes() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("d.json");
        fs::write(&path, r#"{"train": [["hi", ["greet"]], ["bye", ["farewell"]]]}"#).unwrap();
        assert_eq!(list_classes(&path).unwrap(), vec!["farewell", "greet"]);
    }

    #[test]
    fn test_list_classes_needs_train() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("d.json");
        fs::write(&path, r#"{"test": [["hi", ["greet"]]]}"#).unwrap();
        let err = list_classes(&path).unwrap_err();
        assert!(err.to_string().contains("train"));
    }
}
