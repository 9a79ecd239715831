// ============================================================
// Layer 4 — Dataset Loader
// ============================================================
// Reads and writes split maps as JSON:
//
//   {
//     "train": [["hi", ["greet"]], ["bye", ["farewell"]]],
//     "valid": [["hello there", ["greet"]]]
//   }
//
// Each record is a two-element array (utterance, labels); see
// domain/record.rs for the accepted utterance shapes.

use std::{
    fs,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::domain::error::Result;
use crate::domain::record::SplitMap;
use crate::domain::traits::DatasetSource;

/// Loads a split map from a single JSON file.
pub struct JsonDatasetLoader {
    path: PathBuf,
}

impl JsonDatasetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for JsonDatasetLoader {
    fn load_splits(&self) -> Result<SplitMap> {
        let file   = fs::File::open(&self.path)?;
        let splits: SplitMap = serde_json::from_reader(BufReader::new(file))?;

        for (name, records) in &splits {
            tracing::debug!("Loaded split '{}' ({} records)", name, records.len());
        }
        tracing::info!(
            "Loaded {} splits from '{}'",
            splits.len(),
            self.path.display()
        );
        Ok(splits)
    }
}

/// Write a split map as pretty JSON, creating parent directories.
pub fn save_dataset(data: &SplitMap, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut out = BufWriter::new(fs::File::create(path)?);
    serde_json::to_writer_pretty(&mut out, data)?;
    out.flush()?;

    tracing::info!("Saved {} splits to '{}'", data.len(), path.display());
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DatasetError;
    use crate::domain::record::Record;

    #[test]
    fn test_load_json_splits() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(
            &path,
            r#"{"train": [["hi", ["greet"]], ["bye", ["farewell"]]], "valid": []}"#,
        )
        .unwrap();

        let splits = JsonDatasetLoader::new(&path).load_splits().unwrap();
        assert_eq!(splits["train"].len(), 2);
        assert_eq!(splits["train"][1], Record::new("bye", ["farewell"]));
        assert!(splits["valid"].is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonDatasetLoader::new(dir.path().join("nope.json"))
            .load_splits()
            .unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"train": [["hi"]]}"#).unwrap();
        let err = JsonDatasetLoader::new(&path).load_splits().unwrap_err();
        assert!(matches!(err, DatasetError::Serialization(_)));
    }

    #[test]
    fn test_saved_dataset_loads_back() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/prepared.json");

        let mut data = SplitMap::new();
        data.insert("train".into(), vec![Record::new("hi", ["greet"])]);
        save_dataset(&data, &path).unwrap();

        let back = JsonDatasetLoader::new(&path).load_splits().unwrap();
        assert_eq!(back, data);
    }
}
