// ============================================================
// Layer 6 — Classes Store
// ============================================================
// The class vocabulary is stored as plain text, one class per
// line, each line newline-terminated:
//
//   farewell
//   greet
//
// save() creates the containing directory when it is missing.

use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::domain::error::Result;

pub struct ClassesStore {
    path: PathBuf,
}

impl ClassesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `classes` one per line, replacing any previous file.
    pub fn save(&self, classes: &[String]) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.exists() {
                tracing::debug!("Creating classes directory '{}'", dir.display());
                fs::create_dir_all(dir)?;
            }
        }

        let mut out = BufWriter::new(fs::File::create(&self.path)?);
        for class in classes {
            writeln!(out, "{class}")?;
        }
        out.flush()?;

        tracing::info!("Saved {} classes to '{}'", classes.len(), self.path.display());
        Ok(())
    }

    /// Read a classes file back. Blank lines are skipped.
    pub fn load(&self) -> Result<Vec<String>> {
        let text = fs::read_to_string(&self.path)?;
        Ok(text
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_writes_one_class_per_line() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ClassesStore::new(dir.path().join("intents/classes.txt"));

        store.save(&["farewell".to_string(), "greet".to_string()]).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert_eq!(text, "farewell\ngreet\n");
    }

    #[test]
    fn test_save_overwrites() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ClassesStore::new(dir.path().join("classes.txt"));
        store.save(&["a".to_string(), "b".to_string()]).unwrap();
        store.save(&["c".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "c\n");
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("classes.txt");
        fs::write(&path, "farewell\r\n\ngreet\n").unwrap();
        assert_eq!(ClassesStore::new(&path).load().unwrap(), vec!["farewell", "greet"]);
    }

    #[test]
    fn test_empty_class_list_gives_empty_file() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ClassesStore::new(dir.path().join("classes.txt"));
        store.save(&[]).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "");
        assert!(store.load().unwrap().is_empty());
    }
}
