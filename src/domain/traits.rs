// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The intent dataset only needs three things from the outside
// world, each behind a trait:
//
//   DatasetSource : somewhere labelled records come from
//   SplitSource   : a split-partitioned container it can read
//   TextTransform : a batch text preprocessor
//
// Any JSON loader, in-memory fixture or closure can stand in.

use crate::domain::error::Result;
use crate::domain::record::{Record, SplitMap};

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Anything that can produce a split map.
///
/// Implementations:
///   - JsonDatasetLoader → reads a JSON file of splits
pub trait DatasetSource {
    /// Load every split this source knows about.
    fn load_splits(&self) -> Result<SplitMap>;
}

// ─── SplitSource ──────────────────────────────────────────────────────────────
/// A dataset partitioned into named splits.
///
/// Implementations:
///   - BaseDataset    → plain owned split map plus seed
///   - IntentDataset  → the prepared dataset itself
pub trait SplitSource {
    /// The underlying split map
    fn data(&self) -> &SplitMap;

    /// Seed for any randomised operation, `None` for entropy
    fn seed(&self) -> Option<u64>;

    /// Lazily walk one split. An absent split yields nothing.
    fn iter_all<'a>(&'a self, split: &str) -> Box<dyn Iterator<Item = &'a Record> + 'a> {
        Box::new(self.data().get(split).into_iter().flatten())
    }

    /// True if the split exists (even when empty)
    fn has_split(&self, split: &str) -> bool {
        self.data().contains_key(split)
    }
}

// ─── TextTransform ────────────────────────────────────────────────────────────
/// A batch text preprocessor: one output per input, same order.
///
/// Any `Fn(&[&str]) -> Vec<String>` closure is a TextTransform.
pub trait TextTransform {
    fn transform(&self, batch: &[&str]) -> Vec<String>;
}

impl<F> TextTransform for F
where
    F: Fn(&[&str]) -> Vec<String>,
{
    fn transform(&self, batch: &[&str]) -> Vec<String> {
        self(batch)
    }
}
