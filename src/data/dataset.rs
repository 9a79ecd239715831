use burn::data::dataset::Dataset;

use crate::domain::record::{Record, SplitMap};
use crate::domain::traits::SplitSource;

/// A plain split map plus the seed randomised steps should use.
/// This is what loaders hand to IntentDataset.
#[derive(Debug, Clone, Default)]
pub struct BaseDataset {
    data: SplitMap,
    seed: Option<u64>,
}

impl BaseDataset {
    pub fn new(data: SplitMap, seed: Option<u64>) -> Self { Self { data, seed } }

    /// Build from `(split name, records)` pairs, handy in tests and fixtures
    pub fn from_splits<I, S>(splits: I, seed: Option<u64>) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Record>)>,
        S: Into<String>,
    {
        let data = splits.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self { data, seed }
    }

    pub fn into_data(self) -> SplitMap { self.data }
}

impl SplitSource for BaseDataset {
    fn data(&self) -> &SplitMap { &self.data }

    fn seed(&self) -> Option<u64> { self.seed }
}

/// One split exposed through Burn's Dataset trait, so a training
/// loop can wrap it in a DataLoader.
pub struct SplitView {
    records: Vec<Record>,
}

impl SplitView {
    pub fn new(records: Vec<Record>) -> Self { Self { records } }

    /// Copy a split out of any split source. Absent splits give an empty view.
    pub fn of(source: &impl SplitSource, split: &str) -> Self {
        Self::new(source.iter_all(split).cloned().collect())
    }
}

impl Dataset<Record> for SplitView {
    fn get(&self, index: usize) -> Option<Record> {
        self.records.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
