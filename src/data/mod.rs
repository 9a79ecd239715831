// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between a JSON file of labelled utterances and a
// dataset ready for an intent classifier:
//
//   dataset JSON
//       │
//       ▼
//   JsonDatasetLoader     → split map (train / valid / test ...)
//       │
//       ▼
//   IntentDataset::new
//       ├─ extract_classes   → sorted labels of train + valid
//       ├─ merge_fields      → concat several fields into one
//       ├─ split_field       → seeded proportional partition
//       └─ preprocess_splits → named text transform per split
//       │
//       ▼
//   SplitView             → Burn Dataset over one split
//
// Reference: Burn Book §4 (Datasets)
//            Rust Book §13 (Iterators and Closures)

/// Reads and writes split maps as JSON
pub mod loader;

/// BaseDataset and the Burn-facing SplitView
pub mod dataset;

/// Class vocabulary extraction
pub mod classes;

/// Field merge and seeded field split
pub mod fields;

/// Named text transforms and the registry that holds them
pub mod preprocessor;

/// The prepared intent dataset
pub mod intent_dataset;
