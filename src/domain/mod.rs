// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain structs, traits and errors that describe an intent
// dataset. Nothing in here touches the filesystem.
//
//   record.rs : one labelled sample (utterance + intent labels)
//   traits.rs : seams other layers implement (SplitSource, TextTransform)
//   config.rs : IntentDatasetConfig and its list-option parsers
//   error.rs  : DatasetError, the typed error for layers 3, 4 and 6

// A labelled utterance and the split map that holds them
pub mod record;

// Core abstractions (traits) that other layers implement
pub mod traits;

// Construction options for IntentDataset
pub mod config;

// Typed errors shared by the library layers
pub mod error;
