// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Filesystem concerns shared by the other layers:
//
//   classes_store.rs: writes the class vocabulary (one class per
//                      line) and reads it back for later stages
//
//   config_file.rs  : loads an IntentDatasetConfig from JSON
//
// Reference: Rust Book §9 (Error Handling), §12 (File I/O)

/// Class vocabulary persistence
pub mod classes_store;

/// JSON configuration files
pub mod config_file;
