// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Coordinates the data and infra layers for one CLI command.
// No text processing happens here.

// Load → prepare → save
pub mod prepare_use_case;

// Load → extract classes, no files written
pub mod classes_use_case;
