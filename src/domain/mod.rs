// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits defining the core concepts of
// the trainer. Rules for this layer:
//   - NO file I/O, NO terminal interaction
//   - NO clap or serde_json types leaking in
//   - Only plain structs, enums, and traits
//
// This layer defines what things ARE; the data, cube, and
// training layers define how they work.

// Case and Solution record types
pub mod case;

// User-chosen difficulty filters and their invariant
pub mod params;

// Seams to the external collaborators (data source, cube algebra)
pub mod traits;
