// ============================================================
// Layer 4 — Data Layer
// ============================================================
// Everything between the raw dataset files and the in-memory
// corpus the trainer queries:
//   - loader: parses the tagged-row CSV layout into Cases
//   - corpus: loaded-once partitions + the difficulty query
//
// The corpus is populated exactly once per rzp tag and is
// read-only afterwards, so no locking is needed anywhere in
// this layer.

// CSV dataset parsing (implements domain::traits::CaseSource)
pub mod loader;

// In-memory partitions and the difficulty-filter query
pub mod corpus;
