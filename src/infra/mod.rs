// ============================================================
// Layer 6 — Infrastructure
// ============================================================
// Everything that touches the filesystem on behalf of the
// application layer. Currently just the settings store; the
// dataset files themselves are read by the data layer.

// Persisted training parameters between sessions
pub mod settings;
