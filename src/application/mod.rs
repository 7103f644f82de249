// ============================================================
// Layer 2 — Application Layer
// ============================================================
// The state machine and the use cases that drive it. The CLI
// layer above only calls into this module; the domain, data,
// cube, and training layers below never know it exists.

// Lifecycle phases as a sum type
pub mod state;

// Everything that can happen to the machine
pub mod event;

// The pure (state, event) -> state transition function
pub mod machine;

// State + collaborators, explicitly passed (no globals)
pub mod session;

// Interactive training session on the terminal
pub mod train_use_case;

// One-shot corpus query listing
pub mod list_use_case;
