// Composition root.
//
// Responsibilities
// - Read settings from the environment.
// - Build the single store and the outbound collaborators, and wire them into
//   the handlers through AppState.
// - Expose the HTTP router to the binary.

pub mod config;
pub mod http;
pub mod state;
pub mod telemetry;
