// LogFileChecker - app/mod.rs
//
// Application layer: state management and check orchestration.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod state;
