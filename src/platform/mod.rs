// LogFileChecker - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: standard library, directories crate, core::model (data only).
// Must NOT depend on: core I/O modules, app, ui.

pub mod config;
