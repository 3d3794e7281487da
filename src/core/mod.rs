// LogFileChecker - core/mod.rs
//
// Core business logic: archive loading, directory listing, reconciliation,
// and result export. No UI dependencies.

pub mod checker;
pub mod discovery;
pub mod export;
pub mod manifest;
pub mod model;
