// LogFileChecker - ui/panels/mod.rs

pub mod about;
pub mod controls;
pub mod results;
