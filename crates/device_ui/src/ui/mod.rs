//! UI modules for the device simulator.

pub mod app_shell;
pub mod constants;
pub mod controls;
pub mod dashboard;
pub mod utils;
