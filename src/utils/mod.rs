// Shared utilities: configuration, errors, filesystem and logging helpers
pub mod config;
pub mod error;
pub mod fs_utils;
pub mod logging;
