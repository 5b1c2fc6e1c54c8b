//! Shared infrastructure for the project file CLI.

pub mod logging;
