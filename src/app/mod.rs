// Application layer: runs CLI commands against a loaded directory.

pub mod commands;

pub use commands::run_command;
