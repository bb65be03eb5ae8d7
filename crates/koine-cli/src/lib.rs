//! Command implementations behind the `koinetool` binary.

pub mod commands;
pub mod fetch;
pub mod trace_init;
