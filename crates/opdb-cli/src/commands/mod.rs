//! CLI command implementations

pub mod fetch;
