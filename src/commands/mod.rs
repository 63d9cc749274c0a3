//! CLI command implementations

pub mod clean;
pub mod fetch;
pub mod generate;
pub mod list;
pub mod show;
