pub mod api;
pub mod cli;
pub mod cli_handlers;
pub mod compliance;
pub mod config;
pub mod error;
pub mod mcp;
pub mod models;
pub mod report;
pub mod sources;
pub mod validate;

pub use error::{Result, TimesheetError};
pub use models::*;
