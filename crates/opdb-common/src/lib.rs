//! opdb Common Library
//!
//! Shared error handling and logging for the opdb workspace.
//!
//! # Overview
//!
//! - **Error Handling**: the [`OpdbError`] type and [`Result`] alias used by
//!   every workspace member
//! - **Logging**: tracing-based logging with console and rotating file output
//!
//! # Example
//!
//! ```no_run
//! use opdb_common::logging::{init_logging, LogConfig};
//! use tracing::info;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     init_logging(&config)?;
//!     info!("starting up");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{OpdbError, Result};
