//! pf-cli library
//!
//! Argument parsing, command dispatch and JSON rendering for the `pf`
//! binary. Exposed as a library so the dispatch can be tested against a
//! throwaway database.

pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod output;


pub use app::{execute, open_database};
pub use cli::Cli;
pub use error::{CliError, Result};
pub use logger::initialize as initialize_logger;
pub use output::{error_body, render};
