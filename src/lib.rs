//! Football scores in the terminal.
//!
//! Fetches fixtures, league tables, live scores and squads from the
//! football-data scores API, normalizes the different payload versions into
//! one result shape, and renders it as colorized console output, CSV or JSON.
//!
//! # Examples
//!
//! ```rust,no_run
//! use soccer_cli::config::Config;
//! use soccer_cli::data_fetcher::api::ApiGateway;
//! use soccer_cli::data_fetcher::models::TimeWindow;
//! use soccer_cli::error::AppError;
//! use soccer_cli::request_handler::RequestHandler;
//! use soccer_cli::writers::{OutputFormat, OutputTarget, OutputWriter};
//!
//! fn main() -> Result<(), AppError> {
//!     let config = Config::load()?;
//!     let gateway = ApiGateway::from_config(&config)?;
//!     let writer = OutputWriter::new(OutputFormat::Stdout, OutputTarget::Stdout, false);
//!
//!     let mut handler = RequestHandler::new(gateway, writer);
//!     let outcome = handler.get_team_scores("MUFC", TimeWindow::past(6))?;
//!     if let Some(message) = outcome.message() {
//!         println!("{message}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod leagues;
pub mod logging;
pub mod request_handler;
pub mod writers;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use request_handler::{CommandOutcome, RequestHandler};
pub use writers::{OutputFormat, OutputTarget, OutputWriter, Writer};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
