//! User interaction for first-run configuration
//!
//! Used when neither a config file nor an environment token exists.

use crate::error::AppError;
use std::io::{self, BufRead, Write};

/// Prompts for the API token on stdin and returns the trimmed input.
///
/// # Example
/// ```no_run
/// use soccer_cli::config::user_prompts::prompt_for_api_token;
///
/// let token = prompt_for_api_token().unwrap();
/// println!("Got token of length {}", token.len());
/// ```
pub fn prompt_for_api_token() -> Result<String, AppError> {
    let mut stdout = io::stdout();
    writeln!(
        stdout,
        "No API token found. Register at football-data.org and paste your token here: "
    )?;
    stdout.flush()?;

    read_token(io::stdin().lock())
}

fn read_token(mut reader: impl BufRead) -> Result<String, AppError> {
    let mut input = String::new();
    reader.read_line(&mut input)?;
    Ok(input.trim().to_string())
}
