// src/main.rs
use clap::Parser;
use soccer_cli::cli::Args;
use soccer_cli::commands::{
    handle_list_config_command, load_config, print_notice, run, usage_notice,
};
use soccer_cli::error::AppError;
use soccer_cli::logging::setup_logging;
use std::io::stdout;
use tracing::info;

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.list_config {
        return handle_list_config_command();
    }

    if let Some(notice) = usage_notice(&args) {
        return print_notice(&mut stdout(), notice);
    }

    let config = load_config(&args)?;

    let log_path = args.log_file.as_deref().or(config.log_file_path.as_deref());
    let (log_file_path, _guard) = setup_logging(log_path, args.debug)?;
    info!("Logging to {log_file_path}");

    run(&args, &config)
}
