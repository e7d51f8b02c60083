// dirbot - folder hierarchy automation
// Main CLI entry point

use clap::Parser;
use dirbot::cli::{Cli, CliDispatcher, CommandContext};
use dirbot::utils::config::ConfigParser;
use dirbot::utils::error::UserError;
use dirbot::utils::logging::init_logging;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut config = match ConfigParser::load(&cwd, cli.global.root.as_deref(), cli.global.config.as_deref()) {
        Ok(config) => config,
        Err(err) => exit_with(&UserError::from_dirbot_error(&err)),
    };
    if let Some(log_file) = cli.global.log_file.clone() {
        config.logging.file = log_file;
    }

    if let Err(err) = init_logging(&config.log_file(), &config.logging, cli.global.verbose) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
    tracing::info!(root = %config.root.display(), "Logger loaded.");

    let context = CommandContext::new(config, cli.global.json);
    let result = CliDispatcher::execute(cli.command, &context).await;

    if let Err(err) = result {
        tracing::error!("{err}");
        exit_with(&UserError::from_dirbot_error(&err));
    }
}

fn exit_with(user_error: &UserError) -> ! {
    user_error.print();
    process::exit(user_error.exit_code);
}
