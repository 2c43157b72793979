// ABOUTME: Entry point for the klir CLI application.
// ABOUTME: Parses arguments, sets up logging and maps errors to exit codes.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout is reserved for progress and outcomes.
    // --verbose always turns on debug output; otherwise RUST_LOG may override.
    let filter = if cli.command.verbose() {
        EnvFilter::new("warn,klir=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = commands::execute(cli).await {
        if e.is_cancelled() {
            eprintln!("Cancelled, nothing was changed.");
        } else {
            eprintln!("Error: {e}");
            if let Some(hint) = e.hint() {
                eprintln!("{hint}");
            }
        }
        std::process::exit(e.exit_code());
    }
}
