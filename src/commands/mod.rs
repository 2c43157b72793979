// ABOUTME: Command execution for the klir CLI.
// ABOUTME: Connects to the runtime once, then hands the verb to the cleanup dispatcher.

use crate::cli::Cli;
use klir::cleanup::dispatch;
use klir::error::Result;
use klir::output::Output;
use klir::prompt::TerminalSelector;
use klir::runtime;

/// Run the parsed command line.
///
/// The runtime client lives only for the duration of this call, so the
/// connection is closed on every path before the process exits.
pub async fn execute(cli: Cli) -> Result<()> {
    let runtime = runtime::connect(&cli.runtime_config()).await?;

    let mut selector = TerminalSelector::new();
    let mut output = Output::stdout();

    dispatch(&runtime, cli.command.verb(), &mut selector, &mut output).await?;
    Ok(())
}
