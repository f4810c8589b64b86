//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit code mapping (see `error` module).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let source = cli.source.as_deref();
    let output_file = cli.output_file.as_deref();

    match cli.command {
        Commands::Show { raw } => commands::show::run(source, raw, output_file),
        Commands::Database { id } => commands::lookup::database(source, &id, output_file),
        Commands::Endpoint { id } => {
            commands::lookup::endpoint(source, id.as_deref().unwrap_or_default(), output_file)
        }
        Commands::Notification { id } => commands::lookup::notification(
            source,
            id.as_deref().unwrap_or_default(),
            output_file,
        ),
        Commands::Flag { key } => commands::lookup::flag(source, &key, output_file),
        Commands::Field { name } => commands::lookup::field(source, &name, output_file),
        Commands::Save => commands::save::run(source),
    }
}
