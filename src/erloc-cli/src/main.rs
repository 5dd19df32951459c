mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::*;
use commands::configure::ConfigureArgs;
use commands::convert::ConvertArgs;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert {
            input,
            output_dir,
            locations,
            mults,
            variant,
        } => {
            commands::convert::handle(ConvertArgs {
                input,
                output_dir,
                locations,
                mults,
                variant: variant.map(Into::into),
            })?;
        }

        Commands::Code { areas } => {
            commands::code::handle(&areas)?;
        }

        Commands::Configure {
            input,
            output_dir,
            variant,
            show,
        } => {
            commands::configure::handle(ConfigureArgs {
                input,
                output_dir,
                variant: variant.map(Into::into),
                show,
            })?;
        }
    }

    Ok(())
}

/// Log to stderr, honouring RUST_LOG when it is set
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
