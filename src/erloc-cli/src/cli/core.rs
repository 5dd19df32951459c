//! Core CLI definitions

use clap::{Parser, Subcommand};
use erloc::Variant;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "erloc")]
#[command(about = "Elden Ring item slot dump to location table converter", long_about = None)]
pub struct Cli {
    /// Log debug detail (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Rule set for `--variant`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum VariantArg {
    Basic,
    Refined,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Basic => Variant::Basic,
            VariantArg::Refined => Variant::Refined,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a slot dump into a location listing and multiplier report
    #[command(visible_alias = "c")]
    Convert {
        /// Path to itemslots.yaml (uses configured default if not provided)
        input: Option<PathBuf>,

        /// Directory to write output files to (uses configured default if not provided)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// File name for the location listing
        #[arg(long, default_value = erloc::DEFAULT_LOCATIONS_FILE)]
        locations: String,

        /// File name for the multiplier report
        #[arg(long, default_value = erloc::DEFAULT_MULTIPLIERS_FILE)]
        mults: String,

        /// Rule set to apply (uses configured default if not provided)
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,
    },

    /// Show the location code an area name resolves to
    Code {
        /// Area names (e.g., "limgrave_stormgate", "leyndell2")
        #[arg(required = true, num_args = 1..)]
        areas: Vec<String>,
    },

    /// Configure default settings
    Configure {
        /// Set default input path
        #[arg(long)]
        input: Option<PathBuf>,

        /// Set default output directory
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Set default rule set
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
