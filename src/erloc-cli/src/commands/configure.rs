//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up erloc CLI defaults.

use crate::config::Config;
use anyhow::Result;
use erloc::Variant;
use std::path::{Path, PathBuf};

/// Values to store, `None` leaves the current setting alone
pub struct ConfigureArgs {
    pub input: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub variant: Option<Variant>,
    pub show: bool,
}

impl ConfigureArgs {
    fn has_changes(&self) -> bool {
        self.input.is_some() || self.output_dir.is_some() || self.variant.is_some()
    }
}

/// Handle the configure command
pub fn handle(args: ConfigureArgs) -> Result<()> {
    handle_at(&Config::config_path()?, args)
}

fn handle_at(config_path: &Path, args: ConfigureArgs) -> Result<()> {
    let mut config = Config::load_from(config_path)?;

    if args.show {
        show_config(&config, config_path);
        return Ok(());
    }

    if !args.has_changes() {
        show_usage();
        return Ok(());
    }

    apply(&mut config, args);
    config.save_to(config_path)?;

    println!("Configuration updated");
    show_config(&config, config_path);

    Ok(())
}

fn apply(config: &mut Config, args: ConfigureArgs) {
    if let Some(input) = args.input {
        config.input = Some(input);
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = Some(dir);
    }
    if let Some(variant) = args.variant {
        config.variant = Some(variant);
    }
}

/// Display current configuration
fn show_config(config: &Config, config_path: &Path) {
    match &config.input {
        Some(path) => println!("Input: {}", path.display()),
        None => println!("Input: {} (default)", erloc::DEFAULT_INPUT),
    }
    match &config.output_dir {
        Some(dir) => println!("Output directory: {}", dir.display()),
        None => println!("Output directory: . (default)"),
    }
    match config.variant {
        Some(variant) => println!("Variant: {}", variant),
        None => println!("Variant: {} (default)", Variant::default()),
    }
    println!("Config file: {}", config_path.display());
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: erloc configure --input PATH --output-dir DIR --variant basic|refined");
    println!("   or: erloc configure --show");
}
