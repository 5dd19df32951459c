//! Slot dump conversion command handler

use crate::config::Config;
use anyhow::{bail, Context, Result};
use erloc::{OutputPaths, Summary, Variant};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Options for a conversion run, after flags are parsed
pub struct ConvertArgs {
    pub input: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub locations: String,
    pub mults: String,
    pub variant: Option<Variant>,
}

/// Handle the convert command
pub fn handle(args: ConvertArgs) -> Result<()> {
    let config = Config::load()?;
    let summary = run(&config, args)?;
    print_summary(&summary);
    Ok(())
}

fn run(config: &Config, args: ConvertArgs) -> Result<Summary> {
    let input = config.resolve_input(args.input);
    let output_dir = config.resolve_output_dir(args.output_dir);
    let variant = config.resolve_variant(args.variant);

    if args.locations == args.mults {
        bail!(
            "Location listing and multiplier report would both be written to '{}'",
            args.locations
        );
    }
    if !output_dir.is_dir() {
        bail!("Output directory {} does not exist", output_dir.display());
    }

    let outputs = output_paths(&output_dir, &args.locations, &args.mults);
    debug!(
        "locations -> {}, multipliers -> {}",
        outputs.locations.display(),
        outputs.multipliers.display()
    );

    println!("Converting {} ({} rules)...", input.display(), variant);

    erloc::convert(&input, &outputs, variant)
        .with_context(|| format!("Failed to convert {}", input.display()))
}

fn output_paths(dir: &Path, locations: &str, mults: &str) -> OutputPaths {
    OutputPaths {
        locations: dir.join(locations),
        multipliers: dir.join(mults),
    }
}

fn print_summary(summary: &Summary) {
    println!(
        "Wrote {} entries in {} areas ({} areas seen)",
        summary.entries, summary.rendered_areas, summary.areas
    );
    println!(
        "  {} slots read ({} debug lines)",
        summary.slots, summary.lines
    );
    if summary.excluded > 0 {
        println!("  {} debug lines excluded", summary.excluded);
    }
    if summary.annotated > 0 {
        println!(
            "  {} quantity annotations across {} items",
            summary.annotated, summary.multiplier_items
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DUMP: &str = r#"
Slots:
- Area: limgrave_stormgate
  Key: "1"
  DebugText: ["Finger Severer - beside grace", "Shop Kale - sells"]
  Tags: aaaaaaaaaaaaaaaaa
  Text: beside grace
- Area: weeping
  Key: "2"
  DebugText: ["Kukri - lot 4x"]
  Tags: norandom
  Text: aaaaaaaaaaaaaaaaa
- Area: unknown
  Key: "3"
  DebugText: ["Arrow - lot 10x"]
"#;

    fn args(dir: &Path, variant: Variant) -> ConvertArgs {
        ConvertArgs {
            input: Some(dir.join("itemslots.yaml")),
            output_dir: Some(dir.to_path_buf()),
            locations: erloc::DEFAULT_LOCATIONS_FILE.to_string(),
            mults: erloc::DEFAULT_MULTIPLIERS_FILE.to_string(),
            variant: Some(variant),
        }
    }

    #[test]
    fn test_run_refined() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("itemslots.yaml"), DUMP).unwrap();

        let summary = run(&Config::default(), args(dir.path(), Variant::Refined)).unwrap();
        assert_eq!(summary.slots, 3);
        assert_eq!(summary.lines, 4);
        assert_eq!(summary.entries, 3);
        assert_eq!(summary.excluded, 1);
        assert_eq!(summary.rendered_areas, 2);

        let listing = fs::read_to_string(dir.path().join("location output.txt")).unwrap();
        assert_eq!(
            listing,
            "\"limgrave_stormgate\":[\n    \
             #ERLocationData(\"LG/(SG): Finger Severer - beside grace\", \"Finger Severer\", key=\"1\"),\n\
             ],\n\
             \"weeping\":[\n\
             ],\n"
        );
        let mults = fs::read_to_string(dir.path().join("unique mults.txt")).unwrap();
        assert_eq!(mults, "");
    }

    #[test]
    fn test_run_basic() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("itemslots.yaml"), DUMP).unwrap();

        run(&Config::default(), args(dir.path(), Variant::Basic)).unwrap();

        let listing = fs::read_to_string(dir.path().join("location output.txt")).unwrap();
        assert!(listing.contains(
            "    ERLocationData(\"/: Kukri x4 - \", \"Kukri x4\", key=\"2\", norandom=True),\n"
        ));
        assert!(!listing.contains("unknown"));

        let mults = fs::read_to_string(dir.path().join("unique mults.txt")).unwrap();
        assert_eq!(mults, "Kukri  x4\nArrow  x10\n");
    }

    #[test]
    fn test_same_output_names_rejected() {
        let dir = TempDir::new().unwrap();
        let mut a = args(dir.path(), Variant::Refined);
        a.mults = a.locations.clone();
        let err = run(&Config::default(), a).unwrap_err();
        assert!(err.to_string().contains("both be written"));
    }

    #[test]
    fn test_missing_output_dir_rejected() {
        let dir = TempDir::new().unwrap();
        let mut a = args(dir.path(), Variant::Refined);
        a.output_dir = Some(dir.path().join("missing"));
        let err = run(&Config::default(), a).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_missing_input_has_context() {
        let dir = TempDir::new().unwrap();
        let err = run(&Config::default(), args(dir.path(), Variant::Refined)).unwrap_err();
        assert!(err.to_string().contains("Failed to convert"));
    }
}
