//! # erloc
//!
//! Converts the item randomizer's slot dump (`itemslots.yaml`) into
//! `ERLocationData` table lines grouped by area, plus a report of every
//! stack quantity seen per item.
//!
//! ## Example
//!
//! ```no_run
//! use erloc::{convert, OutputPaths, Variant};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let outputs = OutputPaths::in_dir(".");
//! let summary = convert("itemslots.yaml", &outputs, Variant::Refined)?;
//!
//! println!("{} entries in {} areas", summary.entries, summary.areas);
//! # Ok(())
//! # }
//! ```

pub mod area;
pub mod classify;
pub mod quantity;
pub mod registry;
pub mod render;
pub mod slots;
pub mod variant;

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[doc(inline)]
pub use area::{resolve as resolve_area, AreaCode};
#[doc(inline)]
pub use classify::{classify, Classifier, ItemEntry, Listing};
#[doc(inline)]
pub use registry::MultiplierRegistry;
#[doc(inline)]
pub use slots::{Slot, SlotsError, SlotsFile};
#[doc(inline)]
pub use variant::{ParseVariantError, Variant};

/// Default file names, matching what downstream tooling expects
pub const DEFAULT_INPUT: &str = "itemslots.yaml";
pub const DEFAULT_LOCATIONS_FILE: &str = "location output.txt";
pub const DEFAULT_MULTIPLIERS_FILE: &str = "unique mults.txt";

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Slots(#[from] SlotsError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where the two output files go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub locations: PathBuf,
    pub multipliers: PathBuf,
}

impl OutputPaths {
    /// Default file names inside `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            locations: dir.join(DEFAULT_LOCATIONS_FILE),
            multipliers: dir.join(DEFAULT_MULTIPLIERS_FILE),
        }
    }
}

/// What a conversion produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub slots: usize,
    pub lines: usize,
    pub areas: usize,
    pub rendered_areas: usize,
    pub entries: usize,
    pub excluded: usize,
    pub annotated: usize,
    pub multiplier_items: usize,
}

impl Summary {
    fn from_listing(listing: &Listing, variant: Variant) -> Self {
        Self {
            slots: listing.stats.slots,
            lines: listing.stats.lines,
            areas: listing.areas.len(),
            rendered_areas: listing
                .area_names()
                .filter(|a| render::renders_area(a, variant))
                .count(),
            entries: listing.stats.entries,
            excluded: listing.stats.excluded(),
            annotated: listing.stats.annotated,
            multiplier_items: listing.multipliers.len(),
        }
    }
}

/// Render both outputs for an already parsed dump
pub fn render_all(file: &SlotsFile, variant: Variant) -> (String, String, Summary) {
    let listing = classify(&file.slots, variant);
    let summary = Summary::from_listing(&listing, variant);
    (
        render::locations(&listing, variant),
        render::multipliers(&listing.multipliers),
        summary,
    )
}

/// Read the slot dump at `input` and overwrite both output files
pub fn convert<P: AsRef<Path>>(
    input: P,
    outputs: &OutputPaths,
    variant: Variant,
) -> Result<Summary, ConvertError> {
    let input = input.as_ref();
    let file = SlotsFile::load(input)?;
    info!(
        "Loaded {} slots from {} ({} rules)",
        file.slots.len(),
        input.display(),
        variant
    );

    let (locations, multipliers, summary) = render_all(&file, variant);

    write_output(&outputs.locations, &locations)?;
    write_output(&outputs.multipliers, &multipliers)?;

    info!(
        "Wrote {} entries across {} areas to {}",
        summary.entries,
        summary.rendered_areas,
        outputs.locations.display()
    );
    info!(
        "Wrote {} items with quantity variants to {}",
        summary.multiplier_items,
        outputs.multipliers.display()
    );

    Ok(summary)
}

fn write_output(path: &Path, contents: &str) -> Result<(), ConvertError> {
    std::fs::write(path, contents).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}
