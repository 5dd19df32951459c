//! Slot debug text to item entries
//!
//! Each debug text line looks like `"<item> -<meta> -<meta>..."`. The first
//! segment names the item; the rest carry shop, scarab and quantity markers.

use indexmap::IndexMap;
use tracing::debug;

use crate::quantity;
use crate::registry::MultiplierRegistry;
use crate::slots::Slot;
use crate::Variant;

/// Separates the item name from trailing metadata
pub const DELIMITER: &str = " -";

/// Marks a debug line that names a location rather than an item
pub const UNIQUE_LOCATION_MARKER: &str = "Unique location";
pub const SHOP_PREFIX: &str = "Shop ";
pub const BY_EFFECT_PREFIX: &str = "By ";
/// Quest requirement that ties a slot to a bell bearing
pub const BELL_BEARING_MARKER: &str = "bellbearing";

pub const SHOP_TAG: &str = "shop";
pub const SCARAB_TAG: &str = "scarab";
pub const REMEMBRANCE_TAG: &str = "remembrance";
pub const NO_RANDOM_TAG: &str = "norandom";
/// Kept on entries but never written out
pub const SUPPRESSED_TAG: &str = "exclude:chrysalidsmemento";

const SHOP_MARKER: &str = "shop";
const SCARAB_MARKER: &str = "scarab";
const REMEMBRANCE_MARKER: &str = "Remembrance of";

/// An item placement derived from one debug text line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemEntry {
    /// Item name with any quantity annotation appended
    pub name: String,
    /// Item name as written in the debug text
    pub raw_name: String,
    /// Source slot key
    pub key: String,
    pub tags: Vec<String>,
    pub description: String,
}

impl ItemEntry {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_norandom(&self) -> bool {
        self.has_tag(NO_RANDOM_TAG)
    }

    /// Tags that appear in rendered output, in insertion order
    pub fn rendered_tags(&self) -> impl Iterator<Item = &str> {
        self.tags
            .iter()
            .map(|t| t.as_str())
            .filter(|t| *t != SUPPRESSED_TAG)
    }
}

/// Why a debug text line produced no entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    UniqueLocation,
    ShopText,
    ByEffect,
    BellBearing,
}

impl std::fmt::Display for Exclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Exclusion::UniqueLocation => write!(f, "unique location"),
            Exclusion::ShopText => write!(f, "shop text"),
            Exclusion::ByEffect => write!(f, "by-effect text"),
            Exclusion::BellBearing => write!(f, "bell bearing requirement"),
        }
    }
}

/// Check whether an item name segment is excluded
///
/// Bell bearing requirements only apply to the refined variant.
pub fn exclusion(item: &str, slot: &Slot, variant: Variant) -> Option<Exclusion> {
    if item.contains(UNIQUE_LOCATION_MARKER) {
        return Some(Exclusion::UniqueLocation);
    }
    if item.starts_with(SHOP_PREFIX) {
        return Some(Exclusion::ShopText);
    }
    if item.starts_with(BY_EFFECT_PREFIX) {
        return Some(Exclusion::ByEffect);
    }
    if variant.is_refined() && requires_bell_bearing(slot) {
        return Some(Exclusion::BellBearing);
    }
    None
}

fn requires_bell_bearing(slot: &Slot) -> bool {
    slot.quest_reqs
        .as_deref()
        .is_some_and(|q| q.to_ascii_lowercase().contains(BELL_BEARING_MARKER))
}

/// Counters collected while classifying
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyStats {
    pub slots: usize,
    pub lines: usize,
    pub entries: usize,
    pub annotated: usize,
    pub unique_location: usize,
    pub shop_text: usize,
    pub by_effect: usize,
    pub bell_bearing: usize,
}

impl ClassifyStats {
    pub fn excluded(&self) -> usize {
        self.unique_location + self.shop_text + self.by_effect + self.bell_bearing
    }

    fn count_exclusion(&mut self, reason: Exclusion) {
        match reason {
            Exclusion::UniqueLocation => self.unique_location += 1,
            Exclusion::ShopText => self.shop_text += 1,
            Exclusion::ByEffect => self.by_effect += 1,
            Exclusion::BellBearing => self.bell_bearing += 1,
        }
    }
}

/// Item entries grouped by area in first-seen order
#[derive(Debug, Clone, Default)]
pub struct Listing {
    pub areas: IndexMap<String, Vec<ItemEntry>>,
    pub multipliers: MultiplierRegistry,
    pub stats: ClassifyStats,
}

impl Listing {
    pub fn entries(&self, area: &str) -> Option<&[ItemEntry]> {
        self.areas.get(area).map(|v| v.as_slice())
    }

    pub fn area_names(&self) -> impl Iterator<Item = &str> {
        self.areas.keys().map(|k| k.as_str())
    }
}

/// Builds a [`Listing`] from slots in a single forward pass
#[derive(Debug)]
pub struct Classifier {
    variant: Variant,
    listing: Listing,
}

impl Classifier {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            listing: Listing::default(),
        }
    }

    /// Classify every debug text line of a slot
    pub fn ingest(&mut self, slot: &Slot) {
        self.listing.stats.slots += 1;

        // Areas are listed even when every line is excluded
        self.listing.areas.entry(slot.area.clone()).or_default();

        for line in &slot.debug_text {
            self.listing.stats.lines += 1;
            if let Some(entry) = self.classify_line(slot, line) {
                self.listing.stats.entries += 1;
                if let Some(area) = self.listing.areas.get_mut(&slot.area) {
                    area.push(entry);
                }
            }
        }
    }

    pub fn ingest_all<'a, I>(&mut self, slots: I)
    where
        I: IntoIterator<Item = &'a Slot>,
    {
        for slot in slots {
            self.ingest(slot);
        }
    }

    pub fn finish(self) -> Listing {
        self.listing
    }

    fn classify_line(&mut self, slot: &Slot, line: &str) -> Option<ItemEntry> {
        let segments: Vec<&str> = line.split(DELIMITER).collect();
        let item = segments[0];

        if let Some(reason) = exclusion(item, slot, self.variant) {
            debug!(key = %slot.key, area = %slot.area, "skipping '{}': {}", item, reason);
            self.listing.stats.count_exclusion(reason);
            return None;
        }

        let mut entry = ItemEntry {
            name: item.to_string(),
            raw_name: item.to_string(),
            key: slot.key.clone(),
            tags: slot.tag_tokens().map(str::to_string).collect(),
            description: slot.text.clone().unwrap_or_default(),
        };

        if let Some(meta) = segments.get(1) {
            if meta.contains(SHOP_MARKER) {
                entry.tags.push(SHOP_TAG.to_string());
            }
            if meta.to_ascii_lowercase().contains(SCARAB_MARKER) {
                entry.tags.push(SCARAB_TAG.to_string());
            }
        }
        if item.contains(REMEMBRANCE_MARKER) {
            entry.tags.push(REMEMBRANCE_TAG.to_string());
        }

        let skip_quantity =
            self.variant.is_refined() && (slot.is_unknown_area() || entry.is_norandom());
        if !skip_quantity {
            if let Some(qty) = quantity::detect(&segments, self.variant) {
                let annotation = qty.annotation();
                entry.name.push_str(&annotation);
                self.listing.multipliers.record(item, &annotation);
                self.listing.stats.annotated += 1;
            }
        }

        Some(entry)
    }
}

/// Classify a whole dump
pub fn classify(slots: &[Slot], variant: Variant) -> Listing {
    let mut classifier = Classifier::new(variant);
    classifier.ingest_all(slots);
    classifier.finish()
}
