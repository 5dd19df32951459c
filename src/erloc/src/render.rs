//! Text output for the location listing and multiplier report

use crate::area;
use crate::classify::{ItemEntry, Listing};
use crate::registry::MultiplierRegistry;
use crate::slots::UNKNOWN_AREA;
use crate::Variant;

/// Whether an area gets a block in the location listing
pub fn renders_area(area: &str, variant: Variant) -> bool {
    match variant {
        Variant::Basic => area != UNKNOWN_AREA,
        Variant::Refined => !area::is_excluded(area),
    }
}

/// Format one `ERLocationData` line (without the trailing newline)
pub fn location_line(entry: &ItemEntry, area: &str, variant: Variant) -> String {
    let (comment, code) = match variant {
        Variant::Basic => ("", "/".to_string()),
        Variant::Refined => ("#", area::resolve(area).to_string()),
    };

    let mut line = format!(
        "    {}ERLocationData(\"{}: {} - {}\", \"{}\", key=\"{}\"",
        comment, code, entry.name, entry.description, entry.name, entry.key
    );
    for tag in entry.rendered_tags() {
        line.push_str(&format!(", {}=True", tag));
    }
    line.push_str("),");
    line
}

/// Render every area block of the listing
///
/// Area headers and footers are always written together, even when no
/// entries survive filtering.
pub fn locations(listing: &Listing, variant: Variant) -> String {
    let mut out = String::new();

    for (area, entries) in &listing.areas {
        if !renders_area(area, variant) {
            continue;
        }

        out.push_str(&format!("\"{}\":[\n", area));
        for entry in entries {
            if variant.is_refined() && entry.is_norandom() {
                continue;
            }
            out.push_str(&location_line(entry, area, variant));
            out.push('\n');
        }
        out.push_str("],\n");
    }

    out
}

/// Render one line per item with every annotation seen for it
pub fn multipliers(registry: &MultiplierRegistry) -> String {
    let mut out = String::new();

    for (name, annotations) in registry.iter() {
        if annotations.is_empty() {
            continue;
        }
        out.push_str(name);
        for annotation in annotations {
            out.push(' ');
            out.push_str(annotation);
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::slots::Slot;

    fn entry(name: &str, key: &str, tags: &[&str]) -> ItemEntry {
        ItemEntry {
            name: name.to_string(),
            raw_name: name.to_string(),
            key: key.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            description: String::new(),
        }
    }

    #[test]
    fn test_basic_line() {
        let e = entry("Some Item", "slot1", &[]);
        assert_eq!(
            location_line(&e, "limgrave", Variant::Basic),
            "    ERLocationData(\"/: Some Item - \", \"Some Item\", key=\"slot1\"),"
        );
    }

    #[test]
    fn test_refined_line_has_code_and_comment() {
        let mut e = entry("Finger Severer", "k1", &["shop", "missable"]);
        e.description = "beside grace".to_string();
        assert_eq!(
            location_line(&e, "limgrave_stormgate", Variant::Refined),
            "    #ERLocationData(\"LG/(SG): Finger Severer - beside grace\", \"Finger Severer\", \
             key=\"k1\", shop=True, missable=True),"
        );
    }

    #[test]
    fn test_suppressed_tag_not_rendered() {
        let e = entry("Arrow", "k", &["exclude:chrysalidsmemento", "scarab"]);
        let line = location_line(&e, "limgrave", Variant::Basic);
        assert!(!line.contains("chrysalidsmemento"));
        assert!(line.ends_with("key=\"k\", scarab=True),"));
    }

    #[test]
    fn test_unknown_area_skipped() {
        let slots = vec![
            Slot {
                area: "unknown".to_string(),
                key: "a".to_string(),
                debug_text: vec!["Arrow - x".to_string()],
                ..Default::default()
            },
            Slot {
                area: "limgrave".to_string(),
                key: "b".to_string(),
                debug_text: vec!["Shop Kale - x".to_string()],
                ..Default::default()
            },
        ];

        for variant in Variant::ALL {
            let text = locations(&classify(&slots, variant), variant);
            assert!(!text.contains("unknown"));
            assert_eq!(text, "\"limgrave\":[\n],\n");
        }
    }

    #[test]
    fn test_refined_drops_excluded_areas_and_norandom() {
        let slots = vec![
            Slot {
                area: "limgrave_unused".to_string(),
                key: "a".to_string(),
                debug_text: vec!["Arrow - x".to_string()],
                ..Default::default()
            },
            Slot {
                area: "limgrave".to_string(),
                key: "b".to_string(),
                debug_text: vec!["Bolt - x".to_string()],
                tags: Some("norandom".to_string()),
                ..Default::default()
            },
        ];

        let refined = locations(&classify(&slots, Variant::Refined), Variant::Refined);
        assert_eq!(refined, "\"limgrave\":[\n],\n");

        let basic = locations(&classify(&slots, Variant::Basic), Variant::Basic);
        assert!(basic.contains("\"limgrave_unused\":["));
        assert!(basic.contains("\"Bolt\", key=\"b\", norandom=True"));
    }

    #[test]
    fn test_multiplier_report() {
        let mut reg = MultiplierRegistry::new();
        reg.record("Kukri", " x4");
        reg.record("Kukri", " x8");
        reg.record("Poisonbloom", " x2");
        assert_eq!(multipliers(&reg), "Kukri  x4  x8\nPoisonbloom  x2\n");
    }

    #[test]
    fn test_empty_multiplier_report() {
        assert_eq!(multipliers(&MultiplierRegistry::new()), "");
    }
}
