//! Area code lookup
//!
//! Location names are prefixed with a zone code and, for items inside a
//! named site, the site code in parentheses, e.g.
//! `WP/(TCC): Golden Rune [1] - by entrance`. Both are derived from the
//! randomizer's area name by substring match against the ordered tables
//! below. The first matching rule wins, so a name that contains another
//! (`leyndell2` contains `leyndell`, `caelidwaypointruins` contains
//! `waypointruins`) must be listed before it.

/// Substring to code mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaRule {
    pub pattern: &'static str,
    pub code: &'static str,
}

const fn rule(pattern: &'static str, code: &'static str) -> AreaRule {
    AreaRule { pattern, code }
}

/// How an exclusion entry matches an area name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaMatch {
    Exact(&'static str),
    Contains(&'static str),
}

impl AreaMatch {
    /// Case-insensitive, like the code tables
    pub fn matches(&self, area: &str) -> bool {
        let area = area.to_ascii_lowercase();
        match self {
            AreaMatch::Exact(name) => area == *name,
            AreaMatch::Contains(part) => area.contains(part),
        }
    }
}

// ============================================================================
// Zones
// ============================================================================

/// Zone codes, checked top to bottom
pub const ZONE_CODES: &[AreaRule] = &[
    rule("chapel", "CA"),
    rule("roundtable", "RH"),
    rule("bridgeofsacrifice", "BS"),
    rule("stormhill", "LG"),
    rule("limgrave", "LG"),
    rule("weeping", "WP"),
    rule("dragonbarrow", "CL"),
    rule("caelid", "CL"),
    // Ashen capital has to win over the royal capital
    rule("leyndell2", "LAC"),
    rule("leyndell", "LRC"),
    rule("elphael", "EBH"),
    rule("haligtree", "MH"),
    rule("siofra", "SR"),
];

// ============================================================================
// Sites within a zone
// ============================================================================

/// Site codes, checked top to bottom
pub const SUBAREA_CODES: &[AreaRule] = &[
    // Limgrave
    rule("artistsshack", "AS"),
    rule("coastalcave", "CC"),
    rule("churchofdragoncommunion", "CDC"),
    rule("churchofelleh", "CE"),
    rule("dragonburnt", "DBR"),
    rule("deathtouched", "DC"),
    rule("forthaight", "FH"),
    rule("forlornhound", "FHE"),
    rule("grovesidecave", "GC"),
    rule("gatefront", "GR"),
    rule("highroadcave", "HC"),
    rule("limgravetunnels", "LT"),
    rule("murkwatercatacombs", "MCC"),
    rule("murkwatercave", "MCV"),
    rule("mistwood", "MR"),
    rule("stormfootcatacombs", "SC"),
    rule("stormhillevergaol", "SE"),
    rule("stormgate", "SG"),
    rule("stormhillshack", "SS"),
    rule("summonwater", "SWV"),
    rule("thirdchurch", "TCM"),
    rule("caelidwaypointruins", "CWR"),
    rule("waypointruins", "WR"),
    rule("warmaster", "WS"),
    // Weeping Peninsula
    rule("ailingvillage", "AV"),
    rule("callubaptismal", "CBC"),
    rule("castlemorne", "CM"),
    rule("churchofpilgrimage", "CP"),
    rule("demihumanforestruins", "DHFR"),
    rule("earthbore", "EC"),
    rule("fourthchurch", "FCM"),
    rule("forestlookouttower", "FLT"),
    rule("impalers", "IC"),
    rule("isolatedmerchantsshack", "IMS"),
    rule("mornetunnel", "MT"),
    rule("oridys", "OR"),
    rule("tombswardcatacombs", "TCC"),
    rule("tombswardcave", "TCV"),
    rule("tombswardruins", "TwR"),
    rule("weepingevergaol", "WE"),
    rule("witchbane", "WR"),
    // Caelid
    rule("abandonedcave", "AC"),
    rule("bestialsanctum", "BS"),
    rule("caelidcatacombs", "CCC"),
    rule("cathedralofdragoncommunion", "CDC"),
    rule("churchoftheplague", "CP"),
    rule("caelemruins", "CR"),
    rule("dragonbarrowcave", "DC"),
    rule("divinetower", "DT"),
    rule("fortfaroth", "FF"),
    rule("fortgael", "FG"),
    rule("forsakenruins", "FR"),
    rule("gaolcave", "GC"),
    rule("gowry", "GS"),
    rule("galetunnel", "GT"),
    rule("lennesrise", "LR"),
    rule("minorerdtreecatacombs", "MEC"),
    rule("redmane", "RC"),
    rule("smolderingchurch", "SC"),
    rule("selliacrystaltunnel", "SCT"),
    rule("selliaevergaol", "SE"),
    rule("selliahideaway", "SH"),
    rule("streetofsages", "SSR"),
    rule("sellia", "STS"),
    rule("wailingdunes", "WD"),
    rule("wardeadcatacombs", "WDC"),
    // Leyndell
    rule("divinebridge", "DB"),
];

/// Areas that never hold real item locations
pub const EXCLUDED_AREAS: &[AreaMatch] = &[
    AreaMatch::Exact("unknown"),
    AreaMatch::Contains("unused"),
    AreaMatch::Contains("_test"),
];

/// Resolved zone and site code for an area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AreaCode {
    pub zone: &'static str,
    pub sub: &'static str,
}

impl std::fmt::Display for AreaCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.sub.is_empty() {
            write!(f, "{}/", self.zone)
        } else {
            write!(f, "{}/({})", self.zone, self.sub)
        }
    }
}

/// First rule whose pattern occurs in `area`
pub fn first_match(rules: &[AreaRule], area: &str) -> Option<&'static str> {
    let area = area.to_ascii_lowercase();
    rules
        .iter()
        .find(|r| area.contains(r.pattern))
        .map(|r| r.code)
}

pub fn zone_code(area: &str) -> Option<&'static str> {
    first_match(ZONE_CODES, area)
}

pub fn subarea_code(area: &str) -> Option<&'static str> {
    first_match(SUBAREA_CODES, area)
}

/// Resolve both code parts, leaving unmatched parts empty
pub fn resolve(area: &str) -> AreaCode {
    AreaCode {
        zone: zone_code(area).unwrap_or_default(),
        sub: subarea_code(area).unwrap_or_default(),
    }
}

/// Whether an area is dropped from the location listing
pub fn is_excluded(area: &str) -> bool {
    EXCLUDED_AREAS.iter().any(|m| m.matches(area))
}
