//! Stack quantity detection
//!
//! Debug text carries stack sizes as a count directly followed by `x`
//! (`"... 3x"`, `"... 12x"`). Only the last `x` of a segment is considered.
//! Basic takes the character two places before `x` whenever it is not a
//! space, so `(3x` reads as `(3`. Refined requires both characters to be
//! digits.

use crate::Variant;

/// A stack count read from debug text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantity {
    count: String,
}

impl Quantity {
    /// Suffix appended to the item name, e.g. `" x3"`
    pub fn annotation(&self) -> String {
        format!(" x{}", self.count)
    }

    pub fn is_single(&self) -> bool {
        self.count == "1"
    }
}

/// Read a one or two character count ending at the last `x` of `segment`
pub fn scan(segment: &str, variant: Variant) -> Option<Quantity> {
    let bytes = segment.as_bytes();
    let x = segment.rfind('x')?;
    if x == 0 || !bytes[x - 1].is_ascii_digit() {
        return None;
    }

    let wide = x >= 2
        && match variant {
            Variant::Basic => bytes[x - 2] != b' ' && segment.is_char_boundary(x - 2),
            Variant::Refined => bytes[x - 2].is_ascii_digit(),
        };
    let start = if wide { x - 2 } else { x - 1 };

    Some(Quantity {
        count: segment[start..x].to_string(),
    })
}

/// Find the quantity to annotate for one debug text line
///
/// `segments` is the line split on the item delimiter. Basic only looks at
/// the last segment and annotates any count. Refined walks every segment,
/// stops at the first count found, and drops it if the count is `1`.
pub fn detect(segments: &[&str], variant: Variant) -> Option<Quantity> {
    match variant {
        Variant::Basic => segments.last().and_then(|s| scan(s, variant)),
        Variant::Refined => segments
            .iter()
            .find_map(|s| scan(s, variant))
            .filter(|q| !q.is_single()),
    }
}
