//! Multiplier variants seen per item

use indexmap::IndexMap;

/// Distinct quantity annotations observed for each raw item name
///
/// Names and annotations both keep first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiplierRegistry {
    by_item: IndexMap<String, Vec<String>>,
}

impl MultiplierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an annotation for `raw_name`, ignoring repeats
    ///
    /// Returns true if the annotation was new for this item.
    pub fn record(&mut self, raw_name: &str, annotation: &str) -> bool {
        let seen = self.by_item.entry(raw_name.to_string()).or_default();
        if seen.iter().any(|a| a == annotation) {
            return false;
        }
        seen.push(annotation.to_string());
        true
    }

    /// Annotations recorded for an item
    pub fn get(&self, raw_name: &str) -> Option<&[String]> {
        self.by_item.get(raw_name).map(|v| v.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.by_item.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.by_item.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_item.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_dedupes_per_item() {
        let mut reg = MultiplierRegistry::new();
        assert!(reg.record("Kukri", " x4"));
        assert!(reg.record("Kukri", " x8"));
        assert!(!reg.record("Kukri", " x4"));
        assert!(reg.record("Throwing Dagger", " x4"));

        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get("Kukri"), Some(&[" x4".to_string(), " x8".to_string()][..]));
        assert_eq!(reg.get("Throwing Dagger"), Some(&[" x4".to_string()][..]));
    }

    #[test]
    fn test_iter_keeps_first_seen_order() {
        let mut reg = MultiplierRegistry::new();
        reg.record("Poisonbloom", " x2");
        reg.record("Arrow", " x10");
        reg.record("Poisonbloom", " x3");

        let names: Vec<_> = reg.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Poisonbloom", "Arrow"]);
    }
}
