pub mod sample;

use std::collections::HashSet;

use compact_str::CompactString;

use crate::layout::Item;

/// Category used by the source table for rows it could not classify.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Raw row handed over by whatever loads the population table,
/// before validation.
#[derive(Debug, Clone)]
pub struct RawEntry {
    /// Country name
    pub name: String,
    /// Continent, if the loader could resolve one
    pub category: Option<String>,
    /// Population for the selected year, if present and numeric
    pub weight: Option<f64>,
}

impl RawEntry {
    pub fn new(name: &str, category: Option<&str>, weight: Option<f64>) -> Self {
        Self {
            name: name.to_string(),
            category: category.map(str::to_string),
            weight,
        }
    }
}

/// Why a raw entry was left out of the layout input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropReason {
    UnknownCategory,
    MissingWeight,
    InvalidWeight,
    DuplicateName,
}

/// Validated layout input plus what was rejected on the way.
#[derive(Debug, Default)]
pub struct Prepared {
    pub items: Vec<Item>,
    pub dropped: Vec<(String, DropReason)>,
}

impl Prepared {
    pub fn dropped_for(&self, reason: DropReason) -> usize {
        self.dropped.iter().filter(|(_, r)| *r == reason).count()
    }
}

/// Turn raw rows into layout items.
///
/// Rows are dropped when the category is missing or `"Unknown"`, the weight is
/// missing, non-finite or not positive, or the name was already seen (the
/// first occurrence wins). Input order is preserved.
pub fn prepare_items(entries: impl IntoIterator<Item = RawEntry>) -> Prepared {
    let mut prepared = Prepared::default();
    let mut seen: HashSet<CompactString> = HashSet::new();

    for entry in entries {
        let category = match entry.category.as_deref() {
            Some(c) if c != UNKNOWN_CATEGORY => c,
            _ => {
                prepared.dropped.push((entry.name, DropReason::UnknownCategory));
                continue;
            }
        };
        let weight = match entry.weight {
            Some(w) if w.is_finite() && w > 0.0 => w,
            Some(_) => {
                prepared.dropped.push((entry.name, DropReason::InvalidWeight));
                continue;
            }
            None => {
                prepared.dropped.push((entry.name, DropReason::MissingWeight));
                continue;
            }
        };
        if !seen.insert(CompactString::new(&entry.name)) {
            prepared.dropped.push((entry.name, DropReason::DuplicateName));
            continue;
        }
        prepared.items.push(Item::new(&entry.name, category, weight));
    }

    if !prepared.dropped.is_empty() {
        tracing::debug!(
            "Prepared {} items, dropped {} ({} unknown category, {} missing weight, {} invalid weight, {} duplicate)",
            prepared.items.len(),
            prepared.dropped.len(),
            prepared.dropped_for(DropReason::UnknownCategory),
            prepared.dropped_for(DropReason::MissingWeight),
            prepared.dropped_for(DropReason::InvalidWeight),
            prepared.dropped_for(DropReason::DuplicateName),
        );
    }

    prepared
}

pub fn total_weight(items: &[Item]) -> f64 {
    items.iter().map(|item| item.weight).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_valid_rows_in_order() {
        let prepared = prepare_items([
            RawEntry::new("India", Some("Asia"), Some(1_450.0)),
            RawEntry::new("Chile", Some("South America"), Some(19.6)),
        ]);
        assert!(prepared.dropped.is_empty());
        let names: Vec<&str> = prepared.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["India", "Chile"]);
        assert!((total_weight(&prepared.items) - 1_469.6).abs() < 1e-9);
    }

    #[test]
    fn drops_unknown_and_invalid_rows() {
        let prepared = prepare_items([
            RawEntry::new("World", Some("Unknown"), Some(8_000.0)),
            RawEntry::new("Nowhere", None, Some(1.0)),
            RawEntry::new("Empty", Some("Asia"), None),
            RawEntry::new("Zero", Some("Asia"), Some(0.0)),
            RawEntry::new("Negative", Some("Asia"), Some(-3.0)),
            RawEntry::new("NaN", Some("Asia"), Some(f64::NAN)),
            RawEntry::new("Japan", Some("Asia"), Some(124.0)),
        ]);
        assert_eq!(prepared.items.len(), 1);
        assert_eq!(prepared.items[0].name, "Japan");
        assert_eq!(prepared.dropped_for(DropReason::UnknownCategory), 2);
        assert_eq!(prepared.dropped_for(DropReason::MissingWeight), 1);
        assert_eq!(prepared.dropped_for(DropReason::InvalidWeight), 3);
    }

    #[test]
    fn first_duplicate_name_wins() {
        let prepared = prepare_items([
            RawEntry::new("Georgia", Some("Europe/Asia"), Some(3.8)),
            RawEntry::new("Georgia", Some("North America"), Some(11.0)),
        ]);
        assert_eq!(prepared.items.len(), 1);
        assert_eq!(prepared.items[0].category, "Europe/Asia");
        assert_eq!(prepared.dropped, [("Georgia".to_string(), DropReason::DuplicateName)]);
    }
}
