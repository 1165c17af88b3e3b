use super::RawEntry;

/// Approximate 2024 populations of the most populous countries, plus a few
/// rows the preparation step is expected to reject.
const SAMPLE_2024: &[(&str, Option<&str>, Option<f64>)] = &[
    ("India", Some("Asia"), Some(1_450_935_791.0)),
    ("China", Some("Asia"), Some(1_408_975_000.0)),
    ("United States", Some("North America"), Some(340_110_988.0)),
    ("Indonesia", Some("Asia"), Some(283_487_931.0)),
    ("Pakistan", Some("Asia"), Some(251_269_164.0)),
    ("Nigeria", Some("Africa"), Some(232_679_478.0)),
    ("Brazil", Some("South America"), Some(211_998_573.0)),
    ("Bangladesh", Some("Asia"), Some(173_562_364.0)),
    ("Russian Federation", Some("Europe/Asia"), Some(143_533_851.0)),
    ("Ethiopia", Some("Africa"), Some(132_059_767.0)),
    ("Mexico", Some("North America"), Some(130_861_007.0)),
    ("Japan", Some("Asia"), Some(123_975_371.0)),
    ("Egypt", Some("Africa"), Some(116_538_258.0)),
    ("Philippines", Some("Asia"), Some(115_843_670.0)),
    ("Congo, Dem. Rep.", Some("Africa"), Some(109_276_265.0)),
    ("Viet Nam", Some("Asia"), Some(100_987_686.0)),
    ("Iran, Islamic Rep.", Some("Asia"), Some(91_567_738.0)),
    ("Turkiye", Some("Europe/Asia"), Some(85_518_661.0)),
    ("Germany", Some("Europe"), Some(83_510_950.0)),
    ("Thailand", Some("Asia"), Some(71_668_011.0)),
    ("United Kingdom", Some("Europe"), Some(69_226_000.0)),
    ("Tanzania", Some("Africa"), Some(68_560_157.0)),
    ("France", Some("Europe"), Some(68_516_699.0)),
    ("South Africa", Some("Africa"), Some(64_007_187.0)),
    ("Italy", Some("Europe"), Some(58_986_023.0)),
    ("Kenya", Some("Africa"), Some(56_432_944.0)),
    ("Colombia", Some("South America"), Some(52_886_363.0)),
    ("Argentina", Some("South America"), Some(45_696_159.0)),
    ("Canada", Some("North America"), Some(41_288_599.0)),
    ("Peru", Some("South America"), Some(34_217_848.0)),
    ("Australia", Some("Oceania"), Some(27_204_809.0)),
    ("Iceland", Some("Europe"), Some(393_396.0)),
    ("Tuvalu", Some("Oceania"), Some(9_646.0)),
    ("World", Some("Unknown"), Some(8_142_056_446.0)),
    ("Not classified", None, None),
    ("Eritrea", Some("Africa"), None),
];

/// Raw rows for the demo binary.
pub fn sample_entries() -> Vec<RawEntry> {
    SAMPLE_2024
        .iter()
        .map(|&(name, category, weight)| RawEntry::new(name, category, weight))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{prepare_items, DropReason};

    #[test]
    fn sample_prepares_cleanly() {
        let prepared = prepare_items(sample_entries());
        assert_eq!(prepared.items.len(), SAMPLE_2024.len() - 3);
        assert_eq!(prepared.dropped_for(DropReason::UnknownCategory), 2);
        assert_eq!(prepared.dropped_for(DropReason::MissingWeight), 1);
    }
}
