//! Column Label Normalizer
//! Canonicalizes column labels so lookups are stable regardless of source formatting.

/// Canonical form of a column label: trimmed, lowercased, runs of spaces
/// collapsed to a single underscore. Idempotent.
pub fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Normalize a header row, order-preserving.
pub fn normalize_labels(labels: &[String]) -> Vec<String> {
    labels.iter().map(|label| normalize_label(label)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_lowercase_underscore() {
        assert_eq!(normalize_label("  Unit EVs Sold "), "unit_evs_sold");
        assert_eq!(normalize_label("Years"), "years");
        assert_eq!(normalize_label("TOTAL"), "total");
    }

    #[test]
    fn test_space_runs_collapse() {
        assert_eq!(normalize_label("Unit   Hybrid  Vehicles Sold"), "unit_hybrid_vehicles_sold");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_label("  Unit EVs Sold ");
        assert_eq!(normalize_label(&once), once);
        assert_eq!(normalize_label("already_normal"), "already_normal");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize_label(""), "");
        assert_eq!(normalize_label("   "), "");
    }

    #[test]
    fn test_header_row() {
        let raw = vec!["Years".to_string(), " Unit Vehicles Sold".to_string()];
        assert_eq!(normalize_labels(&raw), vec!["years", "unit_vehicles_sold"]);
    }
}
