//! Resume Target Resolver: how many resumes a recruiter must source for a
//! requirement, from its criticality × toughness.

pub const DEFAULT_CRITICALITY: &str = "MEDIUM";
pub const DEFAULT_TOUGHNESS: &str = "Medium";
/// Returned when the normalized pair is not in the table.
pub const FALLBACK_TARGET: u32 = 4;

const RESUME_TARGETS: &[(&str, &[(&str, u32)])] = &[
    ("HIGH", &[("Easy", 6), ("Medium", 4), ("Tough", 2)]),
    ("MEDIUM", &[("Easy", 5), ("Medium", 3), ("Tough", 2)]),
    ("LOW", &[("Easy", 4), ("Medium", 3), ("Tough", 2)]),
];

/// Empty criticality becomes MEDIUM, otherwise uppercased.
pub fn normalize_criticality(raw: &str) -> String {
    if raw.is_empty() {
        DEFAULT_CRITICALITY.to_string()
    } else {
        raw.to_uppercase()
    }
}

/// Empty toughness becomes Medium, otherwise title-cased ("tOUGH" -> "Tough").
pub fn normalize_toughness(raw: &str) -> String {
    if raw.is_empty() {
        return DEFAULT_TOUGHNESS.to_string();
    }
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str().to_lowercase()),
        None => String::new(),
    }
}

pub fn resolve_target(criticality: &str, toughness: &str) -> u32 {
    let criticality = normalize_criticality(criticality);
    let toughness = normalize_toughness(toughness);

    RESUME_TARGETS
        .iter()
        .find(|(c, _)| *c == criticality)
        .and_then(|(_, row)| row.iter().find(|(t, _)| *t == toughness))
        .map(|(_, target)| *target)
        .unwrap_or(FALLBACK_TARGET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_table() {
        let expected = [
            ("HIGH", "Easy", 6),
            ("HIGH", "Medium", 4),
            ("HIGH", "Tough", 2),
            ("MEDIUM", "Easy", 5),
            ("MEDIUM", "Medium", 3),
            ("MEDIUM", "Tough", 2),
            ("LOW", "Easy", 4),
            ("LOW", "Medium", 3),
            ("LOW", "Tough", 2),
        ];
        for (c, t, target) in expected {
            assert_eq!(resolve_target(c, t), target, "{c}/{t}");
        }
    }

    #[test]
    fn test_case_insensitive_inputs() {
        assert_eq!(resolve_target("low", "tough"), 2);
        assert_eq!(resolve_target("High", "EASY"), 6);
    }

    #[test]
    fn test_empty_inputs_default_to_medium() {
        assert_eq!(resolve_target("", ""), 3);
        assert_eq!(resolve_target("HIGH", ""), 4);
        assert_eq!(resolve_target("", "Easy"), 5);
    }

    #[test]
    fn test_unknown_pair_falls_back() {
        assert_eq!(resolve_target("UNKNOWN", "Unknown"), FALLBACK_TARGET);
        assert_eq!(resolve_target("HIGH", "Impossible"), FALLBACK_TARGET);
        // whitespace is not empty, so it is not defaulted
        assert_eq!(resolve_target(" ", "Easy"), FALLBACK_TARGET);
    }

    #[test]
    fn test_normalize_toughness() {
        assert_eq!(normalize_toughness("tOUGH"), "Tough");
        assert_eq!(normalize_toughness("m"), "M");
        assert_eq!(normalize_toughness(""), "Medium");
    }
}
