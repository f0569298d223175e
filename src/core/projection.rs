//! View projection - Ordered, filtered list derivation for the profile table

use super::profile::Profile;

/// Derive the sequence of rows to render from the collection, the committed
/// filter string, and the externally supplied current profile name.
///
/// Non-empty filter: case-insensitive substring match on the name, input
/// order preserved. Empty filter: the whole collection sorted by name. In
/// both cases the current profile, when present, is pinned to the front
/// with the relative order of all other rows unchanged.
pub fn project(profiles: &[Profile], filter: &str, current: Option<&str>) -> Vec<Profile> {
    let mut rows: Vec<Profile> = if filter.is_empty() {
        let mut all = profiles.to_vec();
        all.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });
        all
    } else {
        let needle = filter.to_lowercase();
        profiles
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    };

    if let Some(current) = current {
        // Stable: everything that is not current keeps its relative order.
        rows.sort_by_key(|p| p.name != current);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profiles(names: &[&str]) -> Vec<Profile> {
        names.iter().map(|n| Profile::new(*n, "")).collect()
    }

    fn names(rows: &[Profile]) -> Vec<&str> {
        rows.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn empty_filter_sorts_by_name() {
        let rows = project(&profiles(&["vpn", "Alpha", "beta"]), "", None);
        assert_eq!(names(&rows), vec!["Alpha", "beta", "vpn"]);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let all = profiles(&["Office", "home", "off_site", "lab"]);
        let rows = project(&all, "OFF", None);
        assert_eq!(names(&rows), vec!["Office", "off_site"]);

        // Soundness: every row matches; completeness: nothing outside does.
        for p in &all {
            let in_rows = rows.iter().any(|r| r.name == p.name);
            assert_eq!(in_rows, p.name.to_lowercase().contains("off"));
        }
    }

    #[test]
    fn filter_preserves_input_order() {
        let rows = project(&profiles(&["zeta_x", "alpha_x", "mid_x"]), "_x", None);
        assert_eq!(names(&rows), vec!["zeta_x", "alpha_x", "mid_x"]);
    }

    #[test]
    fn current_profile_pinned_first() {
        let rows = project(&profiles(&["c", "a", "b"]), "", Some("b"));
        assert_eq!(names(&rows), vec!["b", "a", "c"]);
    }

    #[test]
    fn current_pinned_even_when_filtered() {
        let rows = project(&profiles(&["office", "off_site", "offline"]), "off", Some("offline"));
        assert_eq!(names(&rows), vec!["offline", "office", "off_site"]);
    }

    #[test]
    fn current_absent_from_filtered_set_is_ignored() {
        let rows = project(&profiles(&["office", "home"]), "off", Some("home"));
        assert_eq!(names(&rows), vec!["office"]);
    }

    #[test]
    fn no_match_yields_empty_projection() {
        let rows = project(&profiles(&["a", "b"]), "zzz", Some("a"));
        assert!(rows.is_empty());
    }
}
