//! List Screen Helpers
//!
//! Client-side search/filter/sort over a fully fetched collection, plus the
//! post-delete cache mutation. Every list screen funnels through these so the
//! semantics stay uniform: case-insensitive substring search over derived
//! display fields, exact-match facet filter, and a strict total order per
//! sort field with an id-ascending tie-break.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Self {
        if value == "desc" {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

/// Splits a `"field-order"` select value (e.g. `"name-asc"`, `"joinDate-desc"`)
/// into its parts. Unrecognized order suffixes fall back to ascending.
pub fn parse_sort_option(value: &str) -> (String, SortOrder) {
    match value.rsplit_once('-') {
        Some((field, order)) => (field.to_string(), SortOrder::parse(order)),
        None => (value.to_string(), SortOrder::Asc),
    }
}

/// Case-insensitive substring match across the screen's display fields.
/// An empty search term matches everything.
pub fn matches_search(term: &str, haystacks: &[&str]) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    haystacks
        .iter()
        .any(|h| h.to_lowercase().contains(&needle))
}

/// Exact-match facet filter; the `"all"` sentinel disables it.
pub fn matches_facet(selected: &str, actual: &str) -> bool {
    selected == "all" || selected == actual
}

/// Sorts rows by the derived key in the given direction. Ties are broken by
/// the identity key ascending in both directions, so every sort is a strict
/// total order and stable across reloads.
pub fn sort_rows<T, K: Ord>(
    rows: &mut [T],
    order: SortOrder,
    key: impl Fn(&T) -> K,
    id: impl Fn(&T) -> String,
) {
    match order {
        SortOrder::Asc => {
            rows.sort_by(|a, b| key(a).cmp(&key(b)).then_with(|| id(a).cmp(&id(b))))
        }
        SortOrder::Desc => {
            rows.sort_by(|a, b| key(b).cmp(&key(a)).then_with(|| id(a).cmp(&id(b))))
        }
    }
}

/// Removes the entity with the matching identity key from the collection
/// cache. Called only after the backend confirmed the delete; returns whether
/// anything was removed.
pub fn remove_by_id<T>(rows: &mut Vec<T>, target: &str, id: impl Fn(&T) -> &str) -> bool {
    let before = rows.len();
    rows.retain(|row| id(row) != target);
    rows.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: &'static str,
        name: &'static str,
        likes: usize,
        status: &'static str,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "a", name: "Alice", likes: 4, status: "active" },
            Row { id: "b", name: "Bob", likes: 9, status: "inactive" },
            Row { id: "c", name: "Carol", likes: 4, status: "active" },
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let filtered: Vec<_> = rows()
            .into_iter()
            .filter(|r| matches_search("ali", &[r.name]))
            .collect();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "a");
    }

    #[test]
    fn test_zero_match_search_is_empty_regardless_of_sort() {
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let mut filtered: Vec<_> = rows()
                .into_iter()
                .filter(|r| matches_search("zzz", &[r.name]))
                .collect();
            sort_rows(&mut filtered, order, |r| r.name, |r| r.id.to_string());
            assert!(filtered.is_empty());
        }
    }

    #[test]
    fn test_empty_term_matches_all() {
        assert!(rows().iter().all(|r| matches_search("", &[r.name])));
    }

    #[test]
    fn test_search_spans_multiple_fields() {
        assert!(matches_search("bob", &["some caption", "Bob Jones"]));
        assert!(!matches_search("bob", &["some caption", "Alice"]));
    }

    #[test]
    fn test_facet_all_sentinel() {
        assert!(matches_facet("all", "suspended"));
        assert!(matches_facet("active", "active"));
        assert!(!matches_facet("active", "inactive"));
    }

    #[test]
    fn test_search_and_facet_compose() {
        let filtered: Vec<_> = rows()
            .into_iter()
            .filter(|r| matches_search("o", &[r.name]) && matches_facet("active", r.status))
            .collect();
        // "o" matches Bob and Carol; facet keeps only Carol.
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "c");
    }

    #[test]
    fn test_sort_directions() {
        let mut asc = rows();
        sort_rows(&mut asc, SortOrder::Asc, |r| r.name, |r| r.id.to_string());
        assert_eq!(asc.iter().map(|r| r.id).collect::<Vec<_>>(), ["a", "b", "c"]);

        let mut desc = rows();
        sort_rows(&mut desc, SortOrder::Desc, |r| r.name, |r| r.id.to_string());
        assert_eq!(desc.iter().map(|r| r.id).collect::<Vec<_>>(), ["c", "b", "a"]);
    }

    #[test]
    fn test_sort_ties_break_by_id_ascending_in_both_directions() {
        let mut asc = rows();
        sort_rows(&mut asc, SortOrder::Asc, |r| r.likes, |r| r.id.to_string());
        assert_eq!(asc.iter().map(|r| r.id).collect::<Vec<_>>(), ["a", "c", "b"]);

        let mut desc = rows();
        sort_rows(&mut desc, SortOrder::Desc, |r| r.likes, |r| r.id.to_string());
        assert_eq!(desc.iter().map(|r| r.id).collect::<Vec<_>>(), ["b", "a", "c"]);
    }

    #[test]
    fn test_remove_by_id_removes_exactly_one() {
        let mut cache = rows();
        assert!(remove_by_id(&mut cache, "b", |r| r.id));
        assert_eq!(cache.len(), 2);
        assert!(cache.iter().all(|r| r.id != "b"));
        assert!(cache.iter().any(|r| r.id == "a"));
        assert!(cache.iter().any(|r| r.id == "c"));
    }

    #[test]
    fn test_remove_by_id_missing_target_leaves_cache_unchanged() {
        let mut cache = rows();
        assert!(!remove_by_id(&mut cache, "nope", |r| r.id));
        assert_eq!(cache, rows());
    }

    #[test]
    fn test_parse_sort_option() {
        assert_eq!(parse_sort_option("name-asc"), ("name".to_string(), SortOrder::Asc));
        assert_eq!(
            parse_sort_option("joinDate-desc"),
            ("joinDate".to_string(), SortOrder::Desc)
        );
        assert_eq!(parse_sort_option("name"), ("name".to_string(), SortOrder::Asc));
    }
}
