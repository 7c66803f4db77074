//! Client-side table search.
//!
//! Filtering is a pure function of the loaded list and the search term: it is
//! recomputed on every keystroke and never touches the network.

/// A row that can be matched against a search box.
pub trait Searchable {
    /// `needle` is already lower-cased.
    fn matches(&self, needle: &str) -> bool;
}

/// Rows whose designated fields contain `term`, case-insensitively.
///
/// An empty term keeps every row, in order.
pub fn filter_rows<'a, T: Searchable>(rows: &'a [T], term: &str) -> Vec<&'a T> {
    let needle = term.to_lowercase();
    rows.iter().filter(|row| row.matches(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NotificationEmail, Regulation};

    fn emails() -> Vec<NotificationEmail> {
        vec![
            NotificationEmail {
                id: 1,
                name: "Qualité".into(),
                adresse: "qa@lab.ma".into(),
            },
            NotificationEmail {
                id: 2,
                name: "Direction".into(),
                adresse: "DG@lab.ma".into(),
            },
        ]
    }

    #[test]
    fn test_empty_term_keeps_all() {
        let rows = emails();
        assert_eq!(filter_rows(&rows, "").len(), 2);
    }

    #[test]
    fn test_case_insensitive_on_either_field() {
        let rows = emails();
        let hits = filter_rows(&rows, "dg@");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);

        let hits = filter_rows(&rows, "QUALITÉ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        assert!(filter_rows(&rows, "zzz").is_empty());
    }

    #[test]
    fn test_regulations_match_title_only() {
        let rows: Vec<Regulation> = serde_json::from_str(
            r#"[{"id":1,"titre":"Arrêté pharmacie","url":"https://x/arrete"},
                {"id":2,"titre":"Décret","url":"https://x/pharmacie"}]"#,
        )
        .unwrap();
        let hits = filter_rows(&rows, "pharmacie");
        assert_eq!(hits.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1]);
    }
}
