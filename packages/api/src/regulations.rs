//! # Regulations, categories and per-row report actions
//!
//! Regulations are read-only from the dashboard except for report triggers.
//! This module holds their endpoints plus the pure helpers the overview and
//! regulations pages render from:
//!
//! | Helper | Purpose |
//! |--------|---------|
//! | [`merge_categories`] | Backend categories first, then the fallback palette for names the backend did not send. |
//! | [`category_color`] / [`category_for`] | Badge colour and category lookup for a row. |
//! | [`report_actions`] | Which buttons a row shows, depending on whether it has a report. |
//! | [`RowStatus`] | In-flight operations keyed by regulation id. |
//! | [`filter_by_category`] / [`count_added_on`] | Overview filters and statistics. |

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::dates::parse_timestamp;
use crate::error::ApiError;
use crate::models::{Category, ImportAck, Regulation};
use crate::ApiClient;

/// Colour used when neither the backend nor the palette knows a category.
pub const DEFAULT_CATEGORY_COLOR: &str = "#6c757d";

/// Fallback palette, in display order.
pub const CATEGORY_PALETTE: [(&str, &str); 10] = [
    ("Autorisation de Mise sur le Marché (AMM)", "#0d6efd"),
    ("Pharmacovigilance", "#6610f2"),
    ("Contrôle Qualité (QC)", "#6f42c1"),
    ("Assurance Qualité (QA)", "#d63384"),
    ("Production et Fabrication", "#dc3545"),
    ("Affaires Réglementaires Internationales", "#fd7e14"),
    ("Affaires Médicales et Promotionnelles", "#ffc107"),
    ("Environnement, Hygiène et Sécurité (EHS)", "#20c997"),
    ("Formations et Compétences", "#0dcaf0"),
    ("Données Cliniques et Précliniques", "#64748B"),
];

impl ApiClient {
    /// `GET /reglements`
    pub async fn regulations(&self) -> Result<Vec<Regulation>, ApiError> {
        self.get_json("reglements").await
    }

    /// `GET /categories`
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("categories").await
    }

    /// `POST /webhook/lancer`: re-run the regulatory text import.
    pub async fn trigger_import(&self) -> Result<ImportAck, ApiError> {
        self.untimed().post_json::<(), _>("webhook/lancer", None).await
    }

    /// `POST /rapports/generer/:id`: first report for a regulation.
    pub async fn generate_report(&self, regulation_id: u64) -> Result<(), ApiError> {
        self.untimed().post_discard::<()>(&format!("rapports/generer/{regulation_id}"), None)
            .await
    }

    /// `POST /reglements/:id/regenere`: replace an existing report.
    pub async fn regenerate_report(&self, regulation_id: u64) -> Result<(), ApiError> {
        self.untimed().post_discard::<()>(&format!("reglements/{regulation_id}/regenere"), None)
            .await
    }
}

fn palette_color(name: &str) -> Option<&'static str> {
    CATEGORY_PALETTE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, color)| *color)
}

/// Merge backend categories with the fallback palette.
///
/// Backend entries come first, in backend order, and win on name collision.
/// Palette entries whose name the backend did not send follow in palette
/// order, with the name doubling as id.
pub fn merge_categories(server: Vec<Category>) -> Vec<Category> {
    let mut merged = server;
    for (name, color) in CATEGORY_PALETTE {
        if !merged.iter().any(|c| c.nom == name) {
            merged.push(Category {
                id: name.to_string(),
                nom: name.to_string(),
                couleur: Some(color.to_string()),
            });
        }
    }
    merged
}

/// Colour of a category: its own, else the palette's, else grey.
pub fn category_color(category: &Category) -> &str {
    category
        .couleur
        .as_deref()
        .or_else(|| palette_color(&category.nom))
        .unwrap_or(DEFAULT_CATEGORY_COLOR)
}

/// Category of a regulation, matched by id or, for unmapped rows, by name.
pub fn category_for<'a>(categories: &'a [Category], regulation: &Regulation) -> Option<&'a Category> {
    let key = regulation.categorie_id.as_deref()?;
    categories.iter().find(|c| c.id == key || c.nom == key)
}

/// Regulations in `category_id`, or all of them for `None`.
pub fn filter_by_category<'a>(regulations: &'a [Regulation], category_id: Option<&str>) -> Vec<&'a Regulation> {
    regulations
        .iter()
        .filter(|r| category_id.is_none() || r.categorie_id.as_deref() == category_id)
        .collect()
}

/// How many regulations were imported on `day` (by `created_at`).
pub fn count_added_on(regulations: &[Regulation], day: NaiveDate) -> usize {
    regulations
        .iter()
        .filter_map(|r| r.created_at.as_deref().and_then(parse_timestamp))
        .filter(|ts| ts.date() == day)
        .count()
}

/// A button on a regulation row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReportAction {
    Generate,
    Open,
    Pdf,
    Regenerate,
}

impl ReportAction {
    pub fn label(&self) -> &'static str {
        match self {
            ReportAction::Generate => "Générer",
            ReportAction::Open => "Ouvrir",
            ReportAction::Pdf => "PDF",
            ReportAction::Regenerate => "Régénérer",
        }
    }

    /// Label while the action is in flight.
    pub fn busy_label(&self) -> &'static str {
        match self {
            ReportAction::Generate => "Génération...",
            ReportAction::Regenerate => "Régénération...",
            other => other.label(),
        }
    }

    /// Whether the action calls the backend (as opposed to opening a tab).
    pub fn is_request(&self) -> bool {
        matches!(self, ReportAction::Generate | ReportAction::Regenerate)
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            ReportAction::Regenerate => "✅ Rapport régénéré avec succès.",
            _ => "✅ Rapport généré avec succès.",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            ReportAction::Regenerate => "❌ Erreur lors de la régénération du rapport.",
            _ => "❌ Erreur lors de la génération du rapport.",
        }
    }
}

/// Buttons shown for a regulation row.
pub fn report_actions(regulation: &Regulation) -> Vec<ReportAction> {
    if regulation.has_report() {
        vec![ReportAction::Open, ReportAction::Pdf, ReportAction::Regenerate]
    } else {
        vec![ReportAction::Generate]
    }
}

/// In-flight report operations, keyed by regulation id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowStatus {
    running: HashMap<u64, ReportAction>,
}

impl RowStatus {
    /// Mark `id` busy. Returns `false` if that row already has an operation
    /// or `action` does not call the backend.
    pub fn start(&mut self, id: u64, action: ReportAction) -> bool {
        if !action.is_request() || self.running.contains_key(&id) {
            return false;
        }
        self.running.insert(id, action);
        true
    }

    pub fn finish(&mut self, id: u64) {
        self.running.remove(&id);
    }

    pub fn running(&self, id: u64) -> Option<ReportAction> {
        self.running.get(&id).copied()
    }

    pub fn is_busy(&self, id: u64) -> bool {
        self.running.contains_key(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regulation(id: u64, with_report: bool) -> Regulation {
        let json = if with_report {
            format!(r#"{{"id":{id},"titre":"T{id}","rapport":{{"id":{},"uuid":"u{id}"}}}}"#, id + 100)
        } else {
            format!(r#"{{"id":{id},"titre":"T{id}"}}"#)
        };
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_actions_without_report() {
        assert_eq!(report_actions(&regulation(1, false)), vec![ReportAction::Generate]);
    }

    #[test]
    fn test_actions_with_report_never_generate() {
        let actions = report_actions(&regulation(1, true));
        let labels: Vec<_> = actions.iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["Ouvrir", "PDF", "Régénérer"]);
        assert!(!actions.contains(&ReportAction::Generate));
    }

    #[test]
    fn test_row_status_is_per_row() {
        let mut status = RowStatus::default();
        assert!(status.start(1, ReportAction::Generate));
        assert!(!status.start(1, ReportAction::Regenerate));
        assert!(status.start(2, ReportAction::Regenerate));
        assert!(status.is_busy(1));
        assert!(!status.is_busy(3));

        status.finish(1);
        assert!(!status.is_busy(1));
        assert_eq!(status.running(2), Some(ReportAction::Regenerate));
    }

    #[test]
    fn test_row_status_ignores_tab_actions() {
        let mut status = RowStatus::default();
        assert!(!status.start(4, ReportAction::Open));
        assert!(!status.start(4, ReportAction::Pdf));
        assert!(!status.is_busy(4));
        assert!(status.start(4, ReportAction::Regenerate));
    }

    #[test]
    fn test_merge_server_wins_and_palette_fills() {
        let server = vec![
            Category {
                id: "3".into(),
                nom: "Pharmacovigilance".into(),
                couleur: Some("#000000".into()),
            },
            Category {
                id: "8".into(),
                nom: "Dispositifs médicaux".into(),
                couleur: None,
            },
        ];
        let merged = merge_categories(server);
        assert_eq!(merged.len(), 2 + CATEGORY_PALETTE.len() - 1);
        assert_eq!(merged[0].id, "3");
        assert_eq!(category_color(&merged[0]), "#000000");
        assert_eq!(category_color(&merged[1]), DEFAULT_CATEGORY_COLOR);
        assert_eq!(
            merged.iter().filter(|c| c.nom == "Pharmacovigilance").count(),
            1
        );

        let amm = &merged[2];
        assert_eq!(amm.nom, CATEGORY_PALETTE[0].0);
        assert_eq!(amm.id, amm.nom);
        assert_eq!(category_color(amm), "#0d6efd");
    }

    #[test]
    fn test_palette_color_for_server_entry_without_color() {
        let cat = Category {
            id: "5".into(),
            nom: "Contrôle Qualité (QC)".into(),
            couleur: None,
        };
        assert_eq!(category_color(&cat), "#6f42c1");
    }

    #[test]
    fn test_category_lookup_by_id_or_name() {
        let cats = merge_categories(vec![Category {
            id: "4".into(),
            nom: "Assurance Qualité (QA)".into(),
            couleur: None,
        }]);
        let mut reg = regulation(1, false);
        reg.categorie_id = Some("4".into());
        assert_eq!(category_for(&cats, &reg).unwrap().nom, "Assurance Qualité (QA)");

        reg.categorie_id = Some("Pharmacovigilance".into());
        assert_eq!(category_for(&cats, &reg).unwrap().nom, "Pharmacovigilance");

        reg.categorie_id = None;
        assert!(category_for(&cats, &reg).is_none());
    }

    #[test]
    fn test_filter_by_category_and_count_today() {
        let regs: Vec<Regulation> = serde_json::from_str(
            r#"[
                {"id":1,"titre":"A","categorie_id":2,"created_at":"2026-10-16 08:00:00"},
                {"id":2,"titre":"B","categorie_id":"2","created_at":"2026-10-15T23:59:00"},
                {"id":3,"titre":"C","categorie_id":5,"created_at":"2026-10-16"},
                {"id":4,"titre":"D"}
            ]"#,
        )
        .unwrap();

        assert_eq!(filter_by_category(&regs, None).len(), 4);
        let ids: Vec<_> = filter_by_category(&regs, Some("2")).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(count_added_on(&regs, today), 2);
    }
}
