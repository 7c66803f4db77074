use serde::{Deserialize, Serialize};

/// Characters of report content shown in the reports table.
pub const PREVIEW_CHARS: usize = 110;

/// A generated report (`GET /rapports`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: u64,
    #[serde(default)]
    pub contenu: String,
}

impl Report {
    /// First [`PREVIEW_CHARS`] characters of the content followed by `...`.
    pub fn preview(&self) -> String {
        let mut out: String = self.contenu.chars().take(PREVIEW_CHARS).collect();
        out.push_str("...");
        out
    }
}

/// The singleton prompt steering report generation (`/prompt-global`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalPrompt {
    #[serde(default)]
    pub prompt: String,
}

/// Acknowledgement returned by trigger endpoints such as `POST /webhook/lancer`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportAck {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let report = Report {
            id: 1,
            contenu: "é".repeat(200),
        };
        let preview = report.preview();
        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_preview_short_content() {
        let report = Report {
            id: 1,
            contenu: "<p>Résumé</p>".into(),
        };
        assert_eq!(report.preview(), "<p>Résumé</p>...");
    }

    #[test]
    fn test_missing_prompt_is_empty() {
        let prompt: GlobalPrompt = serde_json::from_str("{}").unwrap();
        assert_eq!(prompt.prompt, "");
    }
}
