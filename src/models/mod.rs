use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Learning-style categories.
///
/// Declaration order is the canonical order: tallies are initialised in it,
/// and tied classifications are listed in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Visual,
    Auditory,
    Kinesthetic,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Visual, Category::Auditory, Category::Kinesthetic];

    /// Tag used in catalog files.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Visual => "visual",
            Category::Auditory => "auditory",
            Category::Kinesthetic => "kinesthetic",
        }
    }

    /// Label shown to respondents and stored as the classification.
    pub fn label(self) -> &'static str {
        match self {
            Category::Visual => "Visuell",
            Category::Auditory => "Auditiv",
            Category::Kinesthetic => "Kinästhetisch",
        }
    }

    // Early results were stored with English labels.
    fn legacy_label(self) -> &'static str {
        match self {
            Category::Visual => "Visual",
            Category::Auditory => "Auditory",
            Category::Kinesthetic => "Kinesthetic",
        }
    }

    /// Rewrites legacy English labels (including blended ones) to the current labels.
    pub fn normalize_label(label: &str) -> String {
        label
            .split('-')
            .map(|part| {
                let part = part.trim();
                Category::ALL
                    .iter()
                    .find(|c| c.legacy_label() == part)
                    .map(|c| c.label())
                    .unwrap_or(part)
            })
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| {
                c.tag().eq_ignore_ascii_case(s)
                    || c.label().eq_ignore_ascii_case(s)
                    || c.legacy_label().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOption {
    pub text: String,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: Vec<QuestionOption>,
    pub multi_select: bool,
}

impl Question {
    pub fn new(text: impl Into<String>, options: Vec<(&str, Category)>) -> Self {
        Self {
            text: text.into(),
            options: options
                .into_iter()
                .map(|(text, category)| QuestionOption {
                    text: text.to_string(),
                    category,
                })
                .collect(),
            multi_select: false,
        }
    }

    #[cfg(test)]
    pub fn multi_select(mut self) -> Self {
        self.multi_select = true;
        self
    }

    pub fn option_index(&self, text: &str) -> Option<usize> {
        self.options.iter().position(|o| o.text == text)
    }
}

/// One stored answer row: the joined selection for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRow {
    pub session_id: String,
    pub respondent: String,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

/// One stored result row per completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub session_id: String,
    pub respondent: String,
    pub visual: u32,
    pub auditory: u32,
    pub kinesthetic: u32,
    pub classification: String,
    pub created_at: DateTime<Utc>,
}

impl ResultRow {
    pub fn count(&self, category: Category) -> u32 {
        match category {
            Category::Visual => self.visual,
            Category::Auditory => self.auditory,
            Category::Kinesthetic => self.kinesthetic,
        }
    }
}

/// Everything written for one completed session, saved as a unit.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub session_id: Uuid,
    pub answers: Vec<AnswerRow>,
    pub result: ResultRow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_is_declaration_order() {
        let mut shuffled = vec![Category::Kinesthetic, Category::Visual, Category::Auditory];
        shuffled.sort();
        assert_eq!(shuffled, Category::ALL.to_vec());
    }

    #[test]
    fn parses_tags_and_labels() {
        assert_eq!("visual".parse::<Category>(), Ok(Category::Visual));
        assert_eq!("AUDITORY".parse::<Category>(), Ok(Category::Auditory));
        assert_eq!("Kinästhetisch".parse::<Category>(), Ok(Category::Kinesthetic));
        assert_eq!("olfactory".parse::<Category>(), Err("olfactory".to_string()));
    }

    #[test]
    fn normalizes_legacy_labels() {
        assert_eq!(Category::normalize_label("Visual"), "Visuell");
        assert_eq!(Category::normalize_label("Auditory-Kinesthetic"), "Auditiv-Kinästhetisch");
        assert_eq!(Category::normalize_label("Visuell"), "Visuell");
    }
}
