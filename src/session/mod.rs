use crate::catalog::Catalog;
use crate::error::SessionError;
use crate::models::QuestionOption;
use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;
use uuid::Uuid;

/// One respondent's run through a catalog.
///
/// The option order of every question is fixed when the session is created,
/// so rendering the same session twice always shows the same order.
/// Selections are kept as option indices into the catalog, which makes the
/// stored answer text independent of the presentation order.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    respondent: String,
    started_at: DateTime<Utc>,
    order: Vec<Vec<usize>>,
    selections: Vec<BTreeSet<usize>>,
}

impl Session {
    pub fn new(respondent: &str, catalog: &Catalog, shuffle: bool) -> Result<Self, SessionError> {
        Self::with_rng(respondent, catalog, shuffle, &mut rand::rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        respondent: &str,
        catalog: &Catalog,
        shuffle: bool,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let respondent = respondent.trim();
        if respondent.is_empty() {
            return Err(SessionError::EmptyRespondent);
        }

        let order = catalog
            .questions()
            .iter()
            .map(|question| {
                let mut indices: Vec<usize> = (0..question.options.len()).collect();
                if shuffle {
                    indices.shuffle(rng);
                }
                indices
            })
            .collect();

        Ok(Self {
            id: Uuid::new_v4(),
            respondent: respondent.to_string(),
            started_at: Utc::now(),
            order,
            selections: vec![BTreeSet::new(); catalog.len()],
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn respondent(&self) -> &str {
        &self.respondent
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Options of `question` in the order fixed for this session.
    pub fn presented_options<'a>(
        &self,
        catalog: &'a Catalog,
        question: usize,
    ) -> Vec<&'a QuestionOption> {
        match (catalog.get(question), self.order.get(question)) {
            (Some(q), Some(order)) => order.iter().filter_map(|&i| q.options.get(i)).collect(),
            _ => Vec::new(),
        }
    }

    /// Replaces the selection for `question`. An empty selection clears it.
    pub fn record<S: AsRef<str>>(
        &mut self,
        catalog: &Catalog,
        question: usize,
        selected: &[S],
    ) -> Result<(), SessionError> {
        let q = catalog
            .get(question)
            .filter(|_| question < self.selections.len())
            .ok_or(SessionError::UnknownQuestion(question))?;

        let mut indices = BTreeSet::new();
        for text in selected {
            let text = text.as_ref();
            let index = q.option_index(text).ok_or_else(|| SessionError::UnknownOption {
                question,
                option: text.to_string(),
            })?;
            indices.insert(index);
        }

        if !q.multi_select && indices.len() > 1 {
            return Err(SessionError::TooManySelections { question });
        }

        self.selections[question] = indices;
        Ok(())
    }

    /// Selected option indices of `question`, in catalog order.
    pub fn selected_indices(&self, question: usize) -> impl Iterator<Item = usize> + '_ {
        self.selections
            .get(question)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Selected option texts of `question`, in catalog order.
    pub fn selected_texts<'a>(&self, catalog: &'a Catalog, question: usize) -> Vec<&'a str> {
        let Some(q) = catalog.get(question) else {
            return Vec::new();
        };
        self.selected_indices(question)
            .filter_map(|i| q.options.get(i))
            .map(|o| o.text.as_str())
            .collect()
    }

    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        self.missing(catalog).is_empty()
    }

    /// Indices of unanswered questions, ascending.
    pub fn missing(&self, catalog: &Catalog) -> Vec<usize> {
        (0..catalog.len())
            .filter(|&i| self.selections.get(i).is_none_or(|s| s.is_empty()))
            .collect()
    }
}
