use crate::catalog::Catalog;
use crate::db::ResponseStore;
use crate::error::{IncompleteSessionError, PersistenceError};
use crate::models::{AnswerRow, Category, ResultRow, SessionRecord};
use crate::scoring::{self, Classification, ScoreTally};
use crate::session::Session;
use chrono::Utc;
use log::{error, info, warn};

// Selections of a multi-select question are stored as one joined answer.
const ANSWER_SEPARATOR: &str = ", ";

/// Outcome of finishing a session. The classification is always available;
/// `saved` reports separately whether it reached storage.
#[derive(Debug)]
pub struct Submission {
    pub tally: ScoreTally,
    pub classification: Classification,
    pub saved: Result<(), PersistenceError>,
}

/// Scores a complete session, then tries to store it.
pub async fn submit(
    store: &dyn ResponseStore,
    catalog: &Catalog,
    session: &Session,
) -> Result<Submission, IncompleteSessionError> {
    let (tally, classification) = evaluate(catalog, session)?;

    let record = build_record(catalog, session, &tally, &classification);
    let saved = store.save(&record).await;
    if let Err(e) = &saved {
        error!("Failed to save session {}: {}", session.id(), e);
    }

    Ok(Submission {
        tally,
        classification,
        saved,
    })
}

/// Scores a complete session when storage could not be reached at all.
/// The classification is still produced; `saved` carries the connect error.
pub fn submit_unsaved(
    catalog: &Catalog,
    session: &Session,
    reason: PersistenceError,
) -> Result<Submission, IncompleteSessionError> {
    let (tally, classification) = evaluate(catalog, session)?;
    warn!("Session {} will not be stored: {}", session.id(), reason);

    Ok(Submission {
        tally,
        classification,
        saved: Err(reason),
    })
}

fn evaluate(
    catalog: &Catalog,
    session: &Session,
) -> Result<(ScoreTally, Classification), IncompleteSessionError> {
    let tally = scoring::score(session, catalog)?;
    let classification = scoring::classify(&tally);
    info!(
        "Session {} for {} classified as {}",
        session.id(),
        session.respondent(),
        classification.label
    );
    Ok((tally, classification))
}

pub fn build_record(
    catalog: &Catalog,
    session: &Session,
    tally: &ScoreTally,
    classification: &Classification,
) -> SessionRecord {
    let session_id = session.id().to_string();
    let created_at = Utc::now();

    let answers = catalog
        .questions()
        .iter()
        .enumerate()
        .map(|(i, question)| AnswerRow {
            session_id: session_id.clone(),
            respondent: session.respondent().to_string(),
            question: question.text.clone(),
            answer: session.selected_texts(catalog, i).join(ANSWER_SEPARATOR),
            created_at,
        })
        .collect();

    let result = ResultRow {
        session_id,
        respondent: session.respondent().to_string(),
        visual: tally.get(Category::Visual),
        auditory: tally.get(Category::Auditory),
        kinesthetic: tally.get(Category::Kinesthetic),
        classification: classification.label.clone(),
        created_at,
    };

    SessionRecord {
        session_id: session.id(),
        answers,
        result,
    }
}
