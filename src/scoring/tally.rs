use crate::catalog::Catalog;
use crate::error::IncompleteSessionError;
use crate::scoring::ScoreTally;
use crate::session::Session;

/// Counts one point per selected option towards that option's category.
///
/// Refuses incomplete sessions. The result does not depend on question order.
pub fn score(session: &Session, catalog: &Catalog) -> Result<ScoreTally, IncompleteSessionError> {
    if !session.is_complete(catalog) {
        return Err(IncompleteSessionError {
            missing: session.missing(catalog),
        });
    }

    let mut tally = ScoreTally::zeroed();
    for (index, question) in catalog.questions().iter().enumerate() {
        for option in session.selected_indices(index).filter_map(|i| question.options.get(i)) {
            tally.increment(option.category);
        }
    }
    Ok(tally)
}
