use crate::config::Config;
use crate::db::{Database, ResponseStore};
use crate::models::{AnswerRow, ResultRow};
use crate::report::{self, DashboardSummary};
use log::error;

pub async fn handle_dashboard_command(
    config: &Config,
    show_answers: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (results, answers) = load_dashboard(config, show_answers).await;

    if json {
        let summary = DashboardSummary::from_results(&results);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", report::render_dashboard(&results, &answers, show_answers));
    }
    Ok(())
}

/// Opens the database without creating it and reads the rows to report.
/// A database that cannot be opened is reported and shown as empty.
pub async fn load_dashboard(
    config: &Config,
    with_answers: bool,
) -> (Vec<ResultRow>, Vec<AnswerRow>) {
    match Database::open_existing(config).await {
        Ok(db) => load_rows(&db, with_answers).await,
        Err(e) => {
            error!("Fehler beim Öffnen der Datenbank {}: {}", config.database_url, e);
            eprintln!("Fehler beim Öffnen der Datenbank {}: {}", config.database_url, e);
            (Vec::new(), Vec::new())
        }
    }
}

/// Reads both tables. A failed read is reported and degrades to no rows.
pub async fn load_rows(
    store: &dyn ResponseStore,
    with_answers: bool,
) -> (Vec<ResultRow>, Vec<AnswerRow>) {
    let results = store.fetch_results().await.unwrap_or_else(|e| {
        error!("Fehler beim Abrufen der Ergebnisse: {}", e);
        eprintln!("Fehler beim Abrufen der Ergebnisse: {}", e);
        Vec::new()
    });

    let answers = if with_answers {
        store.fetch_answers().await.unwrap_or_else(|e| {
            error!("Fehler beim Abrufen der Antworten: {}", e);
            eprintln!("Fehler beim Abrufen der Antworten: {}", e);
            Vec::new()
        })
    } else {
        Vec::new()
    };

    (results, answers)
}
