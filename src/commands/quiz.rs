use crate::catalog::Catalog;
use crate::config::Config;
use crate::db::Database;
use crate::handlers;
use crate::report;
use crate::session::Session;
use chrono::Utc;
use log::info;
use std::io::{self, BufRead, Write};

pub async fn handle_quiz_command(
    config: &Config,
    catalog: &Catalog,
    name: Option<String>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut output = io::stdout();
    writeln!(output, "VAK Lernstil-Quiz")?;
    writeln!(
        output,
        "Beantworte die folgenden {} Fragen, um deinen bevorzugten Lernstil zu erfahren.\n",
        catalog.len()
    )?;

    // Keep the stdin lock out of the async part below.
    let session = {
        let mut input = io::stdin().lock();
        let name = match name.filter(|n| !n.trim().is_empty()) {
            Some(name) => name,
            None => prompt_name(&mut input, &mut output)?,
        };
        let session = Session::new(&name, catalog, config.shuffle)?;
        collect_answers(&mut input, &mut output, catalog, session)?
    };

    let submission = match Database::connect(config).await {
        Ok(db) => handlers::submit(&db, catalog, &session).await?,
        Err(e) => handlers::submit_unsaved(catalog, &session, e)?,
    };

    writeln!(output)?;
    let chart = report::render_session_chart(
        session.respondent(),
        &submission.tally,
        &submission.classification,
    );
    write!(output, "{}", chart)?;
    match &submission.saved {
        Ok(()) => writeln!(output, "Ergebnis wurde gespeichert.")?,
        Err(e) => writeln!(output, "Fehler beim Speichern: {}", e)?,
    }

    Ok(())
}

/// Asks until a non-blank name is given.
pub fn prompt_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    loop {
        write!(output, "Bitte gib deinen Namen ein: ")?;
        output.flush()?;
        let line = read_line(input)?;
        if !line.trim().is_empty() {
            return Ok(line.trim().to_string());
        }
        writeln!(output, "Bitte gib deinen Namen ein.")?;
    }
}

/// Walks through every question, then asks again for any that were skipped.
pub fn collect_answers<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    catalog: &Catalog,
    mut session: Session,
) -> io::Result<Session> {
    for index in 0..catalog.len() {
        ask_question(input, output, catalog, &mut session, index)?;
    }

    while !session.is_complete(catalog) {
        let missing = session.missing(catalog);
        let numbers: Vec<String> = missing.iter().map(|i| (i + 1).to_string()).collect();
        writeln!(
            output,
            "\nBitte wähle eine Antwort für jede Frage. Offen: {}",
            numbers.join(", ")
        )?;
        for index in missing {
            ask_question(input, output, catalog, &mut session, index)?;
        }
    }

    info!(
        "Session {} complete after {}s",
        session.id(),
        (Utc::now() - session.started_at()).num_seconds()
    );
    Ok(session)
}

fn ask_question<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    catalog: &Catalog,
    session: &mut Session,
    index: usize,
) -> io::Result<()> {
    let Some(question) = catalog.get(index) else {
        return Ok(());
    };
    let options = session.presented_options(catalog, index);

    writeln!(output, "\n{}. {}", index + 1, question.text)?;
    for (n, option) in options.iter().enumerate() {
        writeln!(output, "   {}) {}", n + 1, option.text)?;
    }
    let hint = if question.multi_select {
        "Nummern, durch Komma getrennt"
    } else {
        "Nummer"
    };

    loop {
        write!(output, "Deine Wahl ({}, leer zum Überspringen): ", hint)?;
        output.flush()?;
        let line = read_line(input)?;
        if line.trim().is_empty() {
            return Ok(());
        }

        let picked = match parse_selection(&line, options.len()) {
            Ok(picked) => picked,
            Err(message) => {
                writeln!(output, "{}", message)?;
                continue;
            }
        };
        let texts: Vec<&str> = picked.iter().map(|&n| options[n].text.as_str()).collect();
        match session.record(catalog, index, &texts) {
            Ok(()) => return Ok(()),
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}

/// Parses "2" or "1, 3" into zero-based positions of the presented options.
pub fn parse_selection(line: &str, option_count: usize) -> Result<Vec<usize>, String> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<usize>() {
            Ok(n) if (1..=option_count).contains(&n) => Ok(n - 1),
            _ => Err(format!(
                "Ungültige Auswahl \"{}\", erlaubt sind 1 bis {}.",
                part, option_count
            )),
        })
        .collect()
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before the quiz was finished",
        ));
    }
    Ok(line)
}
