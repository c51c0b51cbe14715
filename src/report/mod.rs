use crate::models::{AnswerRow, Category, ResultRow};
use crate::scoring::{Classification, ScoreTally};
use serde::Serialize;
use std::collections::BTreeMap;

const BAR_WIDTH: usize = 30;

/// Sums each category column over all stored results. Every category is present.
pub fn aggregate(rows: &[ResultRow]) -> BTreeMap<Category, u64> {
    let mut totals: BTreeMap<Category, u64> = Category::ALL.iter().map(|&c| (c, 0)).collect();
    for row in rows {
        for category in Category::ALL {
            *totals.entry(category).or_insert(0) += u64::from(row.count(category));
        }
    }
    totals
}

/// Number of respondents per classification label.
pub fn distribution(rows: &[ResultRow]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for row in rows {
        *counts
            .entry(Category::normalize_label(&row.classification))
            .or_insert(0) += 1;
    }
    counts
}

/// How often each stored answer was given, per question.
pub fn answer_counts(rows: &[AnswerRow]) -> BTreeMap<String, BTreeMap<String, usize>> {
    let mut counts: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
    for row in rows {
        *counts
            .entry(row.question.clone())
            .or_default()
            .entry(row.answer.clone())
            .or_insert(0) += 1;
    }
    counts
}

/// The two mappings handed to external charting, plus the participant count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub participants: usize,
    pub category_totals: BTreeMap<Category, u64>,
    pub distribution: BTreeMap<String, usize>,
}

impl DashboardSummary {
    pub fn from_results(rows: &[ResultRow]) -> Self {
        Self {
            participants: rows.len(),
            category_totals: aggregate(rows),
            distribution: distribution(rows),
        }
    }
}

fn bar(value: u64, max: u64) -> String {
    if max == 0 {
        return String::new();
    }
    let len = ((value as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len)
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 * 1000.0 / whole as f64).round() / 10.0
    }
}

/// Bar chart of one respondent's tally, followed by their classification.
pub fn render_session_chart(
    respondent: &str,
    tally: &ScoreTally,
    classification: &Classification,
) -> String {
    let max = tally.iter().map(|(_, n)| u64::from(n)).max().unwrap_or(0);
    let width = label_width(Category::ALL.iter().map(|c| c.label()));

    let mut out = format!("Ergebnis für {} ({} Antworten)\n", respondent, tally.total());
    for (category, count) in tally.iter() {
        out.push_str(&format!(
            "{:<width$}  {:>3}  {}\n",
            category.label(),
            count,
            bar(u64::from(count), max),
            width = width
        ));
    }
    out.push('\n');

    let verdict = if classification.is_blend() {
        "deine bevorzugten Lernstile sind"
    } else {
        "dein bevorzugter Lernstil ist"
    };
    out.push_str(&format!("{}, {}: {}\n", respondent, verdict, classification.label));
    out
}

/// Cross-session dashboard. An empty store renders a short notice instead of charts.
pub fn render_dashboard(
    results: &[ResultRow],
    answers: &[AnswerRow],
    show_answers: bool,
) -> String {
    let mut out = String::from("VAK Lernstil-Dashboard\n\n");

    if results.is_empty() {
        out.push_str("Noch keine Ergebnisse gespeichert.\n");
        return out;
    }

    let summary = DashboardSummary::from_results(results);

    out.push_str(&format!(
        "Lernstil-Präferenzen unter {} Teilnehmern\n",
        summary.participants
    ));
    let max = summary.category_totals.values().copied().max().unwrap_or(0);
    let width = label_width(summary.category_totals.keys().map(|c| c.label()));
    for (category, total) in &summary.category_totals {
        out.push_str(&format!(
            "{:<width$}  {:>5}  {}\n",
            category.label(),
            total,
            bar(*total, max),
            width = width
        ));
    }

    out.push_str("\nVerteilung der dominanten Lernstile\n");
    let max = summary.distribution.values().copied().max().unwrap_or(0) as u64;
    let width = label_width(summary.distribution.keys().map(String::as_str));
    for (label, count) in &summary.distribution {
        out.push_str(&format!(
            "{:<width$}  {:>5}  {:>5.1}%  {}\n",
            label,
            count,
            percentage(*count, summary.participants),
            bar(*count as u64, max),
            width = width
        ));
    }

    if show_answers {
        out.push_str("\nAntworten je Frage\n");
        for (question, counts) in answer_counts(answers) {
            out.push_str(&question);
            out.push('\n');
            for (answer, count) in counts {
                out.push_str(&format!("  {:>4}  {}\n", count, answer));
            }
        }
    }

    out
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(|l| l.chars().count()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::classify;
    use chrono::Utc;

    fn result(respondent: &str, counts: (u32, u32, u32), label: &str) -> ResultRow {
        ResultRow {
            session_id: format!("session-{}", respondent),
            respondent: respondent.to_string(),
            visual: counts.0,
            auditory: counts.1,
            kinesthetic: counts.2,
            classification: label.to_string(),
            created_at: Utc::now(),
        }
    }

    fn answer(question: &str, answer: &str) -> AnswerRow {
        AnswerRow {
            session_id: "s".to_string(),
            respondent: "Ada".to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_input_gives_zero_totals_and_empty_distribution() {
        let totals = aggregate(&[]);
        assert_eq!(totals.len(), 3);
        assert!(totals.values().all(|&n| n == 0));
        assert!(distribution(&[]).is_empty());
        assert!(answer_counts(&[]).is_empty());
    }

    #[test]
    fn aggregate_sums_columns() {
        let rows = vec![
            result("Ada", (12, 5, 3), "Visuell"),
            result("Grace", (4, 8, 8), "Auditiv-Kinästhetisch"),
        ];
        let totals = aggregate(&rows);
        assert_eq!(totals[&Category::Visual], 16);
        assert_eq!(totals[&Category::Auditory], 13);
        assert_eq!(totals[&Category::Kinesthetic], 11);
    }

    #[test]
    fn distribution_counts_labels_and_normalizes_legacy_ones() {
        let rows = vec![
            result("Ada", (12, 5, 3), "Visuell"),
            result("Bob", (12, 5, 3), "Visual"),
            result("Cy", (4, 8, 8), "Auditiv-Kinästhetisch"),
        ];
        let dist = distribution(&rows);
        assert_eq!(dist.len(), 2);
        assert_eq!(dist["Visuell"], 2);
        assert_eq!(dist["Auditiv-Kinästhetisch"], 1);
    }

    #[test]
    fn answer_counts_group_by_question() {
        let rows = vec![answer("Q1", "a"), answer("Q1", "a"), answer("Q1", "b"), answer("Q2", "c")];
        let counts = answer_counts(&rows);
        assert_eq!(counts["Q1"]["a"], 2);
        assert_eq!(counts["Q1"]["b"], 1);
        assert_eq!(counts["Q2"]["c"], 1);
    }

    #[test]
    fn session_chart_names_classification() {
        let mut tally = ScoreTally::zeroed();
        tally.increment(Category::Visual);
        tally.increment(Category::Visual);
        tally.increment(Category::Auditory);
        let chart = render_session_chart("Ada", &tally, &classify(&tally));

        assert!(chart.contains("Ergebnis für Ada (3 Antworten)"));
        assert!(chart.contains(&"█".repeat(BAR_WIDTH)));
        assert!(chart.ends_with("Ada, dein bevorzugter Lernstil ist: Visuell\n"));

        tally.increment(Category::Auditory);
        let chart = render_session_chart("Ada", &tally, &classify(&tally));
        assert!(chart.ends_with("Ada, deine bevorzugten Lernstile sind: Visuell-Auditiv\n"));
    }

    #[test]
    fn dashboard_handles_empty_and_populated_stores() {
        assert!(render_dashboard(&[], &[], true).contains("Noch keine Ergebnisse"));

        let rows = vec![result("Ada", (2, 0, 0), "Visuell"), result("Bob", (0, 2, 0), "Auditiv")];
        let answers = vec![answer("Wie lernst du am besten?", "Indem ich zuhöre")];
        let text = render_dashboard(&rows, &answers, true);
        assert!(text.contains("unter 2 Teilnehmern"));
        assert!(text.contains("50.0%"));
        assert!(text.contains("Wie lernst du am besten?"));

        let text = render_dashboard(&rows, &answers, false);
        assert!(!text.contains("Antworten je Frage"));
    }

    #[test]
    fn summary_serializes_category_tags() {
        let summary = DashboardSummary::from_results(&[result("Ada", (1, 0, 0), "Visuell")]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["participants"], 1);
        assert_eq!(json["category_totals"]["visual"], 1);
        assert_eq!(json["distribution"]["Visuell"], 1);
    }
}
