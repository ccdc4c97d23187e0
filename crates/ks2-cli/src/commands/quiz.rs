//! The `ks2 quiz` command.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use ks2_core::activity::{ActivityKind, ActivityLog, NewActivity};
use ks2_core::content::questions;
use ks2_core::diagnostic::{analyze, DiagnosticReport};
use ks2_core::handoff::SessionHandoff;
use ks2_core::model::{AnswerSet, AnswerType, Question};
use ks2_report::html::write_report_html;

pub fn execute(
    name: String,
    answers_path: Option<PathBuf>,
    format: String,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let name = name.trim().to_string();
    anyhow::ensure!(!name.is_empty(), "child name must not be empty");
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json" | "html"),
        "unknown format '{format}', expected text, json or html"
    );

    let (config, mut store) = super::open(config_path)?;

    let answers = match &answers_path {
        Some(path) => load_answers(path)?,
        None => ask_questions(questions::questions())?,
    };

    let report = analyze(&answers, &name);

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "html" => {
            let dir = output.unwrap_or_else(|| config.output_dir.clone());
            let path = dir.join(format!("diagnostic-{}.html", sanitize(&name)));
            write_report_html(&report, &path)?;
            eprintln!("Diagnostic report: {}", path.display());
        }
        _ => print_report(&report),
    }

    SessionHandoff::new(&mut store).save_profile(&report.to_child_profile())?;
    ActivityLog::new(&mut store).record(
        NewActivity::new(
            ActivityKind::Test,
            format!("Diagnostic test: {name}"),
            "/diagnostic-test",
        )
        .with_metadata("score", report.overall_score)
        .with_metadata("recommendedYear", report.recommended_year.clone()),
    )?;

    eprintln!("Run `ks2 plan --from-diagnostic` to build a scheme of work from these results.");
    Ok(())
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect()
}

/// Read answers from a JSON object of question id to answer.
fn load_answers(path: &Path) -> Result<AnswerSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers: {}", path.display()))?;
    let answers: AnswerSet = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse answers: {}", path.display()))?;

    let known = questions::questions()
        .iter()
        .filter(|q| answers.get(q.id).is_some())
        .count();
    if known < answers.len() {
        tracing::warn!(
            ignored = answers.len() - known,
            "answers file contains ids that are not in the question bank"
        );
    }
    Ok(answers)
}

/// Ask every question on stderr and read one answer per line from stdin.
/// A blank line skips a question; end of input leaves the rest unanswered.
fn ask_questions(bank: &[Question]) -> Result<AnswerSet> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stderr = std::io::stderr();
    let mut answers = AnswerSet::new();

    for (i, question) in bank.iter().enumerate() {
        writeln!(stderr, "\nQuestion {} of {} ({})", i + 1, bank.len(), question.category)?;
        writeln!(stderr, "{}", question.prompt)?;
        for (n, option) in question.options.iter().enumerate() {
            writeln!(stderr, "  {}. {}", n + 1, option)?;
        }
        if question.answer_type == AnswerType::TrueFalse && question.options.is_empty() {
            writeln!(stderr, "  (true/false)")?;
        }
        write!(stderr, "> ")?;
        stderr.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read answer")?;
        if let Some(answer) = interpret_answer(question, &line) {
            answers.insert(question.id, answer);
        }
    }

    Ok(answers)
}

/// An option number picks that option; anything else is taken as typed.
fn interpret_answer(question: &Question, input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(n) = input.parse::<usize>() {
        if let Some(option) = n.checked_sub(1).and_then(|i| question.options.get(i)) {
            return Some(option.to_string());
        }
    }
    Some(input.to_string())
}

fn print_report(report: &DiagnosticReport) {
    println!("Diagnostic results for {}", report.child_name);
    println!();

    let mut table = Table::new();
    table.set_header(vec!["Category", "Score", "Percentage", "Year level"]);
    for result in &report.results {
        table.add_row(vec![
            Cell::new(result.category),
            Cell::new(format!("{}/{}", result.score, result.max_score)),
            Cell::new(format!("{}%", result.percentage)),
            Cell::new(format!("Year {}", result.year_level_equivalent)),
        ]);
    }
    println!("{table}");

    println!("Overall score: {}%", report.overall_score);
    println!("Recommended year: {}", report.recommended_year);
    println!("Learning style: {}", report.learning_style_indicator);
    println!("Pace: {}", report.pace_recommendation);

    for (heading, items) in [
        ("Strengths", &report.strengths),
        ("Focus areas", &report.focus_areas),
        ("Recommendations", &report.recommendations),
    ] {
        if items.is_empty() {
            continue;
        }
        println!("\n{heading}:");
        for item in items {
            println!("  - {item}");
        }
    }
}
