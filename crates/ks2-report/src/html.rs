//! HTML output.
//!
//! Every page is a single self-contained file with its CSS inlined, laid out
//! for A4 printing.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use ks2_core::diagnostic::DiagnosticReport;
use ks2_core::scheme::{PrintableScheme, WeeklyPlan};

/// Activities shown per lesson on the printed page.
pub const PRINTED_ACTIVITIES: usize = 4;
/// Resources shown per lesson on the printed page.
pub const PRINTED_RESOURCES: usize = 3;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn open_document(html: &mut String, title: &str) {
    html.push_str("<!DOCTYPE html>\n<html lang=\"en-GB\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");
}

fn close_document(html: &mut String) {
    html.push_str("</body>\n</html>");
}

fn push_list(html: &mut String, items: &[String], limit: usize) {
    html.push_str("<ul>\n");
    for item in items.iter().take(limit) {
        html.push_str(&format!("<li>{}</li>\n", html_escape(item)));
    }
    html.push_str("</ul>\n");
}

/// Render one term of a scheme of work as a printable page.
///
/// `generated_on` is shown in the header as `dd/mm/yyyy`.
pub fn scheme_html(scheme: &PrintableScheme, generated_on: NaiveDate) -> String {
    let mut html = String::new();
    open_document(
        &mut html,
        &format!("Scheme of Work: {} ({})", scheme.child_name, scheme.term),
    );

    html.push_str("<header>\n");
    html.push_str("<h1>Scheme of Work</h1>\n");
    html.push_str(&format!(
        "<p><strong>Student:</strong> {}</p>\n",
        html_escape(&scheme.child_name)
    ));
    html.push_str(&format!(
        "<p><strong>Year Group:</strong> {}</p>\n",
        html_escape(&scheme.year_group)
    ));
    html.push_str(&format!(
        "<p><strong>Term:</strong> {}</p>\n",
        html_escape(&scheme.term)
    ));
    html.push_str(&format!(
        "<p><strong>Generated:</strong> {}</p>\n",
        generated_on.format("%d/%m/%Y")
    ));
    html.push_str("</header>\n");

    for (index, week) in scheme.weeks.iter().enumerate() {
        push_week(&mut html, week, index > 0);
    }

    close_document(&mut html);
    html
}

fn push_week(html: &mut String, week: &WeeklyPlan, page_break: bool) {
    if page_break {
        html.push_str("<section class=\"week page-break\">\n");
    } else {
        html.push_str("<section class=\"week\">\n");
    }
    html.push_str("<div class=\"week-plan\">\n");
    html.push_str(&format!(
        "<h2>Week {}: {}</h2>\n",
        week.week,
        html_escape(&week.topic)
    ));

    for lesson in &week.lessons {
        html.push_str("<div class=\"lesson\">\n");
        html.push_str(&format!(
            "<h3>{} - {}</h3>\n",
            lesson.day,
            html_escape(&lesson.subject)
        ));
        html.push_str(&format!(
            "<p><strong>Objective:</strong> {}</p>\n",
            html_escape(&lesson.objective)
        ));
        html.push_str(&format!(
            "<p><strong>Duration:</strong> {}</p>\n",
            html_escape(&lesson.duration)
        ));
        html.push_str("<p><strong>Activities:</strong></p>\n");
        push_list(html, &lesson.activities, PRINTED_ACTIVITIES);
        html.push_str("<p><strong>Resources:</strong></p>\n");
        push_list(html, &lesson.resources, PRINTED_RESOURCES);
        if let Some(assessment) = &lesson.assessment {
            html.push_str(&format!(
                "<p><strong>Assessment:</strong> {}</p>\n",
                html_escape(assessment)
            ));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");

    html.push_str("<div class=\"notes\">\n");
    html.push_str(&format!("<h3>Notes for Week {}:</h3>\n", week.week));
    html.push_str("<div class=\"notes-line\"></div>\n");
    html.push_str("</div>\n");
    html.push_str("</section>\n");
}

/// Render a diagnostic report as a printable summary.
pub fn report_html(report: &DiagnosticReport) -> String {
    let mut html = String::new();
    open_document(
        &mut html,
        &format!("Diagnostic Results: {}", report.child_name),
    );

    html.push_str("<header>\n");
    html.push_str("<h1>Diagnostic Results</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">{} | {}</p>\n",
        html_escape(&report.child_name),
        report.test_date.format("%d/%m/%Y")
    ));
    html.push_str("</header>\n");

    html.push_str("<section class=\"overview\">\n");
    html.push_str(&format!(
        "<p><strong>Overall score:</strong> {}%</p>\n",
        report.overall_score
    ));
    html.push_str(&format!(
        "<p><strong>Recommended year:</strong> {}</p>\n",
        html_escape(&report.recommended_year)
    ));
    html.push_str(&format!(
        "<p><strong>Learning style:</strong> {}</p>\n",
        report.learning_style_indicator
    ));
    html.push_str(&format!(
        "<p><strong>Pace:</strong> {}</p>\n",
        report.pace_recommendation
    ));
    html.push_str("</section>\n");

    html.push_str("<section class=\"categories\">\n");
    html.push_str("<h2>Categories</h2>\n");
    html.push_str("<table>\n");
    html.push_str("<thead><tr><th>Category</th><th>Score</th><th>Percentage</th><th>Year level</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for result in &report.results {
        let class = if result.percentage >= 80 {
            "strong"
        } else if result.percentage < 50 {
            "weak"
        } else {
            "ok"
        };
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}/{}</td><td>{}%</td><td>Year {}</td></tr>\n",
            class,
            result.category,
            result.score,
            result.max_score,
            result.percentage,
            result.year_level_equivalent
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    for (heading, items) in [
        ("Strengths", &report.strengths),
        ("Focus areas", &report.focus_areas),
        ("Recommendations", &report.recommendations),
    ] {
        if items.is_empty() {
            continue;
        }
        html.push_str("<section>\n");
        html.push_str(&format!("<h2>{heading}</h2>\n"));
        push_list(&mut html, items, usize::MAX);
        html.push_str("</section>\n");
    }

    close_document(&mut html);
    html
}

fn write_html(html: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Write a printable scheme page to a file.
pub fn write_scheme_html(scheme: &PrintableScheme, generated_on: NaiveDate, path: &Path) -> Result<()> {
    write_html(&scheme_html(scheme, generated_on), path)
}

/// Write a printable diagnostic report to a file.
pub fn write_report_html(report: &DiagnosticReport, path: &Path) -> Result<()> {
    write_html(&report_html(report), path)
}

const CSS: &str = r#"
:root { --fg: #1a1a1a; --border: #1f2937; --accent: #4f46e5; --muted: #f9fafb; --rule: #d1d5db; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0 auto; padding: 2rem; max-width: 64rem; color: var(--fg); }
header { margin-bottom: 2rem; }
h1 { font-size: 1.9rem; margin-bottom: 0.5rem; }
.meta { color: #6b7280; }
.week-plan { border: 2px solid var(--border); border-radius: 8px; padding: 1.5rem; margin-bottom: 1.5rem; }
.lesson { border-left: 4px solid var(--accent); padding-left: 1rem; margin: 1rem 0; font-size: 0.9rem; }
.lesson h3 { margin: 0 0 0.5rem; }
.lesson p { margin: 0.25rem 0; }
.notes { border: 1px solid var(--rule); border-radius: 8px; padding: 1rem; background: var(--muted); }
.notes-line { height: 5rem; border-bottom: 1px solid var(--rule); }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--rule); padding: 0.5rem 1rem; text-align: left; }
.strong { background: #dcfce7; }
.weak { background: #fde2e2; }
@media print {
  @page { margin: 1cm; }
  body { padding: 0; print-color-adjust: exact; -webkit-print-color-adjust: exact; }
  .page-break { page-break-before: always; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ks2_core::diagnostic::analyze_at;
    use ks2_core::model::{AnswerSet, ChildProfile};
    use ks2_core::scheme::{generate, ScheduleConfig};

    fn make_scheme() -> PrintableScheme {
        let profile = ChildProfile::new("Ada <Lovelace>", "Year 4");
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut schedule = ScheduleConfig::starting(start);
        schedule.end_date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        let terms = generate(&profile, &schedule);
        PrintableScheme::new(&profile, &terms[0])
    }

    fn generated_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    #[test]
    fn scheme_page_contains_required_elements() {
        let html = scheme_html(&make_scheme(), generated_on());

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("<strong>Student:</strong> Ada &lt;Lovelace&gt;"));
        assert!(html.contains("<strong>Year Group:</strong> Year 4"));
        assert!(html.contains("<strong>Term:</strong> Term 1"));
        assert!(html.contains("<strong>Generated:</strong> 07/03/2024"));
        assert!(html.contains("Week 1: Complex Sentences"));
        assert!(html.contains("Monday - Spelling &amp; Vocabulary"));
        assert!(html.contains("Notes for Week 11:"));
        assert!(html.contains("@media print"));
    }

    #[test]
    fn every_week_after_the_first_breaks_the_page() {
        let scheme = make_scheme();
        let html = scheme_html(&scheme, generated_on());
        assert_eq!(html.matches("<section class=\"week\">").count(), 1);
        assert_eq!(
            html.matches("<section class=\"week page-break\">").count(),
            scheme.weeks.len() - 1
        );
    }

    #[test]
    fn lessons_are_trimmed_for_print() {
        let scheme = make_scheme();
        let html = scheme_html(&scheme, generated_on());
        let lesson = &scheme.weeks[0].lessons[0];

        assert!(html.contains(&lesson.activities[3]));
        // Base activities repeat under the standard pace, so check a style entry.
        assert!(!html.contains("Multi-sensory activities"));
        assert!(html.contains(&lesson.resources[2]));
        assert!(!html.contains(&lesson.resources[3]));
        assert_eq!(
            html.matches("<strong>Assessment:</strong>").count(),
            scheme.weeks.len()
        );
    }

    #[test]
    fn report_page_lists_categories() {
        let answers: AnswerSet = [("sp3-1", "happiness")].into_iter().collect();
        let at = chrono::Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let report = analyze_at(&answers, "Kit", at);
        let html = report_html(&report);

        assert!(html.contains("Diagnostic Results"));
        assert!(html.contains("Kit | 01/05/2024"));
        assert!(html.contains("<td>spelling</td><td>1/14</td>"));
        assert!(html.contains("Recommendations"));
    }

    #[test]
    fn write_to_nested_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/term-1.html");

        write_scheme_html(&make_scheme(), generated_on(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Scheme of Work"));
    }
}
