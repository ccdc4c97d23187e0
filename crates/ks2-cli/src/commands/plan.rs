//! The `ks2 plan` command.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use comfy_table::{Cell, Table};

use ks2_core::activity::{ActivityKind, ActivityLog, NewActivity};
use ks2_core::handoff::SessionHandoff;
use ks2_core::model::{ChildProfile, LearningStyle, Pace, YearGroup};
use ks2_core::scheme::{
    generate, validate_schedule, PrintableScheme, ScheduleConfig, TermScheme, MAX_TERMS,
};
use ks2_report::export::{encode_print_param, file_stem, write_download};
use ks2_report::html::write_scheme_html;

pub struct PlanArgs {
    pub from_diagnostic: bool,
    pub name: Option<String>,
    pub year: Option<u8>,
    pub style: Option<LearningStyle>,
    pub pace: Option<Pace>,
    pub days: Option<u8>,
    pub hours: Option<f64>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub terms: Option<u32>,
    pub output: Option<PathBuf>,
    pub format: String,
    pub links: bool,
}

pub fn execute(args: PlanArgs, config_path: Option<PathBuf>) -> Result<()> {
    let formats: Vec<&str> = if args.format == "all" {
        vec!["json", "html"]
    } else {
        args.format.split(',').map(str::trim).collect()
    };
    for fmt in &formats {
        anyhow::ensure!(
            matches!(*fmt, "json" | "html"),
            "unknown format '{fmt}', expected json, html or all"
        );
    }

    let (config, mut store) = super::open(config_path)?;

    let start = args.start.unwrap_or_else(|| Local::now().date_naive());
    let mut schedule = config.schedule.schedule_from(start);
    if let Some(days) = args.days {
        schedule.days_per_week = days;
    }
    if let Some(hours) = args.hours {
        schedule.hours_per_day = hours;
    }
    if let Some(end) = args.end {
        schedule.end_date = end;
    }
    if let Some(terms) = args.terms {
        schedule.terms = terms;
    }

    anyhow::ensure!(
        (3..=5).contains(&schedule.days_per_week),
        "days per week must be between 3 and 5"
    );
    anyhow::ensure!(
        (0.5..=2.0).contains(&schedule.hours_per_day),
        "hours per day must be between 0.5 and 2"
    );
    anyhow::ensure!(
        (1..=MAX_TERMS).contains(&schedule.terms),
        "terms must be between 1 and {MAX_TERMS}"
    );

    let base = if args.from_diagnostic {
        let profile = SessionHandoff::new(&mut store).take_profile();
        profile.ok_or_else(|| {
            anyhow::anyhow!("no diagnostic results found, run `ks2 quiz` first")
        })?
    } else {
        let name = args.name.clone().unwrap_or_default();
        anyhow::ensure!(!name.trim().is_empty(), "--name is required");
        let year = args
            .year
            .ok_or_else(|| anyhow::anyhow!("--year is required"))?;
        ChildProfile::new(name.trim(), year_label(year)?)
    };
    let profile = apply_overrides(base, &args)?;

    for warning in validate_schedule(&schedule) {
        eprintln!("Warning: {warning}");
    }

    let terms = generate(&profile, &schedule);
    print_summary(&profile, &schedule, &terms);

    let output = args.output.unwrap_or_else(|| config.output_dir.clone());
    let today = Local::now().date_naive();
    for term in &terms {
        let printable = PrintableScheme::new(&profile, term);
        for fmt in &formats {
            match *fmt {
                "json" => {
                    let path = write_download(&printable, &output)?;
                    eprintln!("Download saved to: {}", path.display());
                }
                "html" => {
                    let path = output.join(format!("{}.html", file_stem(&printable)));
                    write_scheme_html(&printable, today, &path)?;
                    eprintln!("Printable scheme: {}", path.display());
                }
                _ => {}
            }
        }
        if args.links {
            println!("{}: {}", term.term, encode_print_param(&printable)?);
        }
    }

    ActivityLog::new(&mut store).record(
        NewActivity::new(
            ActivityKind::Sow,
            format!("Scheme of work: {}", profile.name),
            "/scheme-of-work",
        )
        .with_metadata("yearGroup", profile.year_group.clone())
        .with_metadata("terms", schedule.terms),
    )?;

    Ok(())
}

fn year_label(year: u8) -> Result<String> {
    YearGroup::from_number(year)
        .map(YearGroup::label)
        .ok_or_else(|| anyhow::anyhow!("year must be between 3 and 6"))
}

/// Explicit flags win over whatever the diagnostic suggested.
fn apply_overrides(mut profile: ChildProfile, args: &PlanArgs) -> Result<ChildProfile> {
    if args.from_diagnostic {
        if let Some(name) = args.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            profile.name = name.to_string();
        }
        if let Some(year) = args.year {
            profile.year_group = year_label(year)?;
        }
    }
    if let Some(style) = args.style {
        profile.learning_style = style;
    }
    if let Some(pace) = args.pace {
        profile.pace = pace;
    }
    Ok(profile)
}

fn print_summary(profile: &ChildProfile, schedule: &ScheduleConfig, terms: &[TermScheme]) {
    println!(
        "Scheme of work for {} ({}, {} learner, {} pace)",
        profile.name, profile.year_group, profile.learning_style, profile.pace
    );
    println!(
        "{} to {}: {} day(s) a week, {} per lesson",
        schedule.start_date,
        schedule.end_date,
        schedule.days_per_week,
        schedule.lesson_duration()
    );

    let mut table = Table::new();
    table.set_header(vec!["Term", "Weeks", "First week", "First topic"]);
    for term in terms {
        let first = term.weeks.first();
        table.add_row(vec![
            Cell::new(&term.term),
            Cell::new(term.weeks.len()),
            Cell::new(first.map(|w| w.week.to_string()).unwrap_or_else(|| "-".into())),
            Cell::new(first.map(|w| w.topic.as_str()).unwrap_or("-")),
        ]);
    }
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> PlanArgs {
        PlanArgs {
            from_diagnostic: false,
            name: None,
            year: None,
            style: None,
            pace: None,
            days: None,
            hours: None,
            start: None,
            end: None,
            terms: None,
            output: None,
            format: "json".into(),
            links: false,
        }
    }

    #[test]
    fn overrides_apply_to_diagnostic_profile() {
        let profile = ChildProfile::new("Ada", "Year 5").with_pace(Pace::Supported);
        let mut a = args();
        a.from_diagnostic = true;
        a.year = Some(4);
        a.style = Some(LearningStyle::Auditory);

        let profile = apply_overrides(profile, &a).unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.year_group, "Year 4");
        assert_eq!(profile.learning_style, LearningStyle::Auditory);
        assert_eq!(profile.pace, Pace::Supported);
    }

    #[test]
    fn blank_name_override_is_ignored() {
        let mut a = args();
        a.from_diagnostic = true;
        a.name = Some("  ".into());
        let profile = apply_overrides(ChildProfile::new("Kit", "Year 3"), &a).unwrap();
        assert_eq!(profile.name, "Kit");
    }
}
