//! Scheme-of-work generation.
//!
//! A scheme is a list of terms, each a run of weekly plans, each a list of
//! daily lessons. Generation is a pure function of the child profile and the
//! schedule: no clock, no randomness.

use std::fmt;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::content::topics::{self, TopicBlock};
use crate::model::{strip_year_label, ChildProfile, LearningStyle, Pace, Weekday, YearGroup};

/// Assessment note attached to Friday lessons.
pub const FRIDAY_ASSESSMENT: &str = "Weekly review and assessment";

/// Most terms a scheme is offered in.
pub const MAX_TERMS: u32 = 6;

/// When and how much the child studies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    /// Study days per week, Monday first (3–5).
    pub days_per_week: u8,
    /// Study hours per day (0.5–2).
    pub hours_per_day: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Number of terms the span is divided into.
    pub terms: u32,
    #[serde(default = "default_true")]
    pub include_holidays: bool,
}

fn default_true() -> bool {
    true
}

impl ScheduleConfig {
    /// A five-day, one-hour, three-term schedule running nine months from `start`.
    pub fn starting(start: NaiveDate) -> Self {
        Self {
            days_per_week: 5,
            hours_per_day: 1.0,
            start_date: start,
            end_date: start.checked_add_months(Months::new(9)).unwrap_or(start),
            terms: 3,
            include_holidays: true,
        }
    }

    /// Whole weeks between the start and end dates. A reversed span has none.
    pub fn total_weeks(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days();
        if days <= 0 {
            0
        } else {
            (days / 7) as u32
        }
    }

    /// Whole weeks in each term. Zero terms means zero weeks.
    pub fn weeks_per_term(&self) -> u32 {
        self.total_weeks().checked_div(self.terms).unwrap_or(0)
    }

    /// Study days in scheduling order.
    pub fn study_days(&self) -> &'static [Weekday] {
        let days: &'static [Weekday; 5] = &Weekday::SCHOOL_DAYS;
        let n = (self.days_per_week as usize).min(days.len());
        &days[..n]
    }

    /// Per-lesson duration: a third of the daily hours, in whole minutes.
    pub fn lesson_duration(&self) -> String {
        let minutes = (self.hours_per_day * 60.0 / 3.0).floor().max(0.0) as u32;
        format!("{minutes} minutes")
    }
}

/// A problem with a schedule that the generator tolerates but a user
/// probably did not intend.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a schedule for values outside the supported ranges.
pub fn validate_schedule(schedule: &ScheduleConfig) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if !(3..=5).contains(&schedule.days_per_week) {
        warnings.push(ValidationWarning {
            field: "days_per_week",
            message: format!("{} is outside 3–5", schedule.days_per_week),
        });
    }
    if !(0.5..=2.0).contains(&schedule.hours_per_day) {
        warnings.push(ValidationWarning {
            field: "hours_per_day",
            message: format!("{} is outside 0.5–2", schedule.hours_per_day),
        });
    }
    if schedule.end_date < schedule.start_date {
        warnings.push(ValidationWarning {
            field: "end_date",
            message: format!(
                "{} is before the start date {}",
                schedule.end_date, schedule.start_date
            ),
        });
    }
    if schedule.terms > MAX_TERMS {
        warnings.push(ValidationWarning {
            field: "terms",
            message: format!("{} is more than {MAX_TERMS}", schedule.terms),
        });
    } else if schedule.terms == 0 {
        warnings.push(ValidationWarning {
            field: "terms",
            message: "no terms requested, the scheme will be empty".into(),
        });
    } else if schedule.weeks_per_term() == 0 {
        warnings.push(ValidationWarning {
            field: "terms",
            message: format!(
                "{} week(s) cannot be split into {} term(s)",
                schedule.total_weeks(),
                schedule.terms
            ),
        });
    }

    warnings
}

/// One day's lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub day: Weekday,
    pub subject: String,
    pub objective: String,
    pub activities: Vec<String>,
    pub resources: Vec<String>,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<String>,
}

/// One week of lessons on a single topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    /// Week number counted across the whole scheme, starting at 1.
    pub week: u32,
    pub topic: String,
    pub lessons: Vec<Lesson>,
}

/// A term's worth of weekly plans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermScheme {
    /// e.g. `"Term 2"`.
    pub term: String,
    pub weeks: Vec<WeeklyPlan>,
}

/// A single term packaged with the child it belongs to, as handed to the
/// print view and offered for download.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintableScheme {
    pub child_name: String,
    pub year_group: String,
    pub term: String,
    pub weeks: Vec<WeeklyPlan>,
}

impl PrintableScheme {
    pub fn new(profile: &ChildProfile, term: &TermScheme) -> Self {
        Self {
            child_name: profile.name.clone(),
            year_group: profile.year_group.clone(),
            term: term.term.clone(),
            weeks: term.weeks.clone(),
        }
    }
}

/// Generate a full scheme of work.
pub fn generate(profile: &ChildProfile, schedule: &ScheduleConfig) -> Vec<TermScheme> {
    let year_label = strip_year_label(&profile.year_group);
    let year = YearGroup::from_label(&year_label);
    let weeks_per_term = schedule.weeks_per_term();

    tracing::debug!(
        child = %profile.name,
        year_group = %profile.year_group,
        terms = schedule.terms,
        weeks_per_term,
        "generating scheme of work"
    );

    (1..=schedule.terms)
        .map(|term| {
            let weeks = (1..=weeks_per_term)
                .map(|week| {
                    let week_number = (term - 1) * weeks_per_term + week;
                    weekly_plan(week_number, year, &year_label, schedule, profile)
                })
                .collect();
            TermScheme {
                term: format!("Term {term}"),
                weeks,
            }
        })
        .collect()
}

fn weekly_plan(
    week_number: u32,
    year: Option<YearGroup>,
    year_label: &str,
    schedule: &ScheduleConfig,
    profile: &ChildProfile,
) -> WeeklyPlan {
    let block = topics::topic_for_week(week_number, year);
    let duration = schedule.lesson_duration();

    let lessons = schedule
        .study_days()
        .iter()
        .enumerate()
        .map(|(index, &day)| lesson_for(day, index, block, year_label, &duration, profile))
        .collect();

    WeeklyPlan {
        week: week_number,
        topic: block.main_topic.to_string(),
        lessons,
    }
}

fn lesson_for(
    day: Weekday,
    index: usize,
    block: &TopicBlock,
    year_label: &str,
    duration: &str,
    profile: &ChildProfile,
) -> Lesson {
    Lesson {
        day,
        subject: day.subject().to_string(),
        objective: block.objective(index).to_string(),
        activities: activities(profile.learning_style, profile.pace),
        resources: resources(year_label, block.main_topic),
        duration: duration.to_string(),
        assessment: (day == Weekday::Friday).then(|| FRIDAY_ASSESSMENT.to_string()),
    }
}

const BASE_ACTIVITIES: [&str; 4] = [
    "Interactive lesson introduction",
    "Guided practice exercises",
    "Independent work",
    "Peer review or self-assessment",
];

fn style_activities(style: LearningStyle) -> [&'static str; 4] {
    match style {
        LearningStyle::Visual => [
            "Watch educational video",
            "Create mind maps or diagrams",
            "Use color-coding for concepts",
            "Draw illustrations for stories",
        ],
        LearningStyle::Auditory => [
            "Listen to audio stories",
            "Discuss concepts aloud",
            "Record own reading",
            "Participate in group discussions",
        ],
        LearningStyle::Kinesthetic => [
            "Act out stories or concepts",
            "Use manipulatives for learning",
            "Create physical word cards",
            "Movement-based learning games",
        ],
        LearningStyle::Mixed => [
            "Multi-sensory activities",
            "Varied presentation formats",
            "Choice of activity types",
            "Flexible learning approaches",
        ],
    }
}

fn pace_activities(pace: Pace) -> Vec<&'static str> {
    match pace {
        Pace::Standard => BASE_ACTIVITIES.to_vec(),
        Pace::Accelerated => {
            let mut list = BASE_ACTIVITIES.to_vec();
            list.extend([
                "Extension challenges",
                "Advanced reading materials",
                "Independent research projects",
            ]);
            list
        }
        Pace::Supported => vec![
            "Pre-teaching vocabulary",
            "Scaffolded exercises",
            "Additional practice time",
            "One-on-one support sessions",
        ],
    }
}

/// Base activities, then the style's activities, then the pace's list.
pub fn activities(style: LearningStyle, pace: Pace) -> Vec<String> {
    BASE_ACTIVITIES
        .iter()
        .chain(style_activities(style).iter())
        .chain(pace_activities(pace).iter())
        .map(|s| s.to_string())
        .collect()
}

/// The fixed resource list for a lesson.
pub fn resources(year_label: &str, topic: &str) -> Vec<String> {
    vec![
        "Student workbook pages".to_string(),
        "Online interactive exercises".to_string(),
        "Educational videos".to_string(),
        "Practice worksheets".to_string(),
        "Reading materials".to_string(),
        "Assessment rubrics".to_string(),
        format!("Year {year_label} textbook - {topic} chapter"),
        "Supplementary online resources".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn year4() -> ChildProfile {
        ChildProfile::new("Ada", "Year 4")
    }

    fn schedule(days: u8, hours: f64, terms: u32, start: NaiveDate, end: NaiveDate) -> ScheduleConfig {
        ScheduleConfig {
            days_per_week: days,
            hours_per_day: hours,
            start_date: start,
            end_date: end,
            terms,
            include_holidays: true,
        }
    }

    fn scenario_b() -> ScheduleConfig {
        schedule(5, 1.0, 3, date(2024, 1, 1), date(2024, 9, 1))
    }

    #[test]
    fn week_arithmetic() {
        let s = scenario_b();
        assert_eq!(s.total_weeks(), 34);
        assert_eq!(s.weeks_per_term(), 11);
    }

    #[test]
    fn scenario_b_subjects_durations_and_assessment() {
        let terms = generate(&year4(), &scenario_b());
        assert_eq!(terms.len(), 3);
        assert_eq!(terms[0].term, "Term 1");
        assert_eq!(terms[2].term, "Term 3");

        for term in &terms {
            assert_eq!(term.weeks.len(), 11);
            for week in &term.weeks {
                assert_eq!(week.lessons.len(), 5);
                let monday = &week.lessons[0];
                assert_eq!(monday.day, Weekday::Monday);
                assert_eq!(monday.subject, "Spelling & Vocabulary");
                assert_eq!(monday.duration, "20 minutes");
                for lesson in &week.lessons {
                    if lesson.day == Weekday::Friday {
                        assert!(lesson.assessment.as_deref().is_some_and(|a| !a.is_empty()));
                    } else {
                        assert!(lesson.assessment.is_none());
                    }
                }
            }
        }
    }

    #[test]
    fn week_numbers_run_across_terms() {
        let terms = generate(&year4(), &scenario_b());
        assert_eq!(terms[0].weeks[0].week, 1);
        assert_eq!(terms[1].weeks[0].week, 12);
        assert_eq!(terms[2].weeks[10].week, 33);
        // Week 12 is block (12 - 1) % 4 = 3.
        assert_eq!(terms[1].weeks[0].topic, "Paragraph Organization");
    }

    #[test]
    fn objectives_follow_day_index() {
        let terms = generate(&year4(), &scenario_b());
        let week = &terms[0].weeks[0];
        assert_eq!(week.topic, "Complex Sentences");
        assert_eq!(week.lessons[0].objective, "Identify main and subordinate clauses");
        assert_eq!(week.lessons[4].objective, "Vary sentence structures in writing");
    }

    #[test]
    fn days_truncate_to_days_per_week() {
        let s = schedule(3, 1.5, 1, date(2024, 1, 1), date(2024, 2, 1));
        let terms = generate(&year4(), &s);
        let days: Vec<Weekday> = terms[0].weeks[0].lessons.iter().map(|l| l.day).collect();
        assert_eq!(days, vec![Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday]);
        assert!(terms[0].weeks[0].lessons.iter().all(|l| l.assessment.is_none()));
        assert_eq!(terms[0].weeks[0].lessons[0].duration, "30 minutes");
    }

    #[test]
    fn zero_terms_is_empty() {
        let s = schedule(5, 1.0, 0, date(2024, 1, 1), date(2024, 9, 1));
        assert_eq!(s.weeks_per_term(), 0);
        assert!(generate(&year4(), &s).is_empty());
    }

    #[test]
    fn reversed_dates_produce_no_weeks() {
        let s = schedule(5, 1.0, 3, date(2024, 9, 1), date(2024, 1, 1));
        assert_eq!(s.total_weeks(), 0);
        let terms = generate(&year4(), &s);
        assert_eq!(terms.len(), 3);
        assert!(terms.iter().all(|t| t.weeks.is_empty()));
    }

    #[test]
    fn generation_is_deterministic() {
        let profile = year4()
            .with_style(LearningStyle::Auditory)
            .with_pace(Pace::Accelerated);
        let a = serde_json::to_string(&generate(&profile, &scenario_b())).unwrap();
        let b = serde_json::to_string(&generate(&profile, &scenario_b())).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn activity_lists_by_pace() {
        let standard = activities(LearningStyle::Mixed, Pace::Standard);
        assert_eq!(standard.len(), 12);
        assert_eq!(standard[4], "Multi-sensory activities");
        assert_eq!(standard[8], "Interactive lesson introduction");

        let accelerated = activities(LearningStyle::Visual, Pace::Accelerated);
        assert_eq!(accelerated.len(), 15);
        assert_eq!(accelerated.last().unwrap(), "Independent research projects");

        let supported = activities(LearningStyle::Kinesthetic, Pace::Supported);
        assert_eq!(supported.len(), 12);
        assert_eq!(supported[8], "Pre-teaching vocabulary");
    }

    #[test]
    fn resources_quote_year_and_topic() {
        let terms = generate(&year4(), &scenario_b());
        let resources = &terms[0].weeks[0].lessons[0].resources;
        assert_eq!(resources.len(), 8);
        assert_eq!(resources[6], "Year 4 textbook - Complex Sentences chapter");
    }

    #[test]
    fn unknown_year_group_uses_year_three_topics() {
        let profile = ChildProfile::new("Bo", "Reception");
        let terms = generate(&profile, &scenario_b());
        let week = &terms[0].weeks[0];
        assert_eq!(week.topic, "Prefixes and Suffixes");
        assert_eq!(
            week.lessons[0].resources[6],
            "Year reception textbook - Prefixes and Suffixes chapter"
        );
    }

    #[test]
    fn friday_assessment_serializes_only_when_present() {
        let terms = generate(&year4(), &scenario_b());
        let json = serde_json::to_value(&terms[0].weeks[0]).unwrap();
        assert!(json["lessons"][0].get("assessment").is_none());
        assert_eq!(json["lessons"][4]["assessment"], FRIDAY_ASSESSMENT);
        assert_eq!(json["lessons"][4]["day"], "Friday");
    }

    #[test]
    fn validation_flags_out_of_range_values() {
        assert!(validate_schedule(&scenario_b()).is_empty());

        let s = schedule(6, 3.0, 0, date(2024, 9, 1), date(2024, 1, 1));
        let fields: Vec<&str> = validate_schedule(&s).iter().map(|w| w.field).collect();
        assert_eq!(fields, vec!["days_per_week", "hours_per_day", "end_date", "terms"]);
    }

    #[test]
    fn too_many_terms_is_flagged() {
        let s = schedule(5, 1.0, 200, date(2024, 1, 1), date(2024, 1, 15));
        let warnings = validate_schedule(&s);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "terms");
        assert!(warnings[0].message.contains("more than 6"));

        let s = schedule(5, 1.0, MAX_TERMS, date(2024, 1, 1), date(2024, 9, 1));
        assert!(validate_schedule(&s).is_empty());
    }

    #[test]
    fn printable_scheme_uses_camel_case() {
        let profile = year4();
        let terms = generate(&profile, &scenario_b());
        let printable = PrintableScheme::new(&profile, &terms[1]);
        let json = serde_json::to_value(&printable).unwrap();
        assert_eq!(json["childName"], "Ada");
        assert_eq!(json["yearGroup"], "Year 4");
        assert_eq!(json["term"], "Term 2");
        assert_eq!(json["weeks"].as_array().unwrap().len(), 11);
    }

    #[test]
    fn default_schedule_runs_nine_months() {
        let s = ScheduleConfig::starting(date(2024, 1, 15));
        assert_eq!(s.end_date, date(2024, 10, 15));
        assert_eq!(s.terms, 3);
    }
}
