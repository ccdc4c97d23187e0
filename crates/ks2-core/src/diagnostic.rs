//! Diagnostic scoring: turns a set of quiz answers into a report.
//!
//! Scoring is a single pass over the question bank that accumulates points per
//! category and a correct/total tally per skill tag. Everything else in the
//! report (year estimate, learning style, pace, recommendations) is derived
//! from those tallies with fixed thresholds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::questions;
use crate::model::{AnswerSet, Category, ChildProfile, LearningStyle, Pace, Question};

/// Skill accuracy at or above this percentage counts as a strength.
pub const STRENGTH_THRESHOLD: f64 = 80.0;
/// Skill accuracy below this percentage counts as a focus area.
pub const FOCUS_THRESHOLD: f64 = 50.0;
/// Categories scoring below this percentage get a targeted recommendation.
pub const CATEGORY_CONCERN_THRESHOLD: u32 = 60;
/// Reading/writing gap (in percentage points) that signals a learning style.
pub const STYLE_GAP: u32 = 20;

/// Score for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    pub category: Category,
    pub score: u32,
    pub max_score: u32,
    /// Rounded percentage, 0 when the category has no questions.
    pub percentage: u32,
    pub year_level_equivalent: u8,
}

/// The full outcome of a diagnostic quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticReport {
    pub child_name: String,
    pub test_date: DateTime<Utc>,
    /// Rounded overall percentage.
    pub overall_score: u32,
    /// e.g. `"Year 4"`.
    pub recommended_year: String,
    pub results: Vec<CategoryResult>,
    pub learning_style_indicator: LearningStyle,
    pub pace_recommendation: Pace,
    pub focus_areas: Vec<String>,
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
}

impl DiagnosticReport {
    pub fn category(&self, category: Category) -> Option<&CategoryResult> {
        self.results.iter().find(|r| r.category == category)
    }

    /// Build the profile handed to the scheme-of-work builder.
    pub fn to_child_profile(&self) -> ChildProfile {
        ChildProfile {
            id: Uuid::new_v4().to_string(),
            name: self.child_name.clone(),
            year_group: self.recommended_year.clone(),
            learning_style: self.learning_style_indicator,
            pace: self.pace_recommendation,
            strengths: self.strengths.clone(),
            areas_for_improvement: self.focus_areas.clone(),
            diagnostic_score: Some(self.overall_score),
        }
    }
}

/// Estimated year level for a category percentage.
pub fn year_level_for(percentage: u32) -> u8 {
    if percentage >= 80 {
        6
    } else if percentage >= 70 {
        5
    } else if percentage >= 60 {
        4
    } else {
        3
    }
}

/// Pace recommendation for an unrounded overall percentage.
pub fn pace_for(overall_percentage: f64) -> Pace {
    if overall_percentage >= 85.0 {
        Pace::Accelerated
    } else if overall_percentage < 60.0 {
        Pace::Supported
    } else {
        Pace::Standard
    }
}

/// Learning style inferred from the gap between reading and writing.
pub fn learning_style_for(reading: u32, writing: u32) -> LearningStyle {
    if reading > writing + STYLE_GAP {
        LearningStyle::Visual
    } else if writing > reading + STYLE_GAP {
        LearningStyle::Kinesthetic
    } else {
        LearningStyle::Mixed
    }
}

fn rounded_percentage(score: u32, max_score: u32) -> u32 {
    if max_score == 0 {
        return 0;
    }
    (score as f64 / max_score as f64 * 100.0).round() as u32
}

/// `suffix-spelling` → `suffix spelling`.
fn skill_label(skill: &str) -> String {
    skill.replace('-', " ")
}

#[derive(Debug, Default)]
struct Tally {
    score: u32,
    max_score: u32,
}

#[derive(Debug)]
struct SkillTally {
    skill: &'static str,
    correct: u32,
    total: u32,
}

impl SkillTally {
    fn percentage(&self) -> f64 {
        self.correct as f64 / self.total as f64 * 100.0
    }
}

/// Score answers against the built-in question bank, stamped with the current time.
pub fn analyze(answers: &AnswerSet, child_name: &str) -> DiagnosticReport {
    analyze_at(answers, child_name, Utc::now())
}

/// Score answers against the built-in question bank with an explicit timestamp.
pub fn analyze_at(answers: &AnswerSet, child_name: &str, at: DateTime<Utc>) -> DiagnosticReport {
    analyze_with(questions::questions(), answers, child_name, at)
}

/// Score answers against an arbitrary question bank.
pub fn analyze_with(
    questions: &[Question],
    answers: &AnswerSet,
    child_name: &str,
    at: DateTime<Utc>,
) -> DiagnosticReport {
    let mut tallies: [Tally; 5] = Default::default();
    let mut skills: Vec<SkillTally> = Vec::new();
    let mut total_score = 0u32;
    let mut total_max = 0u32;

    for question in questions {
        let idx = category_index(question.category);
        let correct = question.is_correct(answers.get(question.id));

        tallies[idx].max_score += question.points;
        total_max += question.points;
        if correct {
            tallies[idx].score += question.points;
            total_score += question.points;
        }

        let pos = match skills.iter().position(|s| s.skill == question.skill) {
            Some(pos) => pos,
            None => {
                skills.push(SkillTally {
                    skill: question.skill,
                    correct: 0,
                    total: 0,
                });
                skills.len() - 1
            }
        };
        skills[pos].total += 1;
        if correct {
            skills[pos].correct += 1;
        }
    }

    let results: Vec<CategoryResult> = Category::ALL
        .iter()
        .zip(tallies.iter())
        .map(|(&category, tally)| {
            let percentage = rounded_percentage(tally.score, tally.max_score);
            CategoryResult {
                category,
                score: tally.score,
                max_score: tally.max_score,
                percentage,
                year_level_equivalent: year_level_for(percentage),
            }
        })
        .collect();

    let mut strengths = Vec::new();
    let mut focus_areas = Vec::new();
    for tally in &skills {
        let pct = tally.percentage();
        if pct >= STRENGTH_THRESHOLD {
            strengths.push(skill_label(tally.skill));
        } else if pct < FOCUS_THRESHOLD {
            focus_areas.push(skill_label(tally.skill));
        }
    }

    let recommended_year = modal_year_level(&results);

    let overall = if total_max == 0 {
        0.0
    } else {
        total_score as f64 / total_max as f64 * 100.0
    };

    let percentage_of = |c: Category| {
        results
            .iter()
            .find(|r| r.category == c)
            .map(|r| r.percentage)
            .unwrap_or(0)
    };
    let learning_style = learning_style_for(
        percentage_of(Category::Reading),
        percentage_of(Category::Writing),
    );
    let pace = pace_for(overall);

    let recommendations = build_recommendations(pace, recommended_year, &results, &focus_areas);

    tracing::debug!(
        child = child_name,
        overall,
        recommended_year,
        %pace,
        %learning_style,
        "diagnostic analysed"
    );

    DiagnosticReport {
        child_name: child_name.to_string(),
        test_date: at,
        overall_score: overall.round() as u32,
        recommended_year: format!("Year {recommended_year}"),
        results,
        learning_style_indicator: learning_style,
        pace_recommendation: pace,
        focus_areas,
        strengths,
        recommendations,
    }
}

fn category_index(category: Category) -> usize {
    Category::ALL
        .iter()
        .position(|&c| c == category)
        .unwrap_or_default()
}

/// Most frequent year level across categories; ties go to the level seen first.
fn modal_year_level(results: &[CategoryResult]) -> u8 {
    let mut counts: Vec<(u8, usize)> = Vec::new();
    for r in results {
        match counts.iter_mut().find(|(level, _)| *level == r.year_level_equivalent) {
            Some((_, count)) => *count += 1,
            None => counts.push((r.year_level_equivalent, 1)),
        }
    }

    let mut best = (3u8, 0usize);
    for &(level, count) in &counts {
        if count > best.1 {
            best = (level, count);
        }
    }
    best.0
}

fn build_recommendations(
    pace: Pace,
    recommended_year: u8,
    results: &[CategoryResult],
    focus_areas: &[String],
) -> Vec<String> {
    let mut recs: Vec<String> = match pace {
        Pace::Supported => vec![
            "Start with foundational skills and provide extra practice time".into(),
            "Use multi-sensory learning approaches".into(),
            "Break lessons into smaller, manageable chunks".into(),
        ],
        Pace::Accelerated => vec![
            "Include extension activities and challenges".into(),
            format!("Introduce Year {} concepts gradually", recommended_year + 1),
            "Encourage independent research projects".into(),
        ],
        Pace::Standard => Vec::new(),
    };

    for r in results {
        if r.percentage < CATEGORY_CONCERN_THRESHOLD {
            recs.push(format!("Focus on {} with additional exercises", r.category));
        }
    }

    if !focus_areas.is_empty() {
        recs.push(format!(
            "Priority areas for improvement: {}",
            focus_areas.join(", ")
        ));
    }

    recs
}
