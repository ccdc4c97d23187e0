//! Core data model types for ks2.
//!
//! These are the enumerations and records shared by the content tables, the
//! diagnostic scorer and the scheme generator.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The five assessed areas of English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Spelling,
    Grammar,
    Reading,
    Writing,
    Vocabulary,
}

impl Category {
    /// All categories in reporting order.
    pub const ALL: [Category; 5] = [
        Category::Spelling,
        Category::Grammar,
        Category::Reading,
        Category::Writing,
        Category::Vocabulary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Spelling => "spelling",
            Category::Grammar => "grammar",
            Category::Reading => "reading",
            Category::Writing => "writing",
            Category::Vocabulary => "vocabulary",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spelling" => Ok(Category::Spelling),
            "grammar" => Ok(Category::Grammar),
            "reading" => Ok(Category::Reading),
            "writing" => Ok(Category::Writing),
            "vocabulary" => Ok(Category::Vocabulary),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// A Key Stage 2 year group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum YearGroup {
    Year3,
    Year4,
    Year5,
    Year6,
}

impl YearGroup {
    pub const ALL: [YearGroup; 4] = [
        YearGroup::Year3,
        YearGroup::Year4,
        YearGroup::Year5,
        YearGroup::Year6,
    ];

    pub fn number(self) -> u8 {
        match self {
            YearGroup::Year3 => 3,
            YearGroup::Year4 => 4,
            YearGroup::Year5 => 5,
            YearGroup::Year6 => 6,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            3 => Some(YearGroup::Year3),
            4 => Some(YearGroup::Year4),
            5 => Some(YearGroup::Year5),
            6 => Some(YearGroup::Year6),
            _ => None,
        }
    }

    /// Parse a free-form label such as `"Year 4"`, `"year4"` or `"4"`.
    pub fn from_label(label: &str) -> Option<Self> {
        strip_year_label(label)
            .parse::<u8>()
            .ok()
            .and_then(Self::from_number)
    }

    /// Human-readable label, e.g. `"Year 4"`.
    pub fn label(self) -> String {
        format!("Year {}", self.number())
    }
}

impl fmt::Display for YearGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Year {}", self.number())
    }
}

impl FromStr for YearGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| format!("unknown year group: {s}"))
    }
}

/// Lower-case a year-group label and drop the leading `year` word.
///
/// `"Year 4"` becomes `"4"`. Unrecognised labels pass through stripped but
/// otherwise intact, since the resource list still quotes them.
pub fn strip_year_label(label: &str) -> String {
    label.to_lowercase().replacen("year", "", 1).trim().to_string()
}

/// How a question expects to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerType {
    MultipleChoice,
    FillBlank,
    TrueFalse,
    Written,
}

/// The accepted answer(s) for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
    /// Exactly one accepted value.
    Exact(&'static str),
    /// Any of several accepted values.
    OneOf(&'static [&'static str]),
}

impl CorrectAnswer {
    /// Exact, case-sensitive comparison of a submitted answer.
    pub fn accepts(&self, answer: &str) -> bool {
        match self {
            CorrectAnswer::Exact(expected) => *expected == answer,
            CorrectAnswer::OneOf(accepted) => accepted.contains(&answer),
        }
    }
}

/// A single diagnostic quiz question.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: &'static str,
    pub category: Category,
    /// Year group the question is pitched at (3–6).
    pub year_level: u8,
    #[serde(rename = "question")]
    pub prompt: &'static str,
    #[serde(rename = "type")]
    pub answer_type: AnswerType,
    #[serde(skip_serializing_if = "no_options")]
    pub options: &'static [&'static str],
    pub correct_answer: CorrectAnswer,
    pub points: u32,
    pub skill: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'static str>,
}

fn no_options(options: &&'static [&'static str]) -> bool {
    options.is_empty()
}

impl Question {
    pub fn is_correct(&self, answer: Option<&str>) -> bool {
        answer.is_some_and(|a| self.correct_answer.accepts(a))
    }
}

/// Submitted answers keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(HashMap<String, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any earlier answer to the same question.
    pub fn insert(&mut self, question_id: impl Into<String>, answer: impl Into<String>) {
        self.0.insert(question_id.into(), answer.into());
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

/// Inferred preferred way of learning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
    #[default]
    Mixed,
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearningStyle::Visual => write!(f, "visual"),
            LearningStyle::Auditory => write!(f, "auditory"),
            LearningStyle::Kinesthetic => write!(f, "kinesthetic"),
            LearningStyle::Mixed => write!(f, "mixed"),
        }
    }
}

impl FromStr for LearningStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "visual" => Ok(LearningStyle::Visual),
            "auditory" => Ok(LearningStyle::Auditory),
            "kinesthetic" | "kinaesthetic" => Ok(LearningStyle::Kinesthetic),
            "mixed" => Ok(LearningStyle::Mixed),
            other => Err(format!("unknown learning style: {other}")),
        }
    }
}

/// Recommended pace of study.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Supported,
    #[default]
    Standard,
    Accelerated,
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pace::Supported => write!(f, "supported"),
            Pace::Standard => write!(f, "standard"),
            Pace::Accelerated => write!(f, "accelerated"),
        }
    }
}

impl FromStr for Pace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "supported" => Ok(Pace::Supported),
            "standard" => Ok(Pace::Standard),
            "accelerated" => Ok(Pace::Accelerated),
            other => Err(format!("unknown pace: {other}")),
        }
    }
}

/// The learner a scheme of work is generated for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildProfile {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Free-form year label, normally `"Year 3"` to `"Year 6"`.
    pub year_group: String,
    #[serde(default)]
    pub learning_style: LearningStyle,
    #[serde(default)]
    pub pace: Pace,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub areas_for_improvement: Vec<String>,
    /// Overall diagnostic score, when the profile came from a quiz.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic_score: Option<u32>,
}

impl ChildProfile {
    /// A fresh profile with default style and pace.
    pub fn new(name: impl Into<String>, year_group: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            year_group: year_group.into(),
            learning_style: LearningStyle::default(),
            pace: Pace::default(),
            strengths: Vec::new(),
            areas_for_improvement: Vec::new(),
            diagnostic_score: None,
        }
    }

    pub fn with_style(mut self, style: LearningStyle) -> Self {
        self.learning_style = style;
        self
    }

    pub fn with_pace(mut self, pace: Pace) -> Self {
        self.pace = pace;
        self
    }
}

/// Day of the week a lesson falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// School days in scheduling order.
    pub const SCHOOL_DAYS: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// The subject taught on this day. Weekend days fall back to `"English"`.
    pub fn subject(self) -> &'static str {
        match self {
            Weekday::Monday => "Spelling & Vocabulary",
            Weekday::Tuesday => "Grammar & Punctuation",
            Weekday::Wednesday => "Reading Comprehension",
            Weekday::Thursday => "Writing Skills",
            Weekday::Friday => "Review & Assessment",
            Weekday::Saturday | Weekday::Sunday => "English",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_group_parse_and_label() {
        assert_eq!(YearGroup::from_label("Year 4"), Some(YearGroup::Year4));
        assert_eq!(YearGroup::from_label("year6"), Some(YearGroup::Year6));
        assert_eq!(YearGroup::from_label("  5 "), Some(YearGroup::Year5));
        assert_eq!(YearGroup::from_label("Year 7"), None);
        assert_eq!(YearGroup::from_label("Reception"), None);
        assert_eq!(YearGroup::Year3.label(), "Year 3");
        assert!("Year 2".parse::<YearGroup>().is_err());
    }

    #[test]
    fn strip_year_label_keeps_unknown_text() {
        assert_eq!(strip_year_label("Year 4"), "4");
        assert_eq!(strip_year_label("Reception"), "reception");
    }

    #[test]
    fn correct_answer_exact_and_one_of() {
        let exact = CorrectAnswer::Exact("happiness");
        assert!(exact.accepts("happiness"));
        assert!(!exact.accepts("Happiness"));

        let one_of = CorrectAnswer::OneOf(&["colour", "color"]);
        assert!(one_of.accepts("color"));
        assert!(!one_of.accepts("colur"));
        assert!(!one_of.accepts(""));
    }

    #[test]
    fn weekday_subject_mapping() {
        assert_eq!(Weekday::Monday.subject(), "Spelling & Vocabulary");
        assert_eq!(Weekday::Friday.subject(), "Review & Assessment");
        assert_eq!(Weekday::Saturday.subject(), "English");
        assert_eq!(Weekday::Sunday.subject(), "English");
    }

    #[test]
    fn style_and_pace_display_and_parse() {
        assert_eq!(LearningStyle::Kinesthetic.to_string(), "kinesthetic");
        assert_eq!(
            "Kinaesthetic".parse::<LearningStyle>().unwrap(),
            LearningStyle::Kinesthetic
        );
        assert_eq!("accelerated".parse::<Pace>().unwrap(), Pace::Accelerated);
        assert!("fast".parse::<Pace>().is_err());
        assert_eq!(Pace::default(), Pace::Standard);
        assert_eq!(LearningStyle::default(), LearningStyle::Mixed);
    }

    #[test]
    fn child_profile_deserializes_handoff_shape() {
        let json = r#"{
            "name": "Ada",
            "yearGroup": "Year 5",
            "learningStyle": "visual",
            "pace": "accelerated",
            "strengths": ["modal verbs"],
            "areasForImprovement": [],
            "diagnosticScore": 88
        }"#;
        let profile: ChildProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.learning_style, LearningStyle::Visual);
        assert_eq!(profile.pace, Pace::Accelerated);
        assert_eq!(profile.diagnostic_score, Some(88));
        assert!(profile.id.is_empty());
    }

    #[test]
    fn answer_set_from_iter_replaces_duplicates() {
        let set: AnswerSet = [("sp3-1", "happyness"), ("sp3-1", "happiness")]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("sp3-1"), Some("happiness"));
        assert_eq!(set.get("gr3-1"), None);
    }
}
