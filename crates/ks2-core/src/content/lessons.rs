//! Full lesson bodies for the lesson viewer.
//!
//! Only a handful of curriculum lessons have written content. Any other id
//! resolves to [`DEFAULT_LESSON_ID`].

use serde::Serialize;

/// Lesson shown when the requested id has no written content.
pub const DEFAULT_LESSON_ID: &str = "prefixes-1";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonContent {
    pub id: &'static str,
    pub title: &'static str,
    pub year: &'static str,
    pub objectives: &'static [&'static str],
    pub introduction: &'static str,
    pub examples: &'static [LessonExample],
    pub practice: &'static [PracticeItem],
}

/// A worked example. Word-building lessons and sentence lessons present
/// their examples differently.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum LessonExample {
    WordBuilding {
        prefix: &'static str,
        base: &'static str,
        word: &'static str,
        meaning: &'static str,
    },
    SentenceType {
        name: &'static str,
        example: &'static str,
        punctuation: &'static str,
        purpose: &'static str,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct PracticeItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static LESSONS: &[LessonContent] = &[
    LessonContent {
        id: "prefixes-1",
        title: "Common Prefixes: un-, dis-, mis-",
        year: "Year 3",
        objectives: &[
            "Understand how prefixes change word meanings",
            "Identify common prefixes in words",
            "Use prefixes to create new words",
        ],
        introduction: "Prefixes are letters we add to the beginning of words to change their meaning. Today we will learn about three common prefixes: un-, dis-, and mis-.",
        examples: &[
            LessonExample::WordBuilding {
                prefix: "un-",
                base: "happy",
                word: "unhappy",
                meaning: "not happy",
            },
            LessonExample::WordBuilding {
                prefix: "dis-",
                base: "like",
                word: "dislike",
                meaning: "not like",
            },
            LessonExample::WordBuilding {
                prefix: "mis-",
                base: "understand",
                word: "misunderstand",
                meaning: "understand wrongly",
            },
        ],
        practice: &[
            PracticeItem {
                question: "What does \"unkind\" mean?",
                answer: "not kind",
            },
            PracticeItem {
                question: "Add a prefix to \"agree\" to mean the opposite",
                answer: "disagree",
            },
            PracticeItem {
                question: "What prefix means \"wrongly\" or \"badly\"?",
                answer: "mis-",
            },
        ],
    },
    LessonContent {
        id: "sentences-1",
        title: "Types of Sentences",
        year: "Year 3",
        objectives: &[
            "Identify different sentence types",
            "Use appropriate punctuation for each sentence type",
            "Write different types of sentences",
        ],
        introduction: "There are four main types of sentences in English. Each type has a different purpose and uses different punctuation.",
        examples: &[
            LessonExample::SentenceType {
                name: "Statement",
                example: "The cat is sleeping.",
                punctuation: "Full stop (.)",
                purpose: "Tells us something",
            },
            LessonExample::SentenceType {
                name: "Question",
                example: "Where is the cat?",
                punctuation: "Question mark (?)",
                purpose: "Asks something",
            },
            LessonExample::SentenceType {
                name: "Command",
                example: "Feed the cat.",
                punctuation: "Full stop (.)",
                purpose: "Tells someone to do something",
            },
            LessonExample::SentenceType {
                name: "Exclamation",
                example: "What a cute cat!",
                punctuation: "Exclamation mark (!)",
                purpose: "Shows strong feeling",
            },
        ],
        practice: &[
            PracticeItem {
                question: "Is this a question or statement: \"The dog barked\"",
                answer: "statement",
            },
            PracticeItem {
                question: "What punctuation goes at the end of: \"How are you\"",
                answer: "?",
            },
            PracticeItem {
                question: "Write a command sentence",
                answer: "Various answers possible",
            },
        ],
    },
];

pub fn has_content(id: &str) -> bool {
    LESSONS.iter().any(|l| l.id == id)
}

/// Resolve a lesson id to its content, falling back to the default lesson.
pub fn lesson_content(id: &str) -> &'static LessonContent {
    LESSONS
        .iter()
        .find(|l| l.id == id)
        .or_else(|| LESSONS.iter().find(|l| l.id == DEFAULT_LESSON_ID))
        .unwrap_or(&LESSONS[0])
}
