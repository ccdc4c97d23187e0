//! Key Stage 2 curriculum outline: year groups, topics and lesson titles.

use serde::Serialize;

use crate::model::YearGroup;

/// The topics taught in one year group.
#[derive(Debug, Clone, Serialize)]
pub struct YearCurriculum {
    pub year: YearGroup,
    pub title: &'static str,
    pub topics: &'static [Topic],
}

/// A block of related lessons within a year.
#[derive(Debug, Clone, Serialize)]
pub struct Topic {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub lessons: &'static [LessonRef],
}

/// A lesson as listed in the curriculum outline.
#[derive(Debug, Clone, Serialize)]
pub struct LessonRef {
    pub id: &'static str,
    pub title: &'static str,
}

/// Where a lesson sits in the curriculum.
#[derive(Debug, Clone, Copy)]
pub struct LessonLocation {
    pub year: &'static YearCurriculum,
    pub topic: &'static Topic,
    pub lesson: &'static LessonRef,
}

pub static CURRICULUM: &[YearCurriculum] = &[
    YearCurriculum {
        year: YearGroup::Year3,
        title: "Year 3",
        topics: &[
            Topic {
                id: "spelling-y3",
                title: "Spelling & Vocabulary",
                description: "Prefixes, suffixes, and word families",
                lessons: &[
                    LessonRef {
                        id: "prefixes-1",
                        title: "Common Prefixes: un-, dis-, mis-",
                    },
                    LessonRef {
                        id: "suffixes-1",
                        title: "Common Suffixes: -ness, -ful, -less",
                    },
                    LessonRef {
                        id: "homophones-1",
                        title: "Homophones and Near Homophones",
                    },
                ],
            },
            Topic {
                id: "grammar-y3",
                title: "Grammar & Punctuation",
                description: "Sentence structure and punctuation rules",
                lessons: &[
                    LessonRef {
                        id: "sentences-1",
                        title: "Types of Sentences",
                    },
                    LessonRef {
                        id: "conjunctions-1",
                        title: "Conjunctions: and, but, so",
                    },
                    LessonRef {
                        id: "punctuation-1",
                        title: "Commas in Lists",
                    },
                ],
            },
            Topic {
                id: "reading-y3",
                title: "Reading Comprehension",
                description: "Understanding texts and inference",
                lessons: &[
                    LessonRef {
                        id: "fiction-1",
                        title: "Understanding Fiction",
                    },
                    LessonRef {
                        id: "nonfiction-1",
                        title: "Reading Non-Fiction",
                    },
                    LessonRef {
                        id: "poetry-1",
                        title: "Exploring Poetry",
                    },
                ],
            },
        ],
    },
    YearCurriculum {
        year: YearGroup::Year4,
        title: "Year 4",
        topics: &[
            Topic {
                id: "spelling-y4",
                title: "Spelling & Vocabulary",
                description: "Advanced prefixes and root words",
                lessons: &[
                    LessonRef {
                        id: "prefixes-2",
                        title: "Advanced Prefixes: re-, sub-, inter-",
                    },
                    LessonRef {
                        id: "suffixes-2",
                        title: "Suffixes: -ation, -ly, -ous",
                    },
                    LessonRef {
                        id: "plural-1",
                        title: "Plural Spellings",
                    },
                ],
            },
            Topic {
                id: "grammar-y4",
                title: "Grammar & Punctuation",
                description: "Complex sentences and apostrophes",
                lessons: &[
                    LessonRef {
                        id: "clauses-1",
                        title: "Main and Subordinate Clauses",
                    },
                    LessonRef {
                        id: "apostrophes-1",
                        title: "Apostrophes for Possession",
                    },
                    LessonRef {
                        id: "speech-1",
                        title: "Direct Speech and Punctuation",
                    },
                ],
            },
            Topic {
                id: "writing-y4",
                title: "Writing Skills",
                description: "Paragraphs and text organization",
                lessons: &[
                    LessonRef {
                        id: "paragraphs-1",
                        title: "Organizing Paragraphs",
                    },
                    LessonRef {
                        id: "narrative-1",
                        title: "Writing Narratives",
                    },
                    LessonRef {
                        id: "reports-1",
                        title: "Writing Reports",
                    },
                ],
            },
        ],
    },
    YearCurriculum {
        year: YearGroup::Year5,
        title: "Year 5",
        topics: &[
            Topic {
                id: "spelling-y5",
                title: "Spelling & Vocabulary",
                description: "Word origins and spelling patterns",
                lessons: &[
                    LessonRef {
                        id: "origins-1",
                        title: "Words from Other Languages",
                    },
                    LessonRef {
                        id: "silent-1",
                        title: "Silent Letters",
                    },
                    LessonRef {
                        id: "endings-1",
                        title: "Word Endings: -cious, -tious",
                    },
                ],
            },
            Topic {
                id: "grammar-y5",
                title: "Grammar & Punctuation",
                description: "Parenthesis and complex punctuation",
                lessons: &[
                    LessonRef {
                        id: "parenthesis-1",
                        title: "Brackets, Dashes and Commas",
                    },
                    LessonRef {
                        id: "modal-1",
                        title: "Modal Verbs",
                    },
                    LessonRef {
                        id: "relative-1",
                        title: "Relative Clauses",
                    },
                ],
            },
            Topic {
                id: "comprehension-y5",
                title: "Advanced Comprehension",
                description: "Inference and author's intent",
                lessons: &[
                    LessonRef {
                        id: "inference-1",
                        title: "Making Inferences",
                    },
                    LessonRef {
                        id: "language-1",
                        title: "Figurative Language",
                    },
                    LessonRef {
                        id: "structure-1",
                        title: "Text Structure and Features",
                    },
                ],
            },
        ],
    },
    YearCurriculum {
        year: YearGroup::Year6,
        title: "Year 6",
        topics: &[
            Topic {
                id: "spelling-y6",
                title: "Advanced Spelling",
                description: "Complex spelling patterns",
                lessons: &[
                    LessonRef {
                        id: "hyphen-1",
                        title: "Hyphens and Word Formation",
                    },
                    LessonRef {
                        id: "formal-1",
                        title: "Formal and Informal Vocabulary",
                    },
                    LessonRef {
                        id: "synonyms-1",
                        title: "Synonyms and Antonyms",
                    },
                ],
            },
            Topic {
                id: "grammar-y6",
                title: "Advanced Grammar",
                description: "Passive voice and subjunctive",
                lessons: &[
                    LessonRef {
                        id: "passive-1",
                        title: "Active and Passive Voice",
                    },
                    LessonRef {
                        id: "subjunctive-1",
                        title: "The Subjunctive Form",
                    },
                    LessonRef {
                        id: "cohesion-1",
                        title: "Cohesion Across Paragraphs",
                    },
                ],
            },
            Topic {
                id: "sats-prep",
                title: "SATs Preparation",
                description: "Exam techniques and practice",
                lessons: &[
                    LessonRef {
                        id: "spag-1",
                        title: "SPaG Test Practice",
                    },
                    LessonRef {
                        id: "reading-test-1",
                        title: "Reading Test Strategies",
                    },
                    LessonRef {
                        id: "writing-assess-1",
                        title: "Writing Assessment Tips",
                    },
                ],
            },
        ],
    },
];

pub fn for_year(year: YearGroup) -> Option<&'static YearCurriculum> {
    CURRICULUM.iter().find(|y| y.year == year)
}

/// Look up a lesson by id across all year groups.
pub fn find_lesson(id: &str) -> Option<LessonLocation> {
    CURRICULUM.iter().find_map(|year| {
        year.topics.iter().find_map(|topic| {
            topic
                .lessons
                .iter()
                .find(|l| l.id == id)
                .map(|lesson| LessonLocation {
                    year,
                    topic,
                    lesson,
                })
        })
    })
}

pub fn lesson_count() -> usize {
    CURRICULUM
        .iter()
        .flat_map(|y| y.topics.iter())
        .map(|t| t.lessons.len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_year_has_three_topics_of_three_lessons() {
        assert_eq!(CURRICULUM.len(), 4);
        for year in CURRICULUM {
            assert_eq!(year.topics.len(), 3, "{}", year.title);
            for topic in year.topics {
                assert_eq!(topic.lessons.len(), 3, "{}", topic.id);
            }
        }
        assert_eq!(lesson_count(), 36);
    }

    #[test]
    fn find_lesson_reports_location() {
        let loc = find_lesson("modal-1").unwrap();
        assert_eq!(loc.year.year, YearGroup::Year5);
        assert_eq!(loc.topic.id, "grammar-y5");
        assert_eq!(loc.lesson.title, "Modal Verbs");
        assert!(find_lesson("missing-1").is_none());
    }

    #[test]
    fn for_year_matches_titles() {
        for year in YearGroup::ALL {
            let curriculum = for_year(year).unwrap();
            assert_eq!(curriculum.title, year.label());
        }
    }
}
