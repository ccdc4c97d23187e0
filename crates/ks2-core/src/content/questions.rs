//! The fixed diagnostic question bank.
//!
//! Questions are ordered by year level and then by category. The scorer walks
//! them in this order, so the order decides how skill tags are listed in a
//! report.

use crate::model::{AnswerType, Category, CorrectAnswer, Question};

/// Every diagnostic question, Year 3 through Year 6.
pub static DIAGNOSTIC_QUESTIONS: &[Question] = &[
    Question {
        id: "sp3-1",
        category: Category::Spelling,
        year_level: 3,
        prompt: "Which word is spelled correctly?",
        answer_type: AnswerType::MultipleChoice,
        options: &[
            "happyness",
            "happiness",
            "hapiness",
            "happines",
        ],
        correct_answer: CorrectAnswer::Exact("happiness"),
        points: 1,
        skill: "suffix-spelling",
        image: None,
    },
    Question {
        id: "sp3-2",
        category: Category::Spelling,
        year_level: 3,
        prompt: "Add the prefix \"un\" to make the opposite of \"kind\":",
        answer_type: AnswerType::FillBlank,
        options: &[],
        correct_answer: CorrectAnswer::Exact("unkind"),
        points: 1,
        skill: "prefixes",
        image: None,
    },
    Question {
        id: "gr3-1",
        category: Category::Grammar,
        year_level: 3,
        prompt: "What type of sentence is this? \"What a beautiful day!\"",
        answer_type: AnswerType::MultipleChoice,
        options: &[
            "Statement",
            "Question",
            "Command",
            "Exclamation",
        ],
        correct_answer: CorrectAnswer::Exact("Exclamation"),
        points: 2,
        skill: "sentence-types",
        image: None,
    },
    Question {
        id: "gr3-2",
        category: Category::Grammar,
        year_level: 3,
        prompt: "Choose the correct conjunction: \"I wanted to play ___ it was raining.\"",
        answer_type: AnswerType::MultipleChoice,
        options: &[
            "but",
            "and",
            "so",
            "or",
        ],
        correct_answer: CorrectAnswer::Exact("but"),
        points: 2,
        skill: "conjunctions",
        image: None,
    },
    Question {
        id: "rd3-1",
        category: Category::Reading,
        year_level: 3,
        prompt: "Read this sentence: \"The cat crept quietly through the garden.\" What does \"crept\" mean?",
        answer_type: AnswerType::MultipleChoice,
        options: &[
            "ran quickly",
            "moved slowly and carefully",
            "jumped high",
            "sat still",
        ],
        correct_answer: CorrectAnswer::Exact("moved slowly and carefully"),
        points: 2,
        skill: "vocabulary-context",
        image: None,
    },
    Question {
        id: "vo3-1",
        category: Category::Vocabulary,
        year_level: 3,
        prompt: "Which word means the same as \"big\"?",
        answer_type: AnswerType::MultipleChoice,
        options: &[
            "tiny",
            "large",
            "thin",
            "short",
        ],
        correct_answer: CorrectAnswer::Exact("large"),
        points: 1,
        skill: "synonyms",
        image: None,
    },
    Question {
        id: "sp4-1",
        category: Category::Spelling,
        year_level: 4,
        prompt: "Complete the word: \"dis______ (to not like)\"",
        answer_type: AnswerType::FillBlank,
        options: &[],
        correct_answer: CorrectAnswer::Exact("dislike"),
        points: 2,
        skill: "prefixes",
        image: None,
    },
    Question {
        id: "sp4-2",
        category: Category::Spelling,
        year_level: 4,
        prompt: "Which plural is correct for \"baby\"?",
        answer_type: AnswerType::MultipleChoice,
        options: &[
            "babys",
            "babies",
            "babyes",
            "babyies",
        ],
        correct_answer: CorrectAnswer::Exact("babies"),
        points: 2,
        skill: "plurals",
        image: None,
    },
    Question {
        id: "gr4-1",
        category: Category::Grammar,
        year_level: 4,
        prompt: "Where should the apostrophe go? \"The dogs bowl\"",
        answer_type: AnswerType::MultipleChoice,
        options: &[
            "dog's bowl",
            "dogs' bowl",
            "do'gs bowl",
            "dogs bowl'",
        ],
        correct_answer: CorrectAnswer::Exact("dog's bowl"),
        points: 2,
        skill: "apostrophes-possession",
        image: None,
    },
    Question {
        id: "gr4-2",
        category: Category::Grammar,
        year_level: 4,
        prompt: "Identify the main clause: \"When the bell rang, the children ran outside.\"",
        answer_type: AnswerType::MultipleChoice,
        options: &[
            "When the bell rang",
            "the children ran outside",
            "the bell rang",
            "ran outside",
        ],
        correct_answer: CorrectAnswer::Exact("the children ran outside"),
        points: 3,
        skill: "clauses",
        image: None,
    },
    Question {
        id: "rd4-1",
        category: Category::Reading,
        year_level: 4,
        prompt: "What is the purpose of a heading in a non-fiction text?",
        answer_type: AnswerType::MultipleChoice,
        options: &[
            "To make the text look nice",
            "To tell you what that section is about",
            "To confuse the reader",
            "To end the text",
        ],
        correct_answer: CorrectAnswer::Exact("To tell you what that section is about"),
        points: 2,
        skill: "text-features",
        image: None,
    },
    Question {
        id: "wr4-1",
        category: Category::Writing,
        year_level: 4,
        prompt: "What should every paragraph have at the beginning?",
        answer_type: AnswerType::MultipleChoice,
        options: &[
            "A question",
            "A topic sentence",
            "A quote",
            "A number",
        ],
        correct_answer: CorrectAnswer::Exact("A topic sentence"),
        points: 2,
        skill: "paragraph-structure",
        image: None,
    },
    Question {
        id: "sp5-1",
        category: Category::Spelling,
        year_level: 5,
        prompt: "Which word has a silent letter?",
        answer_type: AnswerType::MultipleChoice,
        options: &[
            "cat",
            "knock",
            "jump",
            "green",
        ],
        correct_answer: CorrectAnswer::Exact("knock"),
        points: 2,
        skill: "silent-letters",
        image: None,
    },
    Question {
        id: "sp5-2",
        category: Category::Spelling,
        year_level: 5,
        prompt: "Complete: \"ambi_____ (having two possible meanings)\"",
        answer_type: AnswerType::FillBlank,
        options: &[],
        correct_answer: CorrectAnswer::Exact("ambiguous"),
        points: 3,
        skill: "advanced-vocabulary",
        image: None,
    },
    Question {
        id: "gr5-1",
        category: Category::Grammar,
        year_level: 5,
        prompt: "Which modal verb shows possibility? \"You ___ be right.\"",
        answer_type: AnswerType::MultipleChoice,
        options: &[
            "must",
            "might",
            "will",
            "shall",
        ],
        correct_answer: CorrectAnswer::Exact("might"),
        points: 3,
        skill: "modal-verbs",
        image: None,
    },
    Question {
        id: "gr5-2",
        category: Category::Grammar,
        year_level: 5,
        prompt: "Which sentence uses parenthesis correctly?",
        answer_type: AnswerType::MultipleChoice,
        options: &[
            "My friend (who lives nearby) is coming.",
            "My friend who lives (nearby) is coming.",
            "My (friend) who lives nearby is coming.",
            "(My friend who lives) nearby is coming.",
        ],
        correct_answer: CorrectAnswer::Exact("My friend (who lives nearby) is coming."),
        points: 3,
        skill: "parenthesis",
        image: None,
    },
    Question {
        id: "rd5-1",
        category: Category::Reading,
        year_level: 5,
        prompt: "What literary device is used in \"The stars danced in the sky\"?",
        answer_type: AnswerType::MultipleChoice,
        options: &[
            "Simile",
            "Metaphor",
            "Personification",
            "Alliteration",
        ],
        correct_answer: CorrectAnswer::Exact("Personification"),
        points: 3,
        skill: "figurative-language",
        image: None,
    },
    Question {
        id: "vo5-1",
        category: Category::Vocabulary,
        year_level: 5,
        prompt: "What does \"benevolent\" mean?",
        answer_type: AnswerType::MultipleChoice,
        options: &[
            "evil",
            "kind and helpful",
            "angry",
            "confused",
        ],
        correct_answer: CorrectAnswer::Exact("kind and helpful"),
        points: 3,
        skill: "advanced-vocabulary",
        image: None,
    },
    Question {
        id: "sp6-1",
        category: Category::Spelling,
        year_level: 6,
        prompt: "Which word uses a hyphen correctly?",
        answer_type: AnswerType::MultipleChoice,
        options: &[
            "re-cover (to cover again)",
            "hap-py",
            "beauti-ful",
            "run-ning",
        ],
        correct_answer: CorrectAnswer::Exact("re-cover (to cover again)"),
        points: 3,
        skill: "hyphens",
        image: None,
    },
    Question {
        id: "gr6-1",
        category: Category::Grammar,
        year_level: 6,
        prompt: "Which sentence is in the passive voice?",
        answer_type: AnswerType::MultipleChoice,
        options: &[
            "The boy kicked the ball.",
            "The ball was kicked by the boy.",
            "The boy will kick the ball.",
            "Kick the ball!",
        ],
        correct_answer: CorrectAnswer::Exact("The ball was kicked by the boy."),
        points: 4,
        skill: "passive-voice",
        image: None,
    },
    Question {
        id: "gr6-2",
        category: Category::Grammar,
        year_level: 6,
        prompt: "Which sentence uses the subjunctive mood?",
        answer_type: AnswerType::MultipleChoice,
        options: &[
            "If I was rich, I would travel.",
            "If I were rich, I would travel.",
            "I am rich and I travel.",
            "I will be rich and travel.",
        ],
        correct_answer: CorrectAnswer::Exact("If I were rich, I would travel."),
        points: 4,
        skill: "subjunctive",
        image: None,
    },
    Question {
        id: "rd6-1",
        category: Category::Reading,
        year_level: 6,
        prompt: "What is the author's purpose in a persuasive text?",
        answer_type: AnswerType::MultipleChoice,
        options: &[
            "To entertain the reader",
            "To convince the reader of something",
            "To provide information",
            "To describe a scene",
        ],
        correct_answer: CorrectAnswer::Exact("To convince the reader of something"),
        points: 3,
        skill: "author-purpose",
        image: None,
    },
    Question {
        id: "wr6-1",
        category: Category::Writing,
        year_level: 6,
        prompt: "What technique creates cohesion between paragraphs?",
        answer_type: AnswerType::MultipleChoice,
        options: &[
            "Using random words",
            "Starting every sentence the same",
            "Using linking phrases and pronouns",
            "Making paragraphs very short",
        ],
        correct_answer: CorrectAnswer::Exact("Using linking phrases and pronouns"),
        points: 3,
        skill: "cohesion",
        image: None,
    },
    Question {
        id: "vo6-1",
        category: Category::Vocabulary,
        year_level: 6,
        prompt: "Choose the formal version: \"The results were really bad\"",
        answer_type: AnswerType::MultipleChoice,
        options: &[
            "The results were super terrible",
            "The results were disappointing",
            "The results were rubbish",
            "The results were not good",
        ],
        correct_answer: CorrectAnswer::Exact("The results were disappointing"),
        points: 3,
        skill: "formal-language",
        image: None,
    },
];

/// The question bank used by [`crate::diagnostic::analyze`].
pub fn questions() -> &'static [Question] {
    DIAGNOSTIC_QUESTIONS
}

pub fn find_question(id: &str) -> Option<&'static Question> {
    DIAGNOSTIC_QUESTIONS.iter().find(|q| q.id == id)
}

/// Sum of all question point values.
pub fn total_points() -> u32 {
    DIAGNOSTIC_QUESTIONS.iter().map(|q| q.points).sum()
}
