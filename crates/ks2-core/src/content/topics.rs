//! Weekly topic templates used by the scheme generator.
//!
//! Each year group cycles through four topic blocks. A block carries one
//! objective per school day.

use serde::Serialize;

use crate::model::YearGroup;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicBlock {
    pub main_topic: &'static str,
    pub objectives: &'static [&'static str],
}

impl TopicBlock {
    /// Objective for the given day index, wrapping to the first objective
    /// when the block has fewer objectives than days.
    pub fn objective(&self, day_index: usize) -> &'static str {
        self.objectives
            .get(day_index)
            .or_else(|| self.objectives.first())
            .copied()
            .unwrap_or_default()
    }
}

static YEAR3_TOPICS: [TopicBlock; 4] = [
    TopicBlock {
        main_topic: "Prefixes and Suffixes",
        objectives: &[
            "Identify common prefixes (un-, dis-, mis-)",
            "Apply suffixes to root words (-ness, -ful, -less)",
            "Create new words using prefixes and suffixes",
            "Understand how affixes change word meanings",
            "Practice spelling words with affixes",
        ],
    },
    TopicBlock {
        main_topic: "Sentence Types and Punctuation",
        objectives: &[
            "Identify four types of sentences",
            "Use correct punctuation for each sentence type",
            "Write statements and questions",
            "Create commands and exclamations",
            "Review and assess sentence writing",
        ],
    },
    TopicBlock {
        main_topic: "Reading Comprehension - Fiction",
        objectives: &[
            "Identify main characters and settings",
            "Sequence story events",
            "Make predictions about plot",
            "Understand character feelings",
            "Summarize stories in own words",
        ],
    },
    TopicBlock {
        main_topic: "Descriptive Writing",
        objectives: &[
            "Use adjectives to describe nouns",
            "Create expanded noun phrases",
            "Write descriptive paragraphs",
            "Use senses in descriptions",
            "Edit and improve descriptive writing",
        ],
    },
];

static YEAR4_TOPICS: [TopicBlock; 4] = [
    TopicBlock {
        main_topic: "Complex Sentences",
        objectives: &[
            "Identify main and subordinate clauses",
            "Use conjunctions to join clauses",
            "Create complex sentences",
            "Punctuate complex sentences correctly",
            "Vary sentence structures in writing",
        ],
    },
    TopicBlock {
        main_topic: "Apostrophes and Possession",
        objectives: &[
            "Use apostrophes for contraction",
            "Show singular possession",
            "Show plural possession",
            "Distinguish its/it's usage",
            "Apply apostrophes in writing",
        ],
    },
    TopicBlock {
        main_topic: "Non-Fiction Reading",
        objectives: &[
            "Identify text features",
            "Find information using contents/index",
            "Distinguish fact from opinion",
            "Take notes from texts",
            "Create own information texts",
        ],
    },
    TopicBlock {
        main_topic: "Paragraph Organization",
        objectives: &[
            "Understand paragraph structure",
            "Write topic sentences",
            "Add supporting details",
            "Use transitions between paragraphs",
            "Organize ideas logically",
        ],
    },
];

static YEAR5_TOPICS: [TopicBlock; 4] = [
    TopicBlock {
        main_topic: "Advanced Punctuation",
        objectives: &[
            "Use parenthesis (brackets, dashes, commas)",
            "Apply colons and semicolons",
            "Punctuate dialogue correctly",
            "Use ellipsis for effect",
            "Master complex punctuation rules",
        ],
    },
    TopicBlock {
        main_topic: "Formal and Informal Language",
        objectives: &[
            "Identify formal vs informal register",
            "Write formal letters",
            "Adapt tone for audience",
            "Use modal verbs appropriately",
            "Convert between formal/informal styles",
        ],
    },
    TopicBlock {
        main_topic: "Poetry Analysis",
        objectives: &[
            "Identify poetic devices",
            "Analyze rhythm and rhyme",
            "Explore figurative language",
            "Compare different poems",
            "Write original poetry",
        ],
    },
    TopicBlock {
        main_topic: "Persuasive Writing",
        objectives: &[
            "Identify persuasive techniques",
            "Structure arguments effectively",
            "Use evidence to support points",
            "Write persuasive letters",
            "Debate and present arguments",
        ],
    },
];

static YEAR6_TOPICS: [TopicBlock; 4] = [
    TopicBlock {
        main_topic: "Advanced Grammar",
        objectives: &[
            "Master passive and active voice",
            "Use subjunctive mood",
            "Apply advanced verb forms",
            "Understand word classes fully",
            "Edit for grammatical accuracy",
        ],
    },
    TopicBlock {
        main_topic: "SATs Preparation - SPaG",
        objectives: &[
            "Review all punctuation rules",
            "Practice grammar exercises",
            "Complete past paper questions",
            "Time management strategies",
            "Check and correct work",
        ],
    },
    TopicBlock {
        main_topic: "Critical Reading Skills",
        objectives: &[
            "Make complex inferences",
            "Analyze author's purpose",
            "Evaluate text effectiveness",
            "Compare multiple texts",
            "Write critical responses",
        ],
    },
    TopicBlock {
        main_topic: "Extended Writing Projects",
        objectives: &[
            "Plan extended narratives",
            "Develop complex characters",
            "Create detailed settings",
            "Edit and redraft work",
            "Publish final pieces",
        ],
    },
];

/// Topic blocks for a year group. Unrecognised year groups get Year 3.
pub fn topic_blocks(year: Option<YearGroup>) -> &'static [TopicBlock; 4] {
    match year {
        Some(YearGroup::Year3) | None => &YEAR3_TOPICS,
        Some(YearGroup::Year4) => &YEAR4_TOPICS,
        Some(YearGroup::Year5) => &YEAR5_TOPICS,
        Some(YearGroup::Year6) => &YEAR6_TOPICS,
    }
}

/// The block taught in a given (1-based) week number.
pub fn topic_for_week(week: u32, year: Option<YearGroup>) -> &'static TopicBlock {
    let blocks = topic_blocks(year);
    let index = (week.max(1) - 1) as usize % blocks.len();
    &blocks[index]
}
