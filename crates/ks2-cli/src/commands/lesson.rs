//! The `ks2 lesson` command.

use std::path::PathBuf;

use anyhow::Result;

use ks2_core::activity::{ActivityKind, ActivityLog, NewActivity};
use ks2_core::content::curriculum;
use ks2_core::content::lessons::{self, LessonExample};

pub fn execute(id: String, show_answers: bool, config_path: Option<PathBuf>) -> Result<()> {
    let (_, store) = super::open(config_path)?;

    let lesson = lessons::lesson_content(&id);
    if lesson.id != id {
        match curriculum::find_lesson(&id) {
            Some(loc) => eprintln!(
                "\"{}\" has no written content yet, showing {} instead.",
                loc.lesson.title, lesson.id
            ),
            None => eprintln!("Unknown lesson \"{id}\", showing {} instead.", lesson.id),
        }
    }

    println!("{} ({})", lesson.title, lesson.year);
    println!();
    println!("Objectives:");
    for objective in lesson.objectives {
        println!("  - {objective}");
    }
    println!();
    println!("{}", lesson.introduction);
    println!();
    println!("Examples:");
    for example in lesson.examples {
        match example {
            LessonExample::WordBuilding {
                prefix,
                base,
                word,
                meaning,
            } => println!("  {prefix} + {base} = {word} ({meaning})"),
            LessonExample::SentenceType {
                name,
                example,
                punctuation,
                purpose,
            } => println!("  {name}: \"{example}\" [{punctuation}] {purpose}"),
        }
    }
    println!();
    println!("Practice:");
    for (i, item) in lesson.practice.iter().enumerate() {
        println!("  {}. {}", i + 1, item.question);
        if show_answers {
            println!("     Answer: {}", item.answer);
        }
    }

    let mut log = ActivityLog::new(store);
    log.record(NewActivity::new(
        ActivityKind::Lesson,
        lesson.title,
        format!("/lessons/{}", lesson.id),
    ))?;

    Ok(())
}
