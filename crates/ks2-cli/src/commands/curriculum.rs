//! The `ks2 curriculum` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use ks2_core::content::curriculum::{self, CURRICULUM};
use ks2_core::model::YearGroup;

pub fn execute(year: Option<u8>) -> Result<()> {
    let years: Vec<_> = match year {
        Some(n) => {
            let year = YearGroup::from_number(n)
                .ok_or_else(|| anyhow::anyhow!("no curriculum for year {n}"))?;
            curriculum::for_year(year).into_iter().collect()
        }
        None => CURRICULUM.iter().collect(),
    };

    let mut table = Table::new();
    table.set_header(vec!["Year", "Topic", "Lesson", "Title"]);

    for year in &years {
        for topic in year.topics {
            for lesson in topic.lessons {
                table.add_row(vec![
                    Cell::new(year.year),
                    Cell::new(topic.title),
                    Cell::new(lesson.id),
                    Cell::new(lesson.title),
                ]);
            }
        }
    }

    println!("{table}");
    if year.is_none() {
        println!("{} lessons across {} year groups", curriculum::lesson_count(), years.len());
    }
    Ok(())
}
