//! The `ks2 activity` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use ks2_core::activity::ActivityLog;

pub fn execute(clear: bool, config_path: Option<PathBuf>) -> Result<()> {
    let (_, store) = super::open(config_path)?;
    let mut log = ActivityLog::new(store);

    if clear {
        log.clear()?;
        println!("Recent activity cleared.");
        return Ok(());
    }

    let entries = log.list();
    if entries.is_empty() {
        println!("No recent activity.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Type", "Title", "Date", "Link"]);
    for entry in &entries {
        table.add_row(vec![
            Cell::new(entry.kind),
            Cell::new(&entry.title),
            Cell::new(&entry.date),
            Cell::new(&entry.link),
        ]);
    }
    println!("{table}");

    let latest = &entries[0];
    println!("Resume: {} ({})", latest.title, latest.link);
    if let Some(test) = log.last_test() {
        println!("Last quiz: {} on {}", test.title, test.date);
    }
    if let Some(plan) = log.last_plan() {
        println!("Last plan: {} on {}", plan.title, plan.date);
    }
    let lessons = log.recent_lessons().len();
    if lessons > 0 {
        println!("{lessons} recent lesson(s)");
    }

    Ok(())
}
