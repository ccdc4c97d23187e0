//! The `ks2 init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    let path = Path::new("ks2.toml");
    if path.exists() {
        println!("ks2.toml already exists, skipping.");
    } else {
        std::fs::write(path, SAMPLE_CONFIG)?;
        println!("Created ks2.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: ks2 quiz --name <child>");
    println!("  2. Run: ks2 plan --from-diagnostic --format all");
    println!("  3. Run: ks2 activity");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# ks2 configuration

# Activity log and quiz handoff live here.
data_dir = "./.ks2"
# Printable schemes and downloads are written here.
output_dir = "./ks2-output"

[schedule]
days_per_week = 5
hours_per_day = 1.0
terms = 3
include_holidays = true
length_months = 9
"#;
