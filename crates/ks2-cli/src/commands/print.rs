//! The `ks2 print` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;

use ks2_report::export::{decode_print_param, file_stem};
use ks2_report::html::write_scheme_html;

pub fn execute(data: String, output: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let scheme = decode_print_param(&data).context("invalid print link")?;

    let path = match output {
        Some(path) => path,
        None => {
            let (config, _) = super::open(config_path)?;
            config.output_dir.join(format!("{}.html", file_stem(&scheme)))
        }
    };

    write_scheme_html(&scheme, Local::now().date_naive(), &path)?;
    println!(
        "Printable scheme for {} ({}, {} weeks): {}",
        scheme.child_name,
        scheme.term,
        scheme.weeks.len(),
        path.display()
    );
    Ok(())
}
