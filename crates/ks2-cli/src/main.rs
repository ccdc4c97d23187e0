//! ks2 CLI: Key Stage 2 English lessons, diagnostics and schemes of work.

use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use ks2_core::model::{LearningStyle, Pace};

mod commands;

#[derive(Parser)]
#[command(name = "ks2", version, about = "Key Stage 2 English tutor")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the curriculum outline
    Curriculum {
        /// Only show one year group (3-6)
        #[arg(long, value_parser = clap::value_parser!(u8).range(3..=6))]
        year: Option<u8>,
    },

    /// Show a lesson
    Lesson {
        /// Lesson id, e.g. "prefixes-1"
        id: String,

        /// Include answers to the practice questions
        #[arg(long)]
        answers: bool,
    },

    /// Take the diagnostic quiz
    Quiz {
        /// Child's name
        #[arg(long)]
        name: String,

        /// JSON file of answers keyed by question id (interactive if omitted)
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Output format: text, json, html
        #[arg(long, default_value = "text")]
        format: String,

        /// Output directory for the html format
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Generate a scheme of work
    Plan {
        /// Start from the profile left by the last quiz
        #[arg(long)]
        from_diagnostic: bool,

        /// Child's name
        #[arg(long)]
        name: Option<String>,

        /// Year group (3-6)
        #[arg(long, value_parser = clap::value_parser!(u8).range(3..=6))]
        year: Option<u8>,

        /// Learning style: visual, auditory, kinesthetic, mixed
        #[arg(long)]
        style: Option<LearningStyle>,

        /// Pace: supported, standard, accelerated
        #[arg(long)]
        pace: Option<Pace>,

        /// Study days per week (3-5)
        #[arg(long)]
        days: Option<u8>,

        /// Study hours per day (0.5-2)
        #[arg(long)]
        hours: Option<f64>,

        /// Start date (YYYY-MM-DD, default today)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Number of terms
        #[arg(long)]
        terms: Option<u32>,

        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: json, html, all
        #[arg(long, default_value = "json")]
        format: String,

        /// Print a print-link payload for each term
        #[arg(long)]
        links: bool,
    },

    /// Render a print link as a printable HTML page
    Print {
        /// Encoded scheme snapshot from `ks2 plan --links`
        #[arg(long)]
        data: String,

        /// Output file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show or clear recent activity
    Activity {
        /// Forget all recorded activity
        #[arg(long)]
        clear: bool,
    },

    /// Create a starter ks2.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ks2=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Curriculum { year } => commands::curriculum::execute(year),
        Commands::Lesson { id, answers } => commands::lesson::execute(id, answers, config),
        Commands::Quiz {
            name,
            answers,
            format,
            output,
        } => commands::quiz::execute(name, answers, format, output, config),
        Commands::Plan {
            from_diagnostic,
            name,
            year,
            style,
            pace,
            days,
            hours,
            start,
            end,
            terms,
            output,
            format,
            links,
        } => commands::plan::execute(
            commands::plan::PlanArgs {
                from_diagnostic,
                name,
                year,
                style,
                pace,
                days,
                hours,
                start,
                end,
                terms,
                output,
                format,
                links,
            },
            config,
        ),
        Commands::Print { data, output } => commands::print::execute(data, output, config),
        Commands::Activity { clear } => commands::activity::execute(clear, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
