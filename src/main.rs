use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crag_log::config::Config;
use crag_log::constants::{get_filter_keywords, BOULDERING_HINT};
use crag_log::domain::{ClimbEntry, Discipline};
use crag_log::error::Result;
use crag_log::grading;
use crag_log::grading::audit::{AuditDecision, GradeAuditor};
use crag_log::logging;
use crag_log::stats::{self, GradeRange, TypeFilter};

#[derive(Parser)]
#[command(name = "crag_log")]
#[command(about = "Personal climbing logbook: grade normalization and log analytics")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a single grade label onto the unified difficulty scale
    Normalize {
        /// Grade label in any supported notation (e.g. 5.10a, V8, 7B+, 22)
        grade: String,
        /// Discipline context (e.g. "Indoor Bouldering")
        #[arg(long, default_value = "")]
        discipline: String,
    },
    /// Print the progress chart series for a logbook file, ordered by date
    Chart {
        /// Path to a JSON logbook file
        #[arg(long)]
        input: PathBuf,
    },
    /// Filter a logbook by type and grade range
    Filter {
        /// Path to a JSON logbook file
        #[arg(long)]
        input: PathBuf,
        /// Type filter: All, Favorites, Indoor, Outdoor, or a discipline name
        #[arg(long, default_value = "All")]
        view: String,
        /// Lowest grade to include (any notation)
        #[arg(long)]
        min: Option<String>,
        /// Highest grade to include (any notation)
        #[arg(long)]
        max: Option<String>,
    },
    /// Audit a logbook for unrated or suspicious grades
    Audit {
        /// Path to a JSON logbook file
        #[arg(long)]
        input: PathBuf,
    },
}

fn load_logbook(path: &Path) -> Result<Vec<ClimbEntry>> {
    let content = fs::read_to_string(path)?;
    let climbs: Vec<ClimbEntry> = serde_json::from_str(&content)?;
    Ok(climbs)
}

fn run_normalize(grade: &str, discipline: &str) {
    match grading::normalize(grade, discipline) {
        Some(normalized) => {
            info!(label = %normalized.label, system = normalized.system.name(), value = normalized.value, "Normalized grade");
            println!(
                "{} [{}] -> {}",
                normalized.label,
                normalized.system.name(),
                normalized.value
            );
        }
        None => {
            warn!(grade = %grade, "Unparseable grade label");
            println!("'{}' does not match any known grading notation", grade.trim());
        }
    }
}

fn run_chart(input: &Path) -> Result<()> {
    let climbs = load_logbook(input)?;
    let series = stats::chart_series(&climbs);
    info!(points = series.len(), "Built chart series");

    println!("{}", serde_json::to_string_pretty(&series)?);
    Ok(())
}

fn run_filter(
    input: &Path,
    view: &str,
    min: Option<String>,
    max: Option<String>,
    config: &Config,
) -> Result<()> {
    let climbs = load_logbook(input)?;
    let filter: TypeFilter = view.parse().map_err(|e| {
        warn!(
            "Unknown view '{}'. Keywords: {}, or a discipline name",
            view,
            get_filter_keywords().join(", ")
        );
        e
    })?;

    let range = GradeRange { min, max };

    // The config can force bouldering context for range bounds regardless
    // of the active view
    let matched = if config.filter.bouldering_context && !range.is_empty() {
        climbs
            .iter()
            .filter(|c| filter.matches(c) && range.contains(c, BOULDERING_HINT))
            .collect::<Vec<_>>()
    } else {
        stats::filter_climbs(&climbs, &filter, &range)
    };

    println!("\n📋 {} of {} climbs match:", matched.len(), climbs.len());
    for climb in matched {
        let value = grading::grade_value(&climb.grade, climb.discipline.as_str());
        println!(
            "   {} | {} ({}) [{}] -> {}",
            climb.date, climb.name, climb.grade, climb.discipline, value
        );
    }
    Ok(())
}

fn run_audit(input: &Path, config: &Config) -> Result<()> {
    let climbs = load_logbook(input)?;
    let auditor = GradeAuditor::new(config.audit.suspicious_ceiling);
    let report = auditor.assess_log(&climbs);

    info!(
        accepted = report.accepted,
        warned = report.warned,
        unrated = report.unrated,
        "Audit complete"
    );

    println!("\n📊 Audit results for {}:", input.display());
    println!("   Accepted: {}", report.accepted);
    println!("   With warnings: {}", report.warned);
    println!("   Unrated: {}", report.unrated);

    let flagged: Vec<_> = report
        .grades
        .iter()
        .filter(|g| g.decision != AuditDecision::Accept)
        .collect();

    if !flagged.is_empty() {
        println!("\n⚠️  Flagged entries:");
        for grade in flagged {
            for issue in &grade.issues {
                println!("   - {}", issue.description);
            }
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load_or_default();

    match cli.command {
        Commands::Normalize { grade, discipline } => {
            // Accept both free-form hints and exact discipline names
            if !discipline.is_empty() && discipline.parse::<Discipline>().is_err() {
                info!(hint = %discipline, "Using free-form discipline hint");
            }
            run_normalize(&grade, &discipline);
        }
        Commands::Chart { input } => run_chart(&input)?,
        Commands::Filter {
            input,
            view,
            min,
            max,
        } => run_filter(&input, &view, min, max, &config)?,
        Commands::Audit { input } => run_audit(&input, &config)?,
    }

    Ok(())
}
