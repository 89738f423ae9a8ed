use chrono::{DateTime, Local};
use clap::{Args, Parser, Subcommand, ValueEnum};
use saw_rank::config::AppConfig;
use saw_rank::decision::ingest::{self, templates};
use saw_rank::decision::{
    DecisionService, ImportReport, InMemoryStore, MatrixRow, RankedEntry, RankingOutcome,
    ScoreStore,
};
use saw_rank::error::AppError;
use saw_rank::telemetry;
use serde::Serialize;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "saw-rank",
    about = "Rank framework candidates with Simple Additive Weighting",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the CSV inputs and print the ranking
    Rank(RankArgs),
    /// Show catalog totals and whether a ranking run would pass validation
    Summary(InputArgs),
    /// Write the combined framework/score table as CSV
    Export(ExportArgs),
    /// Print a CSV template for one of the accepted input files
    Template(TemplateArgs),
}

#[derive(Args, Debug, Default)]
struct InputArgs {
    /// Criteria definitions (name,weight,attribute); overrides SAW_CRITERIA_CSV
    #[arg(long)]
    criteria_csv: Option<PathBuf>,
    /// Framework rows with one column per criterion; overrides SAW_DATA_CSV
    #[arg(long)]
    data_csv: Option<PathBuf>,
    /// Additional (framework,criteria,value) rows; overrides SAW_SCORES_CSV
    #[arg(long)]
    scores_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RankArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Emit the full result as JSON instead of text tables
    #[arg(long)]
    json: bool,
    /// Include the decision, normalized, and weighted matrices
    #[arg(long)]
    matrices: bool,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Destination file; stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct TemplateArgs {
    /// Which input file shape to print
    #[arg(value_enum)]
    kind: TemplateKind,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TemplateKind {
    Criteria,
    Data,
    Scores,
}

#[derive(Debug, Serialize)]
struct RankDocument<'a> {
    generated_at: DateTime<Local>,
    criteria: &'a [String],
    best: Option<&'a RankedEntry>,
    outcome: &'a RankingOutcome,
    imports: &'a [ImportReport],
}

fn main() {
    if let Err(err) = run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Rank(args) => run_rank(args, &config),
        Command::Summary(args) => run_summary(args, &config),
        Command::Export(args) => run_export(args, &config),
        Command::Template(args) => {
            run_template(args);
            Ok(())
        }
    }
}

fn resolve_paths(input: &InputArgs, config: &AppConfig) -> (PathBuf, PathBuf, Option<PathBuf>) {
    let criteria = input
        .criteria_csv
        .clone()
        .unwrap_or_else(|| config.data.criteria_csv.clone());
    let data = input
        .data_csv
        .clone()
        .unwrap_or_else(|| config.data.data_csv.clone());
    let scores = input
        .scores_csv
        .clone()
        .or_else(|| config.data.scores_csv.clone());
    (criteria, data, scores)
}

fn load_store(
    input: &InputArgs,
    config: &AppConfig,
) -> Result<(InMemoryStore, Vec<ImportReport>), AppError> {
    let (criteria_path, data_path, scores_path) = resolve_paths(input, config);

    let mut store = InMemoryStore::new();
    let mut reports = Vec::new();
    reports.push(ingest::load_criteria_from_path(&mut store, criteria_path)?);
    reports.push(ingest::load_framework_data_from_path(&mut store, data_path)?);
    if let Some(path) = scores_path {
        reports.push(ingest::load_scores_from_path(&mut store, path)?);
    }

    Ok((store, reports))
}

fn run_rank(args: RankArgs, config: &AppConfig) -> Result<(), AppError> {
    let (store, reports) = load_store(&args.input, config)?;
    let service = DecisionService::new(Arc::new(store));
    let criteria_names: Vec<String> = service
        .store()
        .criteria()
        .iter()
        .map(|criterion| criterion.name.clone())
        .collect();

    let outcome = service.calculate()?;

    if args.json {
        let document = RankDocument {
            generated_at: Local::now(),
            criteria: &criteria_names,
            best: outcome.best(),
            outcome: &outcome,
            imports: &reports,
        };
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    render_import_reports(&reports);
    render_ranking(&outcome);
    if args.matrices {
        render_matrix("Decision matrix", &outcome.decision_matrix, &criteria_names);
        render_matrix(
            "Normalized matrix",
            &outcome.normalized_matrix,
            &criteria_names,
        );
        render_matrix("Weighted matrix", &outcome.weighted_matrix, &criteria_names);
    }
    println!("\nGenerated {}", Local::now().format("%Y-%m-%d %H:%M:%S"));

    Ok(())
}

fn run_summary(args: InputArgs, config: &AppConfig) -> Result<(), AppError> {
    let (store, reports) = load_store(&args, config)?;
    let service = DecisionService::new(Arc::new(store));
    let summary = service.summary();

    render_import_reports(&reports);
    println!("Catalog summary");
    println!("- frameworks: {}", summary.total_frameworks);
    println!("- criteria: {}", summary.total_criteria);
    println!("- total weight: {:.3}", summary.total_weight);
    println!(
        "- ready to rank: {}",
        if summary.ready_to_rank { "yes" } else { "no" }
    );

    Ok(())
}

fn run_export(args: ExportArgs, config: &AppConfig) -> Result<(), AppError> {
    let (store, _reports) = load_store(&args.input, config)?;
    let service = DecisionService::new(Arc::new(store));

    match args.output {
        Some(path) => service.export_scores(File::create(path)?)?,
        None => service.export_scores(io::stdout().lock())?,
    }

    Ok(())
}

fn run_template(args: TemplateArgs) {
    let (template, guide) = match args.kind {
        TemplateKind::Criteria => (templates::CRITERIA_TEMPLATE, templates::CRITERIA_GUIDE),
        TemplateKind::Data => (templates::DATA_TEMPLATE, templates::DATA_GUIDE),
        TemplateKind::Scores => (templates::SCORES_TEMPLATE, templates::SCORES_GUIDE),
    };
    println!("{template}");
    println!("{guide}");
}

fn render_import_reports(reports: &[ImportReport]) {
    let frameworks: usize = reports.iter().map(|r| r.frameworks_created).sum();
    let criteria: usize = reports.iter().map(|r| r.criteria_upserted).sum();
    let scores: usize = reports.iter().map(|r| r.scores_written).sum();
    let issues: usize = reports.iter().map(|r| r.issues.len()).sum();

    println!("Import summary");
    println!("- criteria loaded: {criteria}");
    println!("- frameworks created: {frameworks}");
    println!("- scores written: {scores}");
    if issues == 0 {
        println!("- issues: none");
    } else {
        println!("- issues: {issues}");
        for report in reports {
            for issue in &report.issues {
                println!("  - line {}: {}", issue.line, issue.message);
            }
        }
    }
    println!();
}

fn render_ranking(outcome: &RankingOutcome) {
    println!("Ranking");
    for (position, entry) in outcome.ranking.iter().enumerate() {
        println!(
            "{}. {} (total {:.4})",
            position + 1,
            entry.framework,
            entry.total_score
        );
    }

    if let Some(best) = outcome.best() {
        println!(
            "\nBest framework: {} (total {:.4})",
            best.framework, best.total_score
        );
    }
}

fn render_matrix(title: &str, rows: &[MatrixRow], criteria_names: &[String]) {
    println!("\n{title}");
    println!("framework | {}", criteria_names.join(" | "));
    for row in rows {
        let values: Vec<String> = row.values.iter().map(|value| format!("{value}")).collect();
        println!("{} | {}", row.framework, values.join(" | "));
    }
}
