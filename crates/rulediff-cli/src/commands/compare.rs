//! Compare command
//!
//! Usage: rulediff compare <LEFT> <RIGHT> [--output <FILE>] [--format csv|json|summary]

use clap::{Args, ValueEnum};
use rulediff_core::compare::{compare_detailed, Comparison, DuplicatePolicy};
use rulediff_core::decode::{decode_rule_file, DecodedRules};
use rulediff_core::errors::{ExError, RuleDiffError};
use rulediff_core::render::{
    render_csv, render_human_summary, render_json, ComparisonSummary, DocumentSide,
};
use rulediff_core::{log_op_end, log_op_error, log_op_start, RuleDiffConfig};
use rulediff_core_types::RunId;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Baseline rule document ("old" side)
    pub left: PathBuf,

    /// Rule document to compare against the baseline ("new" side)
    pub right: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Csv)]
    pub format: ReportFormat,

    /// Omit the CSV header line
    #[arg(long)]
    pub no_header: bool,

    /// How duplicate rule keys within one document are resolved
    #[arg(long, value_enum)]
    pub duplicates: Option<DuplicateArg>,

    /// Top-level key holding the rule collection
    #[arg(long)]
    pub collection_key: Option<String>,

    /// TOML configuration file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Csv,
    Json,
    Summary,
}

impl ReportFormat {
    fn label(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "CSV",
            ReportFormat::Json => "JSON",
            ReportFormat::Summary => "Summary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DuplicateArg {
    LastWins,
    FirstWins,
}

impl From<DuplicateArg> for DuplicatePolicy {
    fn from(arg: DuplicateArg) -> Self {
        match arg {
            DuplicateArg::LastWins => DuplicatePolicy::LastWins,
            DuplicateArg::FirstWins => DuplicatePolicy::FirstWins,
        }
    }
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let run_id = RunId::new();
    log_op_start!("compare_documents", run_id = %run_id);
    let start = std::time::Instant::now();

    let result = execute_impl(&args).map_err(|e| {
        let e = e.with_run_id(run_id);
        log_op_error!(
            "compare_documents",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            run_id = %run_id
        );
        e
    })?;

    log_op_end!(
        "compare_documents",
        duration_ms = start.elapsed().as_millis() as u64,
        run_id = %run_id,
        diff_len = result
    );

    Ok(())
}

/// Run the comparison and write the report; returns the number of diff records.
fn execute_impl(args: &CompareArgs) -> Result<usize, ExError> {
    let config = resolve_config(args)?;

    let left = decode_rule_file(&args.left, &config.decode)?;
    let right = decode_rule_file(&args.right, &config.decode)?;

    let comparison = compare_detailed(&left.rules, &right.rules, &config.compare);

    let report = match args.format {
        ReportFormat::Csv => render_csv(&comparison.diffs, &config.report),
        ReportFormat::Json => render_json(&comparison.diffs)?,
        ReportFormat::Summary => render_human_summary(&summary(args, &left, &right, &comparison)),
    };

    write_report(args, &report)?;
    Ok(comparison.diffs.len())
}

fn resolve_config(args: &CompareArgs) -> Result<RuleDiffConfig, ExError> {
    let mut config = match &args.config {
        Some(path) => RuleDiffConfig::load(path)?,
        None => RuleDiffConfig::default(),
    };

    if args.no_header {
        config.report.include_header = false;
    }
    if let Some(policy) = args.duplicates {
        config.compare.duplicates = policy.into();
    }
    if let Some(key) = &args.collection_key {
        config.decode.collection_key = key.clone();
    }

    Ok(config)
}

fn summary<'a>(
    args: &CompareArgs,
    left: &DecodedRules,
    right: &DecodedRules,
    comparison: &'a Comparison,
) -> ComparisonSummary<'a> {
    ComparisonSummary {
        left: side(&args.left, left),
        right: side(&args.right, right),
        diffs: &comparison.diffs,
        left_duplicates: &comparison.left_duplicates,
        right_duplicates: &comparison.right_duplicates,
    }
}

fn side(path: &Path, decoded: &DecodedRules) -> DocumentSide {
    DocumentSide {
        source: path.display().to_string(),
        digest: decoded.digest.clone(),
        rule_count: decoded.rules.len(),
        skipped_count: decoded.warnings.len(),
    }
}

fn write_report(args: &CompareArgs, report: &str) -> Result<(), ExError> {
    let mut stdout = std::io::stdout().lock();
    match &args.output {
        Some(output_path) => {
            rulediff_core::render::write_text_file(output_path, report)?;
            let line = format!(
                "{} report generated: {}\n",
                args.format.label(),
                output_path.display()
            );
            emit(&mut stdout, &line)
        }
        None => emit(&mut stdout, report),
    }
}

/// Write console output, surfacing a closed or broken stream as `Io`
fn emit<W: Write>(out: &mut W, text: &str) -> Result<(), ExError> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| {
            RuleDiffError::ReportWrite {
                path: None,
                reason: e.to_string(),
            }
            .into()
        })
}
