//! Load → clean → write, as run by the `clean` command.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use sales_ingest::load_table;
use sales_model::{PipelineError, Table};
use sales_output::write_table;
use sales_transform::{CleanOutcome, CleanReport, clean_table};

/// Where a cleaning run reads from and writes to.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    /// `None` skips writing (dry run).
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct PipelineRun {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub loaded_rows: usize,
    pub table: Table,
    pub report: CleanReport,
    pub elapsed: Duration,
}

/// Runs every stage and writes the result unless the run is dry.
///
/// # Errors
///
/// Fails on the first load, schema or write error, with a [`PipelineError`]
/// at the root of the chain. Nothing is written when an earlier stage fails.
pub fn run_pipeline(config: &RunConfig) -> Result<PipelineRun> {
    let started = Instant::now();
    let span = info_span!("clean", input = %config.input.display());
    let _guard = span.enter();

    let (loaded_rows, outcome) =
        execute(config).with_context(|| format!("clean {}", config.input.display()))?;

    Ok(PipelineRun {
        input: config.input.clone(),
        output: config.output.clone(),
        loaded_rows,
        table: outcome.table,
        report: outcome.report,
        elapsed: started.elapsed(),
    })
}

fn execute(config: &RunConfig) -> Result<(usize, CleanOutcome), PipelineError> {
    let loaded = load_table(&config.input)?;
    let outcome = clean_table(&loaded)?;

    if let Some(output) = &config.output {
        write_table(&outcome.table, output)?;
        info!(path = %output.display(), rows = outcome.table.height(), "wrote cleaned data");
    } else {
        info!("dry run, output not written");
    }
    Ok((loaded.height(), outcome))
}

/// Writes the per-stage report as pretty JSON.
///
/// # Errors
///
/// Fails if the report cannot be serialized or the file cannot be written.
pub fn write_report(report: &CleanReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize report")?;
    fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
    Ok(())
}
