use anyhow::{Context, Result};
use tracing::info;

use sales_ingest::load_table_with_kinds;
use sales_model::{is_numeric_candidate, is_text_column};
use sales_transform::normalize_schema;

use sales_cli::pipeline::{PipelineRun, RunConfig, run_pipeline, write_report};

use crate::cli::{CleanArgs, InspectArgs};
use crate::types::{ColumnRole, ColumnSummary};

pub fn run_clean(args: &CleanArgs) -> Result<PipelineRun> {
    let config = RunConfig {
        input: args.input.clone(),
        output: (!args.dry_run).then(|| args.output.clone()),
    };
    let run = run_pipeline(&config)?;
    if let Some(path) = &args.report {
        write_report(&run.report, path)?;
        info!(path = %path.display(), "wrote run report");
    }
    Ok(run)
}

pub fn run_inspect(args: &InspectArgs) -> Result<Vec<ColumnSummary>> {
    let loaded = load_table_with_kinds(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    let normalized = normalize_schema(&loaded.table).context("normalize schema")?;
    let summaries = loaded
        .table
        .columns()
        .iter()
        .zip(normalized.columns())
        .zip(&loaded.kinds)
        .map(|((source, name), kind)| ColumnSummary {
            source: source.clone(),
            normalized: name.clone(),
            kind: *kind,
            role: column_role(name),
        })
        .collect();
    Ok(summaries)
}

fn column_role(normalized: &str) -> ColumnRole {
    if is_text_column(normalized) {
        ColumnRole::Text
    } else if is_numeric_candidate(normalized) {
        ColumnRole::Numeric
    } else {
        ColumnRole::Passthrough
    }
}
