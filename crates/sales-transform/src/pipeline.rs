//! Runs the three transform stages in order and records what each did.

use serde::{Deserialize, Serialize};
use tracing::info_span;

use sales_model::{SchemaError, Table};

use crate::{active_numeric_columns, coerce_numeric_columns, filter_invalid_rows, normalize_schema};

/// A transform stage of the cleaning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Normalize,
    Coerce,
    Filter,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Normalize, Stage::Coerce, Stage::Filter];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normalize => "normalize",
            Self::Coerce => "coerce",
            Self::Filter => "filter",
        }
    }
}

/// Row counts for one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageReport {
    pub stage: Stage,
    pub rows_in: usize,
    pub rows_out: usize,
    /// Active numeric columns as seen by the stage's output.
    pub numeric_columns: Vec<String>,
}

impl StageReport {
    fn new(stage: Stage, input: &Table, output: &Table) -> Self {
        Self {
            stage,
            rows_in: input.height(),
            rows_out: output.height(),
            numeric_columns: active_numeric_columns(output),
        }
    }

    pub fn dropped(&self) -> usize {
        self.rows_in.saturating_sub(self.rows_out)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanReport {
    pub stages: Vec<StageReport>,
}

impl CleanReport {
    pub fn stage(&self, stage: Stage) -> Option<&StageReport> {
        self.stages.iter().find(|report| report.stage == stage)
    }

    pub fn rows_in(&self) -> usize {
        self.stages.first().map_or(0, |report| report.rows_in)
    }

    pub fn rows_out(&self) -> usize {
        self.stages.last().map_or(0, |report| report.rows_out)
    }

    pub fn total_dropped(&self) -> usize {
        self.stages.iter().map(StageReport::dropped).sum()
    }
}

#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub table: Table,
    pub report: CleanReport,
}

/// Normalizes, coerces and filters a loaded table.
///
/// # Errors
///
/// Returns [`SchemaError`] when normalization produces colliding names.
pub fn clean_table(table: &Table) -> Result<CleanOutcome, SchemaError> {
    let mut report = CleanReport::default();

    let normalized = {
        let _span = info_span!("stage", name = Stage::Normalize.as_str()).entered();
        normalize_schema(table)?
    };
    report
        .stages
        .push(StageReport::new(Stage::Normalize, table, &normalized));

    let coerced = {
        let _span = info_span!("stage", name = Stage::Coerce.as_str()).entered();
        coerce_numeric_columns(&normalized)
    };
    report
        .stages
        .push(StageReport::new(Stage::Coerce, &normalized, &coerced));

    let filtered = {
        let _span = info_span!("stage", name = Stage::Filter.as_str()).entered();
        filter_invalid_rows(&coerced)
    };
    report
        .stages
        .push(StageReport::new(Stage::Filter, &coerced, &filtered));

    Ok(CleanOutcome {
        table: filtered,
        report,
    })
}
