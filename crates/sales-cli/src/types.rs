use sales_ingest::ColumnKind;

/// One row of the `inspect` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSummary {
    pub source: String,
    pub normalized: String,
    pub kind: ColumnKind,
    pub role: ColumnRole,
}

/// How the cleaning stages treat a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Text,
    Numeric,
    Passthrough,
}

impl ColumnRole {
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "trimmed text",
            Self::Numeric => "numeric, non-negative",
            Self::Passthrough => "unchanged",
        }
    }
}
