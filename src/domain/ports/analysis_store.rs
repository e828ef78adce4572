use crate::domain::entities::analysis::Analysis;
use crate::domain::error::DomainError;
use chrono::NaiveDateTime;
use std::path::PathBuf;

/// Persists one analysis per run.
pub trait AnalysisStore: Send + Sync {
    /// Save `analysis` for a run started at `run_at`; returns where it was written.
    fn save(&self, analysis: &Analysis, run_at: NaiveDateTime) -> Result<PathBuf, DomainError>;
}
