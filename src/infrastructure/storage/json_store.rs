use crate::domain::entities::analysis::Analysis;
use crate::domain::error::DomainError;
use crate::domain::ports::analysis_store::AnalysisStore;
use chrono::NaiveDateTime;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Writes each analysis as a pretty-printed JSON file in a directory.
pub struct JsonAnalysisStore {
    dir: PathBuf,
}

impl JsonAnalysisStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn file_name(ticket_number: &str, run_at: NaiveDateTime) -> String {
        format!(
            "lottery_analysis_{}_{}.json",
            ticket_number,
            run_at.format("%Y%m%d_%H%M%S")
        )
    }
}

impl AnalysisStore for JsonAnalysisStore {
    fn save(&self, analysis: &Analysis, run_at: NaiveDateTime) -> Result<PathBuf, DomainError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| DomainError::Storage(format!("create {}: {e}", self.dir.display())))?;

        let path = self
            .dir
            .join(Self::file_name(analysis.ticket_number(), run_at));
        let json = serde_json::to_string_pretty(analysis)
            .map_err(|e| DomainError::Storage(format!("serialize analysis: {e}")))?;
        fs::write(&path, json)
            .map_err(|e| DomainError::Storage(format!("write {}: {e}", path.display())))?;

        info!(path = %path.display(), "analysis saved");
        Ok(path)
    }
}
