use crate::domain::entities::outcome::Outcome;
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

/// Why a date produced no outcome. Never fatal: the date is simply skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("request failed: {0}")]
    Network(String),

    #[error("page reports no data ({0})")]
    Unavailable(String),

    #[error("prize text not found on page")]
    MissingPrizeText,

    #[error("prize text too short ({0} chars)")]
    TextTooShort(usize),
}

/// Looks up the result of one ticket number on one drawing date.
#[async_trait]
pub trait ResultSource: Send + Sync {
    async fn fetch(&self, ticket_number: &str, date: NaiveDate) -> Result<Outcome, FetchFailure>;

    /// Human-facing URL of the result page, when the source has one.
    fn page_url(&self, _ticket_number: &str, _date: NaiveDate) -> Option<String> {
        None
    }
}
