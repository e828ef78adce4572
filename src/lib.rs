pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::aggregate::AggregateUseCase;
use crate::application::check_latest::{CheckLatestUseCase, CheckReport};
use crate::application::fetch_result::ResultFetcher;
use crate::config::AnalyzerConfig;
use crate::domain::entities::analysis::Analysis;
use crate::domain::error::DomainError;
use crate::domain::ports::analysis_store::AnalysisStore;
use crate::domain::ports::notifier::Notifier;
use crate::domain::ports::result_source::ResultSource;
use crate::domain::values::draw_calendar::DrawCalendar;
use crate::domain::values::ticket_number::TicketNumber;
use crate::infrastructure::http::page_client::ReqwestPageSource;
use crate::infrastructure::markup::html_parser::HtmlPageParser;
use chrono::{Days, NaiveDate, NaiveDateTime};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// How an analysis walks its dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Bounded worker pool over the full date set.
    #[default]
    Concurrent,
    /// One date at a time with pauses, stopping after a run of misses.
    Sequential,
}

/// Dates an analysis run covers. `Open` means walk the whole available history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunWindow {
    Open,
    Range { start: NaiveDate, end: NaiveDate },
}

pub struct LotteryAnalyzer {
    aggregate_uc: AggregateUseCase,
    check_uc: CheckLatestUseCase,
    config: AnalyzerConfig,
}

impl LotteryAnalyzer {
    /// Analyzer backed by the live results site.
    pub fn new(config: AnalyzerConfig) -> Self {
        let pages = Arc::new(ReqwestPageSource::new(
            &config.user_agent,
            config.request_timeout,
        ));
        let source: Arc<dyn ResultSource> = Arc::new(ResultFetcher::new(
            pages,
            Arc::new(HtmlPageParser::new()),
            config.base_url.clone(),
            config.ticket_cost,
        ));
        Self::with_source(source, config)
    }

    pub fn with_source(source: Arc<dyn ResultSource>, config: AnalyzerConfig) -> Self {
        let calendar = DrawCalendar::default();
        Self {
            aggregate_uc: AggregateUseCase::new(source.clone(), calendar, &config),
            check_uc: CheckLatestUseCase::new(source, calendar),
            config,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub async fn analyze_range(
        &self,
        ticket: &TicketNumber,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Analysis, DomainError> {
        self.aggregate_uc
            .aggregate_range(ticket.as_str(), start, end)
            .await
    }

    pub async fn analyze_all(
        &self,
        ticket: &TicketNumber,
        today: NaiveDate,
    ) -> Result<Analysis, DomainError> {
        self.aggregate_uc.aggregate_all(ticket.as_str(), today).await
    }

    /// Every drawing with data, from the start of the source's history up to `today`.
    pub async fn analyze_history(
        &self,
        ticket: &TicketNumber,
        today: NaiveDate,
    ) -> Result<Analysis, DomainError> {
        self.aggregate_uc
            .aggregate_history(ticket.as_str(), today)
            .await
    }

    pub async fn scan_range(
        &self,
        ticket: &TicketNumber,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Analysis, DomainError> {
        self.aggregate_uc
            .scan_range(ticket.as_str(), start, end)
            .await
    }

    pub async fn scan_back(&self, ticket: &TicketNumber, today: NaiveDate) -> Analysis {
        self.aggregate_uc.scan_back(ticket.as_str(), today).await
    }

    /// Most recent drawing date with data, looking back at most `max_lookback_days`.
    pub async fn latest_available(
        &self,
        ticket: &TicketNumber,
        today: NaiveDate,
        max_lookback_days: u32,
    ) -> Option<NaiveDate> {
        self.aggregate_uc
            .probe()
            .latest_available(ticket.as_str(), today, max_lookback_days)
            .await
    }

    /// Fill in missing bounds: no bounds at all means the open-ended mode; a missing
    /// start comes from the availability probe, then the fallback window; a missing
    /// end is `today`.
    pub async fn resolve_window(
        &self,
        ticket: &TicketNumber,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> RunWindow {
        if start.is_none() && end.is_none() {
            return RunWindow::Open;
        }

        let start = match start {
            Some(start) => start,
            None => match self
                .latest_available(ticket, today, self.config.max_lookback_days)
                .await
            {
                Some(anchor) => anchor,
                None => {
                    let fallback = today
                        .checked_sub_days(Days::new(self.config.fallback_lookback_days as u64))
                        .unwrap_or(today);
                    info!(%fallback, "no data found, using default start date");
                    fallback
                }
            },
        };

        RunWindow::Range {
            start,
            end: end.unwrap_or(today),
        }
    }

    pub async fn analyze(
        &self,
        ticket: &TicketNumber,
        window: RunWindow,
        mode: RunMode,
        today: NaiveDate,
    ) -> Result<Analysis, DomainError> {
        match (window, mode) {
            (RunWindow::Open, RunMode::Concurrent) => self.analyze_history(ticket, today).await,
            (RunWindow::Open, RunMode::Sequential) => Ok(self.scan_back(ticket, today).await),
            (RunWindow::Range { start, end }, RunMode::Concurrent) => {
                self.analyze_range(ticket, start, end).await
            }
            (RunWindow::Range { start, end }, RunMode::Sequential) => {
                self.scan_range(ticket, start, end).await
            }
        }
    }

    pub fn draw_date_for(&self, today: NaiveDate) -> NaiveDate {
        self.check_uc.draw_date_for(today)
    }

    pub async fn check(
        &self,
        ticket: &TicketNumber,
        date: NaiveDate,
        notifier: &dyn Notifier,
    ) -> Result<CheckReport, DomainError> {
        self.check_uc.execute(ticket.as_str(), date, notifier).await
    }

    pub fn save(
        &self,
        store: &dyn AnalysisStore,
        analysis: &Analysis,
        run_at: NaiveDateTime,
    ) -> Result<PathBuf, DomainError> {
        store.save(analysis, run_at)
    }
}
