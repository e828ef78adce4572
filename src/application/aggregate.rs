use crate::application::probe::AvailabilityProbe;
use crate::config::AnalyzerConfig;
use crate::domain::entities::analysis::Analysis;
use crate::domain::entities::outcome::Outcome;
use crate::domain::error::DomainError;
use crate::domain::ports::result_source::ResultSource;
use crate::domain::values::draw_calendar::DrawCalendar;
use chrono::{Days, NaiveDate};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::{debug, info};

/// Counts consecutive fetch failures. A run of `limit` misses means we walked past the
/// edge of the source's history; a shorter run is just a gap.
#[derive(Debug, Clone, Copy)]
pub struct MissStreak {
    limit: usize,
    current: usize,
}

impl MissStreak {
    pub fn new(limit: usize) -> Self {
        Self { limit, current: 0 }
    }

    pub fn hit(&mut self) {
        self.current = 0;
    }

    /// Record a miss; returns true once the streak reaches the limit.
    pub fn miss(&mut self) -> bool {
        self.current += 1;
        self.current >= self.limit
    }

    pub fn current(&self) -> usize {
        self.current
    }
}

/// Fetches results for a set of drawing dates and folds them into an [`Analysis`].
pub struct AggregateUseCase {
    source: Arc<dyn ResultSource>,
    probe: AvailabilityProbe,
    calendar: DrawCalendar,
    concurrency: usize,
    scan_pause: Duration,
    max_lookback_days: u32,
    range_miss_limit: usize,
    backward_miss_limit: usize,
}

impl AggregateUseCase {
    pub fn new(
        source: Arc<dyn ResultSource>,
        calendar: DrawCalendar,
        config: &AnalyzerConfig,
    ) -> Self {
        Self {
            probe: AvailabilityProbe::new(source.clone(), calendar, config.probe_pause),
            source,
            calendar,
            concurrency: config.concurrency.max(1),
            scan_pause: config.scan_pause,
            max_lookback_days: config.max_lookback_days,
            range_miss_limit: config.range_miss_limit,
            backward_miss_limit: config.backward_miss_limit,
        }
    }

    pub fn probe(&self) -> &AvailabilityProbe {
        &self.probe
    }

    /// Concurrently fetch every drawing date in `[start, end]`.
    pub async fn aggregate_range(
        &self,
        ticket_number: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Analysis, DomainError> {
        let dates = self.calendar.enumerate_range(start, end)?;
        info!(
            ticket = ticket_number,
            %start,
            %end,
            draws = dates.len(),
            workers = self.concurrency,
            "aggregating range"
        );

        let outcomes = self.fetch_concurrently(ticket_number, dates).await?;
        Ok(Analysis::from_outcomes(ticket_number, outcomes))
    }

    /// Anchor on the most recent date with data, then aggregate from there to `today`.
    /// Returns an empty analysis without further requests when the probe finds nothing.
    pub async fn aggregate_all(
        &self,
        ticket_number: &str,
        today: NaiveDate,
    ) -> Result<Analysis, DomainError> {
        let anchor = self
            .probe
            .latest_available(ticket_number, today, self.max_lookback_days)
            .await;

        match anchor {
            Some(start) => self.aggregate_range(ticket_number, start, today).await,
            None => Ok(Analysis::empty(ticket_number)),
        }
    }

    /// Full available history, newest draw first. Starting at the most recent date
    /// with data, draws are fetched backward in concurrent batches; the walk ends at
    /// the first run of `backward_miss_limit` misses, which marks where the source's
    /// history begins. Misses shorter than that are gaps and are skipped.
    pub async fn aggregate_history(
        &self,
        ticket_number: &str,
        today: NaiveDate,
    ) -> Result<Analysis, DomainError> {
        let Some(anchor) = self
            .probe
            .latest_available(ticket_number, today, self.max_lookback_days)
            .await
        else {
            return Ok(Analysis::empty(ticket_number));
        };

        let batch_size = self.concurrency.max(self.backward_miss_limit).max(1);
        info!(
            ticket = ticket_number,
            %anchor,
            batch_size,
            workers = self.concurrency,
            "aggregating full history backward"
        );

        let mut dates =
            std::iter::successors(Some(anchor), |d| d.checked_sub_days(Days::new(7)));
        let mut streak = MissStreak::new(self.backward_miss_limit);
        let mut outcomes = Vec::new();

        'batches: loop {
            let batch: Vec<NaiveDate> = dates.by_ref().take(batch_size).collect();
            if batch.is_empty() {
                break;
            }

            let mut fetched: HashMap<NaiveDate, Outcome> = self
                .fetch_concurrently(ticket_number, batch.clone())
                .await?
                .into_iter()
                .map(|o| (o.date(), o))
                .collect();

            for date in batch {
                match fetched.remove(&date) {
                    Some(outcome) => {
                        streak.hit();
                        outcomes.push(outcome);
                    }
                    None if streak.miss() => {
                        info!(%date, misses = streak.current(), "reached start of history");
                        break 'batches;
                    }
                    None => {}
                }
            }
        }

        Ok(Analysis::from_outcomes(ticket_number, outcomes))
    }

    /// Walk `[start, end]` forward one date at a time, stopping after a run of misses.
    pub async fn scan_range(
        &self,
        ticket_number: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Analysis, DomainError> {
        let dates = self.calendar.enumerate_range(start, end)?;
        info!(ticket = ticket_number, %start, %end, draws = dates.len(), "scanning range");

        let outcomes = self
            .scan(ticket_number, dates.into_iter(), self.range_miss_limit)
            .await;
        Ok(Analysis::from_outcomes(ticket_number, outcomes))
    }

    /// Walk backward from the last draw before `today` until a run of misses.
    pub async fn scan_back(&self, ticket_number: &str, today: NaiveDate) -> Analysis {
        let first = self.calendar.latest_before(today);
        info!(ticket = ticket_number, %first, "scanning full history backward");

        let dates = std::iter::successors(Some(first), |d| d.checked_sub_days(Days::new(7)));
        let outcomes = self
            .scan(ticket_number, dates, self.backward_miss_limit)
            .await;
        Analysis::from_outcomes(ticket_number, outcomes)
    }

    async fn scan(
        &self,
        ticket_number: &str,
        dates: impl Iterator<Item = NaiveDate>,
        miss_limit: usize,
    ) -> Vec<Outcome> {
        let mut streak = MissStreak::new(miss_limit);
        let mut outcomes = Vec::new();

        for (i, date) in dates.enumerate() {
            if i > 0 && !self.scan_pause.is_zero() {
                tokio::time::sleep(self.scan_pause).await;
            }

            match self.source.fetch(ticket_number, date).await {
                Ok(outcome) => {
                    streak.hit();
                    log_outcome(&outcome);
                    outcomes.push(outcome);
                }
                Err(failure) => {
                    let exhausted = streak.miss();
                    info!(%date, %failure, streak = streak.current(), limit = miss_limit, "no data");
                    if exhausted {
                        info!(misses = streak.current(), "stopping after consecutive misses");
                        break;
                    }
                }
            }
        }

        outcomes
    }

    /// Fan out one fetch per date over a fixed pool of workers pulling from a shared
    /// queue. Results are merged after the pool drains and sorted by date, so
    /// completion order never shows in the output.
    async fn fetch_concurrently(
        &self,
        ticket_number: &str,
        dates: Vec<NaiveDate>,
    ) -> Result<Vec<Outcome>, DomainError> {
        let total = dates.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        let queue = Arc::new(Mutex::new(dates.into_iter()));
        let ticket: Arc<str> = Arc::from(ticket_number);
        let mut workers = JoinSet::new();

        for _ in 0..self.concurrency.min(total) {
            let queue = Arc::clone(&queue);
            let source = Arc::clone(&self.source);
            let ticket = Arc::clone(&ticket);
            workers.spawn(async move {
                let mut fetched = Vec::new();
                loop {
                    let next = queue.lock().await.next();
                    let Some(date) = next else { break };
                    fetched.push((date, source.fetch(&ticket, date).await));
                }
                fetched
            });
        }

        let mut outcomes = Vec::with_capacity(total);
        let mut failures = 0usize;
        while let Some(joined) = workers.join_next().await {
            let fetched = joined.map_err(|e| DomainError::Worker(e.to_string()))?;
            for (date, result) in fetched {
                match result {
                    Ok(outcome) => {
                        log_outcome(&outcome);
                        outcomes.push(outcome);
                    }
                    Err(failure) => {
                        failures += 1;
                        debug!(%date, %failure, "no data");
                    }
                }
            }
        }

        outcomes.sort_by_key(|o| o.date());
        info!(total, found = outcomes.len(), failures, "fetch complete");
        Ok(outcomes)
    }
}

fn log_outcome(outcome: &Outcome) {
    if outcome.won() {
        info!(
            date = %outcome.date(),
            amount = %outcome.prize_amount(),
            text = outcome.display_text(),
            "win"
        );
    } else {
        debug!(date = %outcome.date(), "no prize");
    }
}
