//! Shared test helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use lottery_analyzer::config::AnalyzerConfig;
use lottery_analyzer::domain::entities::outcome::Outcome;
use lottery_analyzer::domain::error::DomainError;
use lottery_analyzer::domain::ports::notifier::{Notification, Notifier};
use lottery_analyzer::domain::ports::result_source::{FetchFailure, ResultSource};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub const TICKET: &str = "01234";

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn config() -> AnalyzerConfig {
    AnalyzerConfig::default().without_pauses()
}

pub fn win(date: NaiveDate, amount: Decimal) -> Outcome {
    Outcome::new(
        date,
        TICKET.into(),
        format!("Premio de {amount}€"),
        None,
        true,
        amount,
        dec!(6),
    )
}

pub fn loss(date: NaiveDate) -> Outcome {
    Outcome::new(
        date,
        TICKET.into(),
        "No tiene premio".into(),
        None,
        false,
        Decimal::ZERO,
        dec!(6),
    )
}

/// In-memory result source. Dates without a registered outcome fail as unavailable.
#[derive(Default)]
pub struct FakeSource {
    outcomes: HashMap<NaiveDate, Outcome>,
    delays: HashMap<NaiveDate, Duration>,
    calls: Mutex<Vec<NaiveDate>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcomes.insert(outcome.date(), outcome);
        self
    }

    pub fn with_outcomes(mut self, outcomes: impl IntoIterator<Item = Outcome>) -> Self {
        for outcome in outcomes {
            self.outcomes.insert(outcome.date(), outcome);
        }
        self
    }

    pub fn with_delay(mut self, date: NaiveDate, delay: Duration) -> Self {
        self.delays.insert(date, delay);
        self
    }

    pub fn calls(&self) -> Vec<NaiveDate> {
        self.calls.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResultSource for FakeSource {
    async fn fetch(&self, _ticket_number: &str, date: NaiveDate) -> Result<Outcome, FetchFailure> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = self
            .delays
            .get(&date)
            .copied()
            .unwrap_or(Duration::from_millis(2));
        tokio::time::sleep(delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(date);

        self.outcomes
            .get(&date)
            .cloned()
            .ok_or_else(|| FetchFailure::Unavailable("no data".into()))
    }
}

/// Notifier that keeps every message it is asked to send.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<Notification>>,
    pub fail: bool,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn name(&self) -> &str {
        "recording"
    }

    async fn send(&self, notification: &Notification) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::Notify("webhook down".into()));
        }
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}
