use crate::domain::entities::outcome::Outcome;
use crate::domain::error::DomainError;
use crate::domain::ports::notifier::{Notification, NotificationField, Notifier};
use crate::domain::ports::result_source::{FetchFailure, ResultSource};
use crate::domain::values::draw_calendar::DrawCalendar;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

pub const COLOR_WIN: u32 = 0x00FF00;
pub const COLOR_NO_PRIZE: u32 = 0x95A5A6;
pub const COLOR_FAILED: u32 = 0xFF0000;

/// How many page highlights the notification shows.
const NOTIFIED_HIGHLIGHTS: usize = 3;

/// Checks a single drawing for one ticket and posts the result to a notifier.
pub struct CheckLatestUseCase {
    source: Arc<dyn ResultSource>,
    calendar: DrawCalendar,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub ticket_number: String,
    pub date: NaiveDate,
    pub outcome: Option<Outcome>,
    pub failure: Option<String>,
    pub notified_via: String,
}

impl CheckLatestUseCase {
    pub fn new(source: Arc<dyn ResultSource>, calendar: DrawCalendar) -> Self {
        Self { source, calendar }
    }

    /// The drawing to check on `today`: today itself on a draw day, else the last one.
    pub fn draw_date_for(&self, today: NaiveDate) -> NaiveDate {
        self.calendar.latest_on_or_before(today)
    }

    pub async fn execute(
        &self,
        ticket_number: &str,
        date: NaiveDate,
        notifier: &dyn Notifier,
    ) -> Result<CheckReport, DomainError> {
        info!(ticket = ticket_number, %date, "checking drawing");

        let result = self.source.fetch(ticket_number, date).await;
        if let Err(failure) = &result {
            warn!(%date, %failure, "could not fetch result");
        }

        let url = self.source.page_url(ticket_number, date);
        let notification = build_notification(ticket_number, date, &result, url, Utc::now());
        notifier.send(&notification).await?;
        info!(notifier = notifier.name(), "notification sent");

        let (outcome, failure) = match result {
            Ok(outcome) => (Some(outcome), None),
            Err(failure) => (None, Some(failure.to_string())),
        };

        Ok(CheckReport {
            ticket_number: ticket_number.to_string(),
            date,
            outcome,
            failure,
            notified_via: notifier.name().to_string(),
        })
    }
}

pub fn build_notification(
    ticket_number: &str,
    date: NaiveDate,
    result: &Result<Outcome, FetchFailure>,
    url: Option<String>,
    now: DateTime<Utc>,
) -> Notification {
    let field = |name: &str, value: String, inline: bool| NotificationField {
        name: name.to_string(),
        value,
        inline,
    };

    match result {
        Ok(outcome) => {
            let mut fields = vec![
                field("Ticket", ticket_number.to_string(), true),
                field("Draw date", date.to_string(), true),
                field("Result", outcome.display_text().to_string(), false),
            ];
            if outcome.won() {
                fields.push(field("Prize", format!("€{:.2}", outcome.prize_amount()), true));
            }
            let highlights = outcome.highlights();
            if !highlights.is_empty() {
                let shown = &highlights[..highlights.len().min(NOTIFIED_HIGHLIGHTS)];
                fields.push(field("Results found", shown.join("\n"), false));
            }

            Notification {
                title: format!("Lottery results - {date}"),
                description: if outcome.won() {
                    format!("Ticket **{ticket_number}** won a prize!")
                } else {
                    format!("Ticket **{ticket_number}** did not win this week.")
                },
                fields,
                color: if outcome.won() { COLOR_WIN } else { COLOR_NO_PRIZE },
                thumbnail_url: None,
                url,
                timestamp: now,
            }
        }
        Err(failure) => Notification {
            title: "Lottery check failed".into(),
            description: format!("Could not fetch results for ticket {ticket_number} on {date}"),
            fields: vec![field("Reason", failure.to_string(), false)],
            color: COLOR_FAILED,
            thumbnail_url: None,
            url,
            timestamp: now,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_winning_notification() {
        let outcome = Outcome::new(
            date(),
            "01234".into(),
            "Premio de 500€".into(),
            None,
            true,
            dec!(500),
            dec!(6),
        );
        let n = build_notification("01234", date(), &Ok(outcome), None, Utc::now());
        assert_eq!(n.color, COLOR_WIN);
        assert!(n.fields.iter().any(|f| f.name == "Prize" && f.value == "€500.00"));
    }

    #[test]
    fn test_failure_notification() {
        let n = build_notification(
            "01234",
            date(),
            &Err(FetchFailure::MissingPrizeText),
            Some("https://example.test".into()),
            Utc::now(),
        );
        assert_eq!(n.color, COLOR_FAILED);
        assert_eq!(n.url.as_deref(), Some("https://example.test"));
        assert!(n.fields[0].value.contains("not found"));
    }
}
