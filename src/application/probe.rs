use crate::domain::ports::result_source::ResultSource;
use crate::domain::values::draw_calendar::DrawCalendar;
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Walks drawing dates backward from a reference day to find one that has data.
///
/// The first hit is the most recent date with data, not the oldest one in the
/// source's history. Callers use it to anchor a forward enumeration.
pub struct AvailabilityProbe {
    source: Arc<dyn ResultSource>,
    calendar: DrawCalendar,
    pause: Duration,
}

impl AvailabilityProbe {
    pub fn new(source: Arc<dyn ResultSource>, calendar: DrawCalendar, pause: Duration) -> Self {
        Self {
            source,
            calendar,
            pause,
        }
    }

    /// Most recent drawing date within `max_lookback_days` of `today` that yields an outcome.
    pub async fn latest_available(
        &self,
        ticket_number: &str,
        today: NaiveDate,
        max_lookback_days: u32,
    ) -> Option<NaiveDate> {
        info!(ticket = ticket_number, max_lookback_days, "probing for available data");

        let candidates = self.calendar.probe_dates(today, max_lookback_days);
        for (i, date) in candidates.enumerate() {
            if i > 0 && !self.pause.is_zero() {
                tokio::time::sleep(self.pause).await;
            }

            match self.source.fetch(ticket_number, date).await {
                Ok(_) => {
                    info!(%date, probes = i + 1, "found date with data");
                    return Some(date);
                }
                Err(failure) => debug!(%date, %failure, "no data"),
            }
        }

        warn!(max_lookback_days, "no data found within lookback window");
        None
    }
}
