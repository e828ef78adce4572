use crate::domain::error::DomainError;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// The lottery draws once a week, on Saturday.
pub const DRAW_WEEKDAY: Weekday = Weekday::Sat;

/// Enumerates candidate drawing dates for a fixed weekly draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCalendar {
    weekday: Weekday,
}

impl DrawCalendar {
    pub fn weekly(weekday: Weekday) -> Self {
        Self { weekday }
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn is_draw_day(&self, date: NaiveDate) -> bool {
        date.weekday() == self.weekday
    }

    /// First drawing date on or after `date`, if it is representable.
    pub fn next_on_or_after(&self, date: NaiveDate) -> Option<NaiveDate> {
        let ahead = (7 + self.weekday.num_days_from_monday()
            - date.weekday().num_days_from_monday())
            % 7;
        date.checked_add_days(Days::new(ahead as u64))
    }

    /// Last drawing date on or before `date`. Saturates at [`NaiveDate::MIN`].
    pub fn latest_on_or_before(&self, date: NaiveDate) -> NaiveDate {
        let behind = (7 + date.weekday().num_days_from_monday()
            - self.weekday.num_days_from_monday())
            % 7;
        date.checked_sub_days(Days::new(behind as u64))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Last drawing date strictly before `date`. On a draw day this is one week back,
    /// since that day's result may not be published yet.
    pub fn latest_before(&self, date: NaiveDate) -> NaiveDate {
        self.latest_on_or_before(date.pred_opt().unwrap_or(NaiveDate::MIN))
    }

    /// Every drawing date in `[start, end]`, ascending.
    pub fn enumerate_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDate>, DomainError> {
        if start > end {
            return Err(DomainError::InvalidRange { start, end });
        }

        let dates = std::iter::successors(self.next_on_or_after(start), |d| {
            d.checked_add_days(Days::new(7))
        })
        .take_while(|d| *d <= end)
        .collect();
        Ok(dates)
    }

    /// Drawing dates in `[from - max_lookback_days, from]`, most recent first, produced
    /// lazily. A window reaching past the earliest representable date is cut off there.
    pub fn probe_dates(
        &self,
        from: NaiveDate,
        max_lookback_days: u32,
    ) -> impl Iterator<Item = NaiveDate> {
        let floor = from
            .checked_sub_days(Days::new(max_lookback_days as u64))
            .unwrap_or(NaiveDate::MIN);

        std::iter::successors(Some(self.latest_on_or_before(from)), |d| {
            d.checked_sub_days(Days::new(7))
        })
        .take_while(move |d| *d >= floor)
    }

    pub fn probe_sequence(&self, from: NaiveDate, max_lookback_days: u32) -> Vec<NaiveDate> {
        self.probe_dates(from, max_lookback_days).collect()
    }
}

impl Default for DrawCalendar {
    fn default() -> Self {
        Self::weekly(DRAW_WEEKDAY)
    }
}
