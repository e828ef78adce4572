use crate::domain::entities::outcome::Outcome;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Financial summary of one ticket number over a set of drawing dates.
///
/// Built only through [`Analysis::from_outcomes`], so the totals always agree
/// with the outcome list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    ticket_number: String,
    total_tickets: usize,
    total_spent: Decimal,
    total_won: Decimal,
    net_profit: Decimal,
    /// Percentage of tickets that won, 0–100.
    win_rate: Decimal,
    biggest_prize: Decimal,
    last_win_date: Option<NaiveDate>,
    outcomes: Vec<Outcome>,
}

impl Analysis {
    /// Analysis of a run that found nothing.
    pub fn empty(ticket_number: &str) -> Self {
        Self::from_outcomes(ticket_number, Vec::new())
    }

    /// Sort outcomes by date and fold them into totals.
    pub fn from_outcomes(ticket_number: &str, mut outcomes: Vec<Outcome>) -> Self {
        outcomes.sort_by_key(|o| o.date());

        let mut total_spent = Decimal::ZERO;
        let mut total_won = Decimal::ZERO;
        let mut wins = 0usize;
        let mut biggest_prize = Decimal::ZERO;
        let mut last_win_date: Option<NaiveDate> = None;

        for outcome in &outcomes {
            total_spent += outcome.ticket_cost();
            if !outcome.won() {
                continue;
            }
            wins += 1;
            total_won += outcome.prize_amount();
            biggest_prize = biggest_prize.max(outcome.prize_amount());
            if last_win_date.map_or(true, |d| outcome.date() > d) {
                last_win_date = Some(outcome.date());
            }
        }

        let total_tickets = outcomes.len();
        let win_rate = if total_tickets == 0 {
            Decimal::ZERO
        } else {
            Decimal::from(wins) * Decimal::ONE_HUNDRED / Decimal::from(total_tickets)
        };

        Self {
            ticket_number: ticket_number.to_string(),
            total_tickets,
            total_spent,
            total_won,
            net_profit: total_won - total_spent,
            win_rate,
            biggest_prize,
            last_win_date,
            outcomes,
        }
    }

    pub fn ticket_number(&self) -> &str {
        &self.ticket_number
    }

    pub fn total_tickets(&self) -> usize {
        self.total_tickets
    }

    pub fn total_spent(&self) -> Decimal {
        self.total_spent
    }

    pub fn total_won(&self) -> Decimal {
        self.total_won
    }

    pub fn net_profit(&self) -> Decimal {
        self.net_profit
    }

    pub fn win_rate(&self) -> Decimal {
        self.win_rate
    }

    pub fn biggest_prize(&self) -> Decimal {
        self.biggest_prize
    }

    pub fn last_win_date(&self) -> Option<NaiveDate> {
        self.last_win_date
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn wins(&self) -> usize {
        self.outcomes.iter().filter(|o| o.won()).count()
    }

    /// First and last drawing date covered, if any.
    pub fn period(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.outcomes.first()?.date();
        let last = self.outcomes.last()?.date();
        Some((first, last))
    }

    /// Return on investment as a percentage; zero when nothing was spent.
    pub fn roi(&self) -> Decimal {
        if self.total_spent.is_zero() {
            Decimal::ZERO
        } else {
            self.net_profit * Decimal::ONE_HUNDRED / self.total_spent
        }
    }
}
