use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of checking one ticket number against one drawing date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    date: NaiveDate,
    ticket_number: String,
    /// Full prize region text; the win decision is made on this.
    prize_text: String,
    /// Narrower win-detail text when the page provides one. Display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prize_detail: Option<String>,
    won: bool,
    prize_amount: Decimal,
    ticket_cost: Decimal,
    /// Other result-looking texts found on the page, in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    highlights: Vec<String>,
}

impl Outcome {
    pub fn new(
        date: NaiveDate,
        ticket_number: String,
        prize_text: String,
        prize_detail: Option<String>,
        won: bool,
        prize_amount: Decimal,
        ticket_cost: Decimal,
    ) -> Self {
        Self {
            date,
            ticket_number,
            prize_text,
            prize_detail,
            won,
            prize_amount: prize_amount.max(Decimal::ZERO),
            ticket_cost: ticket_cost.max(Decimal::ZERO),
            highlights: Vec::new(),
        }
    }

    pub fn with_highlights(mut self, highlights: Vec<String>) -> Self {
        self.highlights = highlights;
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn ticket_number(&self) -> &str {
        &self.ticket_number
    }

    pub fn prize_text(&self) -> &str {
        &self.prize_text
    }

    pub fn prize_detail(&self) -> Option<&str> {
        self.prize_detail.as_deref()
    }

    /// Detail text if present, otherwise the full prize text.
    pub fn display_text(&self) -> &str {
        self.prize_detail().unwrap_or(&self.prize_text)
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn prize_amount(&self) -> Decimal {
        self.prize_amount
    }

    pub fn ticket_cost(&self) -> Decimal {
        self.ticket_cost
    }

    pub fn highlights(&self) -> &[String] {
        &self.highlights
    }
}
