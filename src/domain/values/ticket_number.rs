use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A lottery ticket number as printed on the ticket, leading zeros included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketNumber(String);

impl TicketNumber {
    pub fn new(value: &str) -> Result<Self, String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err("Ticket number must not be empty".into());
        }
        if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("Ticket number must be digits only, got {trimmed:?}"));
        }
        Ok(TicketNumber(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TicketNumber {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketNumber::new(s)
    }
}

impl AsRef<str> for TicketNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
