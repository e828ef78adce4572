use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// Phrase the results page prints when the ticket won nothing.
pub const NO_PRIZE_MARKER: &str = "no tiene premio";

/// Shorter text is treated as a page without usable data.
pub const MIN_TEXT_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prize {
    pub won: bool,
    pub amount: Decimal,
}

impl Prize {
    pub fn none() -> Self {
        Self {
            won: false,
            amount: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrizeTextError {
    #[error("prize text too short ({0} chars)")]
    TooShort(usize),
}

/// Classify raw prize text.
///
/// The no-prize marker decides `won`; the amount is the largest euro value found
/// and may be zero on a win whose text carries no parseable amount.
pub fn classify(raw: &str) -> Result<Prize, PrizeTextError> {
    let text = raw.trim();
    let len = text.chars().count();
    if len < MIN_TEXT_LEN {
        return Err(PrizeTextError::TooShort(len));
    }

    if text.to_lowercase().contains(NO_PRIZE_MARKER) {
        return Ok(Prize::none());
    }

    let amount = euro_amounts(text)
        .into_iter()
        .max()
        .unwrap_or(Decimal::ZERO);

    Ok(Prize { won: true, amount })
}

/// A run of digits and separators followed by the euro sign.
static EURO_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d[\d.,]*)\s*€").expect("euro amount pattern is valid"));

/// All euro amounts in `text`, in order of appearance.
pub fn euro_amounts(text: &str) -> Vec<Decimal> {
    EURO_AMOUNT
        .captures_iter(text)
        .filter_map(|caps| {
            let token = caps[1].trim_end_matches([',', '.']);
            normalize_amount(token)?.parse().ok()
        })
        .collect()
}

/// Rewrites a Spanish-formatted amount ("1.000,50") into plain decimal notation.
/// A comma followed by exactly three digits in an undotted token groups thousands.
fn normalize_amount(token: &str) -> Option<String> {
    let groups: Vec<&str> = token.split(',').collect();

    let (whole, fraction) = match groups.as_slice() {
        [whole] => (*whole, None),
        [first, rest @ ..] if !token.contains('.') && rest.iter().all(|g| g.len() == 3) => {
            let joined = format!("{first}{}", rest.concat());
            return all_digits(&joined).then_some(joined);
        }
        [whole, fraction] => (*whole, Some(*fraction)),
        _ => return None,
    };

    let whole = strip_thousands_dots(whole)?;
    match fraction {
        None => Some(whole),
        Some(f) if all_digits(f) => Some(format!("{whole}.{f}")),
        Some(_) => None,
    }
}

fn strip_thousands_dots(whole: &str) -> Option<String> {
    let groups: Vec<&str> = whole.split('.').collect();
    if groups.iter().any(|g| !all_digits(g)) {
        return None;
    }
    if groups.len() > 1 && groups[1..].iter().any(|g| g.len() != 3) {
        return None;
    }
    Some(groups.concat())
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
