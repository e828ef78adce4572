use crate::domain::entities::outcome::Outcome;
use crate::domain::ports::page_parser::PageParser;
use crate::domain::ports::page_source::PageSource;
use crate::domain::ports::result_source::{FetchFailure, ResultSource};
use crate::domain::values::prize_text::{self, PrizeTextError};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Title keywords that mean the page has no result for the requested date.
const UNAVAILABLE_TITLE_KEYWORDS: [&str; 4] = ["error", "no encontrado", "no disponible", "404"];

/// Fetches one results page and turns it into an [`Outcome`].
///
/// Every failure on the way (network, missing region, unusable text) comes back as a
/// [`FetchFailure`], never as an error the caller has to handle.
pub struct ResultFetcher {
    pages: Arc<dyn PageSource>,
    parser: Arc<dyn PageParser>,
    base_url: String,
    ticket_cost: Decimal,
}

impl ResultFetcher {
    pub fn new(
        pages: Arc<dyn PageSource>,
        parser: Arc<dyn PageParser>,
        base_url: String,
        ticket_cost: Decimal,
    ) -> Self {
        Self {
            pages,
            parser,
            base_url,
            ticket_cost,
        }
    }

    pub fn url_for(&self, ticket_number: &str, date: NaiveDate) -> String {
        format!(
            "{}?numero={}&del-dia={}",
            self.base_url,
            ticket_number,
            date.format("%Y-%m-%d")
        )
    }
}

fn unavailable_keyword(title: &str) -> Option<&'static str> {
    let lower = title.to_lowercase();
    UNAVAILABLE_TITLE_KEYWORDS
        .into_iter()
        .find(|kw| lower.contains(*kw))
}

#[async_trait]
impl ResultSource for ResultFetcher {
    async fn fetch(&self, ticket_number: &str, date: NaiveDate) -> Result<Outcome, FetchFailure> {
        let url = self.url_for(ticket_number, date);
        debug!(%url, "fetching result page");

        let body = self.pages.get(&url).await.map_err(|e| {
            warn!(%date, error = %e, "result page request failed");
            FetchFailure::Network(e.to_string())
        })?;

        let page = self.parser.parse(&body);

        if let Some(keyword) = page.title.as_deref().and_then(unavailable_keyword) {
            info!(%date, keyword, "no data available for date");
            return Err(FetchFailure::Unavailable(keyword.to_string()));
        }

        let Some(region) = page.prize else {
            info!(%date, "prize text not found");
            return Err(FetchFailure::MissingPrizeText);
        };

        // Always decide on the full region; the detail element is only kept for display.
        let prize = prize_text::classify(&region.text).map_err(|e| match e {
            PrizeTextError::TooShort(len) => {
                info!(%date, len, "prize text empty or too short");
                FetchFailure::TextTooShort(len)
            }
        })?;

        let detail = region
            .detail
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        if prize.won {
            info!(%date, amount = %prize.amount, text = %region.text, "prize found");
        }

        Ok(Outcome::new(
            date,
            ticket_number.to_string(),
            region.text.trim().to_string(),
            detail,
            prize.won,
            prize.amount,
            self.ticket_cost,
        )
        .with_highlights(page.highlights))
    }

    fn page_url(&self, ticket_number: &str, date: NaiveDate) -> Option<String> {
        Some(self.url_for(ticket_number, date))
    }
}
