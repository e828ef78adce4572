/// The fields of a results page the fetcher cares about, already flattened to text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultPage {
    /// Document title, if any.
    pub title: Option<String>,
    /// The prize text region, if the page has one.
    pub prize: Option<PrizeRegion>,
    /// Texts of result-looking elements, in document order.
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrizeRegion {
    /// Full region text with line breaks replaced by spaces.
    pub text: String,
    /// Text of the nested win-detail element, when present.
    pub detail: Option<String>,
}

/// Extracts a [`ResultPage`] from raw markup.
pub trait PageParser: Send + Sync {
    fn parse(&self, body: &str) -> ResultPage;
}
