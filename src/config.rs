use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str =
    "https://nacionalloteria.mundodeportivo.com/Loteria-Nacional-Sabado.php";

/// Tunables for fetching and aggregating results.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Results page; ticket number and date are appended as query parameters.
    pub base_url: String,
    pub user_agent: String,
    pub request_timeout: Duration,
    /// Price of one ticket for one drawing.
    pub ticket_cost: Decimal,
    /// Maximum in-flight fetches in the concurrent aggregator.
    pub concurrency: usize,
    /// Pause between availability probes.
    pub probe_pause: Duration,
    /// Pause between fetches in sequential scans.
    pub scan_pause: Duration,
    /// How far back the availability probe looks.
    pub max_lookback_days: u32,
    /// Start window used when no start date is given and the probe finds nothing.
    pub fallback_lookback_days: u32,
    /// Consecutive misses that end a forward range scan.
    pub range_miss_limit: usize,
    /// Consecutive misses that end an open-ended backward scan.
    pub backward_miss_limit: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            user_agent: "lottery-analyzer/0.1".into(),
            request_timeout: Duration::from_secs(30),
            ticket_cost: dec!(6.00),
            concurrency: 5,
            probe_pause: Duration::from_millis(300),
            scan_pause: Duration::from_millis(500),
            max_lookback_days: 365,
            fallback_lookback_days: 180,
            range_miss_limit: 5,
            backward_miss_limit: 10,
        }
    }
}

impl AnalyzerConfig {
    /// Same settings with every pause removed. Used against local fakes.
    pub fn without_pauses(mut self) -> Self {
        self.probe_pause = Duration::ZERO;
        self.scan_pause = Duration::ZERO;
        self
    }
}
