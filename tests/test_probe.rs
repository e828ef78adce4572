mod common;

use common::{d, loss, FakeSource, TICKET};
use lottery_analyzer::application::probe::AvailabilityProbe;
use lottery_analyzer::domain::values::draw_calendar::DrawCalendar;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_returns_most_recent_date_with_data() {
    let today = d("2024-06-15");
    let cutoff = today - chrono::Duration::days(40);

    // Only dates older than 40 days have data.
    let history: Vec<_> = DrawCalendar::default()
        .probe_sequence(today, 365)
        .into_iter()
        .filter(|date| *date < cutoff)
        .map(loss)
        .collect();
    let source = Arc::new(FakeSource::new().with_outcomes(history));
    let probe = AvailabilityProbe::new(source.clone(), DrawCalendar::default(), Duration::ZERO);

    let found = probe.latest_available(TICKET, today, 365).await;

    assert_eq!(found, Some(d("2024-05-04")));
    assert_eq!(source.calls().len(), 7, "stops at the first hit");
}

#[tokio::test]
async fn test_none_when_window_is_empty() {
    let source = Arc::new(FakeSource::new().with_outcome(loss(d("2022-01-01"))));
    let probe = AvailabilityProbe::new(source.clone(), DrawCalendar::default(), Duration::ZERO);

    let found = probe.latest_available(TICKET, d("2024-06-15"), 365).await;

    assert_eq!(found, None);
    assert!(source.calls().iter().all(|date| *date >= d("2023-06-16")));
}

#[tokio::test]
async fn test_probes_newest_first() {
    let source = Arc::new(FakeSource::new());
    let probe = AvailabilityProbe::new(source.clone(), DrawCalendar::default(), Duration::ZERO);

    probe.latest_available(TICKET, d("2024-01-31"), 30).await;

    assert_eq!(
        source.calls(),
        vec![
            d("2024-01-27"),
            d("2024-01-20"),
            d("2024-01-13"),
            d("2024-01-06")
        ]
    );
}

#[tokio::test]
async fn test_unbounded_lookback_stops_at_first_hit() {
    let today = d("2024-06-15");
    let source = Arc::new(FakeSource::new().with_outcome(loss(d("2024-06-01"))));
    let probe = AvailabilityProbe::new(source.clone(), DrawCalendar::default(), Duration::ZERO);

    let found = probe.latest_available(TICKET, today, u32::MAX).await;

    assert_eq!(found, Some(d("2024-06-01")));
    assert_eq!(source.calls(), vec![d("2024-06-15"), d("2024-06-08"), d("2024-06-01")]);
}
