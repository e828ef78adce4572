mod common;

use common::{config, d, loss, win, FakeSource, TICKET};
use lottery_analyzer::application::aggregate::AggregateUseCase;
use lottery_analyzer::domain::values::draw_calendar::DrawCalendar;
use rust_decimal_macros::dec;
use std::sync::Arc;

fn draws(start: &str, weeks: i64) -> Vec<chrono::NaiveDate> {
    let start = d(start);
    DrawCalendar::default()
        .enumerate_range(start, start + chrono::Duration::weeks(weeks - 1))
        .unwrap()
}

#[tokio::test]
async fn test_range_scan_stops_after_five_misses() {
    let dates = draws("2024-01-06", 20);
    let source = Arc::new(FakeSource::new().with_outcomes(dates[..3].iter().copied().map(loss)));
    let uc = AggregateUseCase::new(source.clone(), DrawCalendar::default(), &config());

    let analysis = uc
        .scan_range(TICKET, dates[0], *dates.last().unwrap())
        .await
        .unwrap();

    assert_eq!(analysis.total_tickets(), 3);
    assert_eq!(source.calls(), dates[..8].to_vec());
}

#[tokio::test]
async fn test_range_scan_tolerates_short_gaps() {
    let dates = draws("2024-01-06", 20);
    // Data every fifth week: gaps of four misses never reach the limit.
    let source = Arc::new(
        FakeSource::new().with_outcomes(dates.iter().step_by(5).map(|date| win(*date, dec!(6)))),
    );
    let uc = AggregateUseCase::new(source.clone(), DrawCalendar::default(), &config());

    let analysis = uc
        .scan_range(TICKET, dates[0], *dates.last().unwrap())
        .await
        .unwrap();

    assert_eq!(source.calls().len(), 20);
    assert_eq!(analysis.total_tickets(), 4);
    assert_eq!(analysis.net_profit(), dec!(0));
}

#[tokio::test]
async fn test_backward_scan_stops_after_ten_misses() {
    let today = d("2024-06-15");
    let source = Arc::new(
        FakeSource::new()
            .with_outcome(loss(d("2024-06-08")))
            .with_outcome(win(d("2024-06-01"), dec!(60)))
            .with_outcome(loss(d("2024-05-25"))),
    );
    let uc = AggregateUseCase::new(source.clone(), DrawCalendar::default(), &config());

    let analysis = uc.scan_back(TICKET, today).await;

    let calls = source.calls();
    assert_eq!(calls.len(), 13);
    assert_eq!(calls[0], d("2024-06-08"), "today's draw is skipped");
    assert_eq!(analysis.total_tickets(), 3);
    assert_eq!(analysis.outcomes()[0].date(), d("2024-05-25"));
    assert_eq!(analysis.last_win_date(), Some(d("2024-06-01")));
}
