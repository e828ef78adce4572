mod common;

use common::{config, d, loss, win, FakeSource, RecordingNotifier, TICKET};
use lottery_analyzer::application::check_latest::{COLOR_FAILED, COLOR_NO_PRIZE, COLOR_WIN};
use lottery_analyzer::domain::error::DomainError;
use lottery_analyzer::domain::values::ticket_number::TicketNumber;
use lottery_analyzer::LotteryAnalyzer;
use rust_decimal_macros::dec;
use std::sync::Arc;

fn ticket() -> TicketNumber {
    TicketNumber::new(TICKET).unwrap()
}

#[test]
fn test_checks_todays_draw_on_saturday() {
    let analyzer = LotteryAnalyzer::with_source(Arc::new(FakeSource::new()), config());
    assert_eq!(analyzer.draw_date_for(d("2024-03-09")), d("2024-03-09"));
    assert_eq!(analyzer.draw_date_for(d("2024-03-12")), d("2024-03-09"));
}

#[tokio::test]
async fn test_win_is_notified() {
    let source = FakeSource::new().with_outcome(win(d("2024-03-09"), dec!(500)));
    let analyzer = LotteryAnalyzer::with_source(Arc::new(source), config());
    let notifier = RecordingNotifier::default();

    let report = analyzer
        .check(&ticket(), d("2024-03-09"), &notifier)
        .await
        .unwrap();

    assert!(report.outcome.as_ref().is_some_and(|o| o.won()));
    assert_eq!(report.notified_via, "recording");
    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].color, COLOR_WIN);
    assert!(sent[0].title.contains("2024-03-09"));
}

#[tokio::test]
async fn test_loss_is_notified() {
    let source = FakeSource::new().with_outcome(loss(d("2024-03-09")));
    let analyzer = LotteryAnalyzer::with_source(Arc::new(source), config());
    let notifier = RecordingNotifier::default();

    analyzer
        .check(&ticket(), d("2024-03-09"), &notifier)
        .await
        .unwrap();

    assert_eq!(notifier.sent.lock().unwrap()[0].color, COLOR_NO_PRIZE);
}

#[tokio::test]
async fn test_missing_data_is_notified_as_failure() {
    let analyzer = LotteryAnalyzer::with_source(Arc::new(FakeSource::new()), config());
    let notifier = RecordingNotifier::default();

    let report = analyzer
        .check(&ticket(), d("2024-03-09"), &notifier)
        .await
        .unwrap();

    assert!(report.outcome.is_none());
    assert!(report.failure.is_some());
    assert_eq!(notifier.sent.lock().unwrap()[0].color, COLOR_FAILED);
}

#[tokio::test]
async fn test_notifier_error_propagates() {
    let analyzer = LotteryAnalyzer::with_source(Arc::new(FakeSource::new()), config());
    let notifier = RecordingNotifier {
        fail: true,
        ..Default::default()
    };

    let err = analyzer
        .check(&ticket(), d("2024-03-09"), &notifier)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Notify(_)));
}

#[tokio::test]
async fn test_page_highlights_are_notified() {
    let highlights: Vec<String> = ["Sorteo 20", "Primer premio 12345", "Reintegro 4", "Loteria"]
        .into_iter()
        .map(String::from)
        .collect();
    let outcome = loss(d("2024-03-09")).with_highlights(highlights);
    let analyzer =
        LotteryAnalyzer::with_source(Arc::new(FakeSource::new().with_outcome(outcome)), config());
    let notifier = RecordingNotifier::default();

    analyzer
        .check(&ticket(), d("2024-03-09"), &notifier)
        .await
        .unwrap();

    let sent = notifier.sent.lock().unwrap();
    let field = sent[0]
        .fields
        .iter()
        .find(|f| f.name == "Results found")
        .expect("results field");
    assert_eq!(field.value, "Sorteo 20\nPrimer premio 12345\nReintegro 4");
    assert!(!field.inline);
}

#[tokio::test]
async fn test_no_results_field_without_highlights() {
    let source = FakeSource::new().with_outcome(loss(d("2024-03-09")));
    let analyzer = LotteryAnalyzer::with_source(Arc::new(source), config());
    let notifier = RecordingNotifier::default();

    analyzer
        .check(&ticket(), d("2024-03-09"), &notifier)
        .await
        .unwrap();

    let sent = notifier.sent.lock().unwrap();
    assert!(sent[0].fields.iter().all(|f| f.name != "Results found"));
}
