use chrono::{Local, NaiveDate};
use clap::Parser;
use lottery_analyzer::application::report::render_report;
use lottery_analyzer::cli::commands::{Cli, Commands};
use lottery_analyzer::config::AnalyzerConfig;
use lottery_analyzer::domain::error::DomainError;
use lottery_analyzer::domain::values::draw_calendar::DrawCalendar;
use lottery_analyzer::domain::values::ticket_number::TicketNumber;
use lottery_analyzer::infrastructure::notify::discord::DiscordWebhook;
use lottery_analyzer::infrastructure::storage::json_store::JsonAnalysisStore;
use lottery_analyzer::{LotteryAnalyzer, RunMode};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let analyzer = LotteryAnalyzer::new(AnalyzerConfig::default());

    if let Err(e) = run_command(analyzer, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(
    analyzer: LotteryAnalyzer,
    cmd: Commands,
) -> Result<(), Box<dyn std::error::Error>> {
    let today = Local::now().date_naive();

    match cmd {
        Commands::Analyze {
            ticket,
            from,
            to,
            sequential,
            out_dir,
            no_save,
        } => {
            let ticket = require_ticket(ticket)?;
            let start = parse_date(&from)?;
            let end = parse_date(&to)?;
            let mode = if sequential {
                RunMode::Sequential
            } else {
                RunMode::Concurrent
            };

            let window = analyzer.resolve_window(&ticket, start, end, today).await;
            let analysis = analyzer.analyze(&ticket, window, mode, today).await?;
            println!("{}", render_report(&analysis));

            if !no_save {
                let store = JsonAnalysisStore::new(out_dir);
                let path = analyzer.save(&store, &analysis, Local::now().naive_local())?;
                println!("Saved to {}", path.display());
            }
        }
        Commands::Check {
            ticket,
            webhook,
            date,
        } => {
            let ticket = require_ticket(ticket)?;
            let webhook = webhook.filter(|w| !w.trim().is_empty()).ok_or_else(|| {
                DomainError::Configuration("DISCORD_WEBHOOK_URL is not set (use --webhook)".into())
            })?;
            let date = match parse_date(&date)? {
                Some(date) => date,
                None => analyzer.draw_date_for(today),
            };

            let notifier = DiscordWebhook::new(webhook, analyzer.config().request_timeout);
            let report = analyzer.check(&ticket, date, &notifier).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Probe { ticket, lookback } => {
            let ticket = require_ticket(ticket)?;
            match analyzer.latest_available(&ticket, today, lookback).await {
                Some(date) => println!("{date}"),
                None => println!("No data found in the last {lookback} days"),
            }
        }
        Commands::Dates { from, to } => {
            let start = parse_date(&Some(from))?.ok_or("from date required")?;
            let end = parse_date(&Some(to))?.ok_or("to date required")?;
            for date in DrawCalendar::default().enumerate_range(start, end)? {
                println!("{date}");
            }
        }
    }
    Ok(())
}

fn require_ticket(ticket: Option<String>) -> Result<TicketNumber, DomainError> {
    let raw = ticket
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| {
            DomainError::Configuration("LOTTERY_NUMBER is not set (use --ticket)".into())
        })?;
    TicketNumber::new(&raw).map_err(DomainError::InvalidInput)
}

fn parse_date(s: &Option<String>) -> Result<Option<NaiveDate>, DomainError> {
    match s.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| DomainError::InvalidInput(format!("Invalid date: {s}. Use YYYY-MM-DD"))),
    }
}
