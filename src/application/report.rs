use crate::domain::entities::analysis::Analysis;

/// How many of the most recent outcomes the report lists.
const RECENT_RESULTS: usize = 10;

/// Render a plain-text summary of an analysis.
pub fn render_report(analysis: &Analysis) -> String {
    let period = match analysis.period() {
        Some((first, last)) => format!("{first} - {last}"),
        None => "N/A".into(),
    };
    let last_win = analysis
        .last_win_date()
        .map(|d| d.to_string())
        .unwrap_or_else(|| "never".into());

    let mut out = format!(
        "LOTTERY ANALYSIS\n\
         \n\
         Ticket number: {ticket}\n\
         Period:        {period}\n\
         \n\
         Statistics\n  \
           Tickets:       {tickets}\n  \
           Wins:          {wins}\n  \
           Win rate:      {win_rate:.1}%\n  \
           Biggest prize: €{biggest:.2}\n  \
           Last win:      {last_win}\n\
         \n\
         Money\n  \
           Spent:         €{spent:.2}\n  \
           Won:           €{won:.2}\n  \
           Net:           €{net:.2}\n  \
           ROI:           {roi:.1}%\n\
         \n\
         Recent results\n",
        ticket = analysis.ticket_number(),
        tickets = analysis.total_tickets(),
        wins = analysis.wins(),
        win_rate = analysis.win_rate(),
        biggest = analysis.biggest_prize(),
        spent = analysis.total_spent(),
        won = analysis.total_won(),
        net = analysis.net_profit(),
        roi = analysis.roi(),
    );

    let outcomes = analysis.outcomes();
    let skipped = outcomes.len().saturating_sub(RECENT_RESULTS);
    for outcome in &outcomes[skipped..] {
        let mark = if outcome.won() { "WIN " } else { "  - " };
        out.push_str(&format!(
            "{mark} {}: {}\n",
            outcome.date(),
            outcome.display_text()
        ));
    }
    if skipped > 0 {
        out.push_str(&format!("... and {skipped} more\n"));
    }

    out
}
