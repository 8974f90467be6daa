use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::{ScheduleLogic, SuggestOutcome, SuggestRequest};
use crate::core::trace::{NoopSink, TraceEvent, TraceSink};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::SuggestionExport;
use crate::models::GeoPoint;
use crate::ui::messages::{header, info, success, trace};
use crate::utils::colors::{RESET, color_for_km};
use crate::utils::date;
use crate::utils::formatting::{describe_km, mins2readable};
use crate::utils::table::{Column, Table};

/// Writes engine decisions to stderr.
struct ConsoleSink;

impl TraceSink for ConsoleSink {
    fn record(&mut self, event: TraceEvent) {
        let line = match event {
            TraceEvent::Day {
                date,
                window_start,
                window_end,
                blocks,
                gaps,
            } => format!(
                "{date}: window {}–{}, {blocks} busy blocks, {gaps} gaps",
                window_start.format("%H:%M"),
                window_end.format("%H:%M")
            ),
            TraceEvent::GapTooShort { start, end } => format!(
                "  gap {}–{} too short",
                start.format("%H:%M"),
                end.format("%H:%M")
            ),
            TraceEvent::TravelExceedsGap {
                start,
                end,
                outbound,
                inbound,
            } => format!(
                "  gap {}–{} lost to travel ({} min out / {} min back)",
                start.format("%H:%M"),
                end.format("%H:%M"),
                outbound.minutes,
                inbound.minutes
            ),
            TraceEvent::Suggested {
                suggestion,
                outbound,
                inbound,
            } => format!(
                "  slot {}–{}: {} km out ({} min), {} km back ({} min)",
                suggestion.start.format("%H:%M"),
                suggestion.end.format("%H:%M"),
                outbound.km,
                outbound.minutes,
                inbound.km,
                inbound.minutes
            ),
            TraceEvent::Ranked { count } => format!("ranked {count} suggestions"),
        };
        trace(line);
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Suggest {
        location,
        lat,
        long,
        period,
        calendars,
        limit,
        json,
        trace: want_trace,
        book,
        title,
    } = cmd
    {
        let range = match period {
            Some(p) => date::parse_period(p)?,
            None => date::next_days(6),
        };

        let point = match (lat, long) {
            (Some(la), Some(lo)) => Some(GeoPoint::new(*la, *lo)?),
            _ => None,
        };

        let req = SuggestRequest {
            location: location
                .as_ref()
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty()),
            point,
            range,
            calendars: calendars.clone(),
        };

        let mut pool = DbPool::open_migrated(&cfg.database)?;

        let mut outcome = if *want_trace {
            ScheduleLogic::suggest(&mut pool, cfg, &req, &mut ConsoleSink)?
        } else {
            ScheduleLogic::suggest(&mut pool, cfg, &req, &mut NoopSink)?
        };

        if let Some(n) = limit {
            outcome.suggestions.truncate(*n);
        }

        if *json {
            let rows = SuggestionExport::ranked(&outcome.suggestions);
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else {
            print_suggestions(&outcome);
        }

        if let (Some(rank), Some(t)) = (book, title) {
            let calendar = calendars
                .first()
                .cloned()
                .unwrap_or_else(|| cfg.default_calendar.clone());
            let (id, event) = ScheduleLogic::book(&mut pool, cfg, &outcome, *rank, t, &calendar)?;
            let msg = format!(
                "Booked #{} '{}' {} → {}",
                id,
                event.title,
                event.start_str(),
                event.end.format("%H:%M")
            );
            // Keep stdout a single JSON document.
            if *json {
                trace(msg);
            } else {
                success(msg);
            }
        }
    }

    Ok(())
}

fn print_suggestions(outcome: &SuggestOutcome) {
    header(format!("Suggestions for {} ({})", outcome.location, outcome.target));

    if outcome.suggestions.is_empty() {
        info("No suggestions available in this period.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("#", 3),
        Column::new("DATE", 10),
        Column::new("FROM", 5),
        Column::new("TO", 5),
        Column::new("FREE", 7),
        Column::new("ADDED", 20),
    ]);

    for (i, s) in outcome.suggestions.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            s.start.format("%Y-%m-%d").to_string(),
            s.start.format("%H:%M").to_string(),
            s.end.format("%H:%M").to_string(),
            mins2readable(s.duration().num_minutes(), false, true),
            format!("{}{}{}", color_for_km(s.added_km), describe_km(s.added_km), RESET),
        ]);
    }

    print!("{}", table.render());
    println!(
        "{} suggestions from {} events",
        outcome.suggestions.len(),
        outcome.events_considered
    );
}
