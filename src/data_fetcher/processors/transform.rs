//! Normalization of upstream events into [`Match`] records.
//!
//! TheSportsDB only knows who plays whom and when. Team statistics, the
//! analysis sentence and the betting block are filled with fixed placeholder
//! values or synthesized from the team names.

use crate::constants::placeholders;
use crate::data_fetcher::models::{ApiEvent, BettingInfo, Match, TeamStats};

/// Returns the field value as sent. Missing, `null` and empty strings are absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Builds the display kick-off: event date plus `HH:MM` of the event time.
///
/// The API sends `strTime` as `HH:MM:SS` (sometimes with a zone suffix), so
/// only the first five characters are kept.
pub fn format_date_time(date_event: &Option<String>, str_time: &Option<String>) -> String {
    let date = present(date_event).unwrap_or(placeholders::DATE);
    let time: String = present(str_time)
        .map(|t| t.chars().take(5).collect())
        .unwrap_or_default();
    format!("{date} {time}").trim_end().to_string()
}

fn placeholder_home_stats() -> TeamStats {
    TeamStats {
        victories: 4,
        top_scorers: vec!["Jugador A (2)".to_string(), "Jugador B (1)".to_string()],
        red_cards: 1,
        yellow_cards: 2,
        injured: vec!["Jugador X".to_string()],
    }
}

fn placeholder_away_stats() -> TeamStats {
    TeamStats {
        victories: 3,
        top_scorers: vec!["Jugador C (3)".to_string(), "Jugador D (1)".to_string()],
        red_cards: 0,
        yellow_cards: 1,
        injured: Vec::new(),
    }
}

fn synthesized_betting(home_team: &str) -> BettingInfo {
    BettingInfo {
        recommendation: format!(
            "Apostar por la victoria de {home_team} y mercado de over 2.5 goles."
        ),
        options: vec![
            "Ganador".to_string(),
            "Over/Under".to_string(),
            "Ambos equipos marcan".to_string(),
        ],
        assurance: format!("{home_team} es el favorito por su racha y localía."),
    }
}

/// Maps one upstream event into the [`Match`] shape.
///
/// Never fails: every absent field falls back to a fixed placeholder string.
pub fn transform_event(event: &ApiEvent) -> Match {
    let home_team = present(&event.str_home_team)
        .unwrap_or(placeholders::HOME_TEAM)
        .to_string();
    let away_team = present(&event.str_away_team)
        .unwrap_or(placeholders::AWAY_TEAM)
        .to_string();
    let event_name = present(&event.str_event).unwrap_or(placeholders::EVENT);

    Match {
        league: present(&event.str_league)
            .unwrap_or(placeholders::LEAGUE)
            .to_string(),
        date_time: format_date_time(&event.date_event, &event.str_time),
        analysis: format!(
            "Análisis en vivo: {event_name}. Se espera un encuentro competitivo."
        ),
        home_stats: placeholder_home_stats(),
        away_stats: placeholder_away_stats(),
        betting: synthesized_betting(&home_team),
        status: present(&event.str_status).map(str::to_string),
        home_team,
        away_team,
    }
}

/// Transforms a whole event list, keeping upstream order.
pub fn transform_events(events: &[ApiEvent]) -> Vec<Match> {
    events.iter().map(transform_event).collect()
}
