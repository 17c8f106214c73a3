//! The "safe bet" line of the detail view.
//!
//! This is a low-confidence text-pattern extractor over the free-text
//! recommendation sentence, not a prediction. It looks for two Spanish
//! phrases and otherwise falls back to the home team:
//!
//! 1. `"empate"` anywhere (any case) yields a draw.
//! 2. The first `"victoria de "` (any case) yields whatever follows it, up to
//!    the first `" y "`, trimmed, in its original casing.
//! 3. Anything else yields the home team.
//!
//! The draw check runs first, so "empate o victoria de Melgar" is a draw.

use crate::data_fetcher::models::Match;
use std::fmt;

const DRAW_MARKER: &str = "empate";
const VICTORY_MARKER: &str = "victoria de ";
const SEGMENT_SEPARATOR: &str = " y ";

/// Label shown for a draw.
pub const DRAW_LABEL: &str = "Empate";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SafeBet {
    /// The recommendation mentions a draw.
    Draw,
    /// Text extracted after "victoria de ". May be empty or junk when the
    /// sentence is unusual; it is shown as-is.
    Winner(String),
    /// No pattern matched; the home team is shown.
    HomeTeam(String),
}

impl SafeBet {
    pub fn label(&self) -> &str {
        match self {
            SafeBet::Draw => DRAW_LABEL,
            SafeBet::Winner(name) | SafeBet::HomeTeam(name) => name,
        }
    }
}

impl fmt::Display for SafeBet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Byte offset of the first ASCII-case-insensitive occurrence of `needle`.
///
/// `needle` must be lowercase ASCII. Matching on bytes keeps offsets valid in
/// the original string, which a `to_lowercase()` copy does not guarantee for
/// every Unicode input.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let hay = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || hay.len() < needle.len() {
        return None;
    }
    (0..=hay.len() - needle.len())
        .find(|&start| hay[start..start + needle.len()].eq_ignore_ascii_case(needle))
}

/// Derives the safe-bet label from a recommendation sentence.
pub fn safe_bet_from_text(recommendation: &str, home_team: &str) -> SafeBet {
    if find_ignore_ascii_case(recommendation, DRAW_MARKER).is_some() {
        return SafeBet::Draw;
    }

    if let Some(start) = find_ignore_ascii_case(recommendation, VICTORY_MARKER) {
        // The marker is pure ASCII, so start + len is a char boundary.
        let rest = &recommendation[start + VICTORY_MARKER.len()..];
        let winner = rest.split(SEGMENT_SEPARATOR).next().unwrap_or(rest);
        return SafeBet::Winner(winner.trim().to_string());
    }

    SafeBet::HomeTeam(home_team.to_string())
}

/// Derives the safe-bet label for a fixture from its betting recommendation.
pub fn safe_bet(m: &Match) -> SafeBet {
    safe_bet_from_text(&m.betting.recommendation, &m.home_team)
}
