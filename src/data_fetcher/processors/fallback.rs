//! Built-in fixtures shown whenever the live feed is unavailable or empty.

use crate::data_fetcher::models::{BettingInfo, Match, TeamStats};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The fixed fallback dataset. Order matters: it is rendered as-is.
pub fn fallback_matches() -> Vec<Match> {
    vec![
        Match {
            league: "Liga 1".to_string(),
            home_team: "Universitario".to_string(),
            away_team: "Sporting Cristal".to_string(),
            date_time: "2025-02-15 19:00".to_string(),
            analysis: "Universitario domina en casa con solidez y calidad ofensiva.".to_string(),
            home_stats: TeamStats {
                victories: 5,
                top_scorers: strings(&["Valera (3)", "Quispe (2)"]),
                red_cards: 1,
                yellow_cards: 2,
                injured: strings(&["Juan Pérez"]),
            },
            away_stats: TeamStats {
                victories: 4,
                top_scorers: strings(&["Lopez (4)", "García (1)"]),
                red_cards: 0,
                yellow_cards: 1,
                injured: strings(&["Carlos Ruiz"]),
            },
            betting: BettingInfo {
                recommendation:
                    "Apostar por la victoria de Universitario y mercado de over 2.5 goles."
                        .to_string(),
                options: strings(&["Ganador", "Over/Under", "Ambos equipos marcan"]),
                assurance: "Universitario es el favorito por su sólido desempeño en casa."
                    .to_string(),
            },
            status: None,
        },
        Match {
            league: "Liga 1".to_string(),
            home_team: "Alianza Lima".to_string(),
            away_team: "Melgar".to_string(),
            date_time: "2025-02-15 21:00".to_string(),
            analysis: "Alianza Lima presenta un ataque potente pero con problemas de disciplina; \
                       Melgar muestra un juego colectivo sólido. Se sugiere un empate o victoria de Melgar."
                .to_string(),
            home_stats: TeamStats {
                victories: 3,
                top_scorers: strings(&["Barcos (3)", "Concha (2)"]),
                red_cards: 2,
                yellow_cards: 3,
                injured: strings(&["Lateral X"]),
            },
            away_stats: TeamStats {
                victories: 4,
                top_scorers: strings(&["Ramirez (4)", "Torres (1)"]),
                red_cards: 0,
                yellow_cards: 1,
                injured: Vec::new(),
            },
            betting: BettingInfo {
                recommendation: "Apostar a empate o a la doble oportunidad para Melgar."
                    .to_string(),
                options: strings(&["Empate/Doble Oportunidad", "Más de 2.5 goles"]),
                assurance:
                    "Melgar es fuerte en juego colectivo, pero el partido puede cerrarse en empate."
                        .to_string(),
            },
            status: None,
        },
    ]
}
