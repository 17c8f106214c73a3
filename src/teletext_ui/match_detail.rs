//! Full detail page of one fixture.

use crate::analysis::{SafeBet, safe_bet};
use crate::constants::ui::{PAGE_NUMBER, TITLE};
use crate::data_fetcher::models::{Match, MatchId, TeamStats};
use crate::feed::FeedSnapshot;

use super::page::{PageRow, TeletextPage};

pub const DETAIL_CONTROLS: &str = "q=Salir b=Volver ↑↓=Desplazar";
pub const NO_INJURIES: &str = "Ninguno";

/// Everything the detail page shows, resolved from one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchDetailView {
    pub id: MatchId,
    pub title: String,
    pub date_time: String,
    pub status: Option<String>,
    pub analysis: String,
    pub home_team: String,
    pub away_team: String,
    pub home_stats: TeamStats,
    pub away_stats: TeamStats,
    pub recommendation: String,
    pub options: String,
    pub assurance: String,
    pub safe_bet: SafeBet,
}

/// Resolves `id` against `snapshot` and builds its detail view.
///
/// Returns `None` when the snapshot holds no such fixture.
pub fn show_detail(snapshot: &FeedSnapshot, id: MatchId) -> Option<MatchDetailView> {
    snapshot.find(id).map(|m| MatchDetailView {
        id,
        ..MatchDetailView::from_match(m)
    })
}

fn stats_rows(page: &mut TeletextPage, team: &str, stats: &TeamStats) {
    page.add_row(PageRow::SectionHeader(format!("Estadísticas de {team}")));
    let injured = if stats.injured.is_empty() {
        NO_INJURIES.to_string()
    } else {
        stats.injured.join(", ")
    };
    for (label, value) in [
        ("Victorias", stats.victories.to_string()),
        ("Top Goleadores", stats.top_scorers.join(", ")),
        ("Tarjetas Rojas", stats.red_cards.to_string()),
        ("Tarjetas Amarillas", stats.yellow_cards.to_string()),
        ("Lesionados", injured),
    ] {
        page.add_row(label_row(label, value));
    }
}

fn label_row(label: &str, value: String) -> PageRow {
    PageRow::Label {
        label: label.to_string(),
        value,
    }
}

impl MatchDetailView {
    pub fn from_match(m: &Match) -> Self {
        Self {
            id: m.id(),
            title: m.title(),
            date_time: m.date_time.clone(),
            status: m.status.clone(),
            analysis: m.analysis.clone(),
            home_team: m.home_team.clone(),
            away_team: m.away_team.clone(),
            home_stats: m.home_stats.clone(),
            away_stats: m.away_stats.clone(),
            recommendation: m.betting.recommendation.clone(),
            options: m.betting.options.join(", "),
            assurance: m.betting.assurance.clone(),
            safe_bet: safe_bet(m),
        }
    }

    pub fn to_page(&self) -> TeletextPage {
        let mut page = TeletextPage::new(PAGE_NUMBER, TITLE, &self.title.to_uppercase());

        let when = match &self.status {
            Some(status) => format!("{}  {status}", self.date_time),
            None => self.date_time.clone(),
        };
        page.add_row(PageRow::Text(when));
        page.add_row(PageRow::Blank);

        stats_rows(&mut page, &self.home_team, &self.home_stats);
        page.add_row(PageRow::Blank);
        stats_rows(&mut page, &self.away_team, &self.away_stats);
        page.add_row(PageRow::Blank);

        if !self.analysis.is_empty() {
            page.add_row(PageRow::SectionHeader("Análisis".to_string()));
            page.add_row(PageRow::Text(self.analysis.clone()));
            page.add_row(PageRow::Blank);
        }

        page.add_row(PageRow::SectionHeader("Recomendaciones de Apuesta".to_string()));
        page.add_row(label_row("Recomendación", self.recommendation.clone()));
        page.add_row(label_row("Opciones", self.options.clone()));
        page.add_row(label_row("Aseguradora", self.assurance.clone()));
        page.add_row(PageRow::Blank);

        page.add_row(PageRow::SectionHeader("Apuesta Segura".to_string()));
        page.add_row(label_row("Ganador Seguro", self.safe_bet.to_string()));

        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::{DataSource, fallback_matches};

    fn label_value<'a>(page: &'a TeletextPage, wanted: &str) -> Vec<&'a str> {
        page.rows()
            .iter()
            .filter_map(|row| match row {
                PageRow::Label { label, value } if label == wanted => Some(value.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_detail_of_first_fallback_match() {
        let matches = fallback_matches();
        let view = MatchDetailView::from_match(&matches[0]);
        let page = view.to_page();

        assert_eq!(page.subheader(), "UNIVERSITARIO VS. SPORTING CRISTAL");
        assert_eq!(label_value(&page, "Victorias"), vec!["5", "4"]);
        assert_eq!(
            label_value(&page, "Top Goleadores"),
            vec!["Valera (3), Quispe (2)", "Lopez (4), García (1)"]
        );
        assert_eq!(label_value(&page, "Tarjetas Rojas"), vec!["1", "0"]);
        assert_eq!(label_value(&page, "Tarjetas Amarillas"), vec!["2", "1"]);
        assert_eq!(label_value(&page, "Lesionados"), vec!["Juan Pérez", "Carlos Ruiz"]);
        assert_eq!(
            label_value(&page, "Opciones"),
            vec!["Ganador, Over/Under, Ambos equipos marcan"]
        );
        assert_eq!(label_value(&page, "Ganador Seguro"), vec!["Universitario"]);
        assert!(page.rows().contains(&PageRow::SectionHeader(
            "Estadísticas de Sporting Cristal".to_string()
        )));
    }

    #[test]
    fn test_empty_injury_list_shows_placeholder() {
        let matches = fallback_matches();
        let page = MatchDetailView::from_match(&matches[1]).to_page();
        assert_eq!(label_value(&page, "Lesionados"), vec!["Lateral X", NO_INJURIES]);
        assert_eq!(label_value(&page, "Ganador Seguro"), vec!["Empate"]);
    }

    #[test]
    fn test_section_order() {
        let page = MatchDetailView::from_match(&fallback_matches()[0]).to_page();
        let headers: Vec<&str> = page
            .rows()
            .iter()
            .filter_map(|row| match row {
                PageRow::SectionHeader(h) => Some(h.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            headers,
            vec![
                "Estadísticas de Universitario",
                "Estadísticas de Sporting Cristal",
                "Análisis",
                "Recomendaciones de Apuesta",
                "Apuesta Segura",
            ]
        );
    }

    #[test]
    fn test_show_detail_resolves_by_id() {
        let snapshot = FeedSnapshot::new(1, fallback_matches(), DataSource::Live);
        let id = snapshot.matches[1].id();

        let view = show_detail(&snapshot, id).unwrap();
        assert_eq!(view.title, "Alianza Lima vs. Melgar");
        assert_eq!(view.id, id);

        let unknown = MatchId::derive("Cienciano", "Melgar", "2025-03-01 15:30");
        assert!(show_detail(&snapshot, unknown).is_none());
    }

    #[test]
    fn test_show_detail_of_repeated_fixture() {
        let mut second = fallback_matches().remove(0);
        second.analysis = "Análisis en vivo: Segundo partido.".to_string();
        let mut matches = fallback_matches();
        matches.truncate(1);
        matches.push(second);
        let snapshot = FeedSnapshot::new(1, matches, DataSource::Live);

        let list = crate::teletext_ui::populate_matches(&snapshot.matches);
        let card = list.entry_at(1).unwrap();
        let view = show_detail(&snapshot, card.id).unwrap();
        assert_eq!(view.id, card.id);
        assert_eq!(view.analysis, "Análisis en vivo: Segundo partido.");
    }

    #[test]
    fn test_plain_detail_text() {
        let page = MatchDetailView::from_match(&fallback_matches()[0]).to_page();
        let text = page.to_plain_lines().join("\n");
        assert!(text.contains("  Ganador Seguro: Universitario"));
        assert!(text.contains("  ESTADÍSTICAS DE UNIVERSITARIO"));
        assert!(text.contains("  2025-02-15 19:00"));
    }
}
