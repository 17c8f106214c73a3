//! League-grouped list of upcoming fixtures.

use crate::constants::ui::{PAGE_NUMBER, TITLE};
use crate::data_fetcher::models::{Match, MatchId, assign_ids};

use super::page::{PageRow, TeletextPage};

pub const LIST_SUBHEADER: &str = "PRÓXIMOS PARTIDOS";
pub const LIST_CONTROLS: &str = "q=Salir ↑↓=Mover Enter=Detalle r=Actualizar";
pub const EMPTY_MESSAGE: &str = "No hay partidos programados.";

/// One card of the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: MatchId,
    /// Index of the match in the collection the view was built from.
    pub position: usize,
    pub title: String,
    pub date_time: String,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueSection {
    pub league: String,
    pub entries: Vec<ListEntry>,
}

/// The list view: league sections in first-occurrence order, cards in
/// collection order within each section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchListView {
    pub sections: Vec<LeagueSection>,
}

/// Groups `matches` by exact league name.
pub fn populate_matches(matches: &[Match]) -> MatchListView {
    let mut sections: Vec<LeagueSection> = Vec::new();

    for ((position, m), id) in matches.iter().enumerate().zip(assign_ids(matches)) {
        let entry = ListEntry {
            id,
            position,
            title: m.title(),
            date_time: m.date_time.clone(),
            status: m.status.clone(),
        };

        match sections.iter_mut().find(|s| s.league == m.league) {
            Some(section) => section.entries.push(entry),
            None => sections.push(LeagueSection {
                league: m.league.clone(),
                entries: vec![entry],
            }),
        }
    }

    MatchListView { sections }
}

impl MatchListView {
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cards in display order (section by section).
    pub fn entries(&self) -> impl Iterator<Item = &ListEntry> {
        self.sections.iter().flat_map(|s| s.entries.iter())
    }

    /// Card at a 0-based display index.
    pub fn entry_at(&self, index: usize) -> Option<&ListEntry> {
        self.entries().nth(index)
    }

    /// Display index of the card with the given id.
    pub fn index_of(&self, id: MatchId) -> Option<usize> {
        self.entries().position(|e| e.id == id)
    }

    /// Builds the page. `selected` is a display index; `None` marks no card.
    pub fn to_page(&self, selected: Option<usize>) -> TeletextPage {
        let mut page = TeletextPage::new(PAGE_NUMBER, TITLE, LIST_SUBHEADER);

        if self.is_empty() {
            page.add_row(PageRow::Message(EMPTY_MESSAGE.to_string()));
            return page;
        }

        let mut number = 0;
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                page.add_row(PageRow::Blank);
            }
            page.add_row(PageRow::SectionHeader(section.league.clone()));
            for entry in &section.entries {
                page.add_row(PageRow::MatchCard {
                    number: number + 1,
                    title: entry.title.clone(),
                    date_time: entry.date_time.clone(),
                    status: entry.status.clone(),
                    selected: selected == Some(number),
                });
                number += 1;
            }
        }

        page
    }
}
