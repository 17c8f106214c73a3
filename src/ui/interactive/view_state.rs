//! Which page the interactive UI shows and what it was built from.
//!
//! The list and the detail page always render from one snapshot. A snapshot
//! that arrives while the detail page is open is held back and adopted when
//! the user returns to the list, so the detail never switches fixtures under
//! the reader.

use crate::constants::ui::{PAGE_NUMBER, TITLE};
use crate::data_fetcher::models::MatchId;
use crate::feed::FeedSnapshot;
use crate::teletext_ui::match_detail::DETAIL_CONTROLS;
use crate::teletext_ui::match_list::LIST_CONTROLS;
use crate::teletext_ui::{MatchListView, PageRow, TeletextPage, populate_matches, show_detail};
use std::sync::Arc;

use super::input_handler::UiAction;

pub const LOADING_MESSAGE: &str = "Cargando partidos...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    List,
    Detail(MatchId),
}

#[derive(Debug)]
pub struct ViewState {
    snapshot: Option<Arc<FeedSnapshot>>,
    pending: Option<Arc<FeedSnapshot>>,
    list: MatchListView,
    selected: usize,
    mode: ViewMode,
    detail_scroll: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            snapshot: None,
            pending: None,
            list: MatchListView::default(),
            selected: 0,
            mode: ViewMode::List,
            detail_scroll: 0,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Snapshot the current page is rendered from.
    pub fn snapshot(&self) -> Option<&Arc<FeedSnapshot>> {
        self.snapshot.as_ref()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn list(&self) -> &MatchListView {
        &self.list
    }

    /// Display index of the highlighted card.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_id(&self) -> Option<MatchId> {
        self.list.entry_at(self.selected).map(|e| e.id)
    }

    pub fn detail_scroll(&self) -> usize {
        self.detail_scroll
    }

    /// Takes a newly committed snapshot. Returns whether the page changed.
    pub fn adopt_snapshot(&mut self, snapshot: Arc<FeedSnapshot>) -> bool {
        if let ViewMode::Detail(_) = self.mode {
            tracing::debug!(
                "Holding snapshot generation {} until the detail page is closed",
                snapshot.generation
            );
            self.pending = Some(snapshot);
            return false;
        }
        self.apply_snapshot(snapshot);
        true
    }

    fn apply_snapshot(&mut self, snapshot: Arc<FeedSnapshot>) {
        let previous = self.selected_id();
        self.list = populate_matches(&snapshot.matches);
        self.selected = previous
            .and_then(|id| self.list.index_of(id))
            .unwrap_or_else(|| self.selected.min(self.list.len().saturating_sub(1)));
        self.snapshot = Some(snapshot);
    }

    /// Opens the detail page of `id` if the rendered snapshot holds it.
    pub fn show_detail(&mut self, id: MatchId) -> bool {
        let found = self.snapshot.as_ref().is_some_and(|s| s.find(id).is_some());
        if found {
            if let Some(index) = self.list.index_of(id) {
                self.selected = index;
            }
            self.mode = ViewMode::Detail(id);
            self.detail_scroll = 0;
        } else {
            tracing::warn!("Detail requested for unknown match {id}");
        }
        found
    }

    pub fn open_selected(&mut self) -> bool {
        match (self.mode, self.selected_id()) {
            (ViewMode::List, Some(id)) => self.show_detail(id),
            _ => false,
        }
    }

    /// Returns to the list. A snapshot held back while the detail page was
    /// open is adopted now.
    pub fn back(&mut self) -> bool {
        if self.mode == ViewMode::List {
            return false;
        }
        self.mode = ViewMode::List;
        self.detail_scroll = 0;
        if let Some(pending) = self.pending.take() {
            self.apply_snapshot(pending);
        }
        true
    }

    pub fn select_next(&mut self) -> bool {
        match self.mode {
            ViewMode::List if self.selected + 1 < self.list.len() => {
                self.selected += 1;
                true
            }
            ViewMode::Detail(_) => {
                self.detail_scroll += 1;
                true
            }
            _ => false,
        }
    }

    pub fn select_previous(&mut self) -> bool {
        match self.mode {
            ViewMode::List if self.selected > 0 => {
                self.selected -= 1;
                true
            }
            ViewMode::Detail(_) if self.detail_scroll > 0 => {
                self.detail_scroll -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn clamp_scroll(&mut self, max: usize) {
        self.detail_scroll = self.detail_scroll.min(max);
    }

    /// Applies a navigation action. Returns whether the page changed.
    /// Quit and refresh are handled by the caller.
    pub fn apply(&mut self, action: UiAction) -> bool {
        match action {
            UiAction::SelectNext => self.select_next(),
            UiAction::SelectPrevious => self.select_previous(),
            UiAction::OpenDetail => self.open_selected(),
            UiAction::Back => self.back(),
            UiAction::Quit | UiAction::Refresh => false,
        }
    }

    /// Builds the page for the current mode.
    pub fn build_page(&self) -> TeletextPage {
        let Some(snapshot) = &self.snapshot else {
            let mut page = TeletextPage::new(PAGE_NUMBER, TITLE, "");
            page.add_row(PageRow::Message(LOADING_MESSAGE.to_string()));
            page.set_controls("q=Salir");
            return page;
        };

        let detail = match self.mode {
            ViewMode::Detail(id) => show_detail(snapshot, id),
            ViewMode::List => None,
        };

        let mut page = match detail {
            Some(detail) => {
                let mut page = detail.to_page();
                page.set_controls(DETAIL_CONTROLS);
                page.set_scroll(self.detail_scroll);
                page
            }
            None => {
                let mut page = self.list.to_page(Some(self.selected));
                page.set_controls(LIST_CONTROLS);
                page
            }
        };
        page.set_updated_at(snapshot.fetched_at);
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::{DataSource, Match, fallback_matches};

    fn snapshot(generation: u64, matches: Vec<Match>) -> Arc<FeedSnapshot> {
        Arc::new(FeedSnapshot::new(generation, matches, DataSource::Live))
    }

    fn renamed(home: &str) -> Match {
        let mut m = fallback_matches().remove(0);
        m.home_team = home.to_string();
        m
    }

    #[test]
    fn test_loading_page_before_first_snapshot() {
        let state = ViewState::new();
        let page = state.build_page();
        assert_eq!(
            page.rows(),
            &[PageRow::Message(LOADING_MESSAGE.to_string())]
        );
        assert!(state.selected_id().is_none());
    }

    #[test]
    fn test_open_detail_then_back_keeps_collection() {
        let mut state = ViewState::new();
        let snap = snapshot(1, fallback_matches());
        state.adopt_snapshot(Arc::clone(&snap));

        assert!(state.apply(UiAction::SelectNext));
        assert!(state.apply(UiAction::OpenDetail));
        assert_eq!(state.mode(), ViewMode::Detail(snap.matches[1].id()));
        assert_eq!(state.build_page().subheader(), "ALIANZA LIMA VS. MELGAR");

        assert!(state.apply(UiAction::Back));
        assert_eq!(state.mode(), ViewMode::List);
        assert_eq!(state.snapshot().unwrap().matches, fallback_matches());
        assert_eq!(state.selected(), 1);
        assert_eq!(
            state.list().entries().map(|e| e.position).collect::<Vec<_>>(),
            vec![0, 1]
        );
    }

    #[test]
    fn test_snapshot_held_back_while_detail_open() {
        let mut state = ViewState::new();
        let first = snapshot(1, fallback_matches());
        state.adopt_snapshot(Arc::clone(&first));
        let id = first.matches[0].id();
        assert!(state.show_detail(id));

        let second = snapshot(2, vec![renamed("Cienciano")]);
        assert!(!state.adopt_snapshot(second));
        assert!(state.has_pending());
        assert_eq!(state.snapshot().unwrap().generation, 1);
        assert_eq!(
            state.build_page().subheader(),
            "UNIVERSITARIO VS. SPORTING CRISTAL"
        );

        state.back();
        assert!(!state.has_pending());
        assert_eq!(state.snapshot().unwrap().generation, 2);
        assert_eq!(state.list().len(), 1);
    }

    #[test]
    fn test_selection_follows_match_across_snapshots() {
        let mut state = ViewState::new();
        state.adopt_snapshot(snapshot(1, fallback_matches()));
        state.select_next();
        let followed = state.selected_id();

        let mut reordered = fallback_matches();
        reordered.insert(0, renamed("Cienciano"));
        state.adopt_snapshot(snapshot(2, reordered));

        assert_eq!(state.selected_id(), followed);
        assert_eq!(state.selected(), 2);
    }

    #[test]
    fn test_selection_clamped_when_match_disappears() {
        let mut state = ViewState::new();
        state.adopt_snapshot(snapshot(1, fallback_matches()));
        state.select_next();
        state.adopt_snapshot(snapshot(2, vec![renamed("Cienciano")]));
        assert_eq!(state.selected(), 0);

        state.adopt_snapshot(snapshot(3, Vec::new()));
        assert_eq!(state.selected(), 0);
        assert!(!state.open_selected());
    }

    #[test]
    fn test_repeated_fixture_opens_its_own_detail() {
        let mut repeat = fallback_matches().remove(0);
        repeat.analysis = "Segundo encuentro".to_string();
        let mut matches = fallback_matches();
        matches.truncate(1);
        matches.push(repeat);

        let mut state = ViewState::new();
        state.adopt_snapshot(snapshot(1, matches));
        state.select_next();
        assert!(state.apply(UiAction::OpenDetail));
        assert_eq!(state.selected(), 1);

        let ViewMode::Detail(id) = state.mode() else {
            panic!("detail page should be open");
        };
        let shown = show_detail(state.snapshot().unwrap(), id).unwrap();
        assert_eq!(shown.analysis, "Segundo encuentro");
        assert!(state
            .build_page()
            .rows()
            .contains(&PageRow::Text("Segundo encuentro".to_string())));
    }

    #[test]
    fn test_show_detail_unknown_id_stays_on_list() {
        let mut state = ViewState::new();
        state.adopt_snapshot(snapshot(1, fallback_matches()));
        assert!(!state.show_detail(MatchId::derive("a", "b", "c")));
        assert_eq!(state.mode(), ViewMode::List);
        assert!(!state.back());
    }

    #[test]
    fn test_selection_bounds_and_detail_scroll() {
        let mut state = ViewState::new();
        state.adopt_snapshot(snapshot(1, fallback_matches()));
        assert!(!state.select_previous());
        assert!(state.select_next());
        assert!(!state.select_next());

        state.open_selected();
        assert!(!state.select_previous());
        state.select_next();
        state.select_next();
        assert_eq!(state.detail_scroll(), 2);
        state.clamp_scroll(1);
        assert_eq!(state.detail_scroll(), 1);
        state.back();
        assert_eq!(state.detail_scroll(), 0);
    }
}
