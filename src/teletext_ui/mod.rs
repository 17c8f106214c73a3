// src/teletext_ui/mod.rs - Teletext-style pages for the list and detail views

pub mod colors;
pub mod match_detail;
pub mod match_list;
pub mod page;

pub use match_detail::{MatchDetailView, show_detail};
pub use match_list::{LeagueSection, ListEntry, MatchListView, populate_matches};
pub use page::{PageRow, TeletextPage, wrap_text};
