use crate::data_fetcher::models::{DataSource, Match, MatchId, assign_ids};
use chrono::{DateTime, Local};

/// Immutable result of one committed fetch cycle.
///
/// The whole collection is replaced on every cycle; nothing is merged with
/// the previous snapshot.
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    /// Monotonically increasing, starting at 1 for the first commit.
    pub generation: u64,
    pub matches: Vec<Match>,
    pub source: DataSource,
    pub fetched_at: DateTime<Local>,
    ids: Vec<MatchId>,
}

impl FeedSnapshot {
    pub fn new(generation: u64, matches: Vec<Match>, source: DataSource) -> Self {
        Self {
            generation,
            ids: assign_ids(&matches),
            matches,
            source,
            fetched_at: Local::now(),
        }
    }

    /// Ids of `matches`, index for index. Unique within the snapshot.
    pub fn ids(&self) -> &[MatchId] {
        &self.ids
    }

    /// Resolves a fixture by the id its card carries.
    pub fn find(&self, id: MatchId) -> Option<&Match> {
        self.ids
            .iter()
            .position(|&candidate| candidate == id)
            .and_then(|index| self.matches.get(index))
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::fallback_matches;

    #[test]
    fn test_find_by_id() {
        let matches = fallback_matches();
        let wanted = matches[1].id();
        let snapshot = FeedSnapshot::new(1, matches, DataSource::Live);

        let found = snapshot.find(wanted).unwrap();
        assert_eq!(found.home_team, "Alianza Lima");
    }

    #[test]
    fn test_find_repeated_fixture_by_occurrence() {
        let mut matches = fallback_matches();
        let mut repeat = matches[0].clone();
        repeat.analysis = "Segundo encuentro".to_string();
        matches.push(repeat);
        let snapshot = FeedSnapshot::new(1, matches, DataSource::Live);

        let first = snapshot.find(snapshot.ids()[0]).unwrap();
        let third = snapshot.find(snapshot.ids()[2]).unwrap();
        assert_ne!(snapshot.ids()[0], snapshot.ids()[2]);
        assert_eq!(first.analysis, snapshot.matches[0].analysis);
        assert_eq!(third.analysis, "Segundo encuentro");
    }

    #[test]
    fn test_find_unknown_id() {
        let snapshot = FeedSnapshot::new(1, fallback_matches(), DataSource::Live);
        assert!(snapshot.find(MatchId::derive("x", "y", "z")).is_none());
        assert!(!snapshot.is_empty());
    }
}
