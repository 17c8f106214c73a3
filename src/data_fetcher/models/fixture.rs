use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Stable identifier of a fixture across refreshes.
///
/// Derived from home team, away team and kick-off text, so the same fixture
/// keeps its id when a refresh reorders or extends the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchId(u64);

impl MatchId {
    pub fn derive(home_team: &str, away_team: &str, date_time: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        home_team.hash(&mut hasher);
        away_team.hash(&mut hasher);
        date_time.hash(&mut hasher);
        MatchId(hasher.finish())
    }

    /// Id of the `n`-th repeat of a fixture within one collection. The first
    /// occurrence (`n == 0`) keeps the plain id.
    pub fn occurrence(self, n: usize) -> Self {
        if n == 0 {
            return self;
        }
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        n.hash(&mut hasher);
        MatchId(hasher.finish())
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Assigns an id to every match of a collection, in order.
///
/// Fixtures sharing teams and kick-off (e.g. two events that both fell back to
/// the placeholder names) get distinct ids by their occurrence count.
pub fn assign_ids(matches: &[Match]) -> Vec<MatchId> {
    let mut seen: HashMap<MatchId, usize> = HashMap::new();
    matches
        .iter()
        .map(|m| {
            let base = m.id();
            let count = seen.entry(base).or_insert(0);
            let id = base.occurrence(*count);
            *count += 1;
            id
        })
        .collect()
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TeamStats {
    pub victories: u32,
    /// Ordered best first, e.g. `"Valera (3)"`.
    pub top_scorers: Vec<String>,
    pub red_cards: u32,
    pub yellow_cards: u32,
    pub injured: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BettingInfo {
    /// Free-text sentence; the safe-bet heuristic reads this.
    pub recommendation: String,
    pub options: Vec<String>,
    pub assurance: String,
}

/// A scheduled fixture, normalized from the API or taken from the fallback set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub league: String,
    pub home_team: String,
    pub away_team: String,
    /// Loosely formatted kick-off, usually `YYYY-MM-DD HH:MM`.
    pub date_time: String,
    pub analysis: String,
    pub home_stats: TeamStats,
    pub away_stats: TeamStats,
    pub betting: BettingInfo,
    /// Upstream status label such as "Not Started", when one was sent.
    pub status: Option<String>,
}

impl Match {
    /// Id derived from the fixture alone. Use [`assign_ids`] when the match
    /// sits in a collection that may repeat it.
    pub fn id(&self) -> MatchId {
        MatchId::derive(&self.home_team, &self.away_team, &self.date_time)
    }

    /// `"Home vs. Away"` as shown on cards and the detail title.
    pub fn title(&self) -> String {
        format!("{} vs. {}", self.home_team, self.away_team)
    }
}
