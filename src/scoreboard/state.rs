//! Scoreboard snapshot.

use serde::Serialize;

use crate::mvi::UiState;

pub type MatchId = u64;

/// Id of the match every fresh scoreboard starts with.
pub const FIRST_MATCH_ID: MatchId = 1;

/// A single scoreboard entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Match {
    pub id: MatchId,
    pub total: u64,
}

impl Match {
    pub fn new(id: MatchId, total: u64) -> Self {
        Self { id, total }
    }
}

/// Immutable snapshot of all matches and the id counter.
///
/// Invariants (upheld by [`ScoreboardReducer`](super::ScoreboardReducer)):
/// - ids in `matches` are pairwise distinct
/// - `next_id` is strictly greater than every id ever handed out
///
/// Once `next_id` reaches `u64::MAX` the id space is exhausted and further
/// adds are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreboardState {
    pub(super) next_id: MatchId,
    pub(super) matches: Vec<Match>,
}

impl Default for ScoreboardState {
    fn default() -> Self {
        Self::initial()
    }
}

impl UiState for ScoreboardState {}

impl ScoreboardState {
    /// One seed match with id 1, counter at 2.
    pub fn initial() -> Self {
        Self {
            next_id: FIRST_MATCH_ID + 1,
            matches: vec![Match::new(FIRST_MATCH_ID, 0)],
        }
    }

    /// Build a snapshot from parts.
    ///
    /// Returns `None` if the parts break an invariant (duplicate ids, or an id
    /// not below `next_id`).
    pub fn from_parts(next_id: MatchId, matches: Vec<Match>) -> Option<Self> {
        for (idx, m) in matches.iter().enumerate() {
            if m.id >= next_id || matches[..idx].iter().any(|other| other.id == m.id) {
                return None;
            }
        }
        Some(Self { next_id, matches })
    }

    pub fn next_id(&self) -> MatchId {
        self.next_id
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn get(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn position(&self, id: MatchId) -> Option<usize> {
        self.matches.iter().position(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Sum of all totals, saturating.
    pub fn grand_total(&self) -> u64 {
        self.matches
            .iter()
            .fold(0u64, |acc, m| acc.saturating_add(m.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_seeded_with_one_match() {
        let state = ScoreboardState::default();
        assert_eq!(state.next_id(), 2);
        assert_eq!(state.matches(), &[Match::new(1, 0)]);
    }

    #[test]
    fn from_parts_rejects_duplicate_ids() {
        let parts = vec![Match::new(1, 0), Match::new(1, 3)];
        assert!(ScoreboardState::from_parts(5, parts).is_none());
    }

    #[test]
    fn from_parts_rejects_id_at_or_above_counter() {
        assert!(ScoreboardState::from_parts(3, vec![Match::new(3, 0)]).is_none());
        assert!(ScoreboardState::from_parts(4, vec![Match::new(3, 0)]).is_some());
    }

    #[test]
    fn grand_total_saturates() {
        let state =
            ScoreboardState::from_parts(3, vec![Match::new(1, u64::MAX), Match::new(2, 7)])
                .unwrap();
        assert_eq!(state.grand_total(), u64::MAX);
    }

    #[test]
    fn lookup_by_id() {
        let state =
            ScoreboardState::from_parts(9, vec![Match::new(4, 2), Match::new(8, 5)]).unwrap();
        assert_eq!(state.get(8), Some(&Match::new(8, 5)));
        assert_eq!(state.position(8), Some(1));
        assert!(state.get(1).is_none());
    }

    #[test]
    fn serializes_as_plain_json() {
        let json = serde_json::to_value(ScoreboardState::initial()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "next_id": 2, "matches": [{ "id": 1, "total": 0 }] })
        );
    }
}
