//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use scoreboard::scoreboard::{Match, MatchId, ScoreboardState};
use std::path::PathBuf;
use tempfile::TempDir;

/// Build a snapshot from `(id, total)` pairs.
pub fn state(next_id: MatchId, matches: &[(MatchId, u64)]) -> ScoreboardState {
    ScoreboardState::from_parts(
        next_id,
        matches.iter().map(|&(id, total)| Match::new(id, total)).collect(),
    )
    .expect("valid scoreboard state")
}

/// A handful of differently shaped snapshots for property-style loops.
pub fn sample_states() -> Vec<ScoreboardState> {
    vec![
        ScoreboardState::initial(),
        state(1, &[]),
        state(9, &[]),
        state(4, &[(1, 0), (2, 5), (3, 17)]),
        state(12, &[(11, 3), (2, 0), (7, 100)]),
        state(30, &[(5, u64::MAX), (29, 1)]),
    ]
}

/// Write `content` to a file inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
