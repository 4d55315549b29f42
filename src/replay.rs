//! Headless input adapter: JSON-lines action scripts.
//!
//! One action object per line, e.g.
//!
//! ```text
//! # two matches, then score
//! {"type":"add"}
//! {"type":"increment","id":2,"value":5}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Unknown `type` tags
//! become [`ScoreboardAction::Unrecognized`] and leave the state unchanged.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::scoreboard::{ScoreboardAction, ScoreboardState, ScoreboardStore};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read replay script '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid action on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse every action in `script`, failing on the first malformed line.
pub fn parse_script(script: &str) -> Result<Vec<ScoreboardAction>, ReplayError> {
    script
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(idx, line)| {
            serde_json::from_str(line.trim()).map_err(|source| ReplayError::Parse {
                line: idx + 1,
                source,
            })
        })
        .collect()
}

/// Dispatch `script` into a fresh store and return the final snapshot.
///
/// The whole script is parsed before anything is dispatched.
pub fn run_script(script: &str) -> Result<ScoreboardState, ReplayError> {
    let actions = parse_script(script)?;
    let mut store = ScoreboardStore::new();
    for action in actions {
        store.dispatch(action);
    }
    info!(
        dispatched = store.revision(),
        matches = store.state().len(),
        "replay finished"
    );
    Ok(store.into_state())
}

pub fn run_file(path: &Path) -> Result<ScoreboardState, ReplayError> {
    let script = fs::read_to_string(path).map_err(|source| ReplayError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    run_script(&script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blank_lines() {
        let actions = parse_script("# header\n\n{\"type\":\"reset\"}\n   \n").unwrap();
        assert_eq!(actions, vec![ScoreboardAction::Reset]);
    }

    #[test]
    fn reports_line_number_of_bad_action() {
        let err = parse_script("{\"type\":\"add\"}\n# note\n{\"type\":\"increment\"}\n").unwrap_err();
        match err {
            ReplayError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn bad_script_dispatches_nothing() {
        assert!(run_script("{\"type\":\"add\"}\nnot json\n").is_err());
    }
}
