//! Scoreboard actions.

use serde::{Deserialize, Serialize};

use super::state::MatchId;
use crate::mvi::Intent;

/// A requested change to the scoreboard.
///
/// The serialized form is an object tagged by `type`, e.g.
/// `{"type":"increment","id":2,"value":5}`. Any tag outside the known set
/// deserializes to [`ScoreboardAction::Unrecognized`], which the reducer
/// ignores.
///
/// `value` is unsigned: callers normalise raw input (see
/// [`parse_amount`](crate::ui::input::parse_amount)) before building
/// increment or decrement actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScoreboardAction {
    /// Zero every match's total.
    #[serde(rename = "reset")]
    Reset,
    /// Append a new match with the next id.
    #[serde(rename = "add")]
    AddMatch {
        #[serde(default)]
        total: u64,
    },
    /// Remove the match with this id.
    #[serde(rename = "remove")]
    DeleteMatch { id: MatchId },
    #[serde(rename = "increment")]
    Increment { id: MatchId, value: u64 },
    /// Subtract from one total, floored at zero.
    #[serde(rename = "decrement")]
    Decrement { id: MatchId, value: u64 },
    #[serde(other)]
    Unrecognized,
}

impl Intent for ScoreboardAction {}

impl ScoreboardAction {
    pub fn reset() -> Self {
        Self::Reset
    }

    pub fn add_match() -> Self {
        Self::AddMatch { total: 0 }
    }

    pub fn delete_match(id: MatchId) -> Self {
        Self::DeleteMatch { id }
    }

    pub fn increment(id: MatchId, value: u64) -> Self {
        Self::Increment { id, value }
    }

    pub fn decrement(id: MatchId, value: u64) -> Self {
        Self::Decrement { id, value }
    }

    /// Wire tag, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::AddMatch { .. } => "add",
            Self::DeleteMatch { .. } => "remove",
            Self::Increment { .. } => "increment",
            Self::Decrement { .. } => "decrement",
            Self::Unrecognized => "unrecognized",
        }
    }
}
