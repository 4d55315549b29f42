//! Marker trait for intents.

use std::fmt::Debug;

/// Marker trait for values that can be fed to a [`Reducer`](super::Reducer).
///
/// Intents are plain data: key presses translated by the input adapter,
/// scripted actions read by the replay adapter, or form edits.
pub trait Intent: Debug + 'static {}
