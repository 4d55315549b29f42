//! Terminal front end.
//!
//! The view renderer (`render`, `header`, `footer`, `layout`) redraws the
//! whole board from the current snapshot; the input adapter (`input`) maps
//! key presses to scoreboard actions and entry-form edits.

pub mod app;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
