pub mod cli;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod replay;
pub mod scoreboard;
pub mod ui;
