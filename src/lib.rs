//! # Connect Four
//!
//! A two-player Connect Four rules engine with a terminal front-end built on
//! Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine, engine
//! - [`ui`] — Terminal UI: game view and fall animation
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — Tracing subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
