//! Terminal UI frontend for Minus One.
//!
//! This crate provides a terminal-based user interface for the game.
//! It implements the `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! CliFrontend is a thin presentation layer that:
//! - Borrows the [`client_bootstrap::GameSession`] for the duration of a run
//! - Decodes keys and mouse clicks into game commands
//! - Renders a view-model snapshot once per frame

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::CliConfig;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
