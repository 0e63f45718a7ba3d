//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, sprite assets and the game session that
//! CLI or other front-end crates drive frame by frame.
pub mod assets;
pub mod builder;
pub mod config;
pub mod session;

pub use assets::{AssetError, Sprite, SpriteSet};
pub use builder::SessionBuilder;
pub use config::BootstrapConfig;
pub use session::{GameEvent, GameSession};
