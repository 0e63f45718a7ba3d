//! Widgets composing the game screen.
pub mod buttons;
pub mod footer;
pub mod header;
pub mod messages;
pub mod sprite;
pub mod stage;
