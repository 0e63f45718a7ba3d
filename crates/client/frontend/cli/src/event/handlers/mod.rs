//! Event loop handlers split by concern.
//!
//! - `input`: keyboard and mouse events
//! - `rendering`: drawing the current view model

mod input;
mod rendering;
