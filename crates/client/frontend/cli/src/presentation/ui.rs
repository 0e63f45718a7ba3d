//! UI rendering with the view model.
//!
//! This module provides the main render entry point that composes all widgets
//! to create the complete terminal UI.
use anyhow::Result;
use client_bootstrap::SpriteSet;
use client_frontend_core::view_model::ViewModel;
use ratatui::{Frame, Terminal, backend::Backend};

use crate::presentation::{layout::ScreenLayout, theme::RatatuiTheme, widgets};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub sprites: &'a SpriteSet,
    pub message_panel_height: u16,
}

/// Draw one frame and return the layout it used, for mouse hit-testing.
pub fn render_with_view_model<B: Backend>(
    terminal: &mut Terminal<B>,
    ctx: &RenderContext,
) -> Result<ScreenLayout> {
    let mut layout = ScreenLayout::default();
    terminal.draw(|frame| {
        layout = render_frame(frame, ctx);
    })?;
    Ok(layout)
}

/// Render header, stage, buttons, messages and footer.
pub fn render_frame(frame: &mut Frame, ctx: &RenderContext) -> ScreenLayout {
    let theme = RatatuiTheme::new();
    let view_model = ctx.view_model;
    let layout = ScreenLayout::compute(
        frame.area(),
        ctx.message_panel_height,
        view_model.buttons.len(),
    );

    widgets::header::render(frame, layout.header, view_model, &theme);
    widgets::stage::render(frame, layout.stage, view_model, ctx.sprites, &theme);
    widgets::buttons::render(frame, &layout.buttons, &view_model.buttons, &theme);
    widgets::messages::render(frame, layout.messages, &view_model.messages, &theme);
    widgets::footer::render(frame, layout.footer, view_model, &theme);

    layout
}
