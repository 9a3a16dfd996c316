use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Palette;
use crate::game::GameState;

/// Driver-side values shown next to the engine state.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub ticks_per_second: u32,
}

/// Renders the single status row and returns the play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    palette: &Palette,
    info: HudInfo,
) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(status_line(state, palette, info))
            .alignment(Alignment::Center)
            .style(Style::new().fg(palette.hud)),
        status_area,
    );

    play_area
}

fn status_line(state: &GameState, palette: &Palette, info: HudInfo) -> Line<'static> {
    let board = state.board();
    let value = Style::new().fg(palette.snake).add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::raw("Length "),
        Span::styled(state.snake.len().to_string(), value),
        Span::raw("  Best "),
        Span::styled(state.best_length.to_string(), value),
        Span::raw("  Resets "),
        Span::styled(state.resets.to_string(), value),
        Span::raw("  Speed "),
        Span::styled(format!("{} tps", info.ticks_per_second), value),
        Span::raw(format!(
            "  {}x{}  [Esc] quit",
            board.grid_width(),
            board.grid_height()
        )),
    ])
}
