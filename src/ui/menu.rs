use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Palette;

/// Draws the board-filled screen as a centered popup.
pub fn render_win_menu(frame: &mut Frame<'_>, area: Rect, length: usize, palette: &Palette) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("BOARD CLEARED").style(
            Style::new()
                .fg(palette.snake)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Length: {length}")),
        Line::from(""),
        Line::from("[Enter]/[Space] Play again"),
        Line::from("[Esc]/[Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .title(" you win ")
                    .border_style(Style::new().fg(palette.border)),
            ),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
