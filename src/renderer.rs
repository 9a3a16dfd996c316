use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Clear};

use crate::board::{Board, Cell};
use crate::config::{GLYPH_CELL, GLYPH_EMPTY, GLYPH_FOOD, Palette, TERMINAL_COLUMNS_PER_CELL};
use crate::game::{GameState, GameStatus, TickOutcome};
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::render_win_menu;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, palette: &Palette, hud_info: HudInfo) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, palette, hud_info);
    let board_area = board_rect(play_area, state.board());

    let block = Block::bordered()
        .border_style(Style::new().fg(palette.border))
        .style(Style::new().bg(palette.background));
    let inner = block.inner(board_area);

    if state.last_outcome == Some(TickOutcome::Reset) {
        frame.render_widget(Clear, board_area);
    }
    frame.render_widget(block, board_area);

    erase_vacated_cell(frame, inner, state, palette);
    render_food(frame, inner, state, palette);
    render_snake(frame, inner, state, palette);

    if state.status == GameStatus::Won {
        render_win_menu(frame, board_area, state.snake.len(), palette);
    }
}

/// Centers the bordered board inside `area`, shrinking it when the terminal
/// is too small.
#[must_use]
pub fn board_rect(area: Rect, board: Board) -> Rect {
    let columns = u16::try_from(board.grid_width())
        .unwrap_or(u16::MAX)
        .saturating_mul(TERMINAL_COLUMNS_PER_CELL)
        .saturating_add(2);
    let rows = u16::try_from(board.grid_height())
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let width = columns.min(area.width);
    let height = rows.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn erase_vacated_cell(frame: &mut Frame<'_>, inner: Rect, state: &GameState, palette: &Palette) {
    let Some(vacated) = state.snake.last_removed() else {
        return;
    };
    let Some((x, y)) = cell_to_terminal(inner, state.board(), vacated) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_EMPTY, Style::new().bg(palette.background));
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, palette: &Palette) {
    let Some((x, y)) = cell_to_terminal(inner, state.board(), state.food.position) else {
        return;
    };

    frame.buffer_mut().set_string(
        x,
        y,
        GLYPH_FOOD,
        Style::new().fg(palette.food).bg(palette.background),
    );
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, palette: &Palette) {
    let board = state.board();
    let buffer = frame.buffer_mut();

    // Tail first so the head is drawn last.
    for segment in state.snake.segments().skip(1) {
        if let Some((x, y)) = cell_to_terminal(inner, board, *segment) {
            buffer.set_string(
                x,
                y,
                GLYPH_CELL,
                Style::new().fg(palette.snake).bg(palette.background),
            );
        }
    }

    if let Some((x, y)) = cell_to_terminal(inner, board, state.snake.head()) {
        buffer.set_string(
            x,
            y,
            GLYPH_CELL,
            Style::new()
                .fg(palette.snake_head)
                .bg(palette.background)
                .add_modifier(Modifier::BOLD),
        );
    }
}

/// Maps a board cell to the top-left terminal column and row it is drawn at.
///
/// Returns `None` for cells off the board or outside the visible `inner`
/// area.
#[must_use]
pub fn cell_to_terminal(inner: Rect, board: Board, cell: Cell) -> Option<(u16, u16)> {
    if !board.contains(cell) {
        return None;
    }

    let (col, row) = board.to_grid(cell);
    let x_offset = u16::try_from(col)
        .ok()?
        .checked_mul(TERMINAL_COLUMNS_PER_CELL)?;
    let y_offset = u16::try_from(row).ok()?;

    let x = inner.x.checked_add(x_offset)?;
    let y = inner.y.checked_add(y_offset)?;
    if x.saturating_add(TERMINAL_COLUMNS_PER_CELL) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    use crate::board::{Board, Cell};
    use crate::config::{PALETTE_CLASSIC, ResetDirection};
    use crate::food::Food;
    use crate::game::{GameState, Rules, TickOutcome};
    use crate::input::Direction;
    use crate::snake::Snake;
    use crate::ui::hud::HudInfo;

    use super::{board_rect, cell_to_terminal, render};

    const HUD: HudInfo = HudInfo {
        ticks_per_second: 10,
    };

    const RULES: Rules = Rules {
        reset_direction: ResetDirection::Fixed,
        reroll_food_on_reset: true,
    };

    fn small_board() -> Board {
        Board::new(200, 100, 20).expect("valid board")
    }

    /// Inner board area of a 22x8 terminal: the HUD takes the last row.
    fn inner() -> Rect {
        let board_area = board_rect(Rect::new(0, 0, 22, 7), small_board());
        Rect::new(
            board_area.x + 1,
            board_area.y + 1,
            board_area.width - 2,
            board_area.height - 2,
        )
    }

    fn test_terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(22, 8)).expect("test terminal should build")
    }

    fn draw(terminal: &mut Terminal<TestBackend>, state: &GameState) {
        terminal
            .draw(|frame| render(frame, state, &PALETTE_CLASSIC, HUD))
            .expect("draw should succeed");
    }

    fn symbols_at(buffer: &Buffer, cell: Cell) -> (String, String) {
        let (x, y) =
            cell_to_terminal(inner(), small_board(), cell).expect("cell should be visible");
        let symbol = |column: u16| {
            buffer
                .cell((column, y))
                .map(|c| c.symbol().to_owned())
                .unwrap_or_default()
        };
        (symbol(x), symbol(x + 1))
    }

    #[test]
    fn cells_map_to_double_width_columns() {
        let inner = Rect::new(1, 1, 20, 5);
        let board = small_board();

        assert_eq!(cell_to_terminal(inner, board, Cell::new(0, 0)), Some((1, 1)));
        assert_eq!(
            cell_to_terminal(inner, board, Cell::new(180, 80)),
            Some((19, 5))
        );
        assert_eq!(cell_to_terminal(inner, board, Cell::new(200, 0)), None);
    }

    #[test]
    fn cells_outside_a_cramped_view_are_skipped() {
        let inner = Rect::new(0, 0, 6, 2);
        let board = small_board();

        assert_eq!(cell_to_terminal(inner, board, Cell::new(40, 20)), Some((4, 1)));
        assert_eq!(cell_to_terminal(inner, board, Cell::new(60, 0)), None);
        assert_eq!(cell_to_terminal(inner, board, Cell::new(0, 40)), None);
    }

    #[test]
    fn board_is_centered_and_clamped() {
        let board = small_board();

        assert_eq!(
            board_rect(Rect::new(0, 0, 42, 17), board),
            Rect::new(10, 5, 22, 7)
        );
        assert_eq!(
            board_rect(Rect::new(0, 0, 10, 4), board),
            Rect::new(0, 0, 10, 4)
        );
    }

    #[test]
    fn frame_shows_snake_and_food() {
        let mut state = GameState::new_with_seed(small_board(), RULES, 1);
        state.food = Food::new(Cell::new(0, 0));

        let mut terminal = test_terminal();
        draw(&mut terminal, &state);

        let buffer = terminal.backend().buffer();
        assert_eq!(
            symbols_at(buffer, state.snake.head()),
            ("█".to_owned(), "█".to_owned())
        );
        assert_eq!(
            symbols_at(buffer, Cell::new(0, 0)),
            ("▐".to_owned(), "▌".to_owned())
        );
    }

    #[test]
    fn vacated_tail_cell_is_painted_as_background() {
        let mut state = GameState::new_with_seed(small_board(), RULES, 2);
        state.food = Food::new(Cell::new(0, 0));
        let start = state.snake.head();

        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(state.snake.last_removed(), Some(start));

        let mut terminal = test_terminal();
        draw(&mut terminal, &state);

        let buffer = terminal.backend().buffer();
        assert_eq!(symbols_at(buffer, start), (" ".to_owned(), " ".to_owned()));

        let (x, y) =
            cell_to_terminal(inner(), small_board(), start).expect("cell should be visible");
        assert_eq!(
            buffer.cell((x, y)).map(|cell| cell.bg),
            Some(PALETTE_CLASSIC.background)
        );
    }

    #[test]
    fn reset_tick_leaves_no_trace_of_the_old_body() {
        let mut state = GameState::new_with_seed(small_board(), RULES, 3);
        state.food = Food::new(Cell::new(180, 0));
        state.snake = Snake::from_segments(
            vec![
                Cell::new(40, 40),
                Cell::new(20, 40),
                Cell::new(20, 60),
                Cell::new(40, 60),
                Cell::new(60, 60),
                Cell::new(60, 40),
            ],
            Direction::Down,
        );

        let mut terminal = test_terminal();
        draw(&mut terminal, &state);
        assert_eq!(
            symbols_at(terminal.backend().buffer(), Cell::new(20, 60)),
            ("█".to_owned(), "█".to_owned())
        );

        assert_eq!(state.tick(), TickOutcome::Reset);
        draw(&mut terminal, &state);

        let buffer = terminal.backend().buffer();
        let blank = (" ".to_owned(), " ".to_owned());
        for old in [
            Cell::new(40, 40),
            Cell::new(20, 40),
            Cell::new(20, 60),
            Cell::new(40, 60),
            Cell::new(60, 60),
            Cell::new(60, 40),
        ] {
            assert_eq!(symbols_at(buffer, old), blank, "old body cell {old:?}");
        }
        assert_eq!(
            symbols_at(buffer, small_board().center()),
            ("█".to_owned(), "█".to_owned())
        );
    }
}
