use std::collections::HashSet;

use wrap_snake::board::{Board, Cell};
use wrap_snake::config::ResetDirection;
use wrap_snake::food::Food;
use wrap_snake::game::{GameState, GameStatus, Rules, TickOutcome};
use wrap_snake::input::{Direction, GameInput};

const RULES: Rules = Rules {
    reset_direction: ResetDirection::Fixed,
    reroll_food_on_reset: true,
};

fn board() -> Board {
    Board::new(640, 640, 20).expect("640x640/20 is a valid board")
}

#[test]
fn first_tick_eats_food_right_of_the_start() {
    let mut state = GameState::new_with_seed(board(), RULES, 42);
    assert_eq!(state.snake.head(), Cell::new(320, 320));
    assert_eq!(state.snake.direction(), Direction::Right);

    state.food = Food::new(Cell::new(340, 320));
    assert_eq!(state.snake.next_cell(&state.board()), Cell::new(340, 320));

    assert_eq!(state.tick(), TickOutcome::Grew);
    assert_eq!(
        state.snake.segments().copied().collect::<Vec<_>>(),
        vec![Cell::new(340, 320), Cell::new(320, 320)]
    );
    assert_ne!(state.food.position, Cell::new(340, 320));
    assert_ne!(state.food.position, Cell::new(320, 320));
}

#[test]
fn stepwise_turns_wrap_and_reverse_rejection() {
    let mut state = GameState::new_with_seed(board(), RULES, 7);
    state.food = Food::new(Cell::new(0, 0));

    // Reversal into the neck is dropped; the snake keeps heading right.
    state.apply_input(GameInput::Direction(Direction::Left));
    state.tick();
    assert_eq!(state.snake.head(), Cell::new(340, 320));

    state.apply_input(GameInput::Direction(Direction::Up));
    for _ in 0..16 {
        state.tick();
    }
    assert_eq!(state.snake.head(), Cell::new(340, 0));

    // One more step up wraps to the bottom row.
    state.tick();
    assert_eq!(state.snake.head(), Cell::new(340, 620));
    assert_eq!(state.snake.len(), 1);
    assert_eq!(state.status, GameStatus::Playing);
}

#[test]
fn long_random_session_keeps_invariants() {
    let mut state = GameState::new_with_seed(
        Board::new(200, 200, 20).expect("valid board"),
        Rules {
            reset_direction: ResetDirection::Random,
            reroll_food_on_reset: true,
        },
        2024,
    );
    let turns = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    for step in 0..5_000usize {
        if step % 3 == 0 {
            state.apply_input(GameInput::Direction(turns[(step / 3) % turns.len()]));
        }

        let before = state.snake.len();
        let outcome = state.tick();

        let unique: HashSet<_> = state.snake.segments().collect();
        assert_eq!(unique.len(), state.snake.len(), "body has duplicates");

        match outcome {
            TickOutcome::Moved => assert_eq!(state.snake.len(), before),
            TickOutcome::Grew => assert_eq!(state.snake.len(), before + 1),
            TickOutcome::Reset => assert_eq!(state.snake.len(), 1),
            TickOutcome::Won | TickOutcome::Idle => break,
        }

        assert!(!state.snake.occupies(state.food.position));
        assert!(state.board().contains(state.snake.head()));
    }
}
