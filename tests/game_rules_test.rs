//! Rule-level tests for the game core: steering, movement, growth, collisions.

use tui_snake::core::{Game, GameState, SequenceRng, SimpleRng, TickOutcome};
use tui_snake::types::{Cell, Collision, Direction, Status, BOARD_SIZE};

fn cells(raw: &[(i32, i32)]) -> Vec<Cell> {
    raw.iter().map(|&(x, y)| Cell::new(x, y)).collect()
}

fn body(state: &GameState) -> Vec<Cell> {
    state.snake().iter().copied().collect()
}

/// Random-walk a seeded game, steering each tick, and hand every
/// pre-tick/post-tick pair to `check`.
fn walk(seed: u32, ticks: usize, mut check: impl FnMut(&GameState, &GameState, TickOutcome)) {
    let mut steer = SimpleRng::new(seed.wrapping_mul(31));
    let mut game = Game::new(SimpleRng::new(seed));
    for _ in 0..ticks {
        let dir = Direction::ALL[steer.next_range(4) as usize];
        game.set_direction(dir);
        let before = game.state().clone();
        let outcome = game.tick();
        check(&before, game.state(), outcome);
        if game.game_over() {
            break;
        }
    }
}

#[test]
fn opposite_requests_never_change_pending() {
    for current in Direction::ALL {
        for requested in Direction::ALL {
            let mut state = GameState::from_parts(cells(&[(10, 10)]), current, Cell::new(0, 0)).unwrap();
            let accepted = state.set_direction(requested);
            if requested == current.opposite() {
                assert!(!accepted);
                assert_eq!(state.pending_direction(), current);
            } else {
                assert!(accepted);
                assert_eq!(state.pending_direction(), requested);
            }
        }
    }
}

#[test]
fn plain_moves_keep_length_and_shift_body() {
    for seed in 1..40 {
        walk(seed, 200, |before, after, outcome| {
            if outcome != TickOutcome::Moved {
                return;
            }
            let prev = body(before);
            let next = body(after);
            assert_eq!(next.len(), prev.len());
            assert_eq!(next[0], before.next_head());
            assert_eq!(&next[1..], &prev[..prev.len() - 1]);
            assert_eq!(after.food(), before.food());
        });
    }
}

#[test]
fn eating_grows_by_one_and_places_food_on_board() {
    let mut meals = 0;
    for seed in 1..200 {
        walk(seed, 400, |before, after, outcome| {
            if let TickOutcome::Ate { food } = outcome {
                meals += 1;
                let prev = body(before);
                let next = body(after);
                assert_eq!(next.len(), prev.len() + 1);
                assert_eq!(next[0], before.food());
                assert_eq!(&next[1..], &prev[..]);
                assert_eq!(after.food(), food);
                assert!(food.in_bounds());
                assert_eq!(after.score(), before.score() + 1);
            }
        });
    }
    // The very first food sits five cells ahead, so some walks must reach it.
    assert!(meals > 0);
}

#[test]
fn collisions_end_the_game_without_moving() {
    let mut endings = 0;
    for seed in 1..60 {
        walk(seed, 2_000, |before, after, outcome| {
            if let TickOutcome::Collided(kind) = outcome {
                endings += 1;
                let head = before.next_head();
                match kind {
                    Collision::Wall => assert!(!head.in_bounds()),
                    Collision::SelfBite => {
                        assert!(head.in_bounds());
                        assert!(before.snake().iter().skip(1).any(|&c| c == head));
                    }
                }
                assert_eq!(after.status(), Status::GameOver);
                assert_eq!(body(after), body(before));
                assert_eq!(after.food(), before.food());
            }
        });
    }
    assert!(endings > 0);
}

#[test]
fn live_snake_cells_stay_distinct_and_on_board() {
    for seed in 1..40 {
        walk(seed, 500, |_, after, _| {
            let cells = body(after);
            for (i, a) in cells.iter().enumerate() {
                assert!(a.in_bounds());
                assert!(!cells[i + 1..].contains(a));
            }
        });
    }
}

#[test]
fn scenario_eat_food_to_the_right() {
    let state = GameState::from_parts(cells(&[(15, 15)]), Direction::Right, Cell::new(16, 15)).unwrap();
    let mut game = Game::from_state(state, SequenceRng::from_cells(&[Cell::new(2, 27)]));

    assert_eq!(game.tick(), TickOutcome::Ate { food: Cell::new(2, 27) });
    assert!(!game.game_over());
    assert_eq!(body(game.state()), cells(&[(16, 15), (15, 15)]));
    assert_eq!(game.state().food(), Cell::new(2, 27));
}

#[test]
fn scenario_leave_left_edge() {
    let state = GameState::from_parts(cells(&[(0, 15)]), Direction::Left, Cell::new(20, 15)).unwrap();
    assert_eq!(state.next_head(), Cell::new(-1, 15));

    let mut game = Game::from_state(state, SimpleRng::new(1));
    assert_eq!(game.tick(), TickOutcome::Collided(Collision::Wall));
    assert!(game.game_over());
    assert_eq!(body(game.state()), cells(&[(0, 15)]));
}

#[test]
fn scenario_turn_back_into_body() {
    let state = GameState::from_parts(
        cells(&[(5, 5), (5, 6), (5, 7)]),
        Direction::Down,
        Cell::new(20, 15),
    )
    .unwrap();
    assert_eq!(state.next_head(), Cell::new(5, 6));

    let mut game = Game::from_state(state, SimpleRng::new(1));
    assert_eq!(game.tick(), TickOutcome::Collided(Collision::SelfBite));
    assert!(game.game_over());
}

#[test]
fn game_over_is_terminal() {
    let state = GameState::from_parts(cells(&[(BOARD_SIZE - 1, 3)]), Direction::Right, Cell::new(0, 0)).unwrap();
    let mut game = Game::from_state(state, SimpleRng::new(1));
    assert!(game.tick().is_terminal());

    let frozen = game.snapshot();
    for dir in Direction::ALL {
        game.set_direction(dir);
        assert_eq!(game.tick(), TickOutcome::Halted);
    }
    assert_eq!(game.snapshot(), frozen);
}

#[test]
fn seeded_games_replay_identically() {
    let play = |seed| {
        let mut game = Game::new(SimpleRng::new(seed));
        let mut foods = Vec::new();
        let turns = [Direction::Down, Direction::Right, Direction::Up, Direction::Right];
        for (i, dir) in turns.iter().cycle().take(40).enumerate() {
            if i % 3 == 0 {
                game.set_direction(*dir);
            }
            if let TickOutcome::Ate { food } = game.tick() {
                foods.push(food);
            }
        }
        (game.snapshot(), foods)
    };
    assert_eq!(play(77), play(77));
}
