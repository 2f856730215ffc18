use fleetcore::{
    Board, Cell, Direction, DirectionSet, Fleet, Grid, GuessResult, Ship, TargetingState,
    TargetingStrategy,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn c(x: usize, y: usize) -> Cell {
    Cell::new(x, y)
}

fn fire(strategy: &mut TargetingStrategy, board: &mut Board, cell: Cell) -> GuessResult {
    let result = board.attack(cell).unwrap();
    strategy.receive_result(result.is_hit(), result.has_sunk());
    result
}

#[test]
fn test_vertical_ship_scenario() {
    let grid = Grid::new(10, 10).unwrap();
    let fleet = Fleet::new(vec![Ship::new(c(5, 5), c(5, 7)).unwrap()]);
    let mut board = Board::new(grid, fleet).unwrap();
    let mut strategy = TargetingStrategy::new(grid);
    let mut rng = SmallRng::seed_from_u64(0);

    assert_eq!(strategy.target(c(5, 5)), Some(c(5, 5)));
    assert_eq!(fire(&mut strategy, &mut board, c(5, 5)), GuessResult::Hit);
    assert!(matches!(
        strategy.state(),
        TargetingState::Probing { anchor, .. } if anchor == c(5, 5)
    ));

    let expected = [
        (c(4, 5), GuessResult::Miss),
        (c(6, 5), GuessResult::Miss),
        (c(5, 4), GuessResult::Miss),
        (c(5, 6), GuessResult::Hit),
        (c(5, 7), GuessResult::Sink),
    ];
    for (cell, outcome) in expected {
        let selected = strategy.select_target(&mut rng).unwrap();
        assert_eq!(selected, cell);
        assert_eq!(fire(&mut strategy, &mut board, selected), outcome);
    }

    assert_eq!(strategy.state(), TargetingState::Hunting);
    assert!(board.all_ships_sunk());
}

#[test]
fn test_misses_exhaust_directions() {
    let grid = Grid::new(10, 10).unwrap();
    let mut strategy = TargetingStrategy::new(grid);
    let mut rng = SmallRng::seed_from_u64(1);

    strategy.target(c(5, 5)).unwrap();
    strategy.receive_result(true, false);
    assert_eq!(strategy.select_target(&mut rng), Some(c(4, 5)));
    strategy.receive_result(false, false);
    assert_eq!(strategy.select_target(&mut rng), Some(c(6, 5)));
    strategy.receive_result(false, false);

    match strategy.state() {
        TargetingState::Probing {
            anchor,
            direction,
            exhausted,
        } => {
            assert_eq!(anchor, c(5, 5));
            assert_eq!(direction, None);
            let expected: DirectionSet = [Direction::Left, Direction::Right].into_iter().collect();
            assert_eq!(exhausted, expected);
        }
        other => panic!("expected probing, got {:?}", other),
    }
}

#[test]
fn test_continue_then_reverse_from_anchor() {
    // Horizontal ship (3,4)-(6,4), first hit in its middle at (5,4).
    let grid = Grid::new(10, 10).unwrap();
    let fleet = Fleet::new(vec![Ship::new(c(3, 4), c(6, 4)).unwrap()]);
    let mut board = Board::new(grid, fleet).unwrap();
    let mut strategy = TargetingStrategy::new(grid);
    let mut rng = SmallRng::seed_from_u64(2);

    strategy.target(c(5, 4)).unwrap();
    fire(&mut strategy, &mut board, c(5, 4));

    let expected = [
        (c(4, 4), GuessResult::Hit),
        (c(3, 4), GuessResult::Hit),
        // (2,4) misses, which rules out left
        (c(2, 4), GuessResult::Miss),
        // scan resumes at the anchor; right is next in priority
        (c(6, 4), GuessResult::Sink),
    ];
    for (cell, outcome) in expected {
        let selected = strategy.select_target(&mut rng).unwrap();
        assert_eq!(selected, cell);
        assert_eq!(fire(&mut strategy, &mut board, selected), outcome);
    }
    assert_eq!(strategy.state(), TargetingState::Hunting);
}

#[test]
fn test_blocked_direction_flips_to_opposite() {
    // Ship (1,3)-(3,3) along the left edge, first hit at (2,3).
    let grid = Grid::new(10, 10).unwrap();
    let fleet = Fleet::new(vec![Ship::new(c(1, 3), c(3, 3)).unwrap()]);
    let mut board = Board::new(grid, fleet).unwrap();
    let mut strategy = TargetingStrategy::new(grid);
    let mut rng = SmallRng::seed_from_u64(3);

    strategy.target(c(2, 3)).unwrap();
    fire(&mut strategy, &mut board, c(2, 3));

    // left from the anchor hits, then the grid edge stops it
    assert_eq!(strategy.select_target(&mut rng), Some(c(1, 3)));
    assert_eq!(fire(&mut strategy, &mut board, c(1, 3)), GuessResult::Hit);

    // the step past (1,3) is off the grid: reverse from the anchor
    assert_eq!(strategy.select_target(&mut rng), Some(c(3, 3)));
    match strategy.state() {
        TargetingState::Probing {
            direction,
            exhausted,
            ..
        } => {
            assert_eq!(direction, Some(Direction::Right));
            assert!(exhausted.contains(Direction::Left));
        }
        other => panic!("expected probing, got {:?}", other),
    }
    assert_eq!(fire(&mut strategy, &mut board, c(3, 3)), GuessResult::Sink);
    assert_eq!(strategy.state(), TargetingState::Hunting);
}

#[test]
fn test_exhausted_anchor_falls_back_to_hunting() {
    // Anchor in the top-left corner. Left and up are off the grid, down was
    // already attacked while hunting and right misses: nothing is left.
    let grid = Grid::new(10, 10).unwrap();
    let mut strategy = TargetingStrategy::new(grid);
    let mut rng = SmallRng::seed_from_u64(4);

    strategy.target(c(1, 2)).unwrap();
    strategy.receive_result(false, false);
    strategy.target(c(1, 1)).unwrap();
    strategy.receive_result(true, false);

    assert_eq!(strategy.select_target(&mut rng), Some(c(2, 1)));
    strategy.receive_result(false, false);

    let next = strategy.select_target(&mut rng).unwrap();
    assert_eq!(strategy.state(), TargetingState::Hunting);
    assert!(![c(1, 1), c(1, 2), c(2, 1)].contains(&next));
    assert!(grid.contains(next));
    assert_eq!(strategy.tracker().len(), 4);
}

#[test]
fn test_hunting_never_repeats() {
    let grid = Grid::new(4, 5).unwrap();
    let mut strategy = TargetingStrategy::new(grid);
    let mut rng = SmallRng::seed_from_u64(5);

    let mut seen = Vec::new();
    while let Some(cell) = strategy.select_target(&mut rng) {
        assert!(grid.contains(cell));
        assert!(!seen.contains(&cell));
        seen.push(cell);
        strategy.receive_result(false, false);
    }
    assert_eq!(seen.len(), grid.area());
    assert_eq!(strategy.state(), TargetingState::Hunting);
}

#[test]
fn test_sink_on_first_hit_stays_hunting() {
    let grid = Grid::new(10, 10).unwrap();
    let mut strategy = TargetingStrategy::new(grid);
    strategy.target(c(7, 7)).unwrap();
    strategy.receive_result(true, true);
    assert_eq!(strategy.state(), TargetingState::Hunting);
}

#[test]
fn test_target_rejects_repeats_and_off_grid() {
    let grid = Grid::new(10, 10).unwrap();
    let mut strategy = TargetingStrategy::new(grid);
    assert_eq!(strategy.target(c(3, 3)), Some(c(3, 3)));
    assert_eq!(strategy.target(c(3, 3)), None);
    assert_eq!(strategy.target(c(11, 3)), None);
    assert_eq!(strategy.last_target(), Some(c(3, 3)));
}
