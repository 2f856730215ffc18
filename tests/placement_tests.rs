use fleetcore::{
    Board, BoardError, FleetSpec, GameConfig, Grid, PlacementGenerator, MAX_PLACEMENT_ATTEMPTS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_generate_default_fleet() {
    let mut rng = SmallRng::seed_from_u64(42);
    let generator = PlacementGenerator::new(Grid::default(), FleetSpec::default());
    let fleet = generator.generate(&mut rng).unwrap();

    let mut lengths: Vec<_> = fleet.iter().map(|s| s.length()).collect();
    lengths.sort();
    assert_eq!(lengths, vec![1, 2, 3, 4, 5]);
    assert_eq!(fleet.total_cells(), 15);
    // a second validation through the board must pass too
    let board = Board::new(Grid::default(), fleet).unwrap();
    board.validate_fleet().unwrap();
}

#[test]
fn test_generate_honours_counts() {
    let mut rng = SmallRng::seed_from_u64(7);
    let spec = FleetSpec::from_pairs([(4, 1), (3, 2), (2, 3), (1, 4)]).unwrap();
    let generator = PlacementGenerator::new(Grid::default(), spec.clone());
    let fleet = generator.generate(&mut rng).unwrap();

    assert_eq!(fleet.len(), spec.total_ships());
    for (length, count) in spec.iter() {
        assert_eq!(fleet.iter().filter(|s| s.length() == length).count(), count);
    }
    fleet.validate(&Grid::default()).unwrap();
}

#[test]
fn test_same_seed_same_fleet() {
    let generator = PlacementGenerator::new(Grid::default(), FleetSpec::default());
    let a = generator.generate(&mut SmallRng::seed_from_u64(2024)).unwrap();
    let b = generator.generate(&mut SmallRng::seed_from_u64(2024)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_ships_stay_on_narrow_grid() {
    let grid = Grid::new(14, 3).unwrap();
    let spec = FleetSpec::from_pairs([(5, 1), (3, 1)]).unwrap();
    let generator = PlacementGenerator::new(grid, spec);
    for seed in 0..50 {
        let fleet = generator.generate(&mut SmallRng::seed_from_u64(seed)).unwrap();
        for ship in fleet.iter() {
            assert!(ship.fits(&grid));
            if ship.length() == 5 {
                assert!(ship.is_horizontal());
            }
        }
        fleet.validate(&grid).unwrap();
    }
}

#[test]
fn test_over_dense_spec_is_exhausted() {
    // Any single-cell ship's halo covers the whole 2x2 grid.
    let grid = Grid::new(2, 2).unwrap();
    let spec = FleetSpec::from_pairs([(1, 2)]).unwrap();
    let generator = PlacementGenerator::new(grid, spec).with_max_attempts(200);
    let err = generator
        .generate(&mut SmallRng::seed_from_u64(1))
        .unwrap_err();
    assert_eq!(
        err,
        BoardError::PlacementExhausted {
            length: 1,
            attempts: 200
        }
    );
}

#[test]
fn test_ship_longer_than_grid_is_exhausted() {
    let grid = Grid::new(4, 4).unwrap();
    let spec = FleetSpec::from_pairs([(5, 1)]).unwrap();
    let generator = PlacementGenerator::new(grid, spec).with_max_attempts(10);
    assert!(matches!(
        generator.generate(&mut SmallRng::seed_from_u64(3)),
        Err(BoardError::PlacementExhausted { length: 5, .. })
    ));
}

#[test]
fn test_from_config() {
    let config = GameConfig::default();
    let generator = PlacementGenerator::from_config(&config);
    assert_eq!(generator.grid(), Grid::default());
    assert_eq!(generator.spec(), &FleetSpec::default());
    assert_eq!(config.max_placement_attempts, MAX_PLACEMENT_ATTEMPTS);
}
