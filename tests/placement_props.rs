use fleetcore::{Board, FleetSpec, Grid, PlacementGenerator};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn generated_fleets_validate(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let generator = PlacementGenerator::new(Grid::default(), FleetSpec::default());
        let fleet = generator.generate(&mut rng).unwrap();
        prop_assert_eq!(fleet.len(), 5);
        let board = Board::new(Grid::default(), fleet);
        prop_assert!(board.is_ok());
    }

    #[test]
    fn no_two_ships_touch(seed in any::<u64>(), width in 10usize..=14, height in 10usize..=14) {
        let grid = Grid::new(width, height).unwrap();
        let spec = FleetSpec::from_pairs([(2, 2), (3, 2), (4, 1)]).unwrap();
        let generator = PlacementGenerator::new(grid, spec);
        let fleet = generator.generate(&mut SmallRng::seed_from_u64(seed)).unwrap();
        for (i, a) in fleet.iter().enumerate() {
            prop_assert!(a.fits(&grid));
            for b in fleet.iter().skip(i + 1) {
                prop_assert!(!a.is_near_ship(b));
                prop_assert!(!b.is_near_ship(a));
            }
        }
    }

    #[test]
    fn seeded_generation_is_reproducible(seed in any::<u64>()) {
        let generator = PlacementGenerator::new(Grid::default(), FleetSpec::default());
        let a = generator.generate(&mut SmallRng::seed_from_u64(seed)).unwrap();
        let b = generator.generate(&mut SmallRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a, b);
    }
}
