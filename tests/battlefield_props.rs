use hotseat_battleship::{
    Battlefield, BattlefieldError, CellState, Coordinate, ShipKind, ShotOutcome, BOARD_SIZE,
    TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

fn random_field(seed: u64) -> Battlefield {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut field = Battlefield::new("prop");
    for kind in ShipKind::ALL {
        field.place_randomly(&mut rng, kind).unwrap();
    }
    field
}

fn all_coordinates() -> Vec<Coordinate> {
    (1..=BOARD_SIZE)
        .flat_map(|r| (1..=BOARD_SIZE).map(move |c| Coordinate::new(r, c).unwrap()))
        .collect()
}

fn ship_cells(field: &Battlefield) -> Vec<(Coordinate, ShipKind)> {
    field
        .cells()
        .filter_map(|(at, cell)| match cell {
            CellState::ShipSegment(kind) => Some((at, kind)),
            _ => None,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_fleet_has_exact_segments(seed in any::<u64>()) {
        let field = random_field(seed);
        let cells = ship_cells(&field);
        prop_assert_eq!(cells.len(), TOTAL_SHIP_CELLS);
        for kind in ShipKind::ALL {
            prop_assert_eq!(cells.iter().filter(|(_, k)| *k == kind).count(), kind.length());
        }
    }

    #[test]
    fn ships_never_touch(seed in any::<u64>()) {
        let field = random_field(seed);
        let cells = ship_cells(&field);
        for &(a, ka) in &cells {
            for &(b, kb) in &cells {
                if ka == kb {
                    continue;
                }
                let dr = (a.row() as i8 - b.row() as i8).abs();
                let dc = (a.col() as i8 - b.col() as i8).abs();
                prop_assert!(dr > 1 || dc > 1, "{} ({}) touches {} ({})", a, ka, b, kb);
            }
        }
    }

    #[test]
    fn placement_failure_leaves_grid_untouched(
        seed in any::<u64>(),
        r0 in 1..=BOARD_SIZE, c0 in 1..=BOARD_SIZE,
        r1 in 1..=BOARD_SIZE, c1 in 1..=BOARD_SIZE,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut field = Battlefield::new("prop");
        for kind in &ShipKind::ALL[..4] {
            field.place_randomly(&mut rng, *kind).unwrap();
        }
        let before = field.clone();
        let begin = Coordinate::new(r0, c0).unwrap();
        let end = Coordinate::new(r1, c1).unwrap();
        match field.place_ship(ShipKind::Destroyer, begin, end) {
            Ok(()) => prop_assert_eq!(ship_cells(&field).len(), TOTAL_SHIP_CELLS),
            Err(e) => {
                prop_assert!(matches!(
                    e,
                    BattlefieldError::Location | BattlefieldError::Length(_) | BattlefieldError::Adjacency
                ));
                prop_assert_eq!(&field, &before);
            }
        }
    }

    #[test]
    fn hits_track_remaining_segments(seed in any::<u64>(), shots in prop::collection::vec((1..=BOARD_SIZE, 1..=BOARD_SIZE), 0..60)) {
        let mut field = random_field(seed);
        for (r, c) in shots {
            field.shoot(Coordinate::new(r, c).unwrap());
        }
        let hits = field.cells().filter(|(_, c)| *c == CellState::Hit).count();
        prop_assert_eq!(field.segments_remaining(), TOTAL_SHIP_CELLS - hits);
        if field.is_alive() {
            for kind in ShipKind::ALL {
                let status = field.ship_status(kind);
                prop_assert_eq!(status.reported_sunk, status.is_sunk());
            }
        }
    }

    #[test]
    fn full_barrage_reports_each_sinking_once(seed in any::<u64>()) {
        let mut field = random_field(seed);
        let mut order = all_coordinates();
        order.shuffle(&mut SmallRng::seed_from_u64(seed ^ 0x5eed));

        let mut sunk = Vec::new();
        let mut hits = 0;
        for at in order {
            match field.shoot(at) {
                ShotOutcome::Sunk(kind) => {
                    hits += 1;
                    sunk.push(kind);
                }
                ShotOutcome::Hit => hits += 1,
                ShotOutcome::Miss => {}
                ShotOutcome::FleetDestroyed => {
                    hits += 1;
                    break;
                }
            }
        }
        prop_assert!(!field.is_alive());
        prop_assert_eq!(hits, TOTAL_SHIP_CELLS);
        prop_assert_eq!(sunk.len(), ShipKind::ALL.len() - 1);
        sunk.sort_by_key(|k| k.index());
        sunk.dedup();
        prop_assert_eq!(sunk.len(), ShipKind::ALL.len() - 1);
    }
}
