// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashSet;

use proptest::prelude::*;
use seabattle::board::{Board, Coordinate, DisplayState, ShotOutcome};

type Fleet = Vec<((usize, usize), (usize, usize))>;

fn standard_fleet() -> Fleet {
    vec![
        ((0, 0), (0, 3)),
        ((0, 5), (0, 6)),
        ((0, 8), (0, 9)),
        ((2, 0), (4, 0)),
        ((2, 2), (2, 4)),
        ((2, 6), (3, 6)),
        ((5, 2), (5, 2)),
        ((5, 5), (5, 5)),
        ((7, 7), (7, 7)),
        ((9, 0), (9, 0)),
    ]
}

/// The standard fleet with one ship moved to an arbitrary start and orientation. The ship
/// keeps its length, so the composition stays valid.
fn moved_fleet() -> impl Strategy<Value = Fleet> {
    (0..10usize, 0..10usize, 0..10usize, any::<bool>()).prop_map(|(ship, row, col, vertical)| {
        let mut fleet = standard_fleet();
        let ((r0, c0), (r1, c1)) = fleet[ship];
        let span = (r1 - r0) + (c1 - c0);
        let end = if vertical { (row + span, col) } else { (row, col + span) };
        fleet[ship] = ((row, col), end);
        fleet
    })
}

fn cells(((r0, c0), (r1, c1)): ((usize, usize), (usize, usize))) -> Vec<(usize, usize)> {
    (r0..=r1)
        .flat_map(|r| (c0..=c1).map(move |c| (r, c)))
        .collect()
}

/// Brute force version of the placement rules for fleets with a valid composition.
fn reference_accepts(fleet: &Fleet) -> bool {
    if fleet.iter().any(|&(_, (r, c))| r >= 10 || c >= 10) {
        return false;
    }
    let ships: Vec<_> = fleet.iter().copied().map(cells).collect();
    for (i, a) in ships.iter().enumerate() {
        for b in &ships[i + 1..] {
            for &(ar, ac) in a {
                for &(br, bc) in b {
                    let dr = (ar as isize - br as isize).abs();
                    let dc = (ac as isize - bc as isize).abs();
                    if dr <= 1 && dc <= 1 {
                        return false;
                    }
                }
            }
        }
    }
    true
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn accepts_exactly_valid_placements(fleet in moved_fleet()) {
        prop_assert_eq!(Board::new(fleet.clone()).is_ok(), reference_accepts(&fleet));
    }

    #[test]
    fn shots_are_consistent(shots in prop::collection::vec((0..10usize, 0..10usize), 0..80)) {
        let mut board = Board::new(standard_fleet()).unwrap();
        let mut fired = HashSet::new();
        let mut sunk = HashSet::new();

        for (row, col) in shots {
            let coord = Coordinate::new(row, col);
            let before: Vec<_> = board.snapshot().collect();
            let first = board.fire(coord);
            let after_first: Vec<_> = board.snapshot().collect();
            let second = board.fire(coord);
            let after_second: Vec<_> = board.snapshot().collect();

            prop_assert_eq!(first, second);
            prop_assert_eq!(&after_first, &after_second);
            if first == ShotOutcome::Miss {
                prop_assert!(board.ship_at(coord).is_none());
                prop_assert_eq!(&before, &after_first);
            }

            if let Some(ship) = board.ship_at(coord) {
                let start = *ship.start();
                if sunk.contains(&start) {
                    prop_assert_eq!(first, ShotOutcome::Sunk);
                }
                if first == ShotOutcome::Sunk {
                    sunk.insert(start);
                }
            }
            fired.insert(coord);
        }

        for (coord, state) in board.snapshot() {
            match board.ship_at(coord) {
                None => prop_assert_eq!(state, DisplayState::Water),
                Some(ship) if sunk.contains(ship.start()) => {
                    prop_assert_eq!(state, DisplayState::Drowned)
                }
                Some(_) if fired.contains(&coord) => prop_assert_eq!(state, DisplayState::Hit),
                Some(_) => prop_assert_eq!(state, DisplayState::Untouched),
            }
        }
        prop_assert_eq!(board.remaining_ships(), 10 - sunk.len());
    }
}
