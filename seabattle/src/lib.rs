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

//! Single-player Battleship board.
//!
//! A [`Board`][board::Board] is built from a list of ship endpoint pairs. Construction
//! validates the whole fleet against the placement rules of the [`BoardConfig`]: the
//! number of ships, the number of ships of each length, and that no two ships touch,
//! not even diagonally. Once built, shots are resolved with
//! [`Board::fire`][board::Board::fire] and the state of every cell can be read back with
//! [`Board::snapshot`][board::Board::snapshot].
//!
//! ```
//! use seabattle::board::{Board, ShotOutcome};
//!
//! let mut board = Board::new(vec![
//!     ((0, 0), (0, 3)),
//!     ((2, 0), (2, 2)),
//!     ((2, 4), (2, 6)),
//!     ((4, 0), (4, 1)),
//!     ((4, 3), (4, 4)),
//!     ((4, 6), (4, 7)),
//!     ((6, 0), (6, 0)),
//!     ((6, 2), (6, 2)),
//!     ((6, 4), (6, 4)),
//!     ((6, 6), (6, 6)),
//! ])
//! .unwrap();
//!
//! assert_eq!(board.fire((9, 9)), ShotOutcome::Miss);
//! assert_eq!(board.fire((6, 0)), ShotOutcome::Sunk);
//! assert_eq!(board.fire((4, 0)), ShotOutcome::Hit);
//! assert_eq!(board.fire((4, 1)), ShotOutcome::Sunk);
//! ```

pub mod board;
pub mod config;
pub mod ships;

pub use crate::config::{BoardConfig, DeckClass, FleetComposition};
