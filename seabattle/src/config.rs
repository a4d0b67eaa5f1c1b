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

//! Board configuration: board dimensions and the fleet composition table.
use std::{collections::BTreeMap, fmt};

use crate::board::RectDimensions;

/// Number of ships the standard fleet contains of each deck length, as
/// `(deck length, ship count)` pairs.
pub const STANDARD_FLEET: [(usize, usize); 4] = [(1, 4), (2, 3), (3, 2), (4, 1)];

/// Display helper naming the category of ships with a given number of decks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DeckClass(pub usize);

impl DeckClass {
    /// Number of decks of ships in this class.
    pub fn len(self) -> usize {
        self.0
    }

    fn name(self) -> Option<&'static str> {
        match self.0 {
            1 => Some("single-deck"),
            2 => Some("double-deck"),
            3 => Some("three-deck"),
            4 => Some("four-deck"),
            _ => None,
        }
    }
}

impl fmt::Display for DeckClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.name() {
            Some(name) => f.pad(name),
            None => f.pad(&format!("{}-deck", self.0)),
        }
    }
}

/// Required number of ships for every deck length.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FleetComposition {
    /// Ship count keyed by deck length. Never contains zero lengths or counts.
    required: BTreeMap<usize, usize>,
}

impl FleetComposition {
    /// Build a composition from `(deck length, ship count)` pairs. Entries with a length or
    /// a count of zero are dropped, repeated lengths are summed.
    pub fn new<I: IntoIterator<Item = (usize, usize)>>(table: I) -> Self {
        let mut required = BTreeMap::new();
        for (len, count) in table {
            if len > 0 && count > 0 {
                *required.entry(len).or_insert(0) += count;
            }
        }
        Self { required }
    }

    /// The standard fleet: four single-deck, three double-deck, two three-deck and one
    /// four-deck ship.
    pub fn standard() -> Self {
        Self::new(STANDARD_FLEET.iter().copied())
    }

    /// Total number of ships in the fleet.
    pub fn total_ships(&self) -> usize {
        self.required.values().sum()
    }

    /// Number of ships required with the given number of decks.
    pub fn required(&self, len: usize) -> usize {
        self.required.get(&len).copied().unwrap_or(0)
    }

    /// Iterate `(deck class, ship count)` in ascending deck length.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (DeckClass, usize)> {
        self.required
            .iter()
            .map(|(&len, &count)| (DeckClass(len), count))
    }

    /// Deck lengths of every ship in the fleet, longest first.
    pub fn ship_lengths(&self) -> impl '_ + Iterator<Item = usize> {
        self.required
            .iter()
            .rev()
            .flat_map(|(&len, &count)| std::iter::repeat(len).take(count))
    }
}

impl Default for FleetComposition {
    fn default() -> Self {
        Self::standard()
    }
}

/// Everything a [`Board`][crate::board::Board] is validated against.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct BoardConfig {
    /// Size of the board.
    pub dimensions: RectDimensions,
    /// Ships that must be placed.
    pub fleet: FleetComposition,
}

impl BoardConfig {
    /// Construct a config from dimensions and a fleet composition.
    pub fn new(dimensions: RectDimensions, fleet: FleetComposition) -> Self {
        Self { dimensions, fleet }
    }
}
