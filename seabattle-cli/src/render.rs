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

//! Text rendering of a board.
use std::fmt;

use seabattle::board::{Board, DisplayState};

/// Display helper that prints the glyph for a single cell.
struct Glyph(DisplayState);

impl Glyph {
    fn symbol(&self) -> &'static str {
        match self.0 {
            DisplayState::Water => "~",
            DisplayState::Untouched => "\u{25A1}",
            DisplayState::Hit => "\u{26A1}",
            DisplayState::Drowned => "X",
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.symbol())
    }
}

/// Display helper that prints the fully-revealed board followed by a legend.
pub struct BoardView<'a>(pub &'a Board);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cols = self.0.dimensions().cols();
        write!(f, "   ")?;
        for i in 0..cols {
            write!(f, "{:^3}", i)?;
        }
        writeln!(f)?;
        for (i, row) in self.0.iter_board().enumerate() {
            write!(f, "{:>2} ", i)?;
            for (_, state) in row {
                write!(f, "{:^3}", Glyph(state))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", "_".repeat(3 + 3 * cols))?;
        writeln!(
            f,
            "'{}' - alive, '{}' - hit, '{}' - drowned",
            Glyph(DisplayState::Untouched),
            Glyph(DisplayState::Hit),
            Glyph(DisplayState::Drowned),
        )
    }
}
