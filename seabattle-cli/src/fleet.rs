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

//! Parsing of fleets given on the command line.
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use seabattle::board::Coordinate;

/// Error returned when a fleet description cannot be parsed.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParseFleetError {
    /// No ships were given at all.
    #[error("the fleet is empty")]
    Empty,

    /// One of the ships is not of the form `r,c-r,c` or `r,c`.
    #[error("invalid ship \"{0}\", expected \"row,col-row,col\" or \"row,col\"")]
    InvalidShip(String),
}

/// Parse a fleet from ship tokens separated by whitespace or `;`. Each token is either
/// two endpoints `r,c-r,c` or the single cell `r,c` of a single-deck ship.
pub fn parse_fleet(input: &str) -> Result<Vec<(Coordinate, Coordinate)>, ParseFleetError> {
    static SHIP: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)
        (?P<r0>[0-9]+),(?P<c0>[0-9]+)
        (?:-(?P<r1>[0-9]+),(?P<c1>[0-9]+))?$",
        )
        .unwrap()
    });

    let fleet = input
        .split(|c: char| c == ';' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            let invalid = || ParseFleetError::InvalidShip(token.to_owned());
            let captures = SHIP.captures(token).ok_or_else(invalid)?;
            let num = |name: &str| -> Result<Option<usize>, ParseFleetError> {
                match captures.name(name) {
                    None => Ok(None),
                    Some(m) => m.as_str().parse().map(Some).map_err(|_| invalid()),
                }
            };
            // The first endpoint is not optional in the pattern.
            let start = match (num("r0")?, num("c0")?) {
                (Some(row), Some(col)) => Coordinate::new(row, col),
                _ => return Err(invalid()),
            };
            let end = match (num("r1")?, num("c1")?) {
                (Some(row), Some(col)) => Coordinate::new(row, col),
                _ => start,
            };
            Ok((start, end))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if fleet.is_empty() {
        Err(ParseFleetError::Empty)
    } else {
        Ok(fleet)
    }
}

/// Parse a shot target of the form `r,c` or `r c`.
pub fn parse_target(input: &str) -> Option<Coordinate> {
    static TARGET: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?:fire\s+)?(?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<col>[0-9]+)$").unwrap()
    });
    let captures = TARGET.captures(input)?;
    let row = captures.name("row")?.as_str().parse().ok()?;
    let col = captures.name("col")?.as_str().parse().ok()?;
    Some(Coordinate::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_and_single_cells() {
        let fleet = parse_fleet("0,0-0,3; 2,0-2,2\n6,6").unwrap();
        assert_eq!(
            fleet,
            vec![
                (Coordinate::new(0, 0), Coordinate::new(0, 3)),
                (Coordinate::new(2, 0), Coordinate::new(2, 2)),
                (Coordinate::new(6, 6), Coordinate::new(6, 6)),
            ]
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_fleet("0,0-0,3 a,b"),
            Err(ParseFleetError::InvalidShip("a,b".to_owned()))
        );
        assert_eq!(
            parse_fleet("0,0-"),
            Err(ParseFleetError::InvalidShip("0,0-".to_owned()))
        );
        assert_eq!(
            parse_fleet("99999999999999999999999,0"),
            Err(ParseFleetError::InvalidShip("99999999999999999999999,0".to_owned()))
        );
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(parse_fleet(" ; "), Err(ParseFleetError::Empty));
    }

    #[test]
    fn parses_targets() {
        assert_eq!(parse_target("3,4"), Some(Coordinate::new(3, 4)));
        assert_eq!(parse_target("3 , 4"), Some(Coordinate::new(3, 4)));
        assert_eq!(parse_target("fire 3 4"), Some(Coordinate::new(3, 4)));
        assert_eq!(parse_target("3"), None);
        assert_eq!(parse_target("x,y"), None);
    }
}
