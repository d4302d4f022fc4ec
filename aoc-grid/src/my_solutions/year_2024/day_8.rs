use std::collections::{HashMap, HashSet};
use std::iter;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::my_solutions::grid_parse_error;
use crate::utils::grid::{Grid, Location};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 8, tags = ["grid", "antennas"])]
pub struct Solver;

/// Antenna positions grouped by frequency. `#` marks are treated as empty ground.
#[derive(Debug)]
pub struct AntennaMap {
    grid: Grid<Option<char>>,
    antennas: HashMap<char, Vec<Location>>,
}

impl AntennaMap {
    /// Antinodes of every same-frequency pair, both ways round.
    ///
    /// `harmonics(antenna, step)` yields the antinodes on the far side of
    /// `antenna`, where `step` points away from the other antenna of the pair.
    fn antinodes<F, I>(&self, mut harmonics: F) -> HashSet<Location>
    where
        F: FnMut(Location, (isize, isize)) -> I,
        I: Iterator<Item = Location>,
    {
        let mut antinodes = HashSet::new();
        for locations in self.antennas.values() {
            for (&a, &b) in locations.iter().tuple_combinations() {
                antinodes.extend(harmonics(a, b.displacement_to(a)));
                antinodes.extend(harmonics(b, a.displacement_to(b)));
            }
        }
        antinodes
    }

    /// Locations `from + k * step` for `k >= 1`, while inside the grid.
    fn beyond(&self, from: Location, step: (isize, isize)) -> impl Iterator<Item = Location> + '_ {
        iter::successors(Some(from), move |&loc| self.grid.locations().offset(loc, step)).skip(1)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = AntennaMap;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse_with(input, |glyph| match glyph {
            '.' | '#' => Some(None),
            _ if glyph.is_ascii_alphanumeric() => Some(Some(glyph)),
            _ => None,
        })
        .map_err(grid_parse_error)?;

        let antennas = grid
            .iter_locations()
            .filter_map(|loc| grid[loc].map(|frequency| (frequency, loc)))
            .into_group_map();
        Ok(AntennaMap { grid, antennas })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map = &*shared;
        let antinodes = map.antinodes(|from, step| map.beyond(from, step).take(1));
        Ok(antinodes.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map = &*shared;
        // resonant harmonics include the antennas themselves
        let antinodes = map.antinodes(|from, step| iter::once(from).chain(map.beyond(from, step)));
        Ok(antinodes.len().to_string())
    }
}
