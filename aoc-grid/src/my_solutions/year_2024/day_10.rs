use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::my_solutions::grid_parse_error;
use crate::utils::grid::{Grid, Location};

const TRAILHEAD: u8 = 0;
const SUMMIT: u8 = 9;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 10, tags = ["grid", "dfs"])]
pub struct Solver;

/// Heights per cell. `.` marks impassable ground.
#[derive(Debug)]
pub struct TopographicMap {
    heights: Grid<Option<u8>>,
    trailheads: Vec<Location>,
}

impl TopographicMap {
    /// Neighbours exactly one unit higher than `location`.
    fn uphill(&self, location: Location) -> impl Iterator<Item = Location> + '_ {
        let height = self.heights[location];
        self.heights
            .neighbours(location)
            .map(|(_, next)| next)
            .filter(move |&next| match (height, self.heights[next]) {
                (Some(here), Some(there)) => there == here + 1,
                _ => false,
            })
    }

    /// Number of distinct summits reachable from `trailhead`.
    fn score(&self, trailhead: Location) -> usize {
        let mut seen = HashSet::from([trailhead]);
        let mut stack = vec![trailhead];
        let mut summits = 0;

        while let Some(current) = stack.pop() {
            if self.heights[current] == Some(SUMMIT) {
                summits += 1;
                continue;
            }
            for next in self.uphill(current) {
                if seen.insert(next) {
                    stack.push(next);
                }
            }
        }
        summits
    }

    /// Number of distinct hiking trails starting at `trailhead`.
    fn rating(&self, trailhead: Location) -> usize {
        let mut stack = vec![trailhead];
        let mut trails = 0;

        // Heights strictly increase along a trail, so no trail revisits a cell.
        while let Some(current) = stack.pop() {
            if self.heights[current] == Some(SUMMIT) {
                trails += 1;
                continue;
            }
            stack.extend(self.uphill(current));
        }
        trails
    }
}

impl AocParser for Solver {
    type SharedData<'a> = TopographicMap;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let heights = Grid::parse_with(input, |glyph| match glyph {
            '.' => Some(None),
            _ => glyph.to_digit(10).map(|d| Some(d as u8)),
        })
        .map_err(grid_parse_error)?;

        let trailheads = heights
            .iter_locations()
            .filter(|&loc| heights[loc] == Some(TRAILHEAD))
            .collect();
        Ok(TopographicMap {
            heights,
            trailheads,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .trailheads
            .iter()
            .map(|&head| shared.score(head))
            .sum::<usize>()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .trailheads
            .iter()
            .map(|&head| shared.rating(head))
            .sum::<usize>()
            .to_string())
    }
}
