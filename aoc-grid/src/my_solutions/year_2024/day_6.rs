use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use thiserror::Error;

use crate::my_solutions::grid_parse_error;
use crate::utils::grid::{Direction, Grid, Location};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2024, day = 6, tags = ["grid", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Open,
    Obstruction,
}

#[derive(Debug, Error)]
#[error("guard loops forever after revisiting {location:?} facing {facing:?}")]
pub struct PatrolLoop {
    location: Location,
    facing: Direction,
}

/// The guard's position and heading. Each patrol owns its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Guard {
    location: Location,
    facing: Direction,
}

impl Guard {
    /// Advance one cell, turning right in place at an obstruction.
    /// Returns `false` once the guard has walked off the map.
    fn step(&mut self, lab: &Grid<Tile>) -> bool {
        match lab.step(self.location, self.facing) {
            None => false,
            Some(next) if lab[next] == Tile::Obstruction => {
                self.facing = self.facing.turn_right();
                true
            }
            Some(next) => {
                self.location = next;
                true
            }
        }
    }
}

#[derive(Debug)]
pub struct Lab {
    grid: Grid<Tile>,
    guard: Guard,
}

impl Lab {
    /// Every location the guard covers before leaving the map.
    fn patrol(&self) -> Result<HashSet<Location>, PatrolLoop> {
        let mut guard = self.guard;
        let mut covered = HashSet::from([guard.location]);
        let mut states = HashSet::from([(guard.location, guard.facing)]);

        while guard.step(&self.grid) {
            covered.insert(guard.location);
            if !states.insert((guard.location, guard.facing)) {
                return Err(PatrolLoop {
                    location: guard.location,
                    facing: guard.facing,
                });
            }
        }
        Ok(covered)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Lab;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut start = None;
        let mut cells = 0usize;
        let grid = Grid::parse_with(input, |glyph| {
            let index = cells;
            cells += 1;
            match glyph {
                '.' => Some(Tile::Open),
                '#' => Some(Tile::Obstruction),
                _ => {
                    let facing = Direction::from_glyph(glyph)?;
                    if start.is_none() {
                        start = Some((index, facing));
                    }
                    Some(Tile::Open)
                }
            }
        })
        .map_err(grid_parse_error)?;

        let (index, facing) =
            start.ok_or_else(|| ParseError::MissingData("no guard on the map".into()))?;
        let location = grid
            .iter_locations()
            .nth(index)
            .ok_or_else(|| ParseError::InvalidFormat("guard outside the map".into()))?;

        Ok(Lab {
            grid,
            guard: Guard { location, facing },
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let covered = shared
            .patrol()
            .map_err(|e| SolveError::SolveFailed(Box::new(e)))?;
        Ok(covered.len().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    #[test]
    fn test_example_patrol() {
        let mut lab = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(lab.guard.location.row(), 6);
        assert_eq!(lab.guard.location.col(), 4);
        assert_eq!(lab.guard.facing, Direction::Up);
        assert_eq!(Solver::solve_part(&mut lab, 1).unwrap(), "41");
    }

    #[test]
    fn test_patrol_does_not_mutate_shared_state() {
        let lab = Solver::parse(EXAMPLE).unwrap();
        let first = lab.patrol().unwrap();
        let second = lab.patrol().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_guard_facing_other_directions() {
        // walks left off the map through 3 cells
        let mut lab = Solver::parse("...<\n....").unwrap();
        assert_eq!(Solver::solve_part(&mut lab, 1).unwrap(), "4");

        // turns right at the obstruction and leaves upward
        let mut lab = Solver::parse("....\n.>#.\n....").unwrap();
        assert_eq!(Solver::solve_part(&mut lab, 1).unwrap(), "2");
    }

    #[test]
    fn test_loop_is_reported() {
        let input = "
.#..
.^.#
#...
..#.
";
        let mut lab = Solver::parse(input).unwrap();
        assert!(matches!(
            Solver::solve_part(&mut lab, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_invalid_maps() {
        assert!(matches!(Solver::parse("..#\n..."), Err(ParseError::MissingData(_))));
        assert!(matches!(Solver::parse("..x\n.^."), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Solver::parse(""), Err(ParseError::MissingData(_))));
    }
}
