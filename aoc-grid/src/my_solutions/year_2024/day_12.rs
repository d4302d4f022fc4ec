use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::my_solutions::grid_parse_error;
use crate::utils::grid::{Grid, Region, partition};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 12, tags = ["grid", "flood-fill"])]
pub struct Solver;

#[derive(Debug)]
pub struct Garden {
    grid: Grid<char>,
    regions: Vec<Region>,
}

impl AocParser for Solver {
    type SharedData<'a> = Garden;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse_chars(input).map_err(grid_parse_error)?;
        let regions = partition(&grid);
        Ok(Garden { grid, regions })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let Garden { grid, regions } = shared;
        Ok(regions
            .iter()
            .map(|region| region.cost(grid))
            .sum::<usize>()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let Garden { grid, regions } = shared;
        Ok(regions
            .iter()
            .map(|region| region.discounted_cost(grid))
            .sum::<usize>()
            .to_string())
    }
}
