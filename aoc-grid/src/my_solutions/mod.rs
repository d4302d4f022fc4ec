pub mod year_2024;

use aoc_solver::ParseError;

use crate::utils::grid::GridError;

fn grid_parse_error(err: GridError) -> ParseError {
    match err {
        GridError::Empty => ParseError::MissingData(err.to_string()),
        _ => ParseError::InvalidFormat(err.to_string()),
    }
}
