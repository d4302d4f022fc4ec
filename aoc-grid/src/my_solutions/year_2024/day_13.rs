use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::search::{Move, Point, cheapest_path};

const A_TOKEN_COST: u64 = 3;
const B_TOKEN_COST: u64 = 1;
const PRIZE_POSITION_OFFSET: u64 = 10_000_000_000_000;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 13, tags = ["search", "linear-algebra"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClawMachine {
    button_a: Move,
    button_b: Move,
    prize: Point,
}

impl ClawMachine {
    /// Fewest tokens to win the prize after shifting it by `offset` on both axes.
    fn cheapest_win(&self, offset: u64) -> Option<u64> {
        let prize = Point::new(
            self.prize.x.checked_add(offset)?,
            self.prize.y.checked_add(offset)?,
        );
        cheapest_path(Point::ORIGIN, prize, self.button_a, self.button_b)
    }
}

fn capture_pair(pattern: &Regex, line: &str) -> anyhow::Result<(u64, u64)> {
    let caps = pattern
        .captures(line)
        .ok_or_else(|| anyhow!("unrecognised line {line:?}"))?;
    Ok((caps[1].parse()?, caps[2].parse()?))
}

fn parse_machines(input: &str) -> anyhow::Result<Vec<ClawMachine>> {
    let button_a = Regex::new(r"^Button A:\s*X\+(\d+),\s*Y\+(\d+)$")?;
    let button_b = Regex::new(r"^Button B:\s*X\+(\d+),\s*Y\+(\d+)$")?;
    let prize = Regex::new(r"^Prize:\s*X=(\d+),\s*Y=(\d+)$")?;

    let lines: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    lines
        .chunks(3)
        .enumerate()
        .map(|(idx, block)| {
            let [a_line, b_line, prize_line] = block else {
                bail!("(machine {}) expected 3 lines, found {}", idx + 1, block.len());
            };
            let describe = |e: anyhow::Error| anyhow!("(machine {}) {}", idx + 1, e);

            let (ax, ay) = capture_pair(&button_a, a_line).map_err(describe)?;
            let (bx, by) = capture_pair(&button_b, b_line).map_err(describe)?;
            let (px, py) = capture_pair(&prize, prize_line).map_err(describe)?;

            Ok(ClawMachine {
                button_a: Move::new(ax, ay, A_TOKEN_COST),
                button_b: Move::new(bx, by, B_TOKEN_COST),
                prize: Point::new(px, py),
            })
        })
        .collect()
}

fn total_tokens(machines: &[ClawMachine], offset: u64) -> u64 {
    machines
        .iter()
        .filter_map(|machine| machine.cheapest_win(offset))
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<ClawMachine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let machines =
            parse_machines(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        if machines.is_empty() {
            return Err(ParseError::MissingData("no claw machines".into()));
        }
        Ok(machines)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_tokens(shared, 0).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_tokens(shared, PRIZE_POSITION_OFFSET).to_string())
    }
}
