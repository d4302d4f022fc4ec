//! A*-style best-first search over the positions reachable with two moves.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use super::CheapestPath;
use super::moves::{Move, Plan, Point};

/// Priority-ordered search, cheapest `cost + lower bound` first.
///
/// Exact for any pair of moves, but explores every position in the box
/// between origin and target in the worst case. Used as the oracle for
/// [`LinearSolver`](super::LinearSolver).
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFirstSearch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Node {
    estimate: u64,
    cost: u64,
    location: Point,
    presses: [u64; 2],
}

fn min_steps(distance: u64, reach: u64) -> Option<u64> {
    match (distance, reach) {
        (0, _) => Some(0),
        (_, 0) => None,
        (d, r) => Some(d.div_ceil(r)),
    }
}

/// Admissible lower bound on the cost still needed to get from `at` to
/// `target`, or `None` when the target is behind `at` on some axis or an
/// axis still needs movement that neither move provides.
///
/// No single move covers more than the larger per-axis displacement, and
/// none costs less than the cheaper move, so the bound never overestimates.
fn lower_bound(at: Point, target: Point, moves: &[Move; 2]) -> Option<u64> {
    let dx = target.x.checked_sub(at.x)?;
    let dy = target.y.checked_sub(at.y)?;

    let reach_x = moves.iter().map(|m| m.dx).max().unwrap_or(0);
    let reach_y = moves.iter().map(|m| m.dy).max().unwrap_or(0);
    let steps = min_steps(dx, reach_x)?.max(min_steps(dy, reach_y)?);

    let cheapest = moves.iter().map(|m| m.cost).min().unwrap_or(0);
    steps.checked_mul(cheapest)
}

impl CheapestPath for BestFirstSearch {
    fn plan(&self, origin: Point, target: Point, moves: [Move; 2]) -> Option<Plan> {
        let mut best_cost: HashMap<Point, u64> = HashMap::new();
        let mut frontier = BinaryHeap::new();

        frontier.push(Reverse(Node {
            estimate: lower_bound(origin, target, &moves)?,
            cost: 0,
            location: origin,
            presses: [0, 0],
        }));

        while let Some(Reverse(node)) = frontier.pop() {
            // Nothing left in the frontier can be cheaper than this.
            if node.location == target {
                return Some(Plan {
                    presses: node.presses,
                    cost: node.cost,
                });
            }

            if best_cost
                .get(&node.location)
                .is_some_and(|&seen| seen <= node.cost)
            {
                continue;
            }
            best_cost.insert(node.location, node.cost);

            for (which, mv) in moves.iter().enumerate() {
                let Some(location) = node.location.apply(mv) else {
                    continue;
                };
                let Some(remaining) = lower_bound(location, target, &moves) else {
                    continue;
                };
                // a plan costing more than u64::MAX is no plan
                let Some(cost) = node.cost.checked_add(mv.cost) else {
                    continue;
                };
                let Some(estimate) = cost.checked_add(remaining) else {
                    continue;
                };
                if best_cost.get(&location).is_some_and(|&seen| seen <= cost) {
                    continue;
                }

                let mut presses = node.presses;
                presses[which] += 1;
                frontier.push(Reverse(Node {
                    estimate,
                    cost,
                    location,
                    presses,
                }));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::search::LinearSolver;

    #[test]
    fn test_lower_bound_never_exceeds_example_cost() {
        let moves = [Move::new(94, 34, 3), Move::new(22, 67, 1)];
        let bound = lower_bound(Point::ORIGIN, Point::new(8400, 5400), &moves).unwrap();
        // 8400 / 94 rounds up to 90 moves on x, each costing at least 1
        assert_eq!(bound, 90);
        assert!(bound <= 280);
    }

    #[test]
    fn test_lower_bound_rejects_overshoot() {
        let moves = [Move::new(1, 1, 1), Move::new(2, 0, 1)];
        assert_eq!(lower_bound(Point::new(5, 0), Point::new(4, 9), &moves), None);
        assert_eq!(lower_bound(Point::new(0, 5), Point::new(4, 4), &moves), None);
        assert_eq!(lower_bound(Point::new(4, 4), Point::new(4, 4), &moves), Some(0));
    }

    #[test]
    fn test_lower_bound_needs_reach_on_each_axis() {
        let moves = [Move::new(3, 0, 1), Move::new(5, 0, 2)];
        assert_eq!(lower_bound(Point::ORIGIN, Point::new(10, 1), &moves), None);
        assert_eq!(lower_bound(Point::ORIGIN, Point::new(10, 0), &moves), Some(2));
    }

    #[test]
    fn test_costs_past_u64_max_are_unreachable() {
        let moves = [Move::new(1, 0, u64::MAX / 2 + 1), Move::new(0, 1, 1)];
        let target = Point::new(2, 1);
        assert_eq!(BestFirstSearch.plan(Point::ORIGIN, target, moves), None);
        assert_eq!(LinearSolver.plan(Point::ORIGIN, target, moves), None);

        // one expensive press still fits
        let target = Point::new(1, 1);
        assert_eq!(
            BestFirstSearch.cheapest_path(Point::ORIGIN, target, moves),
            Some(u64::MAX / 2 + 2)
        );
        assert_eq!(
            LinearSolver.cheapest_path(Point::ORIGIN, target, moves),
            Some(u64::MAX / 2 + 2)
        );
    }

    #[test]
    fn test_plan_reports_presses() {
        let moves = [Move::new(94, 34, 3), Move::new(22, 67, 1)];
        let plan = BestFirstSearch
            .plan(Point::ORIGIN, Point::new(8400, 5400), moves)
            .unwrap();
        assert_eq!(plan.presses, [80, 40]);
        assert_eq!(plan.cost, 280);
    }
}
