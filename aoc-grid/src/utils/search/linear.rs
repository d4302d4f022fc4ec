//! Closed-form cheapest path for two fixed moves.
//!
//! `na * a + nb * b = target - origin` is a 2x2 linear system over the
//! non-negative integers. Independent moves give at most one solution
//! (Cramer's rule); parallel moves reduce to a one-dimensional linear
//! Diophantine equation whose cheapest solution sits at an end of the
//! feasible range because cost is linear in the free parameter.

use super::CheapestPath;
use super::moves::{Move, Plan, Point};

/// Exact solver used by default for [`cheapest_path`](super::cheapest_path).
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSolver;

/// `(g, u, v)` with `a * u + b * v == g == gcd(a, b)`.
fn extended_gcd(a: i128, b: i128) -> (i128, i128, i128) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_u, mut u) = (1, 0);
    let (mut old_v, mut v) = (0, 1);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_u, u) = (u, old_u - q * u);
        (old_v, v) = (v, old_v - q * v);
    }
    (old_r, old_u, old_v)
}

/// `ceil(n / d)` for `d > 0`.
fn div_ceil(n: i128, d: i128) -> i128 {
    -(-n).div_euclid(d)
}

fn vector(mv: &Move) -> (i128, i128) {
    (i128::from(mv.dx), i128::from(mv.dy))
}

fn to_plan(presses: (i128, i128), moves: &[Move; 2]) -> Option<Plan> {
    let na = u64::try_from(presses.0).ok()?;
    let nb = u64::try_from(presses.1).ok()?;
    Plan::new([na, nb], moves)
}

/// Candidate press counts when the two moves are parallel.
fn collinear_candidates(target: (i128, i128), a: (i128, i128), b: (i128, i128)) -> Vec<(i128, i128)> {
    // Project onto an axis that actually moves.
    let (p, q, s) = if a.0 + b.0 > 0 {
        (a.0, b.0, target.0)
    } else if a.1 + b.1 > 0 {
        (a.1, b.1, target.1)
    } else {
        return if target == (0, 0) { vec![(0, 0)] } else { vec![] };
    };

    if s < 0 {
        return vec![];
    }
    // Parallel to a move with movement on this axis, a zero component here
    // means the whole move is zero and never helps.
    if p == 0 {
        return if s % q == 0 { vec![(0, s / q)] } else { vec![] };
    }
    if q == 0 {
        return if s % p == 0 { vec![(s / p, 0)] } else { vec![] };
    }

    let (g, u, v) = extended_gcd(p, q);
    if s % g != 0 {
        return vec![];
    }
    let (na0, nb0) = (u * (s / g), v * (s / g));
    // na = na0 + k * step_a, nb = nb0 - k * step_b
    let (step_a, step_b) = (q / g, p / g);
    let k_min = div_ceil(-na0, step_a);
    let k_max = nb0.div_euclid(step_b);
    if k_min > k_max {
        return vec![];
    }

    [k_min, k_max]
        .into_iter()
        .map(|k| (na0 + k * step_a, nb0 - k * step_b))
        .collect()
}

impl CheapestPath for LinearSolver {
    fn plan(&self, origin: Point, target: Point, moves: [Move; 2]) -> Option<Plan> {
        let t = (
            i128::from(target.x) - i128::from(origin.x),
            i128::from(target.y) - i128::from(origin.y),
        );
        let (a, b) = (vector(&moves[0]), vector(&moves[1]));

        let det = a.0 * b.1 - a.1 * b.0;
        if det != 0 {
            let na = t.0 * b.1 - b.0 * t.1;
            let nb = a.0 * t.1 - a.1 * t.0;
            if na % det != 0 || nb % det != 0 {
                return None;
            }
            return to_plan((na / det, nb / det), &moves);
        }

        collinear_candidates(t, a, b)
            .into_iter()
            .filter(|&(na, nb)| na * a.0 + nb * b.0 == t.0 && na * a.1 + nb * b.1 == t.1)
            .filter_map(|presses| to_plan(presses, &moves))
            .min_by_key(|plan| plan.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extended_gcd_identity() {
        for (a, b) in [(240, 46), (7, 3), (5, 5), (1, 9)] {
            let (g, u, v) = extended_gcd(a, b);
            assert_eq!(a * u + b * v, g);
            assert_eq!(a % g, 0);
            assert_eq!(b % g, 0);
        }
        assert_eq!(extended_gcd(240, 46).0, 2);
    }

    #[test]
    fn test_div_ceil_signed() {
        assert_eq!(div_ceil(7, 2), 4);
        assert_eq!(div_ceil(-7, 2), -3);
        assert_eq!(div_ceil(6, 3), 2);
    }

    #[test]
    fn test_independent_moves_unique_solution() {
        let moves = [Move::new(17, 86, 3), Move::new(84, 37, 1)];
        let plan = LinearSolver
            .plan(Point::ORIGIN, Point::new(7870, 6450), moves)
            .unwrap();
        assert_eq!(plan.presses, [38, 86]);
        assert_eq!(plan.cost, 200);
    }

    #[test]
    fn test_fractional_or_negative_presses_rejected() {
        let moves = [Move::new(26, 66, 3), Move::new(67, 21, 1)];
        assert_eq!(LinearSolver.plan(Point::ORIGIN, Point::new(12748, 12176), moves), None);

        // exact solution needs -1 presses of the second move
        let moves = [Move::new(1, 0, 1), Move::new(0, 1, 1)];
        assert_eq!(LinearSolver.plan(Point::new(0, 5), Point::new(3, 4), moves), None);
    }

    #[test]
    fn test_parallel_moves_pick_cheaper_mix() {
        let target = Point::new(4, 4);
        let cheap_small = [Move::new(2, 2, 3), Move::new(1, 1, 1)];
        assert_eq!(
            LinearSolver.plan(Point::ORIGIN, target, cheap_small).map(|p| p.cost),
            Some(4)
        );
        let cheap_big = [Move::new(2, 2, 1), Move::new(1, 1, 3)];
        let plan = LinearSolver.plan(Point::ORIGIN, target, cheap_big).unwrap();
        assert_eq!((plan.presses, plan.cost), ([2, 0], 2));
    }

    #[test]
    fn test_parallel_moves_unreachable() {
        let moves = [Move::new(2, 2, 1), Move::new(4, 4, 1)];
        assert_eq!(LinearSolver.plan(Point::ORIGIN, Point::new(5, 5), moves), None);
        assert_eq!(LinearSolver.plan(Point::ORIGIN, Point::new(4, 5), moves), None);
    }

    #[test]
    fn test_zero_moves() {
        let zero = [Move::new(0, 0, 1), Move::new(0, 0, 2)];
        assert_eq!(
            LinearSolver.plan(Point::new(3, 3), Point::new(3, 3), zero).map(|p| p.cost),
            Some(0)
        );
        assert_eq!(LinearSolver.plan(Point::ORIGIN, Point::new(1, 0), zero), None);

        let one_zero = [Move::new(0, 0, 1), Move::new(3, 1, 2)];
        let plan = LinearSolver.plan(Point::ORIGIN, Point::new(9, 3), one_zero).unwrap();
        assert_eq!((plan.presses, plan.cost), ([0, 3], 6));
    }

    #[test]
    fn test_large_offset_targets_are_exact() {
        const OFFSET: u64 = 10_000_000_000_000;
        let moves = [Move::new(26, 66, 3), Move::new(67, 21, 1)];
        let target = Point::new(OFFSET + 12748, OFFSET + 12176);
        let plan = LinearSolver.plan(Point::ORIGIN, target, moves).unwrap();
        assert_eq!(plan.destination(Point::ORIGIN, &moves), Some(target));
    }
}
