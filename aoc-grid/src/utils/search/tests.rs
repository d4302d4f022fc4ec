//! Tests comparing the two cheapest-path implementations.

use super::*;

/// (button A, button B, prize) from the claw machine example.
const MACHINES: [((u64, u64), (u64, u64), (u64, u64)); 4] = [
    ((94, 34), (22, 67), (8400, 5400)),
    ((26, 66), (67, 21), (12748, 12176)),
    ((17, 86), (84, 37), (7870, 6450)),
    ((69, 23), (27, 71), (18641, 10279)),
];

fn moves_for(a: (u64, u64), b: (u64, u64)) -> [Move; 2] {
    [Move::new(a.0, a.1, 3), Move::new(b.0, b.1, 1)]
}

#[test]
fn test_example_machines_agree() {
    let expected = [Some(280), None, Some(200), None];

    for ((a, b, prize), want) in MACHINES.into_iter().zip(expected) {
        let moves = moves_for(a, b);
        let target = Point::new(prize.0, prize.1);

        let linear = LinearSolver.cheapest_path(Point::ORIGIN, target, moves);
        let search = BestFirstSearch.cheapest_path(Point::ORIGIN, target, moves);
        assert_eq!(linear, want, "linear solver on {prize:?}");
        assert_eq!(search, want, "best-first search on {prize:?}");
    }
}

#[test]
fn test_example_total_tokens() {
    let total: u64 = MACHINES
        .into_iter()
        .filter_map(|(a, b, prize)| {
            let [move_a, move_b] = moves_for(a, b);
            cheapest_path(Point::ORIGIN, Point::new(prize.0, prize.1), move_a, move_b)
        })
        .sum();
    assert_eq!(total, 480);
}

#[test]
fn test_cost_ordering_not_assumed() {
    // A cheaper than B: the search must still find the optimum
    let moves = [Move::new(1, 1, 1), Move::new(3, 3, 5)];
    let target = Point::new(6, 6);
    assert_eq!(LinearSolver.cheapest_path(Point::ORIGIN, target, moves), Some(6));
    assert_eq!(BestFirstSearch.cheapest_path(Point::ORIGIN, target, moves), Some(6));

    let moves = [Move::new(1, 1, 5), Move::new(3, 3, 1)];
    assert_eq!(LinearSolver.cheapest_path(Point::ORIGIN, target, moves), Some(2));
    assert_eq!(BestFirstSearch.cheapest_path(Point::ORIGIN, target, moves), Some(2));
}

#[test]
fn test_non_origin_start() {
    let moves = moves_for((94, 34), (22, 67));
    let origin = Point::new(100, 100);
    let target = Point::new(8500, 5500);
    assert_eq!(LinearSolver.cheapest_path(origin, target, moves), Some(280));
    assert_eq!(BestFirstSearch.cheapest_path(origin, target, moves), Some(280));
}

#[test]
fn test_target_behind_origin() {
    let moves = moves_for((1, 2), (2, 1));
    let origin = Point::new(10, 10);
    assert_eq!(LinearSolver.cheapest_path(origin, Point::new(9, 12), moves), None);
    assert_eq!(BestFirstSearch.cheapest_path(origin, Point::new(9, 12), moves), None);
}

#[test]
fn test_plans_land_on_target() {
    for (a, b, prize) in MACHINES {
        let moves = moves_for(a, b);
        let target = Point::new(prize.0, prize.1);
        for plan in [
            LinearSolver.plan(Point::ORIGIN, target, moves),
            BestFirstSearch.plan(Point::ORIGIN, target, moves),
        ]
        .into_iter()
        .flatten()
        {
            assert_eq!(plan.destination(Point::ORIGIN, &moves), Some(target));
            assert_eq!(plan.cost, plan.presses[0] * 3 + plan.presses[1]);
        }
    }
}
