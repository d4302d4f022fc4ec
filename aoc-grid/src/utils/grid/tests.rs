//! Tests for the grid substrate.

use std::collections::HashSet;

use super::*;

const SMALL: &str = "AAAA\nBBCD\nBBCC\nEEEC";
const ENCLOSED: &str = "OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO";
const LARGE: &str = "\
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE";
const E_SHAPE: &str = "EEEEE\nEXXXX\nEEEEE\nEXXXX\nEEEEE";
const DIAGONAL_HOLES: &str = "AAAAAA\nAAABBA\nAAABBA\nABBAAA\nABBAAA\nAAAAAA";

fn totals(input: &str) -> (usize, usize) {
    let grid = Grid::parse_chars(input).unwrap();
    partition(&grid).iter().fold((0, 0), |(cost, discounted), region| {
        (
            cost + region.cost(&grid),
            discounted + region.discounted_cost(&grid),
        )
    })
}

fn region_at(grid: &Grid<char>, row: usize, col: usize) -> Region {
    let start = grid.location(row, col).unwrap();
    let plant = *grid.at(start);
    find_region(grid, start, |loc| *grid.at(loc) == plant)
}

#[test]
fn test_small_garden_costs() {
    assert_eq!(totals(SMALL), (140, 80));
}

#[test]
fn test_enclosed_garden_costs() {
    assert_eq!(totals(ENCLOSED), (772, 436));
}

#[test]
fn test_large_garden_costs() {
    assert_eq!(totals(LARGE), (1930, 1206));
}

#[test]
fn test_e_shape_keeps_notches_apart() {
    assert_eq!(totals(E_SHAPE).1, 236);

    let grid = Grid::parse_chars(E_SHAPE).unwrap();
    let e = region_at(&grid, 0, 0);
    assert_eq!(e.area(), 17);
    assert_eq!(e.sides(&grid), 12);
}

#[test]
fn test_regions_touching_diagonally() {
    assert_eq!(totals(DIAGONAL_HOLES).1, 368);

    let grid = Grid::parse_chars(DIAGONAL_HOLES).unwrap();
    let outer = region_at(&grid, 0, 0);
    assert_eq!(outer.area(), 28);
    assert_eq!(outer.sides(&grid), 12);
}

#[test]
fn test_single_cell_region() {
    let grid = Grid::parse_chars("x").unwrap();
    let cell = region_at(&grid, 0, 0);
    assert_eq!(cell.area(), 1);
    assert_eq!(cell.perimeter(&grid), 4);
    assert_eq!(cell.sides(&grid), 4);
}

#[test]
fn test_rectangle_region() {
    let grid = Grid::parse_chars("....\n.##.\n.##.\n.##.\n....").unwrap();
    let block = region_at(&grid, 1, 1);
    assert_eq!(block.area(), 6);
    assert_eq!(perimeter(&block, &grid), 2 * (2 + 3));
    assert_eq!(sides(&block, &grid), 4);
}

#[test]
fn test_ring_counts_inner_fence() {
    let grid = Grid::parse_chars("AAA\nABA\nAAA").unwrap();
    let ring = region_at(&grid, 0, 0);
    assert_eq!(ring.area(), 8);
    assert_eq!(ring.perimeter(&grid), 16);
    assert_eq!(ring.sides(&grid), 8);
}

#[test]
fn test_u_shape_splits_top_edge() {
    let grid = Grid::parse_chars("A.A\nAAA").unwrap();
    let u = region_at(&grid, 1, 1);
    assert_eq!(u.area(), 5);
    assert_eq!(u.perimeter(&grid), 12);
    assert_eq!(u.sides(&grid), 8);
}

#[test]
fn test_diagonal_cells_are_separate_regions() {
    let grid = Grid::parse_chars("AB\nBA").unwrap();
    let regions = partition(&grid);
    assert_eq!(regions.len(), 4);
    assert!(regions.iter().all(|r| r.area() == 1));
}

#[test]
fn test_rejected_start_gives_empty_region() {
    let grid = Grid::parse_chars("ab").unwrap();
    let start = grid.location(0, 0).unwrap();
    let region = find_region(&grid, start, |_| false);
    assert!(region.is_empty());
    assert_eq!(region.perimeter(&grid), 0);
    assert_eq!(region.sides(&grid), 0);
}

#[test]
fn test_partition_covers_grid_without_overlap() {
    let grid = Grid::parse_chars(LARGE).unwrap();
    let regions = partition(&grid);
    assert_eq!(regions.len(), 11);

    let mut seen = HashSet::new();
    for region in &regions {
        for loc in region.iter() {
            assert!(seen.insert(loc), "{loc:?} claimed twice");
        }
    }
    let all: HashSet<_> = grid.iter_locations().collect();
    assert_eq!(seen, all);
}

#[test]
fn test_partition_is_idempotent() {
    let grid = Grid::parse_chars(LARGE).unwrap();
    assert_eq!(partition(&grid), partition(&grid));
}

#[test]
fn test_partition_by_custom_equivalence() {
    let grid = Grid::parse_with("1357\n2468", |c| c.to_digit(10)).unwrap();
    let by_parity = partition_by(&grid, |a, b| a % 2 == b % 2);
    assert_eq!(by_parity.len(), 2);
    assert_eq!(by_parity[0].area(), 4);
    assert!(by_parity[0].contains(grid.location(0, 3).unwrap()));
}
