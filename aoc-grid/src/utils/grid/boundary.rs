//! Fence measurements of a region: perimeter and straight sides.

use std::collections::HashSet;

use itertools::Itertools;

use super::bounded::Grid;
use super::direction::Direction;
use super::location::Location;
use super::region::Region;

/// Every `(member, direction)` whose step leaves the region, either off the
/// grid or onto a non-member cell.
fn boundary_edges<T>(region: &Region, grid: &Grid<T>) -> Vec<(Location, Direction)> {
    let Some(start) = region.iter().next() else {
        return Vec::new();
    };

    let mut visited = HashSet::with_capacity(region.area());
    let mut stack = vec![start];
    let mut edges = Vec::new();

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        for dir in Direction::ALL {
            match grid.step(current, dir).filter(|&next| region.contains(next)) {
                Some(next) if !visited.contains(&next) => stack.push(next),
                Some(_) => {}
                None => edges.push((current, dir)),
            }
        }
    }

    edges
}

/// Number of maximal runs of consecutive integers in a sorted slice.
fn count_runs(sorted: &[usize]) -> usize {
    if sorted.is_empty() {
        return 0;
    }
    1 + sorted
        .iter()
        .tuple_windows()
        .filter(|&(a, b)| *b != *a + 1)
        .count()
}

/// Count of boundary edges.
pub fn perimeter<T>(region: &Region, grid: &Grid<T>) -> usize {
    boundary_edges(region, grid).len()
}

/// Count of straight fence segments.
///
/// Edges facing the same way on the same row (for `Up`/`Down`) or column
/// (for `Left`/`Right`) merge when their positions along that line are
/// consecutive; any gap starts a new side.
pub fn sides<T>(region: &Region, grid: &Grid<T>) -> usize {
    boundary_edges(region, grid)
        .into_iter()
        .map(|(loc, dir)| {
            if dir.is_vertical() {
                ((dir, loc.row()), loc.col())
            } else {
                ((dir, loc.col()), loc.row())
            }
        })
        .into_group_map()
        .into_values()
        .map(|mut positions| {
            positions.sort_unstable();
            count_runs(&positions)
        })
        .sum()
}

impl Region {
    pub fn perimeter<T>(&self, grid: &Grid<T>) -> usize {
        perimeter(self, grid)
    }

    pub fn sides<T>(&self, grid: &Grid<T>) -> usize {
        sides(self, grid)
    }

    /// `area * perimeter`
    pub fn cost<T>(&self, grid: &Grid<T>) -> usize {
        self.area() * self.perimeter(grid)
    }

    /// `area * sides`
    pub fn discounted_cost<T>(&self, grid: &Grid<T>) -> usize {
        self.area() * self.sides(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_runs() {
        assert_eq!(count_runs(&[]), 0);
        assert_eq!(count_runs(&[4]), 1);
        assert_eq!(count_runs(&[1, 2, 3]), 1);
        assert_eq!(count_runs(&[1, 2, 4, 5, 9]), 3);
    }
}
