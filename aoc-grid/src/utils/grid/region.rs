//! Connected regions of a grid.

use std::collections::HashSet;

use super::bounded::Grid;
use super::location::Location;

/// A 4-connected set of locations of one grid.
///
/// Regions only come out of [`find_region`] and the partition functions,
/// so every member is reachable from every other through member cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    locations: HashSet<Location>,
}

impl Region {
    pub fn area(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn contains(&self, location: Location) -> bool {
        self.locations.contains(&location)
    }

    /// Members in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = Location> + '_ {
        self.locations.iter().copied()
    }

    pub fn locations(&self) -> &HashSet<Location> {
        &self.locations
    }
}

/// Grow the region around `start` over every 4-adjacent cell accepted by
/// `membership`.
///
/// Traversal uses an explicit stack, so region size is bounded by memory
/// rather than call depth. Each location is pushed at most once. If
/// `membership` rejects `start` the region is empty.
pub fn find_region<T, M>(grid: &Grid<T>, start: Location, mut membership: M) -> Region
where
    M: FnMut(Location) -> bool,
{
    let mut locations = HashSet::new();
    if !membership(start) {
        return Region { locations };
    }

    locations.insert(start);
    let mut stack = vec![start];
    while let Some(current) = stack.pop() {
        for (_, next) in grid.neighbours(current) {
            if !locations.contains(&next) && membership(next) {
                locations.insert(next);
                stack.push(next);
            }
        }
    }

    Region { locations }
}

/// Split the whole grid into regions of cells for which `same` holds
/// between neighbours and the region's first cell.
///
/// Cells are scanned in row-major order and each cell is claimed by
/// exactly one region, so total work is linear in the number of cells.
pub fn partition_by<T, F>(grid: &Grid<T>, mut same: F) -> Vec<Region>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut assigned = vec![false; grid.locations().len()];
    let mut regions = Vec::new();

    for location in grid.iter_locations() {
        if assigned[location.index()] {
            continue;
        }
        let value = grid.at(location);
        let region = find_region(grid, location, |candidate| {
            candidate == location
                || (!assigned[candidate.index()] && same(value, grid.at(candidate)))
        });
        for member in region.iter() {
            assigned[member.index()] = true;
        }
        regions.push(region);
    }

    regions
}

/// [`partition_by`] with cell equality.
pub fn partition<T: PartialEq>(grid: &Grid<T>) -> Vec<Region> {
    partition_by(grid, |a, b| a == b)
}
