//! Breadth-first search: single-pair shortest paths and hop-distance maps.

use std::collections::VecDeque;

use pixconn_core::{Bounds, Coord};

use crate::report::Path;
use crate::traits::Pather;

const UNVISITED: usize = usize::MAX;

/// Sentinel distance for cells a [`DistanceMap`] did not reach.
pub const UNREACHABLE: u32 = u32::MAX;

/// A cell with its hop distance from the source of a [`DistanceMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Coord,
    pub cost: u32,
}

// ---------------------------------------------------------------------------
// Single-pair search
// ---------------------------------------------------------------------------

/// Bookkeeping for one search call. Each cell records the cell it was
/// discovered from; a cell is visited once it has a parent, and the start is
/// its own parent.
pub(crate) struct SearchState {
    bounds: Bounds,
    parent: Vec<usize>,
    queue: VecDeque<usize>,
    nbuf: Vec<Coord>,
    /// Cells popped from the queue and expanded.
    pub(crate) expanded: usize,
}

impl SearchState {
    pub(crate) fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            parent: vec![UNVISITED; bounds.len()],
            queue: VecDeque::new(),
            nbuf: Vec::with_capacity(8),
            expanded: 0,
        }
    }

    /// Run until `goal` is dequeued or the frontier is exhausted. Returns
    /// whether `goal` was reached.
    pub(crate) fn run<P: Pather>(&mut self, pather: &P, start: usize, goal: usize) -> bool {
        self.parent[start] = start;
        self.queue.push_back(start);

        while let Some(ci) = self.queue.pop_front() {
            if ci == goal {
                return true;
            }
            self.expanded += 1;
            let cp = self.bounds.coord(ci);
            log::trace!("expand {cp}");

            self.nbuf.clear();
            pather.neighbors(cp, &mut self.nbuf);

            for &np in self.nbuf.iter() {
                let Some(ni) = self.bounds.index(np) else {
                    continue;
                };
                if self.parent[ni] != UNVISITED {
                    continue;
                }
                // Visited on discovery, so no cell is queued twice.
                self.parent[ni] = ci;
                self.queue.push_back(ni);
            }
        }
        false
    }

    /// Walk parent links back from a visited `goal`.
    pub(crate) fn path_to(&self, goal: usize) -> Path {
        let mut cells = Vec::new();
        let mut ci = goal;
        loop {
            cells.push(self.bounds.coord(ci));
            let pi = self.parent[ci];
            if pi == ci {
                break;
            }
            ci = pi;
        }
        cells.reverse();
        Path::from_coords(cells)
    }
}

/// Search with the expansion count, for logging and tests.
pub(crate) fn search<P: Pather>(
    pather: &P,
    bounds: Bounds,
    start: Coord,
    end: Coord,
) -> (Option<Path>, usize) {
    let (Some(si), Some(gi)) = (bounds.index(start), bounds.index(end)) else {
        return (None, 0);
    };
    if si == gi {
        return (Some(Path::from_coords(vec![start])), 0);
    }

    let mut state = SearchState::new(bounds);
    let path = state.run(pather, si, gi).then(|| state.path_to(gi));
    (path, state.expanded)
}

/// Shortest path (fewest cells) from `start` to `end` over the graph
/// `pather` defines on `bounds`.
///
/// Returns `None` if either endpoint is outside `bounds` or `end` is not
/// reachable. Among equally short paths, the one discovered first in
/// neighbour enumeration order wins.
pub fn shortest_path<P: Pather>(
    pather: &P,
    bounds: Bounds,
    start: Coord,
    end: Coord,
) -> Option<Path> {
    search(pather, bounds, start, end).0
}

// ---------------------------------------------------------------------------
// Distance map
// ---------------------------------------------------------------------------

/// Hop distances (edges, not cells) from one source to every reachable cell.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    bounds: Bounds,
    dist: Vec<u32>,
    reached: Vec<PathNode>,
}

impl DistanceMap {
    /// A map with no reached cells.
    pub(crate) fn empty(bounds: Bounds) -> Self {
        Self {
            bounds,
            dist: vec![UNREACHABLE; bounds.len()],
            reached: Vec::new(),
        }
    }

    /// Distance to `c`, or `None` if `c` is out of bounds or unreached.
    pub fn at(&self, c: Coord) -> Option<u32> {
        let d = self.dist[self.bounds.index(c)?];
        (d != UNREACHABLE).then_some(d)
    }

    /// Every reached cell in discovery order, source first.
    pub fn reached(&self) -> &[PathNode] {
        &self.reached
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// Breadth-first hop distances from `source`. An out-of-bounds source
/// yields an empty map.
pub fn distance_map<P: Pather>(pather: &P, bounds: Bounds, source: Coord) -> DistanceMap {
    let mut map = DistanceMap::empty(bounds);
    let Some(si) = bounds.index(source) else {
        return map;
    };

    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut nbuf = Vec::with_capacity(8);
    map.dist[si] = 0;
    map.reached.push(PathNode {
        pos: source,
        cost: 0,
    });
    queue.push_back(si);

    while let Some(ci) = queue.pop_front() {
        let current = map.dist[ci];
        nbuf.clear();
        pather.neighbors(bounds.coord(ci), &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = bounds.index(np) else {
                continue;
            };
            if map.dist[ni] != UNREACHABLE {
                continue;
            }
            map.dist[ni] = current + 1;
            map.reached.push(PathNode {
                pos: np,
                cost: current + 1,
            });
            queue.push_back(ni);
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectivity::{ConnectivityGraph, ConnectivityMode};
    use pixconn_core::Raster;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    /// Open grid with 4-way movement and no raster behind it.
    struct Open(Bounds);

    impl Pather for Open {
        fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>) {
            buf.extend(p.neighbors_4().into_iter().filter(|&q| self.0.contains(q)));
        }
    }

    #[test]
    fn open_grid_path_length() {
        let b = Bounds::new(5, 5);
        let path = shortest_path(&Open(b), b, c(0, 0), c(4, 4)).unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path.start(), c(0, 0));
        assert_eq!(path.end(), c(4, 4));
    }

    #[test]
    fn ties_follow_enumeration_order() {
        // Down is enumerated before right, so the path turns down first.
        let b = Bounds::new(2, 2);
        let path = shortest_path(&Open(b), b, c(0, 0), c(1, 1)).unwrap();
        assert_eq!(path.as_slice(), &[c(0, 0), c(1, 0), c(1, 1)]);
    }

    #[test]
    fn out_of_bounds_endpoints_yield_none() {
        let b = Bounds::new(3, 3);
        assert!(shortest_path(&Open(b), b, c(-1, 0), c(1, 1)).is_none());
        assert!(shortest_path(&Open(b), b, c(0, 0), c(3, 3)).is_none());
    }

    #[test]
    fn each_cell_is_expanded_at_most_once() {
        // Start component {(0,0),(0,1),(1,0),(1,1)}; end isolated.
        let r = Raster::parse("1100\n1100\n0001").unwrap();
        let g = ConnectivityGraph::new(&r, ConnectivityMode::EightNeighbor);
        let (path, expanded) = search(&g, r.bounds(), c(0, 0), c(2, 3));
        assert!(path.is_none());
        assert_eq!(expanded, 4);
    }

    #[test]
    fn search_stops_when_goal_dequeued() {
        let r = Raster::parse("111\n111\n111").unwrap();
        let g = ConnectivityGraph::new(&r, ConnectivityMode::FourNeighbor);
        let (path, expanded) = search(&g, r.bounds(), c(0, 0), c(0, 1));
        assert_eq!(path.unwrap().len(), 2);
        // (0,0) and (1,0) are expanded before (0,1) leaves the queue.
        assert_eq!(expanded, 2);
    }

    #[test]
    fn distance_map_counts_hops() {
        let r = Raster::parse("111\n001\n111").unwrap();
        let g = ConnectivityGraph::new(&r, ConnectivityMode::FourNeighbor);
        let m = distance_map(&g, r.bounds(), c(0, 0));
        assert_eq!(m.at(c(0, 0)), Some(0));
        assert_eq!(m.at(c(1, 2)), Some(3));
        assert_eq!(m.at(c(2, 0)), Some(6));
        assert_eq!(m.at(c(1, 0)), None);
        assert_eq!(m.at(c(9, 9)), None);
        assert_eq!(m.reached().len(), 7);
        assert_eq!(m.reached()[0], PathNode { pos: c(0, 0), cost: 0 });
    }

    #[test]
    fn distance_map_from_outside_is_empty() {
        let b = Bounds::new(2, 2);
        let m = distance_map(&Open(b), b, c(5, 5));
        assert!(m.reached().is_empty());
        assert_eq!(m.at(c(0, 0)), None);
    }
}
