//! Adjacency rules over a binary raster.
//!
//! Neighbours are always enumerated orthogonals first (up, down, left, right)
//! and then diagonals (up-left, up-right, down-left, down-right). Breadth-first
//! search expands in this order, so it decides which of several equally short
//! paths is returned.

use std::fmt;
use std::str::FromStr;

use pixconn_core::{Coord, Raster};

use crate::traits::Pather;

/// Which cells count as adjacent to a foreground cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConnectivityMode {
    /// The four orthogonal neighbours (N4).
    #[cfg_attr(feature = "serde", serde(rename = "4"))]
    FourNeighbor,
    /// Orthogonal and diagonal neighbours (N8).
    #[cfg_attr(feature = "serde", serde(rename = "8"))]
    EightNeighbor,
    /// Mixed adjacency: N4, plus a diagonal neighbour only when neither of
    /// the two cells bridging it orthogonally is foreground.
    #[cfg_attr(feature = "serde", serde(rename = "m"))]
    MConnectivity,
}

impl ConnectivityMode {
    pub const ALL: [ConnectivityMode; 3] = [
        ConnectivityMode::FourNeighbor,
        ConnectivityMode::EightNeighbor,
        ConnectivityMode::MConnectivity,
    ];
}

impl fmt::Display for ConnectivityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FourNeighbor => f.write_str("4"),
            Self::EightNeighbor => f.write_str("8"),
            Self::MConnectivity => f.write_str("m"),
        }
    }
}

impl FromStr for ConnectivityMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match s.to_ascii_lowercase().as_str() {
            "4" | "four" | "n4" => Ok(Self::FourNeighbor),
            "8" | "eight" | "n8" => Ok(Self::EightNeighbor),
            "m" | "mixed" => Ok(Self::MConnectivity),
            other => Err(format!(
                "unknown connectivity \u{201c}{other}\u{201d} (expected 4, 8 or m)"
            )),
        }
    }
}

/// The adjacency graph a [`ConnectivityMode`] induces on a raster's
/// foreground cells.
#[derive(Debug, Clone, Copy)]
pub struct ConnectivityGraph<'a> {
    raster: &'a Raster,
    mode: ConnectivityMode,
}

impl<'a> ConnectivityGraph<'a> {
    pub fn new(raster: &'a Raster, mode: ConnectivityMode) -> Self {
        Self { raster, mode }
    }

    #[inline]
    pub fn raster(&self) -> &'a Raster {
        self.raster
    }

    #[inline]
    pub fn mode(&self) -> ConnectivityMode {
        self.mode
    }

    /// Foreground neighbours of `p`. Empty if `p` is out of bounds or
    /// background.
    pub fn neighbors(&self, p: Coord) -> Vec<Coord> {
        let mut buf = Vec::with_capacity(8);
        self.neighbors_into(p, &mut buf);
        buf
    }

    /// Append the foreground neighbours of `p` to `buf`.
    pub fn neighbors_into(&self, p: Coord, buf: &mut Vec<Coord>) {
        let fg = |c: Coord| self.raster.is_foreground(c);
        if !fg(p) {
            return;
        }

        buf.extend(p.neighbors_4().into_iter().filter(|&q| fg(q)));

        match self.mode {
            ConnectivityMode::FourNeighbor => {}
            ConnectivityMode::EightNeighbor => {
                buf.extend(p.diagonals().into_iter().filter(|&q| fg(q)));
            }
            ConnectivityMode::MConnectivity => {
                for d in Coord::DIAGONAL {
                    let q = p + d;
                    // Bridge cells share an edge with both p and q.
                    if fg(q) && !fg(p.shift(d.row, 0)) && !fg(p.shift(0, d.col)) {
                        buf.push(q);
                    }
                }
            }
        }
    }

    /// Whether `q` is a neighbour of `p`.
    pub fn is_adjacent(&self, p: Coord, q: Coord) -> bool {
        self.neighbors(p).contains(&q)
    }
}

impl Pather for ConnectivityGraph<'_> {
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>) {
        self.neighbors_into(p, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const REFERENCE: &str = "\
1010
1101
1010
0101";

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn four_neighbor_order() {
        let r = Raster::parse("010\n111\n010").unwrap();
        let g = ConnectivityGraph::new(&r, ConnectivityMode::FourNeighbor);
        assert_eq!(g.neighbors(c(1, 1)), vec![c(0, 1), c(2, 1), c(1, 0), c(1, 2)]);
    }

    #[test]
    fn eight_neighbor_order() {
        let r = Raster::parse("111\n111\n111").unwrap();
        let g = ConnectivityGraph::new(&r, ConnectivityMode::EightNeighbor);
        assert_eq!(
            g.neighbors(c(1, 1)),
            vec![
                c(0, 1),
                c(2, 1),
                c(1, 0),
                c(1, 2),
                c(0, 0),
                c(0, 2),
                c(2, 0),
                c(2, 2),
            ]
        );
    }

    #[test]
    fn reference_cell_one_one() {
        let r = Raster::parse(REFERENCE).unwrap();
        let p = c(1, 1);

        let n4 = ConnectivityGraph::new(&r, ConnectivityMode::FourNeighbor).neighbors(p);
        assert_eq!(n4, vec![c(1, 0)]);

        let n8 = ConnectivityGraph::new(&r, ConnectivityMode::EightNeighbor).neighbors(p);
        assert_eq!(n8, vec![c(1, 0), c(0, 0), c(0, 2), c(2, 0), c(2, 2)]);

        // (0,0) and (2,0) are already reachable through the foreground bridge
        // (1,0); (0,2) and (2,2) have only background bridges.
        let nm = ConnectivityGraph::new(&r, ConnectivityMode::MConnectivity).neighbors(p);
        assert_eq!(nm, vec![c(1, 0), c(0, 2), c(2, 2)]);
    }

    #[test]
    fn m_excludes_diagonal_when_both_bridges_are_foreground() {
        let r = Raster::parse("11\n11").unwrap();
        let g = ConnectivityGraph::new(&r, ConnectivityMode::MConnectivity);
        assert_eq!(g.neighbors(c(0, 0)), vec![c(1, 0), c(0, 1)]);
        assert!(!g.is_adjacent(c(0, 0), c(1, 1)));
    }

    #[test]
    fn m_keeps_diagonal_with_background_bridges() {
        let r = Raster::parse("01\n10").unwrap();
        let g = ConnectivityGraph::new(&r, ConnectivityMode::MConnectivity);
        assert_eq!(g.neighbors(c(0, 1)), vec![c(1, 0)]);
        assert_eq!(g.neighbors(c(1, 0)), vec![c(0, 1)]);
    }

    #[test]
    fn background_and_out_of_bounds_have_no_neighbors() {
        let r = Raster::parse(REFERENCE).unwrap();
        for mode in ConnectivityMode::ALL {
            let g = ConnectivityGraph::new(&r, mode);
            assert!(g.neighbors(c(0, 1)).is_empty());
            assert!(g.neighbors(c(-1, 0)).is_empty());
            assert!(g.neighbors(c(4, 4)).is_empty());
        }
    }

    #[test]
    fn neighbor_sets_are_nested() {
        let r = Raster::parse(REFERENCE).unwrap();
        for p in r.bounds().iter() {
            let set = |mode| -> HashSet<Coord> {
                ConnectivityGraph::new(&r, mode).neighbors(p).into_iter().collect()
            };
            let n4 = set(ConnectivityMode::FourNeighbor);
            let nm = set(ConnectivityMode::MConnectivity);
            let n8 = set(ConnectivityMode::EightNeighbor);
            assert!(n4.is_subset(&nm), "N4 ⊄ Nm at {p}");
            assert!(nm.is_subset(&n8), "Nm ⊄ N8 at {p}");
        }
    }

    #[test]
    fn adjacency_is_symmetric() {
        let r = Raster::parse("1101\n0111\n1010\n1101").unwrap();
        for mode in ConnectivityMode::ALL {
            let g = ConnectivityGraph::new(&r, mode);
            for p in r.bounds().iter() {
                for q in g.neighbors(p) {
                    assert!(g.is_adjacent(q, p), "{mode}: {p} -> {q} not mirrored");
                }
            }
        }
    }

    #[test]
    fn mode_parsing_and_display() {
        for mode in ConnectivityMode::ALL {
            assert_eq!(mode.to_string().parse::<ConnectivityMode>(), Ok(mode));
        }
        assert_eq!("M".parse::<ConnectivityMode>(), Ok(ConnectivityMode::MConnectivity));
        assert!("6".parse::<ConnectivityMode>().is_err());
    }
}
