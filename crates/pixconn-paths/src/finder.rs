//! Raster-level shortest-path queries.
//!
//! # Endpoint policy
//!
//! Endpoints outside the raster are rejected with
//! [`PathError::OutOfBounds`] before any search work. A background endpoint
//! is *not* an error: it has no neighbours and can never lie on a path, so
//! the query answers [`PathReport::NotFound`]. This includes `start == end`
//! on a background cell; a foreground `start == end` is the one-cell path.

use pixconn_core::{Coord, Raster};

use crate::bfs::{self, DistanceMap};
use crate::cc::{self, ComponentMap};
use crate::connectivity::{ConnectivityGraph, ConnectivityMode};
use crate::error::{Endpoint, PathError};
use crate::report::PathReport;

/// Shortest-path queries over one raster under one connectivity mode.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'a> {
    graph: ConnectivityGraph<'a>,
}

impl<'a> PathFinder<'a> {
    pub fn new(raster: &'a Raster, mode: ConnectivityMode) -> Self {
        Self {
            graph: ConnectivityGraph::new(raster, mode),
        }
    }

    #[inline]
    pub fn graph(&self) -> &ConnectivityGraph<'a> {
        &self.graph
    }

    #[inline]
    pub fn mode(&self) -> ConnectivityMode {
        self.graph.mode()
    }

    #[inline]
    pub fn raster(&self) -> &'a Raster {
        self.graph.raster()
    }

    /// Shortest path from `start` to `end`, counted in cells.
    pub fn find(&self, start: Coord, end: Coord) -> Result<PathReport, PathError> {
        let raster = self.raster();
        self.check_bounds(Endpoint::Start, start)?;
        self.check_bounds(Endpoint::End, end)?;

        let mode = self.mode();
        if !raster.is_foreground(start) || !raster.is_foreground(end) {
            log::debug!("{mode}-connectivity {start} -> {end}: background endpoint");
            return Ok(PathReport::NotFound);
        }

        log::debug!("{mode}-connectivity search {start} -> {end} in {}", raster.bounds());
        let (path, expanded) = bfs::search(&self.graph, raster.bounds(), start, end);
        match &path {
            Some(p) => log::debug!("found path of {} cells, {expanded} cells expanded", p.len()),
            None => log::debug!("no path, {expanded} cells expanded"),
        }
        Ok(PathReport::from(path))
    }

    /// Hop distances from `source` to every cell reachable from it.
    ///
    /// A background source follows the endpoint policy: it reaches nothing,
    /// itself included.
    pub fn distances(&self, source: Coord) -> Result<DistanceMap, PathError> {
        self.check_bounds(Endpoint::Start, source)?;
        let bounds = self.raster().bounds();
        if !self.raster().is_foreground(source) {
            return Ok(DistanceMap::empty(bounds));
        }
        Ok(bfs::distance_map(&self.graph, bounds, source))
    }

    /// Connected components of the foreground under this mode.
    pub fn components(&self) -> ComponentMap {
        cc::label_components(&self.graph, self.raster())
    }

    fn check_bounds(&self, endpoint: Endpoint, coord: Coord) -> Result<(), PathError> {
        let raster = self.raster();
        if raster.contains(coord) {
            return Ok(());
        }
        Err(PathError::OutOfBounds {
            endpoint,
            coord,
            rows: raster.rows(),
            cols: raster.cols(),
        })
    }
}

/// Shortest path between two cells of `raster` under `mode`.
///
/// See the module docs for how out-of-bounds and background endpoints are
/// handled.
pub fn find_shortest_path(
    raster: &Raster,
    mode: ConnectivityMode,
    start: Coord,
    end: Coord,
) -> Result<PathReport, PathError> {
    PathFinder::new(raster, mode).find(start, end)
}

/// Like [`find_shortest_path`], validating raw rows into a [`Raster`] first.
/// Ragged rows or values other than 0/1 fail with
/// [`PathError::InvalidInput`].
pub fn find_shortest_path_in_rows<R: AsRef<[u8]>>(
    rows: &[R],
    mode: ConnectivityMode,
    start: Coord,
    end: Coord,
) -> Result<PathReport, PathError> {
    let raster = Raster::from_rows(rows)?;
    find_shortest_path(&raster, mode, start, end)
}
