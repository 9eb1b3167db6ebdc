//! Pixel connectivity and shortest paths over binary rasters.
//!
//! A [`ConnectivityGraph`] turns a [`Raster`](pixconn_core::Raster) and a
//! [`ConnectivityMode`] into an adjacency graph on the foreground cells:
//!
//! | Mode | Neighbours of `p` |
//! |---|---|
//! | [`FourNeighbor`](ConnectivityMode::FourNeighbor) | up, down, left, right |
//! | [`EightNeighbor`](ConnectivityMode::EightNeighbor) | the four above plus the four diagonals |
//! | [`MConnectivity`](ConnectivityMode::MConnectivity) | the four above, plus a diagonal only when both bridging cells are background |
//!
//! On top of that graph the crate provides:
//!
//! - **Shortest path** between two cells ([`find_shortest_path`], [`PathFinder::find`])
//! - **BFS** hop-distance maps ([`distance_map`], [`PathFinder::distances`])
//! - **Connected components** labelling ([`label_components`], [`PathFinder::components`])
//!
//! All searches are generic over the [`Pather`] trait and are deterministic:
//! ties between equally short paths are broken by neighbour enumeration
//! order.

mod bfs;
mod cc;
mod connectivity;
mod distance;
mod error;
mod finder;
mod report;
mod traits;

pub use bfs::{DistanceMap, PathNode, UNREACHABLE, distance_map, shortest_path};
pub use cc::{ComponentMap, label_components};
pub use connectivity::{ConnectivityGraph, ConnectivityMode};
pub use distance::{chebyshev, manhattan};
pub use error::{Endpoint, PathError};
pub use finder::{PathFinder, find_shortest_path, find_shortest_path_in_rows};
pub use report::{Path, PathReport};
pub use traits::Pather;
