use pixconn_core::Coord;

/// Minimal search interface — provides neighbor enumeration.
///
/// Every search in this crate is generic over `Pather`; the
/// [`ConnectivityGraph`](crate::ConnectivityGraph) is the implementation
/// backed by a binary raster.
pub trait Pather {
    /// Append neighbors of `p` into `buf` in a fixed, deterministic order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>);
}
