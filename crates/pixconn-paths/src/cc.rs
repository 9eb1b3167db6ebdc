//! Connected-component labelling of foreground cells.

use pixconn_core::{Bounds, Coord, Raster};

use crate::traits::Pather;

const UNLABELLED: u32 = u32::MAX;

/// Component labels for every foreground cell of a raster.
#[derive(Debug, Clone)]
pub struct ComponentMap {
    bounds: Bounds,
    labels: Vec<u32>,
    sizes: Vec<usize>,
}

impl ComponentMap {
    /// Component id of `c`; `None` for background or out-of-bounds cells.
    pub fn at(&self, c: Coord) -> Option<u32> {
        let label = self.labels[self.bounds.index(c)?];
        (label != UNLABELLED).then_some(label)
    }

    /// Number of components.
    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    /// Cell count of each component, indexed by id.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Whether `a` and `b` are both foreground and in the same component.
    pub fn same_component(&self, a: Coord, b: Coord) -> bool {
        matches!((self.at(a), self.at(b)), (Some(x), Some(y)) if x == y)
    }
}

/// Label every foreground cell of `raster` with a component id.
///
/// Two cells share a component if `pather` links them by a chain of
/// neighbours. Ids are assigned from 0 in row-major order of each
/// component's first cell.
pub fn label_components<P: Pather>(pather: &P, raster: &Raster) -> ComponentMap {
    let bounds = raster.bounds();
    let mut labels = vec![UNLABELLED; bounds.len()];
    let mut sizes = Vec::new();
    let mut stack: Vec<usize> = Vec::new();
    let mut nbuf = Vec::with_capacity(8);

    for (start, (p, _)) in raster.iter().enumerate() {
        if labels[start] != UNLABELLED || !raster.is_foreground(p) {
            continue;
        }
        let label = sizes.len() as u32;
        let mut size = 0;

        // Iterative DFS from `start`.
        stack.clear();
        stack.push(start);
        labels[start] = label;

        while let Some(ci) = stack.pop() {
            size += 1;
            nbuf.clear();
            pather.neighbors(bounds.coord(ci), &mut nbuf);

            for &np in nbuf.iter() {
                if let Some(ni) = bounds.index(np) {
                    if labels[ni] == UNLABELLED {
                        labels[ni] = label;
                        stack.push(ni);
                    }
                }
            }
        }

        sizes.push(size);
    }

    log::debug!("labelled {} components in {} raster", sizes.len(), bounds);
    ComponentMap {
        bounds,
        labels,
        sizes,
    }
}
