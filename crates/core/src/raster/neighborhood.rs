//! Neighborhood operations for raster analysis

use super::{GridIndex, Raster, RasterElement};

/// Defines a neighborhood pattern around a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighborhood {
    /// 3x3 neighborhood (8 neighbors + center)
    Queen3x3,
    /// Custom square neighborhood of given radius
    Square(usize),
}

impl Neighborhood {
    /// Get the radius of the neighborhood
    pub fn radius(&self) -> usize {
        match self {
            Neighborhood::Queen3x3 => 1,
            Neighborhood::Square(r) => *r,
        }
    }

    /// Relative positions in this neighborhood, in row-major order
    /// (top row first, left to right).
    ///
    /// Tie-breaking in the descent tracer depends on this order.
    pub fn offsets(&self) -> Vec<(isize, isize)> {
        let r = self.radius() as isize;
        let mut offsets = Vec::new();

        for dr in -r..=r {
            for dc in -r..=r {
                offsets.push((dr, dc));
            }
        }

        offsets
    }

    /// Get offsets excluding the center cell
    pub fn offsets_no_center(&self) -> Vec<(isize, isize)> {
        self.offsets()
            .into_iter()
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .collect()
    }
}

/// How out-of-range positions are mapped back into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Clamp to the nearest edge cell (`a a a | a b c d | d d d`)
    Nearest,
    /// Mirror about the edge, repeating the edge cell (`c b a | a b c d | d c b`)
    #[default]
    Reflect,
}

impl Boundary {
    /// Map a possibly out-of-range position onto `0..len`.
    ///
    /// An empty axis (`len == 0`) maps everything to 0.
    pub fn resolve(&self, pos: isize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let n = len as isize;
        if (0..n).contains(&pos) {
            return pos as usize;
        }
        match self {
            Boundary::Nearest => pos.clamp(0, n - 1) as usize,
            Boundary::Reflect => {
                let period = 2 * n;
                let m = pos.rem_euclid(period);
                if m < n {
                    m as usize
                } else {
                    (period - 1 - m) as usize
                }
            }
        }
    }
}

/// Iterator over the values of a neighborhood, with out-of-range
/// positions resolved through a [`Boundary`] mode.
///
/// Yields `(source_index, value)` where `source_index` is the in-bounds
/// cell the value was read from.
pub struct NeighborhoodIterator<'a, T: RasterElement> {
    raster: &'a Raster<T>,
    center: GridIndex,
    offsets: Vec<(isize, isize)>,
    boundary: Boundary,
    index: usize,
}

impl<'a, T: RasterElement> NeighborhoodIterator<'a, T> {
    /// `center` must lie inside `raster`.
    pub fn new(
        raster: &'a Raster<T>,
        center: GridIndex,
        neighborhood: Neighborhood,
        boundary: Boundary,
    ) -> Self {
        Self {
            raster,
            center,
            offsets: neighborhood.offsets(),
            boundary,
            index: 0,
        }
    }
}

impl<'a, T: RasterElement> Iterator for NeighborhoodIterator<'a, T> {
    type Item = (GridIndex, T);

    fn next(&mut self) -> Option<Self::Item> {
        let &(dr, dc) = self.offsets.get(self.index)?;
        self.index += 1;

        let (rows, cols) = self.raster.shape();
        let r = self.boundary.resolve(self.center.row as isize + dr, rows);
        let c = self.boundary.resolve(self.center.col as isize + dc, cols);
        let value = self.raster.data()[(r, c)];
        Some((GridIndex::new(r, c), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.offsets.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, T: RasterElement> ExactSizeIterator for NeighborhoodIterator<'a, T> {}
