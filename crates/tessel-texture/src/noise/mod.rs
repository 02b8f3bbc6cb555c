//! Tileable noise generators.
//!
//! Every generator writes all mip levels of an [`ImageData`] itself rather
//! than filtering level 0 down, so each level keeps the lattice detail that
//! fits its resolution.

mod gabor;
mod gradient;
mod modified;
mod perlin;
mod value;
mod wavelet;
mod white;
mod worley;

pub use gabor::{GaborNoise, Impulse};
pub use gradient::{GradientNoise, GradientTables};
pub use modified::ModifiedNoise;
pub use perlin::{PerlinNoise, PerlinTables};
pub use value::ValueNoise;
pub use wavelet::WaveletNoise;
pub use white::WhiteNoise;
pub use worley::{FeatureDistances, WorleyNoise};

use crate::curve::WeightCurve;
use crate::image::ImageData;
use crate::lattice::{walk_level, Edge, Lattice, LatticeCell};

/// A generator that fills every level of an image.
pub trait TextureGenerator {
    /// Channels the generator writes per pixel.
    fn channels(&self) -> u32 {
        1
    }

    /// Fills `image`. The channel count must equal [`channels`](Self::channels).
    fn generate(&self, image: &mut ImageData);
}

/// A gradient vector stored at a lattice point.
pub type Gradient = (f32, f32);

/// Runs the lattice walk over every mip level of a single-channel image.
pub(crate) fn walk_levels<F>(image: &mut ImageData, cells: (u32, u32), edges: (Edge, Edge), mut sample: F)
where
    F: FnMut(&LatticeCell) -> f32,
{
    for level in 0..image.mip_level_count() {
        let dimensions = image.dimensions(level);
        tracing::debug!(level, width = dimensions.0, height = dimensions.1, "filling level");
        walk_level(image.pixels_mut(level), dimensions, cells, edges, &mut sample);
    }
}

/// Bilinear blend of four corner values with shaped weights.
#[inline]
pub(crate) fn bilerp<C: WeightCurve>(curve: C, cell: &LatticeCell, tl: f32, tr: f32, bl: f32, br: f32) -> f32 {
    let xw = curve.weight(cell.x);
    let yw = curve.weight(cell.y);
    let top = tl * (1.0 - xw) + tr * xw;
    let bottom = bl * (1.0 - xw) + br * xw;
    top * (1.0 - yw) + bottom * yw
}

/// Blends the four corner gradient ramps of a cell, remapped to around `[0, 1]`.
#[inline]
pub(crate) fn sample_gradients<C: WeightCurve>(curve: C, lattice: &Lattice<Gradient>, cell: &LatticeCell) -> f32 {
    let (tl_x, tl_y) = lattice.get(cell.left, cell.top);
    let (tr_x, tr_y) = lattice.get(cell.right, cell.top);
    let (bl_x, bl_y) = lattice.get(cell.left, cell.bottom);
    let (br_x, br_y) = lattice.get(cell.right, cell.bottom);

    let x0 = cell.x;
    let x1 = x0 - 1.0;
    let y0 = cell.y;
    let y1 = y0 - 1.0;
    let xw = curve.weight(x0);
    let yw = curve.weight(y0);
    let inv_xw = 1.0 - xw;
    let inv_yw = 1.0 - yw;

    let g0 = tl_x.mul_add(x0, tl_y * y0);
    let g1 = tr_x.mul_add(x1, tr_y * y0);
    let g2 = bl_x.mul_add(x0, bl_y * y1);
    let g3 = br_x.mul_add(x1, br_y * y1);

    let top = g0.mul_add(inv_xw, g1 * xw);
    let bottom = g2.mul_add(inv_xw, g3 * xw);
    top.mul_add(inv_yw, bottom * yw).mul_add(0.5, 0.5)
}

/// Values for the control points of a Wang-tiled lattice.
///
/// [`fill_wang_lattice`] asks for points in a fixed order, so sources that
/// draw from an RNG stay reproducible.
pub(crate) trait WangPoints<T> {
    /// The value shared by every tile corner.
    fn corner(&mut self) -> T;
    /// Point `index` (from 1) along a horizontal edge of the given color.
    fn horizontal_edge(&mut self, color: u32, index: u32) -> T;
    /// Point `index` (from 0) along a vertical edge of the given color.
    fn vertical_edge(&mut self, color: u32, index: u32) -> T;
    /// A point inside a tile.
    fn interior(&mut self, x: u32, y: u32) -> T;
}

/// Builds a lattice for a 4x4 Wang tile grid.
///
/// Horizontal boundary rows carry colors `[0, 1, 1, 0]` from top to bottom
/// and vertical boundary columns `[0, 0, 1, 1]` from left to right; the last
/// row and column repeat the first.
pub(crate) fn fill_wang_lattice<T, S>(cells_x: u32, cells_y: u32, points: &mut S) -> Lattice<T>
where
    T: Copy + Default,
    S: WangPoints<T>,
{
    let mut lattice = Lattice::new(cells_x, cells_y);
    let tile_w = cells_x >> 2;
    let tile_h = cells_y >> 2;

    let corner = points.corner();
    for color in 0..2 {
        let row = lattice.row_mut(color * tile_h);
        row[0] = corner;
        for index in 1..tile_w {
            row[index as usize] = points.horizontal_edge(color, index);
        }
        row[tile_w as usize] = corner;
        let tile_w = tile_w as usize;
        for copy in 1..4 {
            row.copy_within(1..=tile_w, 1 + copy * tile_w);
        }
    }
    lattice.copy_row(0, tile_h * 3);
    lattice.copy_row(0, tile_h * 4);
    lattice.copy_row(tile_h, tile_h * 2);

    let mut vertical = Vec::with_capacity(tile_h.saturating_sub(1) as usize);
    for index in 0..tile_h.saturating_sub(1) {
        let first = points.vertical_edge(0, index);
        let second = points.vertical_edge(1, index);
        vertical.push((first, second));
    }

    for tile_y in 0..4 {
        for (i, &(first, second)) in vertical.iter().enumerate() {
            let y = tile_h * tile_y + 1 + i as u32;
            for (tile_x, value) in [first, first, second, second, first].into_iter().enumerate() {
                lattice.set(tile_w * tile_x as u32, y, value);
            }
            for tile_x in 0..4 {
                for x in (tile_w * tile_x + 1)..(tile_w * (tile_x + 1)) {
                    let value = points.interior(x, y);
                    lattice.set(x, y, value);
                }
            }
        }
    }

    lattice
}
