//! Cellular (Worley) noise.
//!
//! Every cell scatters a random number of feature points, seeded from the
//! cell's canonical index. A pixel finds its nearest and second-nearest
//! point among the 3x3 neighbouring cells, takes a color seeded by the
//! nearest point, and darkens it towards the cell boundary.

use tessel_recipe::{TilingMode, WorleyNoiseParams};

use super::TextureGenerator;
use crate::image::ImageData;
use crate::rng::DeterministicRng;
use crate::tiling::{IndexProvider, TilingIndex};

/// The two smallest squared distances seen so far and the ids of their points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureDistances {
    pub nearest: f32,
    pub second: f32,
    pub nearest_id: u32,
    pub second_id: u32,
}

impl FeatureDistances {
    /// Starts with both distances at `initial` and no points.
    pub fn new(initial: f32) -> Self {
        Self {
            nearest: initial,
            second: initial,
            nearest_id: 0,
            second_id: 0,
        }
    }

    pub fn update(&mut self, distance: f32, id: u32) {
        if distance < self.nearest {
            self.second = self.nearest;
            self.second_id = self.nearest_id;
            self.nearest = distance;
            self.nearest_id = id;
        } else if distance < self.second {
            self.second = distance;
            self.second_id = id;
        }
    }

    /// `1 - nearest / second`: 0 on the boundary between two cells, towards 1
    /// at a feature point.
    pub fn boundary_factor(&self) -> f32 {
        if self.second > 0.0 {
            1.0 - self.nearest / self.second
        } else {
            0.0
        }
    }
}

/// Worley noise writing RGBA.
#[derive(Debug, Clone)]
pub struct WorleyNoise {
    params: WorleyNoiseParams,
    cells_per_row: u32,
    provider: IndexProvider,
}

impl WorleyNoise {
    /// `width` is the level-0 image width; it resolves the default cells per row.
    pub fn new(params: &WorleyNoiseParams, tiling: TilingMode, width: u32) -> Self {
        let cells_per_row = params.resolved_cells_per_row(width);
        Self {
            params: params.clone(),
            cells_per_row,
            provider: IndexProvider::for_mode(tiling, cells_per_row),
        }
    }

    fn cell_seed(&self, i: i32, j: i32) -> u32 {
        self.params.cell_index_offset.wrapping_add(self.provider.index(i, j))
    }

    /// Feature points of cell `(i, j)` as offsets in `[0, 1]` from the cell
    /// corner. Cells that share a canonical index share their points.
    pub fn feature_points(&self, i: i32, j: i32) -> impl Iterator<Item = [f32; 2]> {
        let mut rng = DeterministicRng::new(self.cell_seed(i, j));
        let count = rng.uniform_u32(self.params.min_points_per_cell, self.params.max_points_per_cell);
        (0..count).map(move |_| [rng.uniform(), rng.uniform()])
    }

    fn scatter(&self, distances: &mut FeatureDistances, i: i32, j: i32, x: f32, y: f32) {
        let seed = self.cell_seed(i, j);
        let id_step = self.cells_per_row.wrapping_mul(self.cells_per_row);
        for (point, [px, py]) in (0u32..).zip(self.feature_points(i, j)) {
            let xi = x - px;
            let yi = y - py;
            distances.update(xi * xi + yi * yi, seed.wrapping_add(point.wrapping_mul(id_step)));
        }
    }

    /// RGBA at pixel position `(x, y)` in level-0 units.
    pub fn sample(&self, x: f32, y: f32) -> [f32; 4] {
        let cell_size = self.params.cell_size as f32;
        let scaled_x = x / cell_size;
        let scaled_y = y / cell_size;
        let fx = scaled_x - scaled_x.floor();
        let fy = scaled_y - scaled_y.floor();
        let ix = scaled_x as i32;
        let iy = scaled_y as i32;

        let limit = cell_size * 2.0;
        let mut distances = FeatureDistances::new(limit * limit);
        for j in -1..=1 {
            for i in -1..=1 {
                self.scatter(&mut distances, ix + i, iy + j, fx - i as f32, fy - j as f32);
            }
        }

        let mut rng = DeterministicRng::new(distances.nearest_id);
        let factor = distances.boundary_factor();
        let mul = self.params.color_multiplier;
        let add = self.params.color_offset;
        [
            rng.uniform().mul_add(mul[0], add[0]) * factor,
            rng.uniform().mul_add(mul[1], add[1]) * factor,
            rng.uniform().mul_add(mul[2], add[2]) * factor,
            1.0,
        ]
    }
}

impl TextureGenerator for WorleyNoise {
    fn channels(&self) -> u32 {
        4
    }

    fn generate(&self, image: &mut ImageData) {
        let (width, height) = (image.width() as f32, image.height() as f32);
        for level in 0..image.mip_level_count() {
            let (w, h) = image.dimensions(level);
            tracing::debug!(level, width = w, height = h, "filling level");
            let scale_x = width / w as f32;
            let scale_y = height / h as f32;
            let pixels = image.pixels_mut(level);
            for y in 0..h {
                let sy = y as f32 * scale_y;
                for x in 0..w {
                    let start = (y as usize * w as usize + x as usize) * 4;
                    pixels[start..start + 4].copy_from_slice(&self.sample(x as f32 * scale_x, sy));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn noise(tiling: TilingMode) -> WorleyNoise {
        let params = WorleyNoiseParams {
            cell_size: 8,
            ..Default::default()
        };
        WorleyNoise::new(&params, tiling, 64)
    }

    #[test]
    fn test_update_keeps_two_smallest() {
        let mut d = FeatureDistances::new(100.0);
        d.update(5.0, 1);
        d.update(3.0, 2);
        d.update(4.0, 3);
        d.update(9.0, 4);
        assert_eq!(d.nearest, 3.0);
        assert_eq!(d.nearest_id, 2);
        assert_eq!(d.second, 4.0);
        assert_eq!(d.second_id, 3);
    }

    #[test]
    fn test_boundary_factor() {
        let mut d = FeatureDistances::new(100.0);
        d.update(1.0, 1);
        d.update(1.0, 2);
        assert_eq!(d.boundary_factor(), 0.0);

        let mut d = FeatureDistances::new(100.0);
        d.update(1.0, 1);
        d.update(4.0, 2);
        assert_eq!(d.boundary_factor(), 0.75);
        assert_eq!(FeatureDistances::new(0.0).boundary_factor(), 0.0);
    }

    #[test]
    fn test_simple_tiling_wraps_samples() {
        let worley = noise(TilingMode::Simple);
        for &(x, y) in &[(5.0, 3.0), (0.0, 0.0), (63.0, 17.0)] {
            assert_eq!(worley.sample(x, y), worley.sample(x + 64.0, y));
            assert_eq!(worley.sample(x, y), worley.sample(x, y + 64.0));
        }
    }

    #[test]
    fn test_generate_writes_opaque_rgba() {
        let worley = noise(TilingMode::Wang);
        let mut image = ImageData::new(64, 64, 4, true).unwrap();
        worley.generate(&mut image);
        for level in 0..image.mip_level_count() {
            for pixel in image.pixels(level).chunks_exact(4) {
                assert_eq!(pixel[3], 1.0);
                assert!(pixel[..3].iter().all(|c| (0.0..=1.0).contains(c)));
            }
        }
    }
}
