//! Classic gradient noise over a permutation-hashed lattice.

use tessel_recipe::{GradientLatticeParams, Interpolation, TilingMode};

use super::{sample_gradients, walk_levels, Gradient, TextureGenerator};
use crate::curve::{with_curve, WeightCurve};
use crate::image::ImageData;
use crate::lattice::Lattice;
use crate::rng::DeterministicRng;

const TABLE_SIZE: usize = 256;

const GRADIENTS: [Gradient; 16] = [
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (1.0, 1.0),
    (0.0, -1.0),
    (-1.0, 1.0),
    (0.0, -1.0),
];

/// Gradient set and doubled permutation table.
///
/// Built once per [`NoiseEngine`](crate::NoiseEngine) and shared by every
/// Perlin generation.
#[derive(Debug, Clone)]
pub struct PerlinTables {
    permutation: Vec<u32>,
}

impl PerlinTables {
    pub fn new() -> Self {
        let mut rng = DeterministicRng::new(1);
        let mut remaining: Vec<u32> = (0..TABLE_SIZE as u32).collect();
        let mut permutation = vec![0; TABLE_SIZE * 2];
        for i in 0..TABLE_SIZE {
            let index = rng.next_u32() as usize % remaining.len();
            let value = remaining.swap_remove(index);
            permutation[i] = value;
            permutation[i + TABLE_SIZE] = value;
        }
        Self { permutation }
    }

    #[inline]
    fn perm(&self, i: u32) -> u32 {
        self.permutation[i as usize]
    }

    /// Gradient for lattice point `(i, j)`.
    pub fn gradient(&self, i: u32, j: u32) -> Gradient {
        let inner = self.perm(i & 0xFF) + (j & 0xFF);
        GRADIENTS[(self.perm(self.perm(inner)) & 0xF) as usize]
    }
}

impl Default for PerlinTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Perlin noise over a `lattice_width x lattice_height` grid.
#[derive(Debug, Clone)]
pub struct PerlinNoise {
    interpolation: Interpolation,
    lattice: Lattice<Gradient>,
}

impl PerlinNoise {
    pub fn new(params: &GradientLatticeParams, tiling: TilingMode, tables: &PerlinTables) -> Self {
        let (cells_x, cells_y) = (params.lattice_width, params.lattice_height);
        let lattice = match tiling {
            TilingMode::None => Lattice::from_fn(cells_x, cells_y, |x, y| tables.gradient(x, y)),
            TilingMode::Simple => Lattice::from_fn(cells_x, cells_y, |x, y| {
                tables.gradient(x % cells_x, y % cells_y)
            }),
            TilingMode::Wang => {
                let (tile_w, tile_h) = (cells_x >> 2, cells_y >> 2);
                Lattice::from_fn(cells_x, cells_y, |x, y| {
                    let (x, y) = wang_point(x, y, tile_w, tile_h);
                    tables.gradient(x, y)
                })
            }
        };
        Self {
            interpolation: params.interpolation,
            lattice,
        }
    }

    pub fn lattice(&self) -> &Lattice<Gradient> {
        &self.lattice
    }

    fn fill<C: WeightCurve>(&self, curve: C, image: &mut ImageData) {
        let lattice = &self.lattice;
        let cells = (lattice.cells_x(), lattice.cells_y());
        walk_levels(image, cells, lattice.edges(), |cell| {
            sample_gradients(curve, lattice, cell)
        });
    }
}

impl TextureGenerator for PerlinNoise {
    fn generate(&self, image: &mut ImageData) {
        with_curve!(self.interpolation, |curve| self.fill(curve, image))
    }
}

/// Folds a point on a tile boundary onto the strip shared by its edge color.
///
/// Boundary lines carry colors `[0, 0, 1, 1]` in both directions. Corners all
/// fold onto `(0, 0)`; interior points are left alone.
fn wang_point(x: u32, y: u32, tile_w: u32, tile_h: u32) -> (u32, u32) {
    let tile_x = x / tile_w;
    let tile_y = y / tile_h;
    let in_x = x - tile_x * tile_w;
    let in_y = y - tile_y * tile_h;
    let left = (tile_x / 2) & 1;
    let bottom = (tile_y / 2) & 1;

    let x_border = in_x == 0;
    let y_border = in_y == 0;
    let mapped_x = if x_border {
        0
    } else if y_border {
        in_x + bottom * tile_w
    } else {
        x
    };
    let mapped_y = if y_border {
        0
    } else if x_border {
        in_y + left * tile_h
    } else {
        y
    };
    (mapped_x, mapped_y)
}
