//! Gradient noise with gradients picked by an arithmetic hash instead of a
//! permutation table.

use tessel_recipe::{GradientLatticeParams, Interpolation, TilingMode};

use super::{fill_wang_lattice, sample_gradients, walk_levels, Gradient, TextureGenerator, WangPoints};
use crate::curve::{with_curve, WeightCurve};
use crate::image::ImageData;
use crate::lattice::Lattice;

const GRADIENTS: [Gradient; 4] = [(1.0, 1.0), (-1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)];

#[inline]
fn hash(value: u32) -> u32 {
    let t = value.wrapping_mul(value) % 61;
    let t = t.wrapping_mul(t) % 61;
    t.wrapping_mul(t) % 61
}

#[inline]
fn gradient(x: u32, y: u32) -> Gradient {
    GRADIENTS[(hash(y.wrapping_add(hash(x))) & 3) as usize]
}

/// Modified noise over a `lattice_width x lattice_height` grid.
#[derive(Debug, Clone)]
pub struct ModifiedNoise {
    interpolation: Interpolation,
    lattice: Lattice<Gradient>,
}

impl ModifiedNoise {
    pub fn new(params: &GradientLatticeParams, tiling: TilingMode) -> Self {
        let (cells_x, cells_y) = (params.lattice_width, params.lattice_height);
        let lattice = match tiling {
            TilingMode::None => Lattice::from_fn(cells_x, cells_y, |x, y| gradient(x + 1, y + 1)),
            TilingMode::Simple => Lattice::from_fn(cells_x, cells_y, |x, y| {
                gradient(x % cells_x + 1, y % cells_y + 1)
            }),
            TilingMode::Wang => fill_wang_lattice(
                cells_x,
                cells_y,
                &mut HashedPoints {
                    tile_height: cells_y >> 2,
                },
            ),
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

impl TextureGenerator for ModifiedNoise {
    fn generate(&self, image: &mut ImageData) {
        with_curve!(self.interpolation, |curve| self.fill(curve, image))
    }
}

struct HashedPoints {
    tile_height: u32,
}

impl WangPoints<Gradient> for HashedPoints {
    fn corner(&mut self) -> Gradient {
        gradient(1, 1)
    }

    fn horizontal_edge(&mut self, color: u32, index: u32) -> Gradient {
        gradient(index, color * self.tile_height + 1)
    }

    fn vertical_edge(&mut self, color: u32, index: u32) -> Gradient {
        gradient(1, index + color * self.tile_height + 1)
    }

    fn interior(&mut self, x: u32, y: u32) -> Gradient {
        gradient(x + 1, y + 1)
    }
}
