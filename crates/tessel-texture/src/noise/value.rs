//! Value noise: random scalars at lattice points, blended with a weight curve.

use tessel_recipe::{TilingMode, ValueNoiseParams};

use super::{bilerp, fill_wang_lattice, walk_levels, TextureGenerator, WangPoints};
use crate::curve::{with_curve, WeightCurve};
use crate::image::ImageData;
use crate::lattice::Lattice;
use crate::rng::DeterministicRng;

/// Value noise over a fixed lattice.
#[derive(Debug, Clone)]
pub struct ValueNoise {
    params: ValueNoiseParams,
    lattice: Lattice<f32>,
}

impl ValueNoise {
    /// Draws the lattice for `tiling`.
    ///
    /// Wang tiling needs lattice dimensions divisible by 4.
    pub fn new(params: &ValueNoiseParams, tiling: TilingMode) -> Self {
        let mut draw = RandomPoints {
            rng: DeterministicRng::new(params.seed),
            min: params.range_min,
            max: params.range_max,
        };
        let (cells_x, cells_y) = (params.lattice_width, params.lattice_height);
        let lattice = match tiling {
            TilingMode::None => Lattice::from_fn(cells_x, cells_y, |_, _| draw.next()),
            TilingMode::Simple => periodic_lattice(cells_x, cells_y, &mut draw),
            TilingMode::Wang => fill_wang_lattice(cells_x, cells_y, &mut draw),
        };
        Self {
            params: params.clone(),
            lattice,
        }
    }

    pub fn lattice(&self) -> &Lattice<f32> {
        &self.lattice
    }

    fn fill<C: WeightCurve>(&self, curve: C, image: &mut ImageData) {
        let lattice = &self.lattice;
        let cells = (lattice.cells_x(), lattice.cells_y());
        walk_levels(image, cells, lattice.edges(), |cell| {
            bilerp(
                curve,
                cell,
                lattice.get(cell.left, cell.top),
                lattice.get(cell.right, cell.top),
                lattice.get(cell.left, cell.bottom),
                lattice.get(cell.right, cell.bottom),
            )
        });
    }
}

impl TextureGenerator for ValueNoise {
    fn generate(&self, image: &mut ImageData) {
        with_curve!(self.params.interpolation, |curve| self.fill(curve, image))
    }
}

struct RandomPoints {
    rng: DeterministicRng,
    min: f32,
    max: f32,
}

impl RandomPoints {
    fn next(&mut self) -> f32 {
        self.rng.uniform_range(self.min, self.max)
    }
}

impl WangPoints<f32> for RandomPoints {
    fn corner(&mut self) -> f32 {
        self.next()
    }

    fn horizontal_edge(&mut self, _color: u32, _index: u32) -> f32 {
        self.next()
    }

    fn vertical_edge(&mut self, _color: u32, _index: u32) -> f32 {
        self.next()
    }

    fn interior(&mut self, _x: u32, _y: u32) -> f32 {
        self.next()
    }
}

/// Lattice whose last row and column repeat the first.
fn periodic_lattice(cells_x: u32, cells_y: u32, draw: &mut RandomPoints) -> Lattice<f32> {
    let mut lattice = Lattice::new(cells_x, cells_y);

    let corner = draw.next();
    let top = lattice.row_mut(0);
    top[0] = corner;
    for value in &mut top[1..cells_x as usize] {
        *value = draw.next();
    }
    top[cells_x as usize] = corner;

    for y in 1..cells_y {
        let row = lattice.row_mut(y);
        let border = draw.next();
        row[0] = border;
        for value in &mut row[1..cells_x as usize] {
            *value = draw.next();
        }
        row[cells_x as usize] = border;
    }
    lattice.copy_row(0, cells_y);

    lattice
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(cells: u32) -> ValueNoiseParams {
        ValueNoiseParams {
            lattice_width: cells,
            lattice_height: cells,
            ..Default::default()
        }
    }

    #[test]
    fn test_simple_lattice_wraps() {
        let noise = ValueNoise::new(&params(4), TilingMode::Simple);
        let lattice = noise.lattice();
        assert_eq!(lattice.row(0), lattice.row(4));
        for y in 0..=4 {
            assert_eq!(lattice.get(0, y), lattice.get(4, y));
        }
    }

    #[test]
    fn test_lattice_draw_order() {
        let noise = ValueNoise::new(&params(4), TilingMode::Simple);
        let mut rng = DeterministicRng::new(1);
        let corner = rng.uniform();
        assert_eq!(noise.lattice().get(0, 0), corner);
        assert_eq!(noise.lattice().get(1, 0), rng.uniform());
    }

    #[test]
    fn test_values_in_range() {
        let p = ValueNoiseParams {
            range_min: -1.0,
            range_max: 1.0,
            ..params(8)
        };
        let noise = ValueNoise::new(&p, TilingMode::Wang);
        let mut image = ImageData::new(32, 32, 1, true).unwrap();
        noise.generate(&mut image);
        for level in 0..image.mip_level_count() {
            assert!(image.pixels(level).iter().all(|v| (-1.0..=1.0).contains(v)));
        }
    }

    #[test]
    fn test_untiled_lattice_edges_differ() {
        let noise = ValueNoise::new(&params(4), TilingMode::None);
        assert_ne!(noise.lattice().row(0), noise.lattice().row(4));
    }
}
