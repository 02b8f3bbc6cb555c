//! Gradient noise with a radial falloff kernel.
//!
//! Each pixel sums the contributions of the 4x4 lattice points around its
//! cell. A point contributes `dot(gradient, offset) * (4t^5 - 3t^4)` with
//! `t = 1 - d^2 / 4`, and nothing once `d >= 2`, so the blend needs no weight
//! curve.

use tessel_recipe::{GradientNoiseParams, TilingMode};

use super::{walk_levels, Gradient, TextureGenerator};
use crate::image::ImageData;
use crate::lattice::{Edge, LatticeCell};
use crate::rng::DeterministicRng;
use crate::tiling::WangTiling;

const TABLE_SIZE: usize = 256;

/// Border width, in lattice points, that the kernel reaches across a tile edge.
const KERNEL_REACH: u32 = 2;

/// Random gradients and three hash permutations, all drawn from seed 2.
#[derive(Debug, Clone)]
pub struct GradientTables {
    gradients: Vec<Gradient>,
    permutations: [Vec<u32>; 3],
}

impl GradientTables {
    pub fn new() -> Self {
        let mut rng = DeterministicRng::new(2);
        let gradients = (0..TABLE_SIZE)
            .map(|_| {
                let x = rng.uniform_range(-1.0, 1.0);
                let y = rng.uniform_range(-1.0, 1.0);
                let z = rng.uniform_range(-1.0, 1.0);
                let n = x * x + y * y + z * z;
                (x / n, y / n)
            })
            .collect();
        let permutations = [
            permutation(&mut rng),
            permutation(&mut rng),
            permutation(&mut rng),
        ];
        Self {
            gradients,
            permutations,
        }
    }

    /// Gradient for lattice point `(i, j)`.
    #[inline]
    pub fn gradient(&self, i: u32, j: u32) -> Gradient {
        let [px, py, pz] = &self.permutations;
        let hash = px[(i & 0xFF) as usize] ^ py[(j & 0xFF) as usize] ^ pz[0];
        self.gradients[hash as usize]
    }
}

impl Default for GradientTables {
    fn default() -> Self {
        Self::new()
    }
}

fn permutation(rng: &mut DeterministicRng) -> Vec<u32> {
    let mut remaining: Vec<u32> = (0..TABLE_SIZE as u32).collect();
    let mut table = Vec::with_capacity(TABLE_SIZE * 2);
    for _ in 0..TABLE_SIZE {
        let index = rng.next_u32() as usize % remaining.len();
        table.push(remaining.swap_remove(index));
    }
    table.extend_from_within(..TABLE_SIZE);
    table
}

/// Maps an unbounded lattice coordinate to the point whose gradient it uses.
#[derive(Debug, Clone, Copy)]
enum PointMap {
    Raw,
    Wrap { columns: i64, rows: i64 },
    Wang { columns: i64, rows: i64, tiling: WangTiling },
}

impl PointMap {
    fn new(tiling: TilingMode, columns: u32, rows: u32) -> Self {
        let (c, r) = (i64::from(columns), i64::from(rows));
        match tiling {
            TilingMode::None => PointMap::Raw,
            TilingMode::Simple => PointMap::Wrap { columns: c, rows: r },
            TilingMode::Wang => PointMap::Wang {
                columns: c,
                rows: r,
                tiling: WangTiling::rectangular(columns, rows, KERNEL_REACH),
            },
        }
    }

    #[inline]
    fn map(&self, x: i64, y: i64) -> (u32, u32) {
        match *self {
            PointMap::Raw => (x as u32, y as u32),
            PointMap::Wrap { columns, rows } => {
                (x.rem_euclid(columns) as u32, y.rem_euclid(rows) as u32)
            }
            PointMap::Wang {
                columns,
                rows,
                tiling,
            } => tiling.canonical(x.rem_euclid(columns) as i32, y.rem_euclid(rows) as i32),
        }
    }
}

/// Radial-falloff gradient noise over a `lattice_width x lattice_height` grid.
#[derive(Debug, Clone)]
pub struct GradientNoise<'a> {
    tables: &'a GradientTables,
    cells: (u32, u32),
    points: PointMap,
}

impl<'a> GradientNoise<'a> {
    /// Wang tiling needs lattice dimensions divisible by 4 and at least 16.
    pub fn new(params: &GradientNoiseParams, tiling: TilingMode, tables: &'a GradientTables) -> Self {
        let cells = (params.lattice_width, params.lattice_height);
        Self {
            tables,
            cells,
            points: PointMap::new(tiling, cells.0, cells.1),
        }
    }

    fn sample(&self, cell: &LatticeCell) -> f32 {
        let x0 = cell.x;
        let y0 = cell.y;
        let mut value = 0.0f32;
        for j in -1i64..=2 {
            let dy = y0 - j as f32;
            let row = i64::from(cell.top) + j * i64::from(cell.stride_y);
            for i in -1i64..=2 {
                let dx = x0 - i as f32;
                let distance = dx * dx + dy * dy;
                if distance < 4.0 {
                    let column = i64::from(cell.left) + i * i64::from(cell.stride_x);
                    let (px, py) = self.points.map(column, row);
                    let (gx, gy) = self.tables.gradient(px, py);
                    let t = distance.mul_add(-0.25, 1.0);
                    let t2 = t * t;
                    let t4 = t2 * t2;
                    let falloff = (t * t4).mul_add(4.0, -t4 * 3.0);
                    value += dx.mul_add(gx, dy * gy) * falloff;
                }
            }
        }
        value.mul_add(0.5, 0.5)
    }
}

impl TextureGenerator for GradientNoise<'_> {
    fn generate(&self, image: &mut ImageData) {
        walk_levels(image, self.cells, (Edge::Unbounded, Edge::Unbounded), |cell| {
            self.sample(cell)
        });
    }
}
