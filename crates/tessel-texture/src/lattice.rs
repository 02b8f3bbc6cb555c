//! Shared lattice walk used by every lattice noise.
//!
//! For a mip level of `pixels` columns over a lattice of `cells` columns the
//! walk steps `stride = max(1, cells / pixels)` lattice columns per cell and
//! spends `pixels / cells` pixels inside each cell. The same holds for rows.
//! Pixels are visited row-major; the visiting order is part of the output.

/// Blend weights and lattice step for one axis of one mip level.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSampling {
    pub stride: u32,
    pub weights: Vec<f32>,
}

impl AxisSampling {
    pub fn new(cells: u32, pixels: u32) -> Self {
        let stride = (cells / pixels).max(1);
        let count = pixels / cells;
        let weights = if count > 1 {
            (0..count).map(|i| i as f32 / count as f32).collect()
        } else {
            vec![0.5]
        };
        Self { stride, weights }
    }
}

/// What happens when the walk steps past the last lattice index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Stop at `last`. Used with `(cells + 1)`-point lattices that repeat their first row and column.
    Clamp(u32),
    /// Jump back to 0 once the index reaches `size`.
    Wrap(u32),
    /// Keep counting; the caller maps indices itself.
    Unbounded,
}

impl Edge {
    #[inline]
    fn limit(self, index: u32) -> u32 {
        match self {
            Edge::Clamp(last) => index.min(last),
            Edge::Wrap(size) if index >= size => 0,
            Edge::Wrap(_) | Edge::Unbounded => index,
        }
    }

    /// First upper/right index of the walk.
    #[inline]
    fn start(self, stride: u32) -> u32 {
        match self {
            Edge::Wrap(size) if size > 0 => stride % size,
            _ => self.limit(stride),
        }
    }
}

/// Position of the walk along one axis.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    low: u32,
    high: u32,
    weight_index: usize,
}

impl Cursor {
    fn new(sampling: &AxisSampling, edge: Edge) -> Self {
        Self {
            low: 0,
            high: edge.start(sampling.stride),
            weight_index: 0,
        }
    }

    fn advance(&mut self, sampling: &AxisSampling, edge: Edge) {
        self.weight_index += 1;
        if self.weight_index >= sampling.weights.len() {
            self.weight_index = 0;
            self.low = self.high;
            self.high = edge.limit(self.high.wrapping_add(sampling.stride));
        }
    }
}

/// The lattice cell under one pixel.
#[derive(Debug, Clone, Copy)]
pub struct LatticeCell {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
    /// Raw horizontal weight in `[0, 1)`.
    pub x: f32,
    /// Raw vertical weight in `[0, 1)`.
    pub y: f32,
    /// Lattice step between neighbouring columns at this level.
    pub stride_x: u32,
    /// Lattice step between neighbouring rows at this level.
    pub stride_y: u32,
}

/// Walks one single-channel mip level, writing `sample(cell)` to each pixel.
pub fn walk_level<F>(
    pixels: &mut [f32],
    (width, height): (u32, u32),
    (cells_x, cells_y): (u32, u32),
    (edge_x, edge_y): (Edge, Edge),
    mut sample: F,
) where
    F: FnMut(&LatticeCell) -> f32,
{
    let xs = AxisSampling::new(cells_x, width);
    let ys = AxisSampling::new(cells_y, height);
    tracing::trace!(
        width,
        height,
        stride_x = xs.stride,
        stride_y = ys.stride,
        "sampling lattice level"
    );

    let mut index = 0;
    let mut row = Cursor::new(&ys, edge_y);
    for _ in 0..height {
        let mut column = Cursor::new(&xs, edge_x);
        let y = ys.weights[row.weight_index];
        for _ in 0..width {
            let cell = LatticeCell {
                left: column.low,
                right: column.high,
                top: row.low,
                bottom: row.high,
                x: xs.weights[column.weight_index],
                y,
                stride_x: xs.stride,
                stride_y: ys.stride,
            };
            pixels[index] = sample(&cell);
            index += 1;
            column.advance(&xs, edge_x);
        }
        row.advance(&ys, edge_y);
    }
}

/// A `(cells_x + 1) x (cells_y + 1)` grid of control values.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice<T> {
    columns: usize,
    rows: usize,
    points: Vec<T>,
}

impl<T: Copy + Default> Lattice<T> {
    /// Allocates a lattice with `cells_x + 1` by `cells_y + 1` points.
    pub fn new(cells_x: u32, cells_y: u32) -> Self {
        let columns = cells_x as usize + 1;
        let rows = cells_y as usize + 1;
        Self {
            columns,
            rows,
            points: vec![T::default(); columns * rows],
        }
    }

    /// Builds a lattice by evaluating `f(x, y)` at every point.
    pub fn from_fn(cells_x: u32, cells_y: u32, mut f: impl FnMut(u32, u32) -> T) -> Self {
        let mut lattice = Self::new(cells_x, cells_y);
        for y in 0..lattice.rows {
            for x in 0..lattice.columns {
                lattice.points[y * lattice.columns + x] = f(x as u32, y as u32);
            }
        }
        lattice
    }

    pub fn cells_x(&self) -> u32 {
        self.columns as u32 - 1
    }

    pub fn cells_y(&self) -> u32 {
        self.rows as u32 - 1
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> T {
        self.points[y as usize * self.columns + x as usize]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: T) {
        self.points[y as usize * self.columns + x as usize] = value;
    }

    pub fn row(&self, y: u32) -> &[T] {
        let start = y as usize * self.columns;
        &self.points[start..start + self.columns]
    }

    pub fn row_mut(&mut self, y: u32) -> &mut [T] {
        let start = y as usize * self.columns;
        &mut self.points[start..start + self.columns]
    }

    /// Copies row `from` over row `to`.
    pub fn copy_row(&mut self, from: u32, to: u32) {
        let columns = self.columns;
        let src = from as usize * columns;
        self.points
            .copy_within(src..src + columns, to as usize * columns);
    }

    /// Clamp-at-last-point edge for walking this lattice.
    pub fn edges(&self) -> (Edge, Edge) {
        (Edge::Clamp(self.cells_x()), Edge::Clamp(self.cells_y()))
    }
}
