//! Tiling index providers.
//!
//! A provider maps a cell coordinate, possibly outside the image, to the
//! canonical index whose contents that cell should reuse. Cell noises seed
//! their per-cell RNG from this index, so the provider alone decides how the
//! result repeats:
//!
//! - [`NoTiling`] passes coordinates through; nothing repeats.
//! - [`SimpleTiling`] wraps with the period `cells_per_row`.
//! - [`WangTiling`] splits the period into a 4x4 grid of tiles and folds every
//!   border cell onto a canonical strip chosen by the edge color, so any two
//!   tiles whose shared edge has the same color join without a seam.

use tessel_recipe::TilingMode;

/// Maps a cell coordinate to its canonical index.
pub trait TilingIndex {
    fn index(&self, i: i32, j: i32) -> u32;
}

/// Pass-through indexing with no wraparound.
#[derive(Debug, Clone, Copy)]
pub struct NoTiling {
    multiplier: u32,
}

impl NoTiling {
    pub fn new(cells_per_row: u32) -> Self {
        Self {
            multiplier: cells_per_row.wrapping_mul(2),
        }
    }
}

impl TilingIndex for NoTiling {
    #[inline]
    fn index(&self, i: i32, j: i32) -> u32 {
        (i as u32).wrapping_add((j as u32).wrapping_mul(self.multiplier))
    }
}

/// Periodic wrap. `cells_per_row` must be a power of two.
#[derive(Debug, Clone, Copy)]
pub struct SimpleTiling {
    multiplier: u32,
    mask: u32,
}

impl SimpleTiling {
    pub fn new(cells_per_row: u32) -> Self {
        Self {
            multiplier: cells_per_row,
            mask: cells_per_row.wrapping_sub(1),
        }
    }
}

impl TilingIndex for SimpleTiling {
    #[inline]
    fn index(&self, i: i32, j: i32) -> u32 {
        ((i as u32) & self.mask).wrapping_add(((j as u32) & self.mask).wrapping_mul(self.multiplier))
    }
}

/// Colors of the four edges of one Wang tile. Each edge is 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileEdges {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

/// Seamless 4x4 Wang tiling.
///
/// Vertical tile boundaries carry colors `[0, 0, 1, 1]` from left to right and
/// horizontal boundaries carry `[0, 1, 1, 0]` from top to bottom, so the
/// period closes on itself as well.
#[derive(Debug, Clone, Copy)]
pub struct WangTiling {
    columns: u32,
    rows: u32,
    tile_width: u32,
    tile_height: u32,
    border: u32,
}

impl WangTiling {
    /// Square period with a one-cell border.
    pub fn new(cells_per_row: u32) -> Self {
        Self::rectangular(cells_per_row, cells_per_row, 1)
    }

    /// Rectangular period with an arbitrary border width.
    pub fn rectangular(columns: u32, rows: u32, border: u32) -> Self {
        Self {
            columns,
            rows,
            tile_width: columns >> 2,
            tile_height: rows >> 2,
            border,
        }
    }

    /// Edge colors of tile `(tile_x, tile_y)` in the 4x4 grid.
    pub fn edges(tile_x: u32, tile_y: u32) -> TileEdges {
        let left = tile_x / 2;
        let bottom = 1 - tile_y / 2;
        TileEdges {
            left,
            right: (left != (tile_x & 1)) as u32,
            top: (bottom == (tile_y & 1)) as u32,
            bottom,
        }
    }

    /// Canonical `(x, y)` cell for the given coordinate.
    pub fn canonical(&self, i: i32, j: i32) -> (u32, u32) {
        let x = i as u32;
        let y = j as u32;

        let local_x = x % self.columns;
        let local_y = y % self.rows;
        let tile_x = local_x / self.tile_width;
        let tile_y = local_y / self.tile_height;
        let x_in_tile = local_x - tile_x * self.tile_width;
        let y_in_tile = local_y - tile_y * self.tile_height;

        let left_border = x_in_tile < self.border;
        let right_border = x_in_tile + self.border >= self.tile_width;
        let top_border = y_in_tile < self.border;
        let bottom_border = y_in_tile + self.border >= self.tile_height;
        let border_x = left_border || right_border;
        let border_y = top_border || bottom_border;

        if !border_x && !border_y {
            return (local_x, local_y);
        }

        let corner = border_x && border_y;
        let edges = Self::edges(tile_x, tile_y);
        let offset_x = match (corner, border_x, left_border) {
            (true, _, _) | (_, false, _) => 0,
            (_, _, true) => edges.left,
            _ => edges.right,
        };
        let offset_y = match (corner, border_y, bottom_border) {
            (true, _, _) | (_, false, _) => 0,
            (_, _, true) => edges.bottom,
            _ => edges.top,
        };

        (
            offset_x * self.tile_width + x_in_tile,
            offset_y * self.tile_height + y_in_tile,
        )
    }
}

impl TilingIndex for WangTiling {
    #[inline]
    fn index(&self, i: i32, j: i32) -> u32 {
        let (x, y) = self.canonical(i, j);
        x.wrapping_add(y.wrapping_mul(self.columns))
    }
}

/// Runtime-selected provider.
#[derive(Debug, Clone, Copy)]
pub enum IndexProvider {
    None(NoTiling),
    Simple(SimpleTiling),
    Wang(WangTiling),
}

impl IndexProvider {
    pub fn for_mode(mode: TilingMode, cells_per_row: u32) -> Self {
        match mode {
            TilingMode::None => IndexProvider::None(NoTiling::new(cells_per_row)),
            TilingMode::Simple => IndexProvider::Simple(SimpleTiling::new(cells_per_row)),
            TilingMode::Wang => IndexProvider::Wang(WangTiling::new(cells_per_row)),
        }
    }
}

impl TilingIndex for IndexProvider {
    #[inline]
    fn index(&self, i: i32, j: i32) -> u32 {
        match self {
            IndexProvider::None(p) => p.index(i, j),
            IndexProvider::Simple(p) => p.index(i, j),
            IndexProvider::Wang(p) => p.index(i, j),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_tiling_is_unique() {
        let p = NoTiling::new(4);
        assert_eq!(p.index(0, 0), 0);
        assert_eq!(p.index(3, 1), 11);
        assert_ne!(p.index(0, 0), p.index(4, 0));
        assert_ne!(p.index(0, 0), p.index(0, 4));
    }

    #[test]
    fn test_simple_tiling_periodic() {
        let p = SimpleTiling::new(8);
        for j in -9..9 {
            for i in -9..9 {
                assert_eq!(p.index(i, j), p.index(i + 8, j));
                assert_eq!(p.index(i, j), p.index(i, j + 8));
            }
        }
        assert_eq!(p.index(-1, 0), 7);
        assert_eq!(p.index(2, 3), 26);
    }

    #[test]
    fn test_wang_edge_layout() {
        let lefts: Vec<u32> = (0..4).map(|x| WangTiling::edges(x, 0).left).collect();
        let rights: Vec<u32> = (0..4).map(|x| WangTiling::edges(x, 0).right).collect();
        let tops: Vec<u32> = (0..4).map(|y| WangTiling::edges(0, y).top).collect();
        let bottoms: Vec<u32> = (0..4).map(|y| WangTiling::edges(0, y).bottom).collect();
        assert_eq!(lefts, vec![0, 0, 1, 1]);
        assert_eq!(rights, vec![0, 1, 1, 0]);
        assert_eq!(tops, vec![0, 1, 1, 0]);
        assert_eq!(bottoms, vec![1, 1, 0, 0]);
    }

    #[test]
    fn test_wang_adjacent_edges_agree() {
        for t in 0..4 {
            let next = (t + 1) % 4;
            assert_eq!(WangTiling::edges(t, 0).right, WangTiling::edges(next, 0).left);
            assert_eq!(WangTiling::edges(0, t).bottom, WangTiling::edges(0, next).top);
        }
    }

    #[test]
    fn test_wang_corners_are_canonical() {
        let p = WangTiling::new(16);
        // Every tile corner cell folds onto the same position in tile (0, 0).
        for ty in 0..4 {
            for tx in 0..4 {
                assert_eq!(p.canonical(tx * 4, ty * 4), (0, 0));
                assert_eq!(p.canonical(tx * 4 + 3, ty * 4 + 3), (3, 3));
            }
        }
    }

    #[test]
    fn test_wang_border_depends_only_on_edge_color() {
        let p = WangTiling::new(16);
        for ty in 0..4 {
            for tx in 0..4 {
                let edges = WangTiling::edges(tx as u32, ty as u32);
                for y_in in 1..3 {
                    let left = p.canonical(tx * 4, ty * 4 + y_in);
                    assert_eq!(left, (edges.left * 4, y_in as u32));
                    let right = p.canonical(tx * 4 + 3, ty * 4 + y_in);
                    assert_eq!(right, (edges.right * 4 + 3, y_in as u32));
                }
                for x_in in 1..3 {
                    let top = p.canonical(tx * 4 + x_in, ty * 4);
                    assert_eq!(top, (x_in as u32, edges.top * 4));
                    let bottom = p.canonical(tx * 4 + x_in, ty * 4 + 3);
                    assert_eq!(bottom, (x_in as u32, edges.bottom * 4 + 3));
                }
            }
        }
    }

    #[test]
    fn test_wang_interior_untouched() {
        let p = WangTiling::new(16);
        assert_eq!(p.canonical(5, 6), (5, 6));
        assert_eq!(p.index(5, 6), 5 + 6 * 16);
    }

    #[test]
    fn test_wang_border_periodic() {
        let p = WangTiling::new(16);
        // Row 0 is a border row everywhere, so it repeats with the period.
        for i in -1..17 {
            assert_eq!(p.index(i, 0), p.index(i + 16, 0));
        }
        // Out-of-range neighbours of the first and last cell wrap onto border strips.
        assert_eq!(p.index(-1, 1), p.index(15, 1));
        assert_eq!(p.index(16, 2), p.index(0, 2));
    }

    #[test]
    fn test_wang_rectangular_wide_border() {
        let p = WangTiling::rectangular(32, 32, 2);
        // Column 1 of each tile is inside a two-cell left border.
        assert_eq!(p.canonical(1, 5), (1, 5));
        assert_eq!(p.canonical(9, 5), (1, 5));
        assert_eq!(p.canonical(10, 13), (10, 13));
    }

    #[test]
    fn test_provider_for_mode() {
        let simple = IndexProvider::for_mode(TilingMode::Simple, 4);
        assert_eq!(simple.index(5, 0), 1);
        let none = IndexProvider::for_mode(TilingMode::None, 4);
        assert_eq!(none.index(5, 0), 5);
    }
}
