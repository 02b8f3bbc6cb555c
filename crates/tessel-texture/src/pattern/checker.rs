//! Checkerboard with a random shade per tile.

use tessel_recipe::CheckerParams;

use crate::image::ImageData;
use crate::noise::TextureGenerator;
use crate::rng::DeterministicRng;

/// Checkerboard whose tiles alternate between a bright and a dark range.
///
/// Mip level `n` uses tiles `tile >> n` pixels wide; once that reaches zero
/// the remaining levels are box filtered.
#[derive(Debug, Clone)]
pub struct CheckerPattern {
    tile_width: u32,
    tile_height: u32,
    tiles: Vec<f32>,
}

impl CheckerPattern {
    /// Draws one shade per tile for an image of `width x height` pixels.
    ///
    /// The top-left tile is bright and every row starts with the opposite
    /// shade of the row above.
    pub fn new(params: &CheckerParams, width: u32, height: u32) -> Self {
        let x_tiles = width.div_ceil(params.tile_width);
        let y_tiles = height.div_ceil(params.tile_height);

        let mut rng = DeterministicRng::new(params.seed);
        let mut tiles = Vec::with_capacity((x_tiles * y_tiles) as usize);
        let mut dark = false;
        for _ in 0..y_tiles {
            let first_was_dark = dark;
            for _ in 0..x_tiles {
                let (low, high) = if dark {
                    (params.dark_min, params.dark_max)
                } else {
                    (params.bright_min, params.bright_max)
                };
                tiles.push(rng.uniform_range(low, high));
                dark = !dark;
            }
            dark = !first_was_dark;
        }

        Self {
            tile_width: params.tile_width,
            tile_height: params.tile_height,
            tiles,
        }
    }

    pub fn tiles(&self) -> &[f32] {
        &self.tiles
    }
}

impl TextureGenerator for CheckerPattern {
    fn generate(&self, image: &mut ImageData) {
        let stride = image.channel_count() as usize;
        let last_tile = self.tiles.len().saturating_sub(1);

        for level in 0..image.mip_level_count() {
            let (w, h) = image.dimensions(level);
            let tile_w = self.tile_width >> level;
            let tile_h = self.tile_height >> level;
            if tile_w == 0 || tile_h == 0 {
                tracing::warn!(level, "checker tiles vanish, box filtering remaining levels");
                if level > 0 {
                    image.generate_mips(level - 1);
                }
                break;
            }
            tracing::debug!(level, width = w, height = h, tile_w, tile_h, "filling level");

            let pixels = image.pixels_mut(level);
            let mut pixel = 0;
            let mut tile = 0;
            let mut y_count = 0;
            for _ in 0..h {
                let row_start = tile;
                let mut x_count = 0;
                for _ in 0..w {
                    pixels[pixel] = self.tiles[tile.min(last_tile)];
                    pixel += stride;
                    x_count += 1;
                    if x_count == tile_w {
                        x_count = 0;
                        tile += 1;
                    }
                }
                y_count += 1;
                if y_count == tile_h {
                    y_count = 0;
                } else {
                    tile = row_start;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_tone(tile: u32) -> CheckerParams {
        CheckerParams {
            tile_width: tile,
            tile_height: tile,
            bright_min: 1.0,
            bright_max: 1.0,
            dark_min: 0.0,
            dark_max: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_rows_alternate_first_shade() {
        let checker = CheckerPattern::new(&two_tone(2), 6, 4);
        assert_eq!(checker.tiles(), &[1.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_partial_tiles_round_up() {
        let checker = CheckerPattern::new(&two_tone(4), 10, 4);
        assert_eq!(checker.tiles().len(), 3);
    }

    #[test]
    fn test_four_by_four_layout() {
        let checker = CheckerPattern::new(&two_tone(2), 4, 4);
        let mut image = ImageData::new(4, 4, 1, false).unwrap();
        checker.generate(&mut image);
        assert_eq!(
            image.pixels(0),
            &[
                1.0, 1.0, 0.0, 0.0, //
                1.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 1.0, //
                0.0, 0.0, 1.0, 1.0,
            ]
        );
    }

    #[test]
    fn test_mips_shrink_tiles_then_filter() {
        let checker = CheckerPattern::new(&two_tone(2), 4, 4);
        let mut image = ImageData::new(4, 4, 1, true).unwrap();
        checker.generate(&mut image);
        // Level 1 keeps one pixel per tile; level 2 averages the four.
        assert_eq!(image.pixels(1), &[1.0, 0.0, 0.0, 1.0]);
        assert_eq!(image.pixels(2), &[0.5]);
    }

    #[test]
    fn test_shades_stay_in_range() {
        let params = CheckerParams {
            tile_width: 4,
            tile_height: 4,
            ..Default::default()
        };
        let checker = CheckerPattern::new(&params, 32, 32);
        let mut dark = false;
        for (i, &shade) in checker.tiles().iter().enumerate() {
            if i % 8 == 0 {
                dark = (i / 8) % 2 == 1;
            }
            if dark {
                assert!((params.dark_min..=params.dark_max).contains(&shade));
            } else {
                assert!((params.bright_min..=params.bright_max).contains(&shade));
            }
            dark = !dark;
        }
    }
}
