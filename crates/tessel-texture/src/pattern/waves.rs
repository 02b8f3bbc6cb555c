//! Horizontal cosine stripes.

use tessel_recipe::WavesParams;

use crate::image::ImageData;
use crate::noise::TextureGenerator;

/// Rows of `cos(2 pi frequency y / height)` remapped to `[0, 1]`.
#[derive(Debug, Clone)]
pub struct WavesPattern {
    frequency: f32,
}

impl WavesPattern {
    pub fn new(params: &WavesParams) -> Self {
        Self {
            frequency: params.frequency,
        }
    }
}

impl TextureGenerator for WavesPattern {
    fn generate(&self, image: &mut ImageData) {
        let (w, h) = image.dimensions(0);
        let angular = self.frequency * 6.2832 / h as f32;
        let row_len = w as usize;
        for (j, row) in image.pixels_mut(0).chunks_exact_mut(row_len).enumerate() {
            row.fill((angular * j as f32).cos().mul_add(0.5, 0.5));
        }
        image.generate_mips(0);
    }
}
