//! Parameters for cell-based noises (Worley, Gabor).

use serde::{Deserialize, Serialize};

fn default_cell_size() -> u32 {
    32
}

fn default_points_per_cell() -> u32 {
    2
}

fn default_cell_offset() -> u32 {
    1
}

fn default_color_multiplier() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// Worley (cellular) noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorleyNoiseParams {
    /// Cell edge length in pixels.
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
    /// Cells per row used by the tiling index. Defaults to `width / cell_size`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cells_per_row: Option<u32>,
    #[serde(default = "default_points_per_cell")]
    pub min_points_per_cell: u32,
    #[serde(default = "default_points_per_cell")]
    pub max_points_per_cell: u32,
    /// Added to every cell index before seeding the cell RNG.
    #[serde(default = "default_cell_offset")]
    pub cell_index_offset: u32,
    /// Per-channel RGB multiplier applied to the cell color.
    #[serde(default = "default_color_multiplier")]
    pub color_multiplier: [f32; 3],
    /// Per-channel RGB offset applied to the cell color.
    #[serde(default)]
    pub color_offset: [f32; 3],
}

impl WorleyNoiseParams {
    /// Resolves the tiling period for an image of the given width.
    pub fn resolved_cells_per_row(&self, width: u32) -> u32 {
        match self.cells_per_row {
            Some(cells) => cells,
            None if self.cell_size == 0 => 0,
            None => width / self.cell_size,
        }
    }
}

impl Default for WorleyNoiseParams {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            cells_per_row: None,
            min_points_per_cell: default_points_per_cell(),
            max_points_per_cell: default_points_per_cell(),
            cell_index_offset: default_cell_offset(),
            color_multiplier: default_color_multiplier(),
            color_offset: [0.0; 3],
        }
    }
}

fn default_gabor_cell_size() -> f32 {
    32.0
}

fn default_impulses() -> u32 {
    8
}

fn default_impulse_cap() -> u32 {
    32
}

fn default_gaussian_magnitude() -> f32 {
    0.25
}

fn default_gaussian_width() -> f32 {
    0.005
}

fn default_frequency_min() -> f32 {
    0.2
}

fn default_frequency_max() -> f32 {
    0.5
}

fn default_orientation_max() -> f32 {
    std::f32::consts::PI
}

/// Sparse-convolution Gabor noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GaborNoiseParams {
    /// Cell edge length in pixels.
    #[serde(default = "default_gabor_cell_size")]
    pub cell_size: f32,
    /// Poisson mean of impulses per cell.
    #[serde(default = "default_impulses")]
    pub impulses_per_cell: u32,
    /// Upper bound on impulses per cell.
    #[serde(default = "default_impulse_cap")]
    pub impulses_per_cell_cap: u32,
    #[serde(default = "default_cell_offset")]
    pub cell_offset: u32,
    #[serde(default = "default_gaussian_magnitude")]
    pub gaussian_magnitude: f32,
    /// Envelope falloff; larger values give tighter impulses.
    #[serde(default = "default_gaussian_width")]
    pub gaussian_width: f32,
    #[serde(default = "default_frequency_min")]
    pub frequency_min: f32,
    #[serde(default = "default_frequency_max")]
    pub frequency_max: f32,
    /// Orientation range in radians.
    #[serde(default)]
    pub orientation_min: f32,
    #[serde(default = "default_orientation_max")]
    pub orientation_max: f32,
}

impl GaborNoiseParams {
    /// Cells per row for an image of the given width.
    pub fn cells_per_row(&self, width: u32) -> u32 {
        let cell = self.cell_size as u32;
        if cell == 0 {
            0
        } else {
            width / cell
        }
    }
}

impl Default for GaborNoiseParams {
    fn default() -> Self {
        Self {
            cell_size: default_gabor_cell_size(),
            impulses_per_cell: default_impulses(),
            impulses_per_cell_cap: default_impulse_cap(),
            cell_offset: default_cell_offset(),
            gaussian_magnitude: default_gaussian_magnitude(),
            gaussian_width: default_gaussian_width(),
            frequency_min: default_frequency_min(),
            frequency_max: default_frequency_max(),
            orientation_min: 0.0,
            orientation_max: default_orientation_max(),
        }
    }
}
