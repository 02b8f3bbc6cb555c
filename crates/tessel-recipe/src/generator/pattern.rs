//! Parameters for the simple patterns.

use serde::{Deserialize, Serialize};

use super::lattice::default_seed;

fn default_tile_size() -> u32 {
    64
}

fn default_bright_min() -> f32 {
    192.0 / 255.0
}

fn default_bright_max() -> f32 {
    1.0
}

fn default_dark_max() -> f32 {
    64.0 / 255.0
}

/// Checkerboard with a random brightness per tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckerParams {
    #[serde(default = "default_tile_size")]
    pub tile_width: u32,
    #[serde(default = "default_tile_size")]
    pub tile_height: u32,
    #[serde(default = "default_bright_min")]
    pub bright_min: f32,
    #[serde(default = "default_bright_max")]
    pub bright_max: f32,
    #[serde(default)]
    pub dark_min: f32,
    #[serde(default = "default_dark_max")]
    pub dark_max: f32,
    #[serde(default = "default_seed")]
    pub seed: u32,
}

impl Default for CheckerParams {
    fn default() -> Self {
        Self {
            tile_width: default_tile_size(),
            tile_height: default_tile_size(),
            bright_min: default_bright_min(),
            bright_max: default_bright_max(),
            dark_min: 0.0,
            dark_max: default_dark_max(),
            seed: default_seed(),
        }
    }
}

fn default_frequency() -> f32 {
    32.0
}

/// Horizontal cosine bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WavesParams {
    /// Full periods over the image height.
    #[serde(default = "default_frequency")]
    pub frequency: f32,
}

impl Default for WavesParams {
    fn default() -> Self {
        Self {
            frequency: default_frequency(),
        }
    }
}
