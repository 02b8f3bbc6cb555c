//! Parameters for lattice-based noises.

use serde::{Deserialize, Serialize};

use crate::common::Interpolation;

pub(crate) fn default_lattice_size() -> u32 {
    32
}

pub(crate) fn default_seed() -> u32 {
    1
}

fn default_range_max() -> f32 {
    1.0
}

fn linear() -> Interpolation {
    Interpolation::Linear
}

/// Value noise: random scalars on the lattice, blended per pixel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValueNoiseParams {
    /// Lattice cells across the image.
    #[serde(default = "default_lattice_size")]
    pub lattice_width: u32,
    /// Lattice cells down the image.
    #[serde(default = "default_lattice_size")]
    pub lattice_height: u32,
    /// Weight curve.
    #[serde(default = "linear")]
    pub interpolation: Interpolation,
    /// Smallest control value.
    #[serde(default)]
    pub range_min: f32,
    /// Largest control value.
    #[serde(default = "default_range_max")]
    pub range_max: f32,
    /// Seed of the lattice fill.
    #[serde(default = "default_seed")]
    pub seed: u32,
}

impl Default for ValueNoiseParams {
    fn default() -> Self {
        Self {
            lattice_width: default_lattice_size(),
            lattice_height: default_lattice_size(),
            interpolation: linear(),
            range_min: 0.0,
            range_max: default_range_max(),
            seed: default_seed(),
        }
    }
}

/// Perlin and modified noise: gradient vectors on the lattice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GradientLatticeParams {
    #[serde(default = "default_lattice_size")]
    pub lattice_width: u32,
    #[serde(default = "default_lattice_size")]
    pub lattice_height: u32,
    #[serde(default)]
    pub interpolation: Interpolation,
}

impl Default for GradientLatticeParams {
    fn default() -> Self {
        Self {
            lattice_width: default_lattice_size(),
            lattice_height: default_lattice_size(),
            interpolation: Interpolation::default(),
        }
    }
}

/// Gradient noise with a radial polynomial falloff over a 4x4 neighbourhood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GradientNoiseParams {
    #[serde(default = "default_lattice_size")]
    pub lattice_width: u32,
    #[serde(default = "default_lattice_size")]
    pub lattice_height: u32,
}

impl Default for GradientNoiseParams {
    fn default() -> Self {
        Self {
            lattice_width: default_lattice_size(),
            lattice_height: default_lattice_size(),
        }
    }
}

/// Wavelet noise: band-limited residual of a value noise field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaveletNoiseParams {
    #[serde(default = "default_lattice_size")]
    pub lattice_width: u32,
    #[serde(default = "default_lattice_size")]
    pub lattice_height: u32,
    /// Weight curve used when resampling the residual.
    #[serde(default)]
    pub interpolation: Interpolation,
    /// Seed of the base value noise.
    #[serde(default = "default_seed")]
    pub seed: u32,
}

impl Default for WaveletNoiseParams {
    fn default() -> Self {
        Self {
            lattice_width: default_lattice_size(),
            lattice_height: default_lattice_size(),
            interpolation: Interpolation::default(),
            seed: default_seed(),
        }
    }
}
