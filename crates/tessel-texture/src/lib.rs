//! Tessel tileable texture generation.
//!
//! This crate turns a [`tessel_recipe::TextureRecipe`] into a single-precision
//! image with an optional mip chain and writes it out as TGA or PNG. Output is
//! a pure function of the recipe: the same recipe yields the same pixels.
//!
//! # Generators
//!
//! - **Lattice noise**: value, Perlin, modified (hashed gradients), gradient
//!   (4x4 kernel) and wavelet noise
//! - **Cell noise**: Worley (RGBA feature distances) and Gabor
//! - **White noise**: hashed per pixel
//! - **Patterns**: checkerboard and horizontal waves
//!
//! Each generator honours one of three tiling modes. `none` produces an
//! ordinary image, `simple` makes the image repeat seamlessly, and `wang`
//! lays the image out as 4x4 Wang tiles whose matching edges line up.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use tessel_recipe::{GeneratorParams, GradientLatticeParams, TextureRecipe, TilingMode};
//! use tessel_texture::{generate_texture, save_texture};
//!
//! let recipe = TextureRecipe {
//!     width: 256,
//!     height: 256,
//!     mipmaps: true,
//!     tiling: TilingMode::Wang,
//!     generator: GeneratorParams::Perlin(GradientLatticeParams {
//!         lattice_width: 16,
//!         lattice_height: 16,
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let image = generate_texture(&recipe).unwrap();
//! save_texture(&image, Path::new("out"), &recipe.output).unwrap();
//! ```

pub mod channel;
pub mod curve;
pub mod engine;
pub mod generate;
pub mod image;
pub mod lattice;
pub mod noise;
pub mod pattern;
pub mod png;
pub mod rng;
pub mod tga;
pub mod tiling;

// Re-export main types for convenience
pub use channel::{expand_to_rgba, ConversionError};
pub use curve::WeightCurve;
pub use engine::NoiseEngine;
pub use generate::{
    generate_texture, generate_texture_with, level_file_name, save_texture, GenerateError,
};
pub use image::{ImageData, ImageError};
pub use noise::TextureGenerator;
pub use png::{PngConfig, PngError};
pub use rng::DeterministicRng;
pub use tga::TgaError;
pub use tiling::{IndexProvider, TilingIndex, WangTiling};
