//! Tessel recipe types and validation.
//!
//! A [`TextureRecipe`] names the image size, mip flag, tiling mode, and one
//! [`GeneratorParams`] variant. Recipes are plain JSON documents:
//!
//! ```json
//! {
//!   "width": 512,
//!   "height": 512,
//!   "mipmaps": true,
//!   "tiling": "wang",
//!   "generator": { "type": "perlin", "lattice_width": 16, "lattice_height": 16 },
//!   "output": { "name": "rock", "format": "tga" }
//! }
//! ```
//!
//! Every field has a default, so `{}` is a valid recipe (1024x1024 value noise
//! with simple tiling).
//!
//! Validation turns each generator precondition into a [`ValidationError`]
//! with a stable code (`T001`..`T010`) instead of leaving it to the generator.

pub mod common;
pub mod error;
pub mod generator;
pub mod recipe;
pub mod validation;

pub use common::{Interpolation, OutputFormat, TilingMode};
pub use error::{ErrorCode, RecipeError, ValidationError};
pub use generator::*;
pub use recipe::{OutputSettings, TextureRecipe};
pub use validation::{
    validate_generator, validate_image_size, validate_lattice, validate_recipe, MAX_IMAGE_DIMENSION,
};
