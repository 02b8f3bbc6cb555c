//! Top-level texture recipe.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{OutputFormat, TilingMode};
use crate::error::RecipeError;
use crate::generator::GeneratorParams;
use crate::validation::validate_recipe;

fn default_image_size() -> u32 {
    1024
}

fn default_output_name() -> String {
    "output".to_string()
}

/// Where and how the generated image is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    /// Base file name; mip levels get a `_mip<N>` suffix.
    #[serde(default = "default_output_name")]
    pub name: String,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            name: default_output_name(),
            format: OutputFormat::default(),
        }
    }
}

/// A complete description of one texture to generate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextureRecipe {
    #[serde(default = "default_image_size")]
    pub width: u32,
    #[serde(default = "default_image_size")]
    pub height: u32,
    /// Whether to build the full mip chain.
    #[serde(default)]
    pub mipmaps: bool,
    #[serde(default)]
    pub tiling: TilingMode,
    #[serde(default)]
    pub generator: GeneratorParams,
    #[serde(default)]
    pub output: OutputSettings,
}

impl Default for TextureRecipe {
    fn default() -> Self {
        Self {
            width: default_image_size(),
            height: default_image_size(),
            mipmaps: false,
            tiling: TilingMode::default(),
            generator: GeneratorParams::default(),
            output: OutputSettings::default(),
        }
    }
}

impl TextureRecipe {
    /// Parses a recipe from JSON without validating it.
    pub fn from_json(json: &str) -> Result<Self, RecipeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads, parses, and validates a recipe file.
    pub fn load(path: &Path) -> Result<Self, RecipeError> {
        let text = std::fs::read_to_string(path)?;
        let recipe = Self::from_json(&text)?;
        recipe.validate()?;
        Ok(recipe)
    }

    /// Serializes the recipe as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, RecipeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every generator precondition against the image size and tiling mode.
    pub fn validate(&self) -> Result<(), crate::ValidationError> {
        validate_recipe(self)
    }
}
