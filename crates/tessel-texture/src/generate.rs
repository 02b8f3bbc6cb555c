//! Recipe-level entry points: build the image, fill it, write it out.

use std::path::{Path, PathBuf};
use thiserror::Error;

use tessel_recipe::{OutputFormat, OutputSettings, TextureRecipe, ValidationError};

use crate::channel::{expand_to_rgba, ConversionError};
use crate::engine::NoiseEngine;
use crate::image::{ImageData, ImageError};
use crate::png::{self, PngConfig, PngError};
use crate::tga::{self, TgaError};

/// Errors from texture generation and output.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Channel conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("TGA error: {0}")]
    Tga(#[from] TgaError),

    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenerateError {
    /// Stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            GenerateError::Validation(_) => "TEXTURE_001",
            GenerateError::Image(_) => "TEXTURE_002",
            GenerateError::Conversion(_) => "TEXTURE_003",
            GenerateError::Tga(_) => "TEXTURE_004",
            GenerateError::Png(_) => "TEXTURE_005",
            GenerateError::Io(_) => "TEXTURE_006",
        }
    }

    pub fn category(&self) -> &'static str {
        "texture"
    }

    /// Whether the error comes from the recipe rather than from generation or I/O.
    pub fn is_validation(&self) -> bool {
        matches!(self, GenerateError::Validation(_))
    }
}

/// Validates `recipe`, then generates its image with a fresh [`NoiseEngine`].
pub fn generate_texture(recipe: &TextureRecipe) -> Result<ImageData, GenerateError> {
    generate_texture_with(&NoiseEngine::new(), recipe)
}

/// Like [`generate_texture`], reusing the tables of `engine`.
pub fn generate_texture_with(
    engine: &NoiseEngine,
    recipe: &TextureRecipe,
) -> Result<ImageData, GenerateError> {
    recipe.validate()?;
    let mut image = ImageData::new(
        recipe.width,
        recipe.height,
        recipe.generator.channel_count(),
        recipe.mipmaps,
    )?;
    engine.generate(recipe.tiling, &recipe.generator, &mut image)?;
    Ok(image)
}

/// File name for one level: `name.ext` for a single level, `name_mip<N>.ext`
/// otherwise.
pub fn level_file_name(name: &str, format: OutputFormat, level: u32, level_count: u32) -> String {
    if level_count > 1 {
        format!("{}_mip{}.{}", name, level, format.extension())
    } else {
        format!("{}.{}", name, format.extension())
    }
}

/// Writes every level of `image` into `out_dir` and returns the paths in level order.
///
/// TGA output expands one- and two-channel images to RGBA first.
pub fn save_texture(
    image: &ImageData,
    out_dir: &Path,
    output: &OutputSettings,
) -> Result<Vec<PathBuf>, GenerateError> {
    std::fs::create_dir_all(out_dir)?;

    let expanded;
    let source = match output.format {
        OutputFormat::Tga if image.channel_count() < 3 => {
            expanded = expand_to_rgba(image)?;
            &expanded
        }
        _ => image,
    };

    let level_count = source.mip_level_count();
    let mut paths = Vec::with_capacity(level_count as usize);
    for level in 0..level_count {
        let (w, h) = source.dimensions(level);
        let path = out_dir.join(level_file_name(&output.name, output.format, level, level_count));
        let pixels = source.pixels(level);
        let channels = source.channel_count();
        match output.format {
            OutputFormat::Tga => tga::save_tga(&path, pixels, w, h, channels)?,
            OutputFormat::Png => png::save_png(&path, pixels, w, h, channels, &PngConfig::default())?,
        }
        tracing::debug!(path = %path.display(), level, "wrote level");
        paths.push(path);
    }
    Ok(paths)
}
