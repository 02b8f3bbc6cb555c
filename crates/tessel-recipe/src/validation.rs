//! Precondition checks for every generator.
//!
//! Each check returns the first violated rule as a [`ValidationError`] whose
//! path points at the recipe field to fix.

use crate::common::TilingMode;
use crate::error::{ErrorCode, ValidationError};
use crate::generator::{
    CheckerParams, GaborNoiseParams, GeneratorParams, WavesParams, WorleyNoiseParams,
};
use crate::recipe::TextureRecipe;

/// Largest accepted image width or height.
///
/// Also the bound below which every pixel offset fits comfortably in `u32`
/// and a 32-bit TGA header can describe the image.
pub const MAX_IMAGE_DIMENSION: u32 = 16384;

/// Validates a full recipe.
pub fn validate_recipe(recipe: &TextureRecipe) -> Result<(), ValidationError> {
    validate_image_size(recipe.width, recipe.height)?;
    validate_generator(&recipe.generator, recipe.width, recipe.height, recipe.tiling)
}

/// Validates image dimensions.
///
/// # Examples
///
/// ```
/// use tessel_recipe::validate_image_size;
///
/// assert!(validate_image_size(256, 256).is_ok());
/// assert!(validate_image_size(0, 256).is_err());
/// assert!(validate_image_size(256, 65536).is_err());
/// ```
pub fn validate_image_size(width: u32, height: u32) -> Result<(), ValidationError> {
    if width == 0 {
        return Err(ValidationError::with_path(
            ErrorCode::ZeroDimension,
            "image width must be greater than 0",
            "width",
        ));
    }
    if height == 0 {
        return Err(ValidationError::with_path(
            ErrorCode::ZeroDimension,
            "image height must be greater than 0",
            "height",
        ));
    }
    for (value, axis) in [(width, "width"), (height, "height")] {
        if value > MAX_IMAGE_DIMENSION {
            return Err(ValidationError::with_path(
                ErrorCode::ImageTooLarge,
                format!(
                    "image {} {} exceeds the maximum of {}",
                    axis, value, MAX_IMAGE_DIMENSION
                ),
                axis,
            ));
        }
    }
    Ok(())
}

/// Validates generator parameters against the base image size and tiling mode.
pub fn validate_generator(
    params: &GeneratorParams,
    width: u32,
    height: u32,
    tiling: TilingMode,
) -> Result<(), ValidationError> {
    match params {
        GeneratorParams::Value(p) => {
            validate_lattice(p.lattice_width, p.lattice_height, width, height, tiling)?;
            validate_range(p.range_min, p.range_max, "generator.range")
        }
        GeneratorParams::Perlin(p) | GeneratorParams::Modified(p) => {
            validate_lattice(p.lattice_width, p.lattice_height, width, height, tiling)
        }
        GeneratorParams::Gradient(p) => {
            validate_lattice(p.lattice_width, p.lattice_height, width, height, tiling)?;
            if tiling == TilingMode::Wang && (p.lattice_width < 16 || p.lattice_height < 16) {
                return Err(ValidationError::with_path(
                    ErrorCode::WangAlignment,
                    "gradient noise Wang tiles need at least 4 lattice cells per tile edge",
                    "generator.lattice_width",
                ));
            }
            Ok(())
        }
        GeneratorParams::Wavelet(p) => {
            validate_lattice(p.lattice_width, p.lattice_height, width, height, tiling)?;
            if width == 1 || height == 1 {
                return Err(ValidationError::new(
                    ErrorCode::MipFallbackAtBase,
                    "wavelet noise needs at least 2 pixels per axis at the base level",
                ));
            }
            Ok(())
        }
        GeneratorParams::Worley(p) => validate_worley(p, width, height, tiling),
        GeneratorParams::Gabor(p) => validate_gabor(p, width, height, tiling),
        GeneratorParams::White => Ok(()),
        GeneratorParams::Checker(p) => validate_checker(p, width, height, tiling),
        GeneratorParams::Waves(p) => validate_waves(p),
    }
}

/// Validates a lattice against the image it will be sampled into.
pub fn validate_lattice(
    lattice_width: u32,
    lattice_height: u32,
    width: u32,
    height: u32,
    tiling: TilingMode,
) -> Result<(), ValidationError> {
    for (value, image, axis) in [
        (lattice_width, width, "width"),
        (lattice_height, height, "height"),
    ] {
        let path = format!("generator.lattice_{}", axis);
        if value == 0 {
            return Err(ValidationError::with_path(
                ErrorCode::ZeroParameter,
                format!("lattice {} must be greater than 0", axis),
                path,
            ));
        }
        if image % value != 0 {
            return Err(ValidationError::with_path(
                ErrorCode::NotDivisible,
                format!(
                    "image {} {} is not a multiple of lattice {} {}",
                    axis, image, axis, value
                ),
                path,
            ));
        }
        if tiling == TilingMode::Wang && value % 4 != 0 {
            return Err(ValidationError::with_path(
                ErrorCode::WangAlignment,
                format!("lattice {} {} must be a multiple of 4 for Wang tiles", axis, value),
                path,
            ));
        }
    }
    Ok(())
}

fn validate_range(min: f32, max: f32, path: &str) -> Result<(), ValidationError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ValidationError::with_path(
            ErrorCode::NonFiniteValue,
            "range bounds must be finite",
            path,
        ));
    }
    if min > max {
        return Err(ValidationError::with_path(
            ErrorCode::InvalidRange,
            format!("range minimum {} exceeds maximum {}", min, max),
            path,
        ));
    }
    Ok(())
}

/// Checks that a cell grid can drive the requested tiling index.
fn validate_cells_per_row(cells: u32, tiling: TilingMode, path: &str) -> Result<(), ValidationError> {
    if cells == 0 {
        return Err(ValidationError::with_path(
            ErrorCode::ZeroParameter,
            "cell size leaves no whole cell per row",
            path,
        ));
    }
    match tiling {
        TilingMode::None => Ok(()),
        TilingMode::Simple | TilingMode::Wang if !cells.is_power_of_two() => {
            Err(ValidationError::with_path(
                ErrorCode::NotPowerOfTwo,
                format!("cells per row {} must be a power of two", cells),
                path,
            ))
        }
        TilingMode::Wang if cells < 4 => Err(ValidationError::with_path(
            ErrorCode::WangAlignment,
            format!("cells per row {} must be at least 4 for Wang tiles", cells),
            path,
        )),
        _ => Ok(()),
    }
}

/// Checks that the repeating cell grid covers the image exactly.
///
/// The period is `cells_per_row * cell_size` pixels on both axes. Simple
/// tiling needs each image dimension to be a whole number of periods; a Wang
/// atlas must be exactly one period so that its quarters are the 16 tiles.
fn validate_cell_period(
    cells: u32,
    cell_size: u32,
    width: u32,
    height: u32,
    tiling: TilingMode,
) -> Result<(), ValidationError> {
    if tiling == TilingMode::None {
        return Ok(());
    }
    let period = u64::from(cells) * u64::from(cell_size);
    for (image, axis) in [(width, "width"), (height, "height")] {
        let image = u64::from(image);
        match tiling {
            TilingMode::Wang if image != period => {
                return Err(ValidationError::with_path(
                    ErrorCode::WangAlignment,
                    format!(
                        "image {} {} must equal the cell period {} for Wang tiles",
                        axis, image, period
                    ),
                    "generator.cell_size",
                ));
            }
            TilingMode::Simple if image % period != 0 => {
                return Err(ValidationError::with_path(
                    ErrorCode::NotDivisible,
                    format!(
                        "image {} {} is not a multiple of the cell period {}",
                        axis, image, period
                    ),
                    "generator.cell_size",
                ));
            }
            _ => {}
        }
    }
    Ok(())
}

fn validate_worley(
    params: &WorleyNoiseParams,
    width: u32,
    height: u32,
    tiling: TilingMode,
) -> Result<(), ValidationError> {
    if params.cell_size == 0 {
        return Err(ValidationError::with_path(
            ErrorCode::ZeroParameter,
            "cell size must be greater than 0",
            "generator.cell_size",
        ));
    }
    let cells = params.resolved_cells_per_row(width);
    validate_cells_per_row(cells, tiling, "generator.cells_per_row")?;
    validate_cell_period(cells, params.cell_size, width, height, tiling)?;
    if params.min_points_per_cell > params.max_points_per_cell {
        return Err(ValidationError::with_path(
            ErrorCode::InvalidRange,
            format!(
                "min points per cell {} exceeds max {}",
                params.min_points_per_cell, params.max_points_per_cell
            ),
            "generator.min_points_per_cell",
        ));
    }
    if params
        .color_multiplier
        .iter()
        .chain(params.color_offset.iter())
        .any(|c| !c.is_finite())
    {
        return Err(ValidationError::with_path(
            ErrorCode::NonFiniteValue,
            "color multipliers and offsets must be finite",
            "generator.color_multiplier",
        ));
    }
    Ok(())
}

fn validate_gabor(
    params: &GaborNoiseParams,
    width: u32,
    height: u32,
    tiling: TilingMode,
) -> Result<(), ValidationError> {
    let floats = [
        params.cell_size,
        params.gaussian_magnitude,
        params.gaussian_width,
    ];
    if floats.iter().any(|v| !v.is_finite()) {
        return Err(ValidationError::new(
            ErrorCode::NonFiniteValue,
            "gabor parameters must be finite",
        ));
    }
    if params.cell_size < 1.0 {
        return Err(ValidationError::with_path(
            ErrorCode::ZeroParameter,
            "cell size must be at least 1 pixel",
            "generator.cell_size",
        ));
    }
    if tiling != TilingMode::None && params.cell_size.fract() != 0.0 {
        return Err(ValidationError::with_path(
            ErrorCode::NotDivisible,
            format!(
                "cell size {} must be a whole number of pixels to tile",
                params.cell_size
            ),
            "generator.cell_size",
        ));
    }
    let cells = params.cells_per_row(width);
    validate_cells_per_row(cells, tiling, "generator.cell_size")?;
    validate_cell_period(cells, params.cell_size as u32, width, height, tiling)?;
    validate_range(
        params.frequency_min,
        params.frequency_max,
        "generator.frequency_min",
    )?;
    validate_range(
        params.orientation_min,
        params.orientation_max,
        "generator.orientation_min",
    )
}

fn validate_checker(
    params: &CheckerParams,
    width: u32,
    height: u32,
    tiling: TilingMode,
) -> Result<(), ValidationError> {
    for (tile, image, axis) in [
        (params.tile_width, width, "width"),
        (params.tile_height, height, "height"),
    ] {
        let path = format!("generator.tile_{}", axis);
        if tile == 0 {
            return Err(ValidationError::with_path(
                ErrorCode::ZeroParameter,
                format!("checker tile {} must be greater than 0", axis),
                path,
            ));
        }
        if tiling == TilingMode::Wang {
            if (image >> 2) % tile != 0 || image >> 2 == 0 {
                return Err(ValidationError::with_path(
                    ErrorCode::WangAlignment,
                    format!(
                        "image {} should be a multiple of 4x checker tile {} for Wang tiles",
                        axis, axis
                    ),
                    path,
                ));
            }
        } else if image % tile != 0 {
            return Err(ValidationError::with_path(
                ErrorCode::NotDivisible,
                format!(
                    "image {} should be a multiple of the checker tile {}",
                    axis, axis
                ),
                path,
            ));
        }
    }
    validate_range(params.bright_min, params.bright_max, "generator.bright_min")?;
    validate_range(params.dark_min, params.dark_max, "generator.dark_min")
}

fn validate_waves(params: &WavesParams) -> Result<(), ValidationError> {
    if !params.frequency.is_finite() {
        return Err(ValidationError::with_path(
            ErrorCode::NonFiniteValue,
            "wave frequency must be finite",
            "generator.frequency",
        ));
    }
    Ok(())
}
