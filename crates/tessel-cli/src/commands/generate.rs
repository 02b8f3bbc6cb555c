//! Generate command implementation
//!
//! Resolves the recipe, generates the texture and writes one image per mip level.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use tessel_recipe::{TextureRecipe, ValidationError};
use tessel_texture::{generate_texture, save_texture, GenerateError, ImageData};

use super::json_output::{
    input_error_to_json, print_json, validation_error_to_json, GenerateOutput, GenerateResult,
    JsonError,
};
use super::{failed, invalid};
use crate::cli_args::RecipeArgs;
use crate::input::{load_recipe, LoadResult};

/// Run the generate command
///
/// # Arguments
/// * `args` - Recipe file and flag overrides
/// * `out_dir` - Output directory (default: current directory)
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 on success, 1 for an invalid recipe, 2 if generation or writing failed
pub fn run(args: &RecipeArgs, out_dir: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let out_dir = Path::new(out_dir.unwrap_or("."));
    if json_output {
        run_json(args, out_dir)
    } else {
        run_human(args, out_dir)
    }
}

fn generate_and_save(
    recipe: &TextureRecipe,
    out_dir: &Path,
) -> Result<(ImageData, Vec<PathBuf>), GenerateError> {
    let image = generate_texture(recipe)?;
    let paths = save_texture(&image, out_dir, &recipe.output)?;
    Ok((image, paths))
}

/// Run generate with human-readable (colored) output
fn run_human(args: &RecipeArgs, out_dir: &Path) -> Result<ExitCode> {
    let start = Instant::now();
    println!(
        "{} {}",
        "Generating:".cyan().bold(),
        args.recipe.as_deref().unwrap_or("(flags)")
    );

    let recipe = match load_recipe(args) {
        Ok(LoadResult { recipe, .. }) => recipe,
        Err(e) => {
            println!("  {} {}", "x".red(), e);
            println!("\n{} Could not resolve recipe", "FAILED".red().bold());
            return Ok(invalid());
        }
    };

    println!(
        "{} {} {}x{} ({} tiling{})",
        "Recipe:".dimmed(),
        recipe.generator.name(),
        recipe.width,
        recipe.height,
        recipe.tiling,
        if recipe.mipmaps { ", mipmaps" } else { "" }
    );

    let (image, paths) = match generate_and_save(&recipe, out_dir) {
        Ok(generated) => generated,
        Err(GenerateError::Validation(e)) => {
            print_validation_error(&e);
            println!("\n{} Recipe is invalid", "FAILED".red().bold());
            return Ok(invalid());
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("failed to generate texture into {}", out_dir.display())
            })
        }
    };

    for path in &paths {
        println!("  {} {}", "+".green(), path.display());
    }
    println!("{} {}", "Hash:".dimmed(), image.content_hash());

    let duration_ms = start.elapsed().as_millis() as u64;
    println!(
        "\n{} Generated {} file(s) ({}ms)",
        "SUCCESS".green().bold(),
        paths.len(),
        duration_ms
    );
    Ok(ExitCode::SUCCESS)
}

/// Run generate with machine-readable JSON output
fn run_json(args: &RecipeArgs, out_dir: &Path) -> Result<ExitCode> {
    let start = Instant::now();

    let LoadResult {
        recipe,
        source_hash,
        ..
    } = match load_recipe(args) {
        Ok(loaded) => loaded,
        Err(e) => {
            print_json(&GenerateOutput::failure(vec![input_error_to_json(&e)], None))?;
            return Ok(invalid());
        }
    };

    let (image, paths) = match generate_and_save(&recipe, out_dir) {
        Ok(generated) => generated,
        Err(e) => {
            let (error, code) = match &e {
                GenerateError::Validation(v) => (validation_error_to_json(v), invalid()),
                other => (JsonError::new(other.code(), other.to_string()), failed()),
            };
            print_json(&GenerateOutput::failure(vec![error], source_hash))?;
            return Ok(code);
        }
    };

    let result = GenerateResult {
        generator: recipe.generator.name().to_string(),
        tiling: recipe.tiling.to_string(),
        width: image.width(),
        height: image.height(),
        channels: image.channel_count(),
        mip_levels: image.mip_level_count(),
        content_hash: image.content_hash(),
        files: paths.iter().map(|p| p.display().to_string()).collect(),
        duration_ms: start.elapsed().as_millis() as u64,
    };
    print_json(&GenerateOutput::success(result, source_hash))?;
    Ok(ExitCode::SUCCESS)
}

/// Print one validation error to the console
pub(crate) fn print_validation_error(error: &ValidationError) {
    let path_info = error
        .path
        .as_ref()
        .map(|p| format!(" at {}", p))
        .unwrap_or_default();
    println!(
        "  {} [{}]{}: {}",
        "x".red(),
        error.code.to_string().red(),
        path_info.dimmed(),
        error.message
    );
}
