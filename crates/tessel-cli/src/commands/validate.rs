//! Validate command implementation
//!
//! Checks a resolved recipe against every generator precondition.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use super::generate::print_validation_error;
use super::invalid;
use super::json_output::{input_error_to_json, print_json, validation_error_to_json, ValidateOutput};
use crate::cli_args::RecipeArgs;
use crate::input::{load_recipe, LoadResult};

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(args: &RecipeArgs, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(args)
    } else {
        run_human(args)
    }
}

fn run_human(args: &RecipeArgs) -> Result<ExitCode> {
    println!(
        "{} {}",
        "Validating:".cyan().bold(),
        args.recipe.as_deref().unwrap_or("(flags)")
    );

    let LoadResult {
        recipe,
        source_kind,
        source_hash,
    } = match load_recipe(args) {
        Ok(loaded) => loaded,
        Err(e) => {
            println!("  {} {}", "x".red(), e);
            println!("\n{} Could not resolve recipe", "FAILED".red().bold());
            return Ok(invalid());
        }
    };

    match &source_hash {
        Some(hash) => println!("{} {} ({})", "Source:".dimmed(), source_kind, &hash[..16]),
        None => println!("{} {}", "Source:".dimmed(), source_kind),
    }

    match recipe.validate() {
        Ok(()) => {
            println!(
                "\n{} Recipe is valid ({} {}x{}, {} tiling)",
                "SUCCESS".green().bold(),
                recipe.generator.name(),
                recipe.width,
                recipe.height,
                recipe.tiling
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("\n{}", "Errors:".red().bold());
            print_validation_error(&e);
            println!("\n{} Recipe is invalid", "FAILED".red().bold());
            Ok(invalid())
        }
    }
}

fn run_json(args: &RecipeArgs) -> Result<ExitCode> {
    let LoadResult {
        recipe,
        source_hash,
        ..
    } = match load_recipe(args) {
        Ok(loaded) => loaded,
        Err(e) => {
            print_json(&ValidateOutput {
                success: false,
                errors: vec![input_error_to_json(&e)],
                recipe: None,
                source_hash: None,
            })?;
            return Ok(invalid());
        }
    };

    let errors = match recipe.validate() {
        Ok(()) => Vec::new(),
        Err(e) => vec![validation_error_to_json(&e)],
    };
    let output = ValidateOutput {
        success: errors.is_empty(),
        errors,
        recipe: Some(serde_json::to_value(&recipe)?),
        source_hash,
    };
    print_json(&output)?;

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(invalid())
    }
}
