//! Recipe command implementation
//!
//! Prints the recipe that the given file and flags resolve to.

use anyhow::{Context, Result};
use std::process::ExitCode;

use crate::cli_args::RecipeArgs;
use crate::input::load_recipe;

/// Run the recipe command
///
/// The output is a complete recipe with every default spelled out, suitable
/// for `--recipe`. It is not validated.
pub fn run(args: &RecipeArgs) -> Result<ExitCode> {
    let loaded = load_recipe(args).context("failed to resolve recipe")?;
    let json = loaded.recipe.to_json_pretty()?;
    println!("{}", json);
    Ok(ExitCode::SUCCESS)
}
