//! Tessel CLI - Command-line interface for tileable texture generation
//!
//! This binary provides commands for validating recipes, generating textures
//! and inspecting the written images.

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use tessel_cli::cli_args::{Cli, Commands};
use tessel_cli::commands;

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            recipe,
            out_dir,
            json,
        } => commands::generate::run(&recipe, out_dir.as_deref(), json),
        Commands::Validate { recipe, json } => commands::validate::run(&recipe, json),
        Commands::Recipe { recipe } => commands::recipe::run(&recipe),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red(), e);
            ExitCode::from(commands::EXIT_FAILED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_recipe::{Interpolation, OutputFormat, TilingMode};

    #[test]
    fn test_cli_parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "tessel",
            "generate",
            "--generator",
            "perlin",
            "--tiling",
            "wang",
            "--width",
            "512",
            "--height",
            "256",
            "--lattice",
            "16",
            "--interpolation",
            "cosine",
            "--mipmaps",
            "--format",
            "png",
            "-o",
            "out",
        ])
        .unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Generate {
                recipe,
                out_dir,
                json,
            } => {
                assert_eq!(recipe.generator.as_deref(), Some("perlin"));
                assert_eq!(recipe.tiling, Some(TilingMode::Wang));
                assert_eq!(recipe.width, Some(512));
                assert_eq!(recipe.height, Some(256));
                assert_eq!(recipe.lattice, Some(16));
                assert_eq!(recipe.interpolation, Some(Interpolation::Cosine));
                assert!(recipe.mipmaps);
                assert_eq!(recipe.format, Some(OutputFormat::Png));
                assert_eq!(out_dir.as_deref(), Some("out"));
                assert!(!json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_generator() {
        let err = Cli::try_parse_from(["tessel", "generate", "--generator", "simplex"])
            .err()
            .unwrap();
        assert!(err.to_string().contains("simplex"));
    }

    #[test]
    fn test_cli_rejects_unknown_tiling() {
        assert!(Cli::try_parse_from(["tessel", "validate", "--tiling", "hex"]).is_err());
    }

    #[test]
    fn test_cli_parses_validate_with_recipe_and_verbose() {
        let cli =
            Cli::try_parse_from(["tessel", "-v", "validate", "--recipe", "r.json", "--json"])
                .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Validate { recipe, json } => {
                assert_eq!(recipe.recipe.as_deref(), Some("r.json"));
                assert!(json);
            }
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_cli_parses_inspect() {
        let cli = Cli::try_parse_from(["tessel", "inspect", "--input", "a.tga"]).unwrap();
        match cli.command {
            Commands::Inspect { input, json } => {
                assert_eq!(input, "a.tga");
                assert!(!json);
            }
            _ => panic!("expected inspect command"),
        }
    }

    #[test]
    fn test_cli_parses_recipe_with_cell_flags() {
        let cli = Cli::try_parse_from([
            "tessel",
            "recipe",
            "-g",
            "worley",
            "--cell-size",
            "16",
            "--cells-per-row",
            "8",
        ])
        .unwrap();
        match cli.command {
            Commands::Recipe { recipe } => {
                assert_eq!(recipe.cell_size, Some(16));
                assert_eq!(recipe.cells_per_row, Some(8));
            }
            _ => panic!("expected recipe command"),
        }
    }
}
