//! CLI argument definitions for the Tessel command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand};
use tessel_recipe::{GeneratorParams, Interpolation, OutputFormat, TilingMode};

/// Tessel - Tileable Procedural Texture Generator
#[derive(Parser)]
#[command(name = "tessel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log generator progress (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a texture and write one image per mip level
    Generate {
        #[command(flatten)]
        recipe: RecipeArgs,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        out_dir: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Check a recipe against every generator precondition without generating
    Validate {
        #[command(flatten)]
        recipe: RecipeArgs,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved recipe as JSON
    Recipe {
        #[command(flatten)]
        recipe: RecipeArgs,
    },

    /// Print size and per-channel statistics of a TGA file
    Inspect {
        /// Path to the TGA file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

/// Recipe source: a JSON file, command-line flags, or a file with flag overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct RecipeArgs {
    /// Path to a JSON recipe; flags below override its fields
    #[arg(short, long)]
    pub recipe: Option<String>,

    /// Generator to use
    #[arg(
        short,
        long,
        value_parser = clap::builder::PossibleValuesParser::new(GeneratorParams::NAMES.iter().copied())
    )]
    pub generator: Option<String>,

    /// Tiling mode (none, simple, wang)
    #[arg(short, long)]
    pub tiling: Option<TilingMode>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Build the full mip chain
    #[arg(short, long)]
    pub mipmaps: bool,

    /// Lattice cells per axis for lattice noises
    #[arg(long)]
    pub lattice: Option<u32>,

    /// Checker tile edge in pixels
    #[arg(long)]
    pub checker: Option<u32>,

    /// Worley or Gabor cell edge in pixels
    #[arg(long)]
    pub cell_size: Option<u32>,

    /// Worley cells per row used by the tiling index
    #[arg(long)]
    pub cells_per_row: Option<u32>,

    /// Wave frequency (cycles over the image height)
    #[arg(long)]
    pub frequency: Option<f32>,

    /// Weight curve (linear, cosine, smoothstep, quintic)
    #[arg(short, long)]
    pub interpolation: Option<Interpolation>,

    /// RNG seed for value, wavelet and checker generators
    #[arg(long)]
    pub seed: Option<u32>,

    /// Base output file name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output image format (tga, png)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}
