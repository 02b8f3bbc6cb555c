//! Recipe loading from a JSON file, command-line flags, or both.
//!
//! A recipe file is read first when `--recipe` is given; every flag that is
//! present then overrides the matching field. Without a file the flags start
//! from the default recipe.

use std::path::{Path, PathBuf};

use tessel_recipe::{GeneratorParams, TextureRecipe};

use crate::cli_args::RecipeArgs;

/// Where the recipe came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A JSON recipe file, possibly with flag overrides.
    File,
    /// Flags only.
    Flags,
}

impl SourceKind {
    /// Returns the string representation for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::File => "file",
            SourceKind::Flags => "flags",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A resolved (not yet validated) recipe.
#[derive(Debug)]
pub struct LoadResult {
    pub recipe: TextureRecipe,
    pub source_kind: SourceKind,
    /// BLAKE3 hash of the recipe file content, when there is one.
    pub source_hash: Option<String>,
}

/// Errors that can occur while resolving a recipe.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Recipe JSON could not be parsed.
    JsonParse { message: String },

    /// A flag does not apply to the selected generator.
    Flag { flag: &'static str, generator: &'static str },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read recipe '{}': {}", path.display(), source)
            }
            InputError::JsonParse { message } => write!(f, "invalid recipe JSON: {}", message),
            InputError::Flag { flag, generator } => {
                write!(f, "{} does not apply to the {} generator", flag, generator)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Reads the recipe file (if any) and applies every flag on top.
pub fn load_recipe(args: &RecipeArgs) -> Result<LoadResult, InputError> {
    let (mut recipe, source_kind, source_hash) = match &args.recipe {
        Some(path) => {
            let (recipe, hash) = read_recipe_file(Path::new(path))?;
            (recipe, SourceKind::File, Some(hash))
        }
        None => (TextureRecipe::default(), SourceKind::Flags, None),
    };
    apply_overrides(&mut recipe, args)?;
    Ok(LoadResult {
        recipe,
        source_kind,
        source_hash,
    })
}

fn read_recipe_file(path: &Path) -> Result<(TextureRecipe, String), InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let hash = blake3::hash(text.as_bytes()).to_hex().to_string();
    let recipe = TextureRecipe::from_json(&text).map_err(|e| InputError::JsonParse {
        message: e.to_string(),
    })?;
    Ok((recipe, hash))
}

/// Applies the flags present in `args` to `recipe`.
///
/// Selecting a different generator replaces its parameters with that
/// generator's defaults; selecting the same one keeps the file's parameters.
pub fn apply_overrides(recipe: &mut TextureRecipe, args: &RecipeArgs) -> Result<(), InputError> {
    if let Some(name) = &args.generator {
        if recipe.generator.name() != name {
            if let Some(params) = GeneratorParams::default_for(name) {
                recipe.generator = params;
            }
        }
    }
    if let Some(tiling) = args.tiling {
        recipe.tiling = tiling;
    }
    if let Some(width) = args.width {
        recipe.width = width;
    }
    if let Some(height) = args.height {
        recipe.height = height;
    }
    if args.mipmaps {
        recipe.mipmaps = true;
    }
    if let Some(name) = &args.name {
        recipe.output.name = name.clone();
    }
    if let Some(format) = args.format {
        recipe.output.format = format;
    }

    let generator = &mut recipe.generator;
    let name = generator.name();
    let not_applicable = |flag| InputError::Flag {
        flag,
        generator: name,
    };

    if let Some(cells) = args.lattice {
        match generator {
            GeneratorParams::Value(p) => (p.lattice_width, p.lattice_height) = (cells, cells),
            GeneratorParams::Perlin(p) | GeneratorParams::Modified(p) => {
                (p.lattice_width, p.lattice_height) = (cells, cells)
            }
            GeneratorParams::Gradient(p) => (p.lattice_width, p.lattice_height) = (cells, cells),
            GeneratorParams::Wavelet(p) => (p.lattice_width, p.lattice_height) = (cells, cells),
            _ => return Err(not_applicable("--lattice")),
        }
    }

    if let Some(tile) = args.checker {
        match generator {
            GeneratorParams::Checker(p) => (p.tile_width, p.tile_height) = (tile, tile),
            _ => return Err(not_applicable("--checker")),
        }
    }

    if let Some(size) = args.cell_size {
        match generator {
            GeneratorParams::Worley(p) => p.cell_size = size,
            GeneratorParams::Gabor(p) => p.cell_size = size as f32,
            _ => return Err(not_applicable("--cell-size")),
        }
    }

    if let Some(cells) = args.cells_per_row {
        match generator {
            GeneratorParams::Worley(p) => p.cells_per_row = Some(cells),
            _ => return Err(not_applicable("--cells-per-row")),
        }
    }

    if let Some(frequency) = args.frequency {
        match generator {
            GeneratorParams::Waves(p) => p.frequency = frequency,
            _ => return Err(not_applicable("--frequency")),
        }
    }

    if let Some(interpolation) = args.interpolation {
        match generator {
            GeneratorParams::Value(p) => p.interpolation = interpolation,
            GeneratorParams::Perlin(p) | GeneratorParams::Modified(p) => {
                p.interpolation = interpolation
            }
            GeneratorParams::Wavelet(p) => p.interpolation = interpolation,
            _ => return Err(not_applicable("--interpolation")),
        }
    }

    if let Some(seed) = args.seed {
        match generator {
            GeneratorParams::Value(p) => p.seed = seed,
            GeneratorParams::Wavelet(p) => p.seed = seed,
            GeneratorParams::Checker(p) => p.seed = seed,
            _ => return Err(not_applicable("--seed")),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tessel_recipe::{CheckerParams, OutputFormat, TilingMode, ValueNoiseParams};

    fn args() -> RecipeArgs {
        RecipeArgs::default()
    }

    #[test]
    fn test_flags_only_start_from_defaults() {
        let loaded = load_recipe(&args()).unwrap();
        assert_eq!(loaded.recipe, TextureRecipe::default());
        assert_eq!(loaded.source_kind, SourceKind::Flags);
        assert!(loaded.source_hash.is_none());
    }

    #[test]
    fn test_flags_build_checker_recipe() {
        let loaded = load_recipe(&RecipeArgs {
            generator: Some("checker".to_string()),
            tiling: Some(TilingMode::Wang),
            width: Some(256),
            height: Some(256),
            mipmaps: true,
            checker: Some(16),
            seed: Some(5),
            format: Some(OutputFormat::Png),
            ..args()
        })
        .unwrap();
        let recipe = loaded.recipe;
        assert_eq!(recipe.tiling, TilingMode::Wang);
        assert_eq!((recipe.width, recipe.height), (256, 256));
        assert!(recipe.mipmaps);
        assert_eq!(recipe.output.format, OutputFormat::Png);
        assert_eq!(
            recipe.generator,
            GeneratorParams::Checker(CheckerParams {
                tile_width: 16,
                tile_height: 16,
                seed: 5,
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_flag_for_other_generator_is_rejected() {
        let err = load_recipe(&RecipeArgs {
            generator: Some("perlin".to_string()),
            checker: Some(8),
            ..args()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "--checker does not apply to the perlin generator");
    }

    #[test]
    fn test_file_values_survive_unrelated_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rock.json");
        std::fs::write(
            &path,
            r#"{"width": 128, "height": 64, "generator": {"type": "value", "lattice_width": 8, "seed": 3}}"#,
        )
        .unwrap();

        let loaded = load_recipe(&RecipeArgs {
            recipe: Some(path.to_string_lossy().into_owned()),
            generator: Some("value".to_string()),
            width: Some(256),
            ..args()
        })
        .unwrap();
        assert_eq!(loaded.source_kind, SourceKind::File);
        assert_eq!(loaded.source_hash.as_ref().map(String::len), Some(64));
        assert_eq!((loaded.recipe.width, loaded.recipe.height), (256, 64));
        assert_eq!(
            loaded.recipe.generator,
            GeneratorParams::Value(ValueNoiseParams {
                lattice_width: 8,
                seed: 3,
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_recipe(&RecipeArgs {
            recipe: Some("/nonexistent/recipe.json".to_string()),
            ..args()
        })
        .unwrap_err();
        assert!(matches!(err, InputError::FileRead { .. }));
        assert!(err.to_string().contains("/nonexistent/recipe.json"));
    }

    #[test]
    fn test_bad_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_recipe(&RecipeArgs {
            recipe: Some(path.to_string_lossy().into_owned()),
            ..args()
        })
        .unwrap_err();
        assert!(matches!(err, InputError::JsonParse { .. }));
    }
}
