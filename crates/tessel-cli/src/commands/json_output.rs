//! JSON output types for machine-readable CLI output.
//!
//! These back the `--json` flag on `generate`, `validate` and `inspect`.

use serde::{Deserialize, Serialize};
use tessel_recipe::ValidationError;

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// Validation failures pass through the recipe codes (`T001`...) and
/// generation failures the texture codes (`TEXTURE_001`...).
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// Flag does not apply to the selected generator
    pub const FLAG_MISMATCH: &str = "CLI_003";
    /// Image file could not be decoded
    pub const IMAGE_READ: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "T003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Recipe path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the recipe path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Converts a recipe loading error.
pub fn input_error_to_json(error: &InputError) -> JsonError {
    let code = match error {
        InputError::FileRead { .. } => error_codes::FILE_READ,
        InputError::JsonParse { .. } => error_codes::JSON_PARSE,
        InputError::Flag { .. } => error_codes::FLAG_MISMATCH,
    };
    JsonError::new(code, error.to_string())
}

/// Converts a validation error, keeping its code and path.
pub fn validation_error_to_json(error: &ValidationError) -> JsonError {
    let json = JsonError::new(error.code.code(), error.message.clone());
    match &error.path {
        Some(path) => json.with_path(path.clone()),
        None => json,
    }
}

/// Summary of a generated texture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateResult {
    pub generator: String,
    pub tiling: String,
    pub width: u32,
    pub height: u32,
    pub channels: u32,
    pub mip_levels: u32,
    /// BLAKE3 hash of every mip level's pixels
    pub content_hash: String,
    /// Written files, one per mip level
    pub files: Vec<String>,
    pub duration_ms: u64,
}

/// JSON output for the `generate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResult>,
    /// BLAKE3 hash of the recipe file (if one was read)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

impl GenerateOutput {
    pub fn success(result: GenerateResult, source_hash: Option<String>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
            source_hash,
        }
    }

    pub fn failure(errors: Vec<JsonError>, source_hash: Option<String>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
            source_hash,
        }
    }
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    /// The resolved recipe (when it could be loaded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// Per-channel statistics of a decoded image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelStats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_channels: Option<u32>,
    /// Statistics for R, G, B and A
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channels: Vec<ChannelStats>,
}

/// Serializes `value` as pretty JSON and prints it.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
