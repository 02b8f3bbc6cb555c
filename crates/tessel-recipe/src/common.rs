//! Enumerations shared by every generator.

use serde::{Deserialize, Serialize};

/// How a generated texture repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TilingMode {
    /// No wraparound; the field is generated once.
    None,
    /// Periodic wrap: the texture repeats with itself.
    #[default]
    Simple,
    /// 4x4 Wang tile set with two colors per edge.
    Wang,
}

impl TilingMode {
    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TilingMode::None => "none",
            TilingMode::Simple => "simple",
            TilingMode::Wang => "wang",
        }
    }
}

impl std::fmt::Display for TilingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TilingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(TilingMode::None),
            "simple" => Ok(TilingMode::Simple),
            "wang" => Ok(TilingMode::Wang),
            other => Err(format!(
                "unknown tiling mode '{}' (expected none, simple, or wang)",
                other
            )),
        }
    }
}

/// Weight curve applied to the fractional lattice position before blending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    /// Identity.
    Linear,
    /// Half cosine.
    Cosine,
    /// 3t^2 - 2t^3.
    Smoothstep,
    /// 6t^5 - 15t^4 + 10t^3.
    #[default]
    Quintic,
}

impl Interpolation {
    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interpolation::Linear => "linear",
            Interpolation::Cosine => "cosine",
            Interpolation::Smoothstep => "smoothstep",
            Interpolation::Quintic => "quintic",
        }
    }
}

impl std::fmt::Display for Interpolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Interpolation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Interpolation::Linear),
            "cosine" => Ok(Interpolation::Cosine),
            "smoothstep" => Ok(Interpolation::Smoothstep),
            "quintic" => Ok(Interpolation::Quintic),
            other => Err(format!(
                "unknown interpolation '{}' (expected linear, cosine, smoothstep, or quintic)",
                other
            )),
        }
    }
}

/// Output image container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Uncompressed true-color TGA.
    #[default]
    Tga,
    /// 8-bit PNG.
    Png,
}

impl OutputFormat {
    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Tga => "tga",
            OutputFormat::Png => "png",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tga" => Ok(OutputFormat::Tga),
            "png" => Ok(OutputFormat::Png),
            other => Err(format!("unknown output format '{}' (expected tga or png)", other)),
        }
    }
}
