//! Generator selection and per-generator parameter records.

mod cellular;
mod lattice;
mod pattern;

pub use cellular::*;
pub use lattice::*;
pub use pattern::*;

use serde::{Deserialize, Serialize};

/// A generator and its parameters, tagged by `"type"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorParams {
    Value(ValueNoiseParams),
    Perlin(GradientLatticeParams),
    Modified(GradientLatticeParams),
    Gradient(GradientNoiseParams),
    Wavelet(WaveletNoiseParams),
    Worley(WorleyNoiseParams),
    Gabor(GaborNoiseParams),
    White,
    Checker(CheckerParams),
    Waves(WavesParams),
}

impl GeneratorParams {
    /// Every generator name accepted on the command line.
    pub const NAMES: &'static [&'static str] = &[
        "value", "perlin", "modified", "gradient", "wavelet", "worley", "gabor", "white",
        "checker", "waves",
    ];

    /// Returns the generator name.
    pub fn name(&self) -> &'static str {
        match self {
            GeneratorParams::Value(_) => "value",
            GeneratorParams::Perlin(_) => "perlin",
            GeneratorParams::Modified(_) => "modified",
            GeneratorParams::Gradient(_) => "gradient",
            GeneratorParams::Wavelet(_) => "wavelet",
            GeneratorParams::Worley(_) => "worley",
            GeneratorParams::Gabor(_) => "gabor",
            GeneratorParams::White => "white",
            GeneratorParams::Checker(_) => "checker",
            GeneratorParams::Waves(_) => "waves",
        }
    }

    /// Builds the generator with default parameters from its name.
    pub fn default_for(name: &str) -> Option<Self> {
        let params = match name {
            "value" => GeneratorParams::Value(ValueNoiseParams::default()),
            "perlin" => GeneratorParams::Perlin(GradientLatticeParams::default()),
            "modified" => GeneratorParams::Modified(GradientLatticeParams::default()),
            "gradient" => GeneratorParams::Gradient(GradientNoiseParams::default()),
            "wavelet" => GeneratorParams::Wavelet(WaveletNoiseParams::default()),
            "worley" => GeneratorParams::Worley(WorleyNoiseParams::default()),
            "gabor" => GeneratorParams::Gabor(GaborNoiseParams::default()),
            "white" => GeneratorParams::White,
            "checker" => GeneratorParams::Checker(CheckerParams::default()),
            "waves" => GeneratorParams::Waves(WavesParams::default()),
            _ => return None,
        };
        Some(params)
    }

    /// Channels the generator writes: RGBA for Worley, one channel otherwise.
    pub fn channel_count(&self) -> u32 {
        match self {
            GeneratorParams::Worley(_) => 4,
            _ => 1,
        }
    }
}

impl Default for GeneratorParams {
    fn default() -> Self {
        GeneratorParams::Value(ValueNoiseParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_name_has_defaults() {
        for name in GeneratorParams::NAMES {
            let params = GeneratorParams::default_for(name).unwrap();
            assert_eq!(params.name(), *name);
        }
        assert!(GeneratorParams::default_for("simplex").is_none());
    }

    #[test]
    fn test_tagged_json_uses_defaults() {
        let params: GeneratorParams =
            serde_json::from_str(r#"{"type": "perlin", "lattice_width": 16}"#).unwrap();
        assert_eq!(
            params,
            GeneratorParams::Perlin(GradientLatticeParams {
                lattice_width: 16,
                lattice_height: 32,
                interpolation: crate::Interpolation::Quintic,
            })
        );
    }

    #[test]
    fn test_unit_variant_from_json() {
        let params: GeneratorParams = serde_json::from_str(r#"{"type": "white"}"#).unwrap();
        assert_eq!(params, GeneratorParams::White);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<GeneratorParams, _> =
            serde_json::from_str(r#"{"type": "value", "octaves": 4}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_value_noise_defaults() {
        let params = ValueNoiseParams::default();
        assert_eq!(params.interpolation, crate::Interpolation::Linear);
        assert_eq!(params.range_min, 0.0);
        assert_eq!(params.range_max, 1.0);
        assert_eq!(params.seed, 1);
    }

    #[test]
    fn test_worley_cells_per_row_defaults_to_width_over_cell() {
        let params = WorleyNoiseParams::default();
        assert_eq!(params.resolved_cells_per_row(1024), 32);

        let explicit = WorleyNoiseParams {
            cells_per_row: Some(8),
            ..Default::default()
        };
        assert_eq!(explicit.resolved_cells_per_row(1024), 8);
    }

    #[test]
    fn test_channel_count() {
        assert_eq!(
            GeneratorParams::Worley(WorleyNoiseParams::default()).channel_count(),
            4
        );
        assert_eq!(GeneratorParams::White.channel_count(), 1);
    }
}
