//! Generator dispatch.

use tessel_recipe::{validate_generator, ErrorCode, GeneratorParams, TilingMode, ValidationError};

use crate::generate::GenerateError;
use crate::image::ImageData;
use crate::noise::{
    GaborNoise, GradientNoise, GradientTables, ModifiedNoise, PerlinNoise, PerlinTables,
    TextureGenerator, ValueNoise, WaveletNoise, WhiteNoise, WorleyNoise,
};
use crate::pattern::{CheckerPattern, WavesPattern};

/// Owns the lookup tables shared by every generation.
///
/// The tables are built once here and only read afterwards, so one engine
/// can serve any number of generations.
#[derive(Debug, Clone, Default)]
pub struct NoiseEngine {
    perlin: PerlinTables,
    gradient: GradientTables,
}

impl NoiseEngine {
    pub fn new() -> Self {
        Self {
            perlin: PerlinTables::new(),
            gradient: GradientTables::new(),
        }
    }

    pub fn perlin_tables(&self) -> &PerlinTables {
        &self.perlin
    }

    pub fn gradient_tables(&self) -> &GradientTables {
        &self.gradient
    }

    /// Fills every level of `image` with the generator described by `params`.
    ///
    /// The parameters are validated against the image size and `tiling`
    /// first; nothing is written when they are rejected.
    pub fn generate(
        &self,
        tiling: TilingMode,
        params: &GeneratorParams,
        image: &mut ImageData,
    ) -> Result<(), GenerateError> {
        let (width, height) = (image.width(), image.height());
        validate_generator(params, width, height, tiling)?;

        let generator = self.build(tiling, params, width, height)?;
        if generator.channels() != image.channel_count() {
            return Err(ValidationError::new(
                ErrorCode::ChannelMismatch,
                format!(
                    "{} writes {} channel(s) but the image has {}",
                    params.name(),
                    generator.channels(),
                    image.channel_count()
                ),
            )
            .into());
        }

        tracing::info!(
            generator = params.name(),
            tiling = %tiling,
            width,
            height,
            levels = image.mip_level_count(),
            "generating texture"
        );
        generator.generate(image);
        Ok(())
    }

    /// Builds the generator for `params`, including any lattice or tables it needs.
    pub fn build(
        &self,
        tiling: TilingMode,
        params: &GeneratorParams,
        width: u32,
        height: u32,
    ) -> Result<Box<dyn TextureGenerator + '_>, GenerateError> {
        let generator: Box<dyn TextureGenerator + '_> = match params {
            GeneratorParams::Value(p) => Box::new(ValueNoise::new(p, tiling)),
            GeneratorParams::Perlin(p) => Box::new(PerlinNoise::new(p, tiling, &self.perlin)),
            GeneratorParams::Modified(p) => Box::new(ModifiedNoise::new(p, tiling)),
            GeneratorParams::Gradient(p) => Box::new(GradientNoise::new(p, tiling, &self.gradient)),
            GeneratorParams::Wavelet(p) => Box::new(WaveletNoise::new(p, tiling)?),
            GeneratorParams::Worley(p) => Box::new(WorleyNoise::new(p, tiling, width)),
            GeneratorParams::Gabor(p) => Box::new(GaborNoise::new(p, tiling, width)),
            GeneratorParams::White => Box::new(WhiteNoise),
            GeneratorParams::Checker(p) => Box::new(CheckerPattern::new(p, width, height)),
            GeneratorParams::Waves(p) => Box::new(WavesPattern::new(p)),
        };
        Ok(generator)
    }
}
