use pretty_assertions::assert_eq;
use tessel_recipe::{CheckerParams, ErrorCode, GeneratorParams, TextureRecipe, TilingMode, WavesParams};
use tessel_texture::{generate_texture, GenerateError};

fn checker_recipe(size: u32, tile: u32, tiling: TilingMode) -> TextureRecipe {
    TextureRecipe {
        width: size,
        height: size,
        mipmaps: true,
        tiling,
        generator: GeneratorParams::Checker(CheckerParams {
            tile_width: tile,
            tile_height: tile,
            bright_min: 1.0,
            bright_max: 1.0,
            dark_min: 0.0,
            dark_max: 0.0,
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[test]
fn test_checker_end_to_end() {
    let image = generate_texture(&checker_recipe(8, 2, TilingMode::Simple)).unwrap();
    assert_eq!(image.mip_level_count(), 4);

    let expected_row = |y: u32| -> Vec<f32> {
        (0..8)
            .map(|x| if (x / 2 + y / 2) % 2 == 0 { 1.0 } else { 0.0 })
            .collect()
    };
    for y in 0..8 {
        let row: Vec<f32> = (0..8).map(|x| image.get(0, x, y, 0)).collect();
        assert_eq!(row, expected_row(y));
    }

    // Level 1 has one pixel per tile; after that the box filter averages.
    let level1: Vec<f32> = image.pixels(1).to_vec();
    assert_eq!(
        level1,
        vec![
            1.0, 0.0, 1.0, 0.0, //
            0.0, 1.0, 0.0, 1.0, //
            1.0, 0.0, 1.0, 0.0, //
            0.0, 1.0, 0.0, 1.0,
        ]
    );
    assert_eq!(image.pixels(2), &[0.5, 0.5, 0.5, 0.5]);
    assert_eq!(image.pixels(3), &[0.5]);
}

#[test]
fn test_checker_wang_needs_four_tiles_per_axis() {
    let err = generate_texture(&checker_recipe(8, 4, TilingMode::Wang)).unwrap_err();
    match err {
        GenerateError::Validation(v) => assert_eq!(v.code, ErrorCode::WangAlignment),
        other => panic!("unexpected error: {other}"),
    }
    assert!(generate_texture(&checker_recipe(16, 4, TilingMode::Wang)).is_ok());
}

#[test]
fn test_checker_seed_changes_shades() {
    let mut a = checker_recipe(16, 4, TilingMode::Simple);
    if let GeneratorParams::Checker(params) = &mut a.generator {
        *params = CheckerParams {
            tile_width: 4,
            tile_height: 4,
            ..Default::default()
        };
    }
    let mut b = a.clone();
    if let GeneratorParams::Checker(params) = &mut b.generator {
        params.seed = 99;
    }
    let first = generate_texture(&a).unwrap();
    let second = generate_texture(&b).unwrap();
    assert_ne!(first.content_hash(), second.content_hash());
}

#[test]
fn test_waves_box_filter_every_level() {
    let recipe = TextureRecipe {
        width: 4,
        height: 8,
        mipmaps: true,
        tiling: TilingMode::None,
        generator: GeneratorParams::Waves(WavesParams { frequency: 1.0 }),
        ..Default::default()
    };
    let image = generate_texture(&recipe).unwrap();
    assert_eq!(image.dimensions(1), (2, 4));
    for y in 0..4 {
        let expected = (image.get(0, 0, 2 * y, 0) + image.get(0, 0, 2 * y + 1, 0)) / 2.0;
        assert!((image.get(1, 1, y, 0) - expected).abs() < 1e-6);
    }
}
