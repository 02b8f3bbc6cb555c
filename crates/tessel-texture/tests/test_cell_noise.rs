use std::fmt::Debug;

use pretty_assertions::{assert_eq, assert_ne};
use tessel_recipe::{
    ErrorCode, GaborNoiseParams, GeneratorParams, TextureRecipe, TilingMode, WorleyNoiseParams,
};
use tessel_texture::noise::{GaborNoise, WhiteNoise, WorleyNoise};
use tessel_texture::tiling::TileEdges;
use tessel_texture::{generate_texture, GenerateError, ImageData, NoiseEngine, WangTiling};

fn recipe(generator: GeneratorParams, tiling: TilingMode) -> TextureRecipe {
    TextureRecipe {
        width: 64,
        height: 64,
        mipmaps: true,
        tiling,
        generator,
        ..Default::default()
    }
}

fn rgba(image: &ImageData, x: u32, y: u32) -> Vec<f32> {
    (0..4).map(|c| image.get(0, x, y, c)).collect()
}

type EdgeColor = fn(TileEdges) -> u32;
type BorderCell = fn(i32, i32, i32, i32) -> (i32, i32);

/// Every non-corner border cell of the 16 Wang tiles, grouped by edge color,
/// must hold the same contents as the other cells with that color.
/// Returns the contents per edge (left, right, top, bottom) and color.
fn assert_border_strips_shared<T, F>(tile: i32, contents: F) -> Vec<[Option<Vec<T>>; 2]>
where
    T: PartialEq + Debug,
    F: Fn(i32, i32) -> Vec<T>,
{
    let edges: [(EdgeColor, BorderCell); 4] = [
        (|e| e.left, |tx, ty, k, t| (tx * t, ty * t + k)),
        (|e| e.right, |tx, ty, k, t| (tx * t + t - 1, ty * t + k)),
        (|e| e.top, |tx, ty, k, t| (tx * t + k, ty * t)),
        (|e| e.bottom, |tx, ty, k, t| (tx * t + k, ty * t + t - 1)),
    ];
    let mut strips = Vec::new();
    for (color_of, cell_at) in edges {
        let mut by_color: [Option<Vec<T>>; 2] = [None, None];
        for ty in 0..4u32 {
            for tx in 0..4u32 {
                let color = color_of(WangTiling::edges(tx, ty)) as usize;
                let strip: Vec<T> = (1..tile - 1)
                    .flat_map(|k| {
                        let (i, j) = cell_at(tx as i32, ty as i32, k, tile);
                        contents(i, j)
                    })
                    .collect();
                match &by_color[color] {
                    Some(seen) => assert_eq!(seen, &strip, "tile ({tx}, {ty}) color {color}"),
                    None => by_color[color] = Some(strip),
                }
            }
        }
        strips.push(by_color);
    }
    strips
}

fn worley(cell_size: u32) -> GeneratorParams {
    GeneratorParams::Worley(WorleyNoiseParams {
        cell_size,
        ..Default::default()
    })
}

#[test]
fn test_worley_recipe_yields_rgba() {
    let image = generate_texture(&recipe(worley(8), TilingMode::Simple)).unwrap();
    assert_eq!(image.channel_count(), 4);
    assert_eq!(image.mip_level_count(), 7);
    for level in 0..image.mip_level_count() {
        for pixel in image.pixels(level).chunks_exact(4) {
            assert_eq!(pixel[3], 1.0);
        }
    }
}

#[test]
fn test_worley_matches_direct_sampling() {
    let params = WorleyNoiseParams {
        cell_size: 8,
        ..Default::default()
    };
    let image = generate_texture(&recipe(
        GeneratorParams::Worley(params.clone()),
        TilingMode::Wang,
    ))
    .unwrap();
    let direct = WorleyNoise::new(&params, TilingMode::Wang, 64);
    for &(x, y) in &[(0u32, 0u32), (13, 40), (63, 63)] {
        let expected = direct.sample(x as f32, y as f32);
        let actual: Vec<f32> = (0..4).map(|c| image.get(0, x, y, c)).collect();
        assert_eq!(actual, expected.to_vec());
    }
}

#[test]
fn test_worley_tiling_modes_differ() {
    let simple = generate_texture(&recipe(worley(8), TilingMode::Simple)).unwrap();
    let none = generate_texture(&recipe(worley(8), TilingMode::None)).unwrap();
    assert_ne!(simple.content_hash(), none.content_hash());
}

#[test]
fn test_worley_rejects_non_power_of_two_rows() {
    let generator = GeneratorParams::Worley(WorleyNoiseParams {
        cell_size: 8,
        cells_per_row: Some(6),
        ..Default::default()
    });
    let err = generate_texture(&recipe(generator, TilingMode::Simple)).unwrap_err();
    match err {
        GenerateError::Validation(v) => assert_eq!(v.code, ErrorCode::NotPowerOfTwo),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_gabor_is_clamped_and_deterministic() {
    let generator = GeneratorParams::Gabor(GaborNoiseParams {
        cell_size: 16.0,
        gaussian_magnitude: 4.0,
        ..Default::default()
    });
    let a = generate_texture(&recipe(generator.clone(), TilingMode::Simple)).unwrap();
    let b = generate_texture(&recipe(generator, TilingMode::Simple)).unwrap();
    assert_eq!(a.content_hash(), b.content_hash());
    for level in 0..a.mip_level_count() {
        assert!(a.pixels(level).iter().all(|v| (0.0..=1.0).contains(v)));
    }
}

#[test]
fn test_white_noise_ignores_tiling() {
    let engine = NoiseEngine::new();
    let mut images = Vec::new();
    for tiling in [TilingMode::None, TilingMode::Simple, TilingMode::Wang] {
        let mut image = ImageData::new(32, 32, 1, true).unwrap();
        engine
            .generate(tiling, &GeneratorParams::White, &mut image)
            .unwrap();
        images.push(image);
    }
    assert_eq!(images[0], images[1]);
    assert_eq!(images[1], images[2]);
}

#[test]
fn test_white_noise_levels_hash_their_own_coordinates() {
    let mut image = ImageData::new(16, 16, 1, true).unwrap();
    NoiseEngine::new()
        .generate(TilingMode::None, &GeneratorParams::White, &mut image)
        .unwrap();
    for level in 0..image.mip_level_count() {
        let (w, _) = image.dimensions(level);
        assert_eq!(image.get(level, w - 1, 0, 0), WhiteNoise::sample(w - 1, 0));
    }
    assert_eq!(image.pixels(1)[0], image.pixels(0)[0]);
}

#[test]
fn test_worley_wang_border_cells_follow_edge_colors() {
    let params = WorleyNoiseParams {
        cell_size: 4,
        ..Default::default()
    };
    // 16 cells per row, so each Wang tile is 4x4 cells.
    let worley = WorleyNoise::new(&params, TilingMode::Wang, 64);
    let points = |i: i32, j: i32| worley.feature_points(i, j).collect::<Vec<_>>();

    for [zero, one] in assert_border_strips_shared(4, points) {
        assert_ne!(zero, one);
    }

    let corner = points(0, 0);
    for ty in 0..4 {
        for tx in 0..4 {
            assert_eq!(points(tx * 4, ty * 4), corner);
        }
    }
    for k in 0..16 {
        assert_eq!(points(-1, k), points(15, k));
        assert_eq!(points(k, 16), points(k, 0));
    }
}

#[test]
fn test_gabor_wang_border_cells_follow_edge_colors() {
    let params = GaborNoiseParams {
        cell_size: 8.0,
        ..Default::default()
    };
    let gabor = GaborNoise::new(&params, TilingMode::Wang, 128);
    let impulses = |i: i32, j: i32| gabor.impulses(i, j).collect::<Vec<_>>();

    assert_border_strips_shared(4, impulses);
    for k in 0..16 {
        assert_eq!(impulses(-1, k), impulses(15, k));
        assert_eq!(impulses(k, -1), impulses(k, 15));
    }
}

#[test]
fn test_worley_simple_period_is_image_width() {
    let params = WorleyNoiseParams {
        cell_size: 8,
        ..Default::default()
    };
    let image = generate_texture(&recipe(GeneratorParams::Worley(params.clone()), TilingMode::Simple)).unwrap();
    let direct = WorleyNoise::new(&params, TilingMode::Simple, 64);
    for y in [0u32, 21, 63] {
        for x in 0..64u32 {
            let wrapped = direct.sample(x as f32 + 64.0, y as f32);
            assert_eq!(rgba(&image, x, y), wrapped.to_vec());
        }
        assert!((0..64u32).any(|x| rgba(&image, x, y) != rgba(&image, (x + 32) % 64, y)));
    }
}

#[test]
fn test_worley_cells_per_row_sets_period() {
    let recipe = TextureRecipe {
        width: 128,
        height: 128,
        tiling: TilingMode::Simple,
        generator: GeneratorParams::Worley(WorleyNoiseParams {
            cell_size: 16,
            cells_per_row: Some(4),
            ..Default::default()
        }),
        ..Default::default()
    };
    let image = generate_texture(&recipe).unwrap();
    for y in (0..128u32).step_by(9) {
        for x in 0..64u32 {
            assert_eq!(rgba(&image, x, y), rgba(&image, x + 64, y));
            assert_eq!(rgba(&image, x, y), rgba(&image, x, (y + 64) % 128));
        }
    }
}
