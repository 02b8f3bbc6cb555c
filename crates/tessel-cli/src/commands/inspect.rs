//! Inspect command implementation
//!
//! Decodes a TGA file and prints its size and per-channel statistics.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use tessel_texture::tga::{load_tga, TgaImage};

use super::invalid;
use super::json_output::{error_codes, print_json, ChannelStats, InspectOutput, JsonError};

/// Run the inspect command
///
/// # Returns
/// Exit code: 0 on success, 1 if the file could not be decoded
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    let decoded = load_tga(Path::new(input));

    if json_output {
        let output = match &decoded {
            Ok(image) => InspectOutput {
                success: true,
                errors: Vec::new(),
                width: Some(image.width),
                height: Some(image.height),
                source_channels: Some(image.source_channels),
                channels: channel_stats(image).to_vec(),
            },
            Err(e) => InspectOutput {
                success: false,
                errors: vec![JsonError::new(error_codes::IMAGE_READ, e.to_string())],
                width: None,
                height: None,
                source_channels: None,
                channels: Vec::new(),
            },
        };
        print_json(&output)?;
        return Ok(if output.success { ExitCode::SUCCESS } else { invalid() });
    }

    println!("{} {}", "Inspecting:".cyan().bold(), input);
    let image = match decoded {
        Ok(image) => image,
        Err(e) => {
            println!("  {} {}", "x".red(), e);
            println!("\n{} Could not decode image", "FAILED".red().bold());
            return Ok(invalid());
        }
    };

    println!(
        "{} {}x{}, {}-bit",
        "Image:".dimmed(),
        image.width,
        image.height,
        image.source_channels * 8
    );
    for (name, stats) in ["R", "G", "B", "A"].iter().zip(channel_stats(&image)) {
        println!(
            "  {}  min {:.4}  max {:.4}  mean {:.4}",
            name.bold(),
            stats.min,
            stats.max,
            stats.mean
        );
    }
    Ok(ExitCode::SUCCESS)
}

/// Min, max and mean of each RGBA channel.
pub fn channel_stats(image: &TgaImage) -> [ChannelStats; 4] {
    let mut min = [f32::INFINITY; 4];
    let mut max = [f32::NEG_INFINITY; 4];
    let mut sum = [0.0f64; 4];
    for pixel in image.pixels.chunks_exact(4) {
        for c in 0..4 {
            min[c] = min[c].min(pixel[c]);
            max[c] = max[c].max(pixel[c]);
            sum[c] += f64::from(pixel[c]);
        }
    }
    let count = (image.pixels.len() / 4).max(1) as f64;
    std::array::from_fn(|c| {
        if image.pixels.is_empty() {
            ChannelStats {
                min: 0.0,
                max: 0.0,
                mean: 0.0,
            }
        } else {
            ChannelStats {
                min: min[c],
                max: max[c],
                mean: (sum[c] / count) as f32,
            }
        }
    })
}
