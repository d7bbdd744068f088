pub mod byte_writer;
pub mod icns;
pub mod ico_packer;
pub mod logger;
pub mod pipeline;
pub mod png_encoder;
pub mod settings;

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// An opaque RGB color, one byte per channel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    // Create a new color
    // @param r: The red channel
    // @param g: The green channel
    // @param b: The blue channel
    // @return: The new color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Where icon pixels come from: a programmatic solid color, or a directory
/// of pre-rendered per-size PNGs supplied by an external rasterizer
#[derive(Clone, Debug)]
pub enum IconSource {
    Solid(Rgb),
    Prerendered(PathBuf),
}

impl IconSource {
    /// Produce the PNG bytes for a square icon at the given pixel size
    ///
    /// ### Arguments
    /// - `size`: The square edge length in pixels
    ///
    /// ### Returns
    /// - `Ok(Vec<u8>)`: A complete PNG byte stream
    /// - `Err`: If a pre-rendered source file cannot be read
    pub fn png_bytes(&self, size: u32) -> anyhow::Result<Vec<u8>> {
        match self {
            IconSource::Solid(color) => Ok(png_encoder::encode_solid(size, *color)),
            IconSource::Prerendered(dir) => {
                let path = dir.join(Self::file_name(size));
                fs::read(&path).map_err(|e| {
                    anyhow::anyhow!("Failed to read source asset {}: {}", path.display(), e)
                })
            }
        }
    }

    // The expected file name for a pre-rendered source asset of the given size
    // @param size: The square edge length in pixels
    // @return: The file name, e.g. "icon_256.png"
    pub fn file_name(size: u32) -> String {
        format!("icon_{}.png", size)
    }
}
