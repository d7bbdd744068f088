use std::fs;
use std::path::{self, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::iconsmith::{IconSource, Rgb};

/// The default brand color used when no color is configured
pub const DEFAULT_COLOR: Rgb = Rgb {
    r: 139,
    g: 92,
    b: 246,
};

/// One standalone PNG asset to emit
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PngTarget {
    pub size: u32,
    pub file_name: String,
}

impl PngTarget {
    // Create a new PNG target
    // @param size: The square edge length in pixels
    // @param file_name: The output file name
    // @return: The new target
    pub fn new(size: u32, file_name: &str) -> Self {
        Self {
            size,
            file_name: file_name.to_string(),
        }
    }
}

/// Everything one generation run needs: the pixel source, the output
/// location, and the target size ladders
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    /// Fill color for the programmatic solid source
    pub color: Rgb,
    /// Directory of pre-rendered `icon_<size>.png` files; when set, it
    /// replaces the solid source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dir: Option<PathBuf>,
    /// Directory all assets are written into
    pub out_dir: PathBuf,
    /// Standalone PNG assets to emit
    pub png_targets: Vec<PngTarget>,
    /// Size ladder for the `.ico` container
    pub ico_sizes: Vec<u32>,
}

impl Settings {
    /// Create settings with the default asset set
    ///
    /// ### Returns
    /// - `Settings`: The defaults — brand color, `icons/` output directory,
    ///   the three standalone PNGs, and the 16..256 ICO ladder
    pub fn new() -> Self {
        Self {
            color: DEFAULT_COLOR,
            source_dir: None,
            out_dir: PathBuf::from("icons"),
            png_targets: vec![
                PngTarget::new(32, "32x32.png"),
                PngTarget::new(128, "128x128.png"),
                PngTarget::new(256, "128x128@2x.png"),
            ],
            ico_sizes: vec![16, 32, 48, 64, 128, 256],
        }
    }

    /// Load settings from a JSON file
    ///
    /// ### Arguments
    /// - `path`: The JSON file to read
    ///
    /// ### Returns
    /// - `Ok(Settings)`: The parsed settings
    /// - `Err`: If the file cannot be read or parsed
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))
    }

    /// Save settings to a JSON file
    ///
    /// ### Arguments
    /// - `path`: The JSON file to write
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize settings: {}", e))?;
        fs::write(path, content)
            .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))
    }

    /// The pixel source this run draws from
    ///
    /// ### Returns
    /// - `IconSource`: Pre-rendered when a source directory is configured,
    ///   otherwise the solid color
    pub fn source(&self) -> IconSource {
        match &self.source_dir {
            Some(dir) => IconSource::Prerendered(path::absolute(dir).unwrap_or_else(|_| dir.clone())),
            None => IconSource::Solid(self.color),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}
