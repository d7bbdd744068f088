use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::iconsmith::IconSource;

/// The iconset entries `iconutil` expects: (pixel size, file name)
const ICONSET_ENTRIES: [(u32, &str); 10] = [
    (16, "icon_16x16.png"),
    (32, "icon_16x16@2x.png"),
    (32, "icon_32x32.png"),
    (64, "icon_32x32@2x.png"),
    (128, "icon_128x128.png"),
    (256, "icon_128x128@2x.png"),
    (256, "icon_256x256.png"),
    (512, "icon_256x256@2x.png"),
    (512, "icon_512x512.png"),
    (1024, "icon_512x512@2x.png"),
];

/// The size of the single PNG that stands in for the container when the
/// bundling tool is unavailable
const FALLBACK_SIZE: u32 = 256;

/// How the ICNS step ended. The caller decides user messaging; this module
/// only logs at debug level.
#[derive(Debug)]
pub enum IcnsOutcome {
    /// `iconutil` produced a real multi-resolution container at this path
    Created(PathBuf),
    /// The tool was unavailable or failed; a single pre-rendered PNG was
    /// copied to this path instead
    Fallback(PathBuf),
    /// Neither the tool nor the fallback copy succeeded
    Failed(String),
}

/// Bundle an `.icns` file for the given source
///
/// Stages the ten standard iconset entries in a transient `.iconset`
/// directory and hands it to `iconutil`. Any failure on that path (tool
/// missing, non-zero exit, unreadable source) falls back to copying a single
/// pre-rendered PNG in place of the full container.
///
/// ### Arguments
/// - `source`: The pixel source for the iconset entries
/// - `icns_path`: Where to write the resulting `.icns` file
///
/// ### Returns
/// - `IcnsOutcome`: Created, Fallback, or Failed
pub fn bundle_icns(source: &IconSource, icns_path: &Path) -> IcnsOutcome {
    match run_iconutil(source, icns_path) {
        Ok(()) => IcnsOutcome::Created(icns_path.to_path_buf()),
        Err(tool_error) => {
            log::debug!("iconutil bundling failed: {:#}", tool_error);
            match fallback_copy(source, icns_path) {
                Ok(()) => IcnsOutcome::Fallback(icns_path.to_path_buf()),
                Err(copy_error) => IcnsOutcome::Failed(format!(
                    "iconutil failed ({}) and the fallback copy failed ({})",
                    tool_error, copy_error
                )),
            }
        }
    }
}

/// Stage the iconset directory and invoke `iconutil -c icns`
fn run_iconutil(source: &IconSource, icns_path: &Path) -> anyhow::Result<()> {
    // iconutil refuses directories whose name does not end in .iconset
    let staging = tempfile::Builder::new()
        .suffix(".iconset")
        .tempdir()
        .map_err(|e| anyhow::anyhow!("Failed to create iconset directory: {}", e))?;

    for (size, name) in ICONSET_ENTRIES {
        let entry_path = staging.path().join(name);
        fs::write(&entry_path, source.png_bytes(size)?).map_err(|e| {
            anyhow::anyhow!("Failed to write iconset entry {}: {}", entry_path.display(), e)
        })?;
    }

    let output = Command::new("iconutil")
        .args(["-c", "icns"])
        .arg(staging.path())
        .arg("-o")
        .arg(icns_path)
        .output()
        .map_err(|e| anyhow::anyhow!("Failed to launch iconutil: {}", e))?;

    if !output.status.success() {
        return Err(anyhow::anyhow!(
            "iconutil exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }
    log::debug!("iconutil wrote {}", icns_path.display());
    Ok(())
}

/// Copy a single pre-rendered PNG to the `.icns` path
fn fallback_copy(source: &IconSource, icns_path: &Path) -> anyhow::Result<()> {
    let png = source.png_bytes(FALLBACK_SIZE)?;
    fs::write(icns_path, png)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", icns_path.display(), e))?;
    log::debug!("wrote fallback PNG copy to {}", icns_path.display());
    Ok(())
}

/// The pixel sizes this module reads from the source
///
/// ### Returns
/// - `Vec<u32>`: Deduplicated sizes, fallback size included
pub fn required_sizes() -> Vec<u32> {
    let mut sizes: Vec<u32> = ICONSET_ENTRIES.iter().map(|&(size, _)| size).collect();
    sizes.push(FALLBACK_SIZE);
    sizes.sort_unstable();
    sizes.dedup();
    sizes
}
