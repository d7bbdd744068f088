use std::fs;
use std::path::PathBuf;

use crate::iconsmith::ico_packer::{self, IcoImage};
use crate::iconsmith::settings::Settings;
use crate::iconsmith::{IconSource, icns};

/// What a generation run produced
#[derive(Debug)]
pub struct Report {
    /// Standalone PNG assets, in emission order
    pub pngs: Vec<PathBuf>,
    /// The multi-resolution Windows container
    pub ico: PathBuf,
    /// How the macOS container step ended
    pub icns: icns::IcnsOutcome,
}

/// Generate the full icon asset set described by the settings
///
/// Writes the standalone PNGs, then `icon.ico`, then `icon.icns`. A missing
/// pre-rendered source asset is a terminal error caught up front, before
/// anything is written. An ICNS fallback is reported, not fatal; the caller
/// decides how to surface it.
///
/// ### Arguments
/// - `settings`: The resolved generation settings
///
/// ### Returns
/// - `Ok(Report)`: The written paths and the ICNS outcome
/// - `Err`: If a source asset is missing or an output cannot be written
pub fn generate(settings: &Settings) -> anyhow::Result<Report> {
    let source = settings.source();
    check_source_assets(settings, &source)?;

    fs::create_dir_all(&settings.out_dir).map_err(|e| {
        anyhow::anyhow!(
            "Failed to create output directory {}: {}",
            settings.out_dir.display(),
            e
        )
    })?;

    let mut pngs = Vec::with_capacity(settings.png_targets.len());
    for target in &settings.png_targets {
        let path = settings.out_dir.join(&target.file_name);
        fs::write(&path, source.png_bytes(target.size)?)
            .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;
        log::info!("Wrote {} ({}x{})", path.display(), target.size, target.size);
        pngs.push(path);
    }

    let ico = settings.out_dir.join("icon.ico");
    let mut images = Vec::with_capacity(settings.ico_sizes.len());
    for &size in &settings.ico_sizes {
        images.push(IcoImage::new(source.png_bytes(size)?, size));
    }
    fs::write(&ico, ico_packer::pack_ico(&images))
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", ico.display(), e))?;
    log::info!("Wrote {} ({} entries)", ico.display(), images.len());

    let icns_path = settings.out_dir.join("icon.icns");
    let icns = icns::bundle_icns(&source, &icns_path);

    Ok(Report { pngs, ico, icns })
}

/// Verify up front that every source asset this run will read exists
///
/// Only meaningful for the pre-rendered source; the solid source cannot be
/// missing anything.
fn check_source_assets(settings: &Settings, source: &IconSource) -> anyhow::Result<()> {
    let IconSource::Prerendered(dir) = source else {
        return Ok(());
    };
    if !dir.is_dir() {
        return Err(anyhow::anyhow!(
            "Source directory not found: {}",
            dir.display()
        ));
    }
    for size in required_sizes(settings) {
        let path = dir.join(IconSource::file_name(size));
        if !path.is_file() {
            return Err(anyhow::anyhow!("Missing source asset: {}", path.display()));
        }
    }
    Ok(())
}

/// Every pixel size a run with these settings will read from its source
fn required_sizes(settings: &Settings) -> Vec<u32> {
    let mut sizes: Vec<u32> = settings
        .png_targets
        .iter()
        .map(|target| target.size)
        .chain(settings.ico_sizes.iter().copied())
        .chain(icns::required_sizes())
        .collect();
    sizes.sort_unstable();
    sizes.dedup();
    sizes
}
