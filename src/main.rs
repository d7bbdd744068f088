use std::path::PathBuf;
use std::process::ExitCode;

use iconsmith::iconsmith::icns::IcnsOutcome;
use iconsmith::iconsmith::settings::Settings;
use iconsmith::iconsmith::{Rgb, logger, pipeline};

const USAGE: &str = "\
Iconsmith - generate application icon assets (PNG, ICO, ICNS)

Usage: iconsmith [OPTIONS]

Options:
  --out <DIR>            Output directory (default: icons)
  --color <RRGGBB>       Solid fill color as hex, e.g. 8B5CF6
  --source-dir <DIR>     Directory of pre-rendered icon_<size>.png files
                         (replaces the solid color source)
  --config <FILE>        JSON settings file; flags override its values
  --write-config <FILE>  Write the resolved settings as JSON and exit
  -h, --help             Show this help";

fn main() -> ExitCode {
    if let Err(e) = logger::init() {
        eprintln!("Warning: file logger unavailable: {}", e);
    }
    match run() {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Parse arguments, resolve settings and run the generation pipeline
///
/// ### Returns
/// - `Ok(ExitCode)`: The process exit code
/// - `Err`: If arguments are invalid or the pipeline fails
fn run() -> anyhow::Result<ExitCode> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(parsed) = parse_args(&args)? else {
        println!("{}", USAGE);
        return Ok(ExitCode::SUCCESS);
    };

    if let Some(path) = &parsed.write_config {
        parsed.settings.save(path)?;
        println!("Wrote settings to {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let report = pipeline::generate(&parsed.settings)?;
    for path in &report.pngs {
        println!("Created {}", path.display());
    }
    println!("Created {}", report.ico.display());
    match report.icns {
        IcnsOutcome::Created(path) => {
            println!("Created {}", path.display());
            Ok(ExitCode::SUCCESS)
        }
        IcnsOutcome::Fallback(path) => {
            log::warn!(
                "iconutil unavailable, wrote fallback copy: {}",
                path.display()
            );
            eprintln!(
                "Warning: iconutil unavailable; {} is a single-resolution fallback copy",
                path.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        IcnsOutcome::Failed(reason) => Err(anyhow::anyhow!("ICNS bundling failed: {}", reason)),
    }
}

/// The result of argument parsing
struct ParsedArgs {
    settings: Settings,
    write_config: Option<PathBuf>,
}

/// Parse command-line arguments into settings
///
/// ### Arguments
/// - `args`: The arguments after the program name
///
/// ### Returns
/// - `Ok(Some(ParsedArgs))`: The resolved settings and flags
/// - `Ok(None)`: If help was requested
/// - `Err`: If an argument is unknown or malformed
fn parse_args(args: &[String]) -> anyhow::Result<Option<ParsedArgs>> {
    let mut settings: Option<Settings> = None;
    let mut out_dir: Option<PathBuf> = None;
    let mut color: Option<Rgb> = None;
    let mut source_dir: Option<PathBuf> = None;
    let mut write_config: Option<PathBuf> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .ok_or_else(|| anyhow::anyhow!("{} requires a value", flag))
        };
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--out" => out_dir = Some(PathBuf::from(value("--out")?)),
            "--color" => color = Some(parse_color(value("--color")?)?),
            "--source-dir" => source_dir = Some(PathBuf::from(value("--source-dir")?)),
            "--config" => settings = Some(Settings::load(&PathBuf::from(value("--config")?))?),
            "--write-config" => write_config = Some(PathBuf::from(value("--write-config")?)),
            other => return Err(anyhow::anyhow!("Unknown argument: {}", other)),
        }
    }

    let mut settings = settings.unwrap_or_default();
    if let Some(out_dir) = out_dir {
        settings.out_dir = out_dir;
    }
    if let Some(color) = color {
        settings.color = color;
    }
    if let Some(source_dir) = source_dir {
        settings.source_dir = Some(source_dir);
    }
    Ok(Some(ParsedArgs {
        settings,
        write_config,
    }))
}

/// Parse a 6-digit hex color, with or without a leading '#'
///
/// ### Arguments
/// - `hex`: The color string, e.g. "8B5CF6" or "#8B5CF6"
///
/// ### Returns
/// - `Ok(Rgb)`: The parsed color
/// - `Err`: If the string is not a 6-digit hex value
fn parse_color(hex: &str) -> anyhow::Result<Rgb> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Err(anyhow::anyhow!(
            "Invalid color '{}': expected 6 hex digits",
            hex
        ));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|e| anyhow::anyhow!("Invalid color '{}': {}", hex, e))
    };
    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
