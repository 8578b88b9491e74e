mod cli;
mod svg;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, LevelFilter};

use sigpad_core::codec::{self, Decompressed};
use sigpad_core::logging::{init_logging, LoggingConfig};
use sigpad_core::replay::replay;
use sigpad_core::{PadSettings, Signature};

use cli::{Cli, Commands, Io, Surface};
use svg::SvgSink;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(if cli.verbose {
        LoggingConfig::with_filter("debug")
    } else {
        LoggingConfig::default().fallback(LevelFilter::Info)
    });

    let settings = load_settings(cli.config.as_deref())?;
    debug!("settings: {settings:?}");

    match cli.command {
        Commands::Encode { io, pen_width, surface } => {
            let settings = apply_surface(settings, &surface);
            let pen_width = pen_width.unwrap_or(settings.pen_width);
            let decoded = codec::decode(&read_input(&io)?, settings.surface_width)?;
            let encoded = codec::compress(&decoded.signature, pen_width, settings.surface_width)
                .context("signature does not fit the compact encoding")?;
            info!("encoded {} segments", decoded.signature.len());
            println!("{encoded}");
        }

        Commands::Decode { io, surface, pretty } => {
            let settings = apply_surface(settings, &surface);
            let decoded = codec::decode(&read_input(&io)?, settings.surface_width)?;
            if let Some(pen) = decoded.pen_width {
                debug!("rescaled pen width: {pen}");
            }
            let json = if pretty {
                serde_json::to_string_pretty(&decoded.signature)?
            } else {
                serde_json::to_string(&decoded.signature)?
            };
            println!("{json}");
        }

        Commands::Render { io, surface, surface_height, color } => {
            let mut settings = apply_surface(settings, &surface);
            if let Some(h) = surface_height {
                settings.surface_height = h;
            }
            let decoded = codec::decode(&read_input(&io)?, settings.surface_width)?;
            let pen_width = decoded.pen_width.unwrap_or(settings.pen_width);

            let mut sink = SvgSink::new();
            replay(&decoded.signature, &mut sink);
            info!("rendered {} strokes", sink.path_count());
            print!(
                "{}",
                sink.finish(settings.surface_width, settings.surface_height, pen_width, &color)
            );
        }

        Commands::Inspect { io, surface } => {
            let settings = apply_surface(settings, &surface);
            let input = read_input(&io)?;
            match codec::decompress(&input, settings.surface_width)? {
                Decompressed::Empty => println!("format:     empty (nothing drawn)"),
                Decompressed::Compact(r) => {
                    println!("format:     compact");
                    println!("recorded:   pen {} on width {}", r.original_pen_width, r.original_width);
                    println!("rescaled:   pen {} on width {}", r.pen_width, settings.surface_width);
                    describe(&r.signature);
                }
                Decompressed::Legacy(json) => {
                    println!("format:     legacy json");
                    describe(&codec::from_legacy_json(json)?);
                }
            }
        }
    }

    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<PadSettings> {
    let Some(path) = path else {
        return Ok(PadSettings::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn apply_surface(settings: PadSettings, surface: &Surface) -> PadSettings {
    match surface.surface_width {
        Some(w) => {
            let h = settings.surface_height;
            settings.surface(w, h)
        }
        None => settings,
    }
}

fn read_input(src: &Io) -> Result<String> {
    let mut text = if src.input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(&src.input)
            .with_context(|| format!("failed to read {}", src.input.display()))?
    };

    // Only line endings: some compact characters count as Unicode whitespace.
    while text.ends_with(['\n', '\r']) {
        text.pop();
    }
    Ok(text)
}

fn describe(signature: &Signature) {
    println!("segments:   {}", signature.len());

    let bounds = signature
        .iter()
        .flat_map(|s| [s.start(), s.end()])
        .fold(None, |acc: Option<(u32, u32, u32, u32)>, p| {
            Some(match acc {
                None => (p.x, p.y, p.x, p.y),
                Some((x0, y0, x1, y1)) => (x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y)),
            })
        });
    if let Some((x0, y0, x1, y1)) = bounds {
        println!("bounds:     ({x0}, {y0}) .. ({x1}, {y1})");
    }
}
