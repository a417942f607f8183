//! # Worldgen Preview
//!
//! Loads a block layout, resolves every block's size and prints the draw
//! rectangles plus a text rendering of the layout's noise field.
//!
//! ```text
//! worldgen_preview [layout.toml] [--width N] [--height N] [--scale F]
//! ```
//!
//! Without a layout file the built-in debug layout is used. Log verbosity is
//! controlled through `RUST_LOG` (default `info`).

use std::process::ExitCode;

use timberlands::preview::{describe_range, render_ascii};
use timberlands::{ConfigError, LayoutConfig};
use tracing_subscriber::EnvFilter;

const DEFAULT_WIDTH: usize = 64;
const DEFAULT_HEIGHT: usize = 24;
const DEFAULT_SCALE: f32 = 0.15;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("Usage: worldgen_preview [layout.toml] [--width N] [--height N] [--scale F]");
        return ExitCode::SUCCESS;
    }

    let width = flag_value(&args, "--width").unwrap_or(DEFAULT_WIDTH);
    let height = flag_value(&args, "--height").unwrap_or(DEFAULT_HEIGHT);
    let scale = flag_value(&args, "--scale").unwrap_or(DEFAULT_SCALE);
    let path = layout_path(&args);

    let config = match load(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(context = "worldgen", "{e}");
            return ExitCode::FAILURE;
        }
    };

    let layout = match config.build() {
        Ok(layout) => layout,
        Err(e) => {
            tracing::error!(context = "worldgen", "{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("=== TIMBERLANDS WORLDGEN PREVIEW ===");
    println!("Layout: {}", path.unwrap_or("<built-in debug layout>"));
    println!("Seed:   {}", config.seed);
    println!();

    let resolved = layout.resolve(&mut layout.sizing_rng());
    for block in &resolved {
        let rects = block.primitive().rects();
        println!(
            "{:<16} id={:#018x} at ({:.1}, {:.1}) size {} -> {} rects",
            block.name,
            block.id,
            block.position.x,
            block.position.y,
            block.size,
            rects.len()
        );
        for (rect, color) in rects {
            println!(
                "    [{}, {}, {}x{}] rgba({}, {}, {}, {})",
                rect.x, rect.y, rect.width, rect.height, color.r, color.g, color.b, color.a
            );
        }
    }

    let noise = layout.noise();
    println!();
    println!("Noise seed {:#x}, {}", layout.noise_seed().value(), describe_range(&noise, width, height, scale));
    print!("{}", render_ascii(&noise, width, height, scale));

    ExitCode::SUCCESS
}

fn load(path: Option<&str>) -> Result<LayoutConfig, ConfigError> {
    match path {
        Some(path) => {
            tracing::info!(context = "worldgen", "loading layout {path}");
            LayoutConfig::from_path(path)
        }
        None => LayoutConfig::debug(),
    }
}

/// First argument that is neither a flag nor a flag's value.
fn layout_path(args: &[String]) -> Option<&str> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg.starts_with("--") {
            iter.next();
            continue;
        }
        return Some(arg.as_str());
    }
    None
}

fn flag_value<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}
