use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

mod backend;
mod config;
mod draw;
mod input;
mod script;
mod util;

use backend::RasterSurface;
use draw::Viewport;
use input::SketchState;

#[derive(Parser, Debug)]
#[command(name = "strokepad")]
#[command(version, about = "Vector sketch surface with scripted pointer replay")]
struct Cli {
    /// Canvas width in pixels (overrides config)
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Canvas height in pixels (overrides config)
    #[arg(long, value_name = "PIXELS")]
    height: Option<u32>,

    /// Pointer script to replay (reads stdin when omitted)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Output PNG path
    #[arg(long, short = 'o', value_name = "FILE", default_value = "sketch.png")]
    output: PathBuf,

    /// Background color name or #RRGGBB hex (overrides config)
    #[arg(long, value_name = "COLOR")]
    background: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = config::Config::load()?;

    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    config.validate_and_clamp();

    let width = config.canvas.width;
    let height = config.canvas.height;

    let mut background = config.background_color();
    if let Some(spec) = &cli.background {
        match util::parse_color(spec) {
            Some(color) => background = color,
            None => log::warn!("Unknown background color '{spec}', keeping configured value"),
        }
    }

    let mut surface = RasterSurface::new(width, height)
        .context("Failed to initialize the raster drawing surface")?;
    surface.set_stroke_width(config.drawing.stroke_width);

    let mut state = SketchState::with_defaults(
        Viewport::new(width, height),
        config.default_color(),
        background,
        config.default_tool(),
        config.canvas.max_shapes,
    );
    log::info!(
        "Canvas {width}x{height}, tool {:?}, color {}",
        state.active_tool,
        util::color_to_name(&state.current_color)
    );

    let commands = match &cli.script {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open script {path:?}"))?;
            script::parse(BufReader::new(file))
                .with_context(|| format!("Failed to parse script {path:?}"))?
        }
        None => {
            log::debug!("Reading script from stdin");
            script::parse(std::io::stdin().lock()).context("Failed to parse script from stdin")?
        }
    };
    log::debug!("Replaying {} script commands", commands.len());

    for command in &commands {
        command.apply(&mut state);
    }

    state.render(&mut surface);
    surface
        .write_png(&cli.output)
        .with_context(|| format!("Failed to write {:?}", cli.output))?;

    log::info!(
        "Wrote {:?} with {} shapes",
        cli.output,
        state.store.len()
    );
    Ok(())
}
