use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use softview::platform::{FrameInput, HeadlessPresenter, Presenter};
use softview::{demo, Canvas, Compositing, RenderConfig, Snapshot};

#[derive(Parser, Debug)]
#[command(name = "softview", about = "Render the softview demo scene headlessly")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render frames of the demo scene
    Render(RenderArgs),
    /// Print the default configuration as JSON
    Config,
}

#[derive(clap::Args, Debug)]
struct RenderArgs {
    /// Frame width (defaults to the configured viewport)
    #[arg(long)]
    width: Option<u32>,

    /// Frame height (defaults to the configured viewport)
    #[arg(long)]
    height: Option<u32>,

    /// Pointer position as X,Y
    #[arg(long, value_parser = parse_pointer, default_value = "0,0")]
    pointer: (f32, f32),

    /// Hold the left button down
    #[arg(long)]
    down: bool,

    /// Number of frames to run
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Compose through per-view offscreen canvases
    #[arg(long)]
    offscreen: bool,

    /// Write the last frame as a binary PPM
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the SHA-256 digest of the last frame
    #[arg(long)]
    digest: bool,
}

fn parse_pointer(s: &str) -> Result<(f32, f32), String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x = x.trim().parse::<f32>().map_err(|e| format!("bad x '{}': {}", x, e))?;
    let y = y.trim().parse::<f32>().map_err(|e| format!("bad y '{}': {}", y, e))?;
    Ok((x, y))
}

fn render(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            RenderConfig::from_json(&json).with_context(|| format!("loading {}", path.display()))?
        }
        None => RenderConfig::default(),
    };
    if args.offscreen {
        config.compositing = Compositing::Offscreen;
    }
    if args.frames == 0 {
        bail!("--frames must be at least 1");
    }

    let width = args.width.unwrap_or(config.viewport.width);
    let height = args.height.unwrap_or(config.viewport.height);
    let input = FrameInput {
        left_down: args.down,
        delta_time: 1.0 / 60.0,
        ..FrameInput::new(width, height).with_pointer(args.pointer.0, args.pointer.1)
    };

    let mut app = demo::app(config);
    let mut frame = Canvas::new(width, height);
    let mut presenter = HeadlessPresenter::new();
    for _ in 0..args.frames {
        app.update(&input, &mut frame);
        demo::draw_overlay(&mut frame, app.config());
        presenter.present(&frame)?;
    }

    let last = presenter.last_frame().context("no frame was presented")?;
    if let Some(path) = &args.out {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        last.write_ppm(BufWriter::new(file))?;
        println!("wrote {}x{} frame to {}", last.width(), last.height(), path.display());
    }
    if args.digest {
        println!("{}", Snapshot::of(last).digest);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    match Cli::parse().command {
        Command::Render(args) => render(args),
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&RenderConfig::default())?);
            Ok(())
        }
    }
}
