use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use segue::{Frame, RenderThreading, TransitionSpec, parse_transition, render_frames};

#[derive(Parser, Debug)]
#[command(name = "segue", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a transition between two images as a numbered PNG sequence.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Outgoing image (frame A).
    #[arg(long)]
    a: PathBuf,

    /// Incoming image (frame B).
    #[arg(long)]
    b: PathBuf,

    /// Transition kind (blend, wipe, push, split, fade).
    #[arg(long, default_value = "blend")]
    transition: String,

    /// Transition parameters as a JSON object, e.g. '{"dir":"ltr"}'.
    #[arg(long)]
    params: Option<String>,

    /// Number of output frames (fractions sampled evenly over [0,1]).
    #[arg(long, default_value_t = 24)]
    frames: u32,

    /// Output directory for frame_0000.png .. frame_NNNN.png.
    #[arg(long)]
    out_dir: PathBuf,

    /// Render frames in parallel.
    #[arg(long)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn read_frame(path: &Path) -> anyhow::Result<Frame> {
    let bytes = fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    let frame = Frame::from_image_bytes(&bytes)
        .with_context(|| format!("decode image '{}'", path.display()))?;
    Ok(frame)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.frames >= 2, "--frames must be at least 2");

    let frame_a = read_frame(&args.a)?;
    let frame_b = read_frame(&args.b)?;

    let spec = TransitionSpec {
        kind: args.transition.clone(),
        params: match &args.params {
            None => serde_json::Value::Null,
            Some(raw) => serde_json::from_str(raw).context("parse --params JSON")?,
        },
    };
    let transition = parse_transition(&spec)?;

    let fractions: Vec<f64> = (0..args.frames)
        .map(|i| f64::from(i) / f64::from(args.frames - 1))
        .collect();

    let threading = RenderThreading {
        parallel: args.parallel,
        threads: None,
    };
    let surfaces = render_frames(&frame_a, &frame_b, &fractions, &transition, &threading)?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for (i, surface) in surfaces.iter().enumerate() {
        let path = args.out_dir.join(format!("frame_{i:04}.png"));
        surface.write_png(&path)?;
    }

    println!(
        "wrote {} frames of '{}' to {}",
        surfaces.len(),
        args.transition,
        args.out_dir.display()
    );
    Ok(())
}
