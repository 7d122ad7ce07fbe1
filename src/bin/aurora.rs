use std::{
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "aurora", version)]
struct Cli {
    /// Log at debug level.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the theme registry (names, aliases, presets) as JSON.
    Themes(ThemesArgs),
    /// Run the renderer headlessly and write the last frame as a PNG.
    Frame(FrameArgs),
    /// Run the renderer headlessly and write every K-th frame as a numbered PNG.
    Sequence(SequenceArgs),
}

#[derive(Args, Debug)]
struct ThemesArgs {
    /// Engine config JSON (preset overrides are applied).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Surface width in pixels.
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 768)]
    height: u32,

    /// Initial theme (name or alias), as if read from the page attribute.
    #[arg(long)]
    theme: Option<String>,

    /// Number of frames to run.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Simulated display refresh rate; the host clock advances by `1 / fps` per frame.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Engine config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Blob generator seed (overrides config and environment).
    #[arg(long)]
    seed: Option<u64>,

    /// Start in landing (reduced-motion) mode.
    #[arg(long)]
    landing: bool,

    /// Pointer press at `X,Y`, optionally at a frame: `X,Y@FRAME` (default frame 0).
    #[arg(long = "click")]
    clicks: Vec<Click>,

    /// Print the final render state as JSON on stdout.
    #[arg(long)]
    dump_state: bool,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    run: RunArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    run: RunArgs,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Write every K-th frame.
    #[arg(long, default_value_t = 10)]
    every: u64,

    /// Theme change queued before a frame: `FRAME:THEME`.
    #[arg(long = "switch")]
    switches: Vec<Switch>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Click {
    at: aurora::Point,
    frame: u64,
}

impl FromStr for Click {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (coords, frame) = match s.split_once('@') {
            Some((c, f)) => (
                c,
                f.trim()
                    .parse::<u64>()
                    .map_err(|e| format!("bad click frame '{f}': {e}"))?,
            ),
            None => (s, 0),
        };
        let (x, y) = coords
            .split_once(',')
            .ok_or_else(|| format!("click '{s}' must look like X,Y or X,Y@FRAME"))?;
        let x = x
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("bad click x '{x}': {e}"))?;
        let y = y
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("bad click y '{y}': {e}"))?;
        Ok(Self {
            at: aurora::Point::new(x, y),
            frame,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Switch {
    frame: u64,
    theme: String,
}

impl FromStr for Switch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (frame, theme) = s
            .split_once(':')
            .ok_or_else(|| format!("switch '{s}' must look like FRAME:THEME"))?;
        let frame = frame
            .trim()
            .parse::<u64>()
            .map_err(|e| format!("bad switch frame '{frame}': {e}"))?;
        Ok(Self {
            frame,
            theme: theme.trim().to_string(),
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Themes(args) => cmd_themes(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<aurora::EngineConfig> {
    let cfg = match path {
        Some(p) => aurora::EngineConfig::from_json_path(p)?,
        None => aurora::EngineConfig::default(),
    };
    cfg.with_env_overrides()
        .with_context(|| "apply environment overrides")
}

fn cmd_themes(args: ThemesArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let registry = cfg.registry()?;
    let out = serde_json::to_string_pretty(&registry.to_json())
        .with_context(|| "serialize theme registry")?;
    println!("{out}");
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut last = None;
    let renderer = run(&args.run, &[], |_, frame| {
        last = Some(frame.clone());
        Ok(())
    })?;
    let frame = last.with_context(|| "no frame was rendered (use --frames >= 1)")?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());

    if args.run.dump_state {
        dump_state(&renderer)?;
    }
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    if args.every == 0 {
        anyhow::bail!("--every must be >= 1");
    }
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut written = 0u64;
    let renderer = run(&args.run, &args.switches, |index, frame| {
        if index % args.every != 0 {
            return Ok(());
        }
        let path = args.out_dir.join(format!("frame_{index:05}.png"));
        write_png(&path, frame)?;
        written += 1;
        Ok(())
    })?;
    eprintln!("wrote {written} frames to {}", args.out_dir.display());

    if args.run.dump_state {
        dump_state(&renderer)?;
    }
    Ok(())
}

fn run(
    args: &RunArgs,
    switches: &[Switch],
    mut on_frame: impl FnMut(u64, &aurora::FrameRGBA) -> anyhow::Result<()>,
) -> anyhow::Result<aurora::Renderer> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be > 0");
    }

    let mut cfg = load_config(args.config.as_deref())?;
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    if args.landing {
        cfg.landing_mode = true;
    }
    let mut renderer = aurora::Renderer::new(cfg)?;

    for s in switches {
        if renderer.registry().resolve(&s.theme).is_none() {
            anyhow::bail!("unknown theme '{}' in --switch", s.theme);
        }
    }

    let mut host = aurora::HeadlessHost::new(aurora::Viewport::new(args.width, args.height));
    if let Some(theme) = &args.theme {
        if renderer.registry().resolve(theme).is_none() {
            anyhow::bail!("unknown theme '{theme}'");
        }
        host.set_theme_attribute(theme.as_str());
    }

    renderer.start(&mut host)?;
    let events = renderer.event_sender();
    let dt = Duration::from_secs_f64(1.0 / args.fps);

    for index in 0..args.frames {
        for s in switches.iter().filter(|s| s.frame == index) {
            events.set_theme(s.theme.as_str())?;
        }
        for c in args.clicks.iter().filter(|c| c.frame == index) {
            events.send(aurora::HostEvent::PointerMove(c.at))?;
            events.send(aurora::HostEvent::PointerDown(c.at))?;
        }

        host.advance(dt);
        renderer
            .frame(&mut host)
            .with_context(|| format!("render frame {index}"))?;
        let frame = host
            .last_frame()
            .with_context(|| format!("frame {index} was not presented"))?;
        on_frame(index, frame)?;
    }

    Ok(renderer)
}

fn write_png(path: &Path, frame: &aurora::FrameRGBA) -> anyhow::Result<()> {
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn dump_state(renderer: &aurora::Renderer) -> anyhow::Result<()> {
    let state = renderer
        .state()
        .with_context(|| "renderer has no state (not started)")?;
    let out = serde_json::to_string_pretty(state).with_context(|| "serialize render state")?;
    println!("{out}");
    Ok(())
}
