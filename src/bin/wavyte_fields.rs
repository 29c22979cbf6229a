use std::{f64::consts::TAU, fs::File, io::BufWriter, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use wavyte_fields::{
    AnimationDriver, CountingSink, Ease, Fps, FrameSink, HeightField, JsonLinesSink,
    LissajousParams, Preset, PresetOpts, PulseWave, Segment, TimeValues, TrailCapacity,
};

#[derive(Parser, Debug)]
#[command(name = "wavyte-fields", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in scenes.
    List,
    /// Drive a scene and stream its frame descriptions as JSON lines.
    Run(RunArgs),
    /// Check the numeric properties of the field functions and the driver.
    Selftest,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Scene to drive.
    #[arg(long, value_enum)]
    scene: Preset,

    /// Source image (required by `tiled-surface`).
    #[arg(long)]
    image: Option<PathBuf>,

    /// 60 fps instead of 30.
    #[arg(long, default_value_t = false)]
    hq: bool,

    /// Spread per-element recompute work over worker threads.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Trail points kept by traced markers; 0 keeps every point.
    #[arg(long, default_value_t = TrailCapacity::DEFAULT_BOUND)]
    trail_capacity: usize,

    /// Stop after this many frames.
    #[arg(long)]
    max_frames: Option<u64>,

    /// Output JSON-lines path. Without it frames are only counted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Run(args) => cmd_run(args),
        Command::Selftest => cmd_selftest(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_list() -> anyhow::Result<()> {
    for p in Preset::ALL {
        let note = if p.needs_image() { " (needs --image)" } else { "" };
        println!("{}{note}", p.name());
    }
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let preset = args.scene;
    let image = args
        .image
        .as_deref()
        .map(wavyte_fields::load_image)
        .transpose()
        .context("load source image")?;
    let trail = TrailCapacity::bounded(args.trail_capacity).unwrap_or(TrailCapacity::Unbounded);
    let opts = PresetOpts {
        high_quality: args.hq,
        parallel: args.parallel,
        trail,
        image,
    };
    let mut driver = wavyte_fields::build_preset(preset, &opts)
        .with_context(|| format!("build scene '{}'", preset.name()))?;

    let stats = match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            let mut sink = JsonLinesSink::new(BufWriter::new(f));
            drive(&mut driver, &mut sink, args.max_frames)?
        }
        None => {
            let mut sink = CountingSink::default();
            let stats = drive(&mut driver, &mut sink, args.max_frames)?;
            eprintln!("{} primitives", sink.primitives);
            stats
        }
    };

    eprintln!("{}: {} frames", preset.name(), stats.frames);
    if let Some(path) = &args.out {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn drive(
    driver: &mut AnimationDriver,
    sink: &mut dyn FrameSink,
    max_frames: Option<u64>,
) -> anyhow::Result<wavyte_fields::DriveStats> {
    Ok(wavyte_fields::drive_into(driver, sink, max_frames, None)?)
}

fn cmd_selftest() -> anyhow::Result<()> {
    let checks: [(&str, fn() -> anyhow::Result<()>); 5] = [
        ("surface height bound", check_height_bound),
        ("lissajous center", check_lissajous_center),
        ("lissajous bounds", check_lissajous_bounds),
        ("pulse scale envelope", check_pulse_envelope),
        ("driver lands on target", check_driver_target),
    ];

    let mut failed = 0usize;
    for (name, check) in checks {
        match check() {
            Ok(()) => eprintln!("ok    {name}"),
            Err(e) => {
                failed += 1;
                eprintln!("FAIL  {name}: {e:#}");
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{failed} self-test check(s) failed");
    }
    Ok(())
}

fn check_height_bound() -> anyhow::Result<()> {
    let f = HeightField::REFERENCE;
    let mut max = 0.0f64;
    for i in 0..21 {
        for j in 0..21 {
            let u = -3.0 + 0.3 * f64::from(i);
            let v = -3.0 + 0.3 * f64::from(j);
            max = max.max(f.height(u, v, 1.23).abs());
        }
    }
    anyhow::ensure!(max <= 0.71, "max |z| = {max}");
    Ok(())
}

fn check_lissajous_center() -> anyhow::Result<()> {
    let p = wavyte_fields::lissajous_point(0.0, &LissajousParams::REFERENCE, 0.0);
    anyhow::ensure!(
        p.x.abs() < 1e-7 && p.y.abs() < 1e-7 && p.z.abs() < 1e-7,
        "origin sample is {p:?}"
    );
    Ok(())
}

fn check_lissajous_bounds() -> anyhow::Result<()> {
    let params = LissajousParams::REFERENCE;
    for i in 0..1000 {
        let s = TAU * f64::from(i) / 999.0;
        let p = wavyte_fields::lissajous_point(s, &params, 0.3);
        anyhow::ensure!(p.x.abs() <= params.amp_x + 1e-9, "x out of range at s={s}");
        anyhow::ensure!(p.y.abs() <= params.amp_y + 1e-9, "y out of range at s={s}");
    }
    Ok(())
}

fn check_pulse_envelope() -> anyhow::Result<()> {
    let w = PulseWave::REFERENCE;
    let (lo, hi) = w.scale_range();
    for i in 0..500 {
        let d = f64::from(i) * 0.05;
        let s = w.scale(d, f64::from(i) * 0.11);
        anyhow::ensure!(
            (lo - 1e-12..=hi + 1e-12).contains(&s),
            "scale {s} at d={d} outside [{lo}, {hi}]"
        );
    }
    Ok(())
}

fn check_driver_target() -> anyhow::Result<()> {
    let mut time = TimeValues::new();
    let t = time.declare("t", 0.0)?;
    let driver = AnimationDriver::builder(Fps::new(30, 1)?, time)
        .segment(Segment::new(5.0, Ease::Linear).from_to(t, 0.0, 10.0))
        .build()?;
    let last = driver
        .last()
        .context("driver produced no frames")??
        .value("t")
        .context("missing value 't'")?;
    anyhow::ensure!(last == 10.0, "final value {last}");
    Ok(())
}
