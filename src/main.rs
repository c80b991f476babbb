//! Builds a row of hoppers with a looping bridge and writes it as OBJ.
//!
//! ```text
//! cargo run                                  # writes out.obj
//! cargo run -- --hoppers 6 --output row.obj
//! RUST_LOG=pipeworks=debug cargo run         # per-pipe build events
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use pipeworks::geometry::Path;
use pipeworks::math::Point3;
use pipeworks::mesh::Model;
use pipeworks::operations::platform::{BuildLoopingPlatform, PlatformParams};
use pipeworks::operations::sweep::PipeParams;
use pipeworks::scene::Hopper;
use pipeworks::Result;

#[derive(Debug, Parser)]
#[command(version, about = "Generate hopper and walkway meshes")]
struct Args {
    /// File to write the model to.
    #[arg(short, long, default_value = "out.obj")]
    output: PathBuf,

    /// Number of hoppers in the row.
    #[arg(long, default_value_t = 4)]
    hoppers: u32,

    /// Bin radius of each hopper.
    #[arg(long, default_value_t = 1.0)]
    radius: f64,

    /// Ring side count for hopper pipes.
    #[arg(long, default_value_t = 32)]
    sides: usize,

    /// Width of the looping bridge walkway.
    #[arg(long, default_value_t = 1.0)]
    platform_width: f64,
}

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for pipeworks.
    // Override with RUST_LOG env var (e.g. RUST_LOG=pipeworks=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("pipeworks=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let model = build_scene(args)?;
    let start = Instant::now();
    save(&model, &args.output)?;
    tracing::info!(
        polygons = model.polygon_count(),
        "saving model to {} took {:?}",
        args.output.display(),
        start.elapsed()
    );
    Ok(())
}

fn build_scene(args: &Args) -> Result<Model> {
    let mut model = Model::default();
    for x in 1..=args.hoppers {
        let hopper = Hopper {
            bin_height: 2.0,
            taper_height: 1.0,
            radius: args.radius,
            height_off_ground: 1.0,
            position: Point3::new((args.radius * 2.0 + 1.0) * f64::from(x), 0.0, 0.0),
        };
        model = model.merge(hopper.to_model(PipeParams { sides: args.sides })?);
    }

    let bridge = BuildLoopingPlatform::new(
        Path::new(vec![
            Point3::new(1.0, 0.0, -2.0),
            Point3::new(1.0, 0.0, 2.0),
            Point3::new(5.0, 1.0, 2.0),
            Point3::new(10.0, 1.0, 2.0),
            Point3::new(14.0, 0.0, 2.0),
            Point3::new(14.0, 0.0, -2.0),
        ]),
        PlatformParams::new(args.platform_width)?,
    )
    .execute()?;

    Ok(model.merge(bridge))
}

fn save(model: &Model, path: &std::path::Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    model.write_obj(&mut writer)?;
    writer.flush()?;
    Ok(())
}
