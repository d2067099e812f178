use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};

use nbsim::{bench_forces, bench_step, Initializer};

/// Which generation policy builds the initial system
#[derive(ValueEnum, Clone, Copy, Debug)]
enum ScenarioKind {
    /// Bodies read from --file
    File,
    /// Gaussian cloud of -n bodies
    Gaussian,
    /// Heavy central body with one light satellite
    Orbit,
    /// Three-body sun/earth/moon hierarchy
    SunEarthMoon,
    /// Central body plus a satellite on a diagonal heading
    TwoBody,
    /// Ring of equal masses on tangential headings
    Ring,
}

#[derive(Parser, Debug)]
#[command(name = "nbsim", about = "Headless 2D gravitational n-body simulator")]
struct Args {
    /// Scenario to simulate
    #[arg(short, long, value_enum, default_value = "orbit")]
    scenario: ScenarioKind,

    /// Scenario description file (with --scenario file)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Number of steps to simulate
    #[arg(long, default_value_t = 1000)]
    steps: u32,

    /// Step size
    #[arg(long, default_value_t = 0.1)]
    dt: f64,

    /// Body count for the gaussian and ring scenarios
    #[arg(short = 'n', long, default_value_t = 10)]
    bodies: usize,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 960)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 540)]
    height: u32,

    /// RNG seed for the gaussian scenario
    #[arg(long)]
    seed: Option<u64>,

    /// Log a summary every this many steps
    #[arg(long, default_value_t = 100)]
    log_every: u32,

    /// Run the force/step scaling benchmarks instead of a simulation
    #[arg(long)]
    bench: bool,
}

fn build_initializer(args: &Args) -> Result<Initializer> {
    let init = match args.scenario {
        ScenarioKind::File => {
            let Some(path) = args.file.clone() else {
                bail!("--scenario file requires --file <path>");
            };
            Initializer::Config { path }
        }
        ScenarioKind::Gaussian => Initializer::RandomGaussian {
            n: args.bodies,
            width: args.width,
            height: args.height,
            seed: args.seed,
        },
        ScenarioKind::Orbit => Initializer::Orbit,
        ScenarioKind::SunEarthMoon => Initializer::SunEarthMoon {
            width: args.width,
            height: args.height,
        },
        ScenarioKind::TwoBody => Initializer::TwoBodyOrbit {
            width: args.width,
            height: args.height,
        },
        ScenarioKind::Ring => Initializer::TangentRing {
            width: args.width,
            height: args.height,
            n: args.bodies,
        },
    };
    Ok(init)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_forces();
        bench_step();
        return Ok(());
    }

    let initializer = build_initializer(&args)?;
    debug!("initializer: {:?}", initializer);

    let mut system = initializer.initialize()?;
    if system.bodies.is_empty() {
        bail!("scenario produced no bodies");
    }
    info!(
        "initialized {} bodies, G = {}, softening = {}, max mass {:.2}",
        system.bodies.len(),
        system.G,
        system.softening,
        system.max_mass()
    );

    let log_every = args.log_every.max(1);
    for step in 1..=args.steps {
        system.update(args.dt);

        if step % log_every == 0 || step == args.steps {
            let com = system.center_of_mass();
            info!(
                "step {:>6} t = {:>9.2} com = ({:>10.3}, {:>10.3})",
                step, system.t, com.x, com.y
            );
        }
    }

    Ok(())
}
