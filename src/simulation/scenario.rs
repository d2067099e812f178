//! Build fully-initialized systems from a chosen generation policy
//!
//! [`Initializer`] is a tagged variant over the scenario kinds; each carries
//! its own parameters and `initialize` dispatches to the matching builder:
//! - `Config` reads bodies from a scenario description file
//! - `RandomGaussian` draws a normal cloud of bodies
//! - `Orbit`, `SunEarthMoon`, `TwoBodyOrbit` are fixed configurations
//! - `TangentRing` places a ring of bodies on near-circular headings
//!
//! Canvas dimensions are whole pixel counts; the centering terms use
//! integer division before conversion to simulation coordinates

use std::f64::consts::TAU;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::configuration::config::{ConfigError, ScenarioConfig};
use crate::simulation::states::{Body, NVec2, System};

const RING_RADIUS: f64 = 200.0;
const RING_MASS: f64 = 50.0;
const RING_SPEED: f64 = 5.0;

#[derive(Debug, Clone)]
pub enum Initializer {
    /// Bodies described by a scenario file
    Config { path: PathBuf },
    /// `n` bodies with Gaussian positions and uniform velocities/masses.
    /// The cloud's spread derives from the width on both axes
    RandomGaussian {
        n: usize,
        width: u32,
        height: u32,
        seed: Option<u64>,
    },
    /// Heavy central body with a light satellite, fixed coordinates
    Orbit,
    /// Three-body hierarchy around the canvas center
    SunEarthMoon { width: u32, height: u32 },
    /// Central body plus a satellite on a diagonal heading
    TwoBodyOrbit { width: u32, height: u32 },
    /// `n` equal masses evenly spaced on a circle, velocities tangent to it
    TangentRing { width: u32, height: u32, n: usize },
}

impl Initializer {
    /// Produce a populated system. Only the file-based variant can fail
    pub fn initialize(&self) -> Result<System, ConfigError> {
        match *self {
            Initializer::Config { ref path } => from_config(path),
            Initializer::RandomGaussian {
                n,
                width,
                height: _,
                seed,
            } => Ok(random_gaussian(n, width, seed)),
            Initializer::Orbit => Ok(orbit()),
            Initializer::SunEarthMoon { width, height } => Ok(sun_earth_moon(width, height)),
            Initializer::TwoBodyOrbit { width, height } => Ok(two_body_orbit(width, height)),
            Initializer::TangentRing { width, height, n } => Ok(tangent_ring(width, height, n)),
        }
    }
}

fn canvas_center(width: u32, height: u32) -> NVec2 {
    NVec2::new(f64::from(width / 2), f64::from(height / 2))
}

/// Map a scenario description onto a runtime system, bodies in source order
fn from_config(path: &Path) -> Result<System, ConfigError> {
    let cfg = ScenarioConfig::load(path)?;

    let mut system = System {
        G: cfg.g,
        ..System::default()
    };
    for bc in &cfg.bodies {
        system.add_body(Body::new(
            bc.mass,
            NVec2::new(bc.position[0], bc.position[1]),
            NVec2::new(bc.velocity[0], bc.velocity[1]),
        ));
    }
    Ok(system)
}

/// Gaussian cloud: positions scaled by `width/4` around `width/2`,
/// velocity components uniform in [-3, 3) scaled by 5, masses in [1, 10)
fn random_gaussian(n: usize, width: u32, seed: Option<u64>) -> System {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let normal = Normal::new(0.0, 1.0).unwrap();

    let scale = f64::from(width / 4);
    let center = f64::from(width / 2);

    let mut system = System::default();
    for _ in 0..n {
        let x = NVec2::new(
            normal.sample(&mut rng) * scale + center,
            normal.sample(&mut rng) * scale + center,
        );
        let v = NVec2::new(
            rng.gen_range(-3.0..3.0) * 5.0,
            rng.gen_range(-3.0..3.0) * 5.0,
        );
        let m = rng.gen_range(1.0..10.0);
        system.add_body(Body::new(m, x, v));
    }
    system
}

fn orbit() -> System {
    let mut system = System::default();
    system.add_body(Body::new(1000.0, NVec2::new(400.0, 400.0), NVec2::zeros()));
    system.add_body(Body::new(1.0, NVec2::new(400.0, 200.0), NVec2::new(0.0, 10.0)));
    system
}

fn sun_earth_moon(width: u32, height: u32) -> System {
    let center = canvas_center(width, height);
    let earth_x = center + NVec2::new(200.0, 0.0);
    let moon_x = earth_x + NVec2::new(10.0, 0.0);

    let mut system = System::default();
    system.add_body(Body::new(1500.0, center, NVec2::zeros()));
    system.add_body(Body::new(87.0, earth_x, NVec2::new(0.0, 10.0)));
    system.add_body(Body::new(1.0, moon_x, NVec2::new(0.0, 2.0)));
    system
}

fn two_body_orbit(width: u32, height: u32) -> System {
    let center = canvas_center(width, height);

    let mut system = System::default();
    system.add_body(Body::new(1000.0, center, NVec2::zeros()));
    system.add_body(Body::new(
        10.0,
        center + NVec2::new(200.0, 0.0),
        NVec2::new(-10.0, 10.0),
    ));
    system
}

fn tangent_ring(width: u32, height: u32, n: usize) -> System {
    let center = canvas_center(width, height);

    let mut system = System::default();
    for i in 0..n {
        let angle = i as f64 * TAU / n as f64;
        let x = center + RING_RADIUS * NVec2::new(angle.cos(), angle.sin());
        // Unit tangent at `angle`, scaled to the ring speed
        let v = RING_SPEED * NVec2::new(-angle.sin(), angle.cos());
        system.add_body(Body::new(RING_MASS, x, v));
    }
    system
}
