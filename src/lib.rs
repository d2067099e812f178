pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::scenario::Initializer;
pub use simulation::states::{Body, NVec2, System};

pub use configuration::config::{BodyConfig, ConfigError, ScenarioConfig};

pub use benchmark::benchmark::{bench_forces, bench_step};
