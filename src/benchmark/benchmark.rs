//! Wall-clock scaling benchmarks for the force pass and full steps

use std::time::Instant;

use crate::simulation::states::{Body, NVec2, System};

/// Deterministic test system of `n` bodies, no RNG needed
fn scaling_system(n: usize) -> System {
    let mut system = System::default();
    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new((i_f * 0.37).sin() * 500.0, (i_f * 0.13).cos() * 500.0);
        system.add_body(Body::new(1.0, x, NVec2::zeros()));
    }
    system
}

/// Time a single force pass across a range of system sizes
pub fn bench_forces() {
    let ns = [200, 400, 800, 1600, 3200];

    for n in ns {
        let mut system = scaling_system(n);

        // Warm up
        system.compute_forces();

        let t0 = Instant::now();
        system.compute_forces();
        let elapsed = t0.elapsed().as_secs_f64();

        println!("forces: n = {n:5}, pass = {elapsed:9.6} s");
    }
}

/// Time full update steps across a range of system sizes
pub fn bench_step() {
    let ns = [200, 400, 800, 1600];
    let dt = 0.1;
    let steps = 10;

    for n in ns {
        let mut system = scaling_system(n);

        // Warm up
        system.update(dt);

        let t0 = Instant::now();
        for _ in 0..steps {
            system.update(dt);
        }
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "step:   n = {n:5}, {steps} steps = {elapsed:9.6} s ({:9.6} s/step)",
            elapsed / steps as f64
        );
    }
}
