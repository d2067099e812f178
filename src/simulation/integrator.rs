//! Fixed-step time integration for the N-body system
//!
//! One force evaluation per step followed by a per-body kick/drift,
//! advancing positions, velocities, and `t` in place

use crate::simulation::states::System;

impl System {
    /// Advance the whole system by one step of size `dt`
    ///
    /// Accelerations are finalized for every body before any body moves,
    /// so the per-body updates are independent of iteration order
    pub fn update(&mut self, dt: f64) {
        self.compute_forces();

        for body in self.bodies.iter_mut() {
            body.update(dt);
        }

        self.t += dt;
    }
}
