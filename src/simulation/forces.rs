//! Pairwise gravitational force accumulation
//!
//! Direct O(n²) summation over unordered body pairs, Newton's third law
//! applied to both members of each pair. No tree approximation

use crate::simulation::states::{NVec2, System};

impl System {
    /// Recompute every body's acceleration from the current positions
    ///
    /// Softening is added to the separation *magnitude* before squaring
    /// (`r_mag = ‖r‖ + softening`), and the displacement vector enters the
    /// force un-normalized. Both are part of the simulated dynamics
    pub fn compute_forces(&mut self) {
        // Acceleration is transient: zero it before the pair loop
        for body in self.bodies.iter_mut() {
            body.a = NVec2::zeros();
        }

        let n = self.bodies.len();

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let (xi, mi) = (self.bodies[i].x, self.bodies[i].m);

            for j in (i + 1)..n {
                let (xj, mj) = (self.bodies[j].x, self.bodies[j].m);

                // r points from i to j: i is pulled along +r, j along -r
                let r = xj - xi;
                let r_mag = r.norm() + self.softening;

                // Zero only when softening is zero and the pair coincides;
                // skip the pair instead of dividing by zero
                if r_mag <= 0.0 {
                    continue;
                }

                let force = self.G * mi * mj / (r_mag * r_mag) * r;

                // Equal and opposite, applied once per pair
                self.bodies[i].a += force / mi;
                self.bodies[j].a -= force / mj;
            }
        }
    }
}
