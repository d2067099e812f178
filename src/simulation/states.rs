//! Core state types for the N-body simulation.
//!
//! Defines the 2D body/system structs:
//! - `Body` holds one point mass and its per-step kinematic update
//! - `System` owns the body list plus the global constants `G` and
//!   `softening`, and the current simulation time `t`

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration, fully recomputed every force pass
    pub m: f64,   // mass, positive
}

impl Body {
    /// Create a body with the given state and zero acceleration
    pub fn new(m: f64, x: NVec2, v: NVec2) -> Self {
        Self {
            x,
            v,
            a: NVec2::zeros(),
            m,
        }
    }

    /// Advance the body by one step of size `dt`
    ///
    /// Velocity is kicked first, then the position drifts by the *updated*
    /// velocity (semi-implicit Euler). The two lines must stay in this order
    pub fn update(&mut self, dt: f64) {
        self.v += self.a * dt;
        self.x += self.v * dt;
    }
}

#[derive(Debug, Clone)]
#[allow(non_snake_case)]
pub struct System {
    pub G: f64,            // gravitational constant
    pub softening: f64,    // length added to pair separations
    pub bodies: Vec<Body>, // stable order, used for pair enumeration
    pub t: f64,            // elapsed simulation time
}

impl Default for System {
    fn default() -> Self {
        Self {
            G: 1.0,
            softening: 2.0,
            bodies: Vec::new(),
            t: 0.0,
        }
    }
}

impl System {
    pub fn new(g: f64, softening: f64) -> Self {
        Self {
            G: g,
            softening,
            ..Self::default()
        }
    }

    /// Append a body. Adding bodies after stepping has begun is allowed;
    /// later force passes simply see the larger pair set
    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Largest body mass. The system must be non-empty
    pub fn max_mass(&self) -> f64 {
        assert!(!self.bodies.is_empty(), "max_mass called on an empty system");
        self.bodies.iter().map(|b| b.m).fold(f64::NEG_INFINITY, f64::max)
    }

    /// Mass-weighted centroid of all bodies. The system must be non-empty
    pub fn center_of_mass(&self) -> NVec2 {
        assert!(
            !self.bodies.is_empty(),
            "center_of_mass called on an empty system"
        );
        let total_mass: f64 = self.bodies.iter().map(|b| b.m).sum();
        let weighted = self
            .bodies
            .iter()
            .fold(NVec2::zeros(), |acc, b| acc + b.m * b.x);
        weighted / total_mass
    }
}
