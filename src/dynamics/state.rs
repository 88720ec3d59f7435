use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::vec3;

// ---------------------------------------------------------------------------
// Fixed model constants
// ---------------------------------------------------------------------------

pub const LAUNCH_HEIGHT: f64 = 1.5; // m, hand/shoulder/muzzle height above ground
pub const MAGNUS_COEFFICIENT: f64 = 1.0; // dimensionless
pub const TIME_STEP: f64 = 0.01; // s, 100 Hz
pub const MAX_FLIGHT_TIME: f64 = 60.0; // s, hard stop

// ---------------------------------------------------------------------------
// Projectile state: position, velocity, time
// ---------------------------------------------------------------------------

/// One sample on the trajectory.
/// Frame: x/z horizontal, y up, origin on the ground below the launch point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileState {
    #[serde(with = "vec3")]
    pub position: Vector3<f64>, // m
    #[serde(with = "vec3")]
    pub velocity: Vector3<f64>, // m/s
    pub time: f64,              // s since launch
}

impl ProjectileState {
    /// Advance state by a derivative scaled by dt (used inside RK4).
    pub fn apply(&self, d: &Deriv, dt: f64) -> ProjectileState {
        ProjectileState {
            position: self.position + d.dpos * dt,
            velocity: self.velocity + d.dvel * dt,
            time: self.time + dt,
        }
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Distance from the origin in the ground plane, ignoring height.
    pub fn horizontal_distance(&self) -> f64 {
        (self.position.x.powi(2) + self.position.z.powi(2)).sqrt()
    }
}

// ---------------------------------------------------------------------------
// State derivative
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct Deriv {
    pub dpos: Vector3<f64>, // velocity
    pub dvel: Vector3<f64>, // acceleration
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

/// Step size and time ceiling. Production runs always use the default;
/// other values are only constructed by tests.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SimConfig {
    pub dt: f64,
    pub max_time: f64,
}

impl SimConfig {
    /// Loop predicate: still above ground and under the ceiling.
    pub fn in_flight(&self, state: &ProjectileState) -> bool {
        state.position.y >= 0.0 && state.time < self.max_time
    }

    /// Upper bound on the number of recorded samples.
    pub fn capacity(&self) -> usize {
        (self.max_time / self.dt) as usize + 2
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: TIME_STEP,
            max_time: MAX_FLIGHT_TIME,
        }
    }
}
