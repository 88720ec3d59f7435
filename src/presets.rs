use std::fmt;
use std::str::FromStr;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::dynamics::PhysicsParams;
use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Launch modes
// ---------------------------------------------------------------------------

/// Projectile presets offered by the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum LaunchMode {
    Gun,
    #[default]
    Cannon,
    Kick,
    Throw,
}

impl LaunchMode {
    pub const ALL: [LaunchMode; 4] = [
        LaunchMode::Gun,
        LaunchMode::Cannon,
        LaunchMode::Kick,
        LaunchMode::Throw,
    ];

    /// Label passed to the narrator and printed in reports.
    pub fn label(self) -> &'static str {
        match self {
            LaunchMode::Gun => "GUN",
            LaunchMode::Cannon => "CANNON",
            LaunchMode::Kick => "KICK",
            LaunchMode::Throw => "THROW",
        }
    }

    /// Default parameter set for this mode.
    pub fn params(self) -> PhysicsParams {
        let base = PhysicsParams {
            gravity: 9.81,
            air_density: 1.225,
            wind_speed: Vector3::zeros(),
            mass: 0.0,
            radius: 0.0,
            drag_coefficient: 0.0,
            initial_velocity: 0.0,
            launch_angle: 0.0,
            launch_azimuth: 0.0,
            spin: Vector3::zeros(),
        };

        match self {
            // 9 mm round, rifling spin
            LaunchMode::Gun => PhysicsParams {
                mass: 0.008,
                radius: 0.0045,
                drag_coefficient: 0.295,
                initial_velocity: 350.0,
                launch_angle: 5.0,
                spin: Vector3::new(0.0, 0.0, 500.0),
                ..base
            },
            // 10 kg sphere
            LaunchMode::Cannon => PhysicsParams {
                mass: 10.0,
                radius: 0.1,
                drag_coefficient: 0.47,
                initial_velocity: 150.0,
                launch_angle: 45.0,
                ..base
            },
            // Football, curved kick
            LaunchMode::Kick => PhysicsParams {
                mass: 0.45,
                radius: 0.11,
                drag_coefficient: 0.25,
                initial_velocity: 25.0,
                launch_angle: 30.0,
                spin: Vector3::new(0.0, 10.0, 5.0),
                ..base
            },
            // Baseball with backspin
            LaunchMode::Throw => PhysicsParams {
                mass: 0.145,
                radius: 0.037,
                drag_coefficient: 0.3,
                initial_velocity: 40.0,
                launch_angle: 15.0,
                spin: Vector3::new(50.0, 0.0, 0.0),
                ..base
            },
        }
    }
}

impl fmt::Display for LaunchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LaunchMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LaunchMode::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownMode(s.to_string()))
    }
}
