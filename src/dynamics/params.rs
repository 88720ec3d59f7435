use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::state::{ProjectileState, LAUNCH_HEIGHT};
use super::vec3;
use crate::error::ConfigError;
use crate::presets::LaunchMode;

// ---------------------------------------------------------------------------
// Launch and environment parameters
// ---------------------------------------------------------------------------

/// Input configuration for one simulation run.
///
/// Field names serialize in camelCase (`airDensity`, `windSpeed`, ...) so
/// parameter files match the shape the control surface produces. Missing
/// fields fall back to the cannon preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsParams {
    pub gravity: f64,                // m/s^2
    pub air_density: f64,            // kg/m^3
    #[serde(with = "vec3")]
    pub wind_speed: Vector3<f64>,    // m/s
    pub mass: f64,                   // kg
    pub radius: f64,                 // m
    pub drag_coefficient: f64,       // dimensionless
    pub initial_velocity: f64,       // m/s along the launch direction
    pub launch_angle: f64,           // deg, elevation from horizontal
    pub launch_azimuth: f64,         // deg, heading around the vertical axis
    #[serde(with = "vec3")]
    pub spin: Vector3<f64>,          // rad/s
}

impl Default for PhysicsParams {
    fn default() -> Self {
        LaunchMode::default().params()
    }
}

impl PhysicsParams {
    /// Launch velocity decomposed from speed, elevation and azimuth.
    pub fn launch_velocity(&self) -> Vector3<f64> {
        let angle = self.launch_angle.to_radians();
        let azimuth = self.launch_azimuth.to_radians();
        let v0 = self.initial_velocity;
        Vector3::new(
            v0 * angle.cos() * azimuth.cos(),
            v0 * angle.sin(),
            v0 * angle.cos() * azimuth.sin(),
        )
    }

    /// State at t = 0: fixed launch height above the origin.
    pub fn initial_state(&self) -> ProjectileState {
        ProjectileState {
            position: Vector3::new(0.0, LAUNCH_HEIGHT, 0.0),
            velocity: self.launch_velocity(),
            time: 0.0,
        }
    }

    /// Every field finite, mass strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("gravity", self.gravity),
            ("airDensity", self.air_density),
            ("mass", self.mass),
            ("radius", self.radius),
            ("dragCoefficient", self.drag_coefficient),
            ("initialVelocity", self.initial_velocity),
            ("launchAngle", self.launch_angle),
            ("launchAzimuth", self.launch_azimuth),
        ];
        let vectors = [
            ("windSpeed.x", self.wind_speed.x),
            ("windSpeed.y", self.wind_speed.y),
            ("windSpeed.z", self.wind_speed.z),
            ("spin.x", self.spin.x),
            ("spin.y", self.spin.y),
            ("spin.z", self.spin.z),
        ];

        for (field, value) in scalars.into_iter().chain(vectors) {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if self.mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(self.mass));
        }
        Ok(())
    }

    /// Fields outside the ranges the interactive control surface offers.
    /// Informational only; the integrator accepts any finite input.
    pub fn outside_ui_ranges(&self) -> Vec<&'static str> {
        UI_RANGES
            .iter()
            .filter(|r| !r.contains(r.value_of(self)))
            .map(|r| r.field)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Control-surface input ranges
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct InputRange {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

impl InputRange {
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn value_of(&self, p: &PhysicsParams) -> f64 {
        match self.field {
            "gravity" => p.gravity,
            "airDensity" => p.air_density,
            "initialVelocity" => p.initial_velocity,
            "launchAngle" => p.launch_angle,
            "launchAzimuth" => p.launch_azimuth,
            _ => f64::NAN,
        }
    }
}

pub const UI_RANGES: [InputRange; 5] = [
    InputRange { field: "gravity", min: 0.0, max: 25.0 },
    InputRange { field: "airDensity", min: 0.0, max: 2.0 },
    InputRange { field: "initialVelocity", min: 1.0, max: 1000.0 },
    InputRange { field: "launchAngle", min: -90.0, max: 90.0 },
    InputRange { field: "launchAzimuth", min: 0.0, max: 360.0 },
];

// ---------------------------------------------------------------------------
// Params builder
// ---------------------------------------------------------------------------

pub struct PhysicsParamsBuilder {
    params: PhysicsParams,
}

impl PhysicsParamsBuilder {
    pub fn new() -> Self {
        Self { params: PhysicsParams::default() }
    }

    /// Vacuum, no wind, no spin: the analytic projectile.
    pub fn vacuum() -> Self {
        Self::new()
            .air_density(0.0)
            .wind(Vector3::zeros())
            .spin(Vector3::zeros())
    }

    pub fn gravity(mut self, v: f64) -> Self { self.params.gravity = v; self }
    pub fn air_density(mut self, v: f64) -> Self { self.params.air_density = v; self }
    pub fn wind(mut self, v: Vector3<f64>) -> Self { self.params.wind_speed = v; self }
    pub fn mass(mut self, v: f64) -> Self { self.params.mass = v; self }
    pub fn radius(mut self, v: f64) -> Self { self.params.radius = v; self }
    pub fn drag_coefficient(mut self, v: f64) -> Self { self.params.drag_coefficient = v; self }
    pub fn initial_velocity(mut self, v: f64) -> Self { self.params.initial_velocity = v; self }
    pub fn launch_angle(mut self, v: f64) -> Self { self.params.launch_angle = v; self }
    pub fn launch_azimuth(mut self, v: f64) -> Self { self.params.launch_azimuth = v; self }
    pub fn spin(mut self, v: Vector3<f64>) -> Self { self.params.spin = v; self }

    pub fn build(self) -> PhysicsParams {
        self.params
    }
}

impl Default for PhysicsParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
