use std::f64::consts::PI;

use nalgebra::Vector3;

use crate::dynamics::state::MAGNUS_COEFFICIENT;

/// Reference area of a sphere of the given radius, pi * r^2.
pub fn cross_section(radius: f64) -> f64 {
    PI * radius.powi(2)
}

/// Quadratic drag opposing the air-relative velocity.
///
/// Magnitude is `0.5 * rho * |v_rel|^2 * cd * area`. Exactly zero when the
/// projectile moves with the wind.
pub fn drag_force(v_rel: &Vector3<f64>, air_density: f64, cd: f64, area: f64) -> Vector3<f64> {
    let speed_sq = v_rel.norm_squared();
    let speed = speed_sq.sqrt();
    if speed == 0.0 {
        return Vector3::zeros();
    }
    let drag_mag = 0.5 * air_density * speed_sq * cd * area;
    -(v_rel / speed) * drag_mag
}

/// Magnus force `S * (spin x v)` with `S = C_m * rho * r^3`.
///
/// Takes the inertial velocity, not the air-relative one: wind does not
/// enter the spin term.
pub fn magnus_force(
    spin: &Vector3<f64>,
    vel: &Vector3<f64>,
    air_density: f64,
    radius: f64,
) -> Vector3<f64> {
    let s = MAGNUS_COEFFICIENT * air_density * radius.powi(3);
    spin.cross(vel) * s
}
