use nalgebra::Vector3;

use super::params::PhysicsParams;
use super::state::{Deriv, ProjectileState};
use crate::physics::aerodynamics::{cross_section, drag_force, magnus_force};
use crate::physics::gravity::gravity_force;

// ---------------------------------------------------------------------------
// Equations of motion (3DOF point mass)
// ---------------------------------------------------------------------------

/// Acceleration of the projectile for a given instantaneous velocity.
///
/// Forces:
///   1. Gravity  (0, -g m, 0)
///   2. Drag     quadratic in the wind-relative velocity
///   3. Magnus   S (spin x v), inertial velocity
///
/// Position never enters: the environment is uniform.
pub fn acceleration(vel: &Vector3<f64>, params: &PhysicsParams) -> Vector3<f64> {
    let v_rel = vel - params.wind_speed;

    let f_gravity = gravity_force(params.gravity, params.mass);
    let f_drag = drag_force(
        &v_rel,
        params.air_density,
        params.drag_coefficient,
        cross_section(params.radius),
    );
    let f_magnus = magnus_force(&params.spin, vel, params.air_density, params.radius);

    (f_gravity + f_drag + f_magnus) / params.mass
}

/// State derivatives: `dpos = v`, `dvel = a(v)`.
pub fn derivatives(state: &ProjectileState, params: &PhysicsParams) -> Deriv {
    Deriv {
        dpos: state.velocity,
        dvel: acceleration(&state.velocity, params),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::PhysicsParamsBuilder;
    use approx::assert_relative_eq;

    #[test]
    fn vacuum_acceleration_is_gravity() {
        let p = PhysicsParamsBuilder::vacuum().gravity(9.81).mass(3.0).build();
        let a = acceleration(&Vector3::new(100.0, -20.0, 5.0), &p);
        assert_relative_eq!(a, Vector3::new(0.0, -9.81, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn headwind_increases_drag() {
        let calm = PhysicsParamsBuilder::new().wind(Vector3::zeros()).build();
        let headwind = PhysicsParamsBuilder::new().wind(Vector3::new(-10.0, 0.0, 0.0)).build();
        let vel = Vector3::new(50.0, 0.0, 0.0);
        assert!(acceleration(&vel, &headwind).x < acceleration(&vel, &calm).x);
    }

    #[test]
    fn wind_matching_velocity_leaves_gravity_only() {
        let wind = Vector3::new(12.0, 0.0, -4.0);
        let p = PhysicsParamsBuilder::new().wind(wind).spin(Vector3::zeros()).build();
        let a = acceleration(&wind, &p);
        assert!(a.iter().all(|c| c.is_finite()));
        assert_relative_eq!(a, Vector3::new(0.0, -p.gravity, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn magnus_ignores_wind() {
        // With drag off, wind changes nothing: Magnus uses inertial velocity
        let calm = PhysicsParamsBuilder::new()
            .drag_coefficient(0.0)
            .spin(Vector3::new(0.0, 0.0, 30.0))
            .build();
        let windy = PhysicsParams { wind_speed: Vector3::new(15.0, 0.0, 0.0), ..calm };
        let vel = Vector3::new(40.0, 5.0, 0.0);
        assert_eq!(acceleration(&vel, &calm), acceleration(&vel, &windy));
    }

    #[test]
    fn derivative_position_term_is_velocity() {
        let p = PhysicsParams::default();
        let s = p.initial_state();
        let d = derivatives(&s, &p);
        assert_eq!(d.dpos, s.velocity);
        assert_eq!(d.dvel, acceleration(&s.velocity, &p));
    }
}
