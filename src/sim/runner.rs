use std::iter;

use crate::dynamics::state::SimConfig;
use crate::dynamics::{PhysicsParams, ProjectileState};
use crate::error::ConfigError;
use super::integrator::rk4_step;
use super::result::SimulationResult;

// ---------------------------------------------------------------------------
// Full flight simulation
// ---------------------------------------------------------------------------

/// Simulate one launch from the fixed launch height to ground impact
/// (or the 60 s ceiling).
///
/// Rejects non-finite inputs and non-positive mass up front; everything
/// else is accepted as given, including negative gravity.
pub fn simulate(params: &PhysicsParams) -> Result<SimulationResult, ConfigError> {
    params.validate()?;
    Ok(simulate_with(params, &SimConfig::default()))
}

/// Unchecked integration loop with an explicit step and ceiling.
///
/// Every state is recorded before it is advanced. The first state that
/// fails the flight predicate is appended as the impact sample, so the
/// path may end up to one step below ground.
pub(crate) fn simulate_with(params: &PhysicsParams, config: &SimConfig) -> SimulationResult {
    let launch = params.initial_state();
    let flight = iter::successors(Some(launch), |s| Some(rk4_step(s, params, config.dt)));

    let (path, max_height) = flight.take_while(|s| config.in_flight(s)).fold(
        (Vec::with_capacity(config.capacity()), 0.0),
        |(mut path, max_height): (Vec<ProjectileState>, f64), state| {
            let max_height = if state.position.y > max_height {
                state.position.y
            } else {
                max_height
            };
            path.push(state);
            (path, max_height)
        },
    );

    // take_while consumed the first out-of-flight state; recompute it from
    // the last recorded one (deterministic, same step)
    let impact = match path.last() {
        Some(last) => rk4_step(last, params, config.dt),
        None => launch,
    };

    SimulationResult::from_flight(path, max_height, impact)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
