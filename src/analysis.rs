use serde::Serialize;

use crate::dynamics::ProjectileState;
use crate::sim::SimulationResult;

/// Chart decimation used by the analytics dock: every 5th sample.
pub const CHART_DECIMATION: usize = 5;

// ---------------------------------------------------------------------------
// Chart projection
// ---------------------------------------------------------------------------

/// One point of the (time, height, distance) chart series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub time: f64,     // s
    pub height: f64,   // m, position.y
    pub distance: f64, // m, horizontal distance from the origin
}

impl From<&ProjectileState> for ChartPoint {
    fn from(s: &ProjectileState) -> Self {
        ChartPoint {
            time: s.time,
            height: s.position.y,
            distance: s.horizontal_distance(),
        }
    }
}

/// Every `every`-th path sample, starting with the launch state.
/// `every == 0` is treated as 1.
pub fn chart_series(result: &SimulationResult, every: usize) -> Vec<ChartPoint> {
    result
        .path
        .iter()
        .step_by(every.max(1))
        .map(ChartPoint::from)
        .collect()
}

// ---------------------------------------------------------------------------
// Playback
// ---------------------------------------------------------------------------

/// First sample at or after `time`; the impact sample once `time` runs
/// past the end of the flight. `None` only for an empty path.
pub fn state_at(result: &SimulationResult, time: f64) -> Option<&ProjectileState> {
    result
        .path
        .iter()
        .find(|s| s.time >= time)
        .or_else(|| result.path.last())
}

/// Samples up to and including the one shown at `time` (the drawn trail).
pub fn trail_until(result: &SimulationResult, time: f64) -> &[ProjectileState] {
    let end = result
        .path
        .iter()
        .position(|s| s.time >= time)
        .map_or(result.path.len(), |i| i + 1);
    &result.path[..end]
}

// ---------------------------------------------------------------------------
// Derived flight statistics
// ---------------------------------------------------------------------------

/// Recorded sample carrying the peak height.
pub fn apex(result: &SimulationResult) -> Option<&ProjectileState> {
    let (_, in_flight) = result.path.split_last()?;
    in_flight.iter().find(|s| s.position.y == result.max_height)
}

/// Kinetic energy 0.5 m v^2, J.
pub fn kinetic_energy(state: &ProjectileState, mass: f64) -> f64 {
    0.5 * mass * state.velocity.norm_squared()
}

/// Secondary statistics for reports, all derived from the path.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightStats {
    pub apex_time: f64,     // s
    pub max_speed: f64,     // m/s
    pub lateral_drift: f64, // m, impact z (cross-range for azimuth 0)
    pub impact_angle: f64,  // deg below horizontal
    pub samples: usize,
}

impl FlightStats {
    /// `None` for an empty path.
    pub fn from_result(result: &SimulationResult) -> Option<Self> {
        let impact = result.impact()?;
        let max_speed = result
            .path
            .iter()
            .map(|s| s.speed())
            .fold(0.0_f64, f64::max);
        let horizontal_speed = impact.velocity.x.hypot(impact.velocity.z);

        Some(FlightStats {
            apex_time: apex(result).map_or(0.0, |s| s.time),
            max_speed,
            lateral_drift: impact.position.z,
            impact_angle: (-impact.velocity.y).atan2(horizontal_speed).to_degrees(),
            samples: result.path.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::PhysicsParamsBuilder;
    use crate::presets::LaunchMode;
    use crate::sim::simulate;
    use approx::assert_relative_eq;

    fn cannon() -> SimulationResult {
        simulate(&LaunchMode::Cannon.params()).unwrap()
    }

    #[test]
    fn chart_takes_every_fifth_sample() {
        let r = cannon();
        let series = chart_series(&r, CHART_DECIMATION);
        assert_eq!(series.len(), (r.path.len() + 4) / 5);
        assert_eq!(series[0].time, 0.0);
        assert_eq!(series[1], ChartPoint::from(&r.path[5]));
        assert_eq!(series[0].height, 1.5);
    }

    #[test]
    fn chart_zero_step_keeps_everything() {
        let r = cannon();
        assert_eq!(chart_series(&r, 0).len(), r.path.len());
    }

    #[test]
    fn chart_distance_is_horizontal() {
        let p = PhysicsParamsBuilder::vacuum().launch_azimuth(30.0).build();
        let r = simulate(&p).unwrap();
        let last = chart_series(&r, 1).pop().unwrap();
        assert_relative_eq!(last.distance, r.max_range, max_relative = 1e-12);
    }

    #[test]
    fn seek_picks_first_sample_at_or_after() {
        let r = cannon();
        assert_eq!(state_at(&r, 0.0), r.path.first());
        let s = state_at(&r, 1.005).unwrap();
        assert!(s.time >= 1.005 && s.time < 1.02);
        assert_eq!(state_at(&r, 1e6), r.path.last());
    }

    #[test]
    fn trail_ends_at_seek_sample() {
        let r = cannon();
        let trail = trail_until(&r, 0.5);
        assert_eq!(trail.last(), state_at(&r, 0.5));
        assert_eq!(trail_until(&r, 1e6).len(), r.path.len());
        assert_eq!(trail_until(&r, -1.0).len(), 1);
    }

    #[test]
    fn apex_is_recorded_peak() {
        let r = cannon();
        let a = apex(&r).unwrap();
        assert_eq!(a.position.y, r.max_height);
        assert!(a.velocity.y.abs() < 0.2);
    }

    #[test]
    fn kinetic_energy_at_launch() {
        let p = LaunchMode::Cannon.params();
        let s = p.initial_state();
        assert_relative_eq!(kinetic_energy(&s, p.mass), 0.5 * 10.0 * 150.0 * 150.0, max_relative = 1e-12);
    }

    #[test]
    fn stats_describe_a_descending_impact() {
        let r = cannon();
        let stats = FlightStats::from_result(&r).unwrap();
        assert!(stats.impact_angle > 0.0 && stats.impact_angle < 90.0);
        assert_relative_eq!(stats.max_speed, 150.0, max_relative = 1e-9);
        assert_eq!(stats.samples, r.path.len());
        assert!(stats.apex_time > 0.0 && stats.apex_time < r.time_of_flight);
        assert_eq!(stats.lateral_drift, 0.0);
    }
}
