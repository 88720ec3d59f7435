use serde::{Deserialize, Serialize};

use crate::dynamics::ProjectileState;

/// Full output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Chronological samples; first is the launch state, last is the impact.
    pub path: Vec<ProjectileState>,
    pub max_range: f64,      // m, horizontal distance to the impact point
    pub max_height: f64,     // m, over samples recorded before impact
    pub time_of_flight: f64, // s
    pub impact_velocity: f64, // m/s
}

impl SimulationResult {
    /// Aggregate the summary from a recorded path and its impact sample.
    ///
    /// `max_height` is passed in rather than derived: it only covers the
    /// in-flight samples, never the impact sample appended after the loop.
    pub(crate) fn from_flight(
        mut path: Vec<ProjectileState>,
        max_height: f64,
        impact: ProjectileState,
    ) -> Self {
        path.push(impact);
        SimulationResult {
            path,
            max_range: impact.horizontal_distance(),
            max_height,
            time_of_flight: impact.time,
            impact_velocity: impact.speed(),
        }
    }

    pub fn impact(&self) -> Option<&ProjectileState> {
        self.path.last()
    }

    /// True when every summary value is a finite number.
    pub fn is_finite(&self) -> bool {
        [
            self.max_range,
            self.max_height,
            self.time_of_flight,
            self.impact_velocity,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
