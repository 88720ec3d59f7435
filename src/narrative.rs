use std::fmt::Write as _;

use crate::analysis::FlightStats;
use crate::dynamics::PhysicsParams;
use crate::error::NarrativeError;
use crate::sim::SimulationResult;

/// Shown when the narrator fails.
pub const FALLBACK_NARRATIVE: &str = "Unable to provide AI analysis at this time.";
/// Shown when the narrator answers with nothing.
pub const EMPTY_NARRATIVE: &str = "No data available.";

/// Trait for commentary generators.
///
/// Implement this to plug a text-generation backend into the report. The
/// call is fallible and may be slow; callers go through [`narrate`] so a
/// failure never affects the simulation result.
pub trait Narrator: Send + Sync {
    /// Produce commentary for a fully rendered prompt.
    fn analyze(&self, prompt: &str) -> Result<String, NarrativeError>;

    /// Human-readable name for display.
    fn name(&self) -> &str {
        "unnamed"
    }
}

/// Prompt describing the launch and its outcome.
pub fn build_prompt(params: &PhysicsParams, result: &SimulationResult, mode: &str) -> String {
    let air = if params.air_density > 0.0 { "Enabled" } else { "Disabled" };
    let w = &params.wind_speed;
    let s = &params.spin;

    format!(
        "As a world-class ballistics and physics expert, analyze this projectile motion data:\n\
         Launch Mode: {mode}\n\
         Initial Velocity: {velocity} m/s\n\
         Launch Angle: {angle}°\n\
         Mass: {mass} kg\n\
         Air Resistance: {air}\n\
         Wind: X:{wx}, Y:{wy}, Z:{wz} m/s\n\
         Spin (Magnus): X:{sx}, Y:{sy}, Z:{sz} rad/s\n\
         \n\
         Simulation Results:\n\
         Max Range: {range:.2} m\n\
         Max Height: {height:.2} m\n\
         Time of Flight: {time:.2} s\n\
         Impact Velocity: {impact:.2} m/s\n\
         \n\
         Provide a brief, professional technical insight (max 100 words) on how the \
         variables like drag, wind, or spin influenced this specific result. \
         Mention if the trajectory was efficient.",
        velocity = params.initial_velocity,
        angle = params.launch_angle,
        mass = params.mass,
        wx = w.x,
        wy = w.y,
        wz = w.z,
        sx = s.x,
        sy = s.y,
        sz = s.z,
        range = result.max_range,
        height = result.max_height,
        time = result.time_of_flight,
        impact = result.impact_velocity,
    )
}

/// Ask the narrator for commentary, degrading to a fixed message on failure.
pub fn narrate(
    narrator: &dyn Narrator,
    params: &PhysicsParams,
    result: &SimulationResult,
    mode: &str,
) -> String {
    let prompt = build_prompt(params, result, mode);
    match narrator.analyze(&prompt) {
        Ok(text) if text.is_empty() => EMPTY_NARRATIVE.to_string(),
        Ok(text) => text,
        Err(err) => {
            eprintln!("narrative ({}) failed: {}", narrator.name(), err);
            FALLBACK_NARRATIVE.to_string()
        }
    }
}

// ---------------------------------------------------------------------------
// Offline narrator
// ---------------------------------------------------------------------------

/// Rule-based commentary computed locally from the numbers.
///
/// Stands in for a remote service. It ignores the prompt text and reads the
/// parameters and result it was built with.
pub struct OfflineNarrator {
    params: PhysicsParams,
    result: SimulationResult,
}

impl OfflineNarrator {
    pub fn new(params: &PhysicsParams, result: &SimulationResult) -> Self {
        Self { params: *params, result: result.clone() }
    }

    /// Range with drag, wind and spin removed, same launch.
    fn vacuum_range(&self) -> f64 {
        let g = self.params.gravity;
        if g <= 0.0 {
            return f64::INFINITY;
        }
        let launch = self.params.initial_state();
        let v = launch.velocity;
        let t = (v.y + (v.y * v.y + 2.0 * g * launch.position.y).sqrt()) / g;
        v.x.hypot(v.z) * t
    }
}

impl Narrator for OfflineNarrator {
    fn analyze(&self, _prompt: &str) -> Result<String, NarrativeError> {
        let r = &self.result;
        if !r.is_finite() {
            return Err(NarrativeError::Unavailable("non-finite trajectory".into()));
        }
        let stats = FlightStats::from_result(r).ok_or(NarrativeError::EmptyResponse)?;
        let p = &self.params;

        let mut text = String::new();
        if p.air_density > 0.0 && p.drag_coefficient > 0.0 {
            let ideal = self.vacuum_range();
            if ideal.is_finite() && ideal > 0.0 {
                let loss = (1.0 - r.max_range / ideal) * 100.0;
                let _ = write!(text, "Drag cost about {:.0}% of the vacuum range ({:.1} m). ", loss, ideal);
            }
        } else {
            text.push_str("Without air resistance the flight follows a clean parabola. ");
        }
        if p.wind_speed.norm() > 0.0 {
            let _ = write!(text, "Wind of {:.1} m/s shifted the path. ", p.wind_speed.norm());
        }
        if p.spin.norm() > 0.0 && p.air_density > 0.0 {
            let _ = write!(text, "Spin curved the flight by {:.2} m laterally. ", stats.lateral_drift);
        }
        let _ = write!(
            text,
            "Peak height {:.1} m at {:.2} s; impact at {:.1} m/s, {:.0}° below horizontal.",
            r.max_height, stats.apex_time, r.impact_velocity, stats.impact_angle
        );
        let efficient = (p.launch_angle - 45.0).abs() <= 10.0;
        text.push_str(if efficient {
            " The launch angle is close to range-optimal."
        } else {
            " A launch angle nearer 45° would carry further."
        });
        Ok(text)
    }

    fn name(&self) -> &str {
        "offline"
    }
}
