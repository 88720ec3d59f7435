use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use nalgebra::Vector3;

use projectile_sim::analysis::{self, ChartPoint, FlightStats, CHART_DECIMATION};
use projectile_sim::io::{csv, json};
use projectile_sim::narrative::{self, OfflineNarrator};
use projectile_sim::dynamics::state::TIME_STEP;
use projectile_sim::{simulate, LaunchMode, PhysicsParams, SimulationResult};

#[derive(Parser)]
#[command(name = "projectile-sim")]
#[command(version)]
#[command(about = "Projectile flight simulator: gravity, drag, wind and Magnus spin", long_about = None)]
struct Cli {
    /// Launch preset (gun, cannon, kick, throw)
    #[arg(short = 'm', long, value_enum, default_value_t = LaunchMode::Cannon)]
    mode: LaunchMode,

    /// JSON parameter file (camelCase fields); replaces the preset
    #[arg(short = 'p', long)]
    params: Option<PathBuf>,

    /// Initial speed (m/s)
    #[arg(short = 'v', long)]
    velocity: Option<f64>,

    /// Elevation (degrees)
    #[arg(short = 'a', long, allow_hyphen_values = true)]
    angle: Option<f64>,

    /// Heading around the vertical axis (degrees)
    #[arg(long)]
    azimuth: Option<f64>,

    /// Projectile mass (kg)
    #[arg(long)]
    mass: Option<f64>,

    /// Projectile radius (m)
    #[arg(long)]
    radius: Option<f64>,

    /// Drag coefficient
    #[arg(long)]
    cd: Option<f64>,

    /// Gravity (m/s^2)
    #[arg(long, allow_hyphen_values = true)]
    gravity: Option<f64>,

    /// Air density (kg/m^3)
    #[arg(long)]
    air_density: Option<f64>,

    /// Wind velocity as x,y,z (m/s)
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    wind: Option<Vector3<f64>>,

    /// Spin as x,y,z (rad/s)
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    spin: Option<Vector3<f64>>,

    /// Export trajectory to CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Export report to JSON (includes the full path)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print flight commentary
    #[arg(long)]
    narrate: bool,

    /// Print the commentary prompt
    #[arg(long)]
    show_prompt: bool,
}

fn parse_vec3(s: &str) -> Result<Vector3<f64>, String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|c| c.trim().parse::<f64>().map_err(|e| format!("`{}`: {}", c.trim(), e)))
        .collect::<Result<_, _>>()?;
    match parts.as_slice() {
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        _ => Err(format!("expected x,y,z, got {} component(s)", parts.len())),
    }
}

impl Cli {
    fn resolve_params(&self) -> Result<PhysicsParams, Box<dyn Error>> {
        let mut p = match &self.params {
            Some(path) => json::read_params_file(path)?,
            None => self.mode.params(),
        };
        if let Some(v) = self.velocity { p.initial_velocity = v; }
        if let Some(v) = self.angle { p.launch_angle = v; }
        if let Some(v) = self.azimuth { p.launch_azimuth = v; }
        if let Some(v) = self.mass { p.mass = v; }
        if let Some(v) = self.radius { p.radius = v; }
        if let Some(v) = self.cd { p.drag_coefficient = v; }
        if let Some(v) = self.gravity { p.gravity = v; }
        if let Some(v) = self.air_density { p.air_density = v; }
        if let Some(v) = self.wind { p.wind_speed = v; }
        if let Some(v) = self.spin { p.spin = v; }
        Ok(p)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let params = cli.resolve_params()?;

    for field in params.outside_ui_ranges() {
        eprintln!("warning: {} is outside the usual control range", field);
    }

    let result = simulate(&params)?;
    let mode = if cli.params.is_some() { "CUSTOM" } else { cli.mode.label() };

    print_report(mode, &params, &result);

    if cli.show_prompt {
        println!("  Commentary Prompt");
        println!("  ──────────────────────────────────────────────────────────────────");
        for line in narrative::build_prompt(&params, &result, mode).lines() {
            println!("  {}", line);
        }
        println!();
    }

    if cli.narrate {
        let narrator = OfflineNarrator::new(&params, &result);
        println!("  Flight Analysis");
        println!("  ──────────────────────────────────────────────────────────────────");
        println!("  {}", narrative::narrate(&narrator, &params, &result, mode));
        println!();
    }

    if let Some(path) = &cli.csv {
        csv::write_trajectory_file(path, &result.path)?;
        println!("  Exported trajectory: {}", path.display());
    }
    if let Some(path) = &cli.json {
        json::write_report_file(path, mode, &params, &result, true)?;
        println!("  Exported report: {}", path.display());
    }

    Ok(())
}

/// Chart rows thinned to about 30, without the impact sample (printed on
/// its own line).
fn table_rows(r: &SimulationResult) -> Vec<ChartPoint> {
    let mut series = analysis::chart_series(r, CHART_DECIMATION);
    if r.path.len().checked_sub(1).is_some_and(|i| i % CHART_DECIMATION == 0) {
        series.pop();
    }
    let last = series.len().saturating_sub(1);
    let interval = (series.len() / 30).max(1);
    series
        .into_iter()
        .enumerate()
        .filter(|(i, _)| i % interval == 0 || *i == last)
        .map(|(_, pt)| pt)
        .collect()
}

fn print_report(mode: &str, p: &PhysicsParams, r: &SimulationResult) {
    println!();
    println!("====================================================================");
    println!("  PROJECTILE FLIGHT SIMULATION — {}", mode);
    println!("====================================================================");
    println!();
    println!("  Launch Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Velocity:      {:>8.1} m/s   Angle:        {:>8.1} deg",
        p.initial_velocity, p.launch_angle
    );
    println!(
        "  Azimuth:       {:>8.1} deg   Mass:         {:>8.3} kg",
        p.launch_azimuth, p.mass
    );
    println!(
        "  Radius:        {:>8.4} m     Cd:           {:>8.3}",
        p.radius, p.drag_coefficient
    );
    println!(
        "  Gravity:       {:>8.2} m/s^2 Air density:  {:>8.3} kg/m^3",
        p.gravity, p.air_density
    );
    println!(
        "  Wind:          ({:.1}, {:.1}, {:.1}) m/s",
        p.wind_speed.x, p.wind_speed.y, p.wind_speed.z
    );
    println!(
        "  Spin:          ({:.1}, {:.1}, {:.1}) rad/s",
        p.spin.x, p.spin.y, p.spin.z
    );
    println!();

    println!("  Performance Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Max range:     {:>8.2} m", r.max_range);
    println!("  Max height:    {:>8.2} m", r.max_height);
    println!("  Flight time:   {:>8.2} s", r.time_of_flight);
    println!("  Impact speed:  {:>8.2} m/s", r.impact_velocity);
    if let Some(stats) = FlightStats::from_result(r) {
        println!(
            "  Apex at:       {:>8.2} s     Impact angle: {:>8.1} deg",
            stats.apex_time, stats.impact_angle
        );
        println!(
            "  Max speed:     {:>8.2} m/s   Drift (z):    {:>8.2} m",
            stats.max_speed, stats.lateral_drift
        );
    }
    if !r.is_finite() {
        println!("  (non-finite values: check the launch parameters)");
    }
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (chart projection, thinned to ~30 rows)
    // -----------------------------------------------------------------------
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  {:>7}  {:>10}  {:>10}", "t (s)", "height (m)", "dist (m)");
    println!("  {}", "─".repeat(33));

    for pt in table_rows(r) {
        println!("  {:>7.2}  {:>10.2}  {:>10.2}", pt.time, pt.height, pt.distance);
    }
    if let Some(impact) = r.impact() {
        println!(
            "  {:>7.2}  {:>10.2}  {:>10.2}   IMPACT",
            impact.time,
            impact.position.y,
            impact.horizontal_distance()
        );
    }

    println!();
    println!("  Simulation: {} samples, dt={} s", r.path.len(), TIME_STEP);
    println!("====================================================================");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("projectile-sim").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn vec3_accepts_three_components() {
        assert_eq!(parse_vec3("1,2,3"), Ok(Vector3::new(1.0, 2.0, 3.0)));
        assert_eq!(parse_vec3(" -5, 0 ,2.5"), Ok(Vector3::new(-5.0, 0.0, 2.5)));
    }

    #[test]
    fn vec3_rejects_wrong_count_and_bad_numbers() {
        assert!(parse_vec3("1,2").unwrap_err().contains("2 component"));
        assert!(parse_vec3("1,2,3,4").is_err());
        assert!(parse_vec3("1,north,3").unwrap_err().contains("`north`"));
        assert!(parse_vec3("").is_err());
    }

    #[test]
    fn negative_vectors_parse_from_the_command_line() {
        let c = cli(&["--wind", "-5,0,2", "--spin", "-1,-1,-1", "--angle", "-10"]);
        assert_eq!(c.wind, Some(Vector3::new(-5.0, 0.0, 2.0)));
        assert_eq!(c.spin, Some(Vector3::new(-1.0, -1.0, -1.0)));
        assert_eq!(c.angle, Some(-10.0));
    }

    #[test]
    fn mode_defaults_to_cannon() {
        let p = cli(&[]).resolve_params().unwrap();
        assert_eq!(p, LaunchMode::Cannon.params());
        assert_eq!(cli(&["-m", "kick"]).mode, LaunchMode::Kick);
        assert!(Cli::try_parse_from(["projectile-sim", "--mode", "mortar"]).is_err());
    }

    #[test]
    fn flags_override_the_preset() {
        let p = cli(&["--mode", "throw", "-v", "12", "--cd", "0", "--wind", "1,0,0"])
            .resolve_params()
            .unwrap();
        let base = LaunchMode::Throw.params();
        assert_eq!(p.initial_velocity, 12.0);
        assert_eq!(p.drag_coefficient, 0.0);
        assert_eq!(p.wind_speed, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(p.mass, base.mass);
        assert_eq!(p.spin, base.spin);
    }

    #[test]
    fn params_file_replaces_mode_and_flags_win_over_file() {
        let path = std::env::temp_dir().join(format!("projectile-sim-cli-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "mass": 2.5, "initialVelocity": 60, "launchAngle": 20 }"#).unwrap();
        let file = path.to_str().unwrap();

        let p = cli(&["--mode", "gun", "--params", file, "--angle", "35"]).resolve_params();
        std::fs::remove_file(&path).unwrap();
        let p = p.unwrap();

        assert_eq!(p.mass, 2.5);
        assert_eq!(p.initial_velocity, 60.0);
        assert_eq!(p.launch_angle, 35.0);
        // unspecified fields come from the cannon defaults, not the gun preset
        assert_eq!(p.radius, LaunchMode::Cannon.params().radius);
    }

    #[test]
    fn table_never_repeats_the_impact_sample() {
        for mode in LaunchMode::ALL {
            let r = simulate(&mode.params()).unwrap();
            let rows = table_rows(&r);
            let impact = r.impact().unwrap();
            assert!(rows.iter().all(|pt| pt.time < impact.time), "{}", mode);
            assert_eq!(rows[0].time, 0.0);
        }
        // 251 samples: the impact falls on a chart row
        let kick = simulate(&LaunchMode::Kick.params()).unwrap();
        let rows = table_rows(&kick);
        assert!(rows.last().unwrap().height >= 0.0);
    }
}
