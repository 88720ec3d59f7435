use projectile_sim::analysis::{self, CHART_DECIMATION};
use projectile_sim::io::{csv, json};
use projectile_sim::{simulate, LaunchMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mode = LaunchMode::Cannon;
    let params = mode.params();

    println!("Simulating {} ...", mode);
    let result = simulate(&params)?;

    println!("Range: {:.1} m", result.max_range);
    println!("Peak height: {:.1} m", result.max_height);
    println!("Flight time: {:.2} s", result.time_of_flight);
    println!(
        "Chart points: {}",
        analysis::chart_series(&result, CHART_DECIMATION).len()
    );

    csv::write_trajectory_file("cannon_trajectory.csv", &result.path)?;
    json::write_report_file("cannon_report.json", mode.label(), &params, &result, false)?;

    println!("Exported: cannon_trajectory.csv, cannon_report.json");
    Ok(())
}
