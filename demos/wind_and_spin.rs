use nalgebra::Vector3;
use projectile_sim::{simulate, LaunchMode, PhysicsParams};

/// Sweep crosswind and sidespin on a kicked football and compare drift.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base = LaunchMode::Kick.params();

    println!("{:>12}  {:>12}  {:>10}  {:>10}", "wind z", "spin y", "range", "drift z");
    for wind_z in [-5.0, 0.0, 5.0] {
        for spin_y in [-10.0, 0.0, 10.0] {
            let params = PhysicsParams {
                wind_speed: Vector3::new(0.0, 0.0, wind_z),
                spin: Vector3::new(0.0, spin_y, base.spin.z),
                ..base
            };
            let r = simulate(&params)?;
            let drift = r.impact().map_or(0.0, |s| s.position.z);
            println!(
                "{:>12.1}  {:>12.1}  {:>10.2}  {:>10.2}",
                wind_z, spin_y, r.max_range, drift
            );
        }
    }
    Ok(())
}
