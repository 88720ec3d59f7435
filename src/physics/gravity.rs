use nalgebra::Vector3;

/// Weight of a body of the given mass, `(0, -g * m, 0)`.
pub fn gravity_force(gravity: f64, mass: f64) -> Vector3<f64> {
    Vector3::new(0.0, -gravity * mass, 0.0)
}
