pub mod params;
pub mod point_mass;
pub mod state;

pub use params::{PhysicsParams, PhysicsParamsBuilder};
pub use point_mass::{acceleration, derivatives};
pub use state::{Deriv, ProjectileState};

/// Serde adapter writing `Vector3<f64>` as `{ "x": .., "y": .., "z": .. }`.
pub(crate) mod vec3 {
    use nalgebra::Vector3;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Xyz {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        z: f64,
    }

    pub fn serialize<S: Serializer>(v: &Vector3<f64>, s: S) -> Result<S::Ok, S::Error> {
        Xyz { x: v.x, y: v.y, z: v.z }.serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vector3<f64>, D::Error> {
        let Xyz { x, y, z } = Xyz::deserialize(d)?;
        Ok(Vector3::new(x, y, z))
    }
}
