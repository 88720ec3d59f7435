pub mod analysis;
pub mod dynamics;
pub mod error;
pub mod io;
pub mod narrative;
pub mod physics;
pub mod presets;
pub mod sim;

pub use dynamics::{PhysicsParams, PhysicsParamsBuilder, ProjectileState};
pub use error::{ConfigError, IoError, NarrativeError};
pub use presets::LaunchMode;
pub use sim::{simulate, SimulationResult};
