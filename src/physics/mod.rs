pub mod aerodynamics;
pub mod gravity;

pub use aerodynamics::{drag_force, magnus_force};
pub use gravity::gravity_force;
