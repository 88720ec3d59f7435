pub mod integrator;
pub mod result;
pub mod runner;

pub use integrator::rk4_step;
pub use result::SimulationResult;
pub use runner::simulate;
