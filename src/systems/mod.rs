//! Systems for the buoyancy simulation.

pub mod debug;
pub mod lifecycle;
pub mod scene;
pub mod stepper;
