//! Shared types for the buoyancy simulation.

use bevy::prelude::*;

/// Run phase of the simulation.
///
/// The sim steps while `Running` and transitions to `Done` once the configured
/// run duration has elapsed. `Done` is terminal: no further stepping occurs,
/// and the last rendered frame stays on screen.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SimPhase {
    /// Stepper and renderer run every frame
    #[default]
    Running,
    /// Run duration exceeded; stepping has stopped
    Done,
}
