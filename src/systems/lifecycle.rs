//! Lifecycle system - run-duration state machine.

use bevy::prelude::*;

use crate::events::SimulationComplete;
use crate::resources::{SimClock, SimConfig};
use crate::types::SimPhase;

/// Transition `Running` -> `Done` once the configured run duration elapses.
///
/// Runs after the stepper, gated on `SimPhase::Running`, so it fires at most
/// once; `Done` is terminal. Writes a [`SimulationComplete`] message on the
/// transition.
///
/// # Arguments
/// * `clock` - Simulation clock advanced by the stepper
/// * `config` - Configuration holding the maximum run duration
/// * `next_phase` - State transition handle
/// * `complete` - Message writer for the completion announcement
pub fn check_run_duration(
    clock: Res<SimClock>,
    config: Res<SimConfig>,
    mut next_phase: ResMut<NextState<SimPhase>>,
    mut complete: MessageWriter<SimulationComplete>,
) {
    if clock.elapsed >= config.max_run_time {
        info!(
            "simulation complete after {:.1}s, stepping stopped",
            clock.elapsed
        );
        next_phase.set(SimPhase::Done);
        complete.write(SimulationComplete {
            elapsed: clock.elapsed,
        });
    }
}
