//! Events for the buoyancy simulation.
//!
//! Note: In Bevy 0.18, buffered events use the `Message` trait instead of `Event`.

use bevy::ecs::message::Message;

/// Event fired once when the simulation's run duration elapses.
///
/// Written by the lifecycle system on the `Running` -> `Done` transition so
/// host apps can react (quit, show a summary, restart) without polling state.
///
/// # Fields
/// * `elapsed` - Total simulated time at completion, in seconds
#[derive(Message, Clone, Debug)]
pub struct SimulationComplete {
    /// Total simulated time at completion (seconds)
    pub elapsed: f32,
}
