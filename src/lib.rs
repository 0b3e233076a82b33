//! # Bevy Buoyant Cube
//!
//! Buoyancy and gravity simulation plugin for Bevy 0.18.
//!
//! ## Features
//! - Inverse-square gravity toward the ground plane
//! - Hydrostatic buoyancy from submerged volume (none / partial / full)
//! - Size-breathing cube whose side length oscillates over time
//! - Terminal-velocity clamp and per-frame velocity damping
//! - Sprite-based scene rendering with a live density readout
//! - Gizmo force-vector visualization
//!
//! ## Quick Start
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_buoyant_cube::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(BuoyancyPluginGroup)
//!         .run();
//! }
//! ```

pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
pub mod types;


pub mod prelude {
    pub use crate::components::*;
    pub use crate::events::*;
    pub use crate::resources::*;
    pub use crate::types::*;
    pub use crate::BuoyancyPluginGroup;
    pub use crate::{BuoyancyDebugPlugin, BuoyancyScenePlugin, BuoyancySimPlugin};
}

use bevy::prelude::*;

/// Main plugin group that includes all buoyancy-simulation subsystems.
///
/// This plugin group bundles together:
/// - Physics stepping and run lifecycle
/// - Scene rendering (cube, water, ground, density label)
/// - Debug force-vector visualization
///
/// # Example
/// ```no_run
/// use bevy::prelude::*;
/// use bevy_buoyant_cube::prelude::*;
///
/// fn main() {
///     App::new()
///         .add_plugins(DefaultPlugins)
///         .add_plugins(BuoyancyPluginGroup)
///         .run();
/// }
/// ```
#[derive(Default)]
pub struct BuoyancyPluginGroup;

impl PluginGroup for BuoyancyPluginGroup {
    fn build(self) -> bevy::app::PluginGroupBuilder {
        bevy::app::PluginGroupBuilder::start::<Self>()
            .add(BuoyancySimPlugin)
            .add(BuoyancyScenePlugin)
            .add(BuoyancyDebugPlugin)
    }
}

/// Core simulation plugin (physics stepping, clock, run lifecycle).
///
/// This plugin owns the per-frame physics step of every [`components::BuoyantCube`]:
/// - Size oscillation as a function of elapsed simulation time
/// - Inverse-square gravity toward the ground plane
/// - Submersion-dependent buoyant force
/// - Velocity/position integration with terminal clamp, damping, and ground snap
///
/// It also owns the run lifecycle: the simulation steps while in
/// [`types::SimPhase::Running`] and transitions to [`types::SimPhase::Done`]
/// once the configured run duration has elapsed.
///
/// # Systems
/// - `step_cubes` - Advances the clock and integrates every cube
/// - `check_run_duration` - Transitions `Running` -> `Done` after the max run time
pub struct BuoyancySimPlugin;

impl Plugin for BuoyancySimPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<components::BuoyantCube>()
            .register_type::<resources::FluidEnvironment>()
            .register_type::<resources::SimConfig>()
            .register_type::<resources::SimClock>()
            .init_resource::<resources::FluidEnvironment>()
            .init_resource::<resources::SimConfig>()
            .init_resource::<resources::SimClock>()
            .init_state::<types::SimPhase>()
            .add_message::<events::SimulationComplete>()
            .add_systems(
                Update,
                (
                    systems::stepper::step_cubes,
                    systems::lifecycle::check_run_duration,
                )
                    .chain()
                    .run_if(in_state(types::SimPhase::Running)),
            );
    }
}

/// Scene rendering plugin (cube sprite, water, ground, density label).
///
/// Spawns the static scene (translucent water sheet, opaque ground strip) and a
/// sprite plus text label for every cube, then keeps the sprites in sync with
/// the simulation state each frame. Purely presentational; the sim plugin runs
/// fine without it (see the headless demo).
///
/// # Systems
/// - `setup_scene` - Spawns the water and ground sprites at startup
/// - `attach_cube_visuals` - Spawns a sprite and density label per new cube
/// - `sync_cube_sprites` - Repositions and resizes cube sprites from sim state
/// - `update_density_labels` - Refreshes the density readout above each cube
pub struct BuoyancyScenePlugin;

impl Plugin for BuoyancyScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, systems::scene::setup_scene).add_systems(
            Update,
            (
                systems::scene::attach_cube_visuals,
                systems::scene::sync_cube_sprites,
                systems::scene::update_density_labels,
            )
                .chain(),
        );
    }
}

/// Debug plugin for force-vector visualization.
///
/// Draws the last computed gravity (green) and buoyancy (blue) forces as line
/// segments from each cube's center, scaled by a fixed pixels-per-unit-force
/// factor. Gated by [`resources::SimConfig::debug_draw`].
pub struct BuoyancyDebugPlugin;

impl Plugin for BuoyancyDebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, systems::debug::draw_force_vectors);
    }
}
