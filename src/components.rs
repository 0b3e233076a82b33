//! Core components for the buoyancy simulation.

use bevy::prelude::*;

/// A rigid cube subject to gravity and buoyancy.
///
/// Simulation state lives in simulation space: meters, with `y` increasing
/// downward from the top of the canvas (the convention of a 2D raster surface).
/// The scene systems map this into Bevy world coordinates for display; the
/// stepper never touches a `Transform`.
///
/// # Fields
/// * `y` - Vertical center position in meters (positive down)
/// * `velocity` - Vertical velocity in meters per second (positive down)
/// * `mass` - Mass in kilograms
/// * `side_len` - Current side length in meters; oscillates over time
/// * `force_gravity` - Last computed gravity force, retained for rendering
/// * `force_buoyancy` - Last computed buoyant force, retained for rendering
///
/// # Example
/// ```
/// use bevy_buoyant_cube::components::BuoyantCube;
///
/// let cube = BuoyantCube::new(1.5).with_mass(1.0);
/// assert_eq!(cube.velocity, 0.0);
/// ```
#[derive(Component, Reflect, Clone)]
#[reflect(Component)]
pub struct BuoyantCube {
    /// Vertical center position (m, positive down)
    pub y: f32,
    /// Vertical velocity (m/s, positive down)
    pub velocity: f32,
    /// Mass (kg)
    pub mass: f32,
    /// Current side length (m)
    pub side_len: f32,
    /// Last computed gravity force (signed, positive down)
    pub force_gravity: f32,
    /// Last computed buoyant force (signed, positive down)
    pub force_buoyancy: f32,
}

impl Default for BuoyantCube {
    /// Creates a 1 m, 1 kg cube at rest at the origin.
    fn default() -> Self {
        Self {
            y: 0.0,
            velocity: 0.0,
            mass: 1.0,
            side_len: 1.0,
            force_gravity: 0.0,
            force_buoyancy: 0.0,
        }
    }
}

impl BuoyantCube {
    /// Creates a cube at rest at the given vertical position.
    ///
    /// # Arguments
    /// * `y` - Vertical center position in meters (positive down)
    ///
    /// # Returns
    /// A new `BuoyantCube` with unit mass and unit side length
    pub fn new(y: f32) -> Self {
        Self { y, ..Default::default() }
    }

    /// Builder pattern: set mass
    ///
    /// # Arguments
    /// * `mass` - Mass in kilograms
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Y coordinate of the cube's bottom edge (m, positive down).
    pub fn bottom(&self) -> f32 {
        self.y + self.side_len / 2.0
    }

    /// Y coordinate of the cube's top edge (m, positive down).
    pub fn top(&self) -> f32 {
        self.y - self.side_len / 2.0
    }

    /// Current density, `mass / side_len³` (kg/m³).
    ///
    /// Varies over time because the side length oscillates while the mass
    /// stays fixed.
    pub fn density(&self) -> f32 {
        self.mass / self.side_len.powi(3)
    }
}

/// Marker for the sprite entity that displays a [`BuoyantCube`].
///
/// Points back at the simulation entity so the scene systems can read its
/// state without the sprite and the sim sharing one entity.
#[derive(Component)]
pub struct CubeSprite {
    /// The simulated cube this sprite displays
    pub cube: Entity,
}

/// Marker for the text entity showing a cube's density readout.
#[derive(Component)]
pub struct DensityLabel {
    /// The simulated cube this label describes
    pub cube: Entity,
}
