use bevy::prelude::*;

use crate::components::BuoyantCube;
use crate::resources::SimConfig;

/// Draw debug gizmos for the forces acting on each cube.
///
/// Draws the last computed gravity force (green) and buoyant force (blue) as
/// line segments from the cube center, scaled by a fixed pixels-per-unit-force
/// factor. Positive (downward) forces point down on screen.
pub fn draw_force_vectors(
    mut gizmos: Gizmos,
    config: Res<SimConfig>,
    query: Query<&BuoyantCube>,
) {
    if !config.debug_draw {
        return;
    }

    let scale = config.force_vector_scale();
    for cube in query.iter() {
        let center = Vec2::new(0.0, -cube.y * config.meters_to_pixels);

        // Gravity (green)
        gizmos.line_2d(
            center,
            center + Vec2::new(0.0, -cube.force_gravity * scale),
            Color::srgb(0.0, 1.0, 0.0),
        );
        // Buoyancy (blue)
        gizmos.line_2d(
            center,
            center + Vec2::new(0.0, -cube.force_buoyancy * scale),
            Color::srgb(0.0, 0.0, 1.0),
        );
    }
}
