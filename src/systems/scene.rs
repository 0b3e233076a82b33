//! Scene systems - sprite rendering of the simulation state.
//!
//! Simulation space is meters with y down; Bevy world space is pixels with y
//! up. The mapping is `world = (0, -sim_y * meters_to_pixels)`, with the scene
//! horizontally centered on x = 0.

use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::components::{BuoyantCube, CubeSprite, DensityLabel};
use crate::resources::{FluidEnvironment, SimConfig};

/// Opaque red, matching `rgba(180, 20, 20, 1.0)`.
pub const CUBE_COLOR: Color = Color::srgb(180.0 / 255.0, 20.0 / 255.0, 20.0 / 255.0);
/// Translucent blue, matching `rgba(20, 10, 230, 0.2)`.
pub const WATER_COLOR: Color = Color::srgba(20.0 / 255.0, 10.0 / 255.0, 230.0 / 255.0, 0.2);
/// Opaque dark orange, matching `rgba(150, 70, 20, 1.0)`.
pub const GROUND_COLOR: Color = Color::srgb(150.0 / 255.0, 70.0 / 255.0, 20.0 / 255.0);

// Z layering: water overdraws the cube (it is translucent), text sits on top.
const CUBE_Z: f32 = 1.0;
const WATER_Z: f32 = 2.0;
const GROUND_Z: f32 = 2.5;
const LABEL_Z: f32 = 3.0;

/// Spawn the static scene: the water sheet and the ground strip.
///
/// Both span the full canvas width and run from their surface line down to the
/// bottom of the canvas.
///
/// # Arguments
/// * `commands` - Commands for spawning scene entities
/// * `env` - Environment (water/ground line positions)
/// * `config` - Display configuration (canvas size, scale)
pub fn setup_scene(mut commands: Commands, env: Res<FluidEnvironment>, config: Res<SimConfig>) {
    let water_top_px = env.water_y * config.meters_to_pixels;
    let water_depth_px = config.canvas_height - water_top_px;
    commands.spawn((
        Sprite {
            color: WATER_COLOR,
            custom_size: Some(Vec2::new(config.canvas_width, water_depth_px)),
            ..default()
        },
        Transform::from_xyz(0.0, -(water_top_px + water_depth_px / 2.0), WATER_Z),
        Name::new("Water"),
    ));

    let ground_top_px = env.ground_y * config.meters_to_pixels;
    let ground_depth_px = config.canvas_height - ground_top_px;
    commands.spawn((
        Sprite {
            color: GROUND_COLOR,
            custom_size: Some(Vec2::new(config.canvas_width, ground_depth_px)),
            ..default()
        },
        Transform::from_xyz(0.0, -(ground_top_px + ground_depth_px / 2.0), GROUND_Z),
        Name::new("Ground"),
    ));
}

/// Spawn a sprite and density label for every newly added cube.
///
/// Visuals live on their own entities, pointing back at the sim entity, so the
/// sim plugin stays usable without any rendering attached.
pub fn attach_cube_visuals(
    mut commands: Commands,
    config: Res<SimConfig>,
    cubes: Query<(Entity, &BuoyantCube), Added<BuoyantCube>>,
) {
    for (entity, cube) in cubes.iter() {
        let side_px = cube.side_len * config.meters_to_pixels;
        commands.spawn((
            Sprite {
                color: CUBE_COLOR,
                custom_size: Some(Vec2::splat(side_px)),
                ..default()
            },
            Transform::from_xyz(0.0, -cube.y * config.meters_to_pixels, CUBE_Z),
            CubeSprite { cube: entity },
            Name::new("Cube"),
        ));

        commands.spawn((
            Text2d::new(String::new()),
            TextFont {
                font_size: 24.0,
                ..default()
            },
            TextColor(CUBE_COLOR),
            Anchor::BOTTOM_LEFT,
            Transform::from_xyz(0.0, 0.0, LABEL_Z),
            DensityLabel { cube: entity },
            Name::new("Density Label"),
        ));
    }
}

/// Reposition and resize cube sprites from the simulation state.
pub fn sync_cube_sprites(
    config: Res<SimConfig>,
    cubes: Query<&BuoyantCube>,
    mut sprites: Query<(&CubeSprite, &mut Sprite, &mut Transform)>,
) {
    for (link, mut sprite, mut transform) in sprites.iter_mut() {
        let Ok(cube) = cubes.get(link.cube) else {
            continue;
        };
        sprite.custom_size = Some(Vec2::splat(cube.side_len * config.meters_to_pixels));
        transform.translation.y = -cube.y * config.meters_to_pixels;
    }
}

/// Refresh the density readout anchored at each cube's top-left corner.
///
/// Shows `mass / side_len³` truncated (not rounded) to 4 decimal places.
pub fn update_density_labels(
    config: Res<SimConfig>,
    cubes: Query<&BuoyantCube>,
    mut labels: Query<(&DensityLabel, &mut Text2d, &mut Transform)>,
) {
    for (link, mut text, mut transform) in labels.iter_mut() {
        let Ok(cube) = cubes.get(link.cube) else {
            continue;
        };
        text.0 = format!("Density = {}", truncate_4(cube.density()));
        transform.translation.x = -cube.side_len / 2.0 * config.meters_to_pixels;
        transform.translation.y = -cube.top() * config.meters_to_pixels;
    }
}

/// Truncate toward zero at 4 decimal places.
fn truncate_4(value: f32) -> f32 {
    (value * 1e4).trunc() / 1e4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_drops_digits_without_rounding() {
        assert_eq!(truncate_4(0.123_49), 0.1234);
        assert_eq!(truncate_4(1.0), 1.0);
        assert_eq!(truncate_4(0.000_09), 0.0);
    }
}
