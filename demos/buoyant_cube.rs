//! Windowed demo: a size-breathing cube dropped half a length above the water.

use bevy::prelude::*;
use bevy_buoyant_cube::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Buoyant Cube".to_string(),
                resolution: (800, 600).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(BuoyancyPluginGroup)
        .add_systems(Startup, setup)
        .add_systems(Update, report_completion)
        .run();
}

fn setup(mut commands: Commands, env: Res<FluidEnvironment>, config: Res<SimConfig>) {
    // Center the camera on the canvas: world origin is the canvas top edge
    commands.spawn((
        Camera2d,
        Transform::from_xyz(0.0, -config.canvas_height / 2.0, 0.0),
    ));

    // Half a cube length above the water line, at rest
    commands.spawn(BuoyantCube::new(env.water_y - 1.5));
}

fn report_completion(mut complete: MessageReader<SimulationComplete>) {
    for message in complete.read() {
        info!("run finished after {:.1}s of simulated time", message.elapsed);
    }
}
