//! Headless demo: steps the simulation without any rendering attached.

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy_buoyant_cube::prelude::*;
use std::time::Duration;

fn main() {
    println!("Starting headless buoyancy simulation...");
    println!("Running for 5 simulated seconds at 60 Hz...");

    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
        )
        .add_plugins(StatesPlugin)
        .add_plugins(BuoyancySimPlugin)
        // Skip scene and debug plugins (headless)
        .insert_resource(SimConfig {
            max_run_time: 5.0,
            ..Default::default()
        })
        .add_systems(Startup, setup_simulation)
        .add_systems(Update, (print_progress, exit_when_complete))
        .run();
}

fn setup_simulation(mut commands: Commands, env: Res<FluidEnvironment>) {
    println!("\n[SETUP] Spawning cube {:.1}m above the water line...", 1.5);
    commands.spawn((BuoyantCube::new(env.water_y - 1.5), Name::new("Test Cube")));
}

fn print_progress(
    clock: Res<SimClock>,
    env: Res<FluidEnvironment>,
    query: Query<&BuoyantCube>,
    mut timer: Local<f32>,
    time: Res<Time>,
) {
    *timer += time.delta_secs();
    if *timer < 1.0 {
        return;
    }
    *timer = 0.0;

    for cube in query.iter() {
        let regime = if cube.bottom() < env.water_y {
            "in air"
        } else if cube.top() > env.water_y {
            "submerged"
        } else {
            "at surface"
        };
        println!(
            "[INFO] t={:.1}s y={:.3}m v={:.3}m/s len={:.2}m density={:.4} ({})",
            clock.elapsed,
            cube.y,
            cube.velocity,
            cube.side_len,
            cube.density(),
            regime
        );
    }
}

fn exit_when_complete(mut complete: MessageReader<SimulationComplete>) {
    for message in complete.read() {
        println!("[FINISHED] Simulation complete at t={:.1}s.", message.elapsed);
        std::process::exit(0);
    }
}
