//! Stepper system - per-frame physics integration for buoyant cubes.

use bevy::prelude::*;

use crate::components::BuoyantCube;
use crate::resources::{FluidEnvironment, SimClock, SimConfig};

/// Advance the simulation clock and integrate every cube.
///
/// Runs in `Update` with the variable frame delta, matching a per-refresh
/// callback loop: each invocation is one step, and the damping multiplier is
/// applied once per step no matter how much wall-clock time the frame covered.
///
/// # Arguments
/// * `time` - Bevy time resource providing the frame delta
/// * `clock` - Simulation clock, advanced here before integration
/// * `env` - Environment constants (gravity field, water, ground)
/// * `config` - Simulation configuration (oscillation, clamps, damping)
/// * `query` - Cubes to integrate
pub fn step_cubes(
    time: Res<Time>,
    mut clock: ResMut<SimClock>,
    env: Res<FluidEnvironment>,
    config: Res<SimConfig>,
    mut query: Query<&mut BuoyantCube>,
) {
    let d_seconds = time.delta_secs();
    clock.advance(d_seconds);

    for mut cube in query.iter_mut() {
        integrate(&mut cube, &env, &config, clock.elapsed, d_seconds);
    }
}

/// Single explicit-Euler integration step for one cube.
///
/// Order of operations per step:
/// 1. Recompute the side length from total elapsed time (size breathing)
/// 2. Evaluate inverse-square gravity from the bottom edge
/// 3. Evaluate buoyancy from the submerged volume
/// 4. Apply the net force to velocity over `d_seconds`
/// 5. Clamp velocity to the terminal ceiling (downward only)
/// 6. Apply the per-step damping multiplier (once, independent of `d_seconds`)
/// 7. Apply velocity to position over `d_seconds`
/// 8. Snap the bottom edge onto the ground line if it crossed it; velocity is
///    deliberately left untouched by the snap
///
/// # Arguments
/// * `cube` - Cube state to mutate in place
/// * `env` - Environment constants
/// * `config` - Simulation configuration
/// * `elapsed` - Seconds since simulation start (drives the size oscillation)
/// * `d_seconds` - Seconds covered by this step
pub fn integrate(
    cube: &mut BuoyantCube,
    env: &FluidEnvironment,
    config: &SimConfig,
    elapsed: f32,
    d_seconds: f32,
) {
    cube.side_len = config.side_len_at(elapsed);

    cube.force_gravity = env.gravity_force(cube.mass, cube.bottom());
    cube.force_buoyancy = env.buoyant_force(cube.side_len, cube.y);

    let net_force = cube.force_gravity + cube.force_buoyancy;
    cube.velocity += net_force * d_seconds;
    if cube.velocity > config.terminal_velocity {
        cube.velocity = config.terminal_velocity;
    }
    // Once per step, not scaled by the delta. Frame-rate dependent on purpose.
    cube.velocity *= config.damping;

    cube.y += cube.velocity * d_seconds;
    if cube.bottom() >= env.ground_y {
        cube.y = env.ground_y - cube.side_len / 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn fixtures() -> (FluidEnvironment, SimConfig) {
        (FluidEnvironment::default(), SimConfig::default())
    }

    #[test]
    fn test_cube_above_water_falls() {
        let (env, config) = fixtures();
        let mut cube = BuoyantCube::new(env.water_y - 1.5);

        integrate(&mut cube, &env, &config, 0.0, DT);

        // Gravity-dominated: no buoyancy, downward (positive) velocity
        assert_eq!(cube.force_buoyancy, 0.0);
        assert!(cube.force_gravity > 0.0);
        assert!(cube.velocity > 0.0);
        assert!(cube.y > env.water_y - 1.5);
    }

    #[test]
    fn test_first_step_position_uses_damped_velocity() {
        let (env, config) = fixtures();
        let start_y = env.water_y - 1.5;
        let mut cube = BuoyantCube::new(start_y);

        integrate(&mut cube, &env, &config, 0.0, DT);

        // Velocity is updated (and damped) before position, so the position
        // delta is exactly the post-damping velocity over the step
        let expected = cube.velocity * DT;
        assert!((cube.y - start_y - expected).abs() < 1e-6);
    }

    #[test]
    fn test_submerged_cube_is_pushed_up() {
        let (env, config) = fixtures();
        // Two lengths under the surface, well clear of the ground
        let mut cube = BuoyantCube::new(env.water_y + 1.6);

        integrate(&mut cube, &env, &config, 0.0, DT);

        assert!(cube.force_buoyancy < 0.0);
        // Buoyancy overwhelms ~9.8 N of gravity for a 1 kg cube
        assert!(cube.force_gravity + cube.force_buoyancy < 0.0);
        assert!(cube.velocity < 0.0);
    }

    #[test]
    fn test_ground_clamp_invariant() {
        let (env, config) = fixtures();
        let mut cube = BuoyantCube::new(env.ground_y - 1.0);

        let mut elapsed = 0.0;
        for _ in 0..600 {
            elapsed += DT;
            integrate(&mut cube, &env, &config, elapsed, DT);
            assert!(
                cube.bottom() <= env.ground_y + 1e-4,
                "bottom edge {} crossed ground {}",
                cube.bottom(),
                env.ground_y
            );
        }
    }

    #[test]
    fn test_ground_snap_does_not_zero_velocity() {
        let (env, config) = fixtures();
        let mut cube = BuoyantCube::new(env.ground_y);
        cube.velocity = 50.0;

        integrate(&mut cube, &env, &config, 0.0, DT);

        // Snapped onto the ground line but still carrying (damped) velocity
        assert!((cube.bottom() - env.ground_y).abs() < 1e-5);
        assert!(cube.velocity > 0.0);
    }

    #[test]
    fn test_terminal_velocity_ceiling() {
        let (env, config) = fixtures();
        let mut cube = BuoyantCube::new(env.water_y - 2.0);
        cube.velocity = config.terminal_velocity * 2.0;

        integrate(&mut cube, &env, &config, 0.0, DT);

        // Clamp happens before damping, so the post-step bound is damped
        assert!(cube.velocity <= config.terminal_velocity * config.damping + 1e-3);
    }

    #[test]
    fn test_no_symmetric_velocity_floor() {
        let (env, config) = fixtures();
        let mut cube = BuoyantCube::new(env.water_y - 2.0);
        cube.velocity = -config.terminal_velocity * 2.0;

        integrate(&mut cube, &env, &config, 0.0, DT);

        // Upward velocity passes through the clamp untouched
        assert!(cube.velocity < -config.terminal_velocity);
    }

    #[test]
    fn test_zero_delta_step_only_damps() {
        let (env, config) = fixtures();
        let mut cube = BuoyantCube::new(env.water_y - 1.5);
        cube.velocity = 1.0;

        integrate(&mut cube, &env, &config, 0.0, 0.0);

        // No time passes: position holds, but damping still fires once
        assert_eq!(cube.y, env.water_y - 1.5);
        assert!((cube.velocity - config.damping).abs() < 1e-6);
    }

    #[test]
    fn test_side_len_recomputed_from_elapsed() {
        let (env, config) = fixtures();
        let mut cube = BuoyantCube::new(env.water_y - 1.5);
        cube.side_len = 0.0;

        integrate(&mut cube, &env, &config, 5.0, DT);

        assert!((cube.side_len - config.side_len_at(5.0)).abs() < 1e-6);
    }

    #[test]
    fn test_forces_retained_for_rendering() {
        let (env, config) = fixtures();
        let mut cube = BuoyantCube::new(env.water_y + 1.6);

        integrate(&mut cube, &env, &config, 0.0, DT);

        assert!((cube.force_gravity - env.gravity_force(cube.mass, cube.bottom())).abs() < 0.5);
        assert!(cube.force_buoyancy < 0.0);
    }
}
