//! Global resources for the buoyancy simulation.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

/// Global environment settings shared by every simulated cube.
///
/// Positions use simulation space: meters, `y` positive downward. The water
/// sheet extends from `water_y` to infinity below; the ground starts at
/// `ground_y`. Gravity toward the ground is modeled with the full
/// inverse-square law, offset by the planet radius so the field at the ground
/// line matches Earth's surface.
///
/// # Fields
/// * `gravity` - Signed gravitational acceleration scalar (m/s²), negative up
/// * `water_pressure` - Base water pressure used by the buoyancy formula
/// * `water_y` - Depth of the water surface line (m)
/// * `ground_y` - Depth of the ground line (m)
/// * `gravitational_constant` - Newton's G (N·m²/kg²)
/// * `earth_mass` - Attracting body mass (kg)
/// * `earth_radius` - Distance from body center to the ground line (m)
///
/// # Example
/// ```
/// use bevy_buoyant_cube::resources::FluidEnvironment;
///
/// let env = FluidEnvironment {
///     water_y: 2.0,
///     water_pressure: 15.0,
///     ..Default::default()
/// };
/// ```
#[derive(Resource, Reflect, Clone)]
#[reflect(Resource)]
pub struct FluidEnvironment {
    /// Gravitational acceleration scalar (m/s², negative = toward the surface)
    pub gravity: f32,
    /// Base water pressure for the buoyancy formula
    pub water_pressure: f32,
    /// Water surface line (m, positive down)
    pub water_y: f32,
    /// Ground line (m, positive down)
    pub ground_y: f32,
    /// Newton's gravitational constant (N·m²/kg²)
    pub gravitational_constant: f32,
    /// Mass of the attracting body (kg)
    pub earth_mass: f32,
    /// Radius of the attracting body (m)
    pub earth_radius: f32,
}

impl Default for FluidEnvironment {
    /// Creates a default environment matching an 800x600 px canvas at
    /// 100 px/m.
    ///
    /// Default values:
    /// - Gravity scalar: -10 m/s²
    /// - Water pressure: 10
    /// - Water surface at 3.0 m (300 px from the top)
    /// - Ground line at 5.5 m (50 px above the bottom)
    /// - Earth mass/radius and Newton's G at their physical values
    fn default() -> Self {
        Self {
            gravity: -10.0,
            water_pressure: 10.0,
            water_y: 3.0,
            ground_y: 5.5,
            gravitational_constant: 6.67e-11,
            earth_mass: 5.9722e24,
            earth_radius: 6.37e6,
        }
    }
}

impl FluidEnvironment {
    /// Inverse-square gravity force on a cube (signed, positive down).
    ///
    /// The distance to the body center is measured from the cube's bottom
    /// edge to the ground line, plus the body radius. Always evaluated,
    /// even below the ground line.
    ///
    /// # Arguments
    /// * `mass` - Cube mass (kg)
    /// * `bottom_y` - Cube bottom edge (m, positive down)
    ///
    /// # Returns
    /// Force magnitude pulling the cube toward the ground (positive down)
    pub fn gravity_force(&self, mass: f32, bottom_y: f32) -> f32 {
        let distance = bottom_y - self.ground_y + self.earth_radius;
        self.gravitational_constant * mass * self.earth_mass / distance.powi(2)
    }

    /// Buoyant force on a cube from its submerged volume (signed, negative up).
    ///
    /// Three cases based on where the cube sits relative to the water line:
    /// - entirely above water: zero
    /// - fully submerged: `p · g · side_len³` (full-volume displacement)
    /// - partially submerged: `p · g · side_len² · submerged_height`
    ///
    /// `g` is the signed gravity scalar, so the result is negative (upward)
    /// for a cube in water.
    ///
    /// # Arguments
    /// * `side_len` - Cube side length (m)
    /// * `y` - Cube center (m, positive down)
    ///
    /// # Returns
    /// Signed buoyant force (negative = up)
    pub fn buoyant_force(&self, side_len: f32, y: f32) -> f32 {
        let bottom_to_water = self.water_y - (y + side_len / 2.0);
        let top_to_water = self.water_y - (y - side_len / 2.0);

        if bottom_to_water >= 0.0 {
            // Entirely above the water line
            0.0
        } else if top_to_water < 0.0 {
            // Fully submerged: displaces the whole cube volume
            self.water_pressure * self.gravity * side_len.powi(3)
        } else {
            // Partially submerged: displaces side_len² times the wetted height
            self.water_pressure * self.gravity * side_len.powi(2) * (side_len - top_to_water)
        }
    }

    /// Hydrostatic gauge pressure at a depth below the water line.
    ///
    /// Not consumed by the force path (buoyancy integrates volume directly);
    /// exposed for readouts and instrumentation.
    ///
    /// # Arguments
    /// * `depth` - Depth below the water surface (m)
    pub fn gauge_pressure(&self, depth: f32) -> f32 {
        self.water_pressure * self.gravity * depth
    }
}

/// Global configuration for the buoyancy simulation.
///
/// # Fields
/// * `meters_to_pixels` - Display scale (px per simulation meter)
/// * `canvas_width` - Visible canvas width (px)
/// * `canvas_height` - Visible canvas height (px)
/// * `terminal_velocity` - Velocity ceiling applied after force integration
/// * `damping` - Velocity multiplier applied once per step
/// * `max_run_time` - Run duration before the sim transitions to `Done` (s)
/// * `size_base` - Mean of the side-length oscillation (m)
/// * `size_amplitude` - Amplitude of the side-length oscillation (m)
/// * `size_frequency` - Angular frequency of the oscillation (rad/s)
/// * `size_phase` - Phase offset of the oscillation (rad)
/// * `debug_draw` - Draw force vectors from each cube center
///
/// # Example
/// ```
/// use bevy_buoyant_cube::resources::SimConfig;
///
/// let config = SimConfig {
///     max_run_time: 30.0,
///     debug_draw: false,
///     ..Default::default()
/// };
/// ```
#[derive(Resource, Reflect, Clone)]
#[reflect(Resource)]
pub struct SimConfig {
    /// Display scale (px/m)
    pub meters_to_pixels: f32,
    /// Canvas width (px)
    pub canvas_width: f32,
    /// Canvas height (px)
    pub canvas_height: f32,
    /// Velocity ceiling (m/s, downward only; no symmetric floor)
    pub terminal_velocity: f32,
    /// Per-step velocity multiplier. Applied once per step regardless of the
    /// frame delta, so decay is frame-rate dependent.
    pub damping: f32,
    /// Run duration before the lifecycle transitions to `Done` (seconds)
    pub max_run_time: f32,
    /// Side-length oscillation mean (m)
    pub size_base: f32,
    /// Side-length oscillation amplitude (m)
    pub size_amplitude: f32,
    /// Side-length oscillation angular frequency (rad/s)
    pub size_frequency: f32,
    /// Side-length oscillation phase offset (rad)
    pub size_phase: f32,
    /// Draw gravity/buoyancy force vectors
    pub debug_draw: bool,
}

impl Default for SimConfig {
    /// Creates a default `SimConfig` for an 800x600 px canvas.
    ///
    /// Default values:
    /// - 100 px/m display scale
    /// - 10000 m/s terminal velocity
    /// - 0.8 per-step damping
    /// - 600 s run duration
    /// - Side length oscillating as `0.8 + 0.6·sin(0.2t + π/2)`
    /// - Force vectors enabled
    fn default() -> Self {
        Self {
            meters_to_pixels: 100.0,
            canvas_width: 800.0,
            canvas_height: 600.0,
            terminal_velocity: 10000.0,
            damping: 0.8,
            max_run_time: 600.0,
            size_base: 0.8,
            size_amplitude: 0.6,
            size_frequency: 0.2,
            size_phase: FRAC_PI_2,
            debug_draw: true,
        }
    }
}

impl SimConfig {
    /// Side length at `t` seconds since simulation start (m).
    ///
    /// `size_base + size_amplitude · sin(size_frequency · t + size_phase)`;
    /// with defaults this breathes between 0.2 and 1.4 m.
    pub fn side_len_at(&self, t: f32) -> f32 {
        self.size_base + self.size_amplitude * (self.size_frequency * t + self.size_phase).sin()
    }

    /// Pixels per unit of force when drawing force vectors.
    pub fn force_vector_scale(&self) -> f32 {
        self.meters_to_pixels / 25.0
    }
}

/// Simulation clock, advanced by the stepper each frame.
///
/// Tracks time since simulation start independently of `Time` so the sim can
/// be stepped deterministically in tests and stops accumulating once the run
/// completes.
#[derive(Resource, Reflect, Clone, Default)]
#[reflect(Resource)]
pub struct SimClock {
    /// Seconds since simulation start
    pub elapsed: f32,
}

impl SimClock {
    /// Advance the clock by a frame delta.
    ///
    /// # Arguments
    /// * `delta` - Frame delta in seconds
    pub fn advance(&mut self, delta: f32) {
        self.elapsed += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_force_near_surface_is_earthlike() {
        let env = FluidEnvironment::default();
        // Cube resting on the ground line: field should be ~g at the surface
        let force = env.gravity_force(1.0, env.ground_y);
        assert!((force - 9.81).abs() < 0.1, "got {force}");
    }

    #[test]
    fn test_gravity_force_always_positive_down() {
        let env = FluidEnvironment::default();
        assert!(env.gravity_force(1.0, 0.0) > 0.0);
        assert!(env.gravity_force(1.0, env.ground_y + 1.0) > 0.0);
    }

    #[test]
    fn test_buoyancy_zero_above_water() {
        let env = FluidEnvironment::default();
        // Bottom edge exactly on the water line still counts as above
        assert_eq!(env.buoyant_force(1.0, env.water_y - 0.5), 0.0);
        assert_eq!(env.buoyant_force(1.0, env.water_y - 2.0), 0.0);
    }

    #[test]
    fn test_buoyancy_fully_submerged_unit_cube() {
        let env = FluidEnvironment::default();
        // p=10, g=-10, len=1 fully under water: 10 * -10 * 1 = -100
        let force = env.buoyant_force(1.0, env.water_y + 2.0);
        assert!((force - -100.0).abs() < 1e-3, "got {force}");
    }

    #[test]
    fn test_buoyancy_partial_scales_with_wetted_height() {
        let env = FluidEnvironment::default();
        // Center on the water line: half the cube is wet
        let half_wet = env.buoyant_force(1.0, env.water_y);
        assert!((half_wet - -50.0).abs() < 1e-3, "got {half_wet}");

        // A quarter submerged
        let quarter_wet = env.buoyant_force(1.0, env.water_y - 0.25);
        assert!((quarter_wet - -25.0).abs() < 1e-3, "got {quarter_wet}");
    }

    #[test]
    fn test_gauge_pressure_linear_in_depth() {
        let env = FluidEnvironment::default();
        assert_eq!(env.gauge_pressure(0.0), 0.0);
        assert!((env.gauge_pressure(2.0) - -200.0).abs() < 1e-3);
    }

    #[test]
    fn test_side_len_oscillation_range() {
        let config = SimConfig::default();
        // Phase π/2 means the cube starts at its maximum size
        assert!((config.side_len_at(0.0) - 1.4).abs() < 1e-5);

        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for i in 0..=1000 {
            let len = config.side_len_at(i as f32 * 0.1);
            min = min.min(len);
            max = max.max(len);
        }
        assert!(min >= 0.2 - 1e-4);
        assert!(max <= 1.4 + 1e-4);
    }

    #[test]
    fn test_clock_accumulates() {
        let mut clock = SimClock::default();
        clock.advance(0.016);
        clock.advance(0.016);
        assert!((clock.elapsed - 0.032).abs() < 1e-6);
    }
}
