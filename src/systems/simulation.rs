//! Simulation system
//!
//! Advances the scene and the observer by a fixed time step:
//! - Object spin
//! - Observer spin about its own position

use hyperview_math::Transform4D;

use crate::config::{placement, spin_in_place, PlaneAngles, RunConfig};
use crate::scene::Scene;

/// Fixed-step driver for scene and observer motion
pub struct SimulationSystem {
    observer: Transform4D,
    observer_spin: PlaneAngles,
    dt: f32,
    frame: u64,
}

impl SimulationSystem {
    /// Create a simulation from the run configuration
    pub fn new(config: &RunConfig) -> Self {
        Self {
            observer: placement(config.observer_position, &[0.0; 6], 1.0),
            observer_spin: config.observer_spin,
            dt: config.dt,
            frame: 0,
        }
    }

    /// Current observer transform
    pub fn observer(&self) -> &Transform4D {
        &self.observer
    }

    /// Frames simulated so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Simulated time in seconds
    pub fn elapsed(&self) -> f32 {
        self.frame as f32 * self.dt
    }

    /// Advance one fixed step
    pub fn update(&mut self, scene: &mut Scene) {
        scene.update(self.dt);

        spin_in_place(&mut self.observer, &self.observer_spin, self.dt);
        self.frame += 1;
    }
}
