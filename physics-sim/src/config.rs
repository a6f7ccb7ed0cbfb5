// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Configuration for the simulation host loop

use crate::diagnostics::DEFAULT_WINDOW;
use crate::error::PhysicsError;
use crate::particle::Particle;

/// Configuration for a [`ParticleWorld`](crate::world::ParticleWorld)
///
/// # Example
///
/// ```
/// use physics_sim::SimulationConfig;
///
/// let config = SimulationConfig::new()
///     .with_damping(1.0)
///     .with_parallel(false)
///     .with_diagnostics_window(32);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Velocity retained per unit of simulated time, in `(0, 1]`
    pub damping: f64,
    /// Step particles on the Rayon thread pool when the `parallel` feature is enabled
    pub parallel: bool,
    /// Whether to log warnings for suspicious timesteps (non-finite, negative
    /// or above one second) and for particles whose state becomes non-finite
    pub warn_on_suspicious_steps: bool,
    /// Number of frames averaged by the diagnostics overlay
    pub diagnostics_window: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            damping: Particle::DAMPING,
            parallel: true,
            warn_on_suspicious_steps: true,
            diagnostics_window: DEFAULT_WINDOW,
        }
    }
}

impl SimulationConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Enable or disable parallel stepping
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enable or disable warnings for suspicious timesteps and particle state
    pub fn with_step_warnings(mut self, warn: bool) -> Self {
        self.warn_on_suspicious_steps = warn;
        self
    }

    /// Set the diagnostics averaging window
    pub fn with_diagnostics_window(mut self, window: usize) -> Self {
        self.diagnostics_window = window;
        self
    }

    /// Check that every field is usable
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(PhysicsError::InvalidDamping(self.damping));
        }
        if self.diagnostics_window == 0 {
            return Err(PhysicsError::InvalidWindow);
        }
        Ok(())
    }
}
