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
//! Numerical integration methods for particle simulation
//!
//! The [`Integrator`] trait is the seam between a host loop and the update
//! rule applied to each particle. The crate ships one implementation,
//! [`SemiImplicitEuler`], which wraps [`Particle::integrate_with_damping`]
//! with a configured damping factor.
//!
//! # Timestep Guidelines
//!
//! Integrators accept any `dt`. [`Integrator::validate_timestep`] is advisory:
//! hosts may call it to log suspicious steps but must not use it to reject
//! them.
//!
//! - Negative: runs the simulation backwards (not a true inverse because of damping)
//! - Zero: no change
//! - Above one second: large error for anything but constant acceleration

use crate::error::PhysicsError;
use crate::particle::Particle;

mod euler;

pub use euler::SemiImplicitEuler;

/// Sum the kinetic energy of a set of particles
pub fn calculate_total_kinetic_energy<'a, I>(particles: I) -> f64
where
    I: IntoIterator<Item = &'a Particle>,
{
    particles.into_iter().map(Particle::energy).sum()
}

/// Trait for numerical integration methods
///
/// Integrators advance a single particle in place. They must be pure
/// functions of the particle state and `dt` so that independent particles
/// can be stepped on different threads.
pub trait Integrator: Send + Sync {
    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Velocity retained per unit of simulated time
    fn damping(&self) -> f64;

    /// Advance one particle by `dt`
    fn integrate(&self, particle: &mut Particle, dt: f64);

    /// Check a timestep for numerical trouble
    ///
    /// Returns the first problem found. A failed check is a warning, not a
    /// reason to skip the step.
    fn validate_timestep(&self, dt: f64) -> Result<(), PhysicsError> {
        if !dt.is_finite() {
            return Err(PhysicsError::NonFiniteTimestep(dt));
        }
        if dt < 0.0 {
            return Err(PhysicsError::NegativeTimestep(dt));
        }
        if dt > 1.0 {
            return Err(PhysicsError::LargeTimestep(dt));
        }
        Ok(())
    }
}
