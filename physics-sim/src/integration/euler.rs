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
//! Semi-implicit Euler integrator with exponential velocity damping
//!
//! # Algorithm
//!
//! ```text
//! x(t + dt) = x(t) + v(t)*dt + 0.5*a*dt²
//! v'        = v(t) * damping^dt
//! v(t + dt) = v' + a*dt
//! ```
//!
//! Position uses the velocity from before the step. Damping is raised to the
//! power `dt`, so the decay over one second is the same whatever the step
//! size. Acceleration is treated as constant over the step.

use crate::error::PhysicsError;
use crate::particle::Particle;
use super::Integrator;

/// Damped semi-implicit Euler integrator
///
/// # Example
///
/// ```
/// use physics_sim::integration::{Integrator, SemiImplicitEuler};
///
/// let integrator = SemiImplicitEuler::new(0.99);
/// assert_eq!(integrator.damping(), 0.99);
/// assert_eq!(SemiImplicitEuler::undamped().damping(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemiImplicitEuler {
    damping: f64,
}

impl SemiImplicitEuler {
    /// Create a new integrator with the given damping factor
    ///
    /// # Panics
    ///
    /// Panics if damping is outside `(0, 1]` or NaN. For fallible
    /// construction, use `try_new`.
    pub fn new(damping: f64) -> Self {
        assert!(
            damping > 0.0 && damping <= 1.0,
            "Damping must be in (0, 1]"
        );
        SemiImplicitEuler { damping }
    }

    /// Try to create a new integrator with the given damping factor
    pub fn try_new(damping: f64) -> Result<Self, PhysicsError> {
        if damping > 0.0 && damping <= 1.0 {
            Ok(SemiImplicitEuler { damping })
        } else {
            Err(PhysicsError::InvalidDamping(damping))
        }
    }

    /// Create an integrator that does not damp velocity
    pub fn undamped() -> Self {
        SemiImplicitEuler { damping: 1.0 }
    }
}

impl Default for SemiImplicitEuler {
    fn default() -> Self {
        SemiImplicitEuler::new(Particle::DAMPING)
    }
}

impl Integrator for SemiImplicitEuler {
    fn name(&self) -> &str {
        "Semi-implicit Euler"
    }

    fn damping(&self) -> f64 {
        self.damping
    }

    fn integrate(&self, particle: &mut Particle, dt: f64) {
        particle.integrate_with_damping(dt, self.damping);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector2D;

    #[test]
    fn test_default_matches_particle_damping() {
        let integrator = SemiImplicitEuler::default();
        assert_eq!(integrator.damping(), Particle::DAMPING);
        assert_eq!(integrator.name(), "Semi-implicit Euler");
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert!(SemiImplicitEuler::try_new(1.0).is_ok());
        assert_eq!(
            SemiImplicitEuler::try_new(0.0),
            Err(PhysicsError::InvalidDamping(0.0))
        );
        assert_eq!(
            SemiImplicitEuler::try_new(1.5),
            Err(PhysicsError::InvalidDamping(1.5))
        );
        assert!(SemiImplicitEuler::try_new(f64::NAN).is_err());
    }

    #[test]
    #[should_panic(expected = "Damping must be in (0, 1]")]
    fn test_new_panics_on_zero_damping() {
        SemiImplicitEuler::new(0.0);
    }

    #[test]
    fn test_integrator_matches_particle_integrate() {
        let start = Particle::new(
            Vector2D::new(0.5, 1.0),
            Vector2D::new(1.0, -2.0),
            Vector2D::new(0.0, -9.81),
            3.0,
        );

        let mut via_particle = start;
        via_particle.integrate(0.016);

        let mut via_integrator = start;
        SemiImplicitEuler::default().integrate(&mut via_integrator, 0.016);

        assert_eq!(via_particle, via_integrator);
    }

    #[test]
    fn test_damping_is_step_size_independent() {
        // One step of 1.0 and ten steps of 0.1 decay velocity by the same factor
        let integrator = SemiImplicitEuler::new(0.9);
        let mut coarse =
            Particle::new(Vector2D::ZERO, Vector2D::new(1.0, 0.0), Vector2D::ZERO, 1.0);
        let mut fine = coarse;

        integrator.integrate(&mut coarse, 1.0);
        for _ in 0..10 {
            integrator.integrate(&mut fine, 0.1);
        }

        assert!((coarse.velocity().x - 0.9).abs() < 1e-12);
        assert!((fine.velocity().x - coarse.velocity().x).abs() < 1e-12);
    }
}
