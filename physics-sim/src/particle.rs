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
//! Point particles with damped semi-implicit Euler integration
//!
//! A [`Particle`] stores position, velocity and acceleration as independent
//! [`Vector2D`] values plus an inverse mass. Mass and kinetic energy are
//! derived on every read and never cached.
//!
//! # Infinite mass
//!
//! An inverse mass of `0` represents an immovable body. It is a legal state,
//! not an error. Constructing with `mass = 0` gives an infinite inverse mass
//! and `mass = ∞` gives zero; neither is rejected.

use crate::vector::Vector2D;

/// A point particle with mass
///
/// # Examples
///
/// ```
/// use physics_sim::{Particle, Vector2D};
///
/// let gravity = Vector2D::new(0.0, -9.81);
/// let mut p = Particle::new(Vector2D::new(0.0, 1.0), Vector2D::ZERO, gravity, 1.0);
/// p.integrate(1.0 / 60.0);
/// assert!(p.position().y < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    position: Vector2D,
    velocity: Vector2D,
    acceleration: Vector2D,
    inverse_mass: f64,
}

impl Particle {
    /// Velocity retained per unit of simulated time
    ///
    /// `0` would stop a particle instantly and `1` disables damping. A value
    /// slightly below `1` keeps accumulated rounding error from building up
    /// kinetic energy and doubles as a cheap drag model.
    pub const DAMPING: f64 = 0.995;

    /// Create a particle from its initial state and mass
    pub fn new(position: Vector2D, velocity: Vector2D, acceleration: Vector2D, mass: f64) -> Self {
        Particle::with_inverse_mass(position, velocity, acceleration, 1.0 / mass)
    }

    /// Create a particle from its initial state and inverse mass
    ///
    /// Pass `0.0` for an immovable (infinite mass) particle.
    pub fn with_inverse_mass(
        position: Vector2D,
        velocity: Vector2D,
        acceleration: Vector2D,
        inverse_mass: f64,
    ) -> Self {
        Particle {
            position,
            velocity,
            acceleration,
            inverse_mass,
        }
    }

    /// Get the position
    pub fn position(&self) -> Vector2D {
        self.position
    }

    /// Get the velocity
    pub fn velocity(&self) -> Vector2D {
        self.velocity
    }

    /// Get the acceleration
    pub fn acceleration(&self) -> Vector2D {
        self.acceleration
    }

    /// Replace the acceleration used by subsequent steps
    pub fn set_acceleration(&mut self, acceleration: Vector2D) {
        self.acceleration = acceleration;
    }

    /// Get the inverse mass
    pub fn inverse_mass(&self) -> f64 {
        self.inverse_mass
    }

    /// Set the inverse mass directly
    pub fn set_inverse_mass(&mut self, inverse_mass: f64) {
        self.inverse_mass = inverse_mass;
    }

    /// Mass, computed as `1 / inverse_mass`
    pub fn mass(&self) -> f64 {
        1.0 / self.inverse_mass
    }

    /// Set the mass, storing `1 / mass`
    pub fn set_mass(&mut self, mass: f64) {
        self.inverse_mass = 1.0 / mass;
    }

    /// Check if this particle has infinite mass
    pub fn is_immovable(&self) -> bool {
        self.inverse_mass == 0.0
    }

    /// Kinetic energy `0.5 * m * |v|²`
    ///
    /// Intended for diagnostics only; the integrator never reads it. An
    /// immovable particle reports `∞` when moving and NaN at rest.
    pub fn energy(&self) -> f64 {
        0.5 * self.mass() * self.velocity.square_magnitude()
    }

    /// Check if position and velocity are finite (not NaN or infinite)
    pub fn is_valid(&self) -> bool {
        self.position.is_valid() && self.velocity.is_valid()
    }

    /// Advance the particle by `dt` using [`Particle::DAMPING`]
    pub fn integrate(&mut self, dt: f64) {
        self.integrate_with_damping(dt, Self::DAMPING);
    }

    /// Advance the particle by `dt` with an explicit damping factor
    ///
    /// The update order is fixed:
    ///
    /// ```text
    /// x ← x + v*dt + 0.5*a*dt²
    /// v ← v * damping^dt
    /// v ← v + a*dt
    /// ```
    ///
    /// Acceleration is left unchanged. No `dt` is rejected; negative, zero or
    /// huge steps produce correspondingly unchecked results.
    pub fn integrate_with_damping(&mut self, dt: f64, damping: f64) {
        self.position += self.velocity * dt + 0.5 * self.acceleration * dt * dt;
        self.velocity *= damping.powf(dt);
        self.velocity += self.acceleration * dt;
    }
}
