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
//! Host loop owning a set of particles
//!
//! [`ParticleWorld`] decides when particles are stepped. It starts paused,
//! can be toggled between running and paused, and can restore every particle
//! to the state it was spawned with.
//!
//! # Logging
//!
//! Uses the `log` facade. Suspicious timesteps and particles that leave the
//! finite range are reported with `warn!` when
//! [`SimulationConfig::warn_on_suspicious_steps`] is set; they are never
//! clamped.
//!
//! # Diagnostics
//!
//! Every running step is recorded into a [`FrameDiagnostics`] sized by
//! [`SimulationConfig::diagnostics_window`].

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SimulationConfig;
use crate::diagnostics::{DiagnosticsReport, FrameDiagnostics};
use crate::error::PhysicsError;
use crate::integration::{calculate_total_kinetic_energy, Integrator, SemiImplicitEuler};
use crate::particle::Particle;
use crate::vector::Vector2D;

/// A collection of independent particles stepped together
///
/// # Example
///
/// ```
/// use physics_sim::{Particle, ParticleWorld, Vector2D};
///
/// let mut world = ParticleWorld::new();
/// world.spawn(Particle::new(Vector2D::UP, Vector2D::ZERO, Vector2D::new(0.0, -9.81), 1.0));
///
/// assert_eq!(world.step(0.01), 0); // paused
/// world.toggle_running();
/// assert_eq!(world.step(0.01), 1);
/// ```
pub struct ParticleWorld {
    particles: Vec<Particle>,
    initial: Vec<Particle>,
    integrator: SemiImplicitEuler,
    config: SimulationConfig,
    diagnostics: FrameDiagnostics,
    running: bool,
    elapsed: f64,
    ticks: u64,
}

impl ParticleWorld {
    /// Create an empty, paused world with default configuration
    pub fn new() -> Self {
        ParticleWorld::from_parts(SimulationConfig::default(), SemiImplicitEuler::default())
    }

    /// Create an empty, paused world with a custom configuration
    pub fn with_config(config: SimulationConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        let integrator = SemiImplicitEuler::try_new(config.damping)?;
        Ok(ParticleWorld::from_parts(config, integrator))
    }

    fn from_parts(config: SimulationConfig, integrator: SemiImplicitEuler) -> Self {
        ParticleWorld {
            particles: Vec::new(),
            initial: Vec::new(),
            integrator,
            diagnostics: FrameDiagnostics::new(config.diagnostics_window),
            config,
            running: false,
            elapsed: 0.0,
            ticks: 0,
        }
    }

    /// Get the active configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Get the integrator used by `step`
    pub fn integrator(&self) -> &SemiImplicitEuler {
        &self.integrator
    }

    /// Add a particle, remembering its state for `reset`
    ///
    /// Returns the particle's index.
    pub fn spawn(&mut self, particle: Particle) -> usize {
        self.particles.push(particle);
        self.initial.push(particle);
        log::debug!("Spawned particle {} at {}", self.particles.len() - 1, particle.position());
        self.particles.len() - 1
    }

    /// All particles in spawn order
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Get a particle by index
    pub fn particle(&self, index: usize) -> Result<&Particle, PhysicsError> {
        let count = self.particles.len();
        self.particles
            .get(index)
            .ok_or(PhysicsError::ParticleOutOfBounds { index, count })
    }

    /// Get a mutable particle by index
    pub fn particle_mut(&mut self, index: usize) -> Result<&mut Particle, PhysicsError> {
        let count = self.particles.len();
        self.particles
            .get_mut(index)
            .ok_or(PhysicsError::ParticleOutOfBounds { index, count })
    }

    /// Number of particles
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Check if the world has no particles
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Check if `step` advances particles
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Pause or resume stepping
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Flip between paused and running, returning the new state
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        log::debug!("Time stepping {}", if self.running { "resumed" } else { "paused" });
        self.running
    }

    /// Smoothed frame time and energy over the last steps
    pub fn diagnostics(&self) -> &FrameDiagnostics {
        &self.diagnostics
    }

    /// Report built from the world's diagnostics
    pub fn report(&self) -> DiagnosticsReport {
        self.diagnostics.report()
    }

    /// Restore every particle to its spawn state
    ///
    /// Clears elapsed time, tick count and diagnostics. The running flag is
    /// unchanged.
    pub fn reset(&mut self) {
        self.particles.copy_from_slice(&self.initial);
        self.elapsed = 0.0;
        self.ticks = 0;
        self.diagnostics = FrameDiagnostics::new(self.config.diagnostics_window);
        log::debug!("Reset {} particles", self.particles.len());
    }

    /// Replace the acceleration of every particle
    pub fn set_acceleration_all(&mut self, acceleration: Vector2D) {
        for particle in &mut self.particles {
            particle.set_acceleration(acceleration);
        }
    }

    /// Simulated time accumulated by `step` since creation or reset
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of steps taken since creation or reset
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Total kinetic energy of all particles
    pub fn total_energy(&self) -> f64 {
        calculate_total_kinetic_energy(&self.particles)
    }

    /// Advance every particle by `dt`
    ///
    /// Does nothing while paused. Returns the number of particles integrated.
    /// The step's `dt` and resulting energy are recorded into the world's
    /// diagnostics.
    pub fn step(&mut self, dt: f64) -> usize {
        if !self.running {
            return 0;
        }

        if self.config.warn_on_suspicious_steps {
            if let Err(e) = self.integrator.validate_timestep(dt) {
                log::warn!("Stepping with suspicious timestep: {}", e);
            }
        }

        self.integrate_all(dt);
        self.elapsed += dt;
        self.ticks += 1;

        if self.config.warn_on_suspicious_steps {
            for (index, particle) in self.particles.iter().enumerate() {
                if !particle.is_valid() {
                    log::warn!(
                        "Particle {} has non-finite state: position {}, velocity {}",
                        index,
                        particle.position(),
                        particle.velocity()
                    );
                }
            }
        }

        self.diagnostics.record(dt, &self.particles);

        log::trace!(
            "Tick {} integrated {} particles (dt = {})",
            self.ticks,
            self.particles.len(),
            dt
        );
        self.particles.len()
    }

    #[cfg(feature = "parallel")]
    fn integrate_all(&mut self, dt: f64) {
        let integrator = &self.integrator;
        if self.config.parallel {
            self.particles
                .par_iter_mut()
                .for_each(|particle| integrator.integrate(particle, dt));
        } else {
            for particle in &mut self.particles {
                integrator.integrate(particle, dt);
            }
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn integrate_all(&mut self, dt: f64) {
        for particle in &mut self.particles {
            self.integrator.integrate(particle, dt);
        }
    }
}

impl Default for ParticleWorld {
    fn default() -> Self {
        Self::new()
    }
}
