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
//! # Physics Sim
//!
//! A minimal 2D point-particle integrator. Particles carry position,
//! velocity, acceleration and inverse mass, and advance with semi-implicit
//! Euler integration plus exponential velocity damping.
//!
//! ## Features
//!
//! - **Vector2D**: Copyable 2D value type with the usual vector algebra
//! - **Particle**: Damped semi-implicit Euler step, derived mass and energy
//! - **Total operations**: Bad input yields NaN or infinity, never a panic
//! - **Host loop**: `ParticleWorld` with pause, reset and optional Rayon stepping
//! - **Diagnostics**: Trailing-window averages of frame time and energy
//!
//! ## Example
//!
//! ```rust
//! use physics_sim::{Particle, Vector2D};
//!
//! let gravity = Vector2D::new(0.0, -9.81);
//! let mut ball = Particle::new(Vector2D::new(0.0, 1.0), Vector2D::ZERO, gravity, 1.0);
//!
//! ball.integrate(0.1);
//! assert!(ball.position().y < 1.0);
//! assert!(ball.velocity().y < 0.0);
//! ```

#![warn(missing_docs)]

/// 2D vector value type
pub mod vector;

/// Point particles
pub mod particle;

/// Numerical integration methods
pub mod integration;

/// Host loop configuration
pub mod config;

/// Error types
pub mod error;

/// Host loop owning a particle set
pub mod world;

/// Frame diagnostics
pub mod diagnostics;

pub use vector::Vector2D;
pub use particle::Particle;
pub use config::SimulationConfig;
pub use error::PhysicsError;
pub use world::ParticleWorld;
