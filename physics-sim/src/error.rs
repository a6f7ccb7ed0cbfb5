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
//! Error types for the simulation host surfaces
//!
//! Vector arithmetic and particle integration never fail. These errors only
//! come from configuration, particle lookup, and the advisory timestep check.

use thiserror::Error;

/// Errors reported by configuration and world access
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// Damping factor outside `(0, 1]`
    #[error("damping must be in (0, 1], got {0}")]
    InvalidDamping(f64),

    /// Averaging window of zero samples
    #[error("diagnostics window must hold at least one sample")]
    InvalidWindow,

    /// Particle index is out of bounds
    #[error("particle index {index} out of bounds (count: {count})")]
    ParticleOutOfBounds {
        /// Requested index
        index: usize,
        /// Number of particles in the world
        count: usize,
    },

    /// Timestep is NaN or infinite
    #[error("timestep {0} is not finite")]
    NonFiniteTimestep(f64),

    /// Timestep runs the simulation backwards
    #[error("timestep {0} is negative")]
    NegativeTimestep(f64),

    /// Timestep is large enough to make the result inaccurate
    #[error("timestep {0} is large and may cause instability")]
    LargeTimestep(f64),
}
