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
//! Frame diagnostics for host loops
//!
//! These types consume values the simulation already exposes (frame time and
//! particle energy) and smooth them for display. Nothing here feeds back into
//! integration.

use std::fmt;

use crate::error::PhysicsError;
use crate::integration::calculate_total_kinetic_energy;
use crate::particle::Particle;

/// Default number of samples in a trailing window
pub const DEFAULT_WINDOW: usize = 64;

/// Average of the last `capacity` samples, kept in a ring buffer
///
/// The average always divides by the full capacity. Before the buffer has
/// been filled the missing samples count as zero, so the average ramps up
/// over the first `capacity` frames. A NaN or infinite sample poisons the
/// average only while it is inside the window.
///
/// # Examples
///
/// ```
/// use physics_sim::diagnostics::TrailingAverage;
///
/// let mut avg = TrailingAverage::new(2);
/// avg.feed(4.0);
/// assert_eq!(avg.average(), 2.0);
/// avg.feed(6.0);
/// assert_eq!(avg.average(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct TrailingAverage {
    samples: Vec<f64>,
    cursor: usize,
    filled: usize,
}

impl TrailingAverage {
    /// Create an averager holding `capacity` samples
    ///
    /// # Panics
    ///
    /// Panics if capacity is zero. For fallible construction, use `try_new`.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Window capacity must be at least 1");
        TrailingAverage {
            samples: vec![0.0; capacity],
            cursor: 0,
            filled: 0,
        }
    }

    /// Try to create an averager holding `capacity` samples
    pub fn try_new(capacity: usize) -> Result<Self, PhysicsError> {
        if capacity == 0 {
            return Err(PhysicsError::InvalidWindow);
        }
        Ok(Self::new(capacity))
    }

    /// Push a sample, evicting the oldest once full
    pub fn feed(&mut self, value: f64) {
        self.samples[self.cursor] = value;
        self.cursor = (self.cursor + 1) % self.samples.len();
        self.filled = (self.filled + 1).min(self.samples.len());
    }

    /// Sum of the window divided by its capacity
    pub fn average(&self) -> f64 {
        // Summed on every read so an evicted NaN cannot linger
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    /// Number of samples the window holds
    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    /// Number of samples fed so far, saturating at capacity
    pub fn len(&self) -> usize {
        self.filled
    }

    /// Check if no samples have been fed
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }
}

impl Default for TrailingAverage {
    fn default() -> Self {
        TrailingAverage::new(DEFAULT_WINDOW)
    }
}

/// Snapshot of smoothed frame statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagnosticsReport {
    /// Particles in the last recorded frame
    pub particle_count: usize,
    /// Frames per second from the averaged frame time
    pub fps: f64,
    /// Last frame time in milliseconds, unsmoothed
    pub frame_time_ms: f64,
    /// Averaged total kinetic energy
    pub average_energy: f64,
}

impl fmt::Display for DiagnosticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} objects @ {:.0} FPS", self.particle_count, self.fps)?;
        writeln!(f, "{:.4}Δt (in ms)", self.frame_time_ms)?;
        write!(f, "E={:.3}", self.average_energy)
    }
}

/// Smoothed frame time and total energy for a debug overlay
#[derive(Debug, Clone)]
pub struct FrameDiagnostics {
    energy: TrailingAverage,
    frame_time: TrailingAverage,
    last_dt: f64,
    particle_count: usize,
}

impl FrameDiagnostics {
    /// Create diagnostics averaging over `window` frames
    ///
    /// # Panics
    ///
    /// Panics if window is zero.
    pub fn new(window: usize) -> Self {
        FrameDiagnostics {
            energy: TrailingAverage::new(window),
            frame_time: TrailingAverage::new(window),
            last_dt: 0.0,
            particle_count: 0,
        }
    }

    /// Record one frame: its duration and the particles on screen
    pub fn record<'a, I>(&mut self, dt: f64, particles: I)
    where
        I: IntoIterator<Item = &'a Particle>,
    {
        let mut count = 0;
        let energy = calculate_total_kinetic_energy(particles.into_iter().inspect(|_| count += 1));
        self.energy.feed(energy);
        self.frame_time.feed(dt);
        self.last_dt = dt;
        self.particle_count = count;
    }

    /// Build a report from the current averages
    ///
    /// FPS is infinite while the averaged frame time is zero.
    pub fn report(&self) -> DiagnosticsReport {
        DiagnosticsReport {
            particle_count: self.particle_count,
            fps: 1.0 / self.frame_time.average(),
            frame_time_ms: self.last_dt * 1000.0,
            average_energy: self.energy.average(),
        }
    }
}

impl Default for FrameDiagnostics {
    fn default() -> Self {
        FrameDiagnostics::new(DEFAULT_WINDOW)
    }
}
