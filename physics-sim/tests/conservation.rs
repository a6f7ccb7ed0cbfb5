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
//! Integration tests checking the integrator against closed-form motion

use physics_sim::integration::{Integrator, SemiImplicitEuler};
use physics_sim::{Particle, Vector2D};

const GRAVITY: Vector2D = Vector2D::new(0.0, -9.81);

#[test]
fn test_free_fall_single_step() {
    let mut particle = Particle::new(Vector2D::new(0.0, 1.0), Vector2D::ZERO, GRAVITY, 1.0);
    SemiImplicitEuler::undamped().integrate(&mut particle, 0.1);

    let pos = particle.position();
    let vel = particle.velocity();
    assert_eq!(pos.x, 0.0);
    assert!((pos.y - 0.95095).abs() < 1e-9, "y = {}", pos.y);
    assert_eq!(vel.x, 0.0);
    assert!((vel.y + 0.981).abs() < 1e-9, "vy = {}", vel.y);
}

#[test]
fn test_free_fall_matches_kinematics() {
    // Constant acceleration without damping is exact for any step count
    let integrator = SemiImplicitEuler::undamped();
    let mut particle =
        Particle::new(Vector2D::new(0.0, 100.0), Vector2D::new(2.0, 5.0), GRAVITY, 1.0);

    let dt = 0.01;
    let steps = 250;
    for _ in 0..steps {
        integrator.integrate(&mut particle, dt);
    }

    let t = dt * steps as f64;
    let expected_y = 100.0 + 5.0 * t - 0.5 * 9.81 * t * t;
    let expected_vy = 5.0 - 9.81 * t;
    assert!((particle.position().x - 2.0 * t).abs() < 1e-9);
    assert!((particle.position().y - expected_y).abs() < 1e-9);
    assert!((particle.velocity().y - expected_vy).abs() < 1e-9);
}

#[test]
fn test_undamped_straight_line_motion() {
    let integrator = SemiImplicitEuler::undamped();
    let start = Vector2D::new(-1.0, 2.0);
    let velocity = Vector2D::new(0.75, -0.25);
    let mut particle = Particle::new(start, velocity, Vector2D::ZERO, 1.0);

    let dt = 1.0 / 60.0;
    let steps = 600;
    for _ in 0..steps {
        integrator.integrate(&mut particle, dt);
    }

    let expected = start + velocity * (steps as f64 * dt);
    assert!((particle.position() - expected).magnitude() < 1e-9);
    assert_eq!(particle.velocity(), velocity);
}

#[test]
fn test_undamped_free_particle_conserves_energy() {
    let integrator = SemiImplicitEuler::undamped();
    let mut particle = Particle::new(Vector2D::ZERO, Vector2D::new(1.0, 0.0), Vector2D::ZERO, 1.0);
    let initial_energy = particle.energy();

    for _ in 0..100 {
        integrator.integrate(&mut particle, 0.01);
    }

    assert_eq!(particle.energy(), initial_energy);
}

#[test]
fn test_damping_only() {
    let mut particle = Particle::new(Vector2D::ZERO, Vector2D::new(2.0, 0.0), Vector2D::ZERO, 1.0);
    particle.integrate(1.0);

    assert!((particle.velocity().x - 1.99).abs() < 1e-12);
    assert_eq!(particle.velocity().y, 0.0);
    // Position used the undamped velocity
    assert_eq!(particle.position(), Vector2D::new(2.0, 0.0));
}

#[test]
fn test_damping_decays_energy_monotonically() {
    let mut particle = Particle::new(Vector2D::ZERO, Vector2D::new(3.0, 4.0), Vector2D::ZERO, 2.0);
    let mut previous = particle.energy();

    for _ in 0..200 {
        particle.integrate(0.05);
        let energy = particle.energy();
        assert!(energy < previous, "energy rose from {} to {}", previous, energy);
        previous = energy;
    }

    // Ten seconds of damping scales speed by 0.995^10
    let expected = 25.0 * 0.995_f64.powf(10.0).powi(2);
    assert!((previous - expected).abs() < 1e-9, "energy {} vs {}", previous, expected);
}

#[test]
fn test_energy_scenario() {
    let particle = Particle::new(Vector2D::ZERO, Vector2D::new(3.0, 4.0), Vector2D::ZERO, 2.0);
    assert_eq!(particle.energy(), 25.0);
}
