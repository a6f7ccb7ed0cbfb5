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
//! Headless free fall demo
//!
//! Drops three particles of very different mass from the same height and
//! prints the debug overlay a renderer would draw. Run with
//! `RUST_LOG=debug` to see the world's log output.

use physics_sim::{Particle, ParticleWorld, PhysicsError, SimulationConfig, Vector2D};

const FRAME_TIME: f64 = 1.0 / 200.0;

fn main() -> Result<(), PhysicsError> {
    env_logger::init();

    println!("Physics Sim - Free Fall Example");
    println!("===============================\n");

    let gravity = Vector2D::new(0.0, -9.81);
    let mut world = ParticleWorld::with_config(SimulationConfig::new())?;

    world.spawn(Particle::new(Vector2D::new(-0.5, 1.0), Vector2D::ZERO, gravity, 0.01));
    world.spawn(Particle::new(Vector2D::new(0.0, 1.0), Vector2D::ZERO, gravity, 1.0));
    world.spawn(Particle::new(Vector2D::new(0.5, 1.0), Vector2D::ZERO, gravity, 100.0));

    // Worlds start paused, like pressing space in an interactive host
    world.toggle_running();

    for frame in 1..=200 {
        world.step(FRAME_TIME);

        if frame % 50 == 0 {
            println!("t = {:.2}s", world.elapsed());
            for (i, particle) in world.particles().iter().enumerate() {
                println!(
                    "  [{}] position {} velocity {}",
                    i,
                    particle.position(),
                    particle.velocity()
                );
            }
            println!("{}\n", world.report());
        }
    }

    // Turn gravity off and coast; damping slowly bleeds off the energy
    world.set_acceleration_all(Vector2D::ZERO);
    let before = world.total_energy();
    for _ in 0..200 {
        world.step(FRAME_TIME);
    }
    println!(
        "Coasting for 1s without gravity: E {:.3} -> {:.3}",
        before,
        world.total_energy()
    );

    world.reset();
    println!(
        "After reset: {} particles back at y = {}",
        world.len(),
        world.particle(1)?.position().y
    );

    Ok(())
}
