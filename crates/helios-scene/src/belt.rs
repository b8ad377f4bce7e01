//! Procedural asteroid belt between Mars and Jupiter.

use std::f64::consts::TAU;

use glam::DVec3;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use helios_render::SphereInstance;

/// Inner edge of the belt, scene units.
pub const BELT_MIN_RADIUS: f64 = 620.0;

/// Outer edge of the belt, scene units.
pub const BELT_MAX_RADIUS: f64 = 640.0;

/// Inclination jitter applied to each rock, degrees.
pub const BELT_MAX_INCLINATION_DEG: f64 = 5.0;

/// Rock display color, linear RGB.
const ROCK_COLOR: [f32; 3] = [0.53, 0.53, 0.53];

/// One asteroid: a static position and rendering radius.
#[derive(Clone, Copy, Debug)]
pub struct BeltRock {
    pub position: DVec3,
    pub radius: f64,
}

/// Deterministic belt generation from a seed.
pub struct AsteroidBeltGenerator {
    seed: u64,
    rock_count: u32,
}

impl AsteroidBeltGenerator {
    pub fn new(seed: u64, rock_count: u32) -> Self {
        Self { seed, rock_count }
    }

    /// Generate the rock field. Deterministic for a given seed.
    pub fn generate(&self) -> Vec<BeltRock> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut rocks = Vec::with_capacity(self.rock_count as usize);
        let max_inclination = BELT_MAX_INCLINATION_DEG.to_radians();

        for _ in 0..self.rock_count {
            let radius = rng.random::<f64>() * 1.5 + 0.1;
            let distance =
                BELT_MIN_RADIUS + rng.random::<f64>() * (BELT_MAX_RADIUS - BELT_MIN_RADIUS);
            let inclination = (rng.random::<f64>() * 2.0 - 1.0) * max_inclination;
            let angle = rng.random::<f64>() * TAU;

            rocks.push(BeltRock {
                position: DVec3::new(
                    distance * angle.cos(),
                    distance * angle.sin(),
                    distance * inclination.sin(),
                ),
                radius,
            });
        }

        rocks
    }
}

/// Convert rocks into sphere instances for the instanced renderer.
pub fn rock_instances(rocks: &[BeltRock]) -> Vec<SphereInstance> {
    rocks
        .iter()
        .map(|rock| SphereInstance {
            center: rock.position.as_vec3().into(),
            scale: rock.radius as f32,
            color: ROCK_COLOR,
            emissive: 0.0,
        })
        .collect()
}
