//! The solar system context object.

use glam::DVec3;

use helios_orbits::TrajectoryPropagator;

use crate::catalog::{BodyRecord, PLANETS};
use crate::moon::Moon;

/// One animated body: its propagator plus cached display state.
#[derive(Clone, Debug)]
pub struct Body {
    pub propagator: TrajectoryPropagator,
    /// Last computed scene position.
    pub position: DVec3,
    /// Display color, linear RGB.
    pub color: [f32; 3],
    pub has_ring: bool,
}

impl Body {
    fn from_record(record: &BodyRecord) -> Self {
        let propagator = TrajectoryPropagator::new(record.element_set());
        let position = propagator.position();
        Self {
            propagator,
            position,
            color: record.color,
            has_ring: record.has_ring,
        }
    }

    /// Body name from the underlying element set.
    pub fn name(&self) -> &str {
        &self.propagator.elements().name
    }

    /// Rendering radius from the underlying element set.
    pub fn size(&self) -> f64 {
        self.propagator.elements().size
    }
}

/// Owns every orbiting body and advances them once per simulation step.
///
/// This is the explicit simulation context handed to the render driver;
/// bodies are independent and mutated only through [`advance`](Self::advance).
pub struct SolarSystem {
    bodies: Vec<Body>,
    earth_index: usize,
    pub moon: Moon,
}

impl SolarSystem {
    /// Build the system from the built-in planetary catalog.
    pub fn from_catalog() -> Self {
        let bodies: Vec<Body> = PLANETS.iter().map(Body::from_record).collect();
        let earth_index = bodies
            .iter()
            .position(|b| b.name() == "Earth")
            .unwrap_or(0);
        log::info!("Solar system initialized with {} bodies", bodies.len());
        Self {
            bodies,
            earth_index,
            moon: Moon::new(),
        }
    }

    /// Propagate every body by `delta_time` and update the Moon relative to
    /// the Earth's new position. One call per simulation step.
    pub fn advance(&mut self, delta_time: f64) {
        for body in &mut self.bodies {
            body.position = body.propagator.propagate(delta_time);
        }
        let earth_position = self.bodies[self.earth_index].position;
        self.moon.advance(delta_time, earth_position);
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moon::MOON_DISTANCE;

    #[test]
    fn test_system_builds_from_catalog() {
        let system = SolarSystem::from_catalog();
        assert_eq!(system.len(), PLANETS.len());
        assert!(!system.is_empty());
    }

    #[test]
    fn test_initial_positions_come_from_seed_anomalies() {
        let system = SolarSystem::from_catalog();
        for body in system.bodies() {
            assert!(body.position.is_finite(), "{}", body.name());
            assert!(body.position.length() > 0.0, "{}", body.name());
        }
    }

    #[test]
    fn test_advance_moves_every_body() {
        let mut system = SolarSystem::from_catalog();
        let before: Vec<DVec3> = system.bodies().iter().map(|b| b.position).collect();
        system.advance(0.01);
        for (body, old) in system.bodies().iter().zip(&before) {
            assert!(
                (body.position - *old).length() > 0.0,
                "{} did not move",
                body.name()
            );
        }
    }

    #[test]
    fn test_clocks_advance_uniformly() {
        let mut system = SolarSystem::from_catalog();
        for _ in 0..10 {
            system.advance(0.01);
        }
        for body in system.bodies() {
            assert!(
                (body.propagator.elements().time - 0.1).abs() < 1e-12,
                "{} clock {}",
                body.name(),
                body.propagator.elements().time
            );
        }
    }

    #[test]
    fn test_moon_follows_earth() {
        let mut system = SolarSystem::from_catalog();
        system.advance(0.01);
        let earth = system
            .bodies()
            .iter()
            .find(|b| b.name() == "Earth")
            .expect("Earth in catalog");
        let offset = system.moon.position - earth.position;
        assert!((offset.truncate().length() - MOON_DISTANCE).abs() < 1e-9);
    }

    #[test]
    fn test_positions_stay_finite_over_many_steps() {
        let mut system = SolarSystem::from_catalog();
        for _ in 0..2000 {
            system.advance(0.01);
        }
        for body in system.bodies() {
            assert!(body.position.is_finite(), "{}", body.name());
        }
    }
}
