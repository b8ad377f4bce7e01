//! The Moon, animated as a simple circular satellite of the Earth body.
//!
//! Deliberately not an element set: the Moon circles at a fixed display
//! distance with a sped-up angular rate, positioned relative to wherever the
//! Earth currently is.

use glam::DVec3;

/// Display distance from the Earth body, scene units.
pub const MOON_DISTANCE: f64 = 15.0;

/// Angular rate multiplier applied to the simulation step.
pub const MOON_SPEED_MULTIPLIER: f64 = 10.0;

/// Rendering radius, scene units.
pub const MOON_SIZE: f64 = 1.737;

/// Circular satellite state: a phase angle and the last computed position.
#[derive(Clone, Debug, Default)]
pub struct Moon {
    angle: f64,
    /// Scene position, updated by [`advance`](Self::advance).
    pub position: DVec3,
}

impl Moon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the phase angle and recompute the position relative to the
    /// Earth's current position. The Moon shares the Earth's z coordinate.
    pub fn advance(&mut self, delta_time: f64, earth_position: DVec3) {
        self.angle += delta_time * MOON_SPEED_MULTIPLIER;
        self.position = DVec3::new(
            earth_position.x + MOON_DISTANCE * self.angle.cos(),
            earth_position.y + MOON_DISTANCE * self.angle.sin(),
            earth_position.z,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moon_keeps_fixed_distance_from_earth() {
        let mut moon = Moon::new();
        let earth = DVec3::new(120.0, -45.0, 3.0);
        for _ in 0..50 {
            moon.advance(0.01, earth);
            let offset = moon.position - earth;
            assert!((offset.truncate().length() - MOON_DISTANCE).abs() < 1e-9);
        }
    }

    #[test]
    fn test_moon_shares_earth_plane_height() {
        let mut moon = Moon::new();
        let earth = DVec3::new(10.0, 20.0, -7.5);
        moon.advance(0.5, earth);
        assert_eq!(moon.position.z, earth.z);
    }

    #[test]
    fn test_moon_angle_rate_is_scaled() {
        let mut moon = Moon::new();
        let earth = DVec3::ZERO;
        moon.advance(0.1, earth);
        // 0.1 * 10 = 1 radian of phase.
        let expected = DVec3::new(
            MOON_DISTANCE * 1.0_f64.cos(),
            MOON_DISTANCE * 1.0_f64.sin(),
            0.0,
        );
        assert!((moon.position - expected).length() < 1e-9);
    }
}
