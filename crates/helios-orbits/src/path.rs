//! Static orbit-path sampling for drawing ellipse lines.

use std::f64::consts::TAU;

use glam::DVec3;

use crate::elements::OrbitalElementSet;
use crate::kepler::orbital_position;

/// Number of segments used to draw one orbit ellipse.
pub const ORBIT_PATH_SEGMENTS: usize = 100;

/// Sample the full ellipse of `elements` at `segments` evenly spaced true
/// anomalies.
///
/// Returns `segments + 1` points; the final point coincides with the first
/// so a line strip closes the loop. The points come from the same
/// [`orbital_position`] the live propagator evaluates, which keeps the drawn
/// path and the animated body on the same curve.
pub fn sample_orbit_path(elements: &OrbitalElementSet, segments: usize) -> Vec<DVec3> {
    (0..=segments)
        .map(|i| {
            let true_anomaly = (i as f64 / segments as f64) * TAU;
            orbital_position(
                elements.semi_major_axis,
                elements.eccentricity,
                true_anomaly,
                elements.arg_perigee,
                elements.raan,
                elements.inclination,
            )
        })
        .collect()
}
