//! Steps a body along its ellipse by solving Kepler's equation each frame.

use std::f64::consts::TAU;

use glam::DVec3;

use crate::elements::OrbitalElementSet;
use crate::kepler::{eccentric_to_true_anomaly, orbital_position, solve_kepler};

/// Scaling constant inside the mean-motion formula.
///
/// The catalog supplies `period` in years while the simulation clock ticks
/// in days, so mean motion is `2π / (period × 365.25)`. Changing this
/// constant changes every trajectory.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Advances one body's [`OrbitalElementSet`] through time and produces its
/// scene position.
///
/// Each propagator exclusively owns its element set; bodies are independent
/// and never share state.
#[derive(Clone, Debug)]
pub struct TrajectoryPropagator {
    elements: OrbitalElementSet,
}

impl TrajectoryPropagator {
    pub fn new(elements: OrbitalElementSet) -> Self {
        Self { elements }
    }

    /// The element set being propagated.
    pub fn elements(&self) -> &OrbitalElementSet {
        &self.elements
    }

    /// Advance the simulation clock by `delta_time` and return the body's
    /// new scene position.
    ///
    /// Accumulates the clock, derives the mean anomaly (normalized to
    /// [0, 2π)), solves Kepler's equation for the eccentric anomaly,
    /// converts to true anomaly, and evaluates the position formula.
    /// `delta_time` must be non-negative. Eccentricities >= 1 and zero
    /// periods are out of contract: they produce NaN positions, not errors.
    pub fn propagate(&mut self, delta_time: f64) -> DVec3 {
        let mean_motion = TAU / (self.elements.period * DAYS_PER_YEAR);
        self.elements.time += delta_time;

        let mean_anomaly = (mean_motion * self.elements.time).rem_euclid(TAU);
        let eccentric_anomaly = solve_kepler(mean_anomaly, self.elements.eccentricity);
        self.elements.true_anomaly =
            eccentric_to_true_anomaly(eccentric_anomaly, self.elements.eccentricity);

        self.position()
    }

    /// Scene position at the currently stored true anomaly.
    ///
    /// Pure read of the element set; `propagate` calls this after updating
    /// the anomaly, and the orbit-path sampler evaluates the same formula.
    pub fn position(&self) -> DVec3 {
        let el = &self.elements;
        orbital_position(
            el.semi_major_axis,
            el.eccentricity,
            el.true_anomaly,
            el.arg_perigee,
            el.raan,
            el.inclination,
        )
    }
}
