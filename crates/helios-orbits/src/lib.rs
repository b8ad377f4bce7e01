//! Keplerian orbital mechanics for the Helios solar system visualizer.
//!
//! The crate is pure math: an element set per body ([`OrbitalElementSet`]),
//! the propagator that steps it along its ellipse ([`TrajectoryPropagator`]),
//! and the orbit-path sampler used to draw static ellipse lines. Both the
//! live propagator and the sampler evaluate the same position formula, so
//! the drawn path and the animated body cannot drift apart.

mod elements;
mod kepler;
mod path;
mod propagator;

pub use elements::OrbitalElementSet;
pub use kepler::{eccentric_to_true_anomaly, orbital_position, solve_kepler};
pub use path::{ORBIT_PATH_SEGMENTS, sample_orbit_path};
pub use propagator::{DAYS_PER_YEAR, TrajectoryPropagator};
