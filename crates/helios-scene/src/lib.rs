//! Scene composition for Helios.
//!
//! Turns the simulation context into GPU work: instanced spheres for the
//! sun, planets, moon, and asteroid belt; static line strips for orbit
//! paths; a flat ring mesh that follows its planet; and a seeded starfield
//! backdrop.

mod belt;
mod orbit_lines;
mod rings;
mod spheres;
mod starfield;
mod sun;

pub use belt::{
    AsteroidBeltGenerator, BELT_MAX_INCLINATION_DEG, BELT_MAX_RADIUS, BELT_MIN_RADIUS, BeltRock,
    rock_instances,
};
pub use orbit_lines::{ORBIT_LINE_COLOR, OrbitLineRenderer, orbit_line_vertices};
pub use rings::{
    RING_COLOR, RING_INNER_SCALE, RING_OUTER_SCALE, RING_SEGMENTS, RingRenderer,
    translated_ring_vertices,
};
pub use spheres::{MAX_SPHERE_INSTANCES, SphereSceneRenderer, body_instances};
pub use starfield::{STARFIELD_RADIUS, StarfieldGenerator, StarfieldRenderer};
pub use sun::{SUN_COLOR, SUN_RADIUS, sun_instance};
