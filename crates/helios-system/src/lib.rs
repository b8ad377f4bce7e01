//! Simulation context for the Helios solar system.
//!
//! Owns the static planetary element catalog and the [`SolarSystem`]
//! context object that advances every body once per simulation step. The
//! render driver receives the context explicitly instead of reaching into
//! shared global scene state.

mod catalog;
mod moon;
mod system;

pub use catalog::{BodyRecord, PLANETS};
pub use moon::{MOON_DISTANCE, MOON_SIZE, MOON_SPEED_MULTIPLIER, Moon};
pub use system::{Body, SolarSystem};
