//! Window, event loop, and frame driver for Helios.

mod focus;
mod game_loop;
mod window;

pub use focus::{CameraFocus, OVERVIEW_POSITION, framing_position};
pub use game_loop::{FIXED_DT, GameLoop, MAX_FRAME_TIME};
pub use window::AppState;

use winit::error::EventLoopError;
use winit::event_loop::EventLoop;

/// Build the window and run the event loop until the window closes.
pub fn run(config: helios_config::Config) -> Result<(), EventLoopError> {
    let event_loop = EventLoop::new()?;
    let mut app = AppState::with_config(config);
    event_loop.run_app(&mut app)
}
