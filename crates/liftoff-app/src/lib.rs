//! Simulation driver for Liftoff.
//!
//! Wraps the physics core in a [`Session`] that applies player input in a
//! fixed per-tick order, sequences the launch countdown and time warp, and
//! keeps the camera on the vehicle. [`GameLoop`] feeds it fixed steps from
//! variable frame times.

mod countdown;
mod error;
pub mod game_loop;
pub mod input;
mod session;
mod view;
mod warp;

pub use countdown::LaunchCountdown;
pub use error::AppError;
pub use game_loop::GameLoop;
pub use input::{Binding, CameraEvent, Command, ControlInput, HeldControl, KeyMap};
pub use session::{Session, SessionPhase, StepReport};
pub use view::{BodyView, ViewSnapshot};
pub use warp::TimeWarp;
