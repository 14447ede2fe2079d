//! Billiards table simulation: ball motion, collisions, pocketing and
//! cue-line prediction. Rendering, input devices and the frame loop are
//! left to the caller.

pub mod api;
pub mod core;
pub mod components;
pub mod input;
pub mod table;

// Re-export key types at crate root for convenience
pub use api::config::TableConfig;
pub use api::error::{BallError, ConfigError, TableError};
pub use api::types::{BallInstance, BallKind, EventRecord, TableEvent};
pub use components::ball::Ball;
pub use core::bounds::Bounds;
pub use core::collision::{ContactTracker, Wall};
pub use core::math::{Heading, Point, Vector};
pub use core::time::FrameClock;
pub use input::queue::{Command, CommandQueue};
pub use table::rack::RackLayout;
pub use table::Table;
