pub mod bounds;
pub mod collision;
pub mod geometry;
pub mod math;
pub mod time;
