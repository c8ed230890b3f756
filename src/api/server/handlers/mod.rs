pub mod camera;
pub mod directions;
pub mod map;
