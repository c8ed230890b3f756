mod camera;
mod coordinates;
mod layer;
mod route;

pub use camera::{CameraOptions, MapOptions};
pub use coordinates::Coordinates;
pub use layer::{Layer, LayerKind, Source};
pub use route::{Route, RoutePath};
