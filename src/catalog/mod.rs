//! Static tables describing the zoo map: animal icons and directory, the
//! base style and the camera presets of each area.

mod animals;
mod camera;
mod directory;
mod style;

pub use animals::{icon_layers, icon_path, ANIMALS, ANIMALS_SOURCE};
pub use camera::{
    camera_for_animal, camera_preset, map_options, CameraPreset, CAMERA_PRESETS, HOME,
};
pub use directory::{find_animal, Animal, DIRECTORY};
pub use style::install_base_style;
