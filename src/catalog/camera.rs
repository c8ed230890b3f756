use serde::Serialize;

use crate::{
    catalog::directory::find_animal,
    entities::{CameraOptions, Coordinates, MapOptions},
    error::{not_found_error, Error},
};

const FLIGHT_MS: u32 = 5000;
const AREA_PITCH: f64 = 39.01;
const AREA_BEARING: f64 = -147.5;
const ENCLOSURE_ZOOM: f64 = 19.0;

/// Overview of the whole park; also the initial view.
pub const HOME: CameraOptions = CameraOptions {
    center: Coordinates::new(-6.8932888, 33.954826),
    zoom: 16.0,
    pitch: 40.0,
    bearing: 220.0,
    duration: FLIGHT_MS,
    essential: true,
};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CameraPreset {
    pub name: &'static str,
    pub camera: CameraOptions,
}

const fn area(name: &'static str, lng: f64, lat: f64, zoom: f64) -> CameraPreset {
    CameraPreset {
        name,
        camera: CameraOptions {
            center: Coordinates::new(lng, lat),
            zoom,
            pitch: AREA_PITCH,
            bearing: AREA_BEARING,
            duration: FLIGHT_MS,
            essential: true,
        },
    }
}

pub const CAMERA_PRESETS: &[CameraPreset] = &[
    CameraPreset {
        name: "home",
        camera: HOME,
    },
    area("visitor-village", -6.89442, 33.95529, 17.51),
    area("educational-farm", -6.89352, 33.95424, 18.43),
    area("atlas-mountains", -6.89523, 33.95447, 18.25),
    area("desert", -6.89626, 33.95415, 18.23),
    area("african-savanna", -6.89804, 33.95265, 18.25),
    area("pond", -6.89508, 33.95274, 18.25),
    area("tropical-forest", -6.89416, 33.95218, 17.54),
];

pub fn camera_preset(name: &str) -> Result<CameraOptions, Error> {
    CAMERA_PRESETS
        .iter()
        .find(|preset| preset.name == name)
        .map(|preset| preset.camera)
        .ok_or_else(not_found_error)
}

/// Close-up of the first enclosure listed under `name` in the directory.
pub fn camera_for_animal(name: &str) -> Result<CameraOptions, Error> {
    let animal = find_animal(name)?;

    Ok(CameraOptions {
        center: animal.coordinates,
        zoom: ENCLOSURE_ZOOM,
        pitch: AREA_PITCH,
        bearing: AREA_BEARING,
        duration: FLIGHT_MS,
        essential: true,
    })
}

pub fn map_options(style_url: &str) -> MapOptions {
    MapOptions {
        style: style_url.to_string(),
        center: HOME.center,
        zoom: HOME.zoom,
        pitch: HOME.pitch,
        bearing: HOME.bearing,
        min_zoom: 14.0,
        max_zoom: 20.0,
    }
}

#[test]
fn presets_resolve_by_name() {
    let savanna = camera_preset("african-savanna").unwrap();
    assert_eq!(savanna.center, Coordinates::new(-6.89804, 33.95265));
    assert_eq!(savanna.zoom, 18.25);
    assert_eq!(savanna.bearing, -147.5);
    assert!(savanna.essential);

    assert_eq!(camera_preset("home").unwrap(), HOME);
    assert_eq!(camera_preset("aquarium").unwrap_err().code, crate::error::NOT_FOUND_ERROR);
}

#[test]
fn initial_view_matches_home() {
    let options = map_options("mapbox://styles/test");
    assert_eq!(options.center, HOME.center);
    assert!(options.min_zoom <= options.zoom && options.zoom <= options.max_zoom);
}

#[test]
fn animal_camera_flies_to_the_enclosure() {
    let giraffe = camera_for_animal("Giraphe").unwrap();
    assert_eq!(
        giraffe.center,
        Coordinates::new(-6.898077978828276, 33.952131597882044)
    );
    assert_eq!(giraffe.zoom, 19.0);
    assert_eq!(giraffe.pitch, 39.01);
    assert_eq!(giraffe.bearing, -147.5);
    assert_eq!(giraffe.duration, 5000);
    assert!(giraffe.essential);

    assert_eq!(
        camera_for_animal("Licorne").unwrap_err().code,
        crate::error::NOT_FOUND_ERROR
    );
}
