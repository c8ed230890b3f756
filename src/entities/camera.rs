use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

/// Target of a map fly-to animation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraOptions {
    pub center: Coordinates,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
    /// Milliseconds.
    pub duration: u32,
    /// Whether the flight still animates under `prefers-reduced-motion`.
    pub essential: bool,
}

/// Initial map view handed to the engine on construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    pub style: String,
    pub center: Coordinates,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}
