use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::catalog::{Animal, CameraPreset};
use crate::entities::{CameraOptions, Coordinates, MapOptions, Route};
use crate::error::Error;
use crate::map::MapState;
use crate::overlay::OverlayUpdate;

/// Everything the browser needs to build its map: the initial view plus the
/// sources and layers to add, overlay included.
#[derive(Clone, Debug, Serialize)]
pub struct MapSnapshot {
    pub options: MapOptions,
    #[serde(flatten)]
    pub state: MapState,
}

#[derive(Clone, Debug, Serialize)]
pub struct Icon {
    pub name: &'static str,
    pub image: String,
    pub layer: &'static str,
}

#[async_trait]
pub trait MapAPI {
    async fn map(&self) -> MapSnapshot;
    fn icons(&self) -> Vec<Icon>;
    fn camera_presets(&self) -> &'static [CameraPreset];
    fn camera_preset(&self, name: &str) -> Result<CameraOptions, Error>;
    fn animals(&self) -> &'static [Animal];
    fn animal_camera(&self, name: &str) -> Result<CameraOptions, Error>;
}

#[async_trait]
pub trait OverlayAPI {
    async fn set_destination(&self, destination: Coordinates) -> Result<OverlayUpdate, Error>;
    async fn current_route(&self) -> Result<Route, Error>;
}

pub trait API: MapAPI + OverlayAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
