mod map_api;
mod overlay_api;

use tokio::sync::Mutex;

use crate::{
    api::API,
    catalog,
    config::Config,
    error::Error,
    external::Directions,
    map::MapState,
    overlay::RouteOverlay,
};

pub struct Engine {
    config: Config,
    directions: Box<dyn Directions + Send + Sync>,
    overlay: Mutex<RouteOverlay<MapState>>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new<D>(config: Config, directions: D) -> Result<Self, Error>
    where
        D: Directions + Send + Sync + 'static,
    {
        let mut map = MapState::default();
        catalog::install_base_style(&mut map, config.start)?;

        tracing::info!(start = ?config.start, profile = ?config.profile, "map ready");

        Ok(Self {
            overlay: Mutex::new(RouteOverlay::new(config.start, map)),
            directions: Box::new(directions),
            config,
        })
    }
}

impl API for Engine {}
