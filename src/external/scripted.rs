use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use crate::{
    entities::{Coordinates, RoutePath},
    error::{route_unavailable_error, Error},
    external::Directions,
};

/// In-process routing service answering from a fixed script.
#[derive(Default)]
pub struct ScriptedDirections {
    script: Vec<(Coordinates, Vec<Coordinates>, Duration)>,
    offline: AtomicBool,
    calls: AtomicUsize,
}

impl ScriptedDirections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(self, destination: Coordinates, path: Vec<Coordinates>) -> Self {
        self.with_delayed_route(destination, path, Duration::ZERO)
    }

    pub fn with_delayed_route(
        mut self,
        destination: Coordinates,
        path: Vec<Coordinates>,
        delay: Duration,
    ) -> Self {
        self.script.push((destination, path, delay));
        self
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Directions for ScriptedDirections {
    async fn route(
        &self,
        _origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RoutePath, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let (_, path, delay) = self
            .script
            .iter()
            .find(|(d, _, _)| *d == destination)
            .ok_or_else(route_unavailable_error)?;

        if !delay.is_zero() {
            tokio::time::sleep(*delay).await;
        }

        if self.offline.load(Ordering::SeqCst) || path.is_empty() {
            return Err(route_unavailable_error());
        }

        Ok(RoutePath {
            coordinates: path.clone(),
            distance: 100.0 * path.len() as f64,
            duration: 75.0 * path.len() as f64,
        })
    }
}

/// Serves `app` on a free local port for the rest of the test runtime.
/// Must be called from inside that runtime.
pub fn serve_local(app: axum::Router) -> SocketAddr {
    let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
        .serve(app.into_make_service());
    let addr = server.local_addr();

    tokio::spawn(server);
    addr
}
