use super::Engine;

use async_trait::async_trait;

use crate::{
    api::OverlayAPI,
    entities::{Coordinates, Route},
    error::{not_found_error, Error},
    overlay::OverlayUpdate,
};

#[async_trait]
impl OverlayAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn set_destination(&self, destination: Coordinates) -> Result<OverlayUpdate, Error> {
        let destination = destination.validate()?;

        // the lock is not held while the request is in flight
        let (ticket, start) = {
            let mut overlay = self.overlay.lock().await;
            (overlay.issue(), overlay.start())
        };

        let path = self.directions.route(start, destination).await?;

        let update = self.overlay.lock().await.commit(ticket, destination, path)?;

        if let OverlayUpdate::Applied { route } = &update {
            tracing::info!(
                route = %route.id,
                points = route.path.coordinates.len(),
                distance = route.path.distance,
                "route displayed"
            );
        }

        Ok(update)
    }

    #[tracing::instrument(skip(self))]
    async fn current_route(&self) -> Result<Route, Error> {
        self.overlay
            .lock()
            .await
            .route()
            .cloned()
            .ok_or_else(not_found_error)
    }
}

#[cfg(test)]
fn engine_with(directions: crate::external::scripted::ScriptedDirections) -> Engine {
    use crate::config::Config;

    Engine::new(Config::with_overrides("pk.test".into(), |_| None), directions).unwrap()
}

#[test]
fn sequential_destinations_leave_one_route() {
    use crate::{api::MapAPI, config::DEFAULT_START, external::scripted::ScriptedDirections};
    use tokio_test::block_on;

    let a = Coordinates::new(-6.8976, 33.9514);
    let b = Coordinates::new(-6.896043436352688, 33.953558594299601);
    let engine = engine_with(
        ScriptedDirections::new()
            .with_route(a, vec![DEFAULT_START, a])
            .with_route(b, vec![DEFAULT_START, b]),
    );

    block_on(engine.set_destination(a)).unwrap();
    block_on(engine.set_destination(b)).unwrap();

    let snapshot = block_on(engine.map());
    assert_eq!(snapshot.state.layers_on("route"), 1);
    assert_eq!(snapshot.state.layers_on("end"), 1);
    assert_eq!(block_on(engine.current_route()).unwrap().destination, b);
}

#[test]
fn failure_is_reported_and_state_kept() {
    use crate::{api::MapAPI, config::DEFAULT_START, external::scripted::ScriptedDirections};
    use tokio_test::block_on;

    let a = Coordinates::new(-6.8976, 33.9514);
    let b = Coordinates::new(-6.896043436352688, 33.953558594299601);
    let engine = engine_with(ScriptedDirections::new().with_route(a, vec![DEFAULT_START, a]));

    block_on(engine.set_destination(a)).unwrap();
    let before = block_on(engine.map()).state;

    let err = block_on(engine.set_destination(b)).unwrap_err();
    assert!(err.is_route_unavailable());
    assert_eq!(block_on(engine.map()).state, before);
    assert_eq!(block_on(engine.current_route()).unwrap().destination, a);
}

#[test]
fn non_finite_destination_is_rejected_before_any_request() {
    use crate::external::scripted::ScriptedDirections;
    use std::sync::Arc;
    use tokio_test::block_on;

    let directions = Arc::new(ScriptedDirections::new());
    let engine = Engine::new(
        crate::config::Config::with_overrides("pk.test".into(), |_| None),
        directions.clone(),
    )
    .unwrap();

    let err = block_on(engine.set_destination(Coordinates::new(f64::NAN, 33.9))).unwrap_err();
    assert_eq!(err.code, crate::error::INVALID_INPUT_ERROR);
    assert_eq!(directions.calls(), 0);
}

#[test]
fn slower_older_request_does_not_overwrite_newer_route() {
    use crate::{config::DEFAULT_START, external::scripted::ScriptedDirections};
    use std::time::Duration;
    use tokio_test::block_on;

    let slow = Coordinates::new(-6.8976, 33.9514);
    let fast = Coordinates::new(-6.896043436352688, 33.953558594299601);
    let engine = engine_with(
        ScriptedDirections::new()
            .with_delayed_route(slow, vec![DEFAULT_START, slow], Duration::from_millis(50))
            .with_route(fast, vec![DEFAULT_START, fast]),
    );

    // `slow` is polled first, so it takes the older ticket
    let (slow_update, fast_update) = block_on(async {
        futures::join!(engine.set_destination(slow), engine.set_destination(fast))
    });

    assert!(matches!(fast_update.unwrap(), OverlayUpdate::Applied { .. }));
    assert!(matches!(slow_update.unwrap(), OverlayUpdate::Superseded));
    assert_eq!(block_on(engine.current_route()).unwrap().destination, fast);
}
