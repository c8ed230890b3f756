use serde::Serialize;
use serde_json::{json, Value};

use crate::{
    entities::{Coordinates, Layer, LayerKind, Route, RoutePath, Source},
    error::Error,
    external::Directions,
    map::MapSurface,
};

/// Source and layer id of the walking route line.
pub const ROUTE_ID: &str = "route";
/// Source and layer id of the destination marker.
pub const DESTINATION_ID: &str = "end";

/// Order in which destination requests were issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OverlayUpdate {
    /// The map now shows this route and its destination.
    Applied { route: Route },
    /// A request issued later already put its route on the map.
    Superseded,
}

/// Owns the route line and destination marker of a map.
///
/// At most one of each exists: the first route creates the two resources,
/// every later one replaces their data in place. Responses are applied in
/// ticket order, so a slow response never overwrites a newer route.
#[derive(Debug)]
pub struct RouteOverlay<M> {
    start: Coordinates,
    map: M,
    issued: u64,
    displayed: Option<(Ticket, Route)>,
}

impl<M: MapSurface> RouteOverlay<M> {
    pub fn new(start: Coordinates, map: M) -> Self {
        Self {
            start,
            map,
            issued: 0,
            displayed: None,
        }
    }

    pub fn start(&self) -> Coordinates {
        self.start
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn route(&self) -> Option<&Route> {
        self.displayed.as_ref().map(|(_, route)| route)
    }

    /// Takes the ticket for a request about to be sent.
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Puts a fetched path on the map unless a newer one is already there.
    pub fn commit(
        &mut self,
        ticket: Ticket,
        destination: Coordinates,
        path: RoutePath,
    ) -> Result<OverlayUpdate, Error> {
        if let Some((shown, _)) = &self.displayed {
            if ticket <= *shown {
                tracing::info!(?ticket, ?shown, "discarding stale route");
                return Ok(OverlayUpdate::Superseded);
            }
        }

        let route = Route::new(self.start, destination, path);
        let marker = marker_geojson(destination);
        let line = route.to_geojson();

        // create both resources before replacing any data, so a rejected
        // layer leaves the map as it was
        let marker_created = self.create_if_absent(
            DESTINATION_ID,
            Source::geojson(marker.clone()),
            destination_layer(),
        )?;

        let route_created = match self.create_if_absent(
            ROUTE_ID,
            Source::geojson_with_line_metrics(line.clone()),
            route_layer(),
        ) {
            Ok(created) => created,
            Err(err) => {
                if marker_created {
                    self.remove(DESTINATION_ID);
                }
                return Err(err);
            }
        };

        if !marker_created {
            self.map.set_source_data(DESTINATION_ID, marker)?;
        }
        if !route_created {
            self.map.set_source_data(ROUTE_ID, line)?;
        }

        self.displayed = Some((ticket, route.clone()));

        Ok(OverlayUpdate::Applied { route })
    }

    /// Fetches the route to `destination` and displays it. On failure the
    /// map keeps whatever it showed before.
    pub async fn set_destination<D>(
        &mut self,
        directions: &D,
        destination: Coordinates,
    ) -> Result<OverlayUpdate, Error>
    where
        D: Directions + ?Sized,
    {
        let ticket = self.issue();
        let path = directions.route(self.start, destination).await?;

        self.commit(ticket, destination, path)
    }

    /// Adds `id` as a source plus its layer. Returns false if the source
    /// already exists. A rejected layer takes its source back out.
    fn create_if_absent(&mut self, id: &str, source: Source, layer: Layer) -> Result<bool, Error> {
        if self.map.has_source(id) {
            return Ok(false);
        }

        self.map.add_source(id, source)?;

        if let Err(err) = self.map.add_layer(layer) {
            self.remove(id);
            return Err(err);
        }

        Ok(true)
    }

    fn remove(&mut self, id: &str) {
        // the layer is missing when it was the one rejected
        let _ = self.map.remove_layer(id);

        if let Err(err) = self.map.remove_source(id) {
            tracing::warn!(id, error = %err, "rollback left a source behind");
        }
    }
}

fn destination_layer() -> Layer {
    Layer::new(DESTINATION_ID, LayerKind::Circle, DESTINATION_ID)
        .paint(json!({ "circle-radius": 10, "circle-color": "#f30" }))
}

fn route_layer() -> Layer {
    Layer::new(ROUTE_ID, LayerKind::Line, ROUTE_ID)
        .layout(json!({ "line-join": "round", "line-cap": "round" }))
        .paint(json!({
            "line-color": "red",
            "line-width": 10,
            "line-opacity": 1,
            "line-gradient": [
                "interpolate", ["linear"], ["line-progress"],
                0, "#007acc",
                1, "#001e32"
            ],
        }))
}

fn marker_geojson(at: Coordinates) -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {},
            "geometry": { "type": "Point", "coordinates": at.position() },
        }],
    })
}

#[cfg(test)]
fn overlay_fixture() -> (
    RouteOverlay<crate::map::MapState>,
    crate::external::scripted::ScriptedDirections,
    Coordinates,
    Coordinates,
) {
    use crate::{config::DEFAULT_START, external::scripted::ScriptedDirections, map::MapState};

    let a = Coordinates::new(-6.8976, 33.9514);
    let b = Coordinates::new(-6.898077978828276, 33.952131597882044);

    let directions = ScriptedDirections::new()
        .with_route(
            a,
            vec![DEFAULT_START, Coordinates::new(-6.896, 33.953), a],
        )
        .with_route(
            b,
            vec![DEFAULT_START, Coordinates::new(-6.8965, 33.9538), b],
        );

    (
        RouteOverlay::new(DEFAULT_START, MapState::default()),
        directions,
        a,
        b,
    )
}

#[cfg(test)]
fn displayed_line(map: &crate::map::MapState) -> Value {
    map.source(ROUTE_ID).unwrap().data()["geometry"]["coordinates"].clone()
}

#[cfg(test)]
fn displayed_marker(map: &crate::map::MapState) -> Value {
    map.source(DESTINATION_ID).unwrap().data()["features"][0]["geometry"]["coordinates"].clone()
}

#[test]
fn first_destination_draws_line_and_marker() {
    use tokio_test::block_on;

    let (mut overlay, directions, a, _) = overlay_fixture();
    assert!(overlay.route().is_none());

    let update = block_on(overlay.set_destination(&directions, a)).unwrap();
    assert!(matches!(update, OverlayUpdate::Applied { .. }));

    let map = overlay.map();
    assert_eq!(
        displayed_line(map),
        json!([[-6.894425, 33.955313], [-6.896, 33.953], [-6.8976, 33.9514]])
    );
    assert_eq!(displayed_marker(map), json!([-6.8976, 33.9514]));
    assert_eq!(
        map.source(ROUTE_ID),
        Some(&Source::geojson_with_line_metrics(
            overlay.route().unwrap().to_geojson()
        ))
    );
    assert_eq!(map.layer(ROUTE_ID).unwrap().kind, LayerKind::Line);
    assert_eq!(map.layer(DESTINATION_ID).unwrap().paint["circle-color"], "#f30");
    assert_eq!(directions.calls(), 1);
}

#[test]
fn new_destination_replaces_resources_in_place() {
    use tokio_test::block_on;

    let (mut overlay, directions, a, b) = overlay_fixture();

    block_on(overlay.set_destination(&directions, a)).unwrap();
    block_on(overlay.set_destination(&directions, b)).unwrap();

    let map = overlay.map();
    assert_eq!(map.source_count(), 2);
    assert_eq!(map.layers_on(ROUTE_ID), 1);
    assert_eq!(map.layers_on(DESTINATION_ID), 1);
    assert_eq!(displayed_marker(map), json!(b.position()));
    assert_eq!(
        displayed_line(map),
        json!([[-6.894425, 33.955313], [-6.8965, 33.9538], b.position()])
    );
    assert_eq!(overlay.route().unwrap().destination, b);
    assert_eq!(directions.calls(), 2);
}

#[test]
fn failed_request_keeps_previous_route() {
    use tokio_test::block_on;

    let (mut overlay, directions, a, b) = overlay_fixture();

    block_on(overlay.set_destination(&directions, a)).unwrap();
    let before = overlay.map().clone();
    let route_id = overlay.route().unwrap().id;

    directions.set_offline(true);
    let err = block_on(overlay.set_destination(&directions, b)).unwrap_err();

    assert!(err.is_route_unavailable());
    assert_eq!(overlay.map(), &before);
    assert_eq!(overlay.route().unwrap().id, route_id);
    assert_eq!(displayed_marker(overlay.map()), json!(a.position()));
}

#[test]
fn unknown_destination_reports_unavailable_on_empty_map() {
    use tokio_test::block_on;

    let (mut overlay, directions, _, _) = overlay_fixture();

    let err = block_on(overlay.set_destination(&directions, Coordinates::new(0.0, 0.0)))
        .unwrap_err();

    assert!(err.is_route_unavailable());
    assert_eq!(overlay.map().source_count(), 0);
    assert!(overlay.route().is_none());
}

#[test]
fn repeating_a_destination_is_idempotent() {
    use tokio_test::block_on;

    let (mut once, directions, a, _) = overlay_fixture();
    block_on(once.set_destination(&directions, a)).unwrap();

    let (mut twice, directions, a, _) = overlay_fixture();
    block_on(twice.set_destination(&directions, a)).unwrap();
    block_on(twice.set_destination(&directions, a)).unwrap();

    assert_eq!(once.map(), twice.map());
}

#[test]
fn late_response_for_older_ticket_is_discarded() {
    let (mut overlay, _, a, b) = overlay_fixture();
    let path = |to: Coordinates| RoutePath {
        coordinates: vec![overlay_start(), to],
        distance: 1.0,
        duration: 1.0,
    };

    let first = overlay.issue();
    let second = overlay.issue();

    let update = overlay.commit(second, b, path(b)).unwrap();
    assert!(matches!(update, OverlayUpdate::Applied { .. }));

    let update = overlay.commit(first, a, path(a)).unwrap();
    assert!(matches!(update, OverlayUpdate::Superseded));

    assert_eq!(displayed_marker(overlay.map()), json!(b.position()));
    assert_eq!(overlay.route().unwrap().destination, b);
}

#[cfg(test)]
fn overlay_start() -> Coordinates {
    crate::config::DEFAULT_START
}

#[cfg(test)]
#[derive(Default)]
struct RejectingRouteLayer {
    inner: crate::map::MapState,
    reject: bool,
}

#[cfg(test)]
impl MapSurface for RejectingRouteLayer {
    fn has_source(&self, id: &str) -> bool {
        self.inner.has_source(id)
    }

    fn add_source(&mut self, id: &str, source: Source) -> Result<(), Error> {
        self.inner.add_source(id, source)
    }

    fn add_layer(&mut self, layer: Layer) -> Result<(), Error> {
        if self.reject && layer.id == ROUTE_ID {
            return Err(crate::error::invalid_state_error());
        }
        self.inner.add_layer(layer)
    }

    fn set_source_data(&mut self, id: &str, data: Value) -> Result<(), Error> {
        self.inner.set_source_data(id, data)
    }

    fn remove_layer(&mut self, id: &str) -> Result<(), Error> {
        self.inner.remove_layer(id)
    }

    fn remove_source(&mut self, id: &str) -> Result<(), Error> {
        self.inner.remove_source(id)
    }
}

#[test]
fn rejected_route_layer_leaves_map_untouched() {
    let a = Coordinates::new(-6.8976, 33.9514);
    let path = RoutePath {
        coordinates: vec![overlay_start(), a],
        distance: 1.0,
        duration: 1.0,
    };

    let mut overlay = RouteOverlay::new(
        overlay_start(),
        RejectingRouteLayer {
            reject: true,
            ..Default::default()
        },
    );

    let ticket = overlay.issue();
    assert!(overlay.commit(ticket, a, path.clone()).is_err());

    let map = &overlay.map().inner;
    assert_eq!(map.source_count(), 0);
    assert!(map.layers().is_empty());
    assert!(overlay.route().is_none());

    overlay.map.reject = false;
    let ticket = overlay.issue();
    let update = overlay.commit(ticket, a, path).unwrap();
    assert!(matches!(update, OverlayUpdate::Applied { .. }));

    let map = &overlay.map().inner;
    assert_eq!(map.source_count(), 2);
    assert_eq!(map.layers_on(ROUTE_ID), 1);
    assert_eq!(map.layers_on(DESTINATION_ID), 1);
    assert_eq!(overlay.route().unwrap().destination, a);
}
