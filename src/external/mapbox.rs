use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    entities::{Coordinates, RoutePath},
    error::{route_unavailable_error, Error},
    external::{Directions, Profile},
};

/// Client for the Mapbox Directions API (v5).
#[derive(Clone, Debug)]
pub struct MapboxDirections {
    client: reqwest::Client,
    api_base: String,
    access_token: String,
    profile: Profile,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DirectionsRoute {
    distance: f64,
    duration: f64,
    geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Geometry {
    coordinates: Vec<[f64; 2]>,
}

impl Response {
    fn into_path(self) -> Result<RoutePath, Error> {
        if self.code != "Ok" {
            tracing::warn!(code = %self.code, message = ?self.message, "directions refused");
            return Err(route_unavailable_error());
        }

        let best = self.routes.into_iter().next().ok_or_else(|| {
            tracing::warn!("directions returned no routes");
            route_unavailable_error()
        })?;

        if best.geometry.coordinates.is_empty() {
            tracing::warn!("directions returned an empty geometry");
            return Err(route_unavailable_error());
        }

        Ok(RoutePath {
            coordinates: best.geometry.coordinates.into_iter().map(Coordinates::from).collect(),
            distance: best.distance,
            duration: best.duration,
        })
    }
}

impl MapboxDirections {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config.api_base.clone(),
            access_token: config.access_token.clone(),
            profile: config.profile,
        }
    }

    fn url(&self, origin: Coordinates, destination: Coordinates) -> String {
        let origin: String = origin.into();
        let destination: String = destination.into();

        format!(
            "{}/directions/v5/mapbox/{}/{};{}",
            self.api_base,
            self.profile.name(),
            origin,
            destination
        )
    }
}

#[async_trait]
impl Directions for MapboxDirections {
    #[tracing::instrument(skip(self))]
    async fn route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RoutePath, Error> {
        let res = self
            .client
            .get(self.url(origin, destination))
            .query(&[("steps", "true")])
            .query(&[("geometries", "geojson")])
            .query(&[("access_token", self.access_token.as_str())])
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "directions request failed");
                route_unavailable_error()
            })?;

        let status_code = res.status().as_u16();

        if status_code != 200 {
            tracing::warn!(status_code, "directions returned an error status");
            return Err(route_unavailable_error());
        }

        let data: Response = res.json().await.map_err(|err| {
            tracing::warn!(error = %err, "directions body unreadable");
            route_unavailable_error()
        })?;

        data.into_path()
    }
}

#[test]
fn url_uses_profile_and_lng_lat_waypoints() {
    let config = Config::with_overrides("pk.test".into(), |_| None);
    let client = MapboxDirections::new(&config);

    assert_eq!(
        client.url(
            Coordinates::new(-6.894425, 33.955313),
            Coordinates::new(-6.8976, 33.9514)
        ),
        "https://api.mapbox.com/directions/v5/mapbox/walking/-6.894425,33.955313;-6.8976,33.9514"
    );
}

#[test]
fn first_route_is_returned_unchanged() {
    let body = serde_json::json!({
        "code": "Ok",
        "routes": [
            {
                "distance": 512.4,
                "duration": 368.9,
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[-6.894425, 33.955313], [-6.896, 33.953], [-6.8976, 33.9514]]
                },
                "legs": []
            },
            {
                "distance": 900.0,
                "duration": 700.0,
                "geometry": { "type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]] }
            }
        ],
        "waypoints": []
    });

    let response: Response = serde_json::from_value(body).unwrap();
    let path = response.into_path().unwrap();

    assert_eq!(
        path.coordinates,
        vec![
            Coordinates::new(-6.894425, 33.955313),
            Coordinates::new(-6.896, 33.953),
            Coordinates::new(-6.8976, 33.9514),
        ]
    );
    assert_eq!(path.distance, 512.4);
    assert_eq!(path.duration, 368.9);
}

#[test]
fn empty_or_refused_answers_are_unavailable() {
    let no_routes: Response =
        serde_json::from_value(serde_json::json!({ "code": "Ok", "routes": [] })).unwrap();
    assert!(no_routes.into_path().unwrap_err().is_route_unavailable());

    let no_segment: Response = serde_json::from_value(serde_json::json!({
        "code": "NoSegment",
        "message": "No road segment could be matched for coordinates"
    }))
    .unwrap();
    assert!(no_segment.into_path().unwrap_err().is_route_unavailable());

    let empty_geometry: Response = serde_json::from_value(serde_json::json!({
        "code": "Ok",
        "routes": [{ "distance": 0.0, "duration": 0.0, "geometry": { "coordinates": [] } }]
    }))
    .unwrap();
    assert!(empty_geometry.into_path().unwrap_err().is_route_unavailable());
}

#[cfg(test)]
fn client_for(api_base: String) -> MapboxDirections {
    let config = Config::with_overrides("pk.test".into(), |key| {
        (key == "MAPBOX_API_BASE").then(|| api_base.clone())
    });

    MapboxDirections::new(&config)
}

#[test]
fn unreachable_service_is_unavailable() {
    use tokio_test::block_on;

    let client = client_for("http://127.0.0.1:1".into());
    let err = block_on(client.route(
        Coordinates::new(-6.894425, 33.955313),
        Coordinates::new(-6.8976, 33.9514),
    ))
    .unwrap_err();

    assert!(err.is_route_unavailable());
}

#[test]
fn http_failures_are_unavailable() {
    use crate::external::scripted::serve_local;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use std::collections::HashMap;
    use tokio_test::block_on;

    let origin = Coordinates::new(-6.894425, 33.955313);
    let destination = Coordinates::new(-6.8976, 33.9514);

    block_on(async {
        let app = Router::new()
            .route(
                "/broken/*rest",
                get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            )
            .route("/garbled/*rest", get(|| async { "<html>busy</html>" }))
            .route(
                "/empty/*rest",
                get(|| async { Json(serde_json::json!({ "code": "Ok", "routes": [] })) }),
            )
            .route(
                "/ok/*rest",
                get(|axum::extract::Query(query): axum::extract::Query<HashMap<String, String>>| async move {
                    if query.get("access_token").map(String::as_str) != Some("pk.test")
                        || query.get("geometries").map(String::as_str) != Some("geojson")
                    {
                        return Err(StatusCode::UNAUTHORIZED);
                    }

                    Ok(Json(serde_json::json!({
                        "code": "Ok",
                        "routes": [{
                            "distance": 412.0,
                            "duration": 297.0,
                            "geometry": { "coordinates": [[-6.894425, 33.955313], [-6.8976, 33.9514]] }
                        }]
                    })))
                }),
            );
        let addr = serve_local(app);

        for prefix in ["missing", "broken", "garbled", "empty"] {
            let client = client_for(format!("http://{}/{}", addr, prefix));
            let err = client.route(origin, destination).await.unwrap_err();
            assert!(err.is_route_unavailable(), "{}: {}", prefix, err);
        }

        let client = client_for(format!("http://{}/ok", addr));
        let path = client.route(origin, destination).await.unwrap();
        assert_eq!(path.coordinates, vec![origin, destination]);
        assert_eq!(path.distance, 412.0);
    });
}
