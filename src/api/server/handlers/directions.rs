use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::{
    api::interface::DynAPI,
    entities::{Coordinates, Route},
    error::Error,
    overlay::OverlayUpdate,
};

#[derive(Serialize, Deserialize)]
pub struct CreateDirectionsParams {
    destination: Coordinates,
    /// Longitude of the click that picked the destination feature.
    #[serde(default)]
    clicked_lng: Option<f64>,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateDirectionsParams>,
) -> Result<Json<OverlayUpdate>, Error> {
    let destination = match params.clicked_lng {
        Some(lng) if lng.is_finite() => params.destination.wrapped_near(lng),
        _ => params.destination,
    };

    let update = api.set_destination(destination).await?;

    Ok(update.into())
}

pub async fn show(Extension(api): Extension<DynAPI>) -> Result<Json<Route>, Error> {
    let route = api.current_route().await?;

    Ok(route.into())
}

#[test]
fn create_applies_route_for_clicked_copy() {
    use crate::{
        config::{Config, DEFAULT_START},
        engine::Engine,
        external::scripted::ScriptedDirections,
    };
    use std::sync::Arc;
    use tokio_test::block_on;

    // exactly representable, so unwrapping by 360 degrees is lossless
    let giraffe = Coordinates::new(-6.875, 33.952131597882044);
    let directions = ScriptedDirections::new().with_route(giraffe, vec![DEFAULT_START, giraffe]);
    let engine = Engine::new(Config::with_overrides("pk.test".into(), |_| None), directions).unwrap();
    let api = Arc::new(engine) as DynAPI;

    let params: CreateDirectionsParams = serde_json::from_value(serde_json::json!({
        "destination": { "lng": giraffe.lng - 360.0, "lat": giraffe.lat },
        "clicked_lng": -6.9,
    }))
    .unwrap();

    let Json(update) = block_on(create(Extension(api.clone()), Json(params))).unwrap();
    let body = serde_json::to_value(&update).unwrap();
    assert_eq!(body["status"], "applied");
    assert_eq!(body["route"]["destination"]["lng"], giraffe.lng);

    let Json(route) = block_on(show(Extension(api))).unwrap();
    assert_eq!(route.destination, giraffe);
}

#[test]
fn show_without_route_is_not_found() {
    use crate::{config::Config, engine::Engine, external::scripted::ScriptedDirections};
    use std::sync::Arc;
    use tokio_test::block_on;

    let engine = Engine::new(
        Config::with_overrides("pk.test".into(), |_| None),
        ScriptedDirections::new(),
    )
    .unwrap();
    let api = Arc::new(engine) as DynAPI;

    let err = block_on(show(Extension(api))).unwrap_err();
    assert_eq!(err.code, crate::error::NOT_FOUND_ERROR);
}
