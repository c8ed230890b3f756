mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::server::handlers::{camera, directions, map};
use crate::api::{interface::DynAPI, API};

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/map", get(map::show))
        .route("/icons", get(map::icons))
        .route("/directions", post(directions::create).get(directions::show))
        .route("/camera", get(camera::list))
        .route("/camera/:name", get(camera::show))
        .route("/animals", get(camera::animals))
        .route("/animals/:name/camera", get(camera::animal))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) {
    tracing_subscriber::fmt::init();

    let api = Arc::new(api) as DynAPI;
    let app = router(api);

    tracing::info!("listening on {}", addr);

    if let Err(err) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!(error = %err, "server stopped");
    }
}

#[cfg(test)]
fn local_app() -> SocketAddr {
    use crate::{
        config::{Config, DEFAULT_START},
        engine::Engine,
        entities::Coordinates,
        external::scripted::{serve_local, ScriptedDirections},
    };

    let fennec = Coordinates::new(-6.8963, 33.9541);
    let directions = ScriptedDirections::new().with_route(fennec, vec![DEFAULT_START, fennec]);
    let engine = Engine::new(Config::with_overrides("pk.test".into(), |_| None), directions).unwrap();

    serve_local(router(Arc::new(engine) as DynAPI))
}

#[test]
fn catalog_routes_answer() {
    use reqwest::StatusCode;
    use serde_json::Value;
    use tokio_test::block_on;

    block_on(async {
        let addr = local_app();
        let client = reqwest::Client::new();
        let get = |path: &str| client.get(format!("http://{}{}", addr, path)).send();

        for path in ["/map", "/icons", "/camera", "/camera/desert", "/animals"] {
            assert_eq!(get(path).await.unwrap().status(), StatusCode::OK, "{}", path);
        }

        let res = get("/camera/unknown").await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["code"], crate::error::NOT_FOUND_ERROR);

        let res = get("/animals/Giraphe/camera").await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["zoom"], 19.0);
        assert_eq!(body["essential"], true);

        let res = get("/animals/Licorne/camera").await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    });
}

#[test]
fn directions_routes_answer() {
    use reqwest::StatusCode;
    use serde_json::{json, Value};
    use tokio_test::block_on;

    block_on(async {
        let addr = local_app();
        let client = reqwest::Client::new();
        let url = format!("http://{}/directions", addr);

        let res = client.get(&url).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let res = client
            .post(&url)
            .json(&json!({ "destination": { "lng": 0.0, "lat": 0.0 } }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_GATEWAY);

        let res = client
            .post(&url)
            .json(&json!({ "destination": { "lng": -6.8963, "lat": 33.9541 } }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["status"], "applied");

        let res = client.get(&url).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["destination"]["lat"], 33.9541);
    });
}
