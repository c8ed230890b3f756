use zoomap::api::serve;
use zoomap::config::Config;
use zoomap::engine::Engine;
use zoomap::external::MapboxDirections;

#[tokio::main]
async fn main() {
    let config = Config::from_env().expect("MAPBOX_ACCESS_TOKEN must be set");

    let directions = MapboxDirections::new(&config);
    let engine = Engine::new(config.clone(), directions).expect("base style failed to install");

    serve(engine, config.bind).await;
}
