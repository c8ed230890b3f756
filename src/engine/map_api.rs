use super::Engine;

use async_trait::async_trait;

use crate::{
    api::{Icon, MapAPI, MapSnapshot},
    catalog::{self, Animal, CameraPreset, ANIMALS, CAMERA_PRESETS, DIRECTORY},
    entities::CameraOptions,
    error::Error,
};

#[async_trait]
impl MapAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn map(&self) -> MapSnapshot {
        let state = self.overlay.lock().await.map().clone();

        MapSnapshot {
            options: catalog::map_options(&self.config.style_url),
            state,
        }
    }

    fn icons(&self) -> Vec<Icon> {
        ANIMALS
            .iter()
            .map(|&name| Icon {
                name,
                image: catalog::icon_path(name),
                layer: name,
            })
            .collect()
    }

    fn camera_presets(&self) -> &'static [CameraPreset] {
        CAMERA_PRESETS
    }

    fn camera_preset(&self, name: &str) -> Result<CameraOptions, Error> {
        catalog::camera_preset(name)
    }

    fn animals(&self) -> &'static [Animal] {
        DIRECTORY
    }

    fn animal_camera(&self, name: &str) -> Result<CameraOptions, Error> {
        catalog::camera_for_animal(name)
    }
}

#[test]
fn snapshot_carries_options_and_base_style() {
    use crate::{config::Config, external::scripted::ScriptedDirections};
    use tokio_test::block_on;

    let config = Config::with_overrides("pk.test".into(), |key| match key {
        "MAPBOX_STYLE_URL" => Some("mapbox://styles/zoo/test".into()),
        _ => None,
    });
    let engine = Engine::new(config, ScriptedDirections::new()).unwrap();

    let snapshot = block_on(engine.map());
    assert_eq!(snapshot.options.style, "mapbox://styles/zoo/test");
    assert!(snapshot.state.source("route").is_none());
    assert!(snapshot.state.layer("point").is_some());

    let body = serde_json::to_value(&snapshot).unwrap();
    assert!(body["sources"]["Animals"].is_object());
    assert_eq!(body["layers"].as_array().unwrap().len(), snapshot.state.layers().len());
}

#[test]
fn icons_follow_the_animal_table() {
    use crate::{config::Config, external::scripted::ScriptedDirections};

    let engine = Engine::new(
        Config::with_overrides("pk.test".into(), |_| None),
        ScriptedDirections::new(),
    )
    .unwrap();

    let icons = engine.icons();
    assert_eq!(icons.len(), ANIMALS.len());
    assert_eq!(icons[0].image, "./assets/img/icons/Crocodile.png");
    assert_eq!(engine.camera_presets().len(), 8);
    assert_eq!(engine.animals().len(), 61);
    assert_eq!(engine.animal_camera("Fennec").unwrap().zoom, 19.0);
}
