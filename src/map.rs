use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    entities::{Layer, Source},
    error::{invalid_state_error, Error},
};

/// The source/layer registry of a map engine.
///
/// Ids are unique: adding a source or layer whose id is already taken is an
/// error, so callers must check `has_source` and fall back to
/// `set_source_data` to update a resource in place. A source can only be
/// removed once no layer draws it.
pub trait MapSurface {
    fn has_source(&self, id: &str) -> bool;
    fn add_source(&mut self, id: &str, source: Source) -> Result<(), Error>;
    fn add_layer(&mut self, layer: Layer) -> Result<(), Error>;
    fn set_source_data(&mut self, id: &str, data: Value) -> Result<(), Error>;
    fn remove_layer(&mut self, id: &str) -> Result<(), Error>;
    fn remove_source(&mut self, id: &str) -> Result<(), Error>;
}

/// In-memory map model, serialized for the browser to replay onto its engine.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapState {
    sources: BTreeMap<String, Source>,
    layers: Vec<Layer>,
}

impl MapState {
    pub fn source(&self, id: &str) -> Option<&Source> {
        self.sources.get(id)
    }

    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn layers_on(&self, source: &str) -> usize {
        self.layers.iter().filter(|layer| layer.source == source).count()
    }
}

impl MapSurface for MapState {
    fn has_source(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    fn add_source(&mut self, id: &str, source: Source) -> Result<(), Error> {
        if self.sources.contains_key(id) {
            tracing::warn!(id, "source already exists");
            return Err(invalid_state_error());
        }

        self.sources.insert(id.to_string(), source);
        Ok(())
    }

    fn add_layer(&mut self, layer: Layer) -> Result<(), Error> {
        if self.layer(&layer.id).is_some() || !self.sources.contains_key(&layer.source) {
            tracing::warn!(id = %layer.id, source = %layer.source, "layer rejected");
            return Err(invalid_state_error());
        }

        self.layers.push(layer);
        Ok(())
    }

    fn set_source_data(&mut self, id: &str, data: Value) -> Result<(), Error> {
        match self.sources.get_mut(id) {
            Some(Source::Geojson { data: current, .. }) => {
                *current = data;
                Ok(())
            }
            None => Err(invalid_state_error()),
        }
    }

    fn remove_layer(&mut self, id: &str) -> Result<(), Error> {
        let index = self
            .layers
            .iter()
            .position(|layer| layer.id == id)
            .ok_or_else(invalid_state_error)?;

        self.layers.remove(index);
        Ok(())
    }

    fn remove_source(&mut self, id: &str) -> Result<(), Error> {
        if self.layers_on(id) > 0 {
            tracing::warn!(id, "source still in use");
            return Err(invalid_state_error());
        }

        self.sources
            .remove(id)
            .map(|_| ())
            .ok_or_else(invalid_state_error)
    }
}

#[test]
fn duplicate_ids_are_rejected() {
    use crate::entities::LayerKind;
    use serde_json::json;

    let mut map = MapState::default();

    map.add_source("end", Source::geojson(json!({}))).unwrap();
    assert!(map.add_source("end", Source::geojson(json!({}))).is_err());

    map.add_layer(Layer::new("end", LayerKind::Circle, "end")).unwrap();
    assert!(map.add_layer(Layer::new("end", LayerKind::Circle, "end")).is_err());

    assert_eq!(map.source_count(), 1);
    assert_eq!(map.layers_on("end"), 1);
}

#[test]
fn layers_need_an_existing_source() {
    use crate::entities::LayerKind;

    let mut map = MapState::default();

    assert!(map.add_layer(Layer::new("route", LayerKind::Line, "route")).is_err());
    assert!(map.layers().is_empty());
}

#[test]
fn set_source_data_replaces_in_place() {
    use serde_json::json;

    let mut map = MapState::default();

    assert!(map.set_source_data("route", json!(1)).is_err());

    map.add_source("route", Source::geojson_with_line_metrics(json!(1))).unwrap();
    map.set_source_data("route", json!(2)).unwrap();

    assert_eq!(
        map.source("route"),
        Some(&Source::geojson_with_line_metrics(json!(2)))
    );
}

#[test]
fn sources_in_use_cannot_be_removed() {
    use crate::entities::LayerKind;
    use serde_json::json;

    let mut map = MapState::default();
    map.add_source("end", Source::geojson(json!({}))).unwrap();
    map.add_layer(Layer::new("end", LayerKind::Circle, "end")).unwrap();

    assert!(map.remove_source("end").is_err());
    map.remove_layer("end").unwrap();
    map.remove_source("end").unwrap();

    assert!(!map.has_source("end"));
    assert!(map.remove_layer("end").is_err());
    assert!(map.remove_source("end").is_err());
}
