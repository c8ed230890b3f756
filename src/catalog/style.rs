use serde_json::json;

use crate::{
    catalog::animals::{icon_layers, ANIMALS_SOURCE},
    entities::{Coordinates, Layer, LayerKind, Source},
    error::Error,
    map::MapSurface,
};

/// Visitor circuits, drawn as one fill layer each.
const CIRCUITS: &[(&str, &str)] = &[("1", "#ebba5a"), ("2", "#df413f"), ("3", "#85339d")];

/// Adds the static sources and layers of the zoo, ending with the start
/// marker and the animal icons so they draw above the areas.
pub fn install_base_style<M: MapSurface>(map: &mut M, start: Coordinates) -> Result<(), Error> {
    map.add_source(ANIMALS_SOURCE, Source::geojson(json!("./data/Animals.geojson")))?;
    map.add_source("Circuits", Source::geojson(json!("./data/Circuits.geojson")))?;
    map.add_source("wa", Source::geojson(json!("./data/water.geojson")))?;
    map.add_source(
        "Constructions",
        Source::geojson(json!("./data/Constructions.geojson")),
    )?;

    // invisible hit target for hover and click
    map.add_layer(
        Layer::new(ANIMALS_SOURCE, LayerKind::Circle, ANIMALS_SOURCE).paint(json!({
            "circle-radius": 10,
            "circle-color": "#5b94c6",
            "circle-opacity": 0,
        })),
    )?;

    for (id, color) in CIRCUITS {
        map.add_layer(
            Layer::new(format!("Circuits{}", id), LayerKind::Fill, "Circuits")
                .filter(json!(["==", "id", id]))
                .paint(json!({ "fill-color": color, "fill-opacity": 1 })),
        )?;
    }

    map.add_layer(
        Layer::new("wa", LayerKind::Fill, "wa")
            .paint(json!({ "fill-color": "#43a2e4", "fill-opacity": 0.8 })),
    )?;

    map.add_layer(
        Layer::new("Constructions", LayerKind::FillExtrusion, "Constructions").paint(json!({
            "fill-extrusion-color": "#795f47",
            "fill-extrusion-height": 4,
            "fill-extrusion-base": 0,
            "fill-extrusion-opacity": 0.9,
        })),
    )?;

    map.add_source(
        "point",
        Source::geojson(json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {},
                "geometry": { "type": "Point", "coordinates": start.position() },
            }],
        })),
    )?;
    map.add_layer(
        Layer::new("point", LayerKind::Circle, "point")
            .paint(json!({ "circle-radius": 10, "circle-color": "#3887be" })),
    )?;

    for layer in icon_layers() {
        map.add_layer(layer)?;
    }

    Ok(())
}

#[test]
fn base_style_installs_once() {
    use crate::{config::DEFAULT_START, map::MapState};

    let mut map = MapState::default();
    install_base_style(&mut map, DEFAULT_START).unwrap();

    assert_eq!(map.source_count(), 5);
    assert_eq!(map.layers_on("Circuits"), 3);
    assert_eq!(map.layers_on(ANIMALS_SOURCE), 61);
    assert_eq!(
        map.source("point").unwrap().data()["features"][0]["geometry"]["coordinates"],
        json!([-6.894425, 33.955313])
    );

    let before = map.clone();
    assert!(install_base_style(&mut map, DEFAULT_START).is_err());
    assert_eq!(map.source("Animals"), before.source("Animals"));
    assert_eq!(map.layers().len(), before.layers().len());
}
