use serde_json::json;

use crate::entities::{Layer, LayerKind};

/// Source holding one point feature per enclosure, keyed by its `Name` property.
pub const ANIMALS_SOURCE: &str = "Animals";

/// Names of the animals on display. Each doubles as icon image id and layer id.
pub const ANIMALS: &[&str] = &[
    "Crocodile",
    "Panthére",
    "Oryx algazelle",
    "Eléphant",
    "Rhinocéros",
    "Giraphe",
    "Zébre",
    "Lion de latlas",
    "Hippopotame",
    "Hyène rayée",
    "Vautours",
    "Dromadaire",
    "Perroquet",
    "Bovin",
    "Mouton soay",
    "Mouflon à manchette",
    "Chévre",
    "Tortue sulcata",
    "Lion Blanc",
    "Poule geante",
    "Ecureuil",
    "Cerf",
    "Renard",
    "Singe magot",
    "Autruche Africaine",
    "Autruche à coup rouge",
    "Oryx beisa",
    "Buffle",
    "Chimpanzé",
    "Cobe lechwé",
    "Addax",
    "Lycaon",
    "Babouin",
    "Gazelle thomson",
    "Cigogne blanche",
    "Daim européen",
    "émeus",
    "Flamant rose",
    "Mandrill",
    "Gazelle dorcas",
    "Perruche",
    "Mangouste",
    "Mangouste rayée",
    "Cygens",
    "Cygnes noirs",
    "Paon",
    "Poney",
    "Fennec",
    "Ibis chauve",
    "Canards",
    "Loutre",
    "Pélican",
    "Rapaces",
    "Buse",
    "Watussi",
    "Porc-épic",
    "Genette",
    "Vrai Roux",
    "Serval",
    "Lémur catta",
];

pub fn icon_path(name: &str) -> String {
    format!("./assets/img/icons/{}.png", name)
}

/// One symbol layer per animal, drawing its icon over the matching feature.
pub fn icon_layers() -> Vec<Layer> {
    ANIMALS
        .iter()
        .map(|name| {
            Layer::new(*name, LayerKind::Symbol, ANIMALS_SOURCE)
                .filter(json!(["==", "Name", name]))
                .layout(json!({
                    "visibility": "visible",
                    "icon-image": name,
                    "icon-size": 0.15,
                }))
                .minzoom(10.0)
        })
        .collect()
}

#[test]
fn one_icon_layer_per_animal() {
    use std::collections::HashSet;

    let layers = icon_layers();
    assert_eq!(layers.len(), 60);

    let ids: HashSet<&str> = layers.iter().map(|layer| layer.id.as_str()).collect();
    assert_eq!(ids.len(), layers.len());

    let lion = layers.iter().find(|layer| layer.id == "Lion de latlas").unwrap();
    assert_eq!(lion.filter, Some(json!(["==", "Name", "Lion de latlas"])));
    assert_eq!(lion.layout["icon-image"], "Lion de latlas");
    assert_eq!(lion.minzoom, Some(10.0));
}

#[test]
fn icon_path_points_into_assets() {
    assert_eq!(icon_path("Fennec"), "./assets/img/icons/Fennec.png");
}
