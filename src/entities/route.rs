use chrono::{DateTime, Utc};
use geo_types::{Coord, LineString};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::entities::Coordinates;

/// The best path a directions service returned for one origin/destination pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    pub coordinates: Vec<Coordinates>,
    /// Metres.
    pub distance: f64,
    /// Seconds.
    pub duration: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Route {
    pub id: Uuid,
    pub origin: Coordinates,
    pub destination: Coordinates,
    pub path: RoutePath,
    pub fetched_at: DateTime<Utc>,
}

impl Route {
    pub fn new(origin: Coordinates, destination: Coordinates, path: RoutePath) -> Self {
        Route {
            id: Uuid::new_v4(),
            origin,
            destination,
            path,
            fetched_at: Utc::now(),
        }
    }

    pub fn line_string(&self) -> LineString<f64> {
        self.path.coordinates.iter().copied().map(Coord::<f64>::from).collect()
    }

    /// GeoJSON Feature holding the path as a LineString.
    pub fn to_geojson(&self) -> Value {
        let coordinates: Vec<[f64; 2]> = self.line_string().coords().map(|c| [c.x, c.y]).collect();

        json!({
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "LineString",
                "coordinates": coordinates,
            }
        })
    }
}

#[test]
fn geojson_keeps_path_order() {
    let origin = Coordinates::new(-6.894425, 33.955313);
    let destination = Coordinates::new(-6.8976, 33.9514);
    let path = RoutePath {
        coordinates: vec![origin, Coordinates::new(-6.896, 33.953), destination],
        distance: 512.4,
        duration: 368.9,
    };

    let route = Route::new(origin, destination, path);

    assert_eq!(
        route.to_geojson()["geometry"]["coordinates"],
        json!([[-6.894425, 33.955313], [-6.896, 33.953], [-6.8976, 33.9514]])
    );
}
