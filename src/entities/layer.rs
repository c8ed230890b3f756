use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A map-engine data source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Source {
    Geojson {
        /// Inline GeoJSON, or a URL string the engine fetches itself.
        data: Value,
        #[serde(rename = "lineMetrics", default, skip_serializing_if = "std::ops::Not::not")]
        line_metrics: bool,
    },
}

impl Source {
    pub fn geojson(data: Value) -> Self {
        Source::Geojson {
            data,
            line_metrics: false,
        }
    }

    /// Required by layers that paint a `line-gradient`.
    pub fn geojson_with_line_metrics(data: Value) -> Self {
        Source::Geojson {
            data,
            line_metrics: true,
        }
    }

    pub fn data(&self) -> &Value {
        match self {
            Source::Geojson { data, .. } => data,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerKind {
    Circle,
    Line,
    Fill,
    FillExtrusion,
    Symbol,
}

/// A styled view of one source, in the engine's style JSON shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LayerKind,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub layout: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub paint: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minzoom: Option<f64>,
}

impl Layer {
    pub fn new(id: impl Into<String>, kind: LayerKind, source: impl Into<String>) -> Self {
        Layer {
            id: id.into(),
            kind,
            source: source.into(),
            filter: None,
            layout: Value::Null,
            paint: Value::Null,
            minzoom: None,
        }
    }

    pub fn filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn layout(mut self, layout: Value) -> Self {
        self.layout = layout;
        self
    }

    pub fn paint(mut self, paint: Value) -> Self {
        self.paint = paint;
        self
    }

    pub fn minzoom(mut self, minzoom: f64) -> Self {
        self.minzoom = Some(minzoom);
        self
    }
}

#[test]
fn layer_serializes_as_style_json() {
    use serde_json::json;

    let layer = Layer::new("wa", LayerKind::FillExtrusion, "wa")
        .paint(json!({ "fill-extrusion-height": 4 }))
        .minzoom(10.0);

    assert_eq!(
        serde_json::to_value(&layer).unwrap(),
        json!({
            "id": "wa",
            "type": "fill-extrusion",
            "source": "wa",
            "paint": { "fill-extrusion-height": 4 },
            "minzoom": 10.0,
        })
    );

    let source = Source::geojson_with_line_metrics(json!("./data/water.geojson"));
    assert_eq!(
        serde_json::to_value(&source).unwrap(),
        json!({ "type": "geojson", "data": "./data/water.geojson", "lineMetrics": true })
    );
}
