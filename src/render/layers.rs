// GeoJSON export of the map layers, one Point feature per drawn site

use crate::views::{MapLayer, MapView};
use geojson::{Feature, FeatureCollection, JsonObject};
use serde_json::json;

fn layer_features(layer: &MapLayer) -> impl Iterator<Item = Feature> + '_ {
    layer.points.iter().map(move |p| {
        let point: geo::Point<f64> = p.location.into();
        let geometry = geojson::Geometry::from(&geo::Geometry::Point(point));

        let mut properties = JsonObject::new();
        properties.insert("type".to_string(), json!(layer.type_label));
        properties.insert("lon".to_string(), json!(p.location.lon));
        properties.insert("lat".to_string(), json!(p.location.lat));
        properties.insert("fill_color".to_string(), json!(layer.fill_color));
        properties.insert("radius".to_string(), json!(layer.radius));
        if let Some(weight) = p.weight {
            properties.insert("weight".to_string(), json!(weight));
        }

        Feature {
            bbox: None,
            geometry: Some(geometry),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    })
}

/// Every point of every layer, in layer order
pub fn map_to_feature_collection(map: &MapView) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: map.layers.iter().flat_map(layer_features).collect(),
        foreign_members: None,
    }
}
