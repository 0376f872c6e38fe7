use std::path::Path;

use geojson::{Feature, FeatureCollection, Geometry, Value};
use crate::{
    error::{PolygonizeError, Result},
    types::{Coordinate, ExtractedPolygons, Polygon},
};

/// Closed GeoJSON ring: the first vertex is repeated at the end.
fn ring(polygon: &Polygon) -> Vec<Vec<f64>> {
    polygon.vertices
        .iter()
        .chain(polygon.vertices.first())
        .map(|c| vec![c.x as f64, c.y as f64])
        .collect()
}

fn json_number(value: f64) -> serde_json::Value {
    serde_json::Number::from_f64(value)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

impl ExtractedPolygons {
    /// One `Polygon` feature per extracted polygon, image metadata in the
    /// collection's foreign members.
    pub fn to_geojson(&self) -> Result<FeatureCollection> {
        let mut features = Vec::with_capacity(self.polygons.len());

        for (i, polygon) in self.polygons.iter().enumerate() {
            let geometry = Geometry::new(Value::Polygon(vec![ring(polygon)]));

            let mut properties = serde_json::Map::new();
            properties.insert("id".to_string(), serde_json::Value::from(i));
            properties.insert("vertex_count".to_string(), serde_json::Value::from(polygon.len()));
            properties.insert("area".to_string(), json_number(polygon.area()));
            properties.insert("perimeter".to_string(), json_number(polygon.perimeter()));

            features.push(Feature {
                bbox: None,
                geometry: Some(geometry),
                id: Some(geojson::feature::Id::Number(serde_json::Number::from(i))),
                properties: Some(properties),
                foreign_members: None,
            });
        }

        let mut foreign_members = serde_json::Map::new();
        foreign_members.insert("image_width".to_string(), serde_json::Value::from(self.image_width));
        foreign_members.insert("image_height".to_string(), serde_json::Value::from(self.image_height));
        foreign_members.insert("polygon_count".to_string(), serde_json::Value::from(self.polygons.len()));

        Ok(FeatureCollection {
            bbox: None,
            features,
            foreign_members: Some(foreign_members),
        })
    }

    pub fn to_geojson_string(&self) -> Result<String> {
        let geojson = self.to_geojson()?;
        Ok(serde_json::to_string_pretty(&geojson)?)
    }

    pub fn save_geojson<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_geojson_string()?)?;
        Ok(())
    }

    pub fn from_geojson_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let geojson_str = std::fs::read_to_string(path)?;
        Self::from_geojson_string(&geojson_str)
    }

    /// Inverse of [`Self::to_geojson_string`]. Non-polygon features are skipped.
    pub fn from_geojson_string(geojson_str: &str) -> Result<Self> {
        let geojson: FeatureCollection = geojson_str.parse()?;

        let foreign_members = geojson.foreign_members.as_ref()
            .ok_or_else(|| PolygonizeError::InvalidGeoJson("Missing metadata".to_string()))?;

        let dimension = |key: &str| {
            foreign_members.get(key)
                .and_then(|v| v.as_u64())
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| PolygonizeError::InvalidGeoJson(format!("Missing or invalid {key}")))
        };
        let image_width = dimension("image_width")?;
        let image_height = dimension("image_height")?;

        let mut polygons = Vec::new();
        for feature in geojson.features {
            let Some(Geometry { value: Value::Polygon(rings), .. }) = feature.geometry else {
                continue;
            };
            let Some(exterior) = rings.first() else {
                continue;
            };

            let mut vertices = exterior
                .iter()
                .map(|position| match position.as_slice() {
                    [x, y, ..] => Ok(Coordinate::new(*x as i64, *y as i64)),
                    _ => Err(PolygonizeError::InvalidGeoJson("Position with fewer than 2 values".to_string())),
                })
                .collect::<Result<Vec<_>>>()?;

            if vertices.len() > 1 && vertices.first() == vertices.last() {
                vertices.pop();
            }
            polygons.push(Polygon::new(vertices));
        }

        Ok(ExtractedPolygons {
            polygons,
            image_width,
            image_height,
        })
    }
}
