//! World boundary dataset.

use crate::data::{DataError, RawId};
use geo_types::{Coord, LineString, MultiPolygon, Polygon};
use geojson::{feature::Id, Feature, GeoJson, Geometry, JsonValue, Value};

/// Properties probed for an identifier, in priority order after `feature.id`.
const ID_PROPERTIES: &[&str] = &["ISO_A3", "ADM0_A3", "ISO_A2", "NAME", "NAME_EN", "name"];

/// Properties probed for a display label.
const LABEL_PROPERTIES: &[&str] = &["NAME", "name", "NAME_EN", "ADMIN"];

/// One country outline from the boundary dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    /// Raw identifier candidates, best first.
    pub ids: Vec<RawId>,
    pub label: Option<String>,
    pub geometry: MultiPolygon<f64>,
}

/// All outlines from one boundary load.
#[derive(Debug, Clone, Default)]
pub struct BoundaryLayer {
    pub features: Vec<BoundaryFeature>,
}

impl BoundaryLayer {
    /// Parses a GeoJSON FeatureCollection.
    ///
    /// Features without polygonal geometry are skipped; features whose
    /// identifiers are missing or unknown are kept and render as "no data".
    pub fn from_geojson(bytes: &[u8]) -> Result<Self, DataError> {
        let value: JsonValue = serde_json::from_slice(bytes)?;
        let GeoJson::FeatureCollection(collection) = GeoJson::from_json_value(value)? else {
            return Err(DataError::NotAFeatureCollection);
        };

        let total = collection.features.len();
        let features: Vec<BoundaryFeature> = collection
            .features
            .iter()
            .filter_map(convert_feature)
            .collect();

        if features.len() < total {
            log::debug!(
                "Skipped {} boundary features without polygons",
                total - features.len()
            );
        }

        Ok(Self { features })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

fn convert_feature(feature: &Feature) -> Option<BoundaryFeature> {
    let mut polygons = Vec::new();
    collect_polygons(feature.geometry.as_ref()?, &mut polygons);
    if polygons.is_empty() {
        return None;
    }

    let mut ids = Vec::new();
    match &feature.id {
        Some(Id::String(s)) => ids.push(RawId::Text(s.clone())),
        Some(Id::Number(n)) => {
            if let Some(n) = n.as_i64() {
                ids.push(RawId::Number(n));
            }
        }
        None => {}
    }

    let label = feature.properties.as_ref().and_then(|props| {
        for key in ID_PROPERTIES {
            match props.get(*key) {
                Some(JsonValue::String(s)) if !s.trim().is_empty() => {
                    ids.push(RawId::Text(s.clone()))
                }
                Some(JsonValue::Number(n)) => {
                    if let Some(n) = n.as_i64() {
                        ids.push(RawId::Number(n));
                    }
                }
                _ => {}
            }
        }

        LABEL_PROPERTIES
            .iter()
            .find_map(|key| props.get(*key).and_then(|v| v.as_str()))
            .map(|s| s.trim().to_string())
    });

    Some(BoundaryFeature {
        ids,
        label,
        geometry: MultiPolygon(polygons),
    })
}

fn collect_polygons(geometry: &Geometry, out: &mut Vec<Polygon<f64>>) {
    match &geometry.value {
        Value::Polygon(rings) => out.extend(convert_polygon(rings)),
        Value::MultiPolygon(polygons) => {
            out.extend(polygons.iter().filter_map(|rings| convert_polygon(rings)))
        }
        Value::GeometryCollection(geometries) => {
            for g in geometries {
                collect_polygons(g, out);
            }
        }
        _ => {}
    }
}

fn convert_polygon(rings: &[Vec<Vec<f64>>]) -> Option<Polygon<f64>> {
    let (exterior, holes) = rings.split_first()?;
    let exterior = convert_ring(exterior);
    if exterior.0.len() < 3 {
        return None;
    }
    let holes = holes.iter().map(|ring| convert_ring(ring)).collect();
    Some(Polygon::new(exterior, holes))
}

fn convert_ring(ring: &[Vec<f64>]) -> LineString<f64> {
    ring.iter()
        .filter(|c| c.len() >= 2)
        .map(|c| Coord { x: c[0], y: c[1] })
        .collect()
}
