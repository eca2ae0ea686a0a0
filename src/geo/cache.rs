//! Projected boundary geometry, built once per data load.
//!
//! Projecting and triangulating every outline each frame would dominate the
//! frame budget, so each boundary load is converted into logical-space
//! rings, fill triangles, and bounds here. Rendering and hit-testing then only
//! apply the viewport transform.

use super::layer::{BoundaryFeature, BoundaryLayer};
use super::projection::MapProjection;
use crate::data::{CountryCode, IdentifierIndex, RawId};
use earcutr::earcut;
use eframe::egui::{Pos2, Rect};

/// One projected polygon: exterior ring first, then holes.
#[derive(Debug, Clone, Default)]
pub struct ProjectedPolygon {
    pub rings: Vec<Vec<Pos2>>,
    /// All ring vertices, flattened in ring order.
    pub vertices: Vec<Pos2>,
    /// Fill triangles as indices into `vertices`.
    pub triangles: Vec<u32>,
}

impl ProjectedPolygon {
    fn build(rings: Vec<Vec<Pos2>>) -> Option<Self> {
        let rings: Vec<Vec<Pos2>> = rings.into_iter().filter(|r| r.len() >= 3).collect();
        if rings.is_empty() {
            return None;
        }

        let mut coords: Vec<f64> = Vec::new();
        let mut hole_indices: Vec<usize> = Vec::new();
        let mut vertices: Vec<Pos2> = Vec::new();
        for (i, ring) in rings.iter().enumerate() {
            if i > 0 {
                hole_indices.push(vertices.len());
            }
            for p in ring {
                coords.push(p.x as f64);
                coords.push(p.y as f64);
                vertices.push(*p);
            }
        }

        let triangles = match earcut(&coords, &hole_indices, 2) {
            Ok(indices) => indices.into_iter().map(|i| i as u32).collect(),
            Err(_) => {
                log::debug!("Triangulation failed, drawing outline only");
                Vec::new()
            }
        };

        Some(Self {
            rings,
            vertices,
            triangles,
        })
    }

    /// Even-odd point-in-polygon test over all rings.
    fn contains(&self, point: Pos2) -> bool {
        let mut inside = false;
        for ring in &self.rings {
            let mut j = ring.len() - 1;
            for i in 0..ring.len() {
                let (a, b) = (ring[i], ring[j]);
                if (a.y > point.y) != (b.y > point.y)
                    && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
                {
                    inside = !inside;
                }
                j = i;
            }
        }
        inside
    }
}

/// A boundary feature after projection and identifier resolution.
#[derive(Debug, Clone)]
pub struct ProjectedFeature {
    pub ids: Vec<RawId>,
    pub code: Option<CountryCode>,
    pub label: Option<String>,
    pub polygons: Vec<ProjectedPolygon>,
    pub bounds: Rect,
}

impl MapProjection {
    /// Projects, triangulates and resolves one boundary feature.
    pub fn project_feature(
        &self,
        feature: &BoundaryFeature,
        index: &IdentifierIndex,
    ) -> ProjectedFeature {
        let polygons: Vec<ProjectedPolygon> = feature
            .geometry
            .0
            .iter()
            .filter_map(|polygon| {
                let rings = std::iter::once(polygon.exterior())
                    .chain(polygon.interiors())
                    .map(|ring| self.project_ring(ring))
                    .collect();
                ProjectedPolygon::build(rings)
            })
            .collect();

        let mut bounds = Rect::NOTHING;
        for polygon in &polygons {
            for ring in polygon.rings.iter().take(1) {
                for p in ring {
                    bounds.extend_with(*p);
                }
            }
        }

        ProjectedFeature {
            code: index.resolve_feature(feature),
            ids: feature.ids.clone(),
            label: feature.label.clone(),
            polygons,
            bounds,
        }
    }
}

impl ProjectedFeature {
    /// Hit test in logical viewport coordinates.
    pub fn contains(&self, point: Pos2) -> bool {
        self.bounds.contains(point) && self.polygons.iter().any(|p| p.contains(point))
    }
}

/// Projected form of a whole `BoundaryLayer`.
#[derive(Debug, Clone, Default)]
pub struct ProjectedLayer {
    pub features: Vec<ProjectedFeature>,
}

impl ProjectedLayer {
    pub fn build(
        layer: &BoundaryLayer,
        projection: &MapProjection,
        index: &IdentifierIndex,
    ) -> Self {
        let features: Vec<ProjectedFeature> = layer
            .features
            .iter()
            .map(|f| projection.project_feature(f, index))
            .collect();

        let resolved = features.iter().filter(|f| f.code.is_some()).count();
        log::info!(
            "Projected {} boundary features ({} resolved to a country)",
            features.len(),
            resolved
        );

        Self { features }
    }

    /// Topmost feature under `point`, if any.
    pub fn hit_test(&self, point: Pos2) -> Option<&ProjectedFeature> {
        self.features.iter().rev().find(|f| f.contains(point))
    }

    /// Every feature resolved to `code`; a country may span several.
    pub fn features_for(&self, code: &CountryCode) -> Vec<&ProjectedFeature> {
        self.features
            .iter()
            .filter(|f| f.code.as_ref() == Some(code))
            .collect()
    }
}
