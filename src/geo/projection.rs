//! Natural Earth I projection onto the fixed logical viewport.
//!
//! Every geographic coordinate is projected once into a 1200×650 logical
//! space. Zoom and pan are applied afterwards by the viewport transform,
//! so the projection itself never changes.

use super::layer::BoundaryFeature;
use eframe::egui::Pos2;
use geo_types::{Coord, LineString};
use std::fmt::Write as _;

/// Logical viewport width.
pub const VIEWPORT_WIDTH: f32 = 1200.0;
/// Logical viewport height.
pub const VIEWPORT_HEIGHT: f32 = 650.0;

const PROJECTION_SCALE: f64 = 230.0;
const PROJECTION_TRANSLATE: [f64; 2] = [580.0, 325.0];

/// Fixed Natural Earth I projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapProjection {
    scale: f64,
    translate: [f64; 2],
}

impl Default for MapProjection {
    fn default() -> Self {
        Self {
            scale: PROJECTION_SCALE,
            translate: PROJECTION_TRANSLATE,
        }
    }
}

impl MapProjection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects `[lat, lng]` in degrees to logical viewport coordinates.
    pub fn project(&self, lat_lng: [f64; 2]) -> Pos2 {
        let [lat, lng] = lat_lng;
        self.project_lon_lat(normalize_lon(lng), normalize_lat(lat))
    }

    fn project_lon_lat(&self, lon: f64, lat: f64) -> Pos2 {
        let (x, y) = natural_earth(lon.to_radians(), lat.to_radians());
        Pos2::new(
            (self.translate[0] + self.scale * x) as f32,
            (self.translate[1] - self.scale * y) as f32,
        )
    }

    /// Projects a ring, unwrapping it across the antimeridian.
    ///
    /// Longitudes are made continuous along the ring, then the whole ring
    /// is shifted by whole turns until its mean longitude lies in
    /// (-180, 180]. Anything still past ±180° is pinned to the map edge so a
    /// ring crossing the dateline does not streak across the whole map. The
    /// side a ring lands on therefore does not depend on its starting
    /// vertex. The closing point is dropped.
    pub fn project_ring(&self, ring: &LineString<f64>) -> Vec<Pos2> {
        let mut coords: Vec<Coord<f64>> = ring.0.clone();
        if coords.len() >= 2 && coords.first() == coords.last() {
            coords.pop();
        }
        if coords.is_empty() {
            return Vec::new();
        }

        let mut lons = Vec::with_capacity(coords.len());
        let mut previous: Option<f64> = None;
        for coord in &coords {
            let mut lon = normalize_lon(coord.x);
            if let Some(prev) = previous {
                while lon - prev > 180.0 {
                    lon -= 360.0;
                }
                while prev - lon > 180.0 {
                    lon += 360.0;
                }
            }
            previous = Some(lon);
            lons.push(lon);
        }

        let mut mean = lons.iter().sum::<f64>() / lons.len() as f64;
        let mut shift = 0.0;
        while mean > 180.0 {
            mean -= 360.0;
            shift -= 360.0;
        }
        while mean <= -180.0 {
            mean += 360.0;
            shift += 360.0;
        }

        lons.into_iter()
            .zip(coords)
            .map(|(lon, coord)| {
                let lon = (lon + shift).clamp(-180.0, 180.0);
                self.project_lon_lat(lon, normalize_lat(coord.y))
            })
            .collect()
    }

    /// SVG path data for a feature: one `M…L…Z` subpath per ring.
    #[allow(dead_code)] // The egui renderer draws meshes; kept for SVG export
    pub fn path_for(&self, feature: &BoundaryFeature) -> String {
        let mut path = String::new();
        for polygon in &feature.geometry.0 {
            let rings = std::iter::once(polygon.exterior()).chain(polygon.interiors());
            for ring in rings {
                let points = self.project_ring(ring);
                if points.len() < 3 {
                    continue;
                }
                for (i, p) in points.iter().enumerate() {
                    let cmd = if i == 0 { 'M' } else { 'L' };
                    let _ = write!(path, "{}{:.2},{:.2}", cmd, p.x, p.y);
                }
                path.push('Z');
            }
        }
        path
    }
}

/// Natural Earth I raw projection (radians in, unit-sphere plane out).
fn natural_earth(lambda: f64, phi: f64) -> (f64, f64) {
    let phi2 = phi * phi;
    let phi4 = phi2 * phi2;
    let x = lambda
        * (0.8707 - 0.131979 * phi2
            + phi4 * (-0.013791 + phi4 * (0.003971 * phi2 - 0.001529 * phi4)));
    let y = phi
        * (1.007226
            + phi2 * (0.015085 + phi4 * (-0.044475 + 0.028874 * phi2 - 0.005916 * phi4)));
    (x, y)
}

/// Wraps longitude into [-180, 180]; non-finite values map to 0.
fn normalize_lon(lon: f64) -> f64 {
    if !lon.is_finite() {
        return 0.0;
    }
    if (-180.0..=180.0).contains(&lon) {
        lon
    } else {
        (lon + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// Clamps latitude into [-90, 90]; non-finite values map to 0.
fn normalize_lat(lat: f64) -> f64 {
    if lat.is_finite() {
        lat.clamp(-90.0, 90.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RawId;
    use geo_types::{polygon, MultiPolygon};

    fn close(a: Pos2, b: Pos2) -> bool {
        (a.x - b.x).abs() < 0.01 && (a.y - b.y).abs() < 0.01
    }

    #[test]
    fn test_origin_maps_to_translate() {
        let projection = MapProjection::new();
        assert!(close(projection.project([0.0, 0.0]), Pos2::new(580.0, 325.0)));
    }

    #[test]
    fn test_known_points() {
        let projection = MapProjection::new();
        // x = 230 * π * 0.8707 at the equator
        let east = projection.project([0.0, 180.0]);
        assert!((east.x - (580.0 + 629.14)).abs() < 0.05, "{:?}", east);
        assert!((east.y - 325.0).abs() < 1e-3);

        let north = projection.project([90.0, 0.0]);
        assert!(north.y < 325.0);
        assert!((north.x - 580.0).abs() < 1e-3);

        let south = projection.project([-90.0, 0.0]);
        assert!(((325.0 - north.y) - (south.y - 325.0)).abs() < 1e-3);
    }

    #[test]
    fn test_world_fits_viewport_height() {
        let projection = MapProjection::new();
        let top = projection.project([90.0, 0.0]);
        let bottom = projection.project([-90.0, 0.0]);
        assert!(top.y >= 0.0 && bottom.y <= VIEWPORT_HEIGHT);
    }

    #[test]
    fn test_non_finite_input_degrades() {
        let projection = MapProjection::new();
        let center = projection.project([0.0, 0.0]);
        assert!(close(projection.project([f64::NAN, f64::NAN]), center));
        assert!(close(projection.project([0.0, f64::INFINITY]), center));
        assert!(close(projection.project([0.0, 360.0]), center));
        assert!(close(projection.project([120.0, 10.0]), projection.project([90.0, 10.0])));
    }

    #[test]
    fn test_ring_across_antimeridian_stays_on_one_side() {
        let projection = MapProjection::new();
        let ring = LineString::from(vec![
            (170.0, 60.0),
            (-170.0, 60.0),
            (-170.0, 65.0),
            (170.0, 65.0),
            (170.0, 60.0),
        ]);
        let points = projection.project_ring(&ring);
        assert_eq!(points.len(), 4);
        let min_x = points.iter().map(|p| p.x).fold(f32::MAX, f32::min);
        assert!(min_x > 900.0, "ring wrapped across the map: {:?}", points);
    }

    #[test]
    fn test_ring_on_dateline_ignores_start_vertex() {
        let projection = MapProjection::new();
        let ring = [
            (180.0, 65.0),
            (-175.0, 66.0),
            (-170.0, 66.0),
            (-170.0, 64.0),
            (-180.0, 64.0),
        ];

        let mut x_sets = Vec::new();
        for start in 0..ring.len() {
            let mut rotated: Vec<(f64, f64)> =
                ring[start..].iter().chain(&ring[..start]).copied().collect();
            rotated.push(rotated[0]);
            let points = projection.project_ring(&LineString::from(rotated));
            assert_eq!(points.len(), ring.len());
            let max_x = points.iter().map(|p| p.x).fold(f32::MIN, f32::max);
            assert!(max_x < 200.0, "start {} landed east: {:?}", start, points);
            let mut xs: Vec<f32> = points.iter().map(|p| p.x).collect();
            xs.sort_by(f32::total_cmp);
            x_sets.push(xs);
        }
        for xs in &x_sets[1..] {
            for (a, b) in xs.iter().zip(&x_sets[0]) {
                assert!((a - b).abs() < 0.01, "{:?} vs {:?}", xs, x_sets[0]);
            }
        }
    }

    #[test]
    fn test_straddling_ring_picks_same_side_from_either_start() {
        let projection = MapProjection::new();
        let east_first = LineString::from(vec![
            (170.0, 60.0),
            (-170.0, 60.0),
            (-170.0, 65.0),
            (170.0, 65.0),
            (170.0, 60.0),
        ]);
        let west_first = LineString::from(vec![
            (-170.0, 60.0),
            (-170.0, 65.0),
            (170.0, 65.0),
            (170.0, 60.0),
            (-170.0, 60.0),
        ]);
        let a = projection.project_ring(&east_first);
        let b = projection.project_ring(&west_first);
        let side = |points: &[Pos2]| points.iter().map(|p| p.x).sum::<f32>() > 580.0 * 4.0;
        assert_eq!(side(&a), side(&b));
    }

    #[test]
    fn test_path_for_square() {
        let projection = MapProjection::new();
        let feature = BoundaryFeature {
            ids: vec![RawId::Text("TST".into())],
            label: None,
            geometry: MultiPolygon(vec![polygon![
                (x: 0.0, y: 0.0),
                (x: 10.0, y: 0.0),
                (x: 10.0, y: 10.0),
                (x: 0.0, y: 10.0),
                (x: 0.0, y: 0.0),
            ]]),
        };
        let path = projection.path_for(&feature);
        assert!(path.starts_with("M580.00,325.00L"));
        assert!(path.ends_with('Z'));
        assert_eq!(path.matches('L').count(), 3);
    }
}
