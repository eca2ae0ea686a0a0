//! Geographic layer system for the world map.
//!
//! Boundaries are parsed from GeoJSON, projected once into the fixed logical
//! viewport, triangulated for filling, and then drawn through the viewport
//! transform every frame.

mod cache;
mod layer;
mod projection;
mod renderer;

pub use cache::ProjectedLayer;
pub use layer::{BoundaryFeature, BoundaryLayer};
pub use projection::{MapProjection, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
pub use renderer::{render_boundaries, render_markers, render_ocean, MapMarker};
