use super::convert::MapShape;
use super::geo::{centroid, envelope, Bounds, Location};
use super::shapes::{Annotation, Overlay, Shape};
use geo_types::{Geometry, GeometryCollection};
use log::debug;
use serde::Serialize;

/// Shapes of a heterogeneous geometry collection.
///
/// Members may convert to annotations or to overlays, so a host has to
/// check each of `shapes()` before adding it to a map view. The centroid
/// and the bounds are derived once, when the collection is built.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ShapesCollection {
    shapes: Vec<Shape>,
    centroid: Location,
    overlay_bounds: Bounds,
}

fn centroid_location(collection: &GeometryCollection<f64>) -> Location {
    match centroid(collection) {
        Ok(point) => point.into(),
        Err(e) => {
            debug!("{}, falling back to origin", e);
            Location::new(0., 0.)
        }
    }
}

fn envelope_bounds(collection: &GeometryCollection<f64>) -> Bounds {
    match envelope(collection) {
        Ok(Geometry::Polygon(polygon)) => {
            let ring = &polygon.exterior().0;
            Bounds::new(ring[0].into(), ring[2].into())
        }
        Ok(other) => {
            debug!("envelope is not a polygon ({:?}), using zero bounds", other);
            Bounds::zero()
        }
        Err(e) => {
            debug!("{}, using zero bounds", e);
            Bounds::zero()
        }
    }
}

impl ShapesCollection {
    pub fn new(collection: &GeometryCollection<f64>) -> Self {
        let shapes = collection.iter().map(MapShape::map_shape).collect();
        let centroid = centroid_location(collection);
        let overlay_bounds = envelope_bounds(collection);
        ShapesCollection {
            shapes,
            centroid,
            overlay_bounds,
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn centroid(&self) -> Location {
        self.centroid
    }

    pub fn overlay_bounds(&self) -> Bounds {
        self.overlay_bounds
    }
}

impl From<&GeometryCollection<f64>> for ShapesCollection {
    fn from(collection: &GeometryCollection<f64>) -> Self {
        ShapesCollection::new(collection)
    }
}

impl Annotation for ShapesCollection {
    fn coordinate(&self) -> Location {
        self.centroid
    }
}

impl Overlay for ShapesCollection {
    fn overlay_bounds(&self) -> Bounds {
        self.overlay_bounds
    }

    // Always true: culling a collection by bounds is left to the host.
    fn intersects(&self, _bounds: &Bounds) -> bool {
        true
    }
}
