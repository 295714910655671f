use super::collection::ShapesCollection;
use super::geo::{Bounds, Location};
use serde::Serialize;

/// A shape anchored at a single coordinate.
pub trait Annotation {
    fn coordinate(&self) -> Location;
}

/// A shape covering an area that a map view can cull by bounds.
pub trait Overlay {
    fn overlay_bounds(&self) -> Bounds;
    fn intersects(&self, bounds: &Bounds) -> bool;
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PointAnnotation {
    pub coordinate: Location,
}

impl PointAnnotation {
    pub fn new(coordinate: Location) -> Self {
        PointAnnotation { coordinate }
    }
}

impl Annotation for PointAnnotation {
    fn coordinate(&self) -> Location {
        self.coordinate
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Polyline {
    coordinates: Vec<Location>,
}

impl Polyline {
    pub fn new(coordinates: Vec<Location>) -> Self {
        Polyline { coordinates }
    }

    pub fn coordinates(&self) -> &[Location] {
        &self.coordinates
    }

    pub fn count(&self) -> usize {
        self.coordinates.len()
    }
}

/// Outline-only polygon: the ring is rendered as given, without holes.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Polygon {
    coordinates: Vec<Location>,
}

impl Polygon {
    pub fn new(coordinates: Vec<Location>) -> Self {
        Polygon { coordinates }
    }

    pub fn coordinates(&self) -> &[Location] {
        &self.coordinates
    }

    pub fn count(&self) -> usize {
        self.coordinates.len()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    pub polygons: Vec<Polygon>,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        MultiPolygon { polygons }
    }
}

fn vertex_bounds<'a>(coordinates: impl IntoIterator<Item = &'a Location>) -> Bounds {
    Bounds::from_locations(coordinates).unwrap_or_else(Bounds::zero)
}

impl Overlay for Polyline {
    fn overlay_bounds(&self) -> Bounds {
        vertex_bounds(&self.coordinates)
    }

    fn intersects(&self, bounds: &Bounds) -> bool {
        self.overlay_bounds().intersects(bounds)
    }
}

impl Overlay for Polygon {
    fn overlay_bounds(&self) -> Bounds {
        vertex_bounds(&self.coordinates)
    }

    fn intersects(&self, bounds: &Bounds) -> bool {
        self.overlay_bounds().intersects(bounds)
    }
}

impl Overlay for MultiPolygon {
    fn overlay_bounds(&self) -> Bounds {
        vertex_bounds(self.polygons.iter().flat_map(|p| p.coordinates()))
    }

    fn intersects(&self, bounds: &Bounds) -> bool {
        self.polygons.iter().any(|p| p.intersects(bounds))
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Point(PointAnnotation),
    Polyline(Polyline),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    Collection(ShapesCollection),
}

impl Shape {
    pub fn as_point(&self) -> Option<&PointAnnotation> {
        match self {
            Shape::Point(point) => Some(point),
            _ => None,
        }
    }

    pub fn as_polyline(&self) -> Option<&Polyline> {
        match self {
            Shape::Polyline(polyline) => Some(polyline),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }

    pub fn as_multi_polygon(&self) -> Option<&MultiPolygon> {
        match self {
            Shape::MultiPolygon(multi_polygon) => Some(multi_polygon),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&ShapesCollection> {
        match self {
            Shape::Collection(collection) => Some(collection),
            _ => None,
        }
    }
}
