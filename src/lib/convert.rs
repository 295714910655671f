use super::collection::ShapesCollection;
use super::geo::Location;
use super::shapes::{MultiPolygon, PointAnnotation, Polygon, Polyline, Shape};
use geo_types::{Geometry, GeometryCollection, LineString};
use log::trace;

/// Conversion of a geometry into a shape a map view can render.
///
/// The shape format has no notion of polygon holes, so interior rings are
/// dropped when a polygon is converted.
pub trait MapShape {
    fn map_shape(&self) -> Shape;
}

fn locations(line_string: &LineString<f64>) -> Vec<Location> {
    line_string.coords().map(|&c| c.into()).collect()
}

fn polygon_shape(polygon: &geo_types::Polygon<f64>) -> Polygon {
    // interiors are ignored
    Polygon::new(locations(polygon.exterior()))
}

impl MapShape for Geometry<f64> {
    fn map_shape(&self) -> Shape {
        trace!("converting {:?}", self);
        match self {
            Geometry::Point(point) => Shape::Point(PointAnnotation::new((*point).into())),
            Geometry::Line(line) => {
                let coordinates = vec![line.start.into(), line.end.into()];
                Shape::Polyline(Polyline::new(coordinates))
            }
            Geometry::LineString(line_string) => {
                Shape::Polyline(Polyline::new(locations(line_string)))
            }
            Geometry::Polygon(polygon) => Shape::Polygon(polygon_shape(polygon)),
            Geometry::MultiPolygon(multi_polygon) => {
                let polygons = multi_polygon.iter().map(polygon_shape).collect();
                Shape::MultiPolygon(MultiPolygon::new(polygons))
            }
            Geometry::MultiPoint(multi_point) => {
                let geometries = multi_point.iter().map(|&p| Geometry::Point(p)).collect();
                Shape::Collection(ShapesCollection::new(&GeometryCollection(geometries)))
            }
            Geometry::MultiLineString(multi_line_string) => {
                let geometries = multi_line_string
                    .iter()
                    .cloned()
                    .map(Geometry::LineString)
                    .collect();
                Shape::Collection(ShapesCollection::new(&GeometryCollection(geometries)))
            }
            Geometry::GeometryCollection(collection) => {
                Shape::Collection(ShapesCollection::new(collection))
            }
            Geometry::Rect(rect) => Shape::Polygon(polygon_shape(&rect.to_polygon())),
            Geometry::Triangle(triangle) => Shape::Polygon(polygon_shape(&triangle.to_polygon())),
        }
    }
}
