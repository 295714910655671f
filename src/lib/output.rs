use super::geo::Location;
use super::geojson::{Entity, Geometry, Position};
use super::shapes::{Annotation, Shape};
use serde_json::to_string;
use std::collections::HashMap;
use std::error::Error;
use std::io::Write;

pub trait Output {
    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
}

fn positions(locations: &[Location]) -> Vec<Position> {
    locations.iter().map(|&loc| loc.into()).collect()
}

fn shape_kind(shape: &Shape) -> &'static str {
    match shape {
        Shape::Point(_) => "point",
        Shape::Polyline(_) => "polyline",
        Shape::Polygon(_) => "polygon",
        Shape::MultiPolygon(_) => "multi_polygon",
        Shape::Collection(_) => "collection",
    }
}

impl From<&Shape> for Geometry {
    fn from(shape: &Shape) -> Self {
        match shape {
            Shape::Point(point) => Geometry::Point {
                coordinates: point.coordinate().into(),
            },
            Shape::Polyline(polyline) => Geometry::LineString {
                coordinates: positions(polyline.coordinates()),
            },
            Shape::Polygon(polygon) => Geometry::Polygon {
                coordinates: vec![positions(polygon.coordinates())],
            },
            Shape::MultiPolygon(multi_polygon) => Geometry::MultiPolygon {
                coordinates: multi_polygon
                    .polygons
                    .iter()
                    .map(|polygon| vec![positions(polygon.coordinates())])
                    .collect(),
            },
            Shape::Collection(collection) => Geometry::GeometryCollection {
                geometries: collection.shapes().iter().map(Geometry::from).collect(),
            },
        }
    }
}

impl Output for [Shape] {
    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        for shape in self.iter() {
            let json = to_string(shape)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        let features = self
            .iter()
            .map(|shape| {
                let mut properties = HashMap::new();
                properties.insert("shape".to_string(), shape_kind(shape).to_string());
                if let Shape::Collection(collection) = shape {
                    let centroid = collection.centroid();
                    properties.insert(
                        "centroid".to_string(),
                        format!("{},{}", centroid.lat, centroid.lon),
                    );
                }
                Entity::Feature {
                    geometry: shape.into(),
                    properties,
                }
            })
            .collect();
        let feature_collection = Entity::FeatureCollection { features };
        let string = to_string(&feature_collection)?;
        writeln!(writer, "{}", string)?;
        Ok(())
    }
}
