use geo::{BoundingRect, Centroid};
use geo_types::{Coord, Geometry, GeometryCollection, LineString, Point, Polygon};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wkt::TryFromWkt;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("geometry has no centroid")]
    CentroidUnavailable,
    #[error("geometry has no envelope")]
    EnvelopeUnavailable,
    #[error("invalid wkt: {0}")]
    Wkt(String),
}

/// A map-native coordinate. Geometry points are read as `(x = lon, y = lat)`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Location { lat, lon }
    }
}

impl From<Point<f64>> for Location {
    fn from(point: Point<f64>) -> Self {
        Location {
            lat: point.y(),
            lon: point.x(),
        }
    }
}

impl From<Coord<f64>> for Location {
    fn from(coordinate: Coord<f64>) -> Self {
        Location {
            lat: coordinate.y,
            lon: coordinate.x,
        }
    }
}

impl From<Location> for Point<f64> {
    fn from(loc: Location) -> Self {
        Point::new(loc.lon, loc.lat)
    }
}

impl From<Location> for [f64; 2] {
    fn from(loc: Location) -> Self {
        [loc.lon, loc.lat]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub sw: Location,
    pub ne: Location,
}

impl Bounds {
    pub fn new(sw: Location, ne: Location) -> Self {
        Bounds { sw, ne }
    }

    /// Degenerate region at the origin, used when no envelope can be derived.
    pub fn zero() -> Self {
        let origin = Location::new(0., 0.);
        Bounds::new(origin, origin)
    }

    pub fn from_locations<'a>(locations: impl IntoIterator<Item = &'a Location>) -> Option<Self> {
        let (lats, lons): (Vec<f64>, Vec<f64>) =
            locations.into_iter().map(|loc| (loc.lat, loc.lon)).unzip();
        let (s, n) = lats.into_iter().minmax_by(f64::total_cmp).into_option()?;
        let (w, e) = lons.into_iter().minmax_by(f64::total_cmp).into_option()?;
        Some(Bounds::new(Location::new(s, w), Location::new(n, e)))
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        self.sw.lat <= other.ne.lat
            && other.sw.lat <= self.ne.lat
            && self.sw.lon <= other.ne.lon
            && other.sw.lon <= self.ne.lon
    }
}

pub fn centroid(collection: &GeometryCollection<f64>) -> Result<Point<f64>, Error> {
    collection.centroid().ok_or(Error::CentroidUnavailable)
}

/// Envelope of a collection. Collapses to a point or a segment for
/// degenerate extents; otherwise a closed ring starting at the min corner
/// and running counter-clockwise.
pub fn envelope(collection: &GeometryCollection<f64>) -> Result<Geometry<f64>, Error> {
    let rect = collection
        .bounding_rect()
        .ok_or(Error::EnvelopeUnavailable)?;
    let (min, max) = (rect.min(), rect.max());
    if min == max {
        return Ok(Geometry::Point(min.into()));
    }
    if min.x == max.x || min.y == max.y {
        return Ok(Geometry::LineString(LineString::from(vec![min, max])));
    }
    let ring = LineString::from(vec![
        (min.x, min.y),
        (max.x, min.y),
        (max.x, max.y),
        (min.x, max.y),
        (min.x, min.y),
    ]);
    Ok(Geometry::Polygon(Polygon::new(ring, vec![])))
}

pub fn world() -> Polygon<f64> {
    let ring = LineString::from(vec![
        (-180., 90.),
        (-180., -90.),
        (180., -90.),
        (180., 90.),
        (-180., 90.),
    ]);
    Polygon::new(ring, vec![])
}

/// Parse a well-known-text string into a geometry.
///
/// # Example
///
/// ```
/// use geo_map_shapes::geo::parse_wkt;
/// use geo_types::{Geometry, Point};
///
/// let geometry = parse_wkt("POINT(45 30)").unwrap();
/// assert_eq!(geometry, Geometry::Point(Point::new(45., 30.)));
/// ```
pub fn parse_wkt(wkt_str: &str) -> Result<Geometry<f64>, Error> {
    Geometry::<f64>::try_from_wkt_str(wkt_str).map_err(|e| Error::Wkt(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::*;
    use geo_types::{line_string, point};

    fn collection(wkt_str: &str) -> GeometryCollection<f64> {
        match parse_wkt(wkt_str).unwrap() {
            Geometry::GeometryCollection(gc) => gc,
            other => GeometryCollection(vec![other]),
        }
    }

    #[test]
    fn location_swaps_axes() {
        let loc: Location = point!(x: 45., y: 30.).into();
        assert_eq!(loc, Location::new(30., 45.));
        let back: Point<f64> = loc.into();
        assert_eq!(back, point!(x: 45., y: 30.));
        let position: [f64; 2] = loc.into();
        assert_eq!(position, [45., 30.]);
    }

    #[test]
    fn bounds_from_locations() {
        let locations = vec![
            Location::new(49., 5.),
            Location::new(50., 6.),
            Location::new(49., 7.),
        ];
        let bounds = Bounds::from_locations(&locations).unwrap();
        assert_eq!(bounds.sw, Location::new(49., 5.));
        assert_eq!(bounds.ne, Location::new(50., 7.));
        assert!(Bounds::from_locations(&Vec::new()).is_none());
    }

    #[test]
    fn bounds_intersection() {
        let a = Bounds::new(Location::new(0., 0.), Location::new(10., 10.));
        let b = Bounds::new(Location::new(5., 5.), Location::new(15., 15.));
        let c = Bounds::new(Location::new(11., 11.), Location::new(12., 12.));
        let touching = Bounds::new(Location::new(10., 10.), Location::new(12., 12.));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(a.intersects(&touching));
    }

    #[test]
    fn centroid_of_line() {
        let gc = GeometryCollection(vec![Geometry::LineString(line_string![
            (x: 9., y: 50.),
            (x: 9., y: 51.),
            (x: 10., y: 51.)
        ])]);
        let c = centroid(&gc).unwrap();
        assert_relative_eq!(c.x(), 9.25, epsilon = 1e-9);
        assert_relative_eq!(c.y(), 50.75, epsilon = 1e-9);
    }

    #[test]
    fn centroid_of_empty_collection() {
        let gc = GeometryCollection::<f64>(vec![]);
        assert_eq!(centroid(&gc), Err(Error::CentroidUnavailable));
    }

    #[test]
    fn envelope_of_area() {
        let gc = collection("GEOMETRYCOLLECTION(POINT(4 6),LINESTRING(4 6,7 10))");
        let env = envelope(&gc).unwrap();
        let polygon = match env {
            Geometry::Polygon(p) => p,
            other => panic!("expected polygon, got {:?}", other),
        };
        let points: Vec<_> = polygon.exterior().points().collect();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], point!(x: 4., y: 6.));
        assert_eq!(points[2], point!(x: 7., y: 10.));
    }

    #[test]
    fn envelope_of_single_point() {
        let gc = collection("POINT(3 4)");
        assert_eq!(
            envelope(&gc).unwrap(),
            Geometry::Point(point!(x: 3., y: 4.))
        );
    }

    #[test]
    fn envelope_of_vertical_line() {
        let gc = collection("LINESTRING(3 4,3 8)");
        let env = envelope(&gc).unwrap();
        assert!(matches!(env, Geometry::LineString(_)));
    }

    #[test]
    fn envelope_of_empty_collection() {
        let gc = GeometryCollection::<f64>(vec![]);
        assert_eq!(envelope(&gc), Err(Error::EnvelopeUnavailable));
    }

    #[test]
    fn world_polygon() {
        let world = world();
        assert_eq!(world.exterior().0.len(), 5);
        assert!(world.interiors().is_empty());
        assert_eq!(world.exterior().0[1], Coord { x: -180., y: -90. });
    }

    #[test]
    fn invalid_wkt() {
        let err = parse_wkt("POINT(45").unwrap_err();
        assert!(matches!(err, Error::Wkt(_)));
    }
}
