use self::geo::parse_wkt;
use log::info;
use output::Output;
use shapes::Shape;
use std::error::Error;
use std::io::{BufRead, Write};
use std::str::FromStr;

pub mod collection;
pub mod convert;
pub mod geo;
mod geojson;
pub mod output;
pub mod shapes;

pub use collection::ShapesCollection;
pub use convert::MapShape;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Format {
    JsonLines,
    GeoJson,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jsonl" | "json-lines" => Ok(Format::JsonLines),
            "geojson" => Ok(Format::GeoJson),
            _ => Err(format!("unknown output format '{}'", s)),
        }
    }
}

/// Convert one WKT geometry per line of `reader` into shapes and write them
/// to `writer`. Blank lines are skipped. Returns the number of shapes written.
///
/// # Example
///
/// ```
/// use geo_map_shapes::{process, Format};
///
/// let input = "POINT(45 30)\n\nLINESTRING(3 4,10 50,20 25)\n";
/// let mut out = Vec::new();
/// let count = process(input.as_bytes(), &mut out, Format::JsonLines).unwrap();
/// assert_eq!(count, 2);
/// ```
pub fn process(
    reader: impl BufRead,
    writer: &mut dyn Write,
    format: Format,
) -> Result<usize, Box<dyn Error>> {
    let mut shapes: Vec<Shape> = vec![];
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let wkt_str = line.trim();
        if wkt_str.is_empty() {
            continue;
        }
        let geometry = parse_wkt(wkt_str).map_err(|e| format!("line {}: {}", idx + 1, e))?;
        shapes.push(geometry.map_shape());
    }
    info!("converted {} geometries", shapes.len());

    match format {
        Format::JsonLines => shapes.write_json_lines(writer)?,
        Format::GeoJson => shapes.write_geojson(writer)?,
    }
    Ok(shapes.len())
}
