use serde::{Deserialize, Serialize};
use geo_types::{Coord, LineString};

/// Integer pixel coordinate, `x` to the right and `y` downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Closed outline of one region. The edge from the last vertex back to the
/// first is implicit, the first vertex is not repeated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Coordinate>,
}

impl Polygon {
    pub fn new(vertices: Vec<Coordinate>) -> Self {
        Self { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.vertices.iter()
    }

    /// Convert to a geo-types polygon (the ring is closed by geo-types).
    pub fn to_geo_polygon(&self) -> geo_types::Polygon<f64> {
        let coords: Vec<Coord<f64>> = self.vertices
            .iter()
            .map(|c| Coord { x: c.x as f64, y: c.y as f64 })
            .collect();

        geo_types::Polygon::new(LineString::new(coords), vec![])
    }

    /// Area enclosed by the outline, in square pixels.
    pub fn area(&self) -> f64 {
        use geo::Area;
        self.to_geo_polygon().unsigned_area()
    }

    /// Length of the closed outline, including the implicit closing edge.
    pub fn perimeter(&self) -> f64 {
        let n = self.vertices.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| {
                let a = self.vertices[i];
                let b = self.vertices[(i + 1) % n];
                let dx = (b.x - a.x) as f64;
                let dy = (b.y - a.y) as f64;
                (dx * dx + dy * dy).sqrt()
            })
            .sum()
    }

    /// Inclusive bounding box as `(min, max)`, `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<(Coordinate, Coordinate)> {
        let first = *self.vertices.first()?;
        let bounds = self.vertices.iter().fold((first, first), |(min, max), c| {
            (
                Coordinate::new(min.x.min(c.x), min.y.min(c.y)),
                Coordinate::new(max.x.max(c.x), max.y.max(c.y)),
            )
        });
        Some(bounds)
    }
}

impl From<Vec<Coordinate>> for Polygon {
    fn from(vertices: Vec<Coordinate>) -> Self {
        Self { vertices }
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

/// All polygons found in one image together with the image dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedPolygons {
    pub polygons: Vec<Polygon>,
    pub image_width: u32,
    pub image_height: u32,
}

impl ExtractedPolygons {
    pub fn total_vertices(&self) -> usize {
        self.polygons.iter().map(Polygon::len).sum()
    }
}
