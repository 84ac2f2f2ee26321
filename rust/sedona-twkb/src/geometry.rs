// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.
//! Decoded geometry values
//!
//! Every geometry carries its own [Header] (type, dimensions and an optional
//! bounding box) plus the payload for its type. Values are built once by the
//! decoder and are read-only afterwards.

use geo_traits::Dimensions;

use crate::types::GeometryTypeId;

/// The largest number of ordinates a coordinate can have (XYZM)
pub const MAX_DIMENSIONS: usize = 4;

/// Number of ordinates in a coordinate of the given [Dimensions]
pub(crate) fn dimension_count(dimensions: Dimensions) -> usize {
    match dimensions {
        Dimensions::Xy => 2,
        Dimensions::Xyz | Dimensions::Xym => 3,
        Dimensions::Xyzm => 4,
        Dimensions::Unknown(n) => n.min(MAX_DIMENSIONS),
    }
}

/// An absolute coordinate with 2 to 4 ordinates
///
/// Ordinates are stored in TWKB order: X, Y, then Z and/or M.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    dimensions: Dimensions,
    values: [f64; MAX_DIMENSIONS],
}

impl Coord {
    pub(crate) fn new(dimensions: Dimensions, values: [f64; MAX_DIMENSIONS]) -> Self {
        Self { dimensions, values }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn x(&self) -> f64 {
        self.values[0]
    }

    pub fn y(&self) -> f64 {
        self.values[1]
    }

    /// The Z ordinate, if this coordinate has one
    pub fn z(&self) -> Option<f64> {
        match self.dimensions {
            Dimensions::Xyz | Dimensions::Xyzm => Some(self.values[2]),
            _ => None,
        }
    }

    /// The M ordinate, if this coordinate has one
    pub fn m(&self) -> Option<f64> {
        match self.dimensions {
            Dimensions::Xym => Some(self.values[2]),
            Dimensions::Xyzm => Some(self.values[3]),
            _ => None,
        }
    }

    /// All ordinates of this coordinate
    pub fn values(&self) -> &[f64] {
        &self.values[..dimension_count(self.dimensions)]
    }
}

/// Bounding box of a geometry
///
/// Bounds are laid out as all minimums followed by all maximums, e.g.
/// `[xmin, ymin, zmin, xmax, ymax, zmax]` for an XYZ geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    dimensions: Dimensions,
    bounds: [f64; 2 * MAX_DIMENSIONS],
}

impl BoundingBox {
    /// Create a bounding box that contains nothing
    ///
    /// Each minimum starts at infinity and each maximum at negative infinity
    /// so that the first [BoundingBox::update] sets both.
    pub fn empty(dimensions: Dimensions) -> Self {
        let n = dimension_count(dimensions);
        let mut bounds = [0.0; 2 * MAX_DIMENSIONS];
        bounds[..n].fill(f64::INFINITY);
        bounds[n..2 * n].fill(f64::NEG_INFINITY);
        Self { dimensions, bounds }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Minimums and maximums in their stored order
    pub fn as_slice(&self) -> &[f64] {
        &self.bounds[..2 * dimension_count(self.dimensions)]
    }

    pub fn mins(&self) -> &[f64] {
        &self.bounds[..dimension_count(self.dimensions)]
    }

    pub fn maxs(&self) -> &[f64] {
        let n = dimension_count(self.dimensions);
        &self.bounds[n..2 * n]
    }

    /// True if no coordinate has been added to this box
    pub fn is_empty(&self) -> bool {
        self.mins().iter().zip(self.maxs()).any(|(min, max)| min > max)
    }

    pub(crate) fn set(&mut self, dimension: usize, min: f64, max: f64) {
        let n = dimension_count(self.dimensions);
        self.bounds[dimension] = min;
        self.bounds[dimension + n] = max;
    }

    /// Expand this box to contain `coord`
    pub fn update(&mut self, coord: &Coord) {
        let n = dimension_count(self.dimensions);
        for (i, value) in coord.values().iter().take(n).enumerate() {
            self.bounds[i] = self.bounds[i].min(*value);
            self.bounds[i + n] = self.bounds[i + n].max(*value);
        }
    }
}

/// Information shared by every geometry type
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    geometry_type: GeometryTypeId,
    dimensions: Dimensions,
    bbox: Option<BoundingBox>,
}

impl Header {
    pub fn new(
        geometry_type: GeometryTypeId,
        dimensions: Dimensions,
        bbox: Option<BoundingBox>,
    ) -> Self {
        Self {
            geometry_type,
            dimensions,
            bbox,
        }
    }

    pub fn geometry_type(&self) -> GeometryTypeId {
        self.geometry_type
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    header: Header,
    coord: Option<Coord>,
}

impl Point {
    pub(crate) fn new(header: Header, coord: Option<Coord>) -> Self {
        Self { header, coord }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn dimensions(&self) -> Dimensions {
        self.header.dimensions
    }

    /// The coordinate of this point, or `None` for an empty point
    pub fn coord(&self) -> Option<Coord> {
        self.coord
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    header: Header,
    coords: Vec<Coord>,
}

impl LineString {
    pub(crate) fn new(header: Header, coords: Vec<Coord>) -> Self {
        Self { header, coords }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn dimensions(&self) -> Dimensions {
        self.header.dimensions
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }
}

/// A closed ring of a [Polygon]
///
/// Rings carry no header of their own; closure and winding are not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRing {
    dimensions: Dimensions,
    coords: Vec<Coord>,
}

impl LinearRing {
    pub(crate) fn new(dimensions: Dimensions, coords: Vec<Coord>) -> Self {
        Self { dimensions, coords }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    header: Header,
    rings: Vec<LinearRing>,
}

impl Polygon {
    pub(crate) fn new(header: Header, rings: Vec<LinearRing>) -> Self {
        Self { header, rings }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn dimensions(&self) -> Dimensions {
        self.header.dimensions
    }

    /// All rings in stream order
    pub fn rings(&self) -> &[LinearRing] {
        &self.rings
    }

    /// The first ring, treated as the exterior by convention
    pub fn exterior(&self) -> Option<&LinearRing> {
        self.rings.first()
    }

    pub fn interiors(&self) -> &[LinearRing] {
        self.rings.get(1..).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    header: Header,
    ids: Vec<i64>,
    points: Vec<Point>,
}

impl MultiPoint {
    pub(crate) fn new(header: Header, ids: Vec<i64>, points: Vec<Point>) -> Self {
        Self {
            header,
            ids,
            points,
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn dimensions(&self) -> Dimensions {
        self.header.dimensions
    }

    /// One identifier per point if the id list flag was set, otherwise empty
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    header: Header,
    ids: Vec<i64>,
    line_strings: Vec<LineString>,
}

impl MultiLineString {
    pub(crate) fn new(header: Header, ids: Vec<i64>, line_strings: Vec<LineString>) -> Self {
        Self {
            header,
            ids,
            line_strings,
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn dimensions(&self) -> Dimensions {
        self.header.dimensions
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    header: Header,
    ids: Vec<i64>,
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    pub(crate) fn new(header: Header, ids: Vec<i64>, polygons: Vec<Polygon>) -> Self {
        Self {
            header,
            ids,
            polygons,
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn dimensions(&self) -> Dimensions {
        self.header.dimensions
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }
}

/// A heterogeneous collection
///
/// Each member was decoded as an independent TWKB value and may have its own
/// dimensions and precision.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    header: Header,
    ids: Vec<i64>,
    geometries: Vec<Geometry>,
}

impl GeometryCollection {
    pub(crate) fn new(header: Header, ids: Vec<i64>, geometries: Vec<Geometry>) -> Self {
        Self {
            header,
            ids,
            geometries,
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn dimensions(&self) -> Dimensions {
        self.header.dimensions
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }
}

/// A decoded TWKB geometry
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    pub fn header(&self) -> &Header {
        match self {
            Geometry::Point(g) => g.header(),
            Geometry::LineString(g) => g.header(),
            Geometry::Polygon(g) => g.header(),
            Geometry::MultiPoint(g) => g.header(),
            Geometry::MultiLineString(g) => g.header(),
            Geometry::MultiPolygon(g) => g.header(),
            Geometry::GeometryCollection(g) => g.header(),
        }
    }

    pub fn geometry_type(&self) -> GeometryTypeId {
        self.header().geometry_type()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.header().dimensions()
    }

    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.header().bbox()
    }

    /// True if this geometry has no coordinates
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(g) => g.coord.is_none(),
            Geometry::LineString(g) => g.coords.is_empty(),
            Geometry::Polygon(g) => g.rings.iter().all(|ring| ring.coords.is_empty()),
            Geometry::MultiPoint(g) => g.points.iter().all(|p| p.coord.is_none()),
            Geometry::MultiLineString(g) => g.line_strings.iter().all(|l| l.coords.is_empty()),
            Geometry::MultiPolygon(g) => g
                .polygons
                .iter()
                .all(|p| p.rings.iter().all(|ring| ring.coords.is_empty())),
            Geometry::GeometryCollection(g) => g.geometries.iter().all(|g| g.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn xyz(x: f64, y: f64, z: f64) -> Coord {
        Coord::new(Dimensions::Xyz, [x, y, z, 0.0])
    }

    #[test]
    fn coord_ordinates() {
        let coord = Coord::new(Dimensions::Xy, [1.0, 2.0, 0.0, 0.0]);
        assert_eq!(coord.values(), &[1.0, 2.0]);
        assert_eq!(coord.z(), None);
        assert_eq!(coord.m(), None);

        let coord = xyz(1.0, 2.0, 3.0);
        assert_eq!(coord.z(), Some(3.0));
        assert_eq!(coord.m(), None);

        let coord = Coord::new(Dimensions::Xym, [1.0, 2.0, 4.0, 0.0]);
        assert_eq!(coord.z(), None);
        assert_eq!(coord.m(), Some(4.0));

        let coord = Coord::new(Dimensions::Xyzm, [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(coord.values(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(coord.z(), Some(3.0));
        assert_eq!(coord.m(), Some(4.0));
    }

    #[test]
    fn bounding_box_update() {
        let mut bbox = BoundingBox::empty(Dimensions::Xyz);
        assert!(bbox.is_empty());
        assert_eq!(bbox.as_slice().len(), 6);

        bbox.update(&xyz(1.0, -2.0, 3.0));
        assert!(!bbox.is_empty());
        assert_eq!(bbox.mins(), &[1.0, -2.0, 3.0]);
        assert_eq!(bbox.maxs(), &[1.0, -2.0, 3.0]);

        bbox.update(&xyz(-1.5, 4.0, 3.5));
        assert_eq!(bbox.as_slice(), &[-1.5, -2.0, 3.0, 1.0, 4.0, 3.5]);
    }

    #[test]
    fn bounding_box_set() {
        let mut bbox = BoundingBox::empty(Dimensions::Xy);
        bbox.set(0, 0.5, 1.5);
        bbox.set(1, -1.0, 2.0);
        assert_relative_eq!(bbox.mins()[0], 0.5);
        assert_relative_eq!(bbox.maxs()[1], 2.0);
        assert_eq!(bbox.as_slice(), &[0.5, -1.0, 1.5, 2.0]);
    }

    #[test]
    fn polygon_rings() {
        let header = Header::new(GeometryTypeId::Polygon, Dimensions::Xy, None);
        let polygon = Polygon::new(header.clone(), vec![]);
        assert!(polygon.exterior().is_none());
        assert!(polygon.interiors().is_empty());

        let ring = |x: f64| {
            LinearRing::new(
                Dimensions::Xy,
                vec![Coord::new(Dimensions::Xy, [x, x, 0.0, 0.0])],
            )
        };
        let polygon = Polygon::new(header, vec![ring(0.0), ring(1.0), ring(2.0)]);
        assert_eq!(polygon.exterior(), Some(&ring(0.0)));
        assert_eq!(polygon.interiors(), &[ring(1.0), ring(2.0)]);

        let geometry = Geometry::Polygon(polygon);
        assert_eq!(geometry.geometry_type(), GeometryTypeId::Polygon);
        assert_eq!(geometry.dimensions(), Dimensions::Xy);
        assert!(!geometry.is_empty());
    }
}
