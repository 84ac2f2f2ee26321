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
//! [geo_traits] implementations for decoded geometries
//!
//! These allow decoded values to be handed to any consumer of the geo-traits
//! API, such as the `wkt` writer or the `geo_traits::to_geo` conversions.

use geo_traits::{
    CoordTrait, Dimensions, GeometryCollectionTrait, GeometryTrait, GeometryType,
    LineStringTrait, MultiLineStringTrait, MultiPointTrait, MultiPolygonTrait, PointTrait,
    PolygonTrait, UnimplementedLine, UnimplementedRect, UnimplementedTriangle,
};

use crate::geometry::{
    dimension_count, Coord, Geometry, GeometryCollection, LineString, LinearRing, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};

impl CoordTrait for Coord {
    type T = f64;

    fn dim(&self) -> Dimensions {
        self.dimensions()
    }

    fn x(&self) -> Self::T {
        Coord::x(self)
    }

    fn y(&self) -> Self::T {
        Coord::y(self)
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        let values = self.values();
        assert!(
            n < dimension_count(self.dimensions()),
            "Coordinate index {n} out of range for {} ordinates",
            values.len()
        );
        values[n]
    }
}

macro_rules! impl_geometry_trait {
    ($geometry_type:ty, $variant:ident) => {
        impl_geometry_trait!($geometry_type, $variant, LineString);
    };
    ($geometry_type:ty, $variant:ident, $line_string_type:ty) => {
        impl GeometryTrait for $geometry_type {
            type T = f64;
            type PointType<'b>
                = Point
            where
                Self: 'b;
            type LineStringType<'b>
                = $line_string_type
            where
                Self: 'b;
            type PolygonType<'b>
                = Polygon
            where
                Self: 'b;
            type MultiPointType<'b>
                = MultiPoint
            where
                Self: 'b;
            type MultiLineStringType<'b>
                = MultiLineString
            where
                Self: 'b;
            type MultiPolygonType<'b>
                = MultiPolygon
            where
                Self: 'b;
            type GeometryCollectionType<'b>
                = GeometryCollection
            where
                Self: 'b;
            type RectType<'b>
                = UnimplementedRect<f64>
            where
                Self: 'b;
            type TriangleType<'b>
                = UnimplementedTriangle<f64>
            where
                Self: 'b;
            type LineType<'b>
                = UnimplementedLine<f64>
            where
                Self: 'b;

            fn dim(&self) -> Dimensions {
                self.dimensions()
            }

            fn as_type(
                &self,
            ) -> GeometryType<
                '_,
                Point,
                $line_string_type,
                Polygon,
                MultiPoint,
                MultiLineString,
                MultiPolygon,
                GeometryCollection,
                UnimplementedRect<f64>,
                UnimplementedTriangle<f64>,
                UnimplementedLine<f64>,
            > {
                GeometryType::$variant(self)
            }
        }

        impl<'a> GeometryTrait for &'a $geometry_type {
            type T = f64;
            type PointType<'b>
                = Point
            where
                Self: 'b;
            type LineStringType<'b>
                = $line_string_type
            where
                Self: 'b;
            type PolygonType<'b>
                = Polygon
            where
                Self: 'b;
            type MultiPointType<'b>
                = MultiPoint
            where
                Self: 'b;
            type MultiLineStringType<'b>
                = MultiLineString
            where
                Self: 'b;
            type MultiPolygonType<'b>
                = MultiPolygon
            where
                Self: 'b;
            type GeometryCollectionType<'b>
                = GeometryCollection
            where
                Self: 'b;
            type RectType<'b>
                = UnimplementedRect<f64>
            where
                Self: 'b;
            type TriangleType<'b>
                = UnimplementedTriangle<f64>
            where
                Self: 'b;
            type LineType<'b>
                = UnimplementedLine<f64>
            where
                Self: 'b;

            fn dim(&self) -> Dimensions {
                self.dimensions()
            }

            fn as_type(
                &self,
            ) -> GeometryType<
                '_,
                Point,
                $line_string_type,
                Polygon,
                MultiPoint,
                MultiLineString,
                MultiPolygon,
                GeometryCollection,
                UnimplementedRect<f64>,
                UnimplementedTriangle<f64>,
                UnimplementedLine<f64>,
            > {
                GeometryType::$variant(*self)
            }
        }
    };
}

impl_geometry_trait!(Point, Point);
impl_geometry_trait!(LineString, LineString);
impl_geometry_trait!(LinearRing, LineString, LinearRing);
impl_geometry_trait!(Polygon, Polygon);
impl_geometry_trait!(MultiPoint, MultiPoint);
impl_geometry_trait!(MultiLineString, MultiLineString);
impl_geometry_trait!(MultiPolygon, MultiPolygon);
impl_geometry_trait!(GeometryCollection, GeometryCollection);

impl PointTrait for Point {
    type CoordType<'a>
        = Coord
    where
        Self: 'a;

    fn coord(&self) -> Option<Self::CoordType<'_>> {
        Point::coord(self)
    }
}

impl PointTrait for &Point {
    type CoordType<'a>
        = Coord
    where
        Self: 'a;

    fn coord(&self) -> Option<Self::CoordType<'_>> {
        Point::coord(self)
    }
}

macro_rules! impl_line_string_trait {
    ($line_string_type:ty) => {
        impl LineStringTrait for $line_string_type {
            type CoordType<'a>
                = Coord
            where
                Self: 'a;

            fn num_coords(&self) -> usize {
                <$line_string_type>::coords(self).len()
            }

            unsafe fn coord_unchecked(&self, i: usize) -> Self::CoordType<'_> {
                *<$line_string_type>::coords(self).get_unchecked(i)
            }
        }

        impl LineStringTrait for &$line_string_type {
            type CoordType<'a>
                = Coord
            where
                Self: 'a;

            fn num_coords(&self) -> usize {
                <$line_string_type>::coords(self).len()
            }

            unsafe fn coord_unchecked(&self, i: usize) -> Self::CoordType<'_> {
                *<$line_string_type>::coords(self).get_unchecked(i)
            }
        }
    };
}

impl_line_string_trait!(LineString);
impl_line_string_trait!(LinearRing);

impl PolygonTrait for Polygon {
    type RingType<'a>
        = &'a LinearRing
    where
        Self: 'a;

    fn exterior(&self) -> Option<Self::RingType<'_>> {
        Polygon::rings(self).first()
    }

    fn num_interiors(&self) -> usize {
        Polygon::rings(self).len().saturating_sub(1)
    }

    unsafe fn interior_unchecked(&self, i: usize) -> Self::RingType<'_> {
        Polygon::rings(self).get_unchecked(i + 1)
    }
}

impl PolygonTrait for &Polygon {
    type RingType<'a>
        = &'a LinearRing
    where
        Self: 'a;

    fn exterior(&self) -> Option<Self::RingType<'_>> {
        Polygon::rings(self).first()
    }

    fn num_interiors(&self) -> usize {
        Polygon::rings(self).len().saturating_sub(1)
    }

    unsafe fn interior_unchecked(&self, i: usize) -> Self::RingType<'_> {
        Polygon::rings(self).get_unchecked(i + 1)
    }
}

impl MultiPointTrait for MultiPoint {
    type InnerPointType<'a>
        = &'a Point
    where
        Self: 'a;

    fn num_points(&self) -> usize {
        MultiPoint::points(self).len()
    }

    unsafe fn point_unchecked(&self, i: usize) -> Self::InnerPointType<'_> {
        MultiPoint::points(self).get_unchecked(i)
    }
}

impl MultiPointTrait for &MultiPoint {
    type InnerPointType<'a>
        = &'a Point
    where
        Self: 'a;

    fn num_points(&self) -> usize {
        MultiPoint::points(self).len()
    }

    unsafe fn point_unchecked(&self, i: usize) -> Self::InnerPointType<'_> {
        MultiPoint::points(self).get_unchecked(i)
    }
}

impl MultiLineStringTrait for MultiLineString {
    type InnerLineStringType<'a>
        = &'a LineString
    where
        Self: 'a;

    fn num_line_strings(&self) -> usize {
        MultiLineString::line_strings(self).len()
    }

    unsafe fn line_string_unchecked(&self, i: usize) -> Self::InnerLineStringType<'_> {
        MultiLineString::line_strings(self).get_unchecked(i)
    }
}

impl MultiLineStringTrait for &MultiLineString {
    type InnerLineStringType<'a>
        = &'a LineString
    where
        Self: 'a;

    fn num_line_strings(&self) -> usize {
        MultiLineString::line_strings(self).len()
    }

    unsafe fn line_string_unchecked(&self, i: usize) -> Self::InnerLineStringType<'_> {
        MultiLineString::line_strings(self).get_unchecked(i)
    }
}

impl MultiPolygonTrait for MultiPolygon {
    type InnerPolygonType<'a>
        = &'a Polygon
    where
        Self: 'a;

    fn num_polygons(&self) -> usize {
        MultiPolygon::polygons(self).len()
    }

    unsafe fn polygon_unchecked(&self, i: usize) -> Self::InnerPolygonType<'_> {
        MultiPolygon::polygons(self).get_unchecked(i)
    }
}

impl MultiPolygonTrait for &MultiPolygon {
    type InnerPolygonType<'a>
        = &'a Polygon
    where
        Self: 'a;

    fn num_polygons(&self) -> usize {
        MultiPolygon::polygons(self).len()
    }

    unsafe fn polygon_unchecked(&self, i: usize) -> Self::InnerPolygonType<'_> {
        MultiPolygon::polygons(self).get_unchecked(i)
    }
}

impl GeometryCollectionTrait for GeometryCollection {
    type GeometryType<'a>
        = &'a Geometry
    where
        Self: 'a;

    fn num_geometries(&self) -> usize {
        GeometryCollection::geometries(self).len()
    }

    unsafe fn geometry_unchecked(&self, i: usize) -> Self::GeometryType<'_> {
        GeometryCollection::geometries(self).get_unchecked(i)
    }
}

impl GeometryCollectionTrait for &GeometryCollection {
    type GeometryType<'a>
        = &'a Geometry
    where
        Self: 'a;

    fn num_geometries(&self) -> usize {
        GeometryCollection::geometries(self).len()
    }

    unsafe fn geometry_unchecked(&self, i: usize) -> Self::GeometryType<'_> {
        GeometryCollection::geometries(self).get_unchecked(i)
    }
}

macro_rules! impl_geometry_enum_trait {
    ($geometry_type:ty) => {
        impl GeometryTrait for $geometry_type {
            type T = f64;
            type PointType<'b>
                = Point
            where
                Self: 'b;
            type LineStringType<'b>
                = LineString
            where
                Self: 'b;
            type PolygonType<'b>
                = Polygon
            where
                Self: 'b;
            type MultiPointType<'b>
                = MultiPoint
            where
                Self: 'b;
            type MultiLineStringType<'b>
                = MultiLineString
            where
                Self: 'b;
            type MultiPolygonType<'b>
                = MultiPolygon
            where
                Self: 'b;
            type GeometryCollectionType<'b>
                = GeometryCollection
            where
                Self: 'b;
            type RectType<'b>
                = UnimplementedRect<f64>
            where
                Self: 'b;
            type TriangleType<'b>
                = UnimplementedTriangle<f64>
            where
                Self: 'b;
            type LineType<'b>
                = UnimplementedLine<f64>
            where
                Self: 'b;

            fn dim(&self) -> Dimensions {
                self.dimensions()
            }

            fn as_type(
                &self,
            ) -> GeometryType<
                '_,
                Point,
                LineString,
                Polygon,
                MultiPoint,
                MultiLineString,
                MultiPolygon,
                GeometryCollection,
                UnimplementedRect<f64>,
                UnimplementedTriangle<f64>,
                UnimplementedLine<f64>,
            > {
                match self {
                    Geometry::Point(g) => GeometryType::Point(g),
                    Geometry::LineString(g) => GeometryType::LineString(g),
                    Geometry::Polygon(g) => GeometryType::Polygon(g),
                    Geometry::MultiPoint(g) => GeometryType::MultiPoint(g),
                    Geometry::MultiLineString(g) => GeometryType::MultiLineString(g),
                    Geometry::MultiPolygon(g) => GeometryType::MultiPolygon(g),
                    Geometry::GeometryCollection(g) => GeometryType::GeometryCollection(g),
                }
            }
        }
    };
}

impl_geometry_enum_trait!(Geometry);
impl_geometry_enum_trait!(&Geometry);

#[cfg(test)]
mod tests {
    use geo_traits::to_geo::ToGeoGeometry;
    use geo_types::{line_string, point, polygon};
    use rstest::rstest;
    use sedona_testing::compare::{assert_wkt_equal, to_wkt_string};
    use sedona_testing::create::twkb_from_hex;
    use wkt::TryFromWkt;

    use super::*;
    use crate::decoder::decode_slice;

    fn decode_hex(hex: &str) -> Geometry {
        decode_slice(&twkb_from_hex(hex)).unwrap().0
    }

    #[test]
    fn coord_trait() {
        let geom = decode_hex("01080502043c");
        let Geometry::Point(point) = geom else {
            panic!("Expected Point");
        };

        let coord = PointTrait::coord(&point).unwrap();
        assert_eq!(CoordTrait::dim(&coord), Dimensions::Xyz);
        assert_eq!(coord.x_y(), (1.0, 2.0));
        assert_eq!(coord.nth(2), Some(3.0));
        assert_eq!(coord.nth(3), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn coord_trait_out_of_range() {
        let coord = Coord::new(Dimensions::Xy, [1.0, 2.0, 0.0, 0.0]);
        coord.nth_or_panic(2);
    }

    #[test]
    fn polygon_trait() {
        // Square with a square hole
        let geom = decode_hex("03031b000400040205000004000004030000030500000002020000010100");
        let Geometry::Polygon(polygon) = &geom else {
            panic!("Expected Polygon");
        };

        assert_eq!(PolygonTrait::exterior(polygon).unwrap().num_coords(), 5);
        assert_eq!(polygon.num_interiors(), 1);
        assert_eq!(
            polygon.interior(0).unwrap().coord(1).unwrap().x_y(),
            (0.0, 1.0)
        );
        assert!(polygon.interior(1).is_none());
    }

    #[test]
    fn wkt_output() {
        assert_eq!(to_wkt_string(&decode_hex("01000204")), "POINT(1 2)");
        assert_eq!(
            to_wkt_string(&decode_hex("02000202020808")),
            "LINESTRING(1 1,5 5)"
        );
        assert_eq!(
            to_wkt_string(&decode_hex("01080502043c")),
            "POINT Z(1 2 3)"
        );
    }

    #[test]
    fn to_geo_types() {
        let geom = decode_hex("01000204").to_geometry();
        assert_eq!(geom, geo_types::Geometry::Point(point!(x: 1.0, y: 2.0)));

        let geom = decode_hex("02000202020808").to_geometry();
        assert_eq!(
            geom,
            geo_types::Geometry::LineString(line_string![(x: 1.0, y: 1.0), (x: 5.0, y: 5.0)])
        );

        let geom = decode_hex("03031b000400040205000004000004030000030500000002020000010100")
            .to_geometry();
        let expected = polygon!(
            exterior: [
                (x: 0.0, y: 0.0),
                (x: 2.0, y: 0.0),
                (x: 2.0, y: 2.0),
                (x: 0.0, y: 2.0),
                (x: 0.0, y: 0.0),
            ],
            interiors: [[
                (x: 0.0, y: 0.0),
                (x: 0.0, y: 1.0),
                (x: 1.0, y: 1.0),
                (x: 1.0, y: 0.0),
                (x: 0.0, y: 0.0),
            ]],
        );
        assert_eq!(geom, geo_types::Geometry::Polygon(expected));
    }

    #[test]
    fn empty_point_to_geo_types() {
        let geom = decode_hex("0110");
        assert!(geom.try_to_geometry().is_none());
    }

    #[rstest]
    #[case("04070b0004020402000200020404", "MULTIPOINT ((0 1), (2 3))")]
    #[case("05000202020202020202000002", "MULTILINESTRING ((1 1, 2 2), (3 2, 3 3))")]
    #[case(
        "0600020104000002000002010101040404020000020101",
        "MULTIPOLYGON (((0 0, 1 0, 1 1, 0 0)), ((2 2, 3 2, 3 3, 2 2)))"
    )]
    #[case(
        "070402000201000002020002080a0404",
        "GEOMETRYCOLLECTION (POINT (0 1), LINESTRING (4 5, 6 7))"
    )]
    fn multi_to_geo_types(#[case] hex: &str, #[case] expected: &str) {
        let geom = decode_hex(hex);
        assert_wkt_equal(&geom, expected);

        let expected = geo_types::Geometry::<f64>::try_from_wkt_str(expected).unwrap();
        assert_eq!(geom.to_geometry(), expected);
    }

    #[test]
    fn reference_impls() {
        let geom = decode_hex("070402000201000002020002080a0404");
        let Geometry::GeometryCollection(collection) = &geom else {
            panic!("Expected GeometryCollection");
        };
        assert_eq!(collection.num_geometries(), 2);
        assert_eq!(GeometryTrait::dim(&collection), Dimensions::Xy);
        let member = collection.geometry(1).unwrap();
        assert_eq!(to_wkt_string(&member), "LINESTRING(4 5,6 7)");
    }
}
