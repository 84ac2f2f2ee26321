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
use geo_traits::GeometryTrait;

/// Render any geometry as WKT
///
/// Decoded geometries are compared against WKT strings in tests, which keeps
/// expected values readable.
pub fn to_wkt_string(geometry: &impl GeometryTrait<T = f64>) -> String {
    let mut out = String::new();
    wkt::to_wkt::write_geometry(&mut out, geometry)
        .unwrap_or_else(|e| panic!("Failed to write geometry as WKT: {e}"));
    out
}

/// Assert that `actual` renders to the same WKT as `expected`
///
/// `expected` is parsed first so that differences in spacing or number
/// formatting in the literal do not matter.
pub fn assert_wkt_equal(actual: &impl GeometryTrait<T = f64>, expected: &str) {
    let expected: wkt::Wkt<f64> = expected
        .parse()
        .unwrap_or_else(|e| panic!("Invalid WKT {expected:?}: {e}"));
    assert_eq!(to_wkt_string(actual), to_wkt_string(&expected));
}

#[cfg(test)]
mod tests {
    use geo_types::{line_string, point};

    use super::*;

    #[test]
    fn wkt_from_geo_types() {
        let point = geo_types::Geometry::Point(point!(x: 1.0, y: 2.0));
        assert_eq!(to_wkt_string(&point), "POINT(1 2)");

        let line = geo_types::Geometry::LineString(line_string![
            (x: 1.0, y: 1.0),
            (x: 5.0, y: 5.0),
        ]);
        assert_eq!(to_wkt_string(&line), "LINESTRING(1 1,5 5)");
    }

    #[test]
    fn wkt_equal_ignores_formatting() {
        let point = geo_types::Geometry::Point(point!(x: 1.0, y: 2.0));
        assert_wkt_equal(&point, "POINT (1.0 2.0)");
    }

    #[test]
    #[should_panic]
    fn wkt_not_equal() {
        let point = geo_types::Geometry::Point(point!(x: 1.0, y: 2.0));
        assert_wkt_equal(&point, "POINT (2 1)");
    }
}
