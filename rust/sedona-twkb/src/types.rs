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
use std::fmt::Display;

use crate::error::TwkbError;

/// Geometry types
///
/// An enumerator for the seven geometry types TWKB can encode. The
/// [Dimensions][geo_traits::Dimensions] of a geometry are tracked separately.
///
/// This is named GeometryTypeId such that it does not conflict with
/// [geo_traits::GeometryType].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum GeometryTypeId {
    /// Point geometry type
    Point,
    /// LineString geometry type
    LineString,
    /// Polygon geometry type
    Polygon,
    /// MultiPoint geometry type
    MultiPoint,
    /// MultiLineString geometry type
    MultiLineString,
    /// MultiPolygon geometry type
    MultiPolygon,
    /// GeometryCollection geometry type
    GeometryCollection,
}

impl GeometryTypeId {
    /// Construct a geometry type from a TWKB type code
    ///
    /// The type code is the low nibble of the first byte of a TWKB value
    /// (1 for Point...7 for GeometryCollection).
    pub fn try_from_twkb_id(twkb_id: u8) -> Result<Self, TwkbError> {
        match twkb_id {
            1 => Ok(Self::Point),
            2 => Ok(Self::LineString),
            3 => Ok(Self::Polygon),
            4 => Ok(Self::MultiPoint),
            5 => Ok(Self::MultiLineString),
            6 => Ok(Self::MultiPolygon),
            7 => Ok(Self::GeometryCollection),
            _ => Err(TwkbError::UnknownGeometryType(twkb_id)),
        }
    }

    /// TWKB type code
    pub fn twkb_id(&self) -> u8 {
        match self {
            Self::Point => 1,
            Self::LineString => 2,
            Self::Polygon => 3,
            Self::MultiPoint => 4,
            Self::MultiLineString => 5,
            Self::MultiPolygon => 6,
            Self::GeometryCollection => 7,
        }
    }

    /// GeoJSON string identifier
    pub fn geojson_id(&self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
            Self::MultiPoint => "MultiPoint",
            Self::MultiLineString => "MultiLineString",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
        }
    }

    /// True for MultiPoint, MultiLineString, MultiPolygon and GeometryCollection
    ///
    /// Only these types begin their body with a member count and may carry
    /// an id list.
    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            Self::MultiPoint | Self::MultiLineString | Self::MultiPolygon | Self::GeometryCollection
        )
    }
}

impl Display for GeometryTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.geojson_id())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn twkb_id_roundtrip(
        #[values(
            GeometryTypeId::Point,
            GeometryTypeId::LineString,
            GeometryTypeId::Polygon,
            GeometryTypeId::MultiPoint,
            GeometryTypeId::MultiLineString,
            GeometryTypeId::MultiPolygon,
            GeometryTypeId::GeometryCollection
        )]
        geometry_type: GeometryTypeId,
    ) {
        assert_eq!(
            GeometryTypeId::try_from_twkb_id(geometry_type.twkb_id()).unwrap(),
            geometry_type
        );
    }

    #[rstest]
    fn unknown_twkb_id(#[values(0, 8, 15, 255)] twkb_id: u8) {
        let err = GeometryTypeId::try_from_twkb_id(twkb_id).unwrap_err();
        assert!(matches!(err, TwkbError::UnknownGeometryType(id) if id == twkb_id));
        assert_eq!(
            err.to_string(),
            format!("Unknown geometry type identifier {twkb_id}")
        );
    }

    #[test]
    fn display() {
        assert_eq!(GeometryTypeId::Point.to_string(), "Point");
        assert_eq!(
            GeometryTypeId::GeometryCollection.to_string(),
            "GeometryCollection"
        );
        assert!(!GeometryTypeId::Polygon.is_collection());
        assert!(GeometryTypeId::MultiPolygon.is_collection());
    }
}
