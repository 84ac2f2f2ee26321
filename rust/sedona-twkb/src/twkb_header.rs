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
use std::io::Read;

use byteorder::ReadBytesExt;
use geo_traits::Dimensions;
use log::trace;

use crate::error::TwkbError;
use crate::geometry::{dimension_count, BoundingBox, MAX_DIMENSIONS};
use crate::reader::CountingReader;
use crate::types::GeometryTypeId;
use crate::varint::{read_svarint, read_uvarint, unzigzag};

// Metadata flag bits
const BBOX: u8 = 0x01;
const SIZE: u8 = 0x02;
const ID_LIST: u8 = 0x04;
const EXTENDED_DIMENSIONS: u8 = 0x08;
const EMPTY: u8 = 0x10;

// Extended dimensions bits
const HAS_Z: u8 = 0x01;
const HAS_M: u8 = 0x02;

/// Decimal precision of each ordinate
///
/// Coordinates are stored as integers scaled by `10^precision`. The XY
/// precision is signed; Z and M precisions are unsigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Precision {
    xy: i8,
    z: u8,
    m: u8,
}

impl Precision {
    pub fn new(xy: i8, z: u8, m: u8) -> Self {
        Self { xy, z, m }
    }

    pub fn xy(&self) -> i8 {
        self.xy
    }

    pub fn z(&self) -> u8 {
        self.z
    }

    pub fn m(&self) -> u8 {
        self.m
    }

    /// Per-ordinate scale factors for coordinates of the given [Dimensions]
    ///
    /// Ordinate `i` of a decoded coordinate is the accumulated integer value
    /// divided by the `i`th factor. Unused trailing slots are 1.
    pub fn scale_factors(&self, dimensions: Dimensions) -> [f64; MAX_DIMENSIONS] {
        let xy = 10f64.powi(self.xy as i32);
        let z = 10f64.powi(self.z as i32);
        let m = 10f64.powi(self.m as i32);
        match dimensions {
            Dimensions::Xyz => [xy, xy, z, 1.0],
            Dimensions::Xym => [xy, xy, m, 1.0],
            Dimensions::Xyzm => [xy, xy, z, m],
            _ => [xy, xy, 1.0, 1.0],
        }
    }
}

/// Fast-path TWKB header parser
///
/// Parses the type byte, metadata flags, optional extended dimensions, size
/// and bounding box of a TWKB value without touching its body.
#[derive(Debug, Clone, PartialEq)]
pub struct TwkbHeader {
    geometry_type: GeometryTypeId,
    precision: Precision,
    flags: u8,
    dimensions: Dimensions,
    size: Option<u64>,
    bbox: Option<BoundingBox>,
    // Offset just after the size field, relative to the start of the header
    size_end: u64,
    encoded_len: u64,
}

impl TwkbHeader {
    /// Parse a header from the start of a buffer
    pub fn try_new(buf: &[u8]) -> Result<Self, TwkbError> {
        let mut reader = buf;
        Self::read(&mut reader)
    }

    /// Parse a header, leaving `reader` positioned at the start of the body
    ///
    /// Layout:
    /// 1. type and precision: low nibble is the geometry type (1-7), high
    ///    nibble is the zigzag encoded XY precision
    /// 2. metadata flags: bbox, size, id list, extended dimensions, empty
    /// 3. (optional) extended dimensions: Z/M presence and their precisions
    /// 4. (optional) size of the remainder of the value as an unsigned varint
    /// 5. (optional) bounding box as a signed minimum and delta per ordinate
    ///
    /// See https://github.com/TWKB/Specification/blob/master/twkb.md
    pub fn read<R: Read>(reader: &mut R) -> Result<Self, TwkbError> {
        let mut reader = CountingReader::new(reader);

        let type_and_precision = reader.read_u8()?;
        let geometry_type = GeometryTypeId::try_from_twkb_id(type_and_precision & 0x0F)?;
        let xy_precision = unzigzag(((type_and_precision & 0xF0) >> 4) as u64) as i8;

        let flags = reader.read_u8()?;

        let mut precision = Precision::new(xy_precision, 0, 0);
        let mut dimensions = Dimensions::Xy;
        if flags & EXTENDED_DIMENSIONS != 0 {
            let extended = reader.read_u8()?;
            precision.z = (extended & 0x1C) >> 2;
            precision.m = (extended & 0xE0) >> 5;

            // Check ZM first since it has both bits set
            dimensions = if extended & (HAS_Z | HAS_M) == HAS_Z | HAS_M {
                Dimensions::Xyzm
            } else if extended & HAS_Z != 0 {
                Dimensions::Xyz
            } else if extended & HAS_M != 0 {
                Dimensions::Xym
            } else {
                Dimensions::Xy
            };
        }

        let size = if flags & SIZE != 0 {
            Some(read_uvarint(&mut reader)?)
        } else {
            None
        };
        let size_end = reader.position();

        let bbox = if flags & BBOX != 0 {
            Some(read_bbox(&mut reader, dimensions)?)
        } else {
            None
        };

        trace!(
            "TWKB header: {geometry_type} {dimensions:?} precision={precision:?} flags={flags:#04x}"
        );

        Ok(Self {
            geometry_type,
            precision,
            flags,
            dimensions,
            size,
            bbox,
            size_end,
            encoded_len: reader.position(),
        })
    }

    /// The geometry type of this value
    /// 1 -> Point
    /// 2 -> LineString
    /// 3 -> Polygon
    /// 4 -> MultiPoint
    /// 5 -> MultiLineString
    /// 6 -> MultiPolygon
    /// 7 -> GeometryCollection
    pub fn geometry_type(&self) -> GeometryTypeId {
        self.geometry_type
    }

    /// The dimensions of every coordinate in this value
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn scale_factors(&self) -> [f64; MAX_DIMENSIONS] {
        self.precision.scale_factors(self.dimensions)
    }

    pub fn has_bbox(&self) -> bool {
        self.flags & BBOX != 0
    }

    pub fn has_size(&self) -> bool {
        self.flags & SIZE != 0
    }

    /// True if the id list flag is set on a multi geometry or collection
    ///
    /// The flag has no meaning for Point, LineString and Polygon values and
    /// is ignored for them.
    pub fn has_id_list(&self) -> bool {
        self.flags & ID_LIST != 0 && self.geometry_type.is_collection()
    }

    pub fn has_extended_dimensions(&self) -> bool {
        self.flags & EXTENDED_DIMENSIONS != 0
    }

    /// True if the value is flagged as empty and has no body
    pub fn is_empty(&self) -> bool {
        self.flags & EMPTY != 0
    }

    /// The declared size of the remainder of the value after the size field
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// Bounding box from the header as stored: the integer minimum and
    /// `minimum + delta` of each ordinate, without applying the precision
    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }

    /// Bounding box from the header divided by the scale factors, in the same
    /// units as decoded coordinates
    pub fn scaled_bbox(&self) -> Option<BoundingBox> {
        let bbox = self.bbox.as_ref()?;
        let scales = self.scale_factors();
        let mut scaled = *bbox;
        for (i, scale) in scales.iter().take(dimension_count(self.dimensions)).enumerate() {
            scaled.set(i, bbox.mins()[i] / scale, bbox.maxs()[i] / scale);
        }
        Some(scaled)
    }

    /// Number of bytes occupied by the header itself
    pub fn encoded_len(&self) -> u64 {
        self.encoded_len
    }

    /// Number of header bytes up to and including the size field
    pub(crate) fn size_end(&self) -> u64 {
        self.size_end
    }

    /// Total length of the value including the header, if a size was declared
    pub fn declared_len(&self) -> Option<u64> {
        self.size.map(|size| self.size_end.saturating_add(size))
    }
}

fn read_bbox<R: Read>(reader: &mut R, dimensions: Dimensions) -> Result<BoundingBox, TwkbError> {
    let mut bbox = BoundingBox::empty(dimensions);
    for i in 0..dimension_count(dimensions) {
        let min = read_svarint(reader)?;
        let delta = read_svarint(reader)?;
        let max = min.checked_add(delta).ok_or_else(|| {
            TwkbError::Invalid(format!("bounding box maximum overflows for ordinate {i}"))
        })?;
        bbox.set(i, min as f64, max as f64);
    }

    Ok(bbox)
}
