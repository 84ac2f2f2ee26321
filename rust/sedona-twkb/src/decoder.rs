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

use geo_traits::Dimensions;
use log::debug;

use crate::error::TwkbError;
use crate::geometry::{
    dimension_count, BoundingBox, Coord, Geometry, GeometryCollection, Header, LineString,
    LinearRing, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, MAX_DIMENSIONS,
};
use crate::reader::CountingReader;
use crate::twkb_header::TwkbHeader;
use crate::types::GeometryTypeId;
use crate::varint::{read_svarint, read_uvarint};

/// Upper bound on capacity reserved from a declared count before any of the
/// counted items have been read
const MAX_PREALLOCATE: usize = 1024;

/// Options for decoding TWKB
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Check the declared size of each value against the bytes actually read
    pub validate_size: bool,
    /// Maximum nesting depth of geometry collections (the root is depth 0)
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            validate_size: true,
            max_depth: 32,
        }
    }
}

/// Decode one TWKB value from `reader` with the default [DecodeOptions]
///
/// Exactly the bytes of the value are consumed; anything after it is left
/// in `reader`.
pub fn decode<R: Read>(reader: &mut R) -> Result<Geometry, TwkbError> {
    decode_with_options(reader, &DecodeOptions::default())
}

/// Decode one TWKB value from `reader`
pub fn decode_with_options<R: Read>(
    reader: &mut R,
    options: &DecodeOptions,
) -> Result<Geometry, TwkbError> {
    let mut reader = CountingReader::new(reader);
    decode_geometry(&mut reader, options, 0)
}

/// Decode one TWKB value from the start of `buf`
///
/// Returns the geometry and the number of bytes it occupied.
pub fn decode_slice(buf: &[u8]) -> Result<(Geometry, usize), TwkbError> {
    decode_slice_with_options(buf, &DecodeOptions::default())
}

/// Decode one TWKB value from the start of `buf` with the given options
pub fn decode_slice_with_options(
    buf: &[u8],
    options: &DecodeOptions,
) -> Result<(Geometry, usize), TwkbError> {
    let mut reader = CountingReader::new(buf);
    let geometry = decode_geometry(&mut reader, options, 0)?;
    Ok((geometry, reader.position() as usize))
}

/// Dimensions and scale factors shared by every coordinate of one value
struct DecodeContext {
    dimensions: Dimensions,
    num_ordinates: usize,
    scales: [f64; MAX_DIMENSIONS],
}

impl DecodeContext {
    fn new(header: &TwkbHeader) -> Self {
        Self {
            dimensions: header.dimensions(),
            num_ordinates: dimension_count(header.dimensions()),
            scales: header.scale_factors(),
        }
    }
}

/// Running integer position that coordinate deltas are applied to
///
/// Also tracks the extent of every coordinate it has passed through.
struct ReferencePoint {
    values: [i64; MAX_DIMENSIONS],
    extent: BoundingBox,
}

impl ReferencePoint {
    fn new(dimensions: Dimensions) -> Self {
        Self {
            values: [0; MAX_DIMENSIONS],
            extent: BoundingBox::empty(dimensions),
        }
    }

    fn read_coord<R: Read>(
        &mut self,
        reader: &mut R,
        context: &DecodeContext,
    ) -> Result<Coord, TwkbError> {
        let mut values = [0.0; MAX_DIMENSIONS];
        for i in 0..context.num_ordinates {
            let delta = read_svarint(reader)?;
            self.values[i] = self.values[i].checked_add(delta).ok_or_else(|| {
                TwkbError::Invalid(format!("coordinate delta overflows ordinate {i}"))
            })?;
            values[i] = self.values[i] as f64 / context.scales[i];
        }

        let coord = Coord::new(context.dimensions, values);
        self.extent.update(&coord);
        Ok(coord)
    }

    fn read_coords<R: Read>(
        &mut self,
        reader: &mut R,
        context: &DecodeContext,
    ) -> Result<Vec<Coord>, TwkbError> {
        let count = read_count(reader)?;
        let mut coords = Vec::with_capacity(count.min(MAX_PREALLOCATE));
        for _ in 0..count {
            coords.push(self.read_coord(reader, context)?);
        }
        Ok(coords)
    }

    fn read_rings<R: Read>(
        &mut self,
        reader: &mut R,
        context: &DecodeContext,
    ) -> Result<Vec<LinearRing>, TwkbError> {
        let count = read_count(reader)?;
        let mut rings = Vec::with_capacity(count.min(MAX_PREALLOCATE));
        for _ in 0..count {
            let coords = self.read_coords(reader, context)?;
            rings.push(LinearRing::new(context.dimensions, coords));
        }
        Ok(rings)
    }

    /// The extent of all coordinates read so far, if there were any
    fn extent(&self) -> Option<BoundingBox> {
        if self.extent.is_empty() {
            None
        } else {
            Some(self.extent)
        }
    }
}

fn decode_geometry<R: Read>(
    reader: &mut CountingReader<R>,
    options: &DecodeOptions,
    depth: usize,
) -> Result<Geometry, TwkbError> {
    if depth > options.max_depth {
        debug!(
            "TWKB nesting depth {depth} exceeds maximum depth {}",
            options.max_depth
        );
        return Err(TwkbError::MaxDepthExceeded(options.max_depth));
    }

    let start = reader.position();
    let header = TwkbHeader::read(reader)?;
    let geometry = if header.is_empty() {
        empty_geometry(&header)
    } else {
        decode_body(reader, &header, options, depth)?
    };

    if options.validate_size {
        if let Some(declared) = header.size() {
            let actual = reader.position() - start - header.size_end();
            if actual != declared {
                debug!(
                    "TWKB {} declared size {declared} but {actual} bytes were read",
                    header.geometry_type()
                );
                return Err(TwkbError::SizeMismatch { declared, actual });
            }
        }
    }

    Ok(geometry)
}

fn empty_geometry(header: &TwkbHeader) -> Geometry {
    let geometry_header = Header::new(
        header.geometry_type(),
        header.dimensions(),
        header.bbox().copied(),
    );
    match header.geometry_type() {
        GeometryTypeId::Point => Geometry::Point(Point::new(geometry_header, None)),
        GeometryTypeId::LineString => {
            Geometry::LineString(LineString::new(geometry_header, vec![]))
        }
        GeometryTypeId::Polygon => Geometry::Polygon(Polygon::new(geometry_header, vec![])),
        GeometryTypeId::MultiPoint => {
            Geometry::MultiPoint(MultiPoint::new(geometry_header, vec![], vec![]))
        }
        GeometryTypeId::MultiLineString => {
            Geometry::MultiLineString(MultiLineString::new(geometry_header, vec![], vec![]))
        }
        GeometryTypeId::MultiPolygon => {
            Geometry::MultiPolygon(MultiPolygon::new(geometry_header, vec![], vec![]))
        }
        GeometryTypeId::GeometryCollection => {
            Geometry::GeometryCollection(GeometryCollection::new(geometry_header, vec![], vec![]))
        }
    }
}

fn decode_body<R: Read>(
    reader: &mut CountingReader<R>,
    header: &TwkbHeader,
    options: &DecodeOptions,
    depth: usize,
) -> Result<Geometry, TwkbError> {
    let context = DecodeContext::new(header);
    let mut reference = ReferencePoint::new(context.dimensions);
    let member_header = |geometry_type| Header::new(geometry_type, context.dimensions, None);

    let geometry = match header.geometry_type() {
        GeometryTypeId::Point => {
            let coord = reference.read_coord(reader, &context)?;
            Geometry::Point(Point::new(
                root_header(header, &reference),
                Some(coord),
            ))
        }
        GeometryTypeId::LineString => {
            let coords = reference.read_coords(reader, &context)?;
            Geometry::LineString(LineString::new(root_header(header, &reference), coords))
        }
        GeometryTypeId::Polygon => {
            let rings = reference.read_rings(reader, &context)?;
            Geometry::Polygon(Polygon::new(root_header(header, &reference), rings))
        }
        GeometryTypeId::MultiPoint => {
            let (count, ids) = read_multi_header(reader, header)?;
            let mut points = Vec::with_capacity(count.min(MAX_PREALLOCATE));
            for _ in 0..count {
                let coord = reference.read_coord(reader, &context)?;
                points.push(Point::new(
                    member_header(GeometryTypeId::Point),
                    Some(coord),
                ));
            }
            Geometry::MultiPoint(MultiPoint::new(
                root_header(header, &reference),
                ids,
                points,
            ))
        }
        GeometryTypeId::MultiLineString => {
            let (count, ids) = read_multi_header(reader, header)?;
            let mut line_strings = Vec::with_capacity(count.min(MAX_PREALLOCATE));
            for _ in 0..count {
                let coords = reference.read_coords(reader, &context)?;
                line_strings.push(LineString::new(
                    member_header(GeometryTypeId::LineString),
                    coords,
                ));
            }
            Geometry::MultiLineString(MultiLineString::new(
                root_header(header, &reference),
                ids,
                line_strings,
            ))
        }
        GeometryTypeId::MultiPolygon => {
            let (count, ids) = read_multi_header(reader, header)?;
            let mut polygons = Vec::with_capacity(count.min(MAX_PREALLOCATE));
            for _ in 0..count {
                let rings = reference.read_rings(reader, &context)?;
                polygons.push(Polygon::new(member_header(GeometryTypeId::Polygon), rings));
            }
            Geometry::MultiPolygon(MultiPolygon::new(
                root_header(header, &reference),
                ids,
                polygons,
            ))
        }
        GeometryTypeId::GeometryCollection => {
            let (count, ids) = read_multi_header(reader, header)?;
            let mut geometries = Vec::with_capacity(count.min(MAX_PREALLOCATE));
            for _ in 0..count {
                geometries.push(decode_geometry(reader, options, depth + 1)?);
            }

            // Members may differ in dimensions, so only a declared bbox is kept
            let geometry_header = Header::new(
                header.geometry_type(),
                header.dimensions(),
                header.bbox().copied(),
            );
            Geometry::GeometryCollection(GeometryCollection::new(geometry_header, ids, geometries))
        }
    };

    Ok(geometry)
}

/// Header for a top level value: the declared bbox if present, otherwise the
/// extent of the coordinates that were read
fn root_header(header: &TwkbHeader, reference: &ReferencePoint) -> Header {
    let bbox = header.bbox().copied().or_else(|| reference.extent());
    Header::new(header.geometry_type(), header.dimensions(), bbox)
}

fn read_multi_header<R: Read>(
    reader: &mut R,
    header: &TwkbHeader,
) -> Result<(usize, Vec<i64>), TwkbError> {
    let count = read_count(reader)?;
    let ids = if header.has_id_list() {
        let mut ids = Vec::with_capacity(count.min(MAX_PREALLOCATE));
        for _ in 0..count {
            ids.push(read_svarint(reader)?);
        }
        ids
    } else {
        vec![]
    };

    Ok((count, ids))
}

fn read_count<R: Read>(reader: &mut R) -> Result<usize, TwkbError> {
    let count = read_uvarint(reader)?;
    usize::try_from(count)
        .map_err(|_| TwkbError::Invalid(format!("count {count} does not fit in usize")))
}
