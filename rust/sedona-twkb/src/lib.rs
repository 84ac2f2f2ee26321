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
//! Decoder for Tiny Well-Known Binary (TWKB) geometries
//!
//! TWKB stores coordinates as varint encoded integer deltas scaled by a
//! per-value decimal precision. [decode] reads one value from any
//! [std::io::Read] and returns a [Geometry] whose types implement the
//! [geo_traits] traits, so they can be written as WKT or converted to
//! `geo-types` by any geo-traits consumer.
//!
//! ```
//! use sedona_twkb::{decode_slice, Geometry};
//!
//! let (geometry, consumed) = decode_slice(&[0x01, 0x00, 0x02, 0x04]).unwrap();
//! assert_eq!(consumed, 4);
//! let Geometry::Point(point) = geometry else { unreachable!() };
//! assert_eq!(point.coord().unwrap().values(), &[1.0, 2.0]);
//! ```

pub mod decoder;
pub mod error;
mod geo_traits_impl;
pub mod geometry;
mod reader;
pub mod twkb_header;
pub mod types;
pub mod varint;

pub use decoder::{
    decode, decode_slice, decode_slice_with_options, decode_with_options, DecodeOptions,
};
pub use error::TwkbError;
pub use geometry::{
    BoundingBox, Coord, Geometry, GeometryCollection, Header, LineString, LinearRing,
    MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};
pub use twkb_header::{Precision, TwkbHeader};
pub use types::GeometryTypeId;
