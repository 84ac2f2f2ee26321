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
/// TWKB of POINT (1 2)
pub const POINT_TWKB: [u8; 4] = [
    0x01, // point, precision 0
    0x00, // no metadata
    0x02, 0x04, // x, y
];

/// TWKB of POINT EMPTY
pub const POINT_EMPTY_TWKB: [u8; 2] = [0x01, 0x10];

/// TWKB of POINT Z (1 2 3) with a Z precision of 1
pub const POINT_Z_TWKB: [u8; 6] = [
    0x01, // point, precision 0
    0x08, // extended dimensions
    0x05, // z, z precision 1
    0x02, 0x04, 0x3c, // x, y, z
];

/// TWKB of POINT Z (1 2 3) with a Z precision of 1 and a bounding box
pub const POINT_Z_WITH_BBOX_TWKB: [u8; 12] = [
    0x01, // point, precision 0
    0x09, // extended dimensions, bbox
    0x05, // z, z precision 1
    0x02, 0x00, // x min, x delta
    0x04, 0x00, // y min, y delta
    0x3c, 0x00, // z min, z delta
    0x02, 0x04, 0x3c, // x, y, z
];

/// TWKB of POINT M (1 2 1.25) with an M precision of 2
pub const POINT_M_TWKB: [u8; 7] = [
    0x01, // point, precision 0
    0x08, // extended dimensions
    0x42, // m, m precision 2
    0x02, 0x04, 0xfa, 0x01, // x, y, m
];

/// TWKB of POINT ZM (1 2 3 4)
pub const POINT_ZM_TWKB: [u8; 7] = [
    0x01, // point, precision 0
    0x08, // extended dimensions
    0x03, // z and m, precision 0
    0x02, 0x04, 0x06, 0x08, // x, y, z, m
];

/// TWKB of LINESTRING (1 1, 5 5)
pub const LINESTRING_TWKB: [u8; 7] = [
    0x02, // linestring, precision 0
    0x00, // no metadata
    0x02, // 2 points
    0x02, 0x02, // 1 1
    0x08, 0x08, // +4 +4
];

/// TWKB of POLYGON ((0 0, 2 0, 2 2, 0 2, 0 0), (0 0, 0 1, 1 1, 1 0, 0 0))
/// with a size and a bounding box
pub const POLYGON_WITH_HOLE_TWKB: [u8; 30] = [
    0x03, // polygon, precision 0
    0x03, // size, bbox
    0x1b, // 27 bytes follow
    0x00, 0x04, 0x00, 0x04, // bbox
    0x02, // 2 rings
    0x05, // 5 points
    0x00, 0x00, 0x04, 0x00, 0x00, 0x04, 0x03, 0x00, 0x00, 0x03, // shell
    0x05, // 5 points
    0x00, 0x00, 0x00, 0x02, 0x02, 0x00, 0x00, 0x01, 0x01, 0x00, // hole
];

/// TWKB of MULTIPOINT ((0 1), (2 3)) with a size, a bounding box and ids 0 and 1
pub const MULTIPOINT_WITH_IDS_TWKB: [u8; 14] = [
    0x04, // multipoint, precision 0
    0x07, // id list, size, bbox
    0x0b, // 11 bytes follow
    0x00, 0x04, 0x02, 0x04, // bbox
    0x02, // 2 points
    0x00, 0x02, // ids
    0x00, 0x02, // 0 1
    0x04, 0x04, // +2 +2
];

/// TWKB of MULTILINESTRING ((1 1, 2 2), (3 2, 3 3))
pub const MULTILINESTRING_TWKB: [u8; 13] = [
    0x05, // multilinestring, precision 0
    0x00, // no metadata
    0x02, // 2 linestrings
    0x02, 0x02, 0x02, 0x02, 0x02, // 2 points
    0x02, 0x02, 0x00, 0x00, 0x02, // 2 points, continuing from (2 2)
];

/// TWKB of MULTIPOLYGON (((0 0, 1 0, 1 1, 0 0)), ((2 2, 3 2, 3 3, 2 2)))
pub const MULTIPOLYGON_TWKB: [u8; 23] = [
    0x06, // multipolygon, precision 0
    0x00, // no metadata
    0x02, // 2 polygons
    0x01, 0x04, 0x00, 0x00, 0x02, 0x00, 0x00, 0x02, 0x01, 0x01, // 1 ring of 4 points
    0x01, 0x04, 0x04, 0x04, 0x02, 0x00, 0x00, 0x02, 0x01, 0x01, // 1 ring of 4 points
];

/// TWKB of GEOMETRYCOLLECTION (POINT (0 1), LINESTRING (4 5, 6 7)) with ids 0 and 1
pub const GEOMETRYCOLLECTION_TWKB: [u8; 16] = [
    0x07, // geometrycollection, precision 0
    0x04, // id list
    0x02, // 2 geometries
    0x00, 0x02, // ids
    0x01, 0x00, 0x00, 0x02, // POINT (0 1)
    0x02, 0x00, 0x02, 0x08, 0x0a, 0x04, 0x04, // LINESTRING (4 5, 6 7)
];
