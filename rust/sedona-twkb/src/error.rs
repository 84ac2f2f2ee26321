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
use thiserror::Error;

use crate::varint::MAX_VARINT_BYTES;

/// Errors that can occur while decoding TWKB
#[derive(Error, Debug)]
pub enum TwkbError {
    /// The low nibble of the type byte was not a known geometry type (1-7)
    #[error("Unknown geometry type identifier {0}")]
    UnknownGeometryType(u8),

    /// A varint did not terminate within [MAX_VARINT_BYTES] bytes or did
    /// not fit in 64 bits
    #[error("Invalid TWKB: varint exceeds {MAX_VARINT_BYTES} bytes or 64 bits")]
    VarintOverflow,

    /// The declared size in the header disagrees with what was read
    #[error("Invalid TWKB: declared size of {declared} bytes but {actual} bytes were read")]
    SizeMismatch { declared: u64, actual: u64 },

    /// Geometry collections were nested deeper than allowed by the options
    #[error("Invalid TWKB: geometry collection nesting exceeds maximum depth {0}")]
    MaxDepthExceeded(usize),

    #[error("Invalid TWKB: {0}")]
    Invalid(String),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
