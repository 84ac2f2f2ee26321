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
//! Variable-length integer primitives used by TWKB
//!
//! TWKB stores every integer as a little-endian base-128 varint. Signed values
//! are zigzag encoded first so that small magnitudes of either sign take the
//! fewest bytes.

use std::io::Read;

use byteorder::ReadBytesExt;

use crate::error::TwkbError;

/// Maximum number of bytes a varint may occupy (ceil(64 / 7))
pub const MAX_VARINT_BYTES: usize = 10;

/// Read an unsigned varint
///
/// Fails with [TwkbError::IO] if the stream ends before the terminating byte
/// and with [TwkbError::VarintOverflow] if the value does not fit in a `u64`.
pub fn read_uvarint<R: Read>(reader: &mut R) -> Result<u64, TwkbError> {
    let mut value = 0u64;
    for i in 0..MAX_VARINT_BYTES {
        let byte = reader.read_u8()?;
        let payload = (byte & 0x7F) as u64;

        // The tenth byte only has room for the single remaining bit
        if i == MAX_VARINT_BYTES - 1 && payload > 1 {
            return Err(TwkbError::VarintOverflow);
        }

        value |= payload << (7 * i);
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }

    Err(TwkbError::VarintOverflow)
}

/// Read a zigzag encoded signed varint
pub fn read_svarint<R: Read>(reader: &mut R) -> Result<i64, TwkbError> {
    read_uvarint(reader).map(unzigzag)
}

/// Map a zigzag encoded value back to its signed counterpart
///
/// Even values map to `value / 2` and odd values to `-(value / 2) - 1`.
pub fn unzigzag(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, ErrorKind};

    use rstest::rstest;
    use sedona_testing::create::{write_svarint, write_uvarint, zigzag};

    use super::*;

    #[rstest]
    #[case(&[0x00], 0)]
    #[case(&[0x01], 1)]
    #[case(&[0x7F], 127)]
    #[case(&[0x80, 0x01], 128)]
    #[case(&[0xAC, 0x02], 300)]
    #[case(&[0xFF, 0xFF, 0x03], 65535)]
    #[case(
        &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01],
        u64::MAX
    )]
    fn uvarint(#[case] buf: &[u8], #[case] expected: u64) {
        let mut reader = Cursor::new(buf);
        assert_eq!(read_uvarint(&mut reader).unwrap(), expected);
        assert_eq!(reader.position() as usize, buf.len());
    }

    #[test]
    fn uvarint_leaves_trailing_bytes() {
        let mut reader = Cursor::new([0x96u8, 0x01, 0x7F]);
        assert_eq!(read_uvarint(&mut reader).unwrap(), 150);
        assert_eq!(read_uvarint(&mut reader).unwrap(), 127);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, -1)]
    #[case(2, 1)]
    #[case(3, -2)]
    #[case(4, 2)]
    #[case(u64::MAX - 1, i64::MAX)]
    #[case(u64::MAX, i64::MIN)]
    fn unzigzag_values(#[case] encoded: u64, #[case] expected: i64) {
        assert_eq!(unzigzag(encoded), expected);
    }

    #[rstest]
    fn unzigzag_inverts_zigzag(
        #[values(0, 1, -1, 63, -64, 1_000_000, -1_000_000, i64::MAX, i64::MIN)] value: i64,
    ) {
        assert_eq!(unzigzag(zigzag(value)), value);
    }

    #[rstest]
    fn uvarint_inverts_writer(
        #[values(0, 1, 127, 128, 16_383, 16_384, u32::MAX as u64, u64::MAX)] value: u64,
    ) {
        let mut buf = Vec::new();
        write_uvarint(&mut buf, value);
        assert_eq!(read_uvarint(&mut Cursor::new(&buf)).unwrap(), value);
    }

    #[test]
    fn svarint() {
        let mut buf = Vec::new();
        write_svarint(&mut buf, -150);
        write_svarint(&mut buf, 150);
        let mut reader = Cursor::new(buf);
        assert_eq!(read_svarint(&mut reader).unwrap(), -150);
        assert_eq!(read_svarint(&mut reader).unwrap(), 150);
    }

    #[rstest]
    #[case(&[])]
    #[case(&[0x80])]
    #[case(&[0xFF, 0xFF])]
    fn truncated_uvarint(#[case] buf: &[u8]) {
        let err = read_uvarint(&mut Cursor::new(buf)).unwrap_err();
        match err {
            TwkbError::IO(e) => assert_eq!(e.kind(), ErrorKind::UnexpectedEof),
            other => panic!("Expected IO error, got {other:?}"),
        }
    }

    #[test]
    fn overlong_uvarint() {
        // Eleven continuation bytes never terminate within the limit
        let buf = [0x80u8; 11];
        assert!(matches!(
            read_uvarint(&mut Cursor::new(buf)),
            Err(TwkbError::VarintOverflow)
        ));

        // Ten bytes, but the last one carries more than the 64th bit
        let buf: [u8; 10] = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x02];
        assert!(matches!(
            read_uvarint(&mut Cursor::new(buf)),
            Err(TwkbError::VarintOverflow)
        ));
    }
}
