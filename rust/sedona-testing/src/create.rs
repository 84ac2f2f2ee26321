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
//! Helpers to build TWKB input for tests

/// Parse a hex string into TWKB bytes
///
/// Panics if `hex` is not valid hex, which in a test is always a typo.
pub fn twkb_from_hex(hex: &str) -> Vec<u8> {
    hex::decode(hex).unwrap_or_else(|e| panic!("Invalid TWKB hex {hex:?}: {e}"))
}

/// Zigzag encode a signed value
pub fn zigzag(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Append `value` to `buf` as an unsigned varint
pub fn write_uvarint(buf: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        buf.push((value as u8 & 0x7F) | 0x80);
        value >>= 7;
    }
    buf.push(value as u8);
}

/// Append `value` to `buf` as a zigzag encoded varint
pub fn write_svarint(buf: &mut Vec<u8>, value: i64) {
    write_uvarint(buf, zigzag(value));
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 0)]
    #[case(-1, 1)]
    #[case(1, 2)]
    #[case(-2, 3)]
    #[case(i64::MAX, u64::MAX - 1)]
    #[case(i64::MIN, u64::MAX)]
    fn zigzag_values(#[case] value: i64, #[case] expected: u64) {
        assert_eq!(zigzag(value), expected);
    }

    #[rstest]
    #[case(0, &[0x00])]
    #[case(127, &[0x7F])]
    #[case(128, &[0x80, 0x01])]
    #[case(300, &[0xAC, 0x02])]
    fn uvarint_bytes(#[case] value: u64, #[case] expected: &[u8]) {
        let mut buf = Vec::new();
        write_uvarint(&mut buf, value);
        assert_eq!(buf, expected);
    }

    #[test]
    fn u64_max_is_ten_bytes() {
        let mut buf = Vec::new();
        write_uvarint(&mut buf, u64::MAX);
        assert_eq!(buf.len(), 10);
        assert_eq!(buf[9], 0x01);
    }

    #[test]
    fn hex() {
        assert_eq!(twkb_from_hex("01000204"), vec![0x01, 0x00, 0x02, 0x04]);
    }

    #[test]
    #[should_panic(expected = "Invalid TWKB hex")]
    fn bad_hex() {
        twkb_from_hex("010");
    }
}
