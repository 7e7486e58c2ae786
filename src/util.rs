// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use std::io;
use std::io::prelude::*;

use byteorder::{ReadBytesExt, WriteBytesExt};

// Write a value in AV1's LEB128 format
// In this format, each byte provides 7 bits of the value,
// along with a flag bit which indicates whether there are more bytes to read
pub fn write_leb128<W: Write>(w: &mut W, mut value: u64) -> io::Result<()> {
  if value == 0 {
    return w.write_u8(0);
  }

  while value != 0 {
    let more_flag = if (value >> 7) > 0 { 0x80 } else { 0x00 };
    w.write_u8(more_flag | (value & 0x7F) as u8)?;
    value >>= 7;
  }
  Ok(())
}

// At most 8 bytes are allowed, as in the AV1 syntax
pub fn read_leb128<R: Read>(r: &mut R) -> io::Result<u64> {
  let mut value = 0u64;
  for i in 0..8 {
    let byte = r.read_u8()?;
    value |= ((byte & 0x7F) as u64) << (7 * i);
    if byte & 0x80 == 0 {
      return Ok(value);
    }
  }
  Err(io::Error::new(io::ErrorKind::InvalidData, "LEB128 value is longer than 8 bytes"))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Cursor;

  #[test]
  fn leb128_encoding() {
    let mut buf = Vec::new();
    write_leb128(&mut buf, 0).unwrap();
    write_leb128(&mut buf, 127).unwrap();
    write_leb128(&mut buf, 300).unwrap();
    assert_eq!(buf, [0x00, 0x7F, 0xAC, 0x02]);

    let mut r = Cursor::new(&buf);
    assert_eq!(read_leb128(&mut r).unwrap(), 0);
    assert_eq!(read_leb128(&mut r).unwrap(), 127);
    assert_eq!(read_leb128(&mut r).unwrap(), 300);
    assert!(read_leb128(&mut r).is_err());
  }

  #[test]
  fn overlong_leb128_is_rejected() {
    let buf = [0x80u8; 9];
    let err = read_leb128(&mut Cursor::new(&buf[..])).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
  }
}
