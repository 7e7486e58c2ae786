// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// Square sizes come first, so that they can directly index the coefficient tables
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TxSize {
  TX_4X4 = 0,
  TX_8X8 = 1,
  TX_16X16 = 2,
  TX_32X32 = 3,
  TX_64X64 = 4,
  TX_4X8 = 5,
  TX_8X4 = 6,
  TX_8X16 = 7,
  TX_16X8 = 8,
  TX_16X32 = 9,
  TX_32X16 = 10,
  TX_32X64 = 11,
  TX_64X32 = 12,
  TX_4X16 = 13,
  TX_16X4 = 14,
  TX_8X32 = 15,
  TX_32X8 = 16,
  TX_16X64 = 17,
  TX_64X16 = 18
}

impl TxSize {
  pub const SQUARE: [TxSize; 5] = [
    TxSize::TX_4X4, TxSize::TX_8X8, TxSize::TX_16X16, TxSize::TX_32X32, TxSize::TX_64X64
  ];

  pub fn width_log2(self) -> usize {
    use TxSize::*;
    match self {
      TX_4X4 | TX_4X8 | TX_4X16 => 2,
      TX_8X8 | TX_8X4 | TX_8X16 | TX_8X32 => 3,
      TX_16X16 | TX_16X8 | TX_16X32 | TX_16X4 | TX_16X64 => 4,
      TX_32X32 | TX_32X16 | TX_32X64 | TX_32X8 => 5,
      TX_64X64 | TX_64X32 | TX_64X16 => 6
    }
  }

  pub fn height_log2(self) -> usize {
    use TxSize::*;
    match self {
      TX_4X4 | TX_8X4 | TX_16X4 => 2,
      TX_8X8 | TX_4X8 | TX_16X8 | TX_32X8 => 3,
      TX_16X16 | TX_8X16 | TX_32X16 | TX_4X16 | TX_64X16 => 4,
      TX_32X32 | TX_16X32 | TX_64X32 | TX_8X32 => 5,
      TX_64X64 | TX_32X64 | TX_16X64 => 6
    }
  }

  // Largest square transform which fits inside this one. The coefficient model
  // is shared between a rectangular size and this square size
  pub fn sqr(self) -> TxSize {
    let log2 = self.width_log2().min(self.height_log2());
    TxSize::SQUARE[log2 - 2]
  }

  pub fn area(self) -> usize {
    1 << (self.width_log2() + self.height_log2())
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaneType {
  Y = 0,
  UV = 1
}

impl PlaneType {
  pub const ALL: [PlaneType; 2] = [PlaneType::Y, PlaneType::UV];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefType {
  Intra = 0,
  Inter = 1
}

impl RefType {
  pub const ALL: [RefType; 2] = [RefType::Intra, RefType::Inter];
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn square_mapping() {
    assert_eq!(TxSize::TX_4X8.sqr(), TxSize::TX_4X4);
    assert_eq!(TxSize::TX_32X16.sqr(), TxSize::TX_16X16);
    assert_eq!(TxSize::TX_64X64.sqr(), TxSize::TX_64X64);
    for (i, &sz) in TxSize::SQUARE.iter().enumerate() {
      assert_eq!(sz as usize, i);
      assert_eq!(sz.sqr(), sz);
    }
    assert_eq!(TxSize::TX_16X64.area(), 1024);
  }
}
