// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// CDF storage primitives
//
// Every CDF is stored in inverse form (ICDF = CDF_PROB_TOP - cdf), as a record of
// `nsymbs` probability entries followed by one adaptation counter slot, and then
// zero padding up to the stride of the table it lives in. The last probability
// entry is always icdf(CDF_PROB_TOP) == 0, so a record can be found in a packed
// buffer by scanning for that sentinel.

use bytemuck::allocation::zeroed_slice_box;

pub const CDF_PROB_BITS: u32 = 15;
pub const CDF_PROB_TOP: u16 = 1 << CDF_PROB_BITS;

// Forward <-> inverse conversion. This is its own inverse
pub const fn icdf(x: u16) -> u16 {
  CDF_PROB_TOP - x
}

// Build a padded ICDF record of total size S from the forward values of a
// CDF with fwd.len() + 1 symbols. The final symbol is implicit, which is where
// the sentinel comes from
pub const fn aom_cdf<const S: usize>(fwd: &[u16]) -> [u16; S] {
  assert!(fwd.len() + 2 <= S);
  let mut out = [0u16; S];
  let mut i = 0;
  while i < fwd.len() {
    assert!(fwd[i] < CDF_PROB_TOP);
    out[i] = icdf(fwd[i]);
    i += 1;
  }
  out
}

// Probability of symbol `s` in an ICDF record
pub fn symbol_prob(cdf: &[u16], s: usize) -> u16 {
  let prev = if s == 0 { CDF_PROB_TOP } else { cdf[s - 1] };
  prev - cdf[s]
}

// Fill in an equiprobable CDF over `nsymbs` symbols, plus a zeroed counter
pub fn uniform_cdf(cdf: &mut [u16], nsymbs: usize) {
  assert!(2 <= nsymbs && nsymbs < cdf.len());
  let top = CDF_PROB_TOP as usize;
  for i in 0..nsymbs {
    cdf[i] = icdf(((i + 1) * top / nsymbs) as u16);
  }
  cdf[nsymbs] = 0;
}

// Check that the first `nsymbs` entries of `cdf` form a valid ICDF:
// strictly decreasing (so that no symbol has zero weight) and ending in the sentinel
pub fn is_valid_cdf(cdf: &[u16], nsymbs: usize) -> bool {
  if nsymbs < 2 || nsymbs > cdf.len() {
    return false;
  }
  let mut prev = CDF_PROB_TOP;
  for &v in &cdf[..nsymbs] {
    if v >= prev {
      return false;
    }
    prev = v;
  }
  prev == icdf(CDF_PROB_TOP)
}

// Scan a packed buffer the same way the averaging engine walks it, and return
// the index of the first slot which breaks the record convention
pub fn validate_packed(buf: &[u16]) -> Result<(), usize> {
  let len = buf.len();
  let mut i = 0;
  while i < len {
    // Probability entries, up to and including the sentinel
    let start = i;
    let mut prev = CDF_PROB_TOP;
    loop {
      if i >= len {
        return Err(start);
      }
      let v = buf[i];
      i += 1;
      if v == icdf(CDF_PROB_TOP) {
        break;
      }
      if v >= prev {
        return Err(i - 1);
      }
      prev = v;
    }
    // Counter slot
    if i >= len {
      return Err(i - 1);
    }
    i += 1;
    // Zero padding until the next record
    while i < len && buf[i] == 0 {
      i += 1;
    }
  }
  Ok(())
}

// Explicit description of how records are laid out in one table:
// a fixed stride, plus the number of symbols in each record.
// A record with 0 symbols is unused and must stay all-zero
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CdfLayout {
  stride: usize,
  nsymbs: Box<[u8]>,
}

impl CdfLayout {
  pub fn new<F: FnMut(usize) -> usize>(records: usize, stride: usize, mut f: F) -> Self {
    let nsymbs: Box<[u8]> = (0..records).map(|i| {
      let n = f(i);
      assert!(n == 0 || (2 <= n && n + 1 <= stride),
              "record {} has {} symbols, which does not fit a stride of {}", i, n, stride);
      n as u8
    }).collect();

    Self {
      stride: stride,
      nsymbs: nsymbs
    }
  }

  // All records share one alphabet size, with no padding
  pub fn uniform(records: usize, nsymbs: usize) -> Self {
    Self::new(records, nsymbs + 1, |_| nsymbs)
  }

  pub fn records(&self) -> usize {
    self.nsymbs.len()
  }

  pub fn stride(&self) -> usize {
    self.stride
  }

  // Total number of u16 slots
  pub fn len(&self) -> usize {
    self.records() * self.stride
  }

  pub fn nsymbs(&self, record: usize) -> usize {
    self.nsymbs[record] as usize
  }

  pub fn used_records(&self) -> usize {
    self.nsymbs.iter().filter(|&&n| n != 0).count()
  }
}

// One named group of CDF records, stored contiguously
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CdfTable {
  layout: CdfLayout,
  data: Box<[u16]>,
}

impl CdfTable {
  pub fn zeroed(layout: CdfLayout) -> Self {
    let data = zeroed_slice_box(layout.len());
    Self {
      layout: layout,
      data: data
    }
  }

  pub fn layout(&self) -> &CdfLayout {
    &self.layout
  }

  pub fn records(&self) -> usize {
    self.layout.records()
  }

  pub fn nsymbs(&self, record: usize) -> usize {
    self.layout.nsymbs(record)
  }

  // Full stride-sized slot range of a record, including counter and padding
  pub fn record(&self, record: usize) -> &[u16] {
    let start = record * self.layout.stride;
    &self.data[start .. start + self.layout.stride]
  }

  pub fn record_mut(&mut self, record: usize) -> &mut [u16] {
    let start = record * self.layout.stride;
    &mut self.data[start .. start + self.layout.stride]
  }

  // Just the probability entries of a record, sentinel included
  pub fn cdf(&self, record: usize) -> &[u16] {
    let n = self.nsymbs(record);
    &self.record(record)[..n]
  }

  pub fn counter(&self, record: usize) -> u16 {
    let n = self.nsymbs(record);
    assert!(n != 0, "record {} is unused", record);
    self.record(record)[n]
  }

  pub fn as_packed(&self) -> &[u16] {
    &self.data
  }

  pub fn as_packed_mut(&mut self) -> &mut [u16] {
    &mut self.data
  }

  pub fn fill_uniform(&mut self) {
    for r in 0..self.records() {
      let n = self.nsymbs(r);
      let rec = self.record_mut(r);
      rec.fill(0);
      if n != 0 {
        uniform_cdf(rec, n);
      }
    }
  }

  // Check every record against the layout. Returns the first bad slot index
  pub fn validate(&self) -> Result<(), usize> {
    let stride = self.layout.stride;
    for r in 0..self.records() {
      let n = self.nsymbs(r);
      let rec = self.record(r);
      let base = r * stride;
      if n == 0 {
        if let Some(pos) = rec.iter().position(|&v| v != 0) {
          return Err(base + pos);
        }
        continue;
      }
      if !is_valid_cdf(rec, n) {
        return Err(base);
      }
      // Padding after the counter
      if let Some(pos) = rec[n + 1 ..].iter().position(|&v| v != 0) {
        return Err(base + n + 1 + pos);
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn icdf_is_an_involution() {
    for x in 0..=CDF_PROB_TOP {
      assert_eq!(icdf(icdf(x)), x);
    }
  }

  #[test]
  fn aom_cdf_appends_sentinel_and_counter() {
    let rec: [u16; 5] = aom_cdf(&[11963, 21121, 27719]);
    assert_eq!(rec, [32768 - 11963, 32768 - 21121, 32768 - 27719, 0, 0]);
    assert!(is_valid_cdf(&rec, 4));
  }

  #[test]
  fn uniform_cdf_has_no_empty_symbols() {
    for n in 2..=16 {
      let mut rec = [0u16; 17];
      uniform_cdf(&mut rec, n);
      assert!(is_valid_cdf(&rec, n));
      let total: u32 = (0..n).map(|s| symbol_prob(&rec, s) as u32).sum();
      assert_eq!(total, CDF_PROB_TOP as u32);
    }
  }

  #[test]
  fn rejects_zero_weight_symbol() {
    let rec = [20000, 20000, 0, 0];
    assert!(!is_valid_cdf(&rec, 3));
    assert_eq!(validate_packed(&rec), Err(1));
  }

  #[test]
  fn packed_validation_finds_missing_counter() {
    assert_eq!(validate_packed(&[16384, 0]), Err(1));
    assert_eq!(validate_packed(&[16384, 8192]), Err(0));
    assert_eq!(validate_packed(&[16384, 0, 7, 0, 0, 16384, 0, 0]), Ok(()));
  }

  #[test]
  fn table_validation_checks_unused_records() {
    let layout = CdfLayout::new(3, 4, |i| if i == 1 { 0 } else { 3 });
    let mut table = CdfTable::zeroed(layout);
    table.fill_uniform();
    assert_eq!(table.validate(), Ok(()));
    assert_eq!(table.cdf(1).len(), 0);

    table.record_mut(1)[2] = 5;
    assert_eq!(table.validate(), Err(6));
  }
}
