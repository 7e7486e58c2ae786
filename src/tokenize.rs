// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// Mapping from coefficient values to tokens, and the cost of the extra bits
// which go along with each token.
//
// Values at or above CAT6_MIN_VAL in magnitude are all CATEGORY6_TOKEN; anything
// smaller is looked up in a table built at compile time. In both cases `extra`
// holds the offset from the token's base value, shifted up by one, with the
// sign in the bottom bit.

use log::debug;

use crate::cdf::*;
use crate::consts::*;
use crate::error::{ModelError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenValue {
  pub token: u8,
  pub extra: i32,
}

// Smallest magnitude represented by each token
pub const token_base_val: [i32; ENTROPY_TOKENS] = [
  0, 1, 2, 3, 4, CAT1_MIN_VAL, CAT2_MIN_VAL, CAT3_MIN_VAL, CAT4_MIN_VAL,
  CAT5_MIN_VAL, CAT6_MIN_VAL, 0
];

// Extra-bit CDFs for each category, indexed from CATEGORY1_TOKEN
const cat_cdfs: [&[&[u16]]; 6] = [
  &cat1_cdf, &cat2_cdf, &cat3_cdf, &cat4_cdf, &cat5_cdf, &cat6_cdf
];

const fn magnitude_token(mag: i32) -> u8 {
  let mut token = CATEGORY5_TOKEN;
  while token > ZERO_TOKEN && token_base_val[token as usize] > mag {
    token -= 1;
  }
  token
}

const VALUE_TOKENS: usize = 2 * CAT6_MIN_VAL as usize - 1;

// Entry i describes the value i - (CAT6_MIN_VAL - 1)
const fn build_value_tokens() -> [TokenValue; VALUE_TOKENS] {
  let mut table = [TokenValue { token: ZERO_TOKEN, extra: 0 }; VALUE_TOKENS];
  let mut i = 0;
  while i < VALUE_TOKENS {
    let v = i as i32 - (CAT6_MIN_VAL - 1);
    let mag = if v < 0 { -v } else { v };
    let token = magnitude_token(mag);
    let sign = (v < 0) as i32;
    table[i] = TokenValue {
      token: token,
      extra: ((mag - token_base_val[token as usize]) << 1) | sign
    };
    i += 1;
  }
  table
}

const dct_value_tokens: [TokenValue; VALUE_TOKENS] = build_value_tokens();

// Largest coefficient magnitude which can be coded at any bit depth. Larger
// values have no token, and would overflow the shifted `extra`
pub const MAX_COEFF_MAG: i32 = CAT6_MIN_VAL + (1 << cat6_bits(12)) - 1;

// Panics if |v| > MAX_COEFF_MAG
pub fn get_token_extra(v: i32) -> TokenValue {
  assert!(v.unsigned_abs() <= MAX_COEFF_MAG as u32,
          "coefficient {} is outside the codable range", v);
  if v >= CAT6_MIN_VAL {
    return TokenValue { token: CATEGORY6_TOKEN, extra: 2 * v - 2 * CAT6_MIN_VAL };
  }
  if v <= -CAT6_MIN_VAL {
    return TokenValue { token: CATEGORY6_TOKEN, extra: -2 * v - 2 * CAT6_MIN_VAL + 1 };
  }
  dct_value_tokens[(v + CAT6_MIN_VAL - 1) as usize]
}

pub fn get_token(v: i32) -> u8 {
  if v >= CAT6_MIN_VAL || v <= -CAT6_MIN_VAL {
    return CATEGORY6_TOKEN;
  }
  dct_value_tokens[(v + CAT6_MIN_VAL - 1) as usize].token
}

// Costs are in units of 1/512 bit
pub const COST_PRECISION_BITS: u32 = 9;
pub const SIGN_BIT_COST: i32 = 1 << COST_PRECISION_BITS;

// Cost of coding symbol `s` with an ICDF
pub fn symbol_cost(cdf: &[u16], s: usize) -> i32 {
  let p = symbol_prob(cdf, s) as f64 / CDF_PROB_TOP as f64;
  (-p.log2() * SIGN_BIT_COST as f64).round() as i32
}

// Number of bits coded by one extra-bit CDF
fn chunk_bits(cdf: &[u16]) -> u32 {
  let nsymbs = cdf.len() - 1;
  assert!(nsymbs.is_power_of_two(), "extra-bit CDF with {} symbols", nsymbs);
  nsymbs.trailing_zeros()
}

// Cost of the extra-bit chunks which start at or above `first_bit`, for the
// value `bits` (relative to `first_bit`). Chunks starting at or above `len`
// are never coded
fn chunks_cost(cdfs: &[&[u16]], bits: usize, first_bit: u32, len: u32) -> i32 {
  let mut cost = 0;
  let mut pos = 0;
  for cdf in cdfs {
    let n = chunk_bits(cdf);
    if pos >= first_bit && pos < len {
      let sym = (bits >> (pos - first_bit)) & ((1 << n) - 1);
      cost += symbol_cost(cdf, sym);
    }
    pos += n;
  }
  cost
}

// Total number of cat6 extra bits at a given bit depth
pub const fn cat6_bits(bit_depth: u32) -> u32 {
  bit_depth + 6
}

// Per-token extra-bit cost tables, for one bit depth
#[derive(Clone, Debug)]
pub struct TokenCosts {
  bit_depth: u32,
  // Indexed by [token][extra >> 1]. Empty for CATEGORY6_TOKEN
  extra_costs: Vec<Box<[i32]>>,
  // The low 8 magnitude bits of cat6, plus the sign
  cat6_low: Box<[i32]>,
  // Everything above the low 8 bits
  cat6_high: Box<[i32]>,
}

impl TokenCosts {
  pub fn new(bit_depth: u32) -> Result<Self> {
    if !matches!(bit_depth, 8 | 10 | 12) {
      return Err(ModelError::UnsupportedBitDepth(bit_depth));
    }

    let mut extra_costs = Vec::with_capacity(ENTROPY_TOKENS);
    for token in 0..ENTROPY_TOKENS as u8 {
      let costs: Box<[i32]> = match token {
        ZERO_TOKEN | EOB_TOKEN => vec![0].into_boxed_slice(),
        ONE_TOKEN ..= FOUR_TOKEN => vec![SIGN_BIT_COST].into_boxed_slice(),
        CATEGORY6_TOKEN => Vec::new().into_boxed_slice(),
        _ => {
          let cdfs = cat_cdfs[(token - CATEGORY1_TOKEN) as usize];
          let total_bits: u32 = cdfs.iter().map(|c| chunk_bits(c)).sum();
          (0 .. 1usize << total_bits).map(|m| {
            SIGN_BIT_COST + chunks_cost(cdfs, m, 0, total_bits)
          }).collect()
        }
      };
      extra_costs.push(costs);
    }

    let len = cat6_bits(bit_depth);
    let cat6_low = (0 .. 256).map(|m| {
      SIGN_BIT_COST + chunks_cost(&cat6_cdf, m, 0, 8)
    }).collect();
    let cat6_high = (0 .. 1usize << (len - 8)).map(|m| {
      chunks_cost(&cat6_cdf, m, 8, len)
    }).collect();

    debug!("Built token cost tables for {}-bit video", bit_depth);
    Ok(Self {
      bit_depth: bit_depth,
      extra_costs: extra_costs,
      cat6_low: cat6_low,
      cat6_high: cat6_high
    })
  }

  pub fn bit_depth(&self) -> u32 {
    self.bit_depth
  }

  pub fn cat6_low(&self) -> &[i32] {
    &self.cat6_low
  }

  pub fn cat6_high(&self) -> &[i32] {
    &self.cat6_high
  }

  // Largest magnitude whose cat6 extra bits fit in `bit_depth + 6` bits
  pub fn max_value(&self) -> i32 {
    CAT6_MIN_VAL + (1 << cat6_bits(self.bit_depth)) - 1
  }

  pub fn check_value(&self, v: i32) -> Result<()> {
    if v.unsigned_abs() > self.max_value() as u32 {
      return Err(ModelError::ValueOutOfRange { value: v, bit_depth: self.bit_depth });
    }
    Ok(())
  }

  // Cost of the extra bits (including sign) which follow a token.
  // `extra` must come from a value accepted by check_value()
  pub fn cost(&self, token: u8, extra: i32) -> i32 {
    let extra = extra as usize;
    if token != CATEGORY6_TOKEN {
      return self.extra_costs[token as usize][extra >> 1];
    }
    self.cat6_low[(extra >> 1) & 0xff] + self.cat6_high[extra >> 9]
  }

  pub fn value_cost(&self, v: i32) -> i32 {
    let tv = get_token_extra(v);
    self.cost(tv.token, tv.extra)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn large_values_are_category6() {
    let tv = get_token_extra(3000);
    assert_eq!(tv.token, CATEGORY6_TOKEN);
    assert_eq!(tv.extra, 2 * 3000 - 2 * CAT6_MIN_VAL);

    let tv = get_token_extra(-3000);
    assert_eq!(tv, TokenValue { token: CATEGORY6_TOKEN, extra: 6000 - 2 * CAT6_MIN_VAL + 1 });

    assert_eq!(get_token_extra(CAT6_MIN_VAL), TokenValue { token: CATEGORY6_TOKEN, extra: 0 });
    assert_eq!(get_token_extra(-CAT6_MIN_VAL), TokenValue { token: CATEGORY6_TOKEN, extra: 1 });
  }

  #[test]
  fn small_values_come_from_the_table() {
    assert_eq!(get_token_extra(0), TokenValue { token: ZERO_TOKEN, extra: 0 });
    assert_eq!(get_token_extra(-1), TokenValue { token: ONE_TOKEN, extra: 1 });
    assert_eq!(get_token_extra(4), TokenValue { token: FOUR_TOKEN, extra: 0 });
    assert_eq!(get_token_extra(6), TokenValue { token: CATEGORY1_TOKEN, extra: 2 });
    assert_eq!(get_token_extra(-10), TokenValue { token: CATEGORY2_TOKEN, extra: 7 });
    assert_eq!(get_token_extra(19), TokenValue { token: CATEGORY4_TOKEN, extra: 0 });
    assert_eq!(get_token_extra(-66), TokenValue { token: CATEGORY5_TOKEN, extra: 63 });
  }

  #[test]
  fn table_agrees_with_base_values() {
    for v in -CAT6_MIN_VAL - 5 ..= CAT6_MIN_VAL + 5 {
      let tv = get_token_extra(v);
      assert_eq!(get_token(v), tv.token);
      let mag = token_base_val[tv.token as usize] + (tv.extra >> 1);
      assert_eq!(mag, v.abs());
      assert_eq!(tv.extra & 1, (v < 0) as i32);
    }
  }

  #[test]
  fn largest_codable_value() {
    let tv = get_token_extra(-MAX_COEFF_MAG);
    assert_eq!(tv.token, CATEGORY6_TOKEN);
    assert_eq!(tv.extra >> 1, (1 << cat6_bits(12)) - 1);
  }

  #[test]
  #[should_panic]
  fn huge_values_cannot_be_classified() {
    get_token_extra(i32::MAX);
  }

  #[test]
  #[should_panic]
  fn extra_bit_cdfs_must_code_whole_bits() {
    chunk_bits(&aom_cdf::<4>(&[10000, 20000]));
  }

  #[test]
  fn values_beyond_the_bit_depth_are_rejected() {
    let costs = TokenCosts::new(8).unwrap();
    assert_eq!(costs.max_value(), CAT6_MIN_VAL + (1 << 14) - 1);
    assert!(costs.check_value(costs.max_value()).is_ok());
    assert!(costs.check_value(-costs.max_value()).is_ok());
    assert!(matches!(costs.check_value(100000),
                     Err(ModelError::ValueOutOfRange { value: 100000, bit_depth: 8 })));
    assert!(costs.check_value(-costs.max_value() - 1).is_err());
    assert!(costs.check_value(i32::MIN).is_err());
    assert!(TokenCosts::new(12).unwrap().check_value(100000).is_ok());
  }

  #[test]
  fn unsupported_bit_depth() {
    assert!(matches!(TokenCosts::new(9), Err(ModelError::UnsupportedBitDepth(9))));
    assert!(matches!(TokenCosts::new(16), Err(ModelError::UnsupportedBitDepth(16))));
  }

  #[test]
  fn cat6_table_sizes() {
    for (bd, high) in [(8, 64), (10, 256), (12, 1024)] {
      let costs = TokenCosts::new(bd).unwrap();
      assert_eq!(costs.bit_depth(), bd);
      assert_eq!(costs.cat6_low().len(), 256);
      assert_eq!(costs.cat6_high().len(), high);

      // The largest representable value must stay within the tables
      let max = CAT6_MIN_VAL + (1 << cat6_bits(bd)) - 1;
      assert!(costs.value_cost(max) > 0);
      assert!(costs.value_cost(-max) > 0);
    }
  }

  #[test]
  fn fixed_costs() {
    let costs = TokenCosts::new(8).unwrap();
    assert_eq!(costs.value_cost(0), 0);
    assert_eq!(costs.cost(EOB_TOKEN, 0), 0);
    for v in 1..=4 {
      assert_eq!(costs.value_cost(v), SIGN_BIT_COST);
      assert_eq!(costs.value_cost(-v), SIGN_BIT_COST);
    }
    // The first cat1 value is the more likely one
    assert!(costs.value_cost(5) < costs.value_cost(6));
    assert_eq!(costs.value_cost(100), costs.value_cost(-100));
  }

  // Every table describes a complete code, so 2^-cost summed over all
  // magnitudes should come to one bit (the sign)
  fn kraft_sum<I: Iterator<Item = i32>>(costs: I) -> f64 {
    costs.map(|c| (-(c as f64) / SIGN_BIT_COST as f64).exp2()).sum()
  }

  #[test]
  fn category_costs_are_complete_codes() {
    let costs = TokenCosts::new(12).unwrap();
    for token in CATEGORY1_TOKEN ..= CATEGORY5_TOKEN {
      let sum = kraft_sum(costs.extra_costs[token as usize].iter().copied());
      assert!((sum - 0.5).abs() < 0.01, "token {}: {}", token, sum);
    }
    let low = kraft_sum(costs.cat6_low().iter().copied());
    let high = kraft_sum(costs.cat6_high().iter().copied());
    assert!((low * high - 0.5).abs() < 0.01, "cat6: {}", low * high);
  }

  #[test]
  fn lower_bit_depths_code_fewer_bits() {
    let c8 = TokenCosts::new(8).unwrap();
    let c12 = TokenCosts::new(12).unwrap();
    assert_eq!(c8.cat6_low(), c12.cat6_low());
    // Only the chunks which are actually coded contribute
    assert!(c8.cat6_high()[0] < c12.cat6_high()[0]);
  }
}
