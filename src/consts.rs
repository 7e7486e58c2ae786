// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use crate::cdf::aom_cdf;
use crate::enums::TxSize;

// Coefficient tokens
pub const ZERO_TOKEN: u8 = 0;
pub const ONE_TOKEN: u8 = 1;
pub const TWO_TOKEN: u8 = 2;
pub const THREE_TOKEN: u8 = 3;
pub const FOUR_TOKEN: u8 = 4;
pub const CATEGORY1_TOKEN: u8 = 5;
pub const CATEGORY2_TOKEN: u8 = 6;
pub const CATEGORY3_TOKEN: u8 = 7;
pub const CATEGORY4_TOKEN: u8 = 8;
pub const CATEGORY5_TOKEN: u8 = 9;
pub const CATEGORY6_TOKEN: u8 = 10;
pub const EOB_TOKEN: u8 = 11;
pub const ENTROPY_TOKENS: usize = 12;

// Smallest magnitude represented by each category token
pub const CAT1_MIN_VAL: i32 = 5;
pub const CAT2_MIN_VAL: i32 = 7;
pub const CAT3_MIN_VAL: i32 = 11;
pub const CAT4_MIN_VAL: i32 = 19;
pub const CAT5_MIN_VAL: i32 = 35;
pub const CAT6_MIN_VAL: i32 = 67;

// The token alphabet is split into a "head", coded with per-context adaptive CDFs,
// and a "tail", whose CDFs are derived from the head via the Pareto model.
// Head symbols are ZERO, ONE+EOB, ONE+no EOB, TWO_OR_MORE+EOB, TWO_OR_MORE+no EOB.
// The first band also has a leading "block is all zero" symbol
pub const HEAD_TOKENS: usize = 5;
pub const TAIL_TOKENS: usize = 9;
pub const ONE_TOKEN_EOB: usize = 1;
pub const ONE_TOKEN_NEOB: usize = 2;
pub const TWO_TOKEN_PLUS_EOB: usize = 3;
pub const TWO_TOKEN_PLUS_NEOB: usize = 4;

// Stride of every coefficient CDF record: one slot per token, plus the counter
pub const COEF_CDF_SIZE: usize = ENTROPY_TOKENS + 1;
pub type CoefCdf = [u16; COEF_CDF_SIZE];
pub const ZERO_CDF: CoefCdf = [0; COEF_CDF_SIZE];

// Coefficient context dimensions
pub const TX_SIZES: usize = 4; // 4x4 through 32x32
pub const TX_SIZES_MAX: usize = 5; // plus 64x64
pub const PLANE_TYPES: usize = 2;
pub const REF_TYPES: usize = 2;
pub const COEF_BANDS: usize = 6;
pub const COEFF_CONTEXTS: usize = 6;
pub const COEFF_CONTEXTS0: usize = 3; // band 0 has fewer contexts
pub const TOKEN_CDF_Q_CTXS: usize = 4;
pub const COEFF_PROB_MODELS: usize = 255;

pub const fn band_coeff_contexts(band: usize) -> usize {
  if band == 0 { COEFF_CONTEXTS0 } else { COEFF_CONTEXTS }
}

pub const MAX_TX_SQUARE: usize = 64 * 64;

// Mode info dimensions, used to size the non-coefficient tables
pub const NMV_CONTEXTS: usize = 3;
pub const MV_JOINTS: usize = 4;
pub const MV_CLASSES: usize = 11;
pub const CLASS0_SIZE: usize = 2;
pub const MV_FP_SIZE: usize = 4;
pub const MV_OFFSET_BITS: usize = 10;

pub const MAX_TX_CATS: usize = 4;
pub const MAX_TX_DEPTH: usize = 2;
pub const TX_SIZE_CONTEXTS: usize = 3;
pub const TX_SIZES_ALL: usize = 19;
pub const TX_TYPES: usize = 16;
pub const EXT_TX_SIZES: usize = 4;
pub const EXT_TX_SETS_INTRA: usize = 3;
pub const EXT_TX_SETS_INTER: usize = 4;
// Number of transform types in each set. Set 0 only contains DCT_DCT, so is never coded
pub const num_ext_tx_set_intra: [usize; EXT_TX_SETS_INTRA] = [1, 7, 5];
pub const num_ext_tx_set_inter: [usize; EXT_TX_SETS_INTER] = [1, 16, 12, 2];

pub const INTRA_MODES: usize = 13;
pub const UV_INTRA_MODES: usize = 14; // includes UV_CFL_PRED
pub const DIRECTIONAL_MODES: usize = 8;
pub const MAX_ANGLE_DELTA: usize = 3;
pub const BLOCK_SIZE_GROUPS: usize = 4;
pub const BLOCK_SIZES_ALL: usize = 22;

pub const MAX_SEGMENTS: usize = 8;
pub const PREDICTION_PROBS: usize = 3;
pub const SPATIAL_PREDICTION_PROBS: usize = 3;

pub const CFL_JOINT_SIGNS: usize = 8;
pub const CFL_ALPHA_CONTEXTS: usize = 6;
pub const CFL_ALPHABET_SIZE: usize = 16;

pub const PARTITION_PLOFFSET: usize = 4;
pub const PARTITION_CONTEXTS: usize = 5 * PARTITION_PLOFFSET;
pub const EXT_PARTITION_TYPES: usize = 10;

pub const DELTA_Q_PROBS: usize = 3;
pub const DELTA_LF_PROBS: usize = 3;
pub const FRAME_LF_COUNT: usize = 4;

pub const SKIP_CONTEXTS: usize = 3;
pub const TXFM_PARTITION_CONTEXTS: usize = 21;

pub const PALETTE_BLOCK_SIZES: usize = 7;
pub const PALETTE_SIZES: usize = 7;
pub const PALETTE_MIN_SIZE: usize = 2;
pub const PALETTE_MAX_SIZE: usize = 8;
pub const PALETTE_COLOR_INDEX_CONTEXTS: usize = 5;
pub const PALETTE_Y_MODE_CONTEXTS: usize = 3;
pub const PALETTE_UV_MODE_CONTEXTS: usize = 2;
pub const FILTER_INTRA_MODES: usize = 5;

pub const COMP_INTER_CONTEXTS: usize = 5;
pub const REF_CONTEXTS: usize = 5;
pub const FWD_REFS: usize = 4;
pub const BWD_REFS: usize = 3;
pub const SINGLE_REFS: usize = 7;
pub const UNI_COMP_REF_CONTEXTS: usize = 3;
pub const UNIDIR_COMP_REFS: usize = 4;
pub const COMP_REF_TYPE_CONTEXTS: usize = 5;
pub const NEWMV_MODE_CONTEXTS: usize = 7;
pub const GLOBALMV_MODE_CONTEXTS: usize = 2;
pub const REFMV_MODE_CONTEXTS: usize = 9;
pub const DRL_MODE_CONTEXTS: usize = 3;
pub const INTER_MODE_CONTEXTS: usize = 8;
pub const INTER_COMPOUND_MODES: usize = 8;
pub const COMPOUND_TYPES: usize = 3;
pub const INTERINTRA_MODES: usize = 4;
pub const SWITCHABLE_FILTERS: usize = 3;
pub const SWITCHABLE_FILTER_CONTEXTS: usize = (SWITCHABLE_FILTERS + 1) * 4;
pub const INTRA_INTER_CONTEXTS: usize = 4;
pub const MOTION_MODES: usize = 3;
pub const COMP_INDEX_CONTEXTS: usize = 6;

pub const RESTORE_SWITCHABLE_TYPES: usize = 3;

// Extra bits for the category tokens, coded from LSB to MSB.
// Each category uses one or more CDFs, each of which codes a fixed-size chunk of bits
pub const cat1_cdf0: [u16; 3] = aom_cdf(&[20352]);
pub const cat1_cdf: [&[u16]; 1] = [&cat1_cdf0];

pub const cat2_cdf0: [u16; 5] = aom_cdf(&[11963, 21121, 27719]);
pub const cat2_cdf: [&[u16]; 1] = [&cat2_cdf0];

pub const cat3_cdf0: [u16; 9] = aom_cdf(&[
  7001, 12802, 17911, 22144, 25503, 28286, 30737
]);
pub const cat3_cdf: [&[u16]; 1] = [&cat3_cdf0];

pub const cat4_cdf0: [u16; 17] = aom_cdf(&[
  3934, 7460, 10719, 13640, 16203, 18500, 20624, 22528, 24316, 25919, 27401,
  28729, 29894, 30938, 31903
]);
pub const cat4_cdf: [&[u16]; 1] = [&cat4_cdf0];

pub const cat5_cdf0: [u16; 17] = aom_cdf(&[
  2942, 5794, 8473, 11069, 13469, 15795, 17980, 20097, 21952, 23750, 25439,
  27076, 28589, 30056, 31434
]);
pub const cat5_cdf1: [u16; 3] = aom_cdf(&[23040]);
pub const cat5_cdf: [&[u16]; 2] = [&cat5_cdf0, &cat5_cdf1];

pub const cat6_cdf0: [u16; 17] = aom_cdf(&[
  2382, 4727, 7036, 9309, 11512, 13681, 15816, 17918, 19892, 21835, 23748,
  25632, 27458, 29255, 31024
]);
pub const cat6_cdf1: [u16; 17] = aom_cdf(&[
  9314, 15584, 19741, 22540, 25391, 27310, 28583, 29440, 30493, 31202, 31672,
  31988, 32310, 32527, 32671
]);
pub const cat6_cdf2: [u16; 17] = aom_cdf(&[
  29548, 31129, 31960, 32004, 32473, 32498, 32511, 32512, 32745, 32757, 32763,
  32764, 32765, 32766, 32767
]);
pub const cat6_cdf3: [u16; 17] = aom_cdf(&[
  32006, 32258, 32510, 32512, 32638, 32639, 32640, 32641, 32761, 32762, 32763,
  32764, 32765, 32766, 32767
]);
pub const cat6_cdf4: [u16; 5] = aom_cdf(&[32513, 32641, 32767]);
pub const cat6_cdf: [&[u16]; 5] = [
  &cat6_cdf0, &cat6_cdf1, &cat6_cdf2, &cat6_cdf3, &cat6_cdf4
];

// Total number of cat6 extra bits at 12-bit depth. Lower bit depths drop the top bits
pub const CAT6_BIT_SIZE: u32 = 18;

// Coefficient band of each scan position
pub const coefband_trans_4x4: [u8; 16] = [
  0, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 5, 5, 5,
];

pub const coefband_trans_4x8_8x4: [u8; 32] = [
  0, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4,
  4, 4, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
];

// For 8x8 and up, only the first 22 positions are interesting; everything after
// that is band 5
const COEFBAND_8X8PLUS_HEAD: [u8; 22] = [
  0, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 5,
];

const fn build_coefband_8x8plus() -> [u8; MAX_TX_SQUARE] {
  let mut bands = [5u8; MAX_TX_SQUARE];
  let mut i = 0;
  while i < COEFBAND_8X8PLUS_HEAD.len() {
    bands[i] = COEFBAND_8X8PLUS_HEAD[i];
    i += 1;
  }
  bands
}

pub const coefband_trans_8x8plus: [u8; MAX_TX_SQUARE] = build_coefband_8x8plus();

pub fn get_band_translate(tx_size: TxSize) -> &'static [u8] {
  match tx_size {
    TxSize::TX_4X4 => &coefband_trans_4x4,
    TxSize::TX_4X8 | TxSize::TX_8X4 => &coefband_trans_4x8_8x4,
    _ => &coefband_trans_8x8plus
  }
}

// Energy class of each token, used to derive the band context from already-coded
// neighbouring tokens
pub const pt_energy_class: [u8; ENTROPY_TOKENS] = [
  0, 1, 2, 3, 3, 4, 4, 5, 5, 5, 5, 5
];

pub fn energy_class(token: u8) -> usize {
  pt_energy_class[token as usize] as usize
}

// Band context of a scan position, from the energy of its two neighbours.
// `token_cache` holds the energy class of each already-coded position
pub fn coef_context(token_cache: &[u8], neighbor_a: usize, neighbor_b: usize) -> usize {
  (1 + token_cache[neighbor_a] as usize + token_cache[neighbor_b] as usize) >> 1
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cdf::is_valid_cdf;

  #[test]
  fn extra_bit_cdfs_are_well_formed() {
    let groups: [&[&[u16]]; 6] = [
      &cat1_cdf, &cat2_cdf, &cat3_cdf,
      &cat4_cdf, &cat5_cdf, &cat6_cdf
    ];
    for group in groups {
      for cdf in group {
        assert!(is_valid_cdf(cdf, cdf.len() - 1));
      }
    }
  }

  #[test]
  fn band_tables() {
    assert_eq!(get_band_translate(TxSize::TX_4X4).len(), 16);
    assert_eq!(get_band_translate(TxSize::TX_8X4).len(), 32);
    let big = get_band_translate(TxSize::TX_32X32);
    assert_eq!(&big[..22], &COEFBAND_8X8PLUS_HEAD);
    assert!(big[22..].iter().all(|&b| b == 5));
    assert!(big.iter().all(|&b| (b as usize) < COEF_BANDS));
  }

  #[test]
  fn context_from_neighbour_energy() {
    let cache = [
      energy_class(ZERO_TOKEN) as u8,
      energy_class(TWO_TOKEN) as u8,
      energy_class(CATEGORY6_TOKEN) as u8
    ];
    assert_eq!(coef_context(&cache, 0, 0), 0);
    assert_eq!(coef_context(&cache, 0, 1), 1);
    assert_eq!(coef_context(&cache, 2, 2), 5);
    assert!(coef_context(&cache, 1, 2) < COEFF_CONTEXTS);
  }
}
