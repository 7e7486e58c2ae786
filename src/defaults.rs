// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use log::debug;

use crate::consts::*;
use crate::default_coef_cdfs::default_qctx_coef_cdfs;
use crate::enums::*;
use crate::frame_context::*;
use crate::pareto::build_tail_cdf;

// Which of the quantizer-indexed default sets to use
pub fn coef_cdf_q_ctx(base_qindex: u32) -> usize {
  ((base_qindex / 64) as usize).min(TOKEN_CDF_Q_CTXS - 1)
}

// Call `f(record, tx, plane, ref_type, band, ctx)` for every coefficient context which exists
fn for_each_coef_context<F: FnMut(usize, usize, usize, usize, usize, usize)>(tx_sizes: usize, mut f: F) {
  for tx in 0..tx_sizes {
    for plane in PlaneType::ALL {
      for ref_type in RefType::ALL {
        for band in 0..COEF_BANDS {
          for ctx in 0..band_coeff_contexts(band) {
            let r = coef_index(tx, plane, ref_type, band, ctx);
            f(r, tx, plane as usize, ref_type as usize, band, ctx);
          }
        }
      }
    }
  }
}

// Rebuild every tail CDF from the current head CDFs
pub fn build_coef_tail_cdfs(model: &mut ContextModel) {
  let tx_sizes = model.config().coef_tx_sizes();
  let (head, tail) = model.coef_tables_mut();
  for_each_coef_context(tx_sizes, |r, _, _, _, band, _| {
    let cdf = build_tail_cdf(head.record(r), band == 0);
    tail.record_mut(r).copy_from_slice(&cdf);
  });
}

// Reset the coefficient CDFs to the defaults for the given quantizer
pub fn load_default_coef_cdfs(model: &mut ContextModel, base_qindex: u32) {
  let q_ctx = coef_cdf_q_ctx(base_qindex);
  let tx_sizes = model.config().coef_tx_sizes();
  debug!("Loading default coefficient CDFs for qindex {} (set {}, {} transform sizes)",
         base_qindex, q_ctx, tx_sizes);

  let defaults = &default_qctx_coef_cdfs[q_ctx];
  let (head, _) = model.coef_tables_mut();
  for_each_coef_context(tx_sizes, |r, tx, plane, ref_type, band, ctx| {
    // There are no separate defaults for 64x64, so reuse the 32x32 ones
    let src_tx = tx.min(TxSize::TX_32X32 as usize);
    head.record_mut(r).copy_from_slice(&defaults[src_tx][plane][ref_type][band][ctx]);
  });

  build_coef_tail_cdfs(model);
}

impl ContextModel {
  pub fn with_defaults(config: FeatureConfig, base_qindex: u32) -> Self {
    let mut model = Self::new(config);
    load_default_coef_cdfs(&mut model, base_qindex);
    model
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cdf::*;

  #[test]
  fn q_ctx_selection() {
    assert_eq!(coef_cdf_q_ctx(0), 0);
    assert_eq!(coef_cdf_q_ctx(63), 0);
    assert_eq!(coef_cdf_q_ctx(64), 1);
    assert_eq!(coef_cdf_q_ctx(130), 2);
    assert_eq!(coef_cdf_q_ctx(255), 3);
    assert_eq!(coef_cdf_q_ctx(100000), 3);
  }

  #[test]
  fn default_tables_are_well_formed() {
    for set in default_qctx_coef_cdfs.iter() {
      for tx in set.iter() {
        for plane in tx.iter() {
          for rt in plane.iter() {
            for (band, ctxs) in rt.iter().enumerate() {
              let n = if band == 0 { HEAD_TOKENS + 1 } else { HEAD_TOKENS };
              for (ctx, cdf) in ctxs.iter().enumerate() {
                if ctx < band_coeff_contexts(band) {
                  assert!(is_valid_cdf(cdf, n));
                  assert!(cdf[n..].iter().all(|&v| v == 0));
                } else {
                  assert_eq!(*cdf, ZERO_CDF);
                }
              }
            }
          }
        }
      }
    }
  }

  #[test]
  fn heads_come_from_the_selected_set() {
    let model = ContextModel::with_defaults(FeatureConfig::default(), 200);
    let expected = &default_qctx_coef_cdfs[3][1][0][1][2][4];
    let got = model.coef_head_cdf(TxSize::TX_8X16, PlaneType::Y, RefType::Inter, 2, 4);
    assert_eq!(got, &expected[..HEAD_TOKENS]);
  }

  #[test]
  fn tails_follow_heads() {
    let model = ContextModel::with_defaults(FeatureConfig::default(), 10);
    for band in 0..COEF_BANDS {
      for ctx in 0..band_coeff_contexts(band) {
        let head = model.coef_head_cdf(TxSize::TX_4X4, PlaneType::UV, RefType::Intra, band, ctx);
        let tail = model.coef_tail_cdf(TxSize::TX_4X4, PlaneType::UV, RefType::Intra, band, ctx);
        let expected = build_tail_cdf(head, band == 0);
        assert_eq!(tail, &expected[..TAIL_TOKENS]);
      }
    }
  }

  #[test]
  fn tx64_aliases_32x32() {
    let model = ContextModel::with_defaults(FeatureConfig { tx64: true, ..Default::default() }, 90);
    for band in 0..COEF_BANDS {
      for ctx in 0..band_coeff_contexts(band) {
        for plane in PlaneType::ALL {
          for rt in RefType::ALL {
            assert_eq!(model.coef_head_cdf(TxSize::TX_64X64, plane, rt, band, ctx),
                       model.coef_head_cdf(TxSize::TX_32X32, plane, rt, band, ctx));
            assert_eq!(model.coef_tail_cdf(TxSize::TX_64X64, plane, rt, band, ctx),
                       model.coef_tail_cdf(TxSize::TX_32X32, plane, rt, band, ctx));
          }
        }
      }
    }
  }

  #[test]
  fn loading_resets_adapted_state() {
    let mut model = ContextModel::with_defaults(FeatureConfig::default(), 130);
    let fresh = model.clone();

    // Simulate some adaptation: bump a counter and skew a probability
    let head = model.table_mut(CdfField::CoefHead).unwrap();
    head.record_mut(7)[HEAD_TOKENS] = 12;
    head.record_mut(7)[0] -= 100;
    assert_ne!(model, fresh);

    load_default_coef_cdfs(&mut model, 130);
    assert_eq!(model, fresh);
  }
}
