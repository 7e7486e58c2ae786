// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use std::io::Cursor;

use tinyavif_cdf::cdf::*;
use tinyavif_cdf::consts::*;
use tinyavif_cdf::default_coef_cdfs::default_qctx_coef_cdfs;
use tinyavif_cdf::enums::*;
use tinyavif_cdf::model_io::{read_model, write_model};
use tinyavif_cdf::*;

#[test]
fn qindex_130_uses_the_third_set() {
  let model = ContextModel::with_defaults(FeatureConfig::default(), 130);

  let head = model.coef_head_cdf(TxSize::TX_16X16, PlaneType::UV, RefType::Intra, 0, 1);
  assert_eq!(head, &default_qctx_coef_cdfs[2][2][1][0][0][1][..HEAD_TOKENS + 1]);

  // Every populated coefficient record reaches the top of the range
  for field in [CdfField::CoefHead, CdfField::CoefTail] {
    let table = model.table(field).unwrap();
    let mut populated = 0;
    for r in 0..table.records() {
      let n = table.nsymbs(r);
      if n == 0 {
        assert!(table.record(r).iter().all(|&v| v == 0));
        continue;
      }
      populated += 1;
      assert!(is_valid_cdf(table.cdf(r), n), "{} record {}", field, r);
      assert_eq!(icdf(table.cdf(r)[n - 1]), CDF_PROB_TOP);
      assert_eq!(table.counter(r), 0);
    }
    assert_eq!(populated, TX_SIZES * PLANE_TYPES * REF_TYPES * (COEFF_CONTEXTS0 + 5 * COEFF_CONTEXTS));
  }
}

#[test]
fn default_loading_is_idempotent() {
  let cfg = FeatureConfig { tx64: true, cfl: true, ..Default::default() };
  let mut model = ContextModel::with_defaults(cfg, 222);
  let first = model.clone();
  load_default_coef_cdfs(&mut model, 222);
  assert_eq!(model, first);

  // Switching quantizer and back also lands in the same place
  load_default_coef_cdfs(&mut model, 3);
  assert_ne!(model, first);
  load_default_coef_cdfs(&mut model, 250);
  assert_eq!(model, first);
}

#[test]
fn tails_can_be_rebuilt_after_merging() {
  let fc_start = ContextModel::with_defaults(FeatureConfig::default(), 64);
  let mut tile = fc_start.clone();

  // Move most of the ONE + EOB weight onto ZERO, as if the tile had adapted
  let r = tinyavif_cdf::frame_context::coef_index(1, PlaneType::Y, RefType::Inter, 3, 2);
  let head = tile.table_mut(CdfField::CoefHead).unwrap();
  let rec = head.record_mut(r);
  rec[0] = rec[1] + 1;
  rec[HEAD_TOKENS] = 30;

  let mut fc = fc_start.clone();
  average_tile_cdfs(&mut fc, std::slice::from_ref(&tile), true);
  fc.validate().unwrap();
  // Merging carries the tile's tail over unchanged
  assert_eq!(fc.table(CdfField::CoefTail), fc_start.table(CdfField::CoefTail));

  build_coef_tail_cdfs(&mut fc);
  let head = fc.coef_head_cdf(TxSize::TX_8X8, PlaneType::Y, RefType::Inter, 3, 2);
  let tail = fc.coef_tail_cdf(TxSize::TX_8X8, PlaneType::Y, RefType::Inter, 3, 2);
  assert_eq!(tail, &build_tail_cdf(head, false)[..TAIL_TOKENS]);
  fc.validate().unwrap();
}

#[test]
fn single_tile_merge_is_identity() {
  let cfg = FeatureConfig::all();
  let model = ContextModel::with_defaults(cfg, 99);
  let mut fc = ContextModel::new(cfg);
  average_tile_cdfs(&mut fc, std::slice::from_ref(&model), true);
  assert_eq!(fc, model);

  // The packed entry point agrees with the table-driven one
  for (field, table) in model.tables() {
    let mut dest = vec![0u16; table.as_packed().len()];
    average_cdf(&[table.as_packed()], &mut dest);
    assert_eq!(&dest[..], fc.table(field).unwrap().as_packed(), "{}", field);
  }
}

#[test]
#[should_panic]
fn two_tiles_are_a_contract_violation() {
  let model = ContextModel::new(FeatureConfig::default());
  let mut fc = model.clone();
  average_tile_coef_cdfs(&mut fc, &[model.clone(), model]);
}

#[test]
fn model_file_round_trip() {
  let cfg = FeatureConfig { loop_restoration: true, ext_delta_q: true, loopfilter_level: true, ..Default::default() };
  let model = ContextModel::with_defaults(cfg, 17);

  let mut bytes = Vec::new();
  write_model(&mut bytes, &model).unwrap();
  let decoded = read_model(&mut Cursor::new(&bytes)).unwrap();
  assert_eq!(decoded, model);
  assert_eq!(decoded.config(), &cfg);
  assert!(decoded.has(CdfField::DeltaLfMulti));
  assert!(!decoded.has(CdfField::CflSign));
}

#[test]
fn corrupted_model_files_are_errors() {
  let model = ContextModel::with_defaults(FeatureConfig::default(), 17);
  let mut bytes = Vec::new();
  write_model(&mut bytes, &model).unwrap();

  // Flipping any byte of the body must either be caught, or still decode to
  // a model which passes validation
  for pos in (0..bytes.len()).step_by(97) {
    let mut corrupt = bytes.clone();
    corrupt[pos] ^= 0x5a;
    match read_model(&mut Cursor::new(&corrupt)) {
      Ok(m) => m.validate().unwrap(),
      Err(_) => {}
    }
  }

  assert!(matches!(read_model(&mut Cursor::new(&bytes[..10])), Err(ModelError::Io(_))));
  assert!(matches!(read_model(&mut Cursor::new(b"TCDX")), Err(ModelError::BadMagic)));
}

#[test]
fn tile_count_errors_for_callers_that_cannot_panic() {
  assert!(check_tile_count(1).is_ok());
  let err = check_tile_count(3).unwrap_err();
  assert_eq!(err.to_string(), "averaging across 3 tiles is not supported, only 1");
}

#[test]
fn frame_and_tiles_must_share_a_configuration() {
  let fc = ContextModel::with_defaults(FeatureConfig { cfl: true, ..Default::default() }, 40);
  let tile = ContextModel::with_defaults(FeatureConfig::default(), 40);
  assert!(matches!(check_tile_configs(&fc, std::slice::from_ref(&tile)),
                   Err(ModelError::ConfigMismatch { .. })));
  assert!(check_tile_configs(&tile, std::slice::from_ref(&tile)).is_ok());
}
