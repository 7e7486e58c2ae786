// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// Merging of per-tile CDFs back into the frame's context model
//
// Each tile adapts its own copy of the context model. At the end of the frame,
// the tile copies are averaged (in forward CDF form) to produce the model used
// by the next frame, and all adaptation counters are reset.
//
// Only a single tile is supported for now. The arithmetic below is written for
// any number of tiles, but the public entry points insist on exactly one.

use log::trace;

use crate::cdf::*;
use crate::error::{ModelError, Result};
use crate::frame_context::*;

pub fn check_tile_count(num_tiles: usize) -> Result<()> {
  if num_tiles != 1 {
    return Err(ModelError::UnsupportedTileCount(num_tiles));
  }
  Ok(())
}

// Tiles and frame must share one configuration, or their tables won't line up
pub fn check_tile_configs(fc: &ContextModel, tiles: &[ContextModel]) -> Result<()> {
  for tile in tiles {
    if tile.config() != fc.config() {
      return Err(ModelError::ConfigMismatch {
        what: "tile",
        expected: *fc.config(),
        found: *tile.config()
      });
    }
  }
  Ok(())
}

// Mean of slot `i` across all sources. The mean is taken of the forward CDF
// values and rounds down
fn average_slot(sources: &[&[u16]], i: usize) -> u16 {
  let sum: u32 = sources.iter().map(|s| icdf(s[i]) as u32).sum();
  icdf((sum / sources.len() as u32) as u16)
}

// Walk a packed buffer, finding each record by its sentinel. Returns nothing;
// `dest` ends up with one averaged record for every record in the sources,
// a zero counter after each one, and zeros wherever sources[0] is padded
fn average_packed(sources: &[&[u16]], dest: &mut [u16]) {
  assert!(!sources.is_empty());
  let len = dest.len();
  for s in sources {
    assert_eq!(s.len(), len, "source and destination CDF buffers differ in size");
  }

  let mut i = 0;
  while i < len {
    loop {
      assert!(i < len, "CDF record at the end of the buffer has no sentinel");
      dest[i] = average_slot(sources, i);
      i += 1;
      if dest[i - 1] == icdf(CDF_PROB_TOP) {
        break;
      }
    }
    // Zero symbol counts for the next frame
    assert!(i < len, "CDF record at the end of the buffer has no counter");
    dest[i] = 0;
    i += 1;
    // Skip padding until the start of the next record
    while i < len && sources[0][i] == 0 {
      dest[i] = 0;
      i += 1;
    }
  }
}

// Average one packed CDF buffer from each tile into `dest`
pub fn average_cdf(sources: &[&[u16]], dest: &mut [u16]) {
  assert!(sources.len() == 1, "averaging across {} tiles is not supported", sources.len());
  for s in sources {
    if let Err(offset) = validate_packed(s) {
      panic!("malformed CDF record at slot {}", offset);
    }
  }
  average_packed(sources, dest);
}

impl CdfTable {
  // Same arithmetic as average_cdf(), but finding records through the layout
  // rather than by scanning for sentinels
  pub fn average_from(&mut self, sources: &[&CdfTable]) {
    assert!(!sources.is_empty());
    for s in sources {
      assert!(s.layout() == self.layout(), "tile CDF table has a different layout");
    }
    let packed: Vec<&[u16]> = sources.iter().map(|s| s.as_packed()).collect();

    let stride = self.layout().stride();
    for r in 0..self.records() {
      let n = self.nsymbs(r);
      let start = r * stride;
      let data = self.as_packed_mut();
      for i in start .. start + n {
        data[i] = average_slot(&packed, i);
      }
      debug_assert!(n == 0 || data[start + n - 1] == icdf(CDF_PROB_TOP));
      data[start + n .. start + stride].fill(0);
    }
  }
}

fn average_fields<P: Fn(CdfField) -> bool>(fc: &mut ContextModel, tiles: &[ContextModel], wanted: P) {
  assert!(tiles.len() == 1, "averaging across {} tiles is not supported", tiles.len());
  for tile in tiles {
    assert!(tile.config() == fc.config(), "tile context model was built with a different configuration");
  }

  for field in CdfField::ALL {
    if !wanted(field) {
      continue;
    }
    let Some(dest) = fc.table_mut(field) else {
      continue;
    };
    let sources: Vec<&CdfTable> = tiles.iter().filter_map(|t| t.table(field)).collect();
    trace!("Averaging {} ({} records) across {} tiles", field, dest.records(), sources.len());
    dest.average_from(&sources);
  }
}

pub fn average_tile_coef_cdfs(fc: &mut ContextModel, tiles: &[ContextModel]) {
  average_fields(fc, tiles, |f| f.group() == CdfGroup::Coefficients);
}

pub fn average_tile_mv_cdfs(fc: &mut ContextModel, tiles: &[ContextModel]) {
  average_fields(fc, tiles, |f| f.group() == CdfGroup::MotionVectors);
}

pub fn average_tile_intra_cdfs(fc: &mut ContextModel, tiles: &[ContextModel]) {
  average_fields(fc, tiles, |f| f.group() == CdfGroup::Intra);
}

// The interpolation filter CDFs are only used, and so only merged, when the
// frame header selects a switchable filter
pub fn average_tile_inter_cdfs(fc: &mut ContextModel, tiles: &[ContextModel], switchable_interp: bool) {
  average_fields(fc, tiles, |f| {
    f.group() == CdfGroup::Inter && (switchable_interp || f != CdfField::SwitchableInterp)
  });
}

pub fn average_tile_loopfilter_cdfs(fc: &mut ContextModel, tiles: &[ContextModel]) {
  average_fields(fc, tiles, |f| f.group() == CdfGroup::LoopFilter);
}

pub fn average_tile_cdfs(fc: &mut ContextModel, tiles: &[ContextModel], switchable_interp: bool) {
  average_tile_coef_cdfs(fc, tiles);
  average_tile_mv_cdfs(fc, tiles);
  average_tile_intra_cdfs(fc, tiles);
  average_tile_inter_cdfs(fc, tiles, switchable_interp);
  average_tile_loopfilter_cdfs(fc, tiles);
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::consts::*;

  // Two records, of 4 and 8 symbols, in a table with stride 10
  fn mixed_table(fwd4: [u16; 3], fwd8: [u16; 7], counters: [u16; 2]) -> CdfTable {
    let layout = CdfLayout::new(2, 10, |i| if i == 0 { 4 } else { 8 });
    let mut table = CdfTable::zeroed(layout);
    let a: [u16; 10] = aom_cdf(&fwd4);
    let b: [u16; 10] = aom_cdf(&fwd8);
    table.record_mut(0).copy_from_slice(&a);
    table.record_mut(1).copy_from_slice(&b);
    table.record_mut(0)[4] = counters[0];
    table.record_mut(1)[8] = counters[1];
    table
  }

  #[test]
  fn single_source_is_identity_apart_from_counters() {
    let src = mixed_table([8000, 16000, 24000], [4000, 8000, 12000, 16000, 20000, 24000, 28000], [17, 3]);
    let mut dest = vec![0xffff; src.as_packed().len()];
    average_cdf(&[src.as_packed()], &mut dest);

    let mut expected = src.clone();
    expected.record_mut(0)[4] = 0;
    expected.record_mut(1)[8] = 0;
    assert_eq!(&dest[..], expected.as_packed());
  }

  #[test]
  #[should_panic]
  fn zero_weight_symbol_is_rejected() {
    let mut src = mixed_table([8000, 16000, 24000], [4000, 8000, 12000, 16000, 20000, 24000, 28000], [0, 0]);
    // Symbol 2 of the first record gets no probability
    let rec = src.record_mut(0);
    rec[2] = rec[1];
    let mut dest = vec![0; src.as_packed().len()];
    average_cdf(&[src.as_packed()], &mut dest);
  }

  #[test]
  #[should_panic]
  fn sentinel_without_counter_is_rejected() {
    let src = [icdf(8000), icdf(16000), icdf(24000), icdf(CDF_PROB_TOP)];
    let mut dest = [0; 4];
    average_cdf(&[&src[..]], &mut dest);
  }

  #[test]
  fn walk_finds_record_boundaries() {
    let tiles = [
      mixed_table([8000, 16000, 24000], [4000, 8000, 12000, 16000, 20000, 24000, 28000], [5, 9]),
      mixed_table([8001, 16100, 25000], [1000, 2000, 3000, 4000, 5000, 6000, 7000], [1, 0]),
      mixed_table([9000, 17000, 30000], [30000, 30001, 30002, 30003, 30004, 30005, 30006], [0, 31]),
    ];
    let packed: Vec<&[u16]> = tiles.iter().map(|t| t.as_packed()).collect();

    let mut walked = vec![0; packed[0].len()];
    average_packed(&packed, &mut walked);

    let mut structured = tiles[0].clone();
    let refs: Vec<&CdfTable> = tiles.iter().collect();
    structured.average_from(&refs);

    assert_eq!(&walked[..], structured.as_packed());
    assert_eq!(structured.counter(0), 0);
    assert_eq!(structured.counter(1), 0);
    // (8000 + 8001 + 9000) / 3, rounded down
    assert_eq!(icdf(structured.cdf(0)[0]), 8333);
    assert_eq!(icdf(structured.cdf(1)[6]), (28000 + 7000 + 30006) / 3);
    structured.validate().unwrap();
  }

  #[test]
  fn identical_copies_average_to_themselves() {
    let model = ContextModel::with_defaults(FeatureConfig::all(), 77);
    for (_, table) in model.tables() {
      let copies = [table.as_packed(); 4];
      let mut dest = vec![0; table.as_packed().len()];
      average_packed(&copies, &mut dest);
      assert_eq!(&dest[..], table.as_packed());
    }
  }

  #[test]
  fn mean_rounds_down() {
    let a: [u16; 3] = aom_cdf(&[10001]);
    let b: [u16; 3] = aom_cdf(&[10002]);
    let mut dest = [0; 3];
    average_packed(&[&a[..], &b[..]], &mut dest);
    assert_eq!(dest, aom_cdf::<3>(&[10001]));
  }

  #[test]
  #[should_panic]
  fn more_than_one_tile_is_rejected() {
    let a: [u16; 3] = aom_cdf(&[10001]);
    let mut dest = [0; 3];
    average_cdf(&[&a[..], &a[..]], &mut dest);
  }

  #[test]
  fn tile_count_check() {
    assert!(check_tile_count(1).is_ok());
    assert!(matches!(check_tile_count(0), Err(ModelError::UnsupportedTileCount(0))));
    assert!(matches!(check_tile_count(4), Err(ModelError::UnsupportedTileCount(4))));
  }

  // A tile model whose CDFs have drifted away from `base` and whose counters are set
  fn adapted(base: &ContextModel) -> ContextModel {
    let mut tile = base.clone();
    for field in CdfField::ALL {
      if let Some(table) = tile.table_mut(field) {
        for r in 0..table.records() {
          let n = table.nsymbs(r);
          if n == 0 {
            continue;
          }
          let rec = table.record_mut(r);
          // Move a little weight from the second symbol onto the first
          if rec[0] - rec[1] > 2 {
            rec[0] -= 1;
          }
          rec[n] = 20;
        }
      }
    }
    tile
  }

  #[test]
  fn full_merge_takes_the_tile_model() {
    let fc_start = ContextModel::with_defaults(FeatureConfig::all(), 40);
    let tile = adapted(&fc_start);
    let mut fc = fc_start.clone();
    average_tile_cdfs(&mut fc, std::slice::from_ref(&tile), true);

    fc.validate().unwrap();
    for (field, table) in fc.tables() {
      let src = tile.table(field).unwrap();
      for r in 0..table.records() {
        assert_eq!(table.cdf(r), src.cdf(r));
        if table.nsymbs(r) != 0 {
          assert_eq!(table.counter(r), 0);
        }
      }
    }
  }

  #[test]
  fn groups_only_touch_their_own_tables() {
    let fc_start = ContextModel::with_defaults(FeatureConfig::all(), 40);
    let tile = adapted(&fc_start);
    let tiles = std::slice::from_ref(&tile);

    let mut fc = fc_start.clone();
    average_tile_mv_cdfs(&mut fc, tiles);
    for (field, table) in fc.tables() {
      let changed = table != fc_start.table(field).unwrap();
      assert_eq!(changed, field.group() == CdfGroup::MotionVectors, "{}", field);
    }

    let mut fc = fc_start.clone();
    average_tile_inter_cdfs(&mut fc, tiles, false);
    assert!(fc.table(CdfField::SwitchableInterp) == fc_start.table(CdfField::SwitchableInterp));
    assert!(fc.table(CdfField::Obmc) != fc_start.table(CdfField::Obmc));

    let mut fc = fc_start.clone();
    average_tile_inter_cdfs(&mut fc, tiles, true);
    assert!(fc.table(CdfField::SwitchableInterp) != fc_start.table(CdfField::SwitchableInterp));
  }

  #[test]
  fn coefficient_tails_are_merged_not_rebuilt() {
    let fc_start = ContextModel::with_defaults(FeatureConfig::default(), 0);
    let mut tile = fc_start.clone();
    let rec = tile.table_mut(CdfField::CoefTail).unwrap().record_mut(COEFF_CONTEXTS);
    let k = (1..TAIL_TOKENS - 1).find(|&k| rec[k - 1] - rec[k] > 1).unwrap();
    rec[k] += 1;
    let mut fc = fc_start.clone();
    average_tile_coef_cdfs(&mut fc, std::slice::from_ref(&tile));
    assert_eq!(fc.table(CdfField::CoefTail), tile.table(CdfField::CoefTail));
  }

  #[test]
  fn configuration_check() {
    let fc = ContextModel::new(FeatureConfig::default());
    let tile = ContextModel::new(FeatureConfig { cfl: true, ..Default::default() });
    assert!(check_tile_configs(&fc, std::slice::from_ref(&fc)).is_ok());
    let err = check_tile_configs(&fc, &[tile]).unwrap_err();
    assert!(matches!(err, ModelError::ConfigMismatch { what: "tile", .. }));
  }

  #[test]
  #[should_panic]
  fn mismatched_configurations_are_rejected() {
    let mut fc = ContextModel::new(FeatureConfig::default());
    let tile = ContextModel::new(FeatureConfig { cfl: true, ..Default::default() });
    average_tile_intra_cdfs(&mut fc, &[tile]);
  }
}
