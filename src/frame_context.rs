// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// The full set of adaptive CDFs carried from frame to frame.
//
// Rather than one struct field per table, each table is named by a `CdfField`,
// and the layout of every table (number of records, stride, alphabet size of
// each record) is described by `CdfField::layout()`. Which tables exist at all
// is decided once, from the `FeatureConfig`, when the model is constructed.

use std::fmt;

use crate::cdf::*;
use crate::consts::*;
use crate::enums::*;
use crate::error::{ModelError, Result};

// Optional coding tools which change the shape of the context model
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeatureConfig {
  pub tx64: bool,
  pub loop_restoration: bool,
  pub ext_comp_refs: bool,
  pub ext_delta_q: bool,
  pub loopfilter_level: bool,
  pub cfl: bool,
  pub filter_intra: bool,
  pub ext_intra_mod: bool,
  pub spatial_segmentation: bool,
  pub jnt_comp: bool,
}

impl FeatureConfig {
  const NUM_FLAGS: u32 = 10;

  pub fn all() -> Self {
    Self {
      tx64: true,
      loop_restoration: true,
      ext_comp_refs: true,
      ext_delta_q: true,
      loopfilter_level: true,
      cfl: true,
      filter_intra: true,
      ext_intra_mod: true,
      spatial_segmentation: true,
      jnt_comp: true
    }
  }

  fn flags(&self) -> [bool; Self::NUM_FLAGS as usize] {
    [
      self.tx64, self.loop_restoration, self.ext_comp_refs, self.ext_delta_q,
      self.loopfilter_level, self.cfl, self.filter_intra, self.ext_intra_mod,
      self.spatial_segmentation, self.jnt_comp
    ]
  }

  // Bit i is set if the i'th flag (in declaration order) is enabled
  pub fn to_bits(&self) -> u64 {
    let mut bits = 0;
    for (i, &f) in self.flags().iter().enumerate() {
      bits |= (f as u64) << i;
    }
    bits
  }

  pub fn from_bits(bits: u64) -> Result<Self> {
    let unknown = bits >> Self::NUM_FLAGS;
    if unknown != 0 {
      return Err(ModelError::UnknownFeatures(unknown << Self::NUM_FLAGS));
    }
    let bit = |i: u32| (bits >> i) & 1 != 0;
    Ok(Self {
      tx64: bit(0),
      loop_restoration: bit(1),
      ext_comp_refs: bit(2),
      ext_delta_q: bit(3),
      loopfilter_level: bit(4),
      cfl: bit(5),
      filter_intra: bit(6),
      ext_intra_mod: bit(7),
      spatial_segmentation: bit(8),
      jnt_comp: bit(9)
    })
  }

  // Number of square transform sizes with their own coefficient model
  pub fn coef_tx_sizes(&self) -> usize {
    if self.tx64 { TX_SIZES_MAX } else { TX_SIZES }
  }
}

// Which statistics a table belongs to. Tile models are merged one group at a time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CdfGroup {
  Coefficients,
  MotionVectors,
  Intra,
  Inter,
  LoopFilter
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CdfField {
  // Coefficients
  CoefHead,
  CoefTail,
  // Motion vectors, flattened as [context][component][...]
  MvJoints,
  MvClasses,
  MvClass0Fp,
  MvFp,
  MvSign,
  MvHp,
  MvClass0Hp,
  MvClass0,
  MvBits,
  // Intra
  TxDepth,
  IntraExtTx,
  InterExtTx,
  SegTree,
  SegPred,
  UvMode,
  CflSign,
  CflAlpha,
  Partition,
  DeltaQ,
  DeltaLf,
  DeltaLfMulti,
  Skip,
  TxfmPartition,
  PaletteYSize,
  PaletteUvSize,
  PaletteYColorIndex,
  PaletteUvColorIndex,
  FilterIntra,
  FilterIntraMode,
  PaletteYMode,
  PaletteUvMode,
  AngleDelta,
  SpatialPredSeg,
  // Inter
  CompInter,
  CompRef,
  CompBwdref,
  SingleRef,
  NewMv,
  ZeroMv,
  RefMv,
  Drl,
  UniCompRef,
  CompRefType,
  InterCompoundMode,
  CompoundType,
  Interintra,
  WedgeInterintra,
  InterintraMode,
  YMode,
  SwitchableInterp,
  IntraInter,
  MotionMode,
  Obmc,
  CompoundIndex,
  // Loop filter
  SwitchableRestore,
  WienerRestore,
  SgrprojRestore,
}

impl CdfField {
  pub const COUNT: usize = 59;

  // Every table, in storage order
  pub const ALL: [CdfField; Self::COUNT] = {
    use CdfField::*;
    [
      CoefHead, CoefTail,
      MvJoints, MvClasses, MvClass0Fp, MvFp, MvSign, MvHp, MvClass0Hp, MvClass0, MvBits,
      TxDepth, IntraExtTx, InterExtTx, SegTree, SegPred, UvMode, CflSign, CflAlpha,
      Partition, DeltaQ, DeltaLf, DeltaLfMulti, Skip, TxfmPartition,
      PaletteYSize, PaletteUvSize, PaletteYColorIndex, PaletteUvColorIndex,
      FilterIntra, FilterIntraMode, PaletteYMode, PaletteUvMode, AngleDelta, SpatialPredSeg,
      CompInter, CompRef, CompBwdref, SingleRef, NewMv, ZeroMv, RefMv, Drl,
      UniCompRef, CompRefType, InterCompoundMode, CompoundType,
      Interintra, WedgeInterintra, InterintraMode, YMode, SwitchableInterp,
      IntraInter, MotionMode, Obmc, CompoundIndex,
      SwitchableRestore, WienerRestore, SgrprojRestore
    ]
  };

  pub fn name(self) -> &'static str {
    use CdfField::*;
    match self {
      CoefHead => "coef_head",
      CoefTail => "coef_tail",
      MvJoints => "mv_joints",
      MvClasses => "mv_classes",
      MvClass0Fp => "mv_class0_fp",
      MvFp => "mv_fp",
      MvSign => "mv_sign",
      MvHp => "mv_hp",
      MvClass0Hp => "mv_class0_hp",
      MvClass0 => "mv_class0",
      MvBits => "mv_bits",
      TxDepth => "tx_size",
      IntraExtTx => "intra_ext_tx",
      InterExtTx => "inter_ext_tx",
      SegTree => "seg_tree",
      SegPred => "seg_pred",
      UvMode => "uv_mode",
      CflSign => "cfl_sign",
      CflAlpha => "cfl_alpha",
      Partition => "partition",
      DeltaQ => "delta_q",
      DeltaLf => "delta_lf",
      DeltaLfMulti => "delta_lf_multi",
      Skip => "skip",
      TxfmPartition => "txfm_partition",
      PaletteYSize => "palette_y_size",
      PaletteUvSize => "palette_uv_size",
      PaletteYColorIndex => "palette_y_color_index",
      PaletteUvColorIndex => "palette_uv_color_index",
      FilterIntra => "filter_intra",
      FilterIntraMode => "filter_intra_mode",
      PaletteYMode => "palette_y_mode",
      PaletteUvMode => "palette_uv_mode",
      AngleDelta => "angle_delta",
      SpatialPredSeg => "spatial_pred_seg",
      CompInter => "comp_inter",
      CompRef => "comp_ref",
      CompBwdref => "comp_bwdref",
      SingleRef => "single_ref",
      NewMv => "newmv",
      ZeroMv => "zeromv",
      RefMv => "refmv",
      Drl => "drl",
      UniCompRef => "uni_comp_ref",
      CompRefType => "comp_ref_type",
      InterCompoundMode => "inter_compound_mode",
      CompoundType => "compound_type",
      Interintra => "interintra",
      WedgeInterintra => "wedge_interintra",
      InterintraMode => "interintra_mode",
      YMode => "y_mode",
      SwitchableInterp => "switchable_interp",
      IntraInter => "intra_inter",
      MotionMode => "motion_mode",
      Obmc => "obmc",
      CompoundIndex => "compound_index",
      SwitchableRestore => "switchable_restore",
      WienerRestore => "wiener_restore",
      SgrprojRestore => "sgrproj_restore",
    }
  }

  pub fn from_name(name: &str) -> Result<Self> {
    Self::ALL.iter()
      .copied()
      .find(|f| f.name() == name)
      .ok_or_else(|| ModelError::UnknownField(name.to_string()))
  }

  pub fn group(self) -> CdfGroup {
    use CdfField::*;
    match self {
      CoefHead | CoefTail => CdfGroup::Coefficients,
      MvJoints | MvClasses | MvClass0Fp | MvFp | MvSign | MvHp | MvClass0Hp |
      MvClass0 | MvBits => CdfGroup::MotionVectors,
      TxDepth | IntraExtTx | InterExtTx | SegTree | SegPred | UvMode | CflSign |
      CflAlpha | Partition | DeltaQ | DeltaLf | DeltaLfMulti | Skip | TxfmPartition |
      PaletteYSize | PaletteUvSize | PaletteYColorIndex | PaletteUvColorIndex |
      FilterIntra | FilterIntraMode | PaletteYMode | PaletteUvMode | AngleDelta |
      SpatialPredSeg => CdfGroup::Intra,
      CompInter | CompRef | CompBwdref | SingleRef | NewMv | ZeroMv | RefMv | Drl |
      UniCompRef | CompRefType | InterCompoundMode | CompoundType | Interintra |
      WedgeInterintra | InterintraMode | YMode | SwitchableInterp | IntraInter |
      MotionMode | Obmc | CompoundIndex => CdfGroup::Inter,
      SwitchableRestore | WienerRestore | SgrprojRestore => CdfGroup::LoopFilter,
    }
  }

  // Layout of this table under the given configuration, or None if the
  // table does not exist
  pub fn layout(self, cfg: &FeatureConfig) -> Option<CdfLayout> {
    use CdfField::*;
    let flat = CdfLayout::uniform;
    let mv_comps = NMV_CONTEXTS * 2;

    let layout = match self {
      CoefHead => {
        let records = cfg.coef_tx_sizes() * PLANE_TYPES * REF_TYPES * COEF_BANDS * COEFF_CONTEXTS;
        CdfLayout::new(records, COEF_CDF_SIZE, |i| {
          let ctx = i % COEFF_CONTEXTS;
          let band = (i / COEFF_CONTEXTS) % COEF_BANDS;
          if ctx >= band_coeff_contexts(band) {
            0
          } else if band == 0 {
            HEAD_TOKENS + 1
          } else {
            HEAD_TOKENS
          }
        })
      },
      CoefTail => {
        let records = cfg.coef_tx_sizes() * PLANE_TYPES * REF_TYPES * COEF_BANDS * COEFF_CONTEXTS;
        CdfLayout::new(records, COEF_CDF_SIZE, |i| {
          let ctx = i % COEFF_CONTEXTS;
          let band = (i / COEFF_CONTEXTS) % COEF_BANDS;
          if ctx < band_coeff_contexts(band) { TAIL_TOKENS } else { 0 }
        })
      },

      MvJoints => flat(NMV_CONTEXTS, MV_JOINTS),
      MvClasses => flat(mv_comps, MV_CLASSES),
      MvClass0Fp => flat(mv_comps * CLASS0_SIZE, MV_FP_SIZE),
      MvFp => flat(mv_comps, MV_FP_SIZE),
      MvSign | MvHp | MvClass0Hp => flat(mv_comps, 2),
      MvClass0 => flat(mv_comps, CLASS0_SIZE),
      MvBits => flat(mv_comps * MV_OFFSET_BITS, 2),

      // The smallest category only has two depths to choose between
      TxDepth => CdfLayout::new(MAX_TX_CATS * TX_SIZE_CONTEXTS, MAX_TX_DEPTH + 2, |i| {
        if i / TX_SIZE_CONTEXTS == 0 { MAX_TX_DEPTH } else { MAX_TX_DEPTH + 1 }
      }),
      IntraExtTx => {
        let per_set = EXT_TX_SIZES * INTRA_MODES;
        CdfLayout::new(EXT_TX_SETS_INTRA * per_set, TX_TYPES + 1, |i| {
          let n = num_ext_tx_set_intra[i / per_set];
          if n > 1 { n } else { 0 }
        })
      },
      InterExtTx => CdfLayout::new(EXT_TX_SETS_INTER * EXT_TX_SIZES, TX_TYPES + 1, |i| {
        let n = num_ext_tx_set_inter[i / EXT_TX_SIZES];
        if n > 1 { n } else { 0 }
      }),
      SegTree => flat(1, MAX_SEGMENTS),
      SegPred => flat(PREDICTION_PROBS, 2),
      UvMode => {
        let n = if cfg.cfl { UV_INTRA_MODES } else { UV_INTRA_MODES - 1 };
        flat(INTRA_MODES, n)
      },
      CflSign if cfg.cfl => flat(1, CFL_JOINT_SIGNS),
      CflAlpha if cfg.cfl => flat(CFL_ALPHA_CONTEXTS, CFL_ALPHABET_SIZE),
      // 8x8 blocks can only use the four basic partition types,
      // and 128x128 blocks cannot be split 4 ways
      Partition => CdfLayout::new(PARTITION_CONTEXTS, EXT_PARTITION_TYPES + 1, |i| {
        match i / PARTITION_PLOFFSET {
          0 => 4,
          4 => EXT_PARTITION_TYPES - 2,
          _ => EXT_PARTITION_TYPES
        }
      }),
      DeltaQ => flat(1, DELTA_Q_PROBS + 1),
      DeltaLf if cfg.ext_delta_q => flat(1, DELTA_LF_PROBS + 1),
      DeltaLfMulti if cfg.ext_delta_q && cfg.loopfilter_level => {
        flat(FRAME_LF_COUNT, DELTA_LF_PROBS + 1)
      },
      Skip => flat(SKIP_CONTEXTS, 2),
      TxfmPartition => flat(TXFM_PARTITION_CONTEXTS, 2),
      PaletteYSize | PaletteUvSize => flat(PALETTE_BLOCK_SIZES, PALETTE_SIZES),
      PaletteYColorIndex | PaletteUvColorIndex => {
        let per_size = PALETTE_COLOR_INDEX_CONTEXTS;
        CdfLayout::new(PALETTE_SIZES * per_size, PALETTE_MAX_SIZE + 1, |i| {
          i / per_size + PALETTE_MIN_SIZE
        })
      },
      FilterIntra if cfg.filter_intra => flat(TX_SIZES_ALL, 2),
      FilterIntraMode if cfg.filter_intra => flat(1, FILTER_INTRA_MODES),
      PaletteYMode => flat(PALETTE_BLOCK_SIZES * PALETTE_Y_MODE_CONTEXTS, 2),
      PaletteUvMode => flat(PALETTE_UV_MODE_CONTEXTS, 2),
      AngleDelta if cfg.ext_intra_mod => flat(DIRECTIONAL_MODES, 2 * MAX_ANGLE_DELTA + 1),
      SpatialPredSeg if cfg.spatial_segmentation => flat(SPATIAL_PREDICTION_PROBS, MAX_SEGMENTS),

      CompInter => flat(COMP_INTER_CONTEXTS, 2),
      CompRef => flat(REF_CONTEXTS * (FWD_REFS - 1), 2),
      CompBwdref => flat(REF_CONTEXTS * (BWD_REFS - 1), 2),
      SingleRef => flat(REF_CONTEXTS * (SINGLE_REFS - 1), 2),
      NewMv => flat(NEWMV_MODE_CONTEXTS, 2),
      ZeroMv => flat(GLOBALMV_MODE_CONTEXTS, 2),
      RefMv => flat(REFMV_MODE_CONTEXTS, 2),
      Drl => flat(DRL_MODE_CONTEXTS, 2),
      UniCompRef if cfg.ext_comp_refs => flat(UNI_COMP_REF_CONTEXTS * (UNIDIR_COMP_REFS - 1), 2),
      CompRefType if cfg.ext_comp_refs => flat(COMP_REF_TYPE_CONTEXTS, 2),
      InterCompoundMode => flat(INTER_MODE_CONTEXTS, INTER_COMPOUND_MODES),
      CompoundType => flat(BLOCK_SIZES_ALL, COMPOUND_TYPES),
      Interintra => flat(BLOCK_SIZE_GROUPS, 2),
      WedgeInterintra => flat(BLOCK_SIZES_ALL, 2),
      InterintraMode => flat(BLOCK_SIZE_GROUPS, INTERINTRA_MODES),
      YMode => flat(BLOCK_SIZE_GROUPS, INTRA_MODES),
      SwitchableInterp => flat(SWITCHABLE_FILTER_CONTEXTS, SWITCHABLE_FILTERS),
      IntraInter => flat(INTRA_INTER_CONTEXTS, 2),
      MotionMode => flat(BLOCK_SIZES_ALL, MOTION_MODES),
      Obmc => flat(BLOCK_SIZES_ALL, 2),
      CompoundIndex if cfg.jnt_comp => flat(COMP_INDEX_CONTEXTS, 2),

      SwitchableRestore if cfg.loop_restoration => flat(1, RESTORE_SWITCHABLE_TYPES),
      WienerRestore | SgrprojRestore if cfg.loop_restoration => flat(1, 2),

      // Everything left over is disabled by the configuration
      _ => return None
    };
    Some(layout)
  }
}

impl fmt::Display for CdfField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

// Index of a coefficient context within the CoefHead / CoefTail tables
pub fn coef_index(tx_size: usize, plane: PlaneType, ref_type: RefType, band: usize, ctx: usize) -> usize {
  assert!(band < COEF_BANDS && ctx < band_coeff_contexts(band));
  let i = tx_size;
  let i = i * PLANE_TYPES + plane as usize;
  let i = i * REF_TYPES + ref_type as usize;
  let i = i * COEF_BANDS + band;
  i * COEFF_CONTEXTS + ctx
}

#[derive(Clone, PartialEq, Eq)]
pub struct ContextModel {
  config: FeatureConfig,
  tables: Vec<Option<CdfTable>>,
}

impl ContextModel {
  // Build a model where every CDF is equiprobable
  pub fn new(config: FeatureConfig) -> Self {
    let tables = CdfField::ALL.iter().map(|f| {
      f.layout(&config).map(|layout| {
        let mut table = CdfTable::zeroed(layout);
        table.fill_uniform();
        table
      })
    }).collect();

    Self {
      config: config,
      tables: tables
    }
  }

  pub fn config(&self) -> &FeatureConfig {
    &self.config
  }

  pub fn has(&self, field: CdfField) -> bool {
    self.tables[field as usize].is_some()
  }

  pub fn table(&self, field: CdfField) -> Option<&CdfTable> {
    self.tables[field as usize].as_ref()
  }

  pub fn table_mut(&mut self, field: CdfField) -> Option<&mut CdfTable> {
    self.tables[field as usize].as_mut()
  }

  // All tables which exist in this model, in storage order
  pub fn tables(&self) -> impl Iterator<Item = (CdfField, &CdfTable)> {
    CdfField::ALL.iter().zip(self.tables.iter())
      .filter_map(|(&f, t)| t.as_ref().map(|t| (f, t)))
  }

  // Coefficient tables are never disabled
  fn coef_table(&self, field: CdfField) -> &CdfTable {
    match self.table(field) {
      Some(t) => t,
      None => unreachable!("coefficient tables are always present")
    }
  }

  fn coef_record(&self, tx_size: TxSize, plane: PlaneType, ref_type: RefType, band: usize, ctx: usize) -> usize {
    let tx = tx_size.sqr() as usize;
    assert!(tx < self.config.coef_tx_sizes(), "no coefficient model for {:?}", tx_size);
    coef_index(tx, plane, ref_type, band, ctx)
  }

  pub fn coef_head_cdf(&self, tx_size: TxSize, plane: PlaneType, ref_type: RefType, band: usize, ctx: usize) -> &[u16] {
    let r = self.coef_record(tx_size, plane, ref_type, band, ctx);
    self.coef_table(CdfField::CoefHead).cdf(r)
  }

  pub fn coef_tail_cdf(&self, tx_size: TxSize, plane: PlaneType, ref_type: RefType, band: usize, ctx: usize) -> &[u16] {
    let r = self.coef_record(tx_size, plane, ref_type, band, ctx);
    self.coef_table(CdfField::CoefTail).cdf(r)
  }

  // Head table for reading, tail table for writing
  pub(crate) fn coef_tables_mut(&mut self) -> (&mut CdfTable, &mut CdfTable) {
    let (head, tail) = self.tables.split_at_mut(CdfField::CoefTail as usize);
    match (head[CdfField::CoefHead as usize].as_mut(), tail[0].as_mut()) {
      (Some(h), Some(t)) => (h, t),
      _ => unreachable!("coefficient tables are always present")
    }
  }

  pub fn validate(&self) -> Result<()> {
    for (field, table) in self.tables() {
      if let Err(offset) = table.validate() {
        return Err(ModelError::MalformedRecord { field: field.name(), offset: offset });
      }
    }
    Ok(())
  }
}

impl fmt::Debug for ContextModel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut s = f.debug_struct("ContextModel");
    s.field("config", &self.config);
    for (field, table) in self.tables() {
      s.field(field.name(), &format_args!("{} records x {}", table.records(), table.layout().stride()));
    }
    s.finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn field_table_is_consistent() {
    for (i, &f) in CdfField::ALL.iter().enumerate() {
      assert_eq!(f as usize, i);
      assert_eq!(CdfField::from_name(f.name()).unwrap(), f);
    }
    assert!(matches!(CdfField::from_name("nope"), Err(ModelError::UnknownField(_))));
  }

  #[test]
  fn feature_bits_round_trip() {
    let cfg = FeatureConfig { cfl: true, jnt_comp: true, ..Default::default() };
    assert_eq!(FeatureConfig::from_bits(cfg.to_bits()).unwrap(), cfg);
    assert_eq!(FeatureConfig::all().to_bits(), 0x3ff);
    assert!(matches!(FeatureConfig::from_bits(1 << 12), Err(ModelError::UnknownFeatures(0x1000))));
  }

  #[test]
  fn features_decide_which_tables_exist() {
    let base = ContextModel::new(FeatureConfig::default());
    assert!(!base.has(CdfField::CflAlpha));
    assert!(!base.has(CdfField::SwitchableRestore));
    assert!(base.has(CdfField::Partition));

    let full = ContextModel::new(FeatureConfig::all());
    for f in CdfField::ALL {
      assert!(full.has(f), "{}", f);
    }

    // 64x64 transforms get a fifth set of coefficient contexts
    let per_tx = PLANE_TYPES * REF_TYPES * COEF_BANDS * COEFF_CONTEXTS;
    assert_eq!(base.table(CdfField::CoefHead).unwrap().records(), TX_SIZES * per_tx);
    assert_eq!(full.table(CdfField::CoefHead).unwrap().records(), TX_SIZES_MAX * per_tx);
  }

  #[test]
  fn uniform_model_is_valid() {
    for cfg in [FeatureConfig::default(), FeatureConfig::all()] {
      let model = ContextModel::new(cfg);
      model.validate().unwrap();
      for (_, table) in model.tables() {
        assert_eq!(validate_packed(table.as_packed()), Ok(()));
      }
    }
  }

  #[test]
  fn variable_alphabet_sizes() {
    let model = ContextModel::new(FeatureConfig::all());
    let partition = model.table(CdfField::Partition).unwrap();
    assert_eq!(partition.nsymbs(0), 4);
    assert_eq!(partition.nsymbs(5), 10);
    assert_eq!(partition.nsymbs(19), 8);

    // Set 0 of the transform types has nothing to code
    let ext_tx = model.table(CdfField::InterExtTx).unwrap();
    assert_eq!(ext_tx.nsymbs(0), 0);
    assert_eq!(ext_tx.nsymbs(EXT_TX_SIZES), 16);

    let colors = model.table(CdfField::PaletteUvColorIndex).unwrap();
    assert_eq!(colors.nsymbs(0), 2);
    assert_eq!(colors.nsymbs(colors.records() - 1), PALETTE_MAX_SIZE);

    let no_cfl = ContextModel::new(FeatureConfig::default());
    assert_eq!(no_cfl.table(CdfField::UvMode).unwrap().nsymbs(0), UV_INTRA_MODES - 1);
    assert_eq!(model.table(CdfField::UvMode).unwrap().nsymbs(0), UV_INTRA_MODES);
  }

  #[test]
  fn coefficient_accessors() {
    let model = ContextModel::new(FeatureConfig::default());
    assert_eq!(model.coef_head_cdf(TxSize::TX_8X8, PlaneType::Y, RefType::Intra, 0, 2).len(), HEAD_TOKENS + 1);
    assert_eq!(model.coef_head_cdf(TxSize::TX_16X8, PlaneType::UV, RefType::Inter, 3, 5).len(), HEAD_TOKENS);
    assert_eq!(model.coef_tail_cdf(TxSize::TX_32X32, PlaneType::UV, RefType::Inter, 5, 5).len(), TAIL_TOKENS);
    assert_eq!(coef_index(0, PlaneType::Y, RefType::Intra, 1, 0), COEFF_CONTEXTS);
  }

  #[test]
  #[should_panic]
  fn no_64x64_model_without_tx64() {
    let model = ContextModel::new(FeatureConfig::default());
    model.coef_head_cdf(TxSize::TX_64X64, PlaneType::Y, RefType::Intra, 1, 0);
  }
}
