// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use thiserror::Error;

use crate::frame_context::FeatureConfig;

#[derive(Debug, Error)]
pub enum ModelError {
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("not a CDF model file")]
  BadMagic,

  #[error("unknown feature bits {0:#x}")]
  UnknownFeatures(u64),

  #[error("{field}: expected {expected} slots, found {found}")]
  LengthMismatch { field: &'static str, expected: usize, found: usize },

  #[error("{field}: malformed CDF record at slot {offset}")]
  MalformedRecord { field: &'static str, offset: usize },

  #[error("averaging across {0} tiles is not supported, only 1")]
  UnsupportedTileCount(usize),

  #[error("unsupported bit depth {0}")]
  UnsupportedBitDepth(u32),

  #[error("coefficient {value} cannot be coded at {bit_depth}-bit depth")]
  ValueOutOfRange { value: i32, bit_depth: u32 },

  #[error("{what} model was built with {found:?}, expected {expected:?}")]
  ConfigMismatch { what: &'static str, expected: FeatureConfig, found: FeatureConfig },

  #[error("no CDF table named '{0}'")]
  UnknownField(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
