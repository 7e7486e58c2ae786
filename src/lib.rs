// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// Adaptive coefficient-token probability model for AV1:
// default CDF loading, Pareto tail synthesis, cross-tile CDF averaging,
// and token cost tables for rate-distortion decisions.

// Disable name styling checks, so that names can match the AV1 syntax element names
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]

pub mod average;
pub mod cdf;
pub mod consts;
pub mod default_coef_cdfs;
pub mod defaults;
pub mod enums;
pub mod error;
pub mod frame_context;
pub mod model_io;
pub mod pareto;
pub mod tokenize;
pub mod util;

pub use crate::average::*;
pub use crate::defaults::{load_default_coef_cdfs, build_coef_tail_cdfs};
pub use crate::error::{ModelError, Result};
pub use crate::frame_context::{CdfField, CdfGroup, ContextModel, FeatureConfig};
pub use crate::pareto::build_tail_cdf;
pub use crate::tokenize::{get_token, get_token_extra, TokenCosts, TokenValue};
