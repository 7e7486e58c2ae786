// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use tinyavif_cdf::consts::*;
use tinyavif_cdf::tokenize::*;
use tinyavif_cdf::ModelError;

#[test]
fn classify_large_value() {
  assert_eq!(get_token(3000), CATEGORY6_TOKEN);
  assert_eq!(get_token_extra(3000), TokenValue { token: CATEGORY6_TOKEN, extra: 2 * 3000 - 2 * CAT6_MIN_VAL });
}

#[test]
fn tokens_cover_every_magnitude_once() {
  // Walking up through the magnitudes, the token never goes backwards and
  // the offset restarts at zero whenever it changes
  let mut prev = get_token_extra(0);
  for v in 1..200 {
    let tv = get_token_extra(v);
    assert!(tv.token >= prev.token);
    if tv.token == prev.token {
      assert_eq!(tv.extra, prev.extra + 2);
    } else {
      assert_eq!(tv.extra, 0);
    }
    prev = tv;
  }
}

#[test]
fn costs_for_every_bit_depth() {
  for bd in [8, 10, 12] {
    let costs = TokenCosts::new(bd).unwrap();
    // Category tokens carry at least the sign bit on top of their magnitude bits
    for v in [CAT1_MIN_VAL, CAT3_MIN_VAL, CAT5_MIN_VAL + 7, CAT6_MIN_VAL, 1000, -1000] {
      assert!(costs.value_cost(v) > SIGN_BIT_COST, "{}-bit, value {}", bd, v);
    }
  }
  assert!(matches!(TokenCosts::new(11), Err(ModelError::UnsupportedBitDepth(11))));
}

#[test]
fn out_of_range_values_are_errors_not_panics() {
  let costs = TokenCosts::new(8).unwrap();
  let err = costs.check_value(100000).unwrap_err();
  assert_eq!(err.to_string(), "coefficient 100000 cannot be coded at 8-bit depth");

  // Everything the check accepts can be costed
  let max = costs.max_value();
  for v in [max, -max, max - 255, CAT6_MIN_VAL + 256] {
    costs.check_value(v).unwrap();
    assert!(costs.value_cost(v) > SIGN_BIT_COST);
  }
  assert!(max <= MAX_COEFF_MAG);
}
