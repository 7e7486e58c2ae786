// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// On-disk form of a context model
//
// Layout:
//   4 bytes    magic, "TCDF"
//   LEB128     feature bits, see FeatureConfig::to_bits()
// then, for each table which exists under those features, in CdfField::ALL order:
//   LEB128     number of u16 slots
//   u16 x n    packed table contents, little-endian
//
// The layout of every table is implied by the feature bits, so the slot count
// only serves as a consistency check.

use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::debug;

use crate::error::{ModelError, Result};
use crate::frame_context::*;
use crate::util::*;

pub const MODEL_MAGIC: &[u8; 4] = b"TCDF";

pub fn write_model<W: Write>(w: &mut W, model: &ContextModel) -> Result<()> {
  w.write_all(MODEL_MAGIC)?;
  write_leb128(w, model.config().to_bits())?;

  for (_, table) in model.tables() {
    let data = table.as_packed();
    write_leb128(w, data.len() as u64)?;
    for &v in data {
      w.write_u16::<LittleEndian>(v)?;
    }
  }
  Ok(())
}

pub fn read_model<R: Read>(r: &mut R) -> Result<ContextModel> {
  let mut magic = [0u8; 4];
  r.read_exact(&mut magic)?;
  if &magic != MODEL_MAGIC {
    return Err(ModelError::BadMagic);
  }

  let config = FeatureConfig::from_bits(read_leb128(r)?)?;
  let mut model = ContextModel::new(config);

  for field in CdfField::ALL {
    let Some(table) = model.table_mut(field) else {
      continue;
    };
    let expected = table.as_packed().len();
    let found = read_leb128(r)? as usize;
    if found != expected {
      return Err(ModelError::LengthMismatch { field: field.name(), expected: expected, found: found });
    }
    r.read_u16_into::<LittleEndian>(table.as_packed_mut())?;
  }

  model.validate()?;
  Ok(model)
}

pub fn write_model_file<P: AsRef<Path>>(path: P, model: &ContextModel) -> Result<()> {
  let mut w = BufWriter::new(File::create(path.as_ref())?);
  write_model(&mut w, model)?;
  w.flush()?;
  debug!("Wrote context model to {}", path.as_ref().display());
  Ok(())
}

pub fn read_model_file<P: AsRef<Path>>(path: P) -> Result<ContextModel> {
  let mut r = BufReader::new(File::open(path.as_ref())?);
  let model = read_model(&mut r)?;
  debug!("Read context model from {}: {:?}", path.as_ref().display(), model.config());
  Ok(model)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Cursor;

  fn encode(model: &ContextModel) -> Vec<u8> {
    let mut buf = Vec::new();
    write_model(&mut buf, model).unwrap();
    buf
  }

  // Offset of the first coefficient head slot, for a model with no features
  // enabled: magic, 1 byte of feature bits, 2 bytes of slot count
  const FIRST_SLOT: usize = 4 + 1 + 2;

  #[test]
  fn round_trip() {
    for cfg in [FeatureConfig::default(), FeatureConfig::all()] {
      let mut model = ContextModel::with_defaults(cfg, 180);
      // Counters are carried through as-is
      model.table_mut(CdfField::Skip).unwrap().record_mut(1)[2] = 9;
      let decoded = read_model(&mut Cursor::new(encode(&model))).unwrap();
      assert_eq!(decoded, model);
    }
  }

  #[test]
  fn rejects_bad_magic() {
    let mut bytes = encode(&ContextModel::new(FeatureConfig::default()));
    bytes[0] = b'X';
    assert!(matches!(read_model(&mut Cursor::new(bytes)), Err(ModelError::BadMagic)));
  }

  #[test]
  fn rejects_truncated_file() {
    let bytes = encode(&ContextModel::new(FeatureConfig::default()));
    let short = &bytes[..bytes.len() - 1];
    assert!(matches!(read_model(&mut Cursor::new(short)), Err(ModelError::Io(_))));
  }

  #[test]
  fn rejects_unknown_features() {
    let mut bytes = MODEL_MAGIC.to_vec();
    write_leb128(&mut bytes, 1 << 20).unwrap();
    assert!(matches!(read_model(&mut Cursor::new(bytes)), Err(ModelError::UnknownFeatures(_))));
  }

  #[test]
  fn rejects_wrong_slot_count() {
    let mut bytes = encode(&ContextModel::new(FeatureConfig::default()));
    // Bump the high byte of the coefficient head slot count
    bytes[FIRST_SLOT - 1] += 1;
    match read_model(&mut Cursor::new(bytes)) {
      Err(ModelError::LengthMismatch { field, expected, found }) => {
        assert_eq!(field, "coef_head");
        assert_eq!(found, expected + 128);
      },
      other => panic!("unexpected result {:?}", other)
    }
  }

  #[test]
  fn rejects_malformed_record() {
    let mut bytes = encode(&ContextModel::with_defaults(FeatureConfig::default(), 0));
    // Give the second symbol of the first CDF zero probability
    bytes[FIRST_SLOT + 2] = bytes[FIRST_SLOT];
    bytes[FIRST_SLOT + 3] = bytes[FIRST_SLOT + 1];
    assert!(matches!(read_model(&mut Cursor::new(bytes)),
                     Err(ModelError::MalformedRecord { field: "coef_head", offset: 0 })));
  }
}
