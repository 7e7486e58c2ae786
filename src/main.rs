// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use std::path::PathBuf;
use std::process::exit;

use clap::{Args, Parser, Subcommand};
use log::info;

use tinyavif_cdf::cdf::icdf;
use tinyavif_cdf::defaults::coef_cdf_q_ctx;
use tinyavif_cdf::model_io::*;
use tinyavif_cdf::tokenize::*;
use tinyavif_cdf::*;

#[derive(Parser)]
#[command(name = "tinyavif-cdf", about = "Build, merge and inspect AV1 coefficient CDF models")]
struct CommandlineArgs {
  #[command(subcommand)]
  command: Command,
}

#[derive(Args, Clone, Copy, Debug)]
struct FeatureArgs {
  /// Give 64x64 transforms their own coefficient contexts
  #[arg(long)]
  tx64: bool,
  #[arg(long)]
  loop_restoration: bool,
  #[arg(long)]
  ext_comp_refs: bool,
  #[arg(long)]
  ext_delta_q: bool,
  /// Only has an effect together with --ext-delta-q
  #[arg(long)]
  loopfilter_level: bool,
  #[arg(long)]
  cfl: bool,
  #[arg(long)]
  filter_intra: bool,
  #[arg(long)]
  ext_intra_mod: bool,
  #[arg(long)]
  spatial_segmentation: bool,
  #[arg(long)]
  jnt_comp: bool,
  /// Enable all of the above
  #[arg(long)]
  all_features: bool,
}

impl From<FeatureArgs> for FeatureConfig {
  fn from(args: FeatureArgs) -> Self {
    if args.all_features {
      return FeatureConfig::all();
    }
    FeatureConfig {
      tx64: args.tx64,
      loop_restoration: args.loop_restoration,
      ext_comp_refs: args.ext_comp_refs,
      ext_delta_q: args.ext_delta_q,
      loopfilter_level: args.loopfilter_level,
      cfl: args.cfl,
      filter_intra: args.filter_intra,
      ext_intra_mod: args.ext_intra_mod,
      spatial_segmentation: args.spatial_segmentation,
      jnt_comp: args.jnt_comp
    }
  }
}

#[derive(Subcommand)]
enum Command {
  /// Write out the default context model for a quantizer
  Defaults {
    /// Base quantizer index. Valid range is 0-255, inclusive
    #[arg(short, long, default_value_t = 35)]
    qindex: u8,
    #[command(flatten)]
    features: FeatureArgs,
    #[arg(short, long)]
    output: PathBuf,
  },
  /// Merge per-tile context models into one frame model
  Average {
    /// Tile models, as written by `defaults` or by an encoder
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Frame model to merge into [default: the first tile model]
    #[arg(long)]
    frame: Option<PathBuf>,
    /// The frame does not use a switchable interpolation filter
    #[arg(long)]
    fixed_interp: bool,
    #[arg(short, long)]
    output: PathBuf,
  },
  /// Print a summary of a context model
  Inspect {
    input: PathBuf,
    /// Dump every record of one table
    #[arg(long)]
    field: Option<String>,
  },
  /// Show the token, extra bits and extra-bit cost of a coefficient value
  Cost {
    #[arg(allow_hyphen_values = true)]
    value: i32,
    #[arg(long, default_value_t = 8)]
    bit_depth: u32,
  },
}

fn run(command: Command) -> Result<()> {
  match command {
    Command::Defaults { qindex, features, output } => {
      let model = ContextModel::with_defaults(features.into(), qindex as u32);
      info!("Using default coefficient set {} for qindex {}", coef_cdf_q_ctx(qindex as u32), qindex);
      write_model_file(&output, &model)?;
    },

    Command::Average { inputs, frame, fixed_interp, output } => {
      check_tile_count(inputs.len())?;
      let tiles = inputs.iter()
        .map(read_model_file)
        .collect::<Result<Vec<_>>>()?;
      let mut fc = match frame {
        Some(path) => read_model_file(&path)?,
        None => tiles[0].clone()
      };
      check_tile_configs(&fc, &tiles)?;
      average_tile_cdfs(&mut fc, &tiles, !fixed_interp);
      write_model_file(&output, &fc)?;
    },

    Command::Inspect { input, field } => {
      let model = read_model_file(&input)?;
      match field {
        None => print_summary(&model),
        Some(name) => print_table(&model, CdfField::from_name(&name)?)
      }
    },

    Command::Cost { value, bit_depth } => {
      let costs = TokenCosts::new(bit_depth)?;
      costs.check_value(value)?;
      let tv = get_token_extra(value);
      let cost = costs.cost(tv.token, tv.extra);
      println!("value {}: token {}, extra {}, cost {} ({:.3} bits)",
               value, tv.token, tv.extra, cost, cost as f64 / SIGN_BIT_COST as f64);
    }
  }
  Ok(())
}

fn print_summary(model: &ContextModel) {
  println!("{:?}", model.config());
  println!("{:<24} {:<14} {:>8} {:>6} {:>7}", "table", "group", "records", "used", "stride");
  for (field, table) in model.tables() {
    println!("{:<24} {:<14} {:>8} {:>6} {:>7}",
             field.name(), format!("{:?}", field.group()), table.records(),
             table.layout().used_records(), table.layout().stride());
  }
}

fn print_table(model: &ContextModel, field: CdfField) {
  let Some(table) = model.table(field) else {
    println!("{} is not present with {:?}", field, model.config());
    return;
  };
  for r in 0..table.records() {
    if table.nsymbs(r) == 0 {
      continue;
    }
    // Print in forward form, which is easier to read
    let fwd: Vec<u16> = table.cdf(r).iter().map(|&v| icdf(v)).collect();
    println!("{:5}: {:?} count {}", r, fwd, table.counter(r));
  }
}

fn main() {
  env_logger::init();
  let args = CommandlineArgs::parse();

  if let Err(e) = run(args.command) {
    eprintln!("Error: {}", e);
    exit(2);
  }
}
