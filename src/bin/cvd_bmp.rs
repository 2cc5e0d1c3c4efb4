//! Command line front end: reads a BMP, simulates color vision deficiency on
//! its palette, and writes the result.

use anyhow::Context;
use clap::{ArgAction, Parser};
use cvd_bmp::{bmp, cvd};
use log::LevelFilter;
use std::{fs::File, io::BufReader, path::PathBuf, process::ExitCode};

#[derive(Debug, Parser)]
#[command(version, about = "Simulates color vision deficiency on an 8-bit indexed BMP")]
struct Args {
  /// BMP file to read
  #[arg(short, long, value_name = "INFILE")]
  input: PathBuf,

  /// Where to write the simulated BMP
  #[arg(short, long, value_name = "OUTFILE")]
  output: PathBuf,

  /// Log more (repeat for even more), `RUST_LOG` overrides this
  #[arg(short, long, action = ArgAction::Count)]
  verbose: u8,
}

fn main() -> ExitCode {
  let args = Args::parse();
  let level = match args.verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  env_logger::Builder::new().filter_level(level).parse_default_env().init();

  match run(&args) {
    Ok(()) => {
      println!("Successfully processed BMP file.");
      ExitCode::SUCCESS
    }
    Err(e) => {
      eprintln!("Error: {e:#}");
      ExitCode::FAILURE
    }
  }
}

fn run(args: &Args) -> anyhow::Result<()> {
  let file = File::open(&args.input)
    .with_context(|| format!("can't open input file `{}`", args.input.display()))?;
  let mut bitmap = bmp::decode(&mut BufReader::new(file))
    .with_context(|| format!("can't read a BMP from `{}`", args.input.display()))?;
  log::info!("read {}x{} image from `{}`", bitmap.width(), bitmap.height(), args.input.display());

  cvd::simulate_cvd(&mut bitmap);

  // Encode first so a failure here can't leave a truncated output file.
  let bytes = bmp::encode_to_vec(&bitmap).context("can't encode the simulated image")?;
  std::fs::write(&args.output, &bytes)
    .with_context(|| format!("can't write output file `{}`", args.output.display()))?;
  log::info!("wrote {} bytes to `{}`", bytes.len(), args.output.display());
  Ok(())
}

#[test]
fn test_args_parse() {
  let args = Args::try_parse_from(["cvd_bmp", "-i", "in.bmp", "-o", "out.bmp", "-vv"]).unwrap();
  assert_eq!(args.input, PathBuf::from("in.bmp"));
  assert_eq!(args.output, PathBuf::from("out.bmp"));
  assert_eq!(args.verbose, 2);
  assert!(Args::try_parse_from(["cvd_bmp", "-i", "in.bmp"]).is_err());
  assert!(Args::try_parse_from(["cvd_bmp", "-x", "a", "-i", "b", "-o", "c"]).is_err());
}
