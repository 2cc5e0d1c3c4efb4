use cvd_bmp::{
  bmp::{decode, decode_bytes, encode, encode_to_vec, encoded_size},
  cvd::{simulate_color, simulate_cvd},
  r8g8b8_Srgb, simulate_bmp, Bitmap, BmpError, FormatProblem,
};
use walkdir::WalkDir;

const RED: r8g8b8_Srgb = r8g8b8_Srgb { r: 255, g: 0, b: 0 };
const GREEN: r8g8b8_Srgb = r8g8b8_Srgb { r: 0, g: 255, b: 0 };

#[test]
fn test_two_by_two_end_to_end() {
  let bytes = super::data_file("two_by_two.bmp");
  let mut bitmap = decode_bytes(&bytes).unwrap();
  assert_eq!((bitmap.width(), bitmap.height()), (2, 2));
  assert_eq!(bitmap.colors_used, 2);
  assert_eq!(bitmap.palette[..2], [RED, GREEN]);
  assert_eq!(bitmap.row(0), Some(&[0_u8, 1][..]));
  assert_eq!(bitmap.row(1), Some(&[1_u8, 0][..]));

  simulate_cvd(&mut bitmap);
  // both colors pick the first half-plane, and red's blue channel clamps up
  // from a negative value to 0.
  assert_eq!(bitmap.palette[0], r8g8b8_Srgb { r: 109, g: 72, b: 0 });
  assert_eq!(bitmap.palette[1], r8g8b8_Srgb { r: 223, g: 146, b: 7 });
  assert_eq!(bitmap.palette[2], r8g8b8_Srgb { r: 0, g: 0, b: 0 });
  assert_eq!(bitmap.row(0), Some(&[0_u8, 1][..]));

  let out = encode_to_vec(&bitmap).unwrap();
  assert_eq!(out.len(), 14 + 40 + 1024 + 4 * 2);
  assert_eq!(&out[1078..], &[0, 1, 0, 0, 1, 0, 0, 0]);
}

#[test]
fn test_reencoding_is_stable() {
  for name in ["two_by_two.bmp", "gradient_5x3.bmp"] {
    let original = super::data_file(name);
    let first = encode_to_vec(&decode_bytes(&original).unwrap()).unwrap();
    let second = encode_to_vec(&decode_bytes(&first).unwrap()).unwrap();
    assert_eq!(first, second, "{name}");
    // the canonical form always has the full palette and zeroed padding
    assert_ne!(first, original, "{name}");
  }
}

#[test]
fn test_gradient_pixels_match_file() {
  let bytes = super::data_file("gradient_5x3.bmp");
  let bitmap = decode_bytes(&bytes).unwrap();
  assert_eq!(bitmap.colors_used, 256);
  for y in 0..3_u32 {
    for x in 0..5_u32 {
      assert_eq!(bitmap[(x, y)], bytes[1078 + 8 * y as usize + x as usize], "({x},{y})");
    }
  }
  for (i, c) in bitmap.palette.iter().enumerate() {
    let i = i as u8;
    assert_eq!(*c, r8g8b8_Srgb { r: i, g: 255 - i, b: i.wrapping_mul(37) });
  }
}

#[test]
fn test_hostile_files_are_rejected() {
  use FormatProblem::*;
  let cases = [
    ("hostile_24bpp.bmp", BmpError::InvalidFormat(BitsPerPixel(24))),
    ("hostile_rle8.bmp", BmpError::InvalidFormat(Compression(1))),
    ("hostile_v5_header.bmp", BmpError::InvalidFormat(InfoHeaderSize(124))),
    ("hostile_huge_palette.bmp", BmpError::InvalidFormat(PaletteTooLong(300))),
    ("hostile_truncated.bmp", BmpError::UnexpectedEndOfInput),
    ("hostile_not_a_bmp.bmp", BmpError::InvalidFormat(Signature([0x89, b'P']))),
  ];
  for (name, expected) in cases {
    assert_eq!(decode_bytes(&super::data_file(name)), Err(expected), "{name}");
  }
}

#[test]
fn test_bmps_do_not_panic_decoder() {
  // iter ALL files in the test folder, even non-bmp files shouldn't panic it.
  let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests");
  for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
    if entry.file_type().is_dir() {
      continue;
    }
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    if let Ok(mut bitmap) = decode_bytes(&v) {
      simulate_cvd(&mut bitmap);
      encode_to_vec(&bitmap).unwrap();
    }
  }
  // even totally random data should never panic the decoder!
  for _ in 0..10 {
    let mut v = super::rand_bytes(1024);
    let _ = decode_bytes(&v);
    // and again with a plausible header in front of the noise
    let header = super::data_file("two_by_two.bmp");
    v[..54].copy_from_slice(&header[..54]);
    let _ = decode_bytes(&v);
  }
}

#[test]
fn test_simulate_bmp_writes_nothing_on_failure() {
  let mut out = Vec::new();
  let bad = super::data_file("hostile_truncated.bmp");
  assert_eq!(simulate_bmp(&mut &bad[..], &mut out), Err(BmpError::UnexpectedEndOfInput));
  assert!(out.is_empty());

  let good = super::data_file("two_by_two.bmp");
  simulate_bmp(&mut &good[..], &mut out).unwrap();
  assert_eq!(out.len() as u32, encoded_size(2, 2).unwrap());
  let bitmap = decode_bytes(&out).unwrap();
  assert_eq!(bitmap.palette[0], simulate_color(RED));
  assert_eq!(bitmap.colors_used, 256);
}

#[test]
fn test_stream_decode_and_encode() {
  let bytes = super::data_file("gradient_5x3.bmp");
  let mut reader = std::io::BufReader::new(&bytes[..]);
  let bitmap = decode(&mut reader).unwrap();
  let mut writer = std::io::BufWriter::new(Vec::new());
  encode(&bitmap, &mut writer).unwrap();
  let written = writer.into_inner().unwrap();
  assert_eq!(written, encode_to_vec(&bitmap).unwrap());
}

#[test]
fn test_handmade_bitmap_round_trip() {
  let mut bitmap = Bitmap::new(7, 4).unwrap();
  for y in 0..4 {
    for x in 0..7 {
      bitmap[(x, y)] = (x * 10 + y) as u8;
    }
  }
  for (i, c) in bitmap.palette.iter_mut().enumerate() {
    *c = r8g8b8_Srgb { r: i as u8, g: 0, b: 255 - i as u8 };
  }
  let decoded = decode_bytes(&encode_to_vec(&bitmap).unwrap()).unwrap();
  assert_eq!(decoded.row(3), bitmap.row(3));
  assert_eq!(decoded.palette, bitmap.palette);
  assert_eq!(decoded.colors_used, 256);
}
