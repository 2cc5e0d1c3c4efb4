#![forbid(unsafe_code)]

//! Color vision deficiency simulation for palettes.
//!
//! Each color is projected onto one of two half-planes of the reduced color
//! space a dichromat can tell apart. Which half-plane applies is decided by
//! comparing two luminance-weighted sums of the color's channels, then that
//! half-plane's 3x3 matrix maps `[r, g, b]` to the simulated color.
//!
//! Only the palette changes, so simulating an indexed image costs 256 small
//! matrix products no matter how big the image is.

use crate::image::Bitmap;
use pixel_formats::r8g8b8_Srgb;

type Mat3 = [[f64; 3]; 3];

/// Weights of the first discriminant, `d1`.
const D1_WEIGHTS: [f64; 3] = [0.00999, 0.0664739, 0.7317];

/// Weights of the second discriminant, `d2`.
const D2_WEIGHTS: [f64; 3] = [0.153384, 0.316624, 0.057134];

/// Used when `d1 < d2`.
#[rustfmt::skip]
const HALF_PLANE_A: Mat3 = [
  [ 0.426331,   0.875102,   0.0801271],
  [ 0.281100,   0.571195,  -0.0392627],
  [-0.0177052,  0.0270084,  1.00247  ],
];

/// Used when `d1 >= d2`.
#[rustfmt::skip]
const HALF_PLANE_B: Mat3 = [
  [ 0.758100,    1.45387,   -1.48060 ],
  [ 0.118532,    0.287595,   0.725501],
  [-0.00746579,  0.0448711,  0.954303],
];

#[inline]
#[must_use]
fn dot(w: [f64; 3], v: [f64; 3]) -> f64 {
  w[0] * v[0] + w[1] * v[1] + w[2] * v[2]
}

/// Rounds half away from zero, then clamps into `0..=255`.
#[inline]
#[must_use]
fn constrain(x: f64) -> u8 {
  // float to int `as` casts saturate, and NaN goes to 0.
  x.round() as u8
}

/// Simulates how a single color is seen.
#[inline]
#[must_use]
pub fn simulate_color(color: r8g8b8_Srgb) -> r8g8b8_Srgb {
  let v = [f64::from(color.r), f64::from(color.g), f64::from(color.b)];
  let m = if dot(D1_WEIGHTS, v) < dot(D2_WEIGHTS, v) { &HALF_PLANE_A } else { &HALF_PLANE_B };
  r8g8b8_Srgb {
    r: constrain(dot(m[0], v)),
    g: constrain(dot(m[1], v)),
    b: constrain(dot(m[2], v)),
  }
}

/// Simulates every color of a palette in place.
#[inline]
pub fn simulate_palette(palette: &mut [r8g8b8_Srgb]) {
  palette.iter_mut().for_each(|c| *c = simulate_color(*c));
}

/// Simulates the whole 256 entry palette of a bitmap in place.
///
/// The pixel indexes and the image dimensions are left alone.
#[inline]
pub fn simulate_cvd(bitmap: &mut Bitmap) {
  log::trace!("simulating color vision deficiency over {} palette entries", bitmap.palette.len());
  simulate_palette(&mut bitmap.palette);
}
