#![forbid(unsafe_code)]

//! Provides the heap-allocated indexed image type.

use crate::error::{BmpResult, FormatProblem};
use core::ops::{Index, IndexMut};
use pixel_formats::r8g8b8_Srgb;

/// The number of entries in an 8-bit palette.
pub const PALETTE_CAPACITY: usize = 256;

/// Palette entry that every unpopulated slot holds.
pub const BLACK: r8g8b8_Srgb = r8g8b8_Srgb { r: 0, g: 0, b: 0 };

/// Converts an `(x,y)` position within a given `width` 2D space into a linear
/// index.
///
/// This is how [`Bitmap`] finds a pixel within its index buffer.
#[inline]
#[must_use]
pub const fn xy_width_to_index(x: u32, y: u32, width: u32) -> usize {
  (y as usize) * (width as usize) + (x as usize)
}

/// An 8-bit indexed-color image.
///
/// The palette always has [`PALETTE_CAPACITY`] slots. `colors_used` records
/// how many of them were actually filled in when the image was decoded, any
/// slot past that is [`BLACK`].
///
/// Pixels are addressed by `(x, y)` with `(0, 0)` being the first index of the
/// first row, in whatever row order the source used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
  width: u32,
  height: u32,
  indexes: Vec<u8>,
  /// The color table.
  pub palette: [r8g8b8_Srgb; PALETTE_CAPACITY],
  /// Number of palette entries that were populated from the source.
  pub colors_used: usize,
}
impl Bitmap {
  /// Makes a new bitmap with every index 0 and an all-black palette.
  ///
  /// ## Failure
  /// * [`FormatProblem::DimensionsTooLarge`] if `width * height` doesn't fit
  ///   in a `usize`.
  /// * [`BmpError::AllocationFailure`](crate::BmpError::AllocationFailure) if
  ///   the index buffer can't be allocated.
  #[inline]
  pub fn new(width: u32, height: u32) -> BmpResult<Self> {
    let len = (width as usize)
      .checked_mul(height as usize)
      .ok_or(FormatProblem::DimensionsTooLarge(width, height))?;
    let mut indexes = Vec::new();
    indexes.try_reserve_exact(len)?;
    indexes.resize(len, 0);
    Ok(Self { width, height, indexes, palette: [BLACK; PALETTE_CAPACITY], colors_used: 0 })
  }

  /// Wraps an already filled index buffer of `width * height` entries.
  #[inline]
  pub(crate) fn from_indexes(width: u32, height: u32, indexes: Vec<u8>) -> Self {
    debug_assert_eq!(indexes.len(), xy_width_to_index(0, height, width));
    Self { width, height, indexes, palette: [BLACK; PALETTE_CAPACITY], colors_used: 0 }
  }

  /// Image width in pixels.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  /// Image height in pixels.
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height
  }

  /// Gets the palette index at the position, or `None` if the position is out
  /// of bounds.
  #[inline]
  #[must_use]
  pub fn get(&self, x: u32, y: u32) -> Option<u8> {
    if x < self.width && y < self.height {
      Some(self.indexes[xy_width_to_index(x, y, self.width)])
    } else {
      None
    }
  }

  /// Gets the palette index at the position mutably, or `None` if the
  /// position is out of bounds.
  #[inline]
  #[must_use]
  pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut u8> {
    if x < self.width && y < self.height {
      let i = xy_width_to_index(x, y, self.width);
      Some(&mut self.indexes[i])
    } else {
      None
    }
  }

  /// The `width` indexes of row `y`, or `None` if `y` is out of bounds.
  #[inline]
  #[must_use]
  pub fn row(&self, y: u32) -> Option<&[u8]> {
    (y < self.height).then(|| {
      let start = xy_width_to_index(0, y, self.width);
      &self.indexes[start..start + self.width as usize]
    })
  }

  /// Mutable form of [`row`](Self::row).
  #[inline]
  #[must_use]
  pub fn row_mut(&mut self, y: u32) -> Option<&mut [u8]> {
    if y < self.height {
      let start = xy_width_to_index(0, y, self.width);
      Some(&mut self.indexes[start..start + self.width as usize])
    } else {
      None
    }
  }

  /// The palette color a position resolves to.
  #[inline]
  #[must_use]
  pub fn color_at(&self, x: u32, y: u32) -> Option<r8g8b8_Srgb> {
    self.get(x, y).map(|i| self.palette[usize::from(i)])
  }
}

impl Index<(u32, u32)> for Bitmap {
  type Output = u8;
  #[inline]
  #[track_caller]
  fn index(&self, (x, y): (u32, u32)) -> &u8 {
    assert!(x < self.width && y < self.height, "({x},{y}) is out of bounds");
    &self.indexes[xy_width_to_index(x, y, self.width)]
  }
}
impl IndexMut<(u32, u32)> for Bitmap {
  #[inline]
  #[track_caller]
  fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut u8 {
    assert!(x < self.width && y < self.height, "({x},{y}) is out of bounds");
    &mut self.indexes[xy_width_to_index(x, y, self.width)]
  }
}
