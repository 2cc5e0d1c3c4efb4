use core::fmt::Write;

/// An array of bytes expected to contain ascii data.
///
/// There's no actual enforced encoding! The `Debug` and `Display` impls will
/// just `as` cast each byte into a character, so non-ascii data is still safe
/// to print, you just might get odd characters.
///
/// BMP files open with a two byte tag that's meant to be read as ascii
/// (`BM`), and wrapping it in this type gives the header structs a readable
/// `Debug` output.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct AsciiArray<const N: usize>(pub [u8; N]);

// Safety: this is a transparent wrapper around a byte array.
unsafe impl<const N: usize> bytemuck::Zeroable for AsciiArray<N> {}
unsafe impl<const N: usize> bytemuck::Pod for AsciiArray<N> {}

impl<const N: usize> Default for AsciiArray<N> {
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self([0; N])
  }
}

impl<const N: usize> core::fmt::Debug for AsciiArray<N> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('\"')?;
    core::fmt::Display::fmt(self, f)?;
    f.write_char('\"')
  }
}
impl<const N: usize> core::fmt::Display for AsciiArray<N> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    self.0.iter().map(|&u| u as char).try_for_each(|ch| f.write_char(ch))
  }
}

impl<const N: usize> From<[u8; N]> for AsciiArray<N> {
  #[inline]
  #[must_use]
  fn from(array: [u8; N]) -> Self {
    Self(array)
  }
}

#[test]
fn test_ascii_array_formatting() {
  let tag = AsciiArray(*b"BM");
  assert_eq!(format!("{tag}"), "BM");
  assert_eq!(format!("{tag:?}"), "\"BM\"");
}
