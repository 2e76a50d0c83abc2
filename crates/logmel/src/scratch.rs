//! Caller-provided scratch memory
//!
//! `process` never allocates. Its four working regions (normalized spectrum,
//! magnitude spectrum, band mantissas, band exponents) are carved in that
//! order out of one caller-owned byte buffer. Each region is preceded by
//! enough padding to reach [`SCRATCH_ALIGN`] from any starting address, so the
//! required size does not depend on where the buffer lives.

use core::mem::{align_of, size_of};

use bytemuck::Pod;
use num_complex::Complex;

/// Alignment of every scratch region, in bytes
pub const SCRATCH_ALIGN: usize = 16;

/// Sizes of the scratch regions for one filterbank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScratchLayout {
    /// Bins in the restricted spectrum
    pub bins: usize,
    /// Number of bands
    pub bands: usize,
}

impl ScratchLayout {
    /// Layout for `bins` restricted bins and `bands` bands
    pub const fn new(bins: usize, bands: usize) -> Self {
        Self { bins, bands }
    }

    /// Bytes of one region holding `len` values of `T`, with worst-case padding
    const fn region<T>(len: usize) -> usize {
        SCRATCH_ALIGN - 1 + len * size_of::<T>()
    }

    /// Total scratch bytes required.
    ///
    /// ```rust
    /// use melfix_logmel::scratch::{ScratchLayout, SCRATCH_ALIGN};
    ///
    /// let layout = ScratchLayout::new(255, 23);
    /// assert_eq!(layout.size(), 4 * (SCRATCH_ALIGN - 1) + 255 * 12 + 23 * 6);
    /// ```
    pub const fn size(&self) -> usize {
        Self::region::<Complex<i32>>(self.bins)
            + Self::region::<i32>(self.bins)
            + Self::region::<i32>(self.bands)
            + Self::region::<i16>(self.bands)
    }
}

/// Bump allocator over a caller-provided byte buffer.
///
/// Hands out aligned, typed, non-overlapping sub-slices that live as long as
/// the buffer borrow.
#[derive(Debug)]
pub struct ScratchArena<'a> {
    buf: &'a mut [u8],
    used: usize,
}

impl<'a> ScratchArena<'a> {
    /// Wrap a scratch buffer
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, used: 0 }
    }

    /// Take the next `len` values of `T`, aligned to [`SCRATCH_ALIGN`].
    ///
    /// Returns `None` if the remaining buffer is too small; the arena is left
    /// unchanged in that case.
    pub fn alloc<T: Pod>(&mut self, len: usize) -> Option<&'a mut [T]> {
        debug_assert!(align_of::<T>() <= SCRATCH_ALIGN);

        let buf = core::mem::take(&mut self.buf);
        let pad = buf.as_ptr().align_offset(SCRATCH_ALIGN);
        let total = len
            .checked_mul(size_of::<T>())
            .and_then(|bytes| bytes.checked_add(pad));

        match total {
            Some(total) if total <= buf.len() => {
                let (head, tail) = buf.split_at_mut(total);
                self.buf = tail;
                self.used += total;
                bytemuck::try_cast_slice_mut(&mut head[pad..]).ok()
            }
            _ => {
                self.buf = buf;
                None
            }
        }
    }

    /// Bytes consumed so far, padding included
    pub fn used(&self) -> usize {
        self.used
    }
}
